//! cfgctl - esports config profile CLI
//!
//! Loads a player record as fetched from storage, shows the resolved settings, and exports
//! game config files (`{nickname}_{game}.cfg`).

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "cfgctl")]
#[command(about = "Esports config CLI - Inspect player settings and export game configs")]
#[command(version)]
#[command(long_about = "
cfgctl reads a player record (JSON, or YAML by file extension) as returned by the
profile database, resolves it into per-game settings, and exports CS2 / Dota 2
config files.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a game config file for a player record
    Export {
        /// Player record file (.json, .yaml, .yml)
        record: PathBuf,

        /// Directory the config file is written to
        #[arg(short, long, env = "CFGCTL_OUT_DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Print the config to stdout instead of writing a file (overrides --out-dir)
        #[arg(long)]
        stdout: bool,
    },

    /// Show the resolved settings of a player record
    Show {
        /// Player record file (.json, .yaml, .yml)
        record: PathBuf,
    },

    /// List known games and the features they support
    Games,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("cfgctl={log_level},proconfig_settings={log_level},proconfig_config_export={log_level}")
                    .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            ExitCode::from(exit_code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Export {
            record,
            out_dir,
            stdout,
        } => {
            let target = if *stdout {
                commands::export::Target::Stdout
            } else {
                commands::export::Target::Dir(out_dir)
            };
            commands::export::execute(record, target, cli.json)
        }
        Commands::Show { record } => commands::show::execute(record, cli.json),
        Commands::Games => commands::games::execute(cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}
