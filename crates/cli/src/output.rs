//! Output formatting for CLI responses

use std::path::Path;

use anyhow::{Error, Result};
use colored::*;
use proconfig_config_export::{ConfigArtifact, format_number, format_raw_number};
use proconfig_settings::{Game, PlayerProfile, ResolvedSettings, format_edpi};
use serde_json::json;

use crate::commands::games::GameInfo;
use crate::error::CliError;

fn error_type_name(error: &Error) -> &'static str {
    error
        .downcast_ref::<CliError>()
        .map_or("error", CliError::type_name)
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    // Print error chain if available
    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print the outcome of a config export
pub fn print_export(path: &Path, artifact: &ConfigArtifact, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "file": path.display().to_string(),
            "file_name": artifact.file_name,
            "mime_type": artifact.mime_type,
            "bytes": artifact.contents.len()
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format export result as JSON: {}", e),
        }
    } else {
        println!(
            "{} Exported {} ({} bytes)",
            "✓".green(),
            path.display().to_string().bold(),
            artifact.contents.len()
        );
    }
}

/// Print a rendered config; in JSON mode it is wrapped with its download metadata
pub fn print_config(artifact: &ConfigArtifact, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "file_name": artifact.file_name,
            "mime_type": artifact.mime_type,
            "bytes": artifact.contents.len(),
            "contents": artifact.contents
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", artifact.contents);
    }
    Ok(())
}

fn print_field(name: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("    {}: {}", name, value);
    }
}

/// Print resolved settings in specified format
pub fn print_resolved(profile: &PlayerProfile, resolved: &ResolvedSettings, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "nickname": profile.nickname,
            "team": profile.team,
            "settings": resolved
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match &profile.team {
        Some(team) => println!(
            "{} ({}) - {}",
            profile.nickname.bold(),
            team,
            resolved.game.display_name()
        ),
        None => println!(
            "{} - {}",
            profile.nickname.bold(),
            resolved.game.display_name()
        ),
    }

    println!("  {}", "Mouse:".bold());
    // Dota camera speed is computed; everything else is shown as stored.
    let sensitivity = resolved.sensitivity.map(|value| {
        if resolved.game == Game::Dota2 {
            format_number(value)
        } else {
            format_raw_number(value)
        }
    });
    print_field(resolved.sensitivity_label, sensitivity.as_deref());
    print_field("DPI", resolved.dpi.map(|dpi| dpi.to_string()).as_deref());
    if resolved.game != Game::Dota2 {
        print_field("eDPI", Some(format_edpi(resolved.edpi).as_str()));
    }
    let zoom = resolved.zoom_sensitivity.map(format_raw_number);
    print_field("Zoom Sensitivity", zoom.as_deref());

    println!("  {}", "Video:".bold());
    print_field("Resolution", resolved.resolution.as_deref());
    print_field("Aspect Ratio", resolved.aspect_ratio.as_deref());
    print_field("Scaling Mode", resolved.scaling_mode.as_deref());
    print_field("Refresh Rate", resolved.hertz.as_deref());

    if let Some(code) = &resolved.crosshair_code {
        println!("  {} {}", "Crosshair:".bold(), code);
    }
    if let Some(options) = resolved.launch_options.as_deref().filter(|o| !o.is_empty()) {
        println!("  {} {}", "Launch Options:".bold(), options);
    }

    if !resolved.keybinds.is_empty() {
        println!("  {}", "Keybinds:".bold());
        for row in &resolved.keybinds {
            println!("    {}: {}", row.label, row.value.cyan());
        }
    }

    if let Some(viewmodel) = &resolved.viewmodel {
        println!("  {}", "Viewmodel:".bold());
        println!(
            "    fov {} / x {} / y {} / z {}",
            format_raw_number(viewmodel.fov),
            format_raw_number(viewmodel.offset_x),
            format_raw_number(viewmodel.offset_y),
            format_raw_number(viewmodel.offset_z)
        );
    }

    if !resolved.custom_binds.is_empty() {
        println!("  {}", "Custom Binds:".bold());
        for bind in &resolved.custom_binds {
            println!("    {}: {}", bind.label, bind.key.cyan());
        }
    }

    if resolved.config_export {
        println!(
            "\n{} Config export available: cfgctl export <record>",
            "●".green()
        );
    } else {
        println!(
            "\n{} Config export not available for {}",
            "●".yellow(),
            resolved.game.display_name()
        );
    }

    Ok(())
}

/// Print known games in specified format
pub fn print_games(games: &[GameInfo], json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "games": games
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", "Known Games:".bold());
        for game in games {
            println!("  {} {} ({})", "●".green(), game.name.bold(), game.id.dimmed());
            if !game.features.is_empty() {
                println!("    Features: {}", game.features.join(", "));
            }
        }
    }
    Ok(())
}
