//! Config export command

use std::fs;
use std::path::Path;

use anyhow::Result;
use proconfig_config_export::export_artifact;
use tracing::info;

use crate::commands::load_profile;
use crate::error::CliError;
use crate::output;

/// Where the rendered config goes.
///
/// `Stdout` wins over any output directory, including one taken from `CFGCTL_OUT_DIR`.
pub enum Target<'a> {
    Stdout,
    Dir(&'a Path),
}

/// Execute export command
pub fn execute(record: &Path, target: Target<'_>, json: bool) -> Result<()> {
    let profile = load_profile(record)?;
    let artifact =
        export_artifact(&profile.nickname, &profile.settings).map_err(CliError::from)?;

    match target {
        Target::Stdout => output::print_config(&artifact, json)?,
        Target::Dir(dir) => {
            fs::create_dir_all(dir).map_err(CliError::from)?;
            let path = dir.join(&artifact.file_name);
            fs::write(&path, &artifact.contents).map_err(CliError::from)?;
            info!(path = %path.display(), bytes = artifact.contents.len(), "Wrote config");

            output::print_export(&path, &artifact, json);
        }
    }

    Ok(())
}
