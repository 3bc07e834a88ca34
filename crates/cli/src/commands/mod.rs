//! Command implementations for cfgctl CLI

pub mod export;
pub mod games;
pub mod show;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use proconfig_settings::{PlayerProfile, PlayerRecord};
use tracing::debug;

use crate::error::CliError;

/// Load and normalize a player record file; YAML is chosen by `.yaml` / `.yml` extension.
pub fn load_profile(path: &Path) -> Result<PlayerProfile, CliError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CliError::RecordNotFound(path.display().to_string()),
        _ => CliError::IoError(e),
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let record = if is_yaml {
        PlayerRecord::from_yaml_str(&content)?
    } else {
        PlayerRecord::from_json_str(&content)?
    };
    let profile = record.into_profile()?;
    debug!(
        path = %path.display(),
        nickname = %profile.nickname,
        game = %profile.settings.game,
        "Loaded player record"
    );
    Ok(profile)
}
