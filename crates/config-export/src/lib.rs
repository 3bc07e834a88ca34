//! Config exporters for game-specific `.cfg` generation
//!
//! Each supported game has a stateless exporter that renders a [`PlayerSettings`] record into
//! the text dialect its engine reads. Exporters are looked up once per export through
//! [`config_exporter_factories`]; games without an exporter fail with
//! [`ExportError::UnsupportedGame`] instead of producing a partial file.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

mod cs2;
mod dota2;
pub mod format;

use proconfig_settings::{Game, PlayerSettings};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub use cs2::{CS2_BIND_COMMANDS, CS2_DEFAULT_SENSITIVITY, CS2_DEFAULT_ZOOM_RATIO, Cs2ConfigExporter};
pub use dota2::{
    DOTA_ABILITY_KEYS, DOTA_DEFAULT_CAMERA_SPEED, DOTA_ITEM_KEY, DOTA_MINIMAP_HERO_SIZE,
    Dota2ConfigExporter,
};
pub use format::{format_number, format_raw_number};

/// MIME type offered alongside exported configs.
pub const CONFIG_MIME_TYPE: &str = "text/plain";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Config export is not supported for game '{0}'")]
    UnsupportedGame(Game),

    #[error("{exporter} exporter cannot render settings for game '{settings}'")]
    GameMismatch { exporter: Game, settings: Game },
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Config exporter trait for game-specific config generation
pub trait ConfigExporter {
    /// Game this exporter renders configs for
    fn game(&self) -> Game;

    /// Render `settings` into the game's config dialect.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::GameMismatch`] if `settings` belong to another game.
    fn render(&self, nickname: &str, settings: &PlayerSettings) -> ExportResult<String>;
}

/// Factory for constructing config exporter instances.
pub type ConfigExporterFactory = fn() -> Box<dyn ConfigExporter + Send + Sync>;

fn new_cs2_config_exporter() -> Box<dyn ConfigExporter + Send + Sync> {
    Box::new(Cs2ConfigExporter)
}

fn new_dota2_config_exporter() -> Box<dyn ConfigExporter + Send + Sync> {
    Box::new(Dota2ConfigExporter)
}

/// Returns the canonical exporter registry for all games with config export.
pub fn config_exporter_factories() -> &'static [(&'static str, ConfigExporterFactory)] {
    &[
        ("cs2", new_cs2_config_exporter),
        ("dota2", new_dota2_config_exporter),
    ]
}

/// Look up the exporter for `game`.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedGame`] if no exporter is registered for `game`.
pub fn exporter_for(game: &Game) -> ExportResult<Box<dyn ConfigExporter + Send + Sync>> {
    config_exporter_factories()
        .iter()
        .find(|(id, _)| *id == game.id())
        .map(|(_, factory)| factory())
        .ok_or_else(|| ExportError::UnsupportedGame(game.clone()))
}

/// Render the config for `settings.game`.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedGame`] for games outside cs2 and dota2.
pub fn export_config(nickname: &str, settings: &PlayerSettings) -> ExportResult<String> {
    let exporter = exporter_for(&settings.game)?;
    debug!(nickname, game = %settings.game, "Rendering config");
    exporter.render(nickname, settings)
}

/// Rendered config plus the metadata needed to offer it as a download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

/// `{nickname}_{game}.cfg`, with characters that would escape a single path component replaced.
pub fn artifact_file_name(nickname: &str, game: &Game) -> String {
    let safe: String = nickname
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let safe = match safe.as_str() {
        "" | "." | ".." => "player".to_string(),
        _ => safe,
    };
    format!("{safe}_{}.cfg", game.id())
}

/// Render the config and name it for download.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedGame`] for games outside cs2 and dota2.
pub fn export_artifact(nickname: &str, settings: &PlayerSettings) -> ExportResult<ConfigArtifact> {
    let contents = export_config(nickname, settings)?;
    Ok(ConfigArtifact {
        file_name: artifact_file_name(nickname, &settings.game),
        mime_type: CONFIG_MIME_TYPE,
        contents,
    })
}

pub(crate) fn ensure_game(exporter: Game, settings: &PlayerSettings) -> ExportResult<()> {
    if settings.game == exporter {
        Ok(())
    } else {
        Err(ExportError::GameMismatch {
            exporter,
            settings: settings.game.clone(),
        })
    }
}
