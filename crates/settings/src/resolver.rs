//! Settings resolver: derived and display values from a [`PlayerSettings`] record.
//!
//! Nothing here mutates the record or fails. Malformed or missing numeric input degrades to
//! `None`, which callers render as [`EDPI_SENTINEL`] or their own "unknown" marker.

use serde::Serialize;

use crate::game::{Feature, Game};
use crate::labels::bind_label;
use crate::types::{ConfigCommand, CustomBind, PlayerSettings, ResolvedViewmodel};

/// Dota 2 sensitivities below this are stored in the fractional unit.
pub const DOTA_FRACTIONAL_THRESHOLD: f64 = 100.0;
pub const DOTA_FRACTIONAL_SCALE: f64 = 1000.0;

/// Rendered in place of an eDPI that cannot be computed.
pub const EDPI_SENTINEL: &str = "—";

/// Camera speed for Dota 2, sensitivity for everything else.
pub fn resolve_camera_or_sensitivity(game: &Game, raw: f64) -> f64 {
    if *game == Game::Dota2 && raw < DOTA_FRACTIONAL_THRESHOLD {
        raw * DOTA_FRACTIONAL_SCALE
    } else {
        raw
    }
}

/// `round(dpi * sensitivity)`, or `None` if either input is missing or not finite.
///
/// Camera speed is not DPI-scaled, so callers gate this by game.
#[allow(clippy::cast_possible_truncation)]
pub fn resolve_edpi(dpi: Option<u32>, sensitivity: Option<f64>) -> Option<i64> {
    let product = f64::from(dpi?) * sensitivity?;
    product.is_finite().then(|| product.round() as i64)
}

pub fn format_edpi(edpi: Option<i64>) -> String {
    edpi.map_or_else(|| EDPI_SENTINEL.to_string(), |value| value.to_string())
}

pub fn supports_feature(game: &Game, feature: Feature) -> bool {
    game.supports(feature)
}

/// Numeric refresh rate from a descriptor such as `240Hz`, `144 hz` or `60`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_hertz(hertz: &str) -> Option<u32> {
    let trimmed = hertz.trim();
    let digits = trimmed
        .strip_suffix("Hz")
        .or_else(|| trimmed.strip_suffix("hz"))
        .or_else(|| trimmed.strip_suffix("HZ"))
        .unwrap_or(trimmed)
        .trim();

    if let Ok(value) = digits.parse::<u32>() {
        return (value > 0).then_some(value);
    }

    let value = digits.parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0 && value <= f64::from(u32::MAX))
        .then(|| value.round() as u32)
}

/// One rendered keybind row of the settings detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeybindRow {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// Canonical per-game view of a settings record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSettings {
    pub game: Game,
    pub sensitivity_label: &'static str,
    pub sensitivity: Option<f64>,
    pub dpi: Option<u32>,
    pub edpi: Option<i64>,
    pub zoom_sensitivity: Option<f64>,
    pub crosshair_code: Option<String>,
    pub resolution: Option<String>,
    pub aspect_ratio: Option<String>,
    pub scaling_mode: Option<String>,
    pub hertz: Option<String>,
    pub refresh_rate_hz: Option<u32>,
    pub launch_options: Option<String>,
    pub keybinds: Vec<KeybindRow>,
    pub custom_binds: Vec<CustomBind>,
    pub config_commands: Vec<ConfigCommand>,
    pub viewmodel: Option<ResolvedViewmodel>,
    pub config_export: bool,
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Build the canonical view of `settings` for its game.
pub fn resolve(settings: &PlayerSettings) -> ResolvedSettings {
    let game = &settings.game;
    let is_dota = *game == Game::Dota2;

    let sensitivity = settings
        .sensitivity
        .filter(|value| value.is_finite())
        .map(|raw| resolve_camera_or_sensitivity(game, raw));

    let edpi = if is_dota {
        None
    } else {
        resolve_edpi(settings.dpi, settings.sensitivity)
    };

    let keybinds = settings
        .keybinds
        .iter()
        .filter_map(|(key, value)| {
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            let label = bind_label(game, key)?;
            Some(KeybindRow {
                key: key.clone(),
                label: label.into_owned(),
                value: value.to_string(),
            })
        })
        .collect();

    ResolvedSettings {
        game: game.clone(),
        sensitivity_label: if is_dota { "Camera Speed" } else { "Sensitivity" },
        sensitivity,
        dpi: settings.dpi,
        edpi,
        zoom_sensitivity: settings
            .zoom_sensitivity
            .filter(|_| game.supports(Feature::ZoomSensitivity)),
        crosshair_code: non_blank(settings.crosshair_code.as_ref())
            .filter(|_| game.supports(Feature::Crosshair)),
        resolution: non_blank(settings.resolution.as_ref()),
        aspect_ratio: non_blank(settings.aspect_ratio.as_ref()),
        scaling_mode: non_blank(settings.scaling_mode.as_ref()),
        hertz: non_blank(settings.hertz.as_ref()),
        refresh_rate_hz: settings.hertz.as_deref().and_then(parse_hertz),
        launch_options: settings.launch_options.clone(),
        keybinds,
        custom_binds: settings.custom_binds.clone(),
        config_commands: settings.config_commands.clone(),
        viewmodel: (*game == Game::Cs2).then(|| settings.viewmodel_or_default()),
        config_export: game.supports(Feature::ConfigExport),
    }
}
