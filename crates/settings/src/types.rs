//! Settings type definitions

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::game::Game;

pub const DEFAULT_VIEWMODEL_FOV: f64 = 68.0;
pub const DEFAULT_VIEWMODEL_OFFSET_X: f64 = 2.5;
pub const DEFAULT_VIEWMODEL_OFFSET_Y: f64 = 0.0;
pub const DEFAULT_VIEWMODEL_OFFSET_Z: f64 = -1.5;

/// Canonical action key (`jump`, `primary_weapon`, ...) to physical key label.
///
/// Iteration order is the mapping's own order and is significant for CS2 export.
pub type Keybinds = IndexMap<String, String>;

/// Canonical, read-only settings record for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSettings {
    pub game: Game,
    #[serde(default)]
    pub sensitivity: Option<f64>,
    #[serde(default)]
    pub dpi: Option<u32>,
    #[serde(default)]
    pub zoom_sensitivity: Option<f64>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub scaling_mode: Option<String>,
    /// May carry a unit suffix, e.g. `240Hz`.
    #[serde(default)]
    pub hertz: Option<String>,
    #[serde(default)]
    pub crosshair_code: Option<String>,
    #[serde(default)]
    pub launch_options: Option<String>,
    #[serde(default)]
    pub keybinds: Keybinds,
    #[serde(default)]
    pub custom_binds: Vec<CustomBind>,
    #[serde(default)]
    pub config_commands: Vec<ConfigCommand>,
    /// CS2 only.
    #[serde(default)]
    pub viewmodel_settings: Option<ViewmodelSettings>,
}

impl PlayerSettings {
    /// Empty settings for `game`; every optional field falls back to its default.
    pub fn new(game: Game) -> Self {
        Self {
            game,
            sensitivity: None,
            dpi: None,
            zoom_sensitivity: None,
            resolution: None,
            aspect_ratio: None,
            scaling_mode: None,
            hertz: None,
            crosshair_code: None,
            launch_options: None,
            keybinds: Keybinds::new(),
            custom_binds: Vec::new(),
            config_commands: Vec::new(),
            viewmodel_settings: None,
        }
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = Some(sensitivity);
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    pub fn with_keybind(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.keybinds.insert(key.into(), value.into());
        self
    }

    /// Non-empty (trimmed) key value for a canonical action, if bound.
    pub fn bound_key(&self, canonical_key: &str) -> Option<&str> {
        self.keybinds
            .get(canonical_key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Viewmodel settings with per-field defaults applied.
    pub fn viewmodel_or_default(&self) -> ResolvedViewmodel {
        let partial = self.viewmodel_settings.clone().unwrap_or_default();
        ResolvedViewmodel {
            fov: partial.fov.unwrap_or(DEFAULT_VIEWMODEL_FOV),
            offset_x: partial.offset_x.unwrap_or(DEFAULT_VIEWMODEL_OFFSET_X),
            offset_y: partial.offset_y.unwrap_or(DEFAULT_VIEWMODEL_OFFSET_Y),
            offset_z: partial.offset_z.unwrap_or(DEFAULT_VIEWMODEL_OFFSET_Z),
        }
    }
}

/// Free-form bind appended verbatim to exported configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomBind {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub key: String,
}

/// Engine-agnostic passthrough command, e.g. `fps_max "0"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigCommand {
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub value: String,
}

/// CS2 viewmodel settings as stored; absent fields take defaults at use site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewmodelSettings {
    #[serde(default)]
    pub fov: Option<f64>,
    #[serde(default)]
    pub offset_x: Option<f64>,
    #[serde(default)]
    pub offset_y: Option<f64>,
    #[serde(default)]
    pub offset_z: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedViewmodel {
    pub fov: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub offset_z: f64,
}
