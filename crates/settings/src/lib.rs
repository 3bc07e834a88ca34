//! Player settings model for esports config profiles.
//!
//! This crate combines:
//! - The canonical [`PlayerSettings`] record and the [`Game`] it belongs to
//! - The settings resolver (camera speed / sensitivity, eDPI, keybind labels, feature gates)
//! - The boundary adapter that turns a fetched player row into [`PlayerSettings`]

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod game;
pub mod labels;
pub mod record;
pub mod resolver;
pub mod types;

pub use game::{Feature, Game, KNOWN_SHOOTERS};
pub use labels::{bind_label, humanize_key, BindLabel};
pub use record::{PlayerProfile, PlayerRecord, RawSetup, RecordError, RecordResult};
pub use resolver::{
    format_edpi, parse_hertz, resolve, resolve_camera_or_sensitivity, resolve_edpi, supports_feature,
    KeybindRow, ResolvedSettings, DOTA_FRACTIONAL_SCALE, DOTA_FRACTIONAL_THRESHOLD, EDPI_SENTINEL,
};
pub use types::{
    ConfigCommand, CustomBind, Keybinds, PlayerSettings, ResolvedViewmodel, ViewmodelSettings,
    DEFAULT_VIEWMODEL_FOV, DEFAULT_VIEWMODEL_OFFSET_X, DEFAULT_VIEWMODEL_OFFSET_Y, DEFAULT_VIEWMODEL_OFFSET_Z,
};
