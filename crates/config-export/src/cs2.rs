//! Counter-Strike 2 exporter.

use proconfig_settings::{Game, PlayerSettings};
use tracing::debug;

use crate::format::CfgLines;
use crate::{ConfigExporter, ExportResult, ensure_game};

/// Engine default, used when the record has no sensitivity.
pub const CS2_DEFAULT_SENSITIVITY: f64 = 1.25;
pub const CS2_DEFAULT_ZOOM_RATIO: f64 = 1.0;

/// Canonical key to console command. Keys missing here are not exported.
pub const CS2_BIND_COMMANDS: &[(&str, &str)] = &[
    ("jump", "+jump"),
    ("crouch", "+duck"),
    ("walk", "+sprint"),
    ("primary_weapon", "slot1"),
    ("secondary_weapon", "slot2"),
    ("knife", "slot3"),
    ("he_grenade", "slot6"),
    ("flashbang", "slot7"),
    ("smoke_grenade", "slot8"),
    ("molotov", "slot10"),
];

fn bind_command(canonical_key: &str) -> Option<&'static str> {
    CS2_BIND_COMMANDS
        .iter()
        .find_map(|(key, command)| (*key == canonical_key).then_some(*command))
}

/// CS2 config exporter
#[derive(Debug, Default, Clone, Copy)]
pub struct Cs2ConfigExporter;

impl ConfigExporter for Cs2ConfigExporter {
    fn game(&self) -> Game {
        Game::Cs2
    }

    fn render(&self, nickname: &str, settings: &PlayerSettings) -> ExportResult<String> {
        ensure_game(self.game(), settings)?;

        let mut cfg = CfgLines::with_header(nickname, &settings.game);

        let sensitivity = settings
            .sensitivity
            .filter(|value| value.is_finite())
            .unwrap_or(CS2_DEFAULT_SENSITIVITY);
        let zoom = settings
            .zoom_sensitivity
            .filter(|value| value.is_finite())
            .unwrap_or(CS2_DEFAULT_ZOOM_RATIO);
        cfg.raw_number("sensitivity", sensitivity);
        cfg.raw_number("zoom_sensitivity_ratio", zoom);
        cfg.blank();

        // Mapping order, not table order.
        let mut binds = 0usize;
        for (canonical_key, value) in &settings.keybinds {
            let Some(command) = bind_command(canonical_key) else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            cfg.bind(value, command);
            binds += 1;
        }
        debug!(nickname, binds, "Rendered CS2 binds");

        let viewmodel = settings.viewmodel_or_default();
        cfg.blank();
        cfg.raw_number("viewmodel_fov", viewmodel.fov);
        cfg.raw_number("viewmodel_offset_x", viewmodel.offset_x);
        cfg.raw_number("viewmodel_offset_y", viewmodel.offset_y);
        cfg.raw_number("viewmodel_offset_z", viewmodel.offset_z);

        if let Some(code) = settings
            .crosshair_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
        {
            cfg.blank();
            cfg.setting("apply_crosshair_code", code);
        }

        cfg.trailer(settings);
        Ok(cfg.finish())
    }
}
