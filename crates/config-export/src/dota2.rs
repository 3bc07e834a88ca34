//! Dota 2 exporter.

use proconfig_settings::{Game, PlayerSettings, resolve_camera_or_sensitivity};
use tracing::debug;

use crate::format::CfgLines;
use crate::{ConfigExporter, ExportResult, ensure_game};

pub const DOTA_DEFAULT_CAMERA_SPEED: f64 = 3000.0;
pub const DOTA_MINIMAP_HERO_SIZE: u32 = 600;

/// Canonical keys bound to `dota_ability_execute <index>`, in index order.
pub const DOTA_ABILITY_KEYS: [&str; 6] = [
    "primary_weapon",
    "secondary_weapon",
    "knife",
    "he_grenade",
    "flashbang",
    "smoke_grenade",
];

/// Canonical key bound to the first item slot.
pub const DOTA_ITEM_KEY: &str = "molotov";

/// Dota 2 config exporter
#[derive(Debug, Default, Clone, Copy)]
pub struct Dota2ConfigExporter;

impl ConfigExporter for Dota2ConfigExporter {
    fn game(&self) -> Game {
        Game::Dota2
    }

    fn render(&self, nickname: &str, settings: &PlayerSettings) -> ExportResult<String> {
        ensure_game(self.game(), settings)?;

        let mut cfg = CfgLines::with_header(nickname, &settings.game);

        let camera_speed = settings
            .sensitivity
            .filter(|value| value.is_finite())
            .map_or(DOTA_DEFAULT_CAMERA_SPEED, |raw| {
                resolve_camera_or_sensitivity(&settings.game, raw)
            });
        cfg.number("dota_camera_speed", camera_speed);
        cfg.setting(
            "dota_minimap_hero_size",
            &DOTA_MINIMAP_HERO_SIZE.to_string(),
        );
        cfg.blank();

        for (index, canonical_key) in DOTA_ABILITY_KEYS.iter().enumerate() {
            if let Some(key) = settings.bound_key(canonical_key) {
                cfg.bind(key, &format!("dota_ability_execute {index}"));
            }
        }
        if let Some(key) = settings.bound_key(DOTA_ITEM_KEY) {
            cfg.bind(key, "dota_item_execute 0");
        }
        debug!(nickname, camera_speed, "Rendered Dota 2 binds");

        cfg.trailer(settings);
        Ok(cfg.finish())
    }
}
