//! Game identification and per-game feature applicability.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `Other` game ids that are treated as shooters.
pub const KNOWN_SHOOTERS: &[&str] = &[
    "apex",
    "overwatch",
    "r6",
    "fortnite",
    "pubg",
    "deadlock",
    "the_finals",
];

/// Game a settings record belongs to.
///
/// Serialized as its canonical id (`cs2`, `dota2`, `valorant`, or the raw id for `Other`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Game {
    Cs2,
    Dota2,
    Valorant,
    Other(String),
}

/// Optional capabilities that only some games have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    ConfigExport,
    Crosshair,
    ZoomSensitivity,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::ConfigExport,
        Feature::Crosshair,
        Feature::ZoomSensitivity,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Feature::ConfigExport => "config_export",
            Feature::Crosshair => "crosshair",
            Feature::ZoomSensitivity => "zoom_sensitivity",
        }
    }
}

impl Game {
    /// Games with a dedicated variant, in display order.
    pub const KNOWN: [Game; 3] = [Game::Cs2, Game::Dota2, Game::Valorant];

    /// Normalize a game id at the boundary (case, whitespace, historical aliases).
    pub fn parse(id: &str) -> Self {
        let normalized = id.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "cs2" | "csgo" | "cs" | "counter-strike" | "counter_strike" => Game::Cs2,
            "dota2" | "dota" | "dota_2" | "dota-2" => Game::Dota2,
            "valorant" | "val" => Game::Valorant,
            _ => Game::Other(normalized),
        }
    }

    /// Canonical identifier, as used in file names and storage.
    pub fn id(&self) -> &str {
        match self {
            Game::Cs2 => "cs2",
            Game::Dota2 => "dota2",
            Game::Valorant => "valorant",
            Game::Other(id) => id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Game::Cs2 => "Counter-Strike 2",
            Game::Dota2 => "Dota 2",
            Game::Valorant => "Valorant",
            Game::Other(id) => id,
        }
    }

    pub fn is_shooter(&self) -> bool {
        match self {
            Game::Cs2 | Game::Valorant => true,
            Game::Dota2 => false,
            Game::Other(id) => KNOWN_SHOOTERS.contains(&id.as_str()),
        }
    }

    pub fn supports(&self, feature: Feature) -> bool {
        match feature {
            Feature::ConfigExport => matches!(self, Game::Cs2 | Game::Dota2),
            Feature::Crosshair | Feature::ZoomSensitivity => self.is_shooter(),
        }
    }
}

impl From<String> for Game {
    fn from(value: String) -> Self {
        Game::parse(&value)
    }
}

impl From<&str> for Game {
    fn from(value: &str) -> Self {
        Game::parse(value)
    }
}

impl From<Game> for String {
    fn from(value: Game) -> Self {
        match value {
            Game::Other(id) => id,
            known => known.id().to_string(),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
