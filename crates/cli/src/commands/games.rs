//! Game listing command

use anyhow::Result;
use proconfig_settings::{Feature, Game};
use serde::Serialize;

use crate::output;

#[derive(Debug, Serialize)]
pub struct GameInfo {
    pub id: String,
    pub name: String,
    pub shooter: bool,
    pub features: Vec<&'static str>,
}

fn game_info(game: &Game) -> GameInfo {
    GameInfo {
        id: game.id().to_string(),
        name: game.display_name().to_string(),
        shooter: game.is_shooter(),
        features: Feature::ALL
            .into_iter()
            .filter(|feature| game.supports(*feature))
            .map(Feature::id)
            .collect(),
    }
}

/// Known games, in display order
pub fn known_games() -> Vec<GameInfo> {
    Game::KNOWN.iter().map(game_info).collect()
}

/// Execute games command
pub fn execute(json: bool) -> Result<()> {
    output::print_games(&known_games(), json)
}
