//! Per-game display labels for canonical keybind actions.
//!
//! Two tables exist. The default table covers shooters and falls back to a humanized key name
//! for keys it does not know. The Dota 2 table is closed: keys missing from it have no meaning
//! in Dota 2 and are dropped.

use std::borrow::Cow;

use crate::game::Game;

pub type BindLabel = Cow<'static, str>;

const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("primary_weapon", "Primary Weapon"),
    ("secondary_weapon", "Secondary Weapon"),
    ("knife", "Knife"),
    ("he_grenade", "HE Grenade"),
    ("flashbang", "Flashbang"),
    ("smoke_grenade", "Smoke Grenade"),
    ("molotov", "Molotov"),
    ("jump", "Jump"),
    ("crouch", "Crouch"),
    ("walk", "Walk"),
    ("reload", "Reload"),
    ("use", "Use"),
    ("drop", "Drop Weapon"),
    ("inspect", "Inspect Weapon"),
    ("scoreboard", "Scoreboard"),
    ("push_to_talk", "Push to Talk"),
];

const DOTA_LABELS: &[(&str, &str)] = &[
    ("primary_weapon", "Ability 1"),
    ("secondary_weapon", "Ability 2"),
    ("knife", "Ability 3"),
    ("he_grenade", "Ability 4"),
    ("flashbang", "Ability 5"),
    ("smoke_grenade", "Ultimate"),
    ("molotov", "Item Slot 1"),
    ("decoy", "Courier"),
    ("jump", "Select Hero"),
    ("crouch", "Attack Move"),
    ("walk", "Stop"),
    ("use", "Hold Position"),
    ("scoreboard", "Scoreboard"),
    ("push_to_talk", "Push to Talk"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find_map(|(canonical, label)| (*canonical == key).then_some(*label))
}

/// `he_grenade` -> `he grenade`.
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
}

/// Display label for `canonical_key` in `game`, or `None` when the row must not be rendered.
pub fn bind_label(game: &Game, canonical_key: &str) -> Option<BindLabel> {
    match game {
        Game::Dota2 => lookup(DOTA_LABELS, canonical_key).map(Cow::Borrowed),
        _ => Some(
            lookup(DEFAULT_LABELS, canonical_key)
                .map(Cow::Borrowed)
                .unwrap_or_else(|| Cow::Owned(humanize_key(canonical_key))),
        ),
    }
}
