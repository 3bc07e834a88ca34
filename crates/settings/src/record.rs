//! Boundary adapter from a fetched player row to [`PlayerSettings`].
//!
//! The storage layer joins a player with its setup row, so `setup` arrives either as a single
//! object or as a list (possibly empty). Setup fields may also come from partially filled admin
//! forms: numbers stored as strings, blanks, or outright garbage. All of that is normalized here
//! so the resolver and exporters only ever see a single, typed record.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::game::Game;
use crate::types::{ConfigCommand, CustomBind, Keybinds, PlayerSettings, ViewmodelSettings};

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Required field '{0}' is missing")]
    MissingField(&'static str),
}

pub type RecordResult<T> = Result<T, RecordError>;

/// Player row as returned by the storage layer.
///
/// Every field is kept as a raw [`Value`] so a wrongly typed column degrades instead of failing
/// the whole record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub nickname: Option<Value>,
    #[serde(default)]
    pub game: Option<Value>,
    #[serde(default)]
    pub team: Option<Value>,
    /// A single object or a list of joined rows (first one wins).
    #[serde(default, alias = "settings", alias = "player_setup")]
    pub setup: Option<Value>,
}

/// Setup row with every field kept loose until normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSetup {
    #[serde(default)]
    pub game: Option<Value>,
    #[serde(default)]
    pub sensitivity: Option<Value>,
    #[serde(default)]
    pub dpi: Option<Value>,
    #[serde(default, alias = "zoomSensitivity")]
    pub zoom_sensitivity: Option<Value>,
    #[serde(default)]
    pub resolution: Option<Value>,
    #[serde(default, alias = "aspectRatio")]
    pub aspect_ratio: Option<Value>,
    #[serde(default, alias = "scalingMode")]
    pub scaling_mode: Option<Value>,
    #[serde(default)]
    pub hertz: Option<Value>,
    #[serde(default, alias = "crosshairCode")]
    pub crosshair_code: Option<Value>,
    #[serde(default, alias = "launchOptions")]
    pub launch_options: Option<Value>,
    #[serde(default)]
    pub keybinds: Option<Value>,
    #[serde(default, alias = "customBinds")]
    pub custom_binds: Option<Value>,
    #[serde(default, alias = "configCommands")]
    pub config_commands: Option<Value>,
    #[serde(default, alias = "viewmodelSettings")]
    pub viewmodel_settings: Option<Value>,
}

/// A player's display identity together with their canonical settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub nickname: String,
    pub team: Option<String>,
    pub settings: PlayerSettings,
}

impl PlayerRecord {
    pub fn from_json_str(input: &str) -> RecordResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_yaml_str(input: &str) -> RecordResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Normalize into a [`PlayerProfile`].
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingField`] if the nickname or the game is missing or blank.
    /// Every other irregularity degrades to an absent field.
    pub fn into_profile(self) -> RecordResult<PlayerProfile> {
        let nickname = self
            .nickname
            .as_ref()
            .and_then(text)
            .ok_or(RecordError::MissingField("nickname"))?;
        let setup = self.setup.map(setup_row).unwrap_or_default();

        let game_id = self
            .game
            .as_ref()
            .and_then(text)
            .or_else(|| setup.game.as_ref().and_then(text))
            .ok_or(RecordError::MissingField("game"))?;
        let game = Game::parse(&game_id);

        let settings = PlayerSettings {
            sensitivity: setup.sensitivity.as_ref().and_then(|v| number("sensitivity", v)),
            dpi: setup.dpi.as_ref().and_then(dpi),
            zoom_sensitivity: setup
                .zoom_sensitivity
                .as_ref()
                .and_then(|v| number("zoom_sensitivity", v)),
            resolution: setup.resolution.as_ref().and_then(text),
            aspect_ratio: setup.aspect_ratio.as_ref().and_then(text),
            scaling_mode: setup.scaling_mode.as_ref().and_then(text),
            hertz: setup.hertz.as_ref().and_then(text),
            crosshair_code: setup.crosshair_code.as_ref().and_then(text),
            launch_options: setup.launch_options.as_ref().and_then(text),
            keybinds: setup.keybinds.as_ref().map(keybinds).unwrap_or_default(),
            custom_binds: setup
                .custom_binds
                .as_ref()
                .map(custom_binds)
                .unwrap_or_default(),
            config_commands: setup
                .config_commands
                .as_ref()
                .map(config_commands)
                .unwrap_or_default(),
            viewmodel_settings: setup.viewmodel_settings.as_ref().and_then(viewmodel),
            ..PlayerSettings::new(game)
        };

        Ok(PlayerProfile {
            nickname,
            team: self.team.as_ref().and_then(text),
            settings,
        })
    }
}

fn setup_row(value: Value) -> RawSetup {
    let row = match value {
        Value::Array(rows) => rows.into_iter().next(),
        Value::Null => None,
        other => Some(other),
    };
    let Some(row) = row else {
        return RawSetup::default();
    };
    if !row.is_object() {
        debug!(%row, "setup is not an object, using defaults");
        return RawSetup::default();
    }

    serde_json::from_value(row).unwrap_or_else(|err| {
        debug!(error = %err, "unreadable setup row, using defaults");
        RawSetup::default()
    })
}

fn number(field: &str, value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Null => return None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => return None,
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let parsed = parsed.filter(|v| v.is_finite());
    if parsed.is_none() {
        debug!(field, %value, "non-numeric setting, treating as absent");
    }
    parsed
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn dpi(value: &Value) -> Option<u32> {
    number("dpi", value)
        .filter(|v| *v > 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v.round() as u32)
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Storage (jsonb) key order: shorter keys first, ties broken bytewise.
fn storage_key_order(a: &str, b: &str) -> std::cmp::Ordering {
    a.len().cmp(&b.len()).then_with(|| a.as_bytes().cmp(b.as_bytes()))
}

fn keybinds(value: &Value) -> Keybinds {
    let Some(object) = value.as_object() else {
        debug!(%value, "keybinds is not an object, ignoring");
        return Keybinds::new();
    };

    let mut entries: Vec<(String, String)> = object
        .iter()
        .filter_map(|(key, bound)| text(bound).map(|label| (key.clone(), label)))
        .collect();
    entries.sort_by(|(a, _), (b, _)| storage_key_order(a, b));
    entries.into_iter().collect()
}

fn field_text(object: &Map<String, Value>, key: &str) -> String {
    object.get(key).and_then(text).unwrap_or_default()
}

fn objects(value: &Value) -> impl Iterator<Item = &Map<String, Value>> {
    value
        .as_array()
        .map(|items| items.as_slice())
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_object)
}

fn custom_binds(value: &Value) -> Vec<CustomBind> {
    objects(value)
        .map(|object| CustomBind {
            label: field_text(object, "label"),
            key: field_text(object, "key"),
        })
        .collect()
}

fn config_commands(value: &Value) -> Vec<ConfigCommand> {
    objects(value)
        .map(|object| ConfigCommand {
            command: field_text(object, "command"),
            value: field_text(object, "value"),
        })
        .collect()
}

fn viewmodel(value: &Value) -> Option<ViewmodelSettings> {
    let object = value.as_object()?;
    let field = |snake: &str, camel: &str| {
        object
            .get(snake)
            .or_else(|| object.get(camel))
            .and_then(|v| number(snake, v))
    };

    Some(ViewmodelSettings {
        fov: field("fov", "fov"),
        offset_x: field("offset_x", "offsetX"),
        offset_y: field("offset_y", "offsetY"),
        offset_z: field("offset_z", "offsetZ"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn test_setup_as_single_object() -> TestResult {
        let profile = PlayerRecord::from_json_str(
            r#"{
  "nickname": "s1mple",
  "game": "cs2",
  "setup": { "sensitivity": 3.09, "dpi": 400, "hertz": "240Hz" }
}"#,
        )?
        .into_profile()?;

        assert_eq!(profile.nickname, "s1mple");
        assert_eq!(profile.settings.game, Game::Cs2);
        assert!(approx(profile.settings.sensitivity, 3.09));
        assert_eq!(profile.settings.dpi, Some(400));
        assert_eq!(profile.settings.hertz.as_deref(), Some("240Hz"));
        Ok(())
    }

    #[test]
    fn test_setup_as_one_element_list() -> TestResult {
        let profile = PlayerRecord::from_json_str(
            r#"{
  "nickname": "Miracle-",
  "game": "dota2",
  "setup": [{ "sensitivity": "2.5", "keybinds": { "primary_weapon": "Q" } }]
}"#,
        )?
        .into_profile()?;

        assert!(approx(profile.settings.sensitivity, 2.5));
        assert_eq!(profile.settings.bound_key("primary_weapon"), Some("Q"));
        Ok(())
    }

    #[test]
    fn test_empty_or_missing_setup_uses_defaults() -> TestResult {
        for input in [
            r#"{"nickname": "a", "game": "cs2", "setup": []}"#,
            r#"{"nickname": "a", "game": "cs2", "setup": null}"#,
            r#"{"nickname": "a", "game": "cs2"}"#,
        ] {
            let profile = PlayerRecord::from_json_str(input)?.into_profile()?;
            assert_eq!(profile.settings, PlayerSettings::new(Game::Cs2));
        }
        Ok(())
    }

    #[test]
    fn test_garbage_numbers_degrade_to_absent() -> TestResult {
        let profile = PlayerRecord::from_json_str(
            r#"{
  "nickname": "x",
  "game": "cs2",
  "setup": { "sensitivity": "fast", "dpi": true, "zoomSensitivity": "" }
}"#,
        )?
        .into_profile()?;

        assert_eq!(profile.settings.sensitivity, None);
        assert_eq!(profile.settings.dpi, None);
        assert_eq!(profile.settings.zoom_sensitivity, None);
        Ok(())
    }

    #[test]
    fn test_keybinds_arrive_in_storage_order() -> TestResult {
        let profile = PlayerRecord::from_json_str(
            r#"{
  "nickname": "x",
  "game": "cs2",
  "setup": { "keybinds": { "primary_weapon": "1", "jump": "MWHEELDOWN", "knife": 3, "walk": null } }
}"#,
        )?
        .into_profile()?;

        let keys: Vec<&str> = profile.settings.keybinds.keys().map(String::as_str).collect();
        assert_eq!(keys, ["jump", "knife", "primary_weapon"]);
        assert_eq!(profile.settings.bound_key("knife"), Some("3"));
        Ok(())
    }

    #[test]
    fn test_game_falls_back_to_setup() -> TestResult {
        let profile = PlayerRecord::from_json_str(
            r#"{"nickname": "x", "setup": {"game": "Dota"}}"#,
        )?
        .into_profile()?;
        assert_eq!(profile.settings.game, Game::Dota2);
        Ok(())
    }

    #[test]
    fn test_missing_nickname_or_game_is_an_error() -> TestResult {
        let missing_nickname =
            PlayerRecord::from_json_str(r#"{"nickname": "  ", "game": "cs2"}"#)?.into_profile();
        assert!(matches!(
            missing_nickname,
            Err(RecordError::MissingField("nickname"))
        ));

        let missing_game = PlayerRecord::from_json_str(r#"{"nickname": "x"}"#)?.into_profile();
        assert!(matches!(missing_game, Err(RecordError::MissingField("game"))));
        Ok(())
    }

    #[test]
    fn test_lists_and_viewmodel() -> TestResult {
        let profile = PlayerRecord::from_yaml_str(
            r#"
nickname: ZywOo
game: cs2
team: Vitality
setup:
  custom_binds:
    - { label: "say gg", key: "F1" }
    - "not an object"
  config_commands:
    - { command: "fps_max", value: 0 }
  viewmodel_settings:
    fov: 68
    offsetX: "2"
"#,
        )?
        .into_profile()?;

        assert_eq!(profile.team.as_deref(), Some("Vitality"));
        assert_eq!(
            profile.settings.custom_binds,
            vec![CustomBind {
                label: "say gg".to_string(),
                key: "F1".to_string(),
            }]
        );
        assert_eq!(
            profile.settings.config_commands,
            vec![ConfigCommand {
                command: "fps_max".to_string(),
                value: "0".to_string(),
            }]
        );
        let viewmodel = profile.settings.viewmodel_or_default();
        assert!((viewmodel.offset_x - 2.0).abs() < 1e-9);
        assert!((viewmodel.offset_z - -1.5).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_wrongly_typed_setup_degrades_to_defaults() -> TestResult {
        for input in [
            r#"{"nickname": "a", "game": "cs2", "setup": "not a row"}"#,
            r#"{"nickname": "a", "game": "cs2", "setup": 42}"#,
            r#"{"nickname": "a", "game": "cs2", "setup": ["not a row"]}"#,
            r#"{"nickname": "a", "game": "cs2", "setup": [[1, 2]]}"#,
        ] {
            let profile = PlayerRecord::from_json_str(input)?.into_profile()?;
            assert_eq!(profile.settings, PlayerSettings::new(Game::Cs2));
        }
        Ok(())
    }

    #[test]
    fn test_wrongly_typed_identity_columns() -> TestResult {
        let profile = PlayerRecord::from_json_str(
            r#"{"nickname": 1337, "game": "dota2", "team": {"id": 4}}"#,
        )?
        .into_profile()?;
        assert_eq!(profile.nickname, "1337");
        assert_eq!(profile.team, None);

        let bad_game =
            PlayerRecord::from_json_str(r#"{"nickname": "x", "game": ["cs2"]}"#)?.into_profile();
        assert!(matches!(bad_game, Err(RecordError::MissingField("game"))));
        Ok(())
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            PlayerRecord::from_json_str("{ not json"),
            Err(RecordError::Json(_))
        ));
    }
}
