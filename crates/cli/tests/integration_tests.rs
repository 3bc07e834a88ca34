//! Integration tests for cfgctl CLI
//!
//! These tests drive the binary end to end and check exit codes for each failure class.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Custom predicate to check if output is valid JSON
fn is_json() -> impl predicates::Predicate<[u8]> {
    predicates::function::function(|s: &[u8]| {
        if let Ok(text) = std::str::from_utf8(s) {
            serde_json::from_str::<Value>(text).is_ok()
        } else {
            false
        }
    })
}

/// Test helper to create a cfgctl command
fn cfgctl() -> Command {
    let mut cmd = Command::cargo_bin("cfgctl").unwrap();
    cmd.env_remove("CFGCTL_OUT_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_record(dir: &TempDir, name: &str, record: &Value) -> PathBuf {
    let path = dir.path().join(format!("{}.json", name));
    fs::write(&path, serde_json::to_string_pretty(record).unwrap()).unwrap();
    path
}

/// Test helper to create a CS2 record shaped like a storage row
fn create_cs2_record(dir: &TempDir) -> PathBuf {
    let record = serde_json::json!({
        "nickname": "s1mple",
        "game": "cs2",
        "team": "NAVI",
        "setup": [{
            "sensitivity": "2.0",
            "dpi": 400,
            "zoomSensitivity": 1,
            "hertz": "360Hz",
            "keybinds": { "primary_weapon": "1", "jump": "MWHEELDOWN" },
            "crosshairCode": "CSGO-abc123"
        }]
    });
    write_record(dir, "s1mple", &record)
}

fn create_dota_record(dir: &TempDir) -> PathBuf {
    let record = serde_json::json!({
        "nickname": "Miracle-",
        "game": "dota2",
        "setup": {
            "sensitivity": 3.5,
            "keybinds": { "primary_weapon": "Q", "smoke_grenade": "R" }
        }
    });
    write_record(dir, "miracle", &record)
}

fn create_valorant_record(dir: &TempDir) -> PathBuf {
    let record = serde_json::json!({
        "nickname": "TenZ",
        "game": "valorant",
        "setup": [{ "sensitivity": 0.4, "dpi": 800 }]
    });
    write_record(dir, "tenz", &record)
}

#[test]
fn test_cli_help() {
    cfgctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Esports config CLI"));
}

#[test]
fn test_cli_version() {
    cfgctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cfgctl"));
}

#[test]
fn test_completion_generation() {
    cfgctl()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_cfgctl"));
}

// Game Listing Tests

#[test]
fn test_games_human_output() {
    cfgctl()
        .arg("games")
        .assert()
        .success()
        .stdout(predicate::str::contains("Known Games"))
        .stdout(predicate::str::contains("Counter-Strike 2"))
        .stdout(predicate::str::contains("Dota 2"));
}

#[test]
fn test_games_json_output() {
    cfgctl()
        .args(["--json", "games"])
        .assert()
        .success()
        .stdout(is_json());

    let output = cfgctl().args(["--json", "games"]).output().unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["games"][0]["id"], "cs2");
    assert_eq!(json["games"][1]["features"][0], "config_export");
    assert_eq!(json["games"][2]["shooter"], true);
}

// Export Tests

#[test]
fn test_export_writes_cfg_file() {
    let temp_dir = TempDir::new().unwrap();
    let record = create_cs2_record(&temp_dir);
    let out_dir = temp_dir.path().join("out");

    cfgctl()
        .args(["export", record.to_str().unwrap(), "--out-dir"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"))
        .stdout(predicate::str::contains("s1mple_cs2.cfg"));

    let contents = fs::read_to_string(out_dir.join("s1mple_cs2.cfg")).unwrap();
    assert!(contents.starts_with("// s1mple (CS2) Config\n"));
    assert!(contents.contains("sensitivity \"2\"\n"));
    assert!(contents.contains("bind \"MWHEELDOWN\" \"+jump\"\n"));
    assert!(contents.contains("apply_crosshair_code \"CSGO-abc123\"\n"));

    let jump = contents.find("+jump").unwrap();
    let slot1 = contents.find("slot1").unwrap();
    assert!(jump < slot1);
}

#[test]
fn test_export_out_dir_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let record = create_dota_record(&temp_dir);

    cfgctl()
        .env("CFGCTL_OUT_DIR", temp_dir.path())
        .args(["export", record.to_str().unwrap()])
        .assert()
        .success();

    let contents = fs::read_to_string(temp_dir.path().join("Miracle-_dota2.cfg")).unwrap();
    assert!(contents.starts_with("// Miracle- (DOTA2) Config\n"));
    assert!(contents.contains("dota_camera_speed \"3500\"\n"));
    assert!(contents.contains("bind \"Q\" \"dota_ability_execute 0\"\n"));
    assert!(contents.contains("bind \"R\" \"dota_ability_execute 5\"\n"));
}

#[test]
fn test_export_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let record = create_cs2_record(&temp_dir);

    cfgctl()
        .args(["export", record.to_str().unwrap(), "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("// s1mple (CS2) Config"))
        .stdout(predicate::str::contains("zoom_sensitivity_ratio \"1\""));

    assert!(!temp_dir.path().join("s1mple_cs2.cfg").exists());
}

#[test]
fn test_export_stdout_overrides_env_out_dir() {
    let temp_dir = TempDir::new().unwrap();
    let record = create_cs2_record(&temp_dir);
    let out_dir = temp_dir.path().join("from-env");

    cfgctl()
        .env("CFGCTL_OUT_DIR", &out_dir)
        .args(["export", record.to_str().unwrap(), "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("// s1mple (CS2) Config"));

    assert!(!out_dir.exists());
}

#[test]
fn test_export_stdout_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let record = create_cs2_record(&temp_dir);

    let output = cfgctl()
        .args(["--json", "export", record.to_str().unwrap(), "--stdout"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["file_name"], "s1mple_cs2.cfg");
    let contents = json["contents"].as_str().unwrap();
    assert!(contents.starts_with("// s1mple (CS2) Config\n"));
    assert_eq!(json["bytes"].as_u64().unwrap(), contents.len() as u64);
}

#[test]
fn test_export_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let record = create_cs2_record(&temp_dir);

    let output = cfgctl()
        .args(["--json", "export", record.to_str().unwrap(), "--out-dir"])
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["file_name"], "s1mple_cs2.cfg");
    assert_eq!(json["mime_type"], "text/plain");
    assert!(json["bytes"].as_u64().unwrap() > 0);
}

#[test]
fn test_export_unsupported_game_error() {
    let temp_dir = TempDir::new().unwrap();
    let record = create_valorant_record(&temp_dir);

    cfgctl()
        .args(["export", record.to_str().unwrap(), "--out-dir"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Config export is not supported for game 'valorant'"));

    assert!(!temp_dir.path().join("TenZ_valorant.cfg").exists());
}

#[test]
fn test_export_unsupported_game_json_error() {
    let temp_dir = TempDir::new().unwrap();
    let record = create_valorant_record(&temp_dir);

    let output = cfgctl()
        .args(["--json", "export", record.to_str().unwrap(), "--stdout"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["type"], "unsupported_game");
}

#[test]
fn test_record_not_found_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nobody.json");

    cfgctl()
        .args(["export", missing.to_str().unwrap(), "--stdout"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Record not found"));
}

#[test]
fn test_malformed_record_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ \"nickname\": ").unwrap();

    cfgctl()
        .args(["show", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid record"));
}

#[test]
fn test_record_without_game_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_record(
        &temp_dir,
        "nogame",
        &serde_json::json!({ "nickname": "ghost", "setup": [] }),
    );

    cfgctl()
        .args(["export", path.to_str().unwrap(), "--stdout"])
        .assert()
        .failure()
        .code(4);
}

// Show Tests

#[test]
fn test_show_human_output() {
    let temp_dir = TempDir::new().unwrap();
    let record = create_cs2_record(&temp_dir);

    cfgctl()
        .args(["show", record.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("s1mple"))
        .stdout(predicate::str::contains("Counter-Strike 2"))
        .stdout(predicate::str::contains("eDPI: 800"))
        .stdout(predicate::str::contains("Refresh Rate: 360"))
        .stdout(predicate::str::contains("Jump"));
}

#[test]
fn test_show_dota_uses_camera_labels() {
    let temp_dir = TempDir::new().unwrap();
    let record = create_dota_record(&temp_dir);

    cfgctl()
        .args(["show", record.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Camera Speed: 3500"))
        .stdout(predicate::str::contains("Ability 1"))
        .stdout(predicate::str::contains("Ultimate"))
        .stdout(predicate::str::contains("eDPI").not());
}

#[test]
fn test_show_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let record = create_valorant_record(&temp_dir);

    let output = cfgctl()
        .args(["--json", "show", record.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["nickname"], "TenZ");
    assert_eq!(json["settings"]["edpi"], 320);
    assert_eq!(json["settings"]["config_export"], false);
}

#[test]
fn test_show_yaml_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("zywoo.yaml");
    fs::write(
        &path,
        "nickname: ZywOo\ngame: cs2\nteam: Vitality\nsetup:\n  sensitivity: 2\n  dpi: 400\n",
    )
    .unwrap();

    cfgctl()
        .args(["show", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ZywOo (Vitality)"))
        .stdout(predicate::str::contains("eDPI: 800"));
}
