// tests/config_tests.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use king_was_fallen::{Error, Settings};
use macroquad::math::ivec2;

fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("kwf_config_{nanos}"));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

#[test]
fn defaults_match_the_classic_setup() {
    let s = Settings::default();
    assert_eq!(s.window.title, "Game");
    assert_eq!((s.window.width, s.window.height), (800, 600));
    assert_eq!(s.player.start, [100, 100]);
    assert_eq!(s.player.speed, 5);
    assert_eq!(s.log_file, PathBuf::from("game.log"));
    assert!(!s.draw_map);
    assert_eq!(s.map_origin(), ivec2(0, 0));

    let conf = s.window.to_conf();
    assert_eq!(conf.window_title, "Game");
    assert_eq!((conf.window_width, conf.window_height), (800, 600));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let json = r#"{ "player": { "speed": 9 }, "draw_map": true, "map_origin": [368, 40] }"#;
    let s = Settings::from_json(json, Path::new("game.json")).expect("valid settings");
    assert_eq!(s.player.speed, 9);
    assert_eq!(s.player.start, [100, 100]);
    assert!(s.draw_map);
    assert_eq!(s.map_origin(), ivec2(368, 40));
    assert_eq!(s.window.title, "Game");
}

#[test]
fn missing_file_is_not_an_error() {
    let path = temp_dir().join("game.json");
    assert!(Settings::load(&path).expect("no io error").is_none());
}

#[test]
fn file_is_read_when_present() -> anyhow::Result<()> {
    let path = temp_dir().join("game.json");
    fs::write(&path, r#"{ "window": { "title": "Fallen King" } }"#)?;
    let s = Settings::load(&path)?.context("settings file should exist")?;
    assert_eq!(s.window.title, "Fallen King");
    assert_eq!(s.window.width, 800);
    Ok(())
}

#[test]
fn malformed_file_is_a_config_error() {
    let path = temp_dir().join("game.json");
    fs::write(&path, "{ not json").expect("write settings");
    let err = Settings::load(&path).err().expect("expected parse error");
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("game.json"));
}
