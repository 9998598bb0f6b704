//! Content domain: tests for tuning parsing and validation.

use std::path::Path;

use super::{GameplayTuning, load_gameplay_tuning, load_tuning, parse_tuning, validate_tuning};
use crate::movement::{DashMode, WallSensing};

fn has_error(tuning: &GameplayTuning, section: &str, field: &str) -> bool {
    validate_tuning(tuning)
        .iter()
        .any(|e| e.section == section && e.field == field)
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_minimal_file_uses_defaults() {
    let tuning = parse_tuning("(schema_version: 1)", "test.ron").unwrap();
    let defaults = GameplayTuning::default();

    assert_eq!(tuning.movement.move_speed, defaults.movement.move_speed);
    assert_eq!(tuning.dash.mode, DashMode::VelocityOverride);
    assert_eq!(tuning.wall.sensing, WallSensing::ContactTag);
    assert_eq!(tuning.spawner.max_distance, defaults.spawner.max_distance);
    assert_eq!(tuning.seed, None);
}

#[test]
fn test_partial_override_keeps_other_fields() {
    let ron = r#"
        (
            schema_version: 1,
            tuning: (
                dash: (mode: SpeedMultiplier, cooldown: 2.0),
                wall: (sensing: Proximity),
                seed: 7,
            ),
        )
    "#;
    let tuning = parse_tuning(ron, "test.ron").unwrap();

    assert_eq!(tuning.dash.mode, DashMode::SpeedMultiplier);
    assert_eq!(tuning.dash.cooldown, 2.0);
    assert_eq!(tuning.dash.dash_speed, 900.0);
    assert_eq!(tuning.wall.sensing, WallSensing::Proximity);
    assert_eq!(tuning.wall.debounce_seconds, 0.3);
    assert_eq!(tuning.seed, Some(7));
}

#[test]
fn test_profile_without_melee() {
    let ron = r#"
        (
            schema_version: 1,
            tuning: (enemies: (melee: (health: 80.0, melee: None))),
        )
    "#;
    let tuning = parse_tuning(ron, "test.ron").unwrap();

    assert_eq!(tuning.enemies.melee.health, 80.0);
    assert!(tuning.enemies.melee.melee.is_none());
    assert!(tuning.enemies.boss.melee.is_some());
}

#[test]
fn test_wrong_schema_version_rejected() {
    let err = parse_tuning("(schema_version: 2)", "test.ron").unwrap_err();

    assert_eq!(err.file, "test.ron");
    assert!(err.message.contains("schema_version"), "{}", err);
}

#[test]
fn test_malformed_file_rejected() {
    let err = parse_tuning("(schema_version: 1, tuning: (", "broken.ron").unwrap_err();

    assert!(err.message.starts_with("Parse error"), "{}", err);
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_tuning(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"), "{}", err);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let tuning = load_gameplay_tuning(Path::new("does/not/exist.ron"));
    assert_eq!(
        tuning.player.max_health,
        GameplayTuning::default().player.max_health
    );
}

#[test]
fn test_shipped_tuning_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::TUNING_PATH);
    let tuning = load_tuning(&path).unwrap();

    let errors = validate_tuning(&tuning);
    assert!(errors.is_empty(), "{:?}", errors);
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_defaults_are_valid() {
    let errors = validate_tuning(&GameplayTuning::default());
    assert!(errors.is_empty(), "{:?}", errors);
}

#[test]
fn test_spawn_band_must_be_ordered() {
    let mut tuning = GameplayTuning::default();
    tuning.spawner.min_distance = 20.0;

    assert!(has_error(&tuning, "spawner", "max_distance"));
}

#[test]
fn test_min_interval_must_not_exceed_initial() {
    let mut tuning = GameplayTuning::default();
    tuning.spawner.min_interval = 3.0;

    assert!(has_error(&tuning, "spawner", "min_interval"));
}

#[test]
fn test_ratio_and_alpha_must_be_unit() {
    let mut tuning = GameplayTuning::default();
    tuning.spawner.ranged_ratio = 1.5;
    tuning.dash.after_image_alpha = -0.1;

    assert!(has_error(&tuning, "spawner", "ranged_ratio"));
    assert!(has_error(&tuning, "dash", "after_image_alpha"));
}

#[test]
fn test_despawn_distance_beyond_spawn_band() {
    let mut tuning = GameplayTuning::default();
    tuning.enemies.despawn_distance = 10.0;

    assert!(has_error(&tuning, "enemies", "despawn_distance"));
}

#[test]
fn test_enemy_profiles_validated() {
    let mut tuning = GameplayTuning::default();
    tuning.enemies.boss.health = 0.0;

    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "enemies.boss.health: must be positive, got 0");
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("wallbound_invalid_tuning.ron");
    std::fs::write(&path, "(schema_version: 1, tuning: (movement: (gravity: -5.0)))").unwrap();

    let tuning = load_gameplay_tuning(&path);
    assert_eq!(tuning.movement.gravity, GameplayTuning::default().movement.gravity);

    let _ = std::fs::remove_file(&path);
}
