//! Range checks for loaded tuning values.

use super::data::GameplayTuning;
use crate::combat::EnemyProfile;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $ok:expr, $section:expr, $field:expr, $($message:tt)+) => {
        if !$ok {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!($($message)+),
            });
        }
    };
}

fn check_positive(
    errors: &mut Vec<ValidationError>,
    section: &'static str,
    field: &'static str,
    value: f32,
) {
    check!(errors, value > 0.0, section, field, "must be positive, got {}", value);
}

fn check_non_negative(
    errors: &mut Vec<ValidationError>,
    section: &'static str,
    field: &'static str,
    value: f32,
) {
    check!(errors, value >= 0.0, section, field, "must not be negative, got {}", value);
}

fn check_unit(
    errors: &mut Vec<ValidationError>,
    section: &'static str,
    field: &'static str,
    value: f32,
) {
    check!(
        errors,
        (0.0..=1.0).contains(&value),
        section,
        field,
        "must be within [0, 1], got {}",
        value
    );
}

fn validate_profile(
    errors: &mut Vec<ValidationError>,
    section: &'static str,
    profile: &EnemyProfile,
) {
    check_non_negative(errors, section, "steering.move_speed", profile.steering.move_speed);
    check_non_negative(
        errors,
        section,
        "steering.min_distance_to_player",
        profile.steering.min_distance_to_player,
    );
    check_non_negative(
        errors,
        section,
        "steering.separation_radius",
        profile.steering.separation_radius,
    );
    check_positive(errors, section, "health", profile.health);
    check_positive(errors, section, "size", profile.size);

    if let Some(melee) = &profile.melee {
        check_non_negative(errors, section, "melee.attack_range", melee.attack_range);
        check_positive(errors, section, "melee.attack_duration", melee.attack_duration);
        check_non_negative(errors, section, "melee.attack_cooldown", melee.attack_cooldown);
        check_non_negative(errors, section, "melee.damage", melee.damage);
    }
}

/// Validate every tuning section.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_tuning(tuning: &GameplayTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Movement
    let movement = &tuning.movement;
    check_positive(&mut errors, "movement", "move_speed", movement.move_speed);
    check_positive(&mut errors, "movement", "jump_velocity", movement.jump_velocity);
    check_positive(&mut errors, "movement", "gravity", movement.gravity);
    check_non_negative(
        &mut errors,
        "movement",
        "ground_probe_distance",
        movement.ground_probe_distance,
    );

    // Player
    let player = &tuning.player;
    check_positive(&mut errors, "player", "max_health", player.max_health);
    check_positive(&mut errors, "player", "width", player.width);
    check_positive(&mut errors, "player", "height", player.height);
    check_positive(&mut errors, "player", "attack_duration", player.attack_duration);
    check_non_negative(&mut errors, "player", "attack_reach", player.attack_reach);
    check_non_negative(&mut errors, "player", "damaged_duration", player.damaged_duration);
    check_non_negative(
        &mut errors,
        "player",
        "invulnerability_time",
        player.invulnerability_time,
    );
    check!(
        errors,
        (0.0..1.0).contains(&player.deadzone),
        "player",
        "deadzone",
        "must be within [0, 1), got {}",
        player.deadzone
    );
    check_non_negative(&mut errors, "player", "jump_land_grace", player.jump_land_grace);

    // Wall
    check_non_negative(&mut errors, "wall", "debounce_seconds", tuning.wall.debounce_seconds);
    check_non_negative(&mut errors, "wall", "probe_distance", tuning.wall.probe_distance);

    // Dash
    let dash = &tuning.dash;
    check_positive(&mut errors, "dash", "dash_speed", dash.dash_speed);
    check_positive(&mut errors, "dash", "duration", dash.duration);
    check_non_negative(&mut errors, "dash", "cooldown", dash.cooldown);
    check_positive(&mut errors, "dash", "speed_multiplier", dash.speed_multiplier);
    check_non_negative(&mut errors, "dash", "wall_probe_distance", dash.wall_probe_distance);
    check_non_negative(&mut errors, "dash", "rebound_factor", dash.rebound_factor);
    check_unit(&mut errors, "dash", "exit_velocity_scale", dash.exit_velocity_scale);
    check_positive(&mut errors, "dash", "after_image_interval", dash.after_image_interval);
    check_positive(&mut errors, "dash", "after_image_lifetime", dash.after_image_lifetime);
    check_unit(&mut errors, "dash", "after_image_alpha", dash.after_image_alpha);

    // Enemies
    validate_profile(&mut errors, "enemies.melee", &tuning.enemies.melee);
    validate_profile(&mut errors, "enemies.ranged", &tuning.enemies.ranged);
    validate_profile(&mut errors, "enemies.boss", &tuning.enemies.boss);

    // Spawner
    let spawner = &tuning.spawner;
    check_non_negative(&mut errors, "spawner", "min_distance", spawner.min_distance);
    check!(
        errors,
        spawner.min_distance <= spawner.max_distance,
        "spawner",
        "max_distance",
        "must be at least min_distance ({}), got {}",
        spawner.min_distance,
        spawner.max_distance
    );
    check_positive(&mut errors, "spawner", "initial_interval", spawner.initial_interval);
    check_positive(&mut errors, "spawner", "min_interval", spawner.min_interval);
    check!(
        errors,
        spawner.min_interval <= spawner.initial_interval,
        "spawner",
        "min_interval",
        "must not exceed initial_interval ({}), got {}",
        spawner.initial_interval,
        spawner.min_interval
    );
    check_non_negative(&mut errors, "spawner", "ramp_duration", spawner.ramp_duration);
    check_non_negative(&mut errors, "spawner", "boss_time", spawner.boss_time);
    check_unit(&mut errors, "spawner", "ranged_ratio", spawner.ranged_ratio);

    // Cross-section
    check!(
        errors,
        tuning.enemies.despawn_distance > spawner.max_distance,
        "enemies",
        "despawn_distance",
        "must exceed spawner.max_distance ({}) or new enemies vanish on arrival, got {}",
        spawner.max_distance,
        tuning.enemies.despawn_distance
    );

    errors
}
