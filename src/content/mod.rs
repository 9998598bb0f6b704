//! Content domain: data-driven gameplay tuning loaded from RON.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{GameplayTuning, SCHEMA_VERSION, TuningFile};
pub use loader::{ContentLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::core::RunConfig;

pub const TUNING_PATH: &str = "assets/data/tuning.ron";

/// Load and validate the tuning file, falling back to built-in defaults on
/// any error.
pub fn load_gameplay_tuning(path: &Path) -> GameplayTuning {
    let tuning = match load_tuning(path) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return GameplayTuning::default();
        }
    };

    let errors = validate_tuning(&tuning);
    if errors.is_empty() {
        info!("Loaded gameplay tuning from {}", path.display());
        return tuning;
    }

    for e in &errors {
        error!("Tuning validation: {}", e);
    }
    warn!(
        "{} invalid tuning values in {}; using default tuning",
        errors.len(),
        path.display()
    );
    GameplayTuning::default()
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = load_gameplay_tuning(Path::new(TUNING_PATH));

        app.insert_resource(tuning.movement)
            .insert_resource(tuning.player)
            .insert_resource(tuning.wall)
            .insert_resource(tuning.dash)
            .insert_resource(tuning.enemies)
            .insert_resource(tuning.spawner)
            .insert_resource(RunConfig {
                seed_override: tuning.seed,
                ..default()
            });
    }
}
