//! Combat domain: the set of live enemy agents and their positions.

use bevy::prelude::*;
use std::collections::HashMap;

/// Live enemies keyed by entity, with their last known position in world units.
/// Spawning registers explicitly; every despawn path deregisters and the
/// per-frame sync prunes anything that no longer exists.
#[derive(Resource, Debug, Default)]
pub struct EnemyRegistry {
    positions: HashMap<Entity, Vec2>,
}

impl EnemyRegistry {
    /// Returns false if the entity was already registered.
    pub fn register(&mut self, entity: Entity, position: Vec2) -> bool {
        self.positions.insert(entity, position).is_none()
    }

    pub fn deregister(&mut self, entity: Entity) -> bool {
        self.positions.remove(&entity).is_some()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.positions.contains_key(&entity)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, entity: Entity) -> Option<Vec2> {
        self.positions.get(&entity).copied()
    }

    /// Only updates agents that are already registered.
    pub fn update_position(&mut self, entity: Entity, position: Vec2) -> bool {
        match self.positions.get_mut(&entity) {
            Some(stored) => {
                *stored = position;
                true
            }
            None => false,
        }
    }

    /// Positions of every agent except `entity`.
    pub fn neighbors_of(&self, entity: Entity) -> impl Iterator<Item = Vec2> + '_ {
        self.positions
            .iter()
            .filter(move |(other, _)| **other != entity)
            .map(|(_, position)| *position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, Vec2)> + '_ {
        self.positions.iter().map(|(entity, position)| (*entity, *position))
    }

    /// Drop every entry `alive` rejects. Returns how many were pruned.
    pub fn retain_alive(&mut self, mut alive: impl FnMut(Entity) -> bool) -> usize {
        let before = self.positions.len();
        self.positions.retain(|entity, _| alive(*entity));
        before - self.positions.len()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
