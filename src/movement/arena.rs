//! Movement domain: the enclosed arena the player runs around in.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::RunEntity;
use crate::movement::{GameLayer, WallDirection, WallSurface};
use crate::sprites::RenderLayer;

/// Inner extents of the arena, in pixels.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ArenaBounds {
    pub half_width: f32,
    pub half_height: f32,
    pub thickness: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            half_width: 600.0,
            half_height: 340.0,
            thickness: 40.0,
        }
    }
}

impl ArenaBounds {
    /// Height of the floor surface.
    pub fn floor_y(&self) -> f32 {
        -self.half_height
    }
}

pub(crate) fn spawn_arena(mut commands: Commands, bounds: Res<ArenaBounds>) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Enemies pass through level geometry
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let t = bounds.thickness;
    let width = bounds.half_width * 2.0 + t * 2.0;
    let height = bounds.half_height * 2.0;
    let horizontal = Vec2::new(width, t);
    let vertical = Vec2::new(t, height);

    commands.spawn((
        RunEntity,
        Sprite {
            color: Color::srgb(0.12, 0.12, 0.16),
            custom_size: Some(Vec2::new(width, height + t * 2.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, RenderLayer::Background.z()),
    ));

    let mut surface = |direction: WallDirection,
                       position: Vec2,
                       size: Vec2,
                       color: Color,
                       layers: CollisionLayers| {
        commands.spawn((
            RunEntity,
            WallSurface(direction),
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, RenderLayer::Wall.z()),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            layers,
        ));
    };

    // Floor and ceiling
    surface(
        WallDirection::Bottom,
        Vec2::new(0.0, -bounds.half_height - t * 0.5),
        horizontal,
        ground_color,
        ground_layers,
    );
    surface(
        WallDirection::Top,
        Vec2::new(0.0, bounds.half_height + t * 0.5),
        horizontal,
        ground_color,
        ground_layers,
    );

    // Side walls
    surface(
        WallDirection::Left,
        Vec2::new(-bounds.half_width - t * 0.5, 0.0),
        vertical,
        wall_color,
        wall_layers,
    );
    surface(
        WallDirection::Right,
        Vec2::new(bounds.half_width + t * 0.5, 0.0),
        vertical,
        wall_color,
        wall_layers,
    );

    // Floating platforms count as floor
    for (x, y, w) in [(-300.0, -160.0, 180.0), (300.0, -60.0, 180.0), (0.0, 80.0, 140.0)] {
        surface(
            WallDirection::Bottom,
            Vec2::new(x, y),
            Vec2::new(w, 20.0),
            platform_color,
            ground_layers,
        );
    }

    info!(
        "Arena spawned: {}x{}",
        bounds.half_width * 2.0,
        bounds.half_height * 2.0
    );
}
