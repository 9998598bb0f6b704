//! Static render order for every sprite category.

/// Defines the render order for sprites.
/// Lower values render behind higher values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderLayer {
    Background = 0,
    Wall = 100,
    Enemy = 200,
    /// Dash trail, one step behind the player.
    AfterImage = 299,
    Player = 300,
}

impl RenderLayer {
    /// Convert to Z coordinate for 2D ordering.
    pub fn z(&self) -> f32 {
        (*self as i32) as f32 * 0.01
    }
}
