//! Trait for entities that have a position and heading and move every tick.
//!
//! Seekers and obstacles share this capability; everything else about them is
//! specific to the entity kind.

use ndarray::Array1;

use super::geometric_utils::wrap_around_mut;

/// Trait for entities with a position and orientation that can be updated over time.
///
/// Any type that implements this trait:
/// - Has a position in 2D world coordinates
/// - Has an orientation in radians
/// - Can be advanced by a time delta
pub trait Locatable {
    /// Returns a reference to the entity's position.
    fn pos(&self) -> &Array1<f32>;

    /// Returns a mutable reference to the entity's position.
    fn pos_mut(&mut self) -> &mut Array1<f32>;

    /// Returns the entity's orientation in radians.
    fn rot(&self) -> f32;

    /// Advances the entity along its heading.
    ///
    /// # Arguments
    ///
    /// * `dt` - Elapsed time in ticks; may be fractional.
    fn update(&mut self, dt: f32);

    /// Wraps the entity's position back into the world.
    fn wrap_around(&mut self, box_width: f32, box_height: f32) {
        wrap_around_mut(self.pos_mut(), box_width, box_height);
    }
}
