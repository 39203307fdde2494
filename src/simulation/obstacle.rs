//! Obstacles that seekers consume on contact.
//!
//! Obstacles have no decision logic. They sit still, or drift forward at unit
//! speed when the ecosystem runs with dynamic obstacles.

use ndarray::Array1;

use super::geometric_utils::random_point;
use super::locatable::Locatable;
use super::params::Params;

/// A passive obstacle in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Heading in radians, used only when drifting.
    pub rot: f32,
}

impl Obstacle {
    /// Creates a new obstacle at a random position with a random heading.
    pub fn new_random(params: &Params) -> Self {
        Self::new_at(
            random_point(params.box_width, params.box_height),
            random_rotation(),
        )
    }

    /// Creates a new obstacle at the given position and heading.
    pub fn new_at(pos: Array1<f32>, rot: f32) -> Self {
        Self { pos, rot }
    }
}

impl Locatable for Obstacle {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }

    fn rot(&self) -> f32 {
        self.rot
    }

    fn update(&mut self, dt: f32) {
        let (sin, cos) = self.rot.sin_cos();
        self.pos[0] += cos * dt;
        self.pos[1] += sin * dt;
    }
}

/// Uniformly random heading in `[0, 2π)`.
pub(crate) fn random_rotation() -> f32 {
    rand::random::<f32>() * std::f32::consts::PI * 2.
}
