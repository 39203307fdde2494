//! Seeker state, decisions, and fitness.
//!
//! Seekers carry a neural network brain that turns what they see into a change
//! of heading and speed.

use ndarray::Array1;

use super::brain;
use super::geometric_utils::{normalize_angle, random_point};
use super::locatable::Locatable;
use super::obstacle::random_rotation;
use super::params::Params;

/// An evolvable agent with a neural network brain.
///
/// Seekers:
/// - Steer and accelerate based on brain outputs
/// - See the nearest seeker and obstacle in their forward half-plane
/// - Consume obstacles they run into
/// - Pass their brain layers on through selection and evolution
#[derive(Debug, Clone)]
pub struct Seeker {
    /// Unique identifier for this seeker.
    pub id: usize,
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Heading in radians.
    pub rot: f32,
    /// Current speed in world units per tick, within `[0, max_speed]`.
    pub speed: f32,
    /// Neural network that controls behavior.
    pub brain: brain::Brain,
    /// Number of obstacles consumed so far.
    pub consumed: u32,
    /// Number of whole ticks survived.
    pub lifetime: u64,
}

impl Seeker {
    /// Creates a new seeker with random position, heading, speed, and brain.
    pub fn new_random(id: usize, params: &Params) -> Self {
        Self::new_at(id, random_point(params.box_width, params.box_height), params)
    }

    /// Creates a new seeker at `pos` with random heading, speed, and brain.
    pub fn new_at(id: usize, pos: Array1<f32>, params: &Params) -> Self {
        Self {
            id,
            pos,
            rot: random_rotation(),
            speed: rand::random::<f32>() * params.initial_speed,
            brain: brain::Brain::new_random(),
            consumed: 0,
            lifetime: 0,
        }
    }

    /// Fitness score: obstacles consumed per thousand ticks, plus one.
    ///
    /// A seeker that has not yet lived a whole tick has fitness `0`.
    pub fn fitness(&self) -> f32 {
        if self.lifetime == 0 {
            return 0.0;
        }
        (1 + self.consumed) as f32 / self.lifetime as f32 * 1000.0
    }

    /// Feeds `sensors` through the brain and steers towards its proposal.
    ///
    /// Both heading and speed move `params.smoothing` of the way towards the
    /// proposed values. Heading stays in `[0, 2π)` and speed is clamped to
    /// `[0, params.max_speed]`.
    pub fn think(&mut self, sensors: &Array1<f32>, params: &Params) {
        let delta = self.brain.think(sensors);
        let (delta_rot, delta_speed) = (delta[0], delta[1]);

        self.rot = normalize_angle(lerp(self.rot, self.rot + delta_rot, params.smoothing));
        self.speed = lerp(self.speed, self.speed + delta_speed, params.smoothing)
            .clamp(0.0, params.max_speed);
    }
}

impl Locatable for Seeker {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }

    fn rot(&self) -> f32 {
        self.rot
    }

    /// Moves along the heading at the current speed and ages by `floor(dt)` ticks.
    fn update(&mut self, dt: f32) {
        let (sin, cos) = self.rot.sin_cos();
        self.pos[0] += cos * self.speed * dt;
        self.pos[1] += sin * self.speed * dt;
        self.lifetime += dt.max(0.0).floor() as u64;
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
