use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::SimulationError;

/// Simulation parameters that control ecosystem behavior.
///
/// Fields may be changed between calls (for example the world size on a window
/// resize); the new values take effect the next time they are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// World width, used for wrapping and random placement.
    pub box_width: f32,
    /// World height, used for wrapping and random placement.
    pub box_height: f32,
    /// Initial seeker population.
    pub n_seekers: usize,
    /// Initial obstacle count.
    pub n_obstacles: usize,
    /// Replace every consumed obstacle with a new random one.
    pub auto_respawn: bool,
    /// Let obstacles drift forward at unit speed.
    pub dynamic_obstacles: bool,
    /// Seeker/obstacle distance below which the obstacle is consumed.
    pub collision_radius: f32,
    /// Upper bound of seeker speed.
    pub max_speed: f32,
    /// Upper bound (exclusive) of a new seeker's random initial speed.
    pub initial_speed: f32,
    /// Fraction of the proposed rotation/speed change applied per tick.
    pub smoothing: f32,
    /// Divisor applied to distances before they enter the brain.
    pub distance_scale: f32,
    /// Per-layer probability of replacement during mutation.
    pub mutation_rate: f32,
    /// Per-layer probability of inheriting from the first parent.
    pub crossover_rate: f32,
    /// Number of recent events kept in the event log.
    pub event_log_size: usize,
    /// Seconds between automatic mutations.
    pub mutation_interval: f32,
    /// Seconds between automatic selections.
    pub selection_interval: f32,
    /// Seconds between automatic evolutions.
    pub evolution_interval: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            box_width: 1280.0,
            box_height: 720.0,
            n_seekers: 10,
            n_obstacles: 30,
            auto_respawn: false,
            dynamic_obstacles: false,
            collision_radius: 32.0,
            max_speed: 5.0,
            initial_speed: 2.0,
            smoothing: 0.7,
            distance_scale: 1000.0,
            mutation_rate: 0.1,
            crossover_rate: 0.5,
            event_log_size: 20,
            mutation_interval: 30.0,
            selection_interval: 7.0,
            evolution_interval: 60.0,
        }
    }
}

impl Params {
    /// Checks that every field is inside its valid range.
    pub fn validate(&self) -> Result<(), SimulationError> {
        fn positive(name: &'static str, value: f32) -> Result<(), SimulationError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(SimulationError::InvalidParams {
                    name,
                    reason: format!("must be positive and finite, got {value}"),
                })
            }
        }

        fn probability(name: &'static str, value: f32) -> Result<(), SimulationError> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(SimulationError::InvalidParams {
                    name,
                    reason: format!("must be within [0, 1], got {value}"),
                })
            }
        }

        positive("box_width", self.box_width)?;
        positive("box_height", self.box_height)?;
        positive("max_speed", self.max_speed)?;
        positive("distance_scale", self.distance_scale)?;
        positive("mutation_interval", self.mutation_interval)?;
        positive("selection_interval", self.selection_interval)?;
        positive("evolution_interval", self.evolution_interval)?;
        probability("smoothing", self.smoothing)?;
        probability("mutation_rate", self.mutation_rate)?;
        probability("crossover_rate", self.crossover_rate)?;
        Ok(())
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SimulationError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads and validates parameters from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let json = std::fs::read_to_string(path)?;
        let params: Params = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }
}
