//! Main ecosystem simulation.
//!
//! The ecosystem owns all seekers and obstacles. Each step:
//! - Senses the world for every seeker before anyone moves
//! - Lets every seeker's brain adjust heading and speed
//! - Removes consumed obstacles, respawning them if enabled
//! - Moves seekers (and drifting obstacles) and wraps them around the world

use std::collections::BTreeSet;

use log::{debug, info};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::error::SimulationError;
use super::event_log::{EventKind, EventLog};
use super::evolution;
use super::geometric_utils::wrap_around_mut;
use super::locatable::Locatable;
use super::obstacle::{Obstacle, random_rotation};
use super::params::Params;
use super::perception::{Perception, perceive};
use super::seeker::Seeker;

/// Population state of the simulation.
#[derive(Debug, Clone)]
pub struct Ecosystem {
    /// Living seekers. Order carries no meaning beyond tie-breaking.
    pub seekers: Vec<Seeker>,
    /// Obstacles waiting to be consumed.
    pub obstacles: Vec<Obstacle>,
    /// Number of evolution events plus one.
    pub epoch: u32,
    /// Accumulated simulation time in ticks.
    pub time: f32,
    /// Recent notable events.
    pub event_log: EventLog,
    next_id: usize,
}

/// Read-only view of one seeker for presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekerView {
    /// Seeker identifier.
    pub id: usize,
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Heading in radians.
    pub rot: f32,
    /// Current speed.
    pub speed: f32,
    /// Current fitness.
    pub fitness: f32,
    /// Obstacles consumed.
    pub consumed: u32,
    /// Ticks survived.
    pub lifetime: u64,
}

/// Read-only view of one obstacle for presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Heading in radians.
    pub rot: f32,
}

/// Snapshot of the whole population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current epoch.
    pub epoch: u32,
    /// Simulation time in ticks.
    pub time: f32,
    /// All seekers, in population order.
    pub seekers: Vec<SeekerView>,
    /// All obstacles, in population order.
    pub obstacles: Vec<ObstacleView>,
}

impl Ecosystem {
    /// Creates a new ecosystem with random seekers and obstacles.
    pub fn new(params: &Params) -> Self {
        let mut ecosystem = Self::empty(params);
        ecosystem.populate(params);
        ecosystem
    }

    /// Creates an ecosystem with no seekers and no obstacles.
    pub fn empty(params: &Params) -> Self {
        Self {
            seekers: Vec::with_capacity(params.n_seekers),
            obstacles: Vec::with_capacity(params.n_obstacles),
            epoch: 1,
            time: 0.,
            event_log: EventLog::new(params.event_log_size),
            next_id: 0,
        }
    }

    fn populate(&mut self, params: &Params) {
        for _ in 0..params.n_seekers {
            self.spawn_seeker(params, None);
        }
        for _ in 0..params.n_obstacles {
            self.spawn_obstacle(params, None);
        }
    }

    /// Discards every entity and recreates the initial population.
    pub fn reset(&mut self, params: &Params) {
        self.seekers.clear();
        self.obstacles.clear();
        self.epoch = 1;
        self.populate(params);

        info!(
            "ecosystem reset: {} seekers, {} obstacles",
            self.seekers.len(),
            self.obstacles.len()
        );
        self.event_log
            .log(self.time, EventKind::Reset, "Reset".to_string(), None);
    }

    /// Reserves a fresh seeker identifier.
    pub fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Adds a seeker at `at`, or at a random position.
    ///
    /// Positions outside the world are wrapped into it.
    ///
    /// # Returns
    ///
    /// The new seeker's identifier.
    pub fn spawn_seeker(&mut self, params: &Params, at: Option<Array1<f32>>) -> usize {
        let id = self.next_id();
        let seeker = match at {
            Some(mut pos) => {
                wrap_around_mut(&mut pos, params.box_width, params.box_height);
                Seeker::new_at(id, pos, params)
            }
            None => Seeker::new_random(id, params),
        };
        self.seekers.push(seeker);
        id
    }

    /// Adds an obstacle at `at`, or at a random position.
    ///
    /// Positions outside the world are wrapped into it.
    pub fn spawn_obstacle(&mut self, params: &Params, at: Option<Array1<f32>>) {
        let obstacle = match at {
            Some(mut pos) => {
                wrap_around_mut(&mut pos, params.box_width, params.box_height);
                Obstacle::new_at(pos, random_rotation())
            }
            None => Obstacle::new_random(params),
        };
        self.obstacles.push(obstacle);
    }

    /// Advances the simulation by one tick.
    ///
    /// # Arguments
    ///
    /// * `params` - Simulation parameters
    /// * `dt` - Elapsed time in ticks; may be fractional
    pub fn step(&mut self, params: &Params, dt: f32) {
        self.time += dt;

        // sense everything before anyone turns or moves
        let perceptions: Vec<Perception> = self
            .seekers
            .iter()
            .map(|seeker| perceive(seeker, &self.seekers, &self.obstacles, params))
            .collect();

        let mut consumed = BTreeSet::new();
        for (seeker, perception) in self.seekers.iter_mut().zip(&perceptions) {
            for &obstacle_idx in &perception.collisions {
                seeker.consumed += 1;
                consumed.insert(obstacle_idx);
                debug!("seeker {} consumed obstacle {}", seeker.id, obstacle_idx);
            }
            seeker.think(&perception.sensors(params), params);
        }

        // descending order keeps the remaining indices valid
        for &obstacle_idx in consumed.iter().rev() {
            let obstacle = self.obstacles.remove(obstacle_idx);
            self.event_log.log(
                self.time,
                EventKind::Consumed,
                "Obstacle consumed".to_string(),
                Some(obstacle.pos),
            );
        }
        if params.auto_respawn {
            for _ in 0..consumed.len() {
                self.spawn_obstacle(params, None);
            }
        }

        for seeker in &mut self.seekers {
            seeker.update(dt);
            seeker.wrap_around(params.box_width, params.box_height);
        }

        if params.dynamic_obstacles {
            for obstacle in &mut self.obstacles {
                obstacle.update(dt);
                obstacle.wrap_around(params.box_width, params.box_height);
            }
        }
    }

    /// Replaces the brain layers of one random seeker. See [`evolution::mutate`].
    pub fn mutate(&mut self, params: &Params) -> Result<usize, SimulationError> {
        evolution::mutate(self, params)
    }

    /// Replaces the worst seeker with a child of the best two. See [`evolution::select`].
    pub fn select(&mut self, params: &Params) -> Result<usize, SimulationError> {
        evolution::select(self, params)
    }

    /// Replaces the worst half of the population. See [`evolution::evolve`].
    pub fn evolve(&mut self, params: &Params) -> Result<u32, SimulationError> {
        evolution::evolve(self, params)
    }

    /// Captures positions, headings, and scores of every entity.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            epoch: self.epoch,
            time: self.time,
            seekers: self
                .seekers
                .iter()
                .map(|seeker| SeekerView {
                    id: seeker.id,
                    x: seeker.pos[0],
                    y: seeker.pos[1],
                    rot: seeker.rot,
                    speed: seeker.speed,
                    fitness: seeker.fitness(),
                    consumed: seeker.consumed,
                    lifetime: seeker.lifetime,
                })
                .collect(),
            obstacles: self
                .obstacles
                .iter()
                .map(|obstacle| ObstacleView {
                    x: obstacle.pos[0],
                    y: obstacle.pos[1],
                    rot: obstacle.rot,
                })
                .collect(),
        }
    }
}
