//! # Seekers - Neuro-evolution of pellet-chasing agents
//!
//! A population of seekers roams a toroidal world full of obstacles. Every
//! seeker looks at the nearest other seeker and the nearest obstacle in front of
//! it, feeds what it sees into a small feed-forward network and steers with the
//! result. Seekers that eat obstacles quickly score a high fitness and pass
//! their network layers on through selection and evolution.
//!
//! ## Features
//!
//! - Fixed 4-layer tanh network per seeker
//! - Forward 180° field of view with signed bearings
//! - Layer-wise mutation and crossover
//! - Steady-state selection and generational evolution
//! - Optional obstacle respawn and drifting obstacles
//! - Bounded event log for presentation layers
//!
//! ## Core Modules
//!
//! - [`simulation::ecosystem`] - Population state and the per-tick step
//! - [`simulation::brain`] - Neural decision network
//! - [`simulation::evolution`] - Genetic operators
//! - [`simulation::perception`] - Nearest-target sensing
//! - [`simulation::scheduler`] - Timers for the automatic operator modes

/// Core simulation logic and data structures.
pub mod simulation {
    /// Neural decision network for seeker brains.
    pub mod brain;
    /// Population state and the per-tick simulation step.
    pub mod ecosystem;
    /// Errors reported by the simulation.
    pub mod error;
    /// Bounded log of notable simulation events.
    pub mod event_log;
    /// Mutation, selection, crossover and evolution.
    pub mod evolution;
    /// Geometric utility functions for distances, bearings and wrapping.
    pub mod geometric_utils;
    /// Trait for locatable entities that move every tick.
    ///
    /// The [`locatable::Locatable`] trait is implemented by both entity kinds
    /// ([`seeker::Seeker`] and [`obstacle::Obstacle`]).
    pub mod locatable;
    /// Passive obstacles that seekers consume.
    pub mod obstacle;
    /// Simulation parameters.
    pub mod params;
    /// Nearest visible target search and sensor vectors.
    pub mod perception;
    /// Periodic triggering of the genetic operators.
    pub mod scheduler;
    /// Seeker state, decisions and fitness.
    pub mod seeker;
}
