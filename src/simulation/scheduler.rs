//! Timers for the automatic genetic operator modes.
//!
//! The core never triggers operators on its own. A presentation layer owns a
//! [`Scheduler`], feeds it wall-clock time, and runs whatever modes came due.
//! Timers keep running while their mode is off; a mode that is switched on
//! fires at the next multiple of its interval.

use log::info;

use super::ecosystem::Ecosystem;
use super::error::SimulationError;
use super::params::Params;

/// Genetic operators that can run automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoMode {
    /// Periodic [`Ecosystem::mutate`].
    Mutation,
    /// Periodic [`Ecosystem::select`].
    Selection,
    /// Periodic [`Ecosystem::evolve`].
    Evolution,
}

impl AutoMode {
    /// All modes, in the order timers are checked.
    pub const ALL: [AutoMode; 3] = [AutoMode::Mutation, AutoMode::Selection, AutoMode::Evolution];

    fn index(self) -> usize {
        match self {
            AutoMode::Mutation => 0,
            AutoMode::Selection => 1,
            AutoMode::Evolution => 2,
        }
    }

    fn interval(self, params: &Params) -> f32 {
        match self {
            AutoMode::Mutation => params.mutation_interval,
            AutoMode::Selection => params.selection_interval,
            AutoMode::Evolution => params.evolution_interval,
        }
    }

    /// Runs this mode's operator on the ecosystem.
    pub fn apply(self, ecosystem: &mut Ecosystem, params: &Params) -> Result<(), SimulationError> {
        match self {
            AutoMode::Mutation => ecosystem.mutate(params).map(|_| ()),
            AutoMode::Selection => ecosystem.select(params).map(|_| ()),
            AutoMode::Evolution => ecosystem.evolve(params).map(|_| ()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Timer {
    enabled: bool,
    elapsed: f32,
}

/// Interval timers for the automatic modes.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    timers: [Timer; 3],
}

impl Scheduler {
    /// Creates a scheduler with every mode switched off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips a mode on or off and returns its new state.
    pub fn toggle(&mut self, mode: AutoMode) -> bool {
        let timer = &mut self.timers[mode.index()];
        timer.enabled = !timer.enabled;
        info!("auto {:?} {}", mode, if timer.enabled { "on" } else { "off" });
        timer.enabled
    }

    /// Checks whether a mode is switched on.
    pub fn is_enabled(&self, mode: AutoMode) -> bool {
        self.timers[mode.index()].enabled
    }

    /// Advances all timers by `seconds` and returns the enabled modes that came due.
    ///
    /// A mode is reported at most once per call even if several intervals elapsed.
    pub fn advance(&mut self, seconds: f32, params: &Params) -> Vec<AutoMode> {
        let mut due = Vec::new();
        for mode in AutoMode::ALL {
            let interval = mode.interval(params);
            let timer = &mut self.timers[mode.index()];
            timer.elapsed += seconds;
            if timer.elapsed >= interval {
                timer.elapsed %= interval;
                if timer.enabled {
                    due.push(mode);
                }
            }
        }
        due
    }

    /// Advances the timers and applies every mode that came due.
    ///
    /// Operators refused because the population is too small are skipped.
    pub fn run(&mut self, seconds: f32, ecosystem: &mut Ecosystem, params: &Params) -> Vec<AutoMode> {
        self.advance(seconds, params)
            .into_iter()
            .filter(|mode| mode.apply(ecosystem, params).is_ok())
            .collect()
    }
}
