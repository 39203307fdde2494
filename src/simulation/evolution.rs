//! Genetic operators.
//!
//! All operators rank seekers by [`Seeker::fitness`] with a stable sort, so
//! seekers of equal fitness keep their population order. Every operator
//! checks the population size first and returns
//! [`SimulationError::PreconditionViolation`] without touching the ecosystem
//! when it is too small.

use log::{info, warn};
use rand::Rng;

use super::brain::Brain;
use super::ecosystem::Ecosystem;
use super::error::SimulationError;
use super::event_log::EventKind;
use super::params::Params;
use super::seeker::Seeker;

fn require(ecosystem: &Ecosystem, operator: &'static str, required: usize) -> Result<(), SimulationError> {
    let found = ecosystem.seekers.len();
    if found < required {
        warn!("{operator} skipped: needs {required} seekers, found {found}");
        return Err(SimulationError::PreconditionViolation {
            operator,
            required,
            found,
        });
    }
    Ok(())
}

/// Sorts seekers by fitness, highest first. Equal fitness keeps list order.
pub fn sort_by_fitness(seekers: &mut [Seeker]) {
    seekers.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
}

/// Creates a child seeker at a random position with a crossed brain.
///
/// # Arguments
///
/// * `parent1` - Parent whose layers are picked with probability `params.crossover_rate`
/// * `parent2` - Parent supplying the remaining layers
/// * `id` - Identifier for the child
/// * `params` - Simulation parameters
pub fn cross(parent1: &Seeker, parent2: &Seeker, id: usize, params: &Params) -> Seeker {
    let mut child = Seeker::new_random(id, params);
    child.brain = Brain::crossover(&parent1.brain, &parent2.brain, params.crossover_rate);
    child
}

/// Mutates the brain of one seeker chosen uniformly at random.
///
/// # Returns
///
/// The identifier of the mutated seeker.
pub fn mutate(ecosystem: &mut Ecosystem, params: &Params) -> Result<usize, SimulationError> {
    require(ecosystem, "mutation", 1)?;

    let idx = rand::rng().random_range(0..ecosystem.seekers.len());
    let seeker = &mut ecosystem.seekers[idx];
    let replaced = seeker.brain.mutate(params.mutation_rate);
    let id = seeker.id;

    info!("mutation: seeker {id}, {replaced} layers replaced");
    ecosystem.event_log.log(
        ecosystem.time,
        EventKind::Mutation,
        "Mutation".to_string(),
        None,
    );
    Ok(id)
}

/// Replaces the least fit seeker with a child of the two fittest.
///
/// # Returns
///
/// The identifier of the new child.
pub fn select(ecosystem: &mut Ecosystem, params: &Params) -> Result<usize, SimulationError> {
    require(ecosystem, "selection", 2)?;

    sort_by_fitness(&mut ecosystem.seekers);
    let id = ecosystem.next_id();
    let child = cross(&ecosystem.seekers[0], &ecosystem.seekers[1], id, params);

    if let Some(worst) = ecosystem.seekers.pop() {
        info!(
            "selection: seeker {} (fitness {:.3}) replaced by seeker {id}",
            worst.id,
            worst.fitness()
        );
        ecosystem.event_log.log(
            ecosystem.time,
            EventKind::Culled,
            format!("Seeker {} culled", worst.id),
            Some(worst.pos),
        );
    }
    ecosystem.seekers.push(child);

    ecosystem.event_log.log(
        ecosystem.time,
        EventKind::Selection,
        "Selection & Crossing".to_string(),
        None,
    );
    Ok(id)
}

/// Replaces the worse half of the population with children of the better half.
///
/// The better half holds `len / 2` seekers (the smaller half when `len` is
/// odd). One child per removed seeker is bred from two parents drawn
/// uniformly, with replacement, from the better half.
///
/// # Returns
///
/// The new epoch.
pub fn evolve(ecosystem: &mut Ecosystem, params: &Params) -> Result<u32, SimulationError> {
    require(ecosystem, "evolution", 2)?;

    sort_by_fitness(&mut ecosystem.seekers);
    let best_len = ecosystem.seekers.len() / 2;
    let worst_len = ecosystem.seekers.len() - best_len;

    let mut rng = rand::rng();
    let mut children = Vec::with_capacity(worst_len);
    for _ in 0..worst_len {
        let j = rng.random_range(0..best_len);
        let k = rng.random_range(0..best_len);
        let id = ecosystem.next_id();
        children.push(cross(&ecosystem.seekers[j], &ecosystem.seekers[k], id, params));
    }

    let culled = ecosystem.seekers.split_off(best_len);
    for seeker in culled {
        ecosystem.event_log.log(
            ecosystem.time,
            EventKind::Culled,
            format!("Seeker {} culled", seeker.id),
            Some(seeker.pos),
        );
    }
    ecosystem.seekers.extend(children);
    ecosystem.epoch += 1;

    info!(
        "evolution: epoch {}, {} seekers replaced",
        ecosystem.epoch, worst_len
    );
    ecosystem.event_log.log(
        ecosystem.time,
        EventKind::Evolution,
        format!("Evolution: epoch {}", ecosystem.epoch),
        None,
    );
    Ok(ecosystem.epoch)
}
