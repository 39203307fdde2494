#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::array;
use seekers::simulation::brain::Brain;
use seekers::simulation::ecosystem::Ecosystem;
use seekers::simulation::error::SimulationError;
use seekers::simulation::event_log::EventKind;
use seekers::simulation::evolution::{cross, sort_by_fitness};
use seekers::simulation::params::Params;
use seekers::simulation::seeker::Seeker;

fn create_test_params() -> Params {
    Params {
        box_width: 800.0,
        box_height: 600.0,
        n_seekers: 10,
        n_obstacles: 0,
        ..Params::default()
    }
}

/// Ecosystem whose seekers have fitness `1000 / lifetime` each.
fn ecosystem_with_lifetimes(params: &Params, lifetimes: &[u64]) -> Ecosystem {
    let mut ecosystem = Ecosystem::empty(params);
    for &lifetime in lifetimes {
        let id = ecosystem.spawn_seeker(params, None);
        let seeker = ecosystem.seekers.iter_mut().find(|s| s.id == id).unwrap();
        seeker.lifetime = lifetime;
    }
    ecosystem
}

fn ids(ecosystem: &Ecosystem) -> Vec<usize> {
    ecosystem.seekers.iter().map(|s| s.id).collect()
}

#[test]
fn test_selection_two_seekers() {
    let params = create_test_params();
    // fitness 2 and 10
    let mut ecosystem = ecosystem_with_lifetimes(&params, &[500, 100]);
    let best_id = ecosystem.seekers[1].id;
    let worst_id = ecosystem.seekers[0].id;
    let parents: Vec<Brain> = ecosystem.seekers.iter().map(|s| s.brain.clone()).collect();

    let child_id = ecosystem.select(&params).unwrap();

    assert_eq!(ecosystem.seekers.len(), 2);
    let remaining = ids(&ecosystem);
    assert!(remaining.contains(&best_id));
    assert!(remaining.contains(&child_id));
    assert!(!remaining.contains(&worst_id));

    let child = ecosystem.seekers.iter().find(|s| s.id == child_id).unwrap();
    assert_eq!(child.lifetime, 0);
    for (i, layer) in child.brain.layers.iter().enumerate() {
        assert!(*layer == parents[0].layers[i] || *layer == parents[1].layers[i]);
    }
}

#[test]
fn test_selection_removes_least_fit() {
    let params = create_test_params();
    let mut ecosystem = ecosystem_with_lifetimes(&params, &[300, 50, 900, 120, 40, 700]);
    let worst_id = ecosystem.seekers[2].id;

    ecosystem.select(&params).unwrap();

    assert_eq!(ecosystem.seekers.len(), 6);
    assert!(!ids(&ecosystem).contains(&worst_id));
    assert_eq!(
        ecosystem.event_log.events().front().map(|e| e.kind),
        Some(EventKind::Selection)
    );
    assert!(
        ecosystem
            .event_log
            .events()
            .iter()
            .any(|e| e.kind == EventKind::Culled && e.pos.is_some())
    );
}

#[test]
fn test_evolution_replaces_worst_half() {
    let params = create_test_params();
    let mut ecosystem = ecosystem_with_lifetimes(&params, &[10, 20, 30, 40, 50, 60]);
    let best: Vec<usize> = ecosystem.seekers[..3].iter().map(|s| s.id).collect();
    let best_brains: Vec<Brain> = ecosystem.seekers[..3].iter().map(|s| s.brain.clone()).collect();

    let epoch = ecosystem.evolve(&params).unwrap();

    assert_eq!(epoch, 2);
    assert_eq!(ecosystem.epoch, 2);
    assert_eq!(ecosystem.seekers.len(), 6);
    assert_eq!(ids(&ecosystem)[..3], best[..]);

    for child in &ecosystem.seekers[3..] {
        assert!(!best.contains(&child.id));
        assert_eq!(child.lifetime, 0);
        for (i, layer) in child.brain.layers.iter().enumerate() {
            assert!(best_brains.iter().any(|brain| brain.layers[i] == *layer));
        }
    }
}

#[test]
fn test_evolution_odd_population() {
    let params = create_test_params();
    let mut ecosystem = ecosystem_with_lifetimes(&params, &[10, 20, 30, 40, 50]);
    let best: Vec<usize> = ecosystem.seekers[..2].iter().map(|s| s.id).collect();

    ecosystem.evolve(&params).unwrap();

    assert_eq!(ecosystem.seekers.len(), 5);
    // the smaller half survives
    assert_eq!(ids(&ecosystem)[..2], best[..]);
    assert!(ecosystem.seekers[2..].iter().all(|s| s.lifetime == 0));
}

#[test]
fn test_repeated_operators_keep_population_size() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params);

    for round in 0..20 {
        ecosystem.step(&params, 1.0);
        ecosystem.mutate(&params).unwrap();
        ecosystem.select(&params).unwrap();
        if round % 5 == 0 {
            ecosystem.evolve(&params).unwrap();
        }
        assert_eq!(ecosystem.seekers.len(), params.n_seekers);
    }
    assert_eq!(ecosystem.epoch, 5);

    let mut all_ids = ids(&ecosystem);
    all_ids.sort_unstable();
    all_ids.dedup();
    assert_eq!(all_ids.len(), params.n_seekers);
}

#[test]
fn test_mutation_touches_at_most_one_brain() {
    let params = Params {
        mutation_rate: 1.0,
        ..create_test_params()
    };
    let mut ecosystem = Ecosystem::new(&params);
    let before: Vec<Brain> = ecosystem.seekers.iter().map(|s| s.brain.clone()).collect();

    let mutated_id = ecosystem.mutate(&params).unwrap();

    let changed: Vec<usize> = ecosystem
        .seekers
        .iter()
        .zip(&before)
        .filter(|(seeker, brain)| seeker.brain != **brain)
        .map(|(seeker, _)| seeker.id)
        .collect();
    assert_eq!(changed, vec![mutated_id]);
}

#[test]
fn test_mutation_with_zero_rate_changes_nothing() {
    let params = Params {
        mutation_rate: 0.0,
        ..create_test_params()
    };
    let mut ecosystem = Ecosystem::new(&params);
    let before: Vec<Brain> = ecosystem.seekers.iter().map(|s| s.brain.clone()).collect();

    ecosystem.mutate(&params).unwrap();

    let after: Vec<Brain> = ecosystem.seekers.iter().map(|s| s.brain.clone()).collect();
    assert_eq!(after, before);
}

#[test]
fn test_offspring_layers_are_independent_copies() {
    let params = create_test_params();
    let a = Seeker::new_at(0, array![0.0, 0.0], &params);
    let b = Seeker::new_at(1, array![0.0, 0.0], &params);
    let (a_brain, b_brain) = (a.brain.clone(), b.brain.clone());

    let mut child = cross(&a, &b, 2, &params);
    child.brain.mutate(1.0);
    for layer in &mut child.brain.layers {
        layer.weights.fill(0.0);
    }

    assert_eq!(a.brain, a_brain);
    assert_eq!(b.brain, b_brain);
}

#[test]
fn test_preconditions_leave_state_untouched() {
    let params = create_test_params();

    let mut empty = Ecosystem::empty(&params);
    assert!(matches!(
        empty.mutate(&params),
        Err(SimulationError::PreconditionViolation { required: 1, found: 0, .. })
    ));

    let mut single = ecosystem_with_lifetimes(&params, &[10]);
    let before_id = single.seekers[0].id;
    assert!(matches!(
        single.select(&params),
        Err(SimulationError::PreconditionViolation { required: 2, found: 1, .. })
    ));
    assert!(matches!(
        single.evolve(&params),
        Err(SimulationError::PreconditionViolation { operator: "evolution", .. })
    ));
    assert_eq!(single.epoch, 1);
    assert_eq!(ids(&single), vec![before_id]);
    assert!(single.mutate(&params).is_ok());
}

#[test]
fn test_fresh_seekers_rank_last() {
    let params = create_test_params();
    let mut ecosystem = ecosystem_with_lifetimes(&params, &[0, 100, 0, 50]);
    sort_by_fitness(&mut ecosystem.seekers);

    let fitness: Vec<f32> = ecosystem.seekers.iter().map(Seeker::fitness).collect();
    assert_eq!(fitness, vec![20.0, 10.0, 0.0, 0.0]);
    // equal fitness keeps population order
    assert!(ecosystem.seekers[2].id < ecosystem.seekers[3].id);
}
