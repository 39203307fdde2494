//! Perception: what a seeker sees at the start of a tick.
//!
//! A seeker only sees entities in its forward half-plane. Of those it reports
//! the nearest other seeker and the nearest obstacle to its brain, and it
//! collides with every visible obstacle closer than the collision radius.

use ndarray::{Array1, array};

use super::geometric_utils::{can_see, distance, relative_bearing};
use super::locatable::Locatable;
use super::obstacle::Obstacle;
use super::params::Params;
use super::seeker::Seeker;

/// A visible entity, by index into its population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    /// Index into the seeker or obstacle list.
    pub index: usize,
    /// Euclidean distance from the observer.
    pub distance: f32,
    /// Signed bearing from the observer's heading.
    pub bearing: f32,
}

/// Result of sensing for one seeker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Perception {
    /// Nearest visible seeker other than the observer.
    pub nearest_seeker: Option<Target>,
    /// Nearest visible obstacle.
    pub nearest_obstacle: Option<Target>,
    /// Indices of visible obstacles within the collision radius.
    pub collisions: Vec<usize>,
}

impl Perception {
    /// Builds the brain input vector.
    ///
    /// Layout: `[seeker bearing, seeker distance, obstacle bearing, obstacle distance]`
    /// with distances divided by `params.distance_scale`. Missing targets
    /// contribute zeros.
    pub fn sensors(&self, params: &Params) -> Array1<f32> {
        let encode = |target: Option<Target>| {
            target.map_or((0.0, 0.0), |t| (t.bearing, t.distance / params.distance_scale))
        };
        let (seeker_bearing, seeker_distance) = encode(self.nearest_seeker);
        let (obstacle_bearing, obstacle_distance) = encode(self.nearest_obstacle);
        array![seeker_bearing, seeker_distance, obstacle_bearing, obstacle_distance]
    }
}

/// Senses the world from the point of view of `seeker`.
///
/// Ties in distance go to the entity that comes first in its list.
pub fn perceive(
    seeker: &Seeker,
    seekers: &[Seeker],
    obstacles: &[Obstacle],
    params: &Params,
) -> Perception {
    let others = seekers.iter().enumerate().filter(|(_, other)| other.id != seeker.id);
    let nearest_seeker = nearest_visible(seeker, others);

    let mut collisions = Vec::new();
    for (i, obstacle) in obstacles.iter().enumerate() {
        if can_see(seeker, obstacle.pos()) && distance(seeker.pos(), obstacle.pos()) < params.collision_radius {
            collisions.push(i);
        }
    }
    let nearest_obstacle = nearest_visible(seeker, obstacles.iter().enumerate());

    Perception {
        nearest_seeker,
        nearest_obstacle,
        collisions,
    }
}

fn nearest_visible<'a, O, L>(observer: &O, candidates: impl Iterator<Item = (usize, &'a L)>) -> Option<Target>
where
    O: Locatable + ?Sized,
    L: Locatable + 'a,
{
    let mut nearest: Option<(usize, f32, &L)> = None;
    for (index, candidate) in candidates {
        if !can_see(observer, candidate.pos()) {
            continue;
        }
        let d = distance(observer.pos(), candidate.pos());
        if nearest.is_none_or(|(_, best, _)| d < best) {
            nearest = Some((index, d, candidate));
        }
    }

    nearest.map(|(index, distance, candidate)| Target {
        index,
        distance,
        bearing: relative_bearing(observer, candidate.pos()),
    })
}
