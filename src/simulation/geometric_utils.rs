//! Geometric utility functions for distances, bearings and the toroidal world.

use std::f32::consts::TAU;

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::{Array1, array};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;

use super::locatable::Locatable;

/// Calculates the Euclidean distance between two positions.
pub fn distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    Euclidean.distance(Point::new(a[0], a[1]), Point::new(b[0], b[1]))
}

/// Cosine and sine of the angle between the observer's heading and the
/// direction towards `target`.
///
/// # Returns
///
/// `None` when `target` coincides with the observer's position, since there is
/// no direction to measure.
pub fn cosine_sine<L: Locatable + ?Sized>(observer: &L, target: &Array1<f32>) -> Option<(f32, f32)> {
    let pos = observer.pos();
    let dx = target[0] - pos[0];
    let dy = target[1] - pos[1];
    let length = dx.hypot(dy);
    if length <= f32::MIN_POSITIVE || !length.is_finite() {
        return None;
    }

    let (sin_rot, cos_rot) = observer.rot().sin_cos();
    let cosine = (cos_rot * dx + sin_rot * dy) / length;
    let sine = (cos_rot * dy - sin_rot * dx) / length;
    Some((cosine.clamp(-1.0, 1.0), sine.clamp(-1.0, 1.0)))
}

/// Signed angle in `[-π, π]` from the observer's heading to `target`.
///
/// Negative values mean the target lies clockwise of the heading in screen
/// coordinates. A target at the observer's own position has bearing `0`.
pub fn relative_bearing<L: Locatable + ?Sized>(observer: &L, target: &Array1<f32>) -> f32 {
    match cosine_sine(observer, target) {
        Some((cosine, sine)) => {
            let angle = cosine.acos();
            if sine < 0.0 { -angle } else { angle }
        }
        None => 0.0,
    }
}

/// Checks whether `target` lies in the forward half-plane of the observer.
///
/// The field of view is a fixed 180°. A target at the observer's own position
/// is never visible.
pub fn can_see<L: Locatable + ?Sized>(observer: &L, target: &Array1<f32>) -> bool {
    cosine_sine(observer, target).is_some_and(|(cosine, _)| cosine >= 0.0)
}

/// Wraps a position vector around the world boundaries (toroidal topology).
///
/// # Arguments
///
/// * `v` - Mutable position vector to wrap
/// * `box_width` - Width of the world
/// * `box_height` - Height of the world
pub fn wrap_around_mut(v: &mut Array1<f32>, box_width: f32, box_height: f32) {
    v[0] = wrap(v[0], box_width);
    v[1] = wrap(v[1], box_height);
}

/// Maps an angle in radians into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    wrap(angle, TAU)
}

fn wrap(value: f32, bound: f32) -> f32 {
    let wrapped = value.rem_euclid(bound);
    // rem_euclid rounds tiny negative values up to `bound` itself
    if wrapped >= bound { 0.0 } else { wrapped }
}

/// Uniformly random position inside the world.
pub fn random_point(box_width: f32, box_height: f32) -> Array1<f32> {
    let mut pos = Array1::random(2, Uniform::new(0.0_f32, 1.0)) * array![box_width, box_height];
    wrap_around_mut(&mut pos, box_width, box_height);
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::obstacle::Obstacle;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn observer(x: f32, y: f32, rot: f32) -> Obstacle {
        Obstacle::new_at(array![x, y], rot)
    }

    #[test]
    fn test_distance() {
        assert!((distance(&array![0.0, 0.0], &array![3.0, 4.0]) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_bearing_sign_follows_sine() {
        let o = observer(0.0, 0.0, 0.0);
        assert!((relative_bearing(&o, &array![0.0, 10.0]) - FRAC_PI_2).abs() < 1e-5);
        assert!((relative_bearing(&o, &array![0.0, -10.0]) + FRAC_PI_2).abs() < 1e-5);
        assert!(relative_bearing(&o, &array![10.0, 0.0]).abs() < 1e-5);
        assert!((relative_bearing(&o, &array![-10.0, 0.0]).abs() - PI).abs() < 1e-5);
    }

    #[test]
    fn test_bearing_is_relative_to_heading() {
        let o = observer(5.0, 5.0, FRAC_PI_2);
        assert!(relative_bearing(&o, &array![5.0, 50.0]).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_bearing_is_zero() {
        let o = observer(7.0, 7.0, 1.0);
        assert_eq!(relative_bearing(&o, &array![7.0, 7.0]), 0.0);
        assert!(!can_see(&o, &array![7.0, 7.0]));
    }

    #[test]
    fn test_field_of_view_is_forward_half_plane() {
        let o = observer(0.0, 0.0, 0.0);
        assert!(can_see(&o, &array![10.0, 0.0]));
        assert!(can_see(&o, &array![0.0, 10.0]));
        assert!(!can_see(&o, &array![-1.0, 10.0]));
    }

    #[test]
    fn test_wrap_stays_in_bounds() {
        for value in [-1e-9_f32, -800.0, -1e7, 805.0, 1600.0, 0.0, 799.999] {
            let mut v = array![value, value];
            wrap_around_mut(&mut v, 800.0, 600.0);
            assert!(v[0] >= 0.0 && v[0] < 800.0, "x={} from {}", v[0], value);
            assert!(v[1] >= 0.0 && v[1] < 600.0, "y={} from {}", v[1], value);
        }
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(7.0) - (7.0 - TAU)).abs() < 1e-5);
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-5);
        assert_eq!(normalize_angle(TAU), 0.0);
        for angle in [-1e-9_f32, 0.0, 75.99999, -1e5, PI] {
            let normalized = normalize_angle(angle);
            assert!((0.0..TAU).contains(&normalized), "{normalized} from {angle}");
        }
    }

    #[test]
    fn test_random_point_in_bounds() {
        for _ in 0..100 {
            let p = random_point(640.0, 480.0);
            assert!(p[0] >= 0.0 && p[0] < 640.0);
            assert!(p[1] >= 0.0 && p[1] < 480.0);
        }
    }
}
