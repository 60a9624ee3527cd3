//! Frame-rate-independent exponential smoothing.
//!
//! Values glide toward a target by a fraction that depends only on elapsed
//! time, so convergence speed is identical at 30 or 240 fps. Once a value is
//! within [`SNAP_EPSILON`] of its target it is set exactly onto it; without
//! the snap the approach would be asymptotic and the last fraction of a unit
//! would jitter forever.

use raylib::prelude::Vector2;

/// Distance at which a smoothed value snaps exactly onto its target.
const SNAP_EPSILON: f32 = 0.001;

/// `|a - b| <= epsilon`.
pub fn almost_equals(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Move `value` toward `target` by an exponential-decay step sized for
/// `delta_t`. Returns true once the target has been reached.
pub fn animate_to_target(value: &mut f32, target: f32, delta_t: f32, rate: f32) -> bool {
    *value += (target - *value) * (1.0 - 2.0_f32.powf(-rate * delta_t));
    if almost_equals(*value, target, SNAP_EPSILON) {
        *value = target;
        return true;
    }
    false
}

/// Per-axis [`animate_to_target`]; true once both axes have reached the target.
pub fn animate_vec2_to_target(value: &mut Vector2, target: Vector2, delta_t: f32, rate: f32) -> bool {
    let x_done = animate_to_target(&mut value.x, target.x, delta_t, rate);
    let y_done = animate_to_target(&mut value.y, target.y, delta_t, rate);
    x_done && y_done
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_step_covers_the_expected_fraction() {
        let mut value = 0.0f32;
        let reached = animate_to_target(&mut value, 100.0, 1.0, 10.0);

        // 100 * (1 - 2^-10), still ~0.1 away from the target: no snap yet
        assert!(!reached);
        assert!((value - 99.902_34).abs() < 1e-3);
        assert!(value != 100.0);
    }

    #[test]
    fn distance_shrinks_monotonically() {
        let mut value = 0.0f32;
        let mut previous = 100.0f32;
        for _ in 0..60 {
            animate_to_target(&mut value, 100.0, 0.016, 10.0);
            let distance = (100.0 - value).abs();
            assert!(distance < previous);
            previous = distance;
        }
    }

    #[test]
    fn converges_exactly_via_snap() {
        let mut value = 0.0f32;
        let mut reached = false;
        for _ in 0..1000 {
            if animate_to_target(&mut value, 100.0, 0.016, 10.0) {
                reached = true;
                break;
            }
        }
        assert!(reached);
        assert_eq!(value, 100.0);
    }

    #[test]
    fn larger_delta_covers_more_ground() {
        let mut slow = 0.0f32;
        let mut fast = 0.0f32;
        animate_to_target(&mut slow, 100.0, 0.01, 10.0);
        animate_to_target(&mut fast, 100.0, 0.1, 10.0);
        assert!(fast > slow);
    }

    #[test]
    fn vector_variant_animates_both_axes() {
        let mut value = Vector2 { x: 0.0, y: 50.0 };
        let target = Vector2 { x: 10.0, y: 50.0 };
        let reached = animate_vec2_to_target(&mut value, target, 1.0, 10.0);

        // y is already on target and snaps; x is still on its way
        assert!(!reached);
        assert_eq!(value.y, 50.0);
        assert!(value.x > 9.9 && value.x < 10.0);
    }

    #[test]
    fn almost_equals_is_inclusive_at_epsilon() {
        assert!(almost_equals(1.0, 1.5, 0.5));
        assert!(!almost_equals(1.0, 1.51, 0.5));
    }
}
