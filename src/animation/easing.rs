//! Timing curves. All take progress `p` in `0.0..=1.0`.

use std::f32::consts::PI;

pub fn linear(p: f32) -> f32 {
    p.clamp(0.0, 1.0)
}

/// Cubic ease-out: fast start, decelerating into the target.
pub fn ease_out_cubic(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Half sine: 0 -> 1 -> 0. Used for hops and arcs.
pub fn bounce(p: f32) -> f32 {
    (p.clamp(0.0, 1.0) * PI).sin()
}

/// Scale factor oscillating around 1.0, `cycles` half-waves over the step.
pub fn pulse(p: f32, amplitude: f32, cycles: f32) -> f32 {
    1.0 + amplitude * (p.clamp(0.0, 1.0) * PI * cycles).sin()
}

/// Rise with ease-out over the first half, fall with ease-out over the
/// second half. Peaks at 1.0 when `p == 0.5`.
pub fn lift(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    if p < 0.5 {
        ease_out_cubic(p * 2.0)
    } else {
        1.0 - ease_out_cubic((p - 0.5) * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_ease_out_endpoints() {
        assert!(close(ease_out_cubic(0.0), 0.0));
        assert!(close(ease_out_cubic(1.0), 1.0));
        assert!(close(ease_out_cubic(0.5), 0.875));
        assert!(close(ease_out_cubic(2.0), 1.0));
    }

    #[test]
    fn test_ease_out_rate_decreases() {
        let first = ease_out_cubic(0.1) - ease_out_cubic(0.0);
        let last = ease_out_cubic(1.0) - ease_out_cubic(0.9);
        assert!(first > last);
    }

    #[test]
    fn test_bounce_and_lift_return_to_rest() {
        assert!(close(bounce(0.0), 0.0));
        assert!(close(bounce(0.5), 1.0));
        assert!(bounce(1.0).abs() < 1e-5);
        assert!(close(lift(0.5), 1.0));
        assert!(close(lift(1.0), 0.0));
    }

    #[test]
    fn test_pulse_centered_on_one() {
        assert!(close(pulse(0.0, 0.3, 4.0), 1.0));
        assert!(close(pulse(1.0 / 8.0, 0.3, 4.0), 1.3));
    }
}
