//! Temporal easing of the shader's time-offset parameter.
//!
//! The displayed offset chases a randomly resampled target by exponential
//! smoothing, so the animation drifts rather than jumps when the target
//! changes.

/// Smoothing gain applied per unit of (scaled) frame time.
const EASE_RATE: f32 = 2.25;

/// Targets are sampled from the closed range `[-TARGET_SPAN, TARGET_SPAN]`.
pub const TARGET_SPAN: f32 = 2.0;

/// Map a unit sample in `[0, 1)` onto the target range `[-2, 2]`.
pub fn target_from_unit(unit: f64) -> f32 {
    ((unit * 2.0 - 1.0) as f32) * TARGET_SPAN
}

/// An animation parameter that converges toward a target value without
/// ever being discontinuous.
///
/// `step` scales the decay factor directly by `dt`, which is an exact
/// discretization of exponential decay only in the limit of small steps.
/// `dt` is deliberately left unclamped, so a large frame-time spike (e.g.
/// a backgrounded tab) can step past the target in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasedOffset {
    current: f32,
    target: f32,
}

impl Default for EasedOffset {
    fn default() -> Self {
        Self {
            current: 1.0,
            target: 1.0,
        }
    }
}

impl EasedOffset {
    pub fn new(current: f32, target: f32) -> Self {
        Self { current, target }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Advance the eased value toward the target and return it.
    pub fn step(&mut self, dt: f32) -> f32 {
        self.current += (self.target - self.current) * (dt * EASE_RATE);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dt_is_a_noop() {
        let mut offset = EasedOffset::new(1.0, -0.5);
        offset.step(0.0);
        assert_eq!(offset.current(), 1.0);
    }

    #[test]
    fn starts_at_one() {
        let offset = EasedOffset::default();
        assert_eq!(offset.current(), 1.0);
        assert_eq!(offset.target(), 1.0);
    }

    #[test]
    fn step_lands_between_previous_value_and_target() {
        // dt * EASE_RATE stays below 1 for every dt here, so a single step
        // must end strictly between the previous value and the target.
        for dt in [0.005, 0.016, 0.05, 0.1, 0.2, 0.4] {
            let mut rising = EasedOffset::new(0.0, 1.0);
            let value = rising.step(dt);
            assert!(value > 0.0 && value < 1.0, "dt {dt}: rose to {value}");

            let mut falling = EasedOffset::new(1.0, -2.0);
            let value = falling.step(dt);
            assert!(value < 1.0 && value > -2.0, "dt {dt}: fell to {value}");
        }
    }

    #[test]
    fn step_is_a_noop_at_the_target() {
        let mut offset = EasedOffset::new(0.75, 0.75);
        offset.step(0.25);
        assert_eq!(offset.current(), 0.75);
    }

    #[test]
    fn converges_onto_the_target() {
        let mut offset = EasedOffset::new(1.0, -1.5);
        for _ in 0..500 {
            offset.step(0.016);
        }
        assert!((offset.current() - -1.5).abs() < 1e-3);
    }

    #[test]
    fn retargeting_keeps_the_displayed_value() {
        let mut offset = EasedOffset::new(0.3, 0.3);
        offset.set_target(-2.0);
        assert_eq!(offset.current(), 0.3);
        assert_eq!(offset.target(), -2.0);
    }

    #[test]
    fn target_from_unit_covers_the_closed_range() {
        assert_eq!(target_from_unit(0.0), -2.0);
        assert_eq!(target_from_unit(0.5), 0.0);
        assert!((target_from_unit(0.999_999) - 2.0).abs() < 1e-4);

        // Sweep a deterministic sequence of unit samples.
        let mut state = 0x5EED_A55Eu32;
        for _ in 0..1000 {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            let unit = f64::from(state >> 8) / f64::from(u32::MAX >> 8);
            let target = target_from_unit(unit);
            assert!((-2.0..=2.0).contains(&target), "target {target} out of range");
        }
    }
}
