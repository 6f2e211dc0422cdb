//! One-shot fade/fill animation using iced_anim
//!
//! Drives reveal fades and skill bar fills: a single eased transition
//! from the current value toward a target, ticked on animation frames.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Reveal fade duration (slow enough to read as a transition)
const FADE_DURATION: Duration = Duration::from_millis(600);

/// A single eased value animating toward a target in [0, 1]
#[derive(Debug)]
pub struct FadeAnimation {
    animation: Animated<f32>,
}

fn fade_easing(duration: Duration) -> Easing {
    Easing::EASE_OUT.with_duration(duration)
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeAnimation {
    /// Create a new animation resting at zero
    pub fn new() -> Self {
        Self::with_duration(FADE_DURATION)
    }

    /// Create a new animation resting at zero with a custom duration
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing(duration)),
        }
    }

    /// Animate toward a target value; re-applying the current target is a no-op
    pub fn set_target(&mut self, target: f32) {
        let target = target.clamp(0.0, 1.0);
        if (*self.animation.target() - target).abs() > f32::EPSILON {
            self.animation.update(target.into());
        }
    }

    /// Current target value
    pub fn target(&self) -> f32 {
        *self.animation.target()
    }

    /// Current interpolated value (0.0 to 1.0)
    pub fn value(&self) -> f32 {
        *self.animation.value()
    }

    /// Check if the animation is in progress
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }

    /// Jump straight to the target without interpolating
    ///
    /// Used when reduced motion is enabled: the style mutation still
    /// applies, only the transition frames are skipped.
    pub fn settle(&mut self) {
        let target = *self.animation.target();
        self.animation = Animated::transition(target, fade_easing(FADE_DURATION));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        let fade = FadeAnimation::new();
        assert_eq!(fade.value(), 0.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn target_is_clamped() {
        let mut fade = FadeAnimation::new();
        fade.set_target(1.5);
        assert_eq!(fade.target(), 1.0);
        fade.set_target(-0.5);
        assert_eq!(fade.target(), 0.0);
    }

    #[test]
    fn reapplying_target_is_idempotent() {
        let mut fade = FadeAnimation::new();
        fade.set_target(0.8);
        fade.settle();
        assert_eq!(fade.value(), 0.8);

        // The duplicate application from the second trigger path
        fade.set_target(0.8);
        assert!(!fade.is_animating());
        assert_eq!(fade.value(), 0.8);
    }

    #[test]
    fn settle_jumps_to_target() {
        let mut fade = FadeAnimation::new();
        fade.set_target(1.0);
        fade.settle();
        assert_eq!(fade.value(), 1.0);
        assert!(!fade.is_animating());
    }
}
