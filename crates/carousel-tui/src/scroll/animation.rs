use std::time::{Duration, Instant};

use carousel_core::ScrollConfig;

use super::easing::{lerp, progress, EasingType, EasingTypeExt};

/// Derived timing values for [`ScrollConfig`]
pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Frame interval while an animation runs
    fn animation_tick_duration(&self) -> Duration;

    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / u64::from(self.animation_fps))
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Animates the visible horizontal offset of the scroll region.
///
/// The carousel sees the target offset immediately; only what is drawn
/// lags behind while the animation runs.
#[derive(Debug, Clone)]
pub struct OffsetAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: f64,
}

impl Default for OffsetAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl OffsetAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Offset currently drawn
    #[inline]
    pub fn current_offset(&self) -> f64 {
        self.current
    }

    /// Offset the animation ends at
    pub fn target_offset(&self) -> f64 {
        self.animation.as_ref().map_or(self.current, |a| a.to)
    }

    /// Move immediately, dropping any running animation
    pub fn jump_to(&mut self, offset: f64) {
        self.animation = None;
        self.current = offset;
    }

    /// Start animating from the drawn offset towards `target`
    pub fn animate_to(&mut self, target: f64, now: Instant) {
        if !self.config.is_smooth() || self.current == target {
            self.jump_to(target);
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance to `now` and return the drawn offset
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(anim) = &self.animation {
            let t = progress(anim.start, anim.duration, now);
            if t >= 1.0 {
                self.current = anim.to;
                self.animation = None;
            } else {
                self.current = lerp(anim.from, anim.to, anim.easing.apply(t));
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(duration_ms: u64) -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            easing: EasingType::Linear,
            ..Default::default()
        }
    }

    #[test]
    fn test_jump_when_smooth_disabled() {
        let mut animator = OffsetAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });

        animator.animate_to(300.0, Instant::now());
        assert!(!animator.is_animating());
        assert_eq!(animator.current_offset(), 300.0);
    }

    #[test]
    fn test_animation_interpolates_then_lands() {
        let start = Instant::now();
        let mut animator = OffsetAnimator::new(smooth(100));

        animator.animate_to(300.0, start);
        assert!(animator.is_animating());
        assert_eq!(animator.target_offset(), 300.0);

        let halfway = animator.update(start + Duration::from_millis(50));
        assert!((halfway - 150.0).abs() < 1e-6);

        assert_eq!(animator.update(start + Duration::from_millis(150)), 300.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_retarget_starts_from_drawn_offset() {
        let start = Instant::now();
        let mut animator = OffsetAnimator::new(smooth(100));

        animator.animate_to(300.0, start);
        animator.update(start + Duration::from_millis(50));
        animator.animate_to(0.0, start + Duration::from_millis(50));

        let back = animator.update(start + Duration::from_millis(100));
        assert!((back - 75.0).abs() < 1e-6);
    }

    #[test]
    fn test_config_timing() {
        let config = ScrollConfig {
            animation_duration_ms: 200,
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_duration(), Duration::from_millis(200));
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
        assert!(config.is_smooth());

        let instant = ScrollConfig {
            animation_duration_ms: 0,
            ..Default::default()
        };
        assert!(!instant.is_smooth());
    }
}
