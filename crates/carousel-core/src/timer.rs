//! Deadline-based repeating timer polled from the host event loop.

use std::time::{Duration, Instant};

/// Repeating timer with a fixed period.
///
/// A timer that misses several deadlines fires once and then realigns to the
/// next deadline in the future, so a stalled event loop never produces a
/// burst of ticks.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    period: Duration,
    next_fire: Option<Instant>,
}

impl RepeatingTimer {
    /// An invalidated timer with the given period
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_fire: None,
        }
    }

    /// (Re)schedule: the first tick is due one period after `now`
    pub fn schedule(&mut self, now: Instant) {
        self.next_fire = Some(now + self.period);
    }

    /// Cancel future ticks; calling this on an idle timer does nothing
    pub fn invalidate(&mut self) {
        self.next_fire = None;
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.next_fire.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Takes effect at the next `schedule`
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    pub fn next_fire(&self) -> Option<Instant> {
        self.next_fire
    }

    /// Returns true when a tick is due at `now` and advances the deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_fire else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let mut next = deadline + self.period;
        if next <= now && !self.period.is_zero() {
            let behind = now.duration_since(deadline).as_nanos() / self.period.as_nanos();
            let skipped = u32::try_from(behind).unwrap_or(u32::MAX);
            next = deadline + self.period.saturating_mul(skipped.saturating_add(1));
        }
        self.next_fire = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(2);

    #[test]
    fn test_new_timer_is_idle() {
        let mut timer = RepeatingTimer::new(PERIOD);
        assert!(!timer.is_valid());
        assert!(!timer.poll(Instant::now() + PERIOD * 10));
    }

    #[test]
    fn test_fires_once_per_period() {
        let start = Instant::now();
        let mut timer = RepeatingTimer::new(PERIOD);
        timer.schedule(start);

        assert!(!timer.poll(start + Duration::from_millis(1999)));
        assert!(timer.poll(start + PERIOD));
        assert!(!timer.poll(start + PERIOD));
        assert!(timer.poll(start + PERIOD * 2));
    }

    #[test]
    fn test_missed_deadlines_fire_once() {
        let start = Instant::now();
        let mut timer = RepeatingTimer::new(PERIOD);
        timer.schedule(start);

        let late = start + PERIOD * 5 + Duration::from_millis(500);
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.next_fire(), Some(start + PERIOD * 6));
    }

    #[test]
    fn test_invalidate_is_idempotent() {
        let start = Instant::now();
        let mut timer = RepeatingTimer::new(PERIOD);
        timer.schedule(start);

        timer.invalidate();
        timer.invalidate();
        assert!(!timer.is_valid());
        assert!(!timer.poll(start + PERIOD));
    }
}
