use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self::with_animation_fps(tick_rate_ms, 0)
    }

    /// Poll faster while something is animating
    pub fn with_animation_fps(tick_rate_ms: u64, animation_fps: u32) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms);
        let animation_tick = match animation_fps {
            0 => tick_rate,
            fps => Duration::from_millis(1000 / u64::from(fps)).min(tick_rate),
        };
        Self {
            tick_rate,
            animation_tick,
        }
    }

    pub fn poll_interval(&self, fast: bool) -> Duration {
        if fast {
            self.animation_tick
        } else {
            self.tick_rate
        }
    }

    /// Poll for the next event; `fast` selects the animation frame interval
    pub fn next(&self, fast: bool) -> Result<Option<AppEvent>> {
        if event::poll(self.poll_interval(fast))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Nothing arrived within the poll interval
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_interval() {
        let handler = EventHandler::with_animation_fps(250, 60);
        assert_eq!(handler.poll_interval(false), Duration::from_millis(250));
        assert_eq!(handler.poll_interval(true), Duration::from_millis(16));

        let plain = EventHandler::new(100);
        assert_eq!(plain.poll_interval(true), Duration::from_millis(100));
    }
}
