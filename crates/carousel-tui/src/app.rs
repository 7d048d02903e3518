use std::time::Instant;

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use carousel_core::{
    AppConfig, Carousel, CarouselEvent, HostSurface, PageIndicator, PageView, Point, Rect, ScrollSource,
    ScrollingCarousel,
};

use crate::content::{TextPage, TextPageRef};
use crate::input::{Action, DURATION_STEP_SECS};
use crate::surface::TerminalSurface;

pub type TextCarousel = ScrollingCarousel<PageView<TextPage>, TerminalSurface<PageView<TextPage>>>;

/// Rows between the indicator and the bottom edge of the carousel
const INDICATOR_ROWS_FROM_BOTTOM: i64 = 2;

/// In-progress mouse drag
#[derive(Debug, Clone, Copy)]
struct DragState {
    origin_column: u16,
    start_offset: f64,
    moved: bool,
}

/// Application state
pub struct App {
    pub carousel: TextCarousel,
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub last_event: Option<CarouselEvent>,
    pub taps: usize,
    /// Carousel follows the terminal size
    fill_width: bool,
    fill_height: bool,
    events: UnboundedReceiver<CarouselEvent>,
    drag: Option<DragState>,
}

impl App {
    /// Build the carousel for a terminal of `width` x `height` cells
    pub fn new(pages: Vec<TextPageRef>, width: u16, height: u16, config: &AppConfig) -> Result<Self> {
        let frame = carousel_frame(config, width, height);
        let mut carousel = ScrollingCarousel::with_surface(
            Some(pages),
            frame,
            TerminalSurface::new(config.animation.clone()),
            config.auto_scroll.duration_secs,
            config.auto_scroll.should_repeat,
            Instant::now(),
        )?;

        let (tx, events) = mpsc::unbounded_channel();
        carousel.set_delegate(Box::new(tx));

        let indicator = carousel.carousel_mut().indicator_mut();
        anchor_indicator(indicator, frame.height);
        config.indicator.apply(indicator);

        if !config.auto_scroll.enabled {
            carousel.stop();
        }

        tracing::info!(
            pages = carousel.number_of_pages(),
            auto = config.auto_scroll.enabled,
            "Carousel app started"
        );

        Ok(Self {
            carousel,
            should_quit: false,
            status_message: None,
            last_event: None,
            taps: 0,
            fill_width: config.carousel.width == 0,
            fill_height: config.carousel.height == 0,
            events,
            drag: None,
        })
    }

    pub fn surface(&self) -> &TerminalSurface<PageView<TextPage>> {
        self.carousel.show()
    }

    /// Advance the timer and the scroll animation, then collect notifications
    pub fn on_tick(&mut self, now: Instant) {
        self.carousel.update(now);
        self.carousel
            .carousel_mut()
            .show_mut()
            .update_animation(now);
        self.drain_events();
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.surface().is_animating() || self.drag.is_some()
    }

    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.record(event);
        }
    }

    fn record(&mut self, event: CarouselEvent) {
        let pages = self.carousel.carousel().show_pages().unwrap_or_default();
        let title = |index: usize| {
            pages
                .get(index)
                .map(|page| page.content().title.clone())
                .unwrap_or_default()
        };

        self.status_message = Some(match event {
            CarouselEvent::PageChanged { index, source } => {
                let by = match source {
                    ScrollSource::User => "drag",
                    ScrollSource::Automatic => "timer",
                };
                format!("Page {} \"{}\" ({})", index + 1, title(index), by)
            }
            CarouselEvent::PageTapped { index } => {
                self.taps += 1;
                format!("Tapped page {} \"{}\"", index + 1, title(index))
            }
        });
        self.last_event = Some(event);
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::PreviousPage => self.drag_by_page(-1.0),
            Action::NextPage => self.drag_by_page(1.0),
            Action::Tap => self.carousel.carousel_mut().tapped(),
            Action::ToggleAutoScroll => {
                if self.carousel.is_running() {
                    self.carousel.stop();
                    self.status_message = Some("Auto-scroll paused".to_string());
                } else {
                    self.carousel.resume(false);
                    self.status_message = Some("Auto-scroll resumed".to_string());
                }
            }
            Action::Faster => self.change_duration(-DURATION_STEP_SECS),
            Action::Slower => self.change_duration(DURATION_STEP_SECS),
            Action::RestartAutoScroll => {
                self.carousel.resume(true);
                self.status_message = Some("Auto-scroll restarted".to_string());
            }
            Action::Shuffle => self.carousel.shuffle_pages(),
            Action::HideIndicator => self.carousel.carousel_mut().hide_indicator(),
            Action::Hide => self.carousel.carousel_mut().hide(),
            Action::None => {}
        }
        self.drain_events();
    }

    fn change_duration(&mut self, delta: f64) {
        let duration = (self.carousel.duration().as_secs_f64() + delta).max(DURATION_STEP_SECS);
        self.status_message = Some(match self.carousel.set_duration(duration) {
            Ok(()) => format!("Page duration {:.1}s", duration),
            Err(e) => e.to_string(),
        });
    }

    /// Scroll one page in `direction` from the selected page and release,
    /// like a flick
    fn drag_by_page(&mut self, direction: f64) {
        let carousel = self.carousel.carousel_mut();
        let width = carousel.show().scroll_frame().width;
        let start = carousel.selected_index() as f64 * width;
        carousel
            .show_mut()
            .set_content_offset(Point::new(start, 0.0), false);
        carousel.begin_drag();

        let surface = carousel.show_mut();
        let target = (start + direction * width).clamp(0.0, surface.max_offset());
        surface.set_content_offset(Point::new(target, 0.0), true);
        carousel.drag_ended();
        settle(carousel);
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let frame = self.carousel.carousel().frame();
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if f64::from(event.row) >= frame.y + frame.height {
                    return;
                }
                self.carousel.carousel_mut().begin_drag();
                self.drag = Some(DragState {
                    origin_column: event.column,
                    start_offset: self.surface().content_offset().x,
                    moved: false,
                });
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(drag) = self.drag.as_mut() else { return };
                drag.moved = true;
                let delta = f64::from(event.column) - f64::from(drag.origin_column);
                let start = drag.start_offset;

                let surface = self.carousel.carousel_mut().show_mut();
                let offset = (start - delta).clamp(0.0, surface.max_offset());
                surface.set_content_offset(Point::new(offset, 0.0), false);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(drag) = self.drag.take() else { return };
                let carousel = self.carousel.carousel_mut();
                if drag.moved {
                    carousel.drag_ended();
                    settle(carousel);
                } else {
                    carousel.tapped();
                }
            }
            _ => {}
        }
        self.drain_events();
    }

    /// Follow a terminal resize when the carousel fills the screen
    pub fn resize(&mut self, width: u16, height: u16) {
        if !self.fill_width && !self.fill_height {
            return;
        }

        let old = self.carousel.carousel().frame();
        let mut frame = old;
        if self.fill_width {
            frame.width = f64::from(width);
        }
        if self.fill_height {
            frame.height = f64::from(height.saturating_sub(1));
        }
        if frame == old {
            return;
        }

        let carousel = self.carousel.carousel_mut();
        carousel.set_carousel_frame(frame);

        let indicator = carousel.indicator_mut();
        shift_indicator(indicator, (frame.height - old.height) as i64);
        indicator.set_frame(indicator.frame().with_width(frame.width));

        let settled = carousel.selected_index() as f64 * frame.width;
        carousel
            .show_mut()
            .set_content_offset(Point::new(settled, 0.0), false);
        carousel.begin_drag();
        tracing::debug!(width = frame.width, height = frame.height, "Carousel resized");
    }
}

/// Frame from config, with 0 meaning "use the terminal size". One row is
/// left for the status bar.
pub fn carousel_frame(config: &AppConfig, width: u16, height: u16) -> Rect {
    let available_height = height.saturating_sub(1);
    let w = match config.carousel.width {
        0 => width,
        w => w.min(width),
    };
    let h = match config.carousel.height {
        0 => available_height,
        h => h.min(available_height),
    };
    Rect::new(0.0, 0.0, f64::from(w), f64::from(h))
}

/// Scroll to the selected page's resting offset
fn settle(carousel: &mut Carousel<PageView<TextPage>, TerminalSurface<PageView<TextPage>>>) {
    let settled = carousel.selected_index() as f64 * carousel.show().scroll_frame().width;
    carousel
        .show_mut()
        .set_content_offset(Point::new(settled, 0.0), true);
}

fn shift_indicator(indicator: &mut PageIndicator, rows: i64) {
    let rows = rows.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    if rows >= 0 {
        indicator.offset_down(rows);
    } else {
        indicator.offset_up(rows.saturating_neg());
    }
}

/// Move the indicator just above the bottom border of a `height`-row carousel
fn anchor_indicator(indicator: &mut PageIndicator, height: f64) {
    let target = height as i64 - INDICATOR_ROWS_FROM_BOTTOM;
    shift_indicator(indicator, target - indicator.frame().y as i64);
}
