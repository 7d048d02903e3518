//! Carousel that advances on its own.
//!
//! The host polls [`ScrollingCarousel::update`] from its event loop; each
//! due timer tick moves one page forward, wrapping around or stopping at the
//! end depending on `should_repeat`.

use std::rc::Rc;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::carousel::Carousel;
use crate::delegate::{CarouselDelegate, ScrollSource};
use crate::geometry::{Point, Rect};
use crate::page::Page;
use crate::surface::{HostSurface, ViewTree};
use crate::timer::RepeatingTimer;
use crate::{Error, Result};

pub const DEFAULT_DURATION_SECS: f64 = 2.0;

pub struct ScrollingCarousel<P: ?Sized, S = ViewTree<P>> {
    carousel: Carousel<P, S>,
    timer: RepeatingTimer,
    should_repeat: bool,
    carousel_index: usize,
    iterations: usize,
}

fn tick_period(duration_secs: f64) -> Result<Duration> {
    if duration_secs.is_nan() || duration_secs <= 0.0 {
        return Err(Error::InvalidDuration(duration_secs));
    }
    Duration::try_from_secs_f64(duration_secs).map_err(|_| Error::InvalidDuration(duration_secs))
}

impl<P: Page + ?Sized> ScrollingCarousel<P> {
    /// Build the carousel and start the timer right away
    pub fn new(
        pages: Option<Vec<Rc<P>>>,
        frame: Rect,
        duration_secs: f64,
        should_repeat: bool,
    ) -> Result<Self> {
        Self::with_surface(
            pages,
            frame,
            ViewTree::new(),
            duration_secs,
            should_repeat,
            Instant::now(),
        )
    }

    /// No pages, 200x80 frame, default duration. The timer is not started.
    pub fn new_empty() -> Self {
        Self {
            carousel: Carousel::empty(),
            timer: RepeatingTimer::new(Duration::from_secs_f64(DEFAULT_DURATION_SECS)),
            should_repeat: true,
            carousel_index: 0,
            iterations: 0,
        }
    }
}

impl<P: Page + ?Sized, S: HostSurface<P>> ScrollingCarousel<P, S> {
    /// Build on a caller-supplied surface; the first tick is due one
    /// duration after `now`.
    pub fn with_surface(
        pages: Option<Vec<Rc<P>>>,
        frame: Rect,
        surface: S,
        duration_secs: f64,
        should_repeat: bool,
        now: Instant,
    ) -> Result<Self> {
        let period = tick_period(duration_secs)?;
        let mut scrolling = Self {
            carousel: Carousel::with_surface(pages, frame, surface),
            timer: RepeatingTimer::new(period),
            should_repeat,
            carousel_index: 0,
            iterations: 0,
        };
        scrolling.start(now);
        Ok(scrolling)
    }

    fn start(&mut self, now: Instant) {
        self.timer.schedule(now);
        tracing::debug!(
            period_secs = self.timer.period().as_secs_f64(),
            index = self.carousel_index,
            "Auto-scroll started"
        );
    }

    pub fn carousel(&self) -> &Carousel<P, S> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<P, S> {
        &mut self.carousel
    }

    pub fn show(&self) -> &S {
        self.carousel.show()
    }

    pub fn number_of_pages(&self) -> usize {
        self.carousel.number_of_pages()
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn CarouselDelegate<P>>) {
        self.carousel.set_delegate(delegate);
    }

    pub fn carousel_index(&self) -> usize {
        self.carousel_index
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_valid()
    }

    pub fn duration(&self) -> Duration {
        self.timer.period()
    }

    pub fn should_repeat(&self) -> bool {
        self.should_repeat
    }

    /// Number of completed passes through every page
    pub fn report_iterations(&self) -> usize {
        self.iterations
    }

    /// Run a tick if one is due at `now`. Returns whether a tick ran.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        self.tick();
        true
    }

    /// One timer callback: advance, wrap or stop at the last page.
    pub fn tick(&mut self) {
        let last = self.number_of_pages() as isize - 1;

        if self.carousel_index as isize >= last {
            if !self.should_repeat {
                self.timer.invalidate();
                tracing::debug!(index = self.carousel_index, "Auto-scroll reached the end");
                return;
            }
            self.carousel_index = 0;
            self.iterations += 1;
        } else {
            self.carousel_index += 1;
        }

        self.carousel
            .indicator_mut()
            .set_current_page(self.carousel_index);
        self.page_control_changed();
    }

    fn page_control_changed(&mut self) {
        self.carousel_index = self.carousel.indicator().current_page();
        self.carousel.set_selected_index(self.carousel_index);

        let width = self.carousel.show().scroll_frame().width;
        let offset = Point::new(self.carousel_index as f64 * width, 0.0);
        self.carousel.show_mut().set_content_offset(offset, true);

        tracing::debug!(index = self.carousel_index, "Page changed by timer");
        self.carousel
            .notify_page_changed(self.carousel_index, ScrollSource::Automatic);
    }

    pub fn append(&mut self, page: Rc<P>) {
        self.carousel.append(page);
        self.sync_cursor();
    }

    pub fn insert(&mut self, page: Rc<P>, index: usize) -> Result<()> {
        self.carousel.insert(page, index)?;
        self.sync_cursor();
        Ok(())
    }

    pub fn set_pages(&mut self, pages: Vec<Rc<P>>) {
        self.carousel.set_pages(pages);
        self.sync_cursor();
    }

    pub fn shuffle_pages(&mut self) {
        self.carousel.shuffle_pages();
        self.sync_cursor();
    }

    pub fn shuffle_pages_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.carousel.shuffle_pages_with(rng);
        self.sync_cursor();
    }

    /// The indicator clamps its page when the list shrinks; follow it.
    fn sync_cursor(&mut self) {
        self.carousel_index = self.carousel.indicator().current_page();
    }

    /// Pause auto-advance. Stopping a stopped carousel does nothing.
    pub fn stop(&mut self) {
        if self.timer.is_valid() {
            tracing::debug!(index = self.carousel_index, "Auto-scroll stopped");
        }
        self.timer.invalidate();
    }

    pub fn resume(&mut self, from_start: bool) {
        self.resume_at(from_start, Instant::now());
    }

    /// Restart the timer; the next tick is due one duration after `now`
    pub fn resume_at(&mut self, from_start: bool, now: Instant) {
        if from_start {
            self.carousel_index = 0;
        }
        self.start(now);
    }

    pub fn set_duration(&mut self, duration_secs: f64) -> Result<()> {
        self.set_duration_at(duration_secs, Instant::now())
    }

    /// Change the period and restart the cycle from `now`
    pub fn set_duration_at(&mut self, duration_secs: f64, now: Instant) -> Result<()> {
        let period = tick_period(duration_secs)?;
        self.stop();
        self.timer.set_period(period);
        self.resume_at(false, now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rand::SeedableRng;

    use super::*;
    use crate::carousel::tests::{pages, Notification, Recorder, TestPage};
    use crate::page::PageView;

    fn frame() -> Rect {
        Rect::new(0.0, 0.0, 300.0, 200.0)
    }

    fn scrolling(
        names: &[&'static str],
        should_repeat: bool,
        now: Instant,
    ) -> ScrollingCarousel<TestPage> {
        ScrollingCarousel::with_surface(
            Some(pages(names)),
            frame(),
            ViewTree::new(),
            DEFAULT_DURATION_SECS,
            should_repeat,
            now,
        )
        .unwrap()
    }

    fn recorded(carousel: &mut ScrollingCarousel<TestPage>) -> Rc<RefCell<Vec<Notification>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        carousel.set_delegate(Box::new(Recorder(Rc::clone(&log))));
        log
    }

    #[test]
    fn test_starts_running() {
        let carousel = ScrollingCarousel::new(Some(pages(&["A", "B"])), frame(), 2.0, true).unwrap();
        assert!(carousel.is_running());
        assert_eq!(carousel.duration(), Duration::from_secs(2));
        assert!(carousel.should_repeat());
        assert_eq!(carousel.report_iterations(), 0);
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = ScrollingCarousel::new(Some(pages(&["A"])), frame(), bad, true);
            assert!(matches!(result, Err(Error::InvalidDuration(_))), "{bad}");
        }
    }

    #[test]
    fn test_tick_advances_and_scrolls() {
        let mut carousel = scrolling(&["A", "B", "C"], true, Instant::now());
        let log = recorded(&mut carousel);

        carousel.tick();

        assert_eq!(carousel.carousel_index(), 1);
        assert_eq!(carousel.carousel().selected_index(), 1);
        assert_eq!(carousel.carousel().indicator().current_page(), 1);
        assert_eq!(
            carousel.show().scroll_region().content_offset,
            Point::new(300.0, 0.0)
        );
        assert_eq!(
            *log.borrow(),
            vec![Notification::Changed(1, "B", ScrollSource::Automatic)]
        );
    }

    #[test]
    fn test_full_cycle_counts_one_iteration() {
        let mut carousel = scrolling(&["A", "B", "C"], true, Instant::now());

        for _ in 0..3 {
            carousel.tick();
        }

        assert_eq!(carousel.report_iterations(), 1);
        assert_eq!(carousel.carousel_index(), 0);
        assert_eq!(carousel.show().scroll_region().content_offset, Point::ZERO);
        assert!(carousel.is_running());
    }

    #[test]
    fn test_no_repeat_stops_at_last_page() {
        let mut carousel = scrolling(&["A", "B", "C"], false, Instant::now());
        let log = recorded(&mut carousel);

        carousel.tick();
        carousel.tick();
        assert_eq!(carousel.carousel_index(), 2);
        assert!(carousel.is_running());

        carousel.tick();
        assert!(!carousel.is_running());
        assert_eq!(carousel.carousel_index(), 2);
        assert_eq!(carousel.report_iterations(), 0);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_update_follows_deadlines() {
        let start = Instant::now();
        let mut carousel = scrolling(&["A", "B", "C"], true, start);

        assert!(!carousel.update(start + Duration::from_millis(1500)));
        assert!(carousel.update(start + Duration::from_secs(2)));
        assert_eq!(carousel.carousel_index(), 1);
        assert!(carousel.update(start + Duration::from_secs(4)));
        assert_eq!(carousel.carousel_index(), 2);
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let start = Instant::now();
        let mut carousel = scrolling(&["A", "B"], true, start);

        carousel.stop();
        carousel.stop();

        assert!(!carousel.update(start + Duration::from_secs(10)));
        assert_eq!(carousel.carousel_index(), 0);
    }

    #[test]
    fn test_resume_from_start() {
        let start = Instant::now();
        let mut carousel = scrolling(&["A", "B", "C"], true, start);
        carousel.tick();
        carousel.tick();
        carousel.stop();

        carousel.resume_at(true, start);
        assert!(carousel.is_running());
        assert_eq!(carousel.carousel_index(), 0);

        assert!(carousel.update(start + Duration::from_secs(2)));
        assert_eq!(carousel.carousel_index(), 1);
    }

    #[test]
    fn test_set_duration_restarts_cycle() {
        let start = Instant::now();
        let mut carousel = scrolling(&["A", "B", "C"], true, start);

        let later = start + Duration::from_millis(1500);
        carousel.set_duration_at(5.0, later).unwrap();

        assert_eq!(carousel.duration(), Duration::from_secs(5));
        assert!(!carousel.update(start + Duration::from_secs(2)));
        assert!(carousel.update(later + Duration::from_secs(5)));
    }

    #[test]
    fn test_set_duration_rejects_invalid_value() {
        let mut carousel = scrolling(&["A"], true, Instant::now());
        assert!(carousel.set_duration(0.0).is_err());
        assert_eq!(carousel.duration(), Duration::from_secs(2));
        assert!(carousel.is_running());
    }

    #[test]
    fn test_empty_carousel_does_not_notify() {
        let mut carousel: ScrollingCarousel<TestPage> = ScrollingCarousel::new_empty();
        let log = recorded(&mut carousel);
        assert!(!carousel.is_running());

        carousel.tick();
        assert_eq!(carousel.carousel_index(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_shrinking_pages_pulls_cursor_back() {
        let now = Instant::now();
        let mut carousel = scrolling(&["A", "B", "C", "D"], true, now);
        for _ in 0..3 {
            carousel.tick();
        }
        assert_eq!(carousel.carousel_index(), 3);

        carousel.set_pages(pages(&["A", "B"]));

        assert_eq!(carousel.number_of_pages(), 2);
        assert_eq!(carousel.carousel_index(), 1);
        assert_eq!(carousel.carousel().indicator().current_page(), 1);
    }

    #[test]
    fn test_page_mutations_keep_cursor_in_range() {
        let now = Instant::now();
        let mut carousel = scrolling(&["A", "B"], true, now);
        carousel.tick();

        carousel.append(PageView::new("C"));
        carousel.insert(PageView::new("Z"), 0).unwrap();
        assert!(carousel.insert(PageView::new("X"), 9).is_err());
        carousel.shuffle_pages_with(&mut rand::rngs::StdRng::seed_from_u64(7));

        assert_eq!(carousel.number_of_pages(), 4);
        assert_eq!(carousel.carousel_index(), carousel.carousel().indicator().current_page());
        assert!(carousel.carousel_index() < 4);
    }

    #[test]
    fn test_drag_index_is_independent_of_auto_cursor() {
        let mut carousel = scrolling(&["A", "B", "C"], true, Instant::now());
        carousel
            .carousel_mut()
            .show_mut()
            .set_content_offset(Point::new(300.0, 0.0), false);
        carousel.carousel_mut().drag_ended();
        assert_eq!(carousel.carousel().selected_index(), 1);

        carousel.tick();
        assert_eq!(carousel.carousel_index(), 1);
        assert_eq!(carousel.carousel().selected_index(), 1);
    }
}
