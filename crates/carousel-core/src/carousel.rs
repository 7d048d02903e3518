//! Horizontally paged carousel with a page indicator.
//!
//! ```ignore
//! let carousel = Carousel::new(Some(pages), Rect::new(0.0, 0.0, 300.0, 200.0));
//! let container = carousel.show();
//! ```

use std::rc::Rc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::delegate::{CarouselDelegate, ScrollSource};
use crate::geometry::{Rect, Size};
use crate::indicator::PageIndicator;
use crate::page::{ContentMode, Page};
use crate::surface::{ContainerChild, HostSurface, ViewTree};
use crate::{Error, Result};

/// Frame used by [`Carousel::empty`]
pub const DEFAULT_FRAME: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 200.0,
    height: 80.0,
};

/// Distance of the indicator's top edge from the bottom of the frame
const INDICATOR_BOTTOM_INSET: f64 = 100.0;
const INDICATOR_HEIGHT: f64 = 30.0;

pub struct Carousel<P: ?Sized, S = ViewTree<P>> {
    surface: S,
    indicator: PageIndicator,
    pages: Option<Vec<Rc<P>>>,
    frame: Rect,
    selected_index: usize,
    last_translation: f64,
    delegate: Option<Box<dyn CarouselDelegate<P>>>,
}

impl<P: Page + ?Sized> Carousel<P> {
    /// Carousel over `pages` occupying `frame`, backed by an in-memory view tree
    pub fn new(pages: Option<Vec<Rc<P>>>, frame: Rect) -> Self {
        Self::with_surface(pages, frame, ViewTree::new())
    }

    /// Carousel with no pages and a 200x80 frame
    pub fn empty() -> Self {
        Self::new(None, DEFAULT_FRAME)
    }
}

impl<P: Page + ?Sized> Default for Carousel<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P: Page + ?Sized, S: HostSurface<P>> Carousel<P, S> {
    pub fn with_surface(pages: Option<Vec<Rc<P>>>, frame: Rect, surface: S) -> Self {
        let mut carousel = Self {
            surface,
            indicator: PageIndicator::new(),
            pages,
            frame,
            selected_index: 0,
            last_translation: 0.0,
            delegate: None,
        };

        carousel.standardize_pages();
        carousel.refresh();
        carousel.surface.add_tap_recognizer(1);
        carousel.surface.set_container_frame(frame);

        tracing::debug!(
            pages = carousel.number_of_pages(),
            width = frame.width,
            height = frame.height,
            "Carousel created"
        );
        carousel
    }

    /// Give every page the full carousel frame
    fn standardize_pages(&self) {
        let Some(pages) = &self.pages else { return };

        for page in pages {
            page.set_frame(self.frame);
            if page.is_image() {
                page.set_content_mode(ContentMode::ScaleAspectFit);
            }
        }
    }

    /// Re-run layout after any structural change
    fn refresh(&mut self) {
        self.attach_subviews();
        self.indicator.set_number_of_pages(self.number_of_pages());
        self.selected_index = self
            .selected_index
            .min(self.number_of_pages().saturating_sub(1));
    }

    fn attach_subviews(&mut self) {
        if self.surface.child_count() == 0 {
            self.surface.add_child(ContainerChild::ScrollRegion);
            self.surface.add_child(ContainerChild::Indicator);

            self.surface
                .set_scroll_frame(Rect::new(0.0, 0.0, self.frame.width, self.frame.height));
            self.indicator.set_frame(Rect::new(
                0.0,
                self.frame.height - INDICATOR_BOTTOM_INSET,
                self.frame.width,
                INDICATOR_HEIGHT,
            ));
        }

        self.layout_pages();
    }

    fn layout_pages(&mut self) {
        self.surface.remove_pages();

        let Some(pages) = &self.pages else { return };

        self.surface.set_content_size(Size::new(
            self.frame.width * pages.len() as f64,
            self.frame.height,
        ));
        self.surface.set_paging_enabled(true);

        // Each page after the first is placed at the previous page's origin
        // plus its own width. Pages of unequal width will overlap or gap.
        for (index, page) in pages.iter().enumerate() {
            let frame = page.frame();
            let x = match index {
                0 => 0.0,
                _ => pages[index - 1].frame().x + frame.width,
            };
            page.set_frame(frame.with_x(x));
            self.surface.add_page(Rc::clone(page));
        }
    }

    /// The container to embed in the host's view hierarchy
    pub fn show(&self) -> &S {
        &self.surface
    }

    pub fn show_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn show_pages(&self) -> Option<&[Rc<P>]> {
        self.pages.as_deref()
    }

    pub fn number_of_pages(&self) -> usize {
        self.pages.as_ref().map_or(0, Vec::len)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn indicator(&self) -> &PageIndicator {
        &self.indicator
    }

    pub fn indicator_mut(&mut self) -> &mut PageIndicator {
        &mut self.indicator
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn CarouselDelegate<P>>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Add a page at the end. No-op when the carousel has no page list.
    pub fn append(&mut self, page: Rc<P>) {
        if let Some(pages) = &mut self.pages {
            pages.push(page);
        }
        self.refresh();
    }

    /// Insert a page before `index`. No-op when the carousel has no page list.
    pub fn insert(&mut self, page: Rc<P>, index: usize) -> Result<()> {
        if let Some(pages) = &mut self.pages {
            if index > pages.len() {
                return Err(Error::IndexOutOfBounds {
                    index,
                    len: pages.len(),
                });
            }
            pages.insert(index, page);
        }
        self.refresh();
        Ok(())
    }

    pub fn set_pages(&mut self, pages: Vec<Rc<P>>) {
        self.pages = Some(pages);
        self.refresh();
    }

    /// Move and resize the carousel; pages are re-fitted to the new frame.
    pub fn set_carousel_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.standardize_pages();
        self.surface
            .set_scroll_frame(Rect::new(0.0, 0.0, frame.width, frame.height));
        self.surface.set_container_frame(frame);
        self.refresh();
    }

    pub fn shuffle_pages(&mut self) {
        self.shuffle_pages_with(&mut rand::thread_rng());
    }

    /// Shuffle with a caller-supplied random source
    pub fn shuffle_pages_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Some(pages) = &self.pages else { return };

        let mut shuffled = pages.clone();
        shuffled.shuffle(rng);
        self.set_pages(shuffled);
    }

    pub fn hide_indicator(&mut self) {
        self.indicator.set_hidden(true);
    }

    /// Hide both the scroll region and the indicator
    pub fn hide(&mut self) {
        self.surface.set_scroll_hidden(true);
        self.indicator.set_hidden(true);
    }

    /// Host callback: the user lifted their finger after dragging.
    ///
    /// The direction of travel since the previous release moves the selection
    /// by exactly one page.
    /// Measure the next drag release from the current scroll offset.
    ///
    /// Hosts call this when a drag starts, so scrolling done in between
    /// (the timer, a resize) is not mistaken for drag movement.
    pub fn begin_drag(&mut self) {
        self.last_translation = self.surface.content_offset().x;
    }

    pub fn drag_ended(&mut self) {
        let translation = self.surface.content_offset().x;

        let count = self.number_of_pages();
        if count == 0 {
            tracing::warn!("Drag ended on a carousel without pages");
            return;
        }

        if translation > self.last_translation {
            self.selected_index += 1;
        } else if translation < self.last_translation {
            self.selected_index = self.selected_index.saturating_sub(1);
        }
        self.selected_index = self.selected_index.min(count - 1);
        self.last_translation = translation;

        self.indicator.set_current_page(self.selected_index);
        tracing::debug!(index = self.selected_index, translation, "Page changed by drag");

        self.notify_page_changed(self.selected_index, ScrollSource::User);
    }

    /// Host callback: a single tap anywhere on the scroll region
    pub fn tapped(&mut self) {
        let index = self.selected_index;
        let (Some(delegate), Some(page)) = (
            self.delegate.as_mut(),
            self.pages.as_ref().and_then(|pages| pages.get(index)),
        ) else {
            return;
        };
        delegate.page_tapped(index, page);
    }

    pub(crate) fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    pub(crate) fn notify_page_changed(&mut self, index: usize, source: ScrollSource) {
        let (Some(delegate), Some(page)) = (
            self.delegate.as_mut(),
            self.pages.as_ref().and_then(|pages| pages.get(index)),
        ) else {
            return;
        };
        delegate.page_changed(index, page, source);
    }
}
