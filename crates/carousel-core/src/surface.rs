//! Host surface boundary.
//!
//! Everything the carousel does to on-screen views goes through
//! [`HostSurface`]. [`ViewTree`] is the in-memory implementation; terminal or
//! native hosts wrap it or provide their own.

use std::fmt;
use std::rc::Rc;

use crate::geometry::{Point, Rect, Size};

/// Child views of the outer carousel container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerChild {
    ScrollRegion,
    Indicator,
}

/// Operations the carousel performs on the host's view hierarchy
pub trait HostSurface<P: ?Sized> {
    /// Number of children currently attached to the outer container
    fn child_count(&self) -> usize;

    /// Attach a child to the outer container
    fn add_child(&mut self, child: ContainerChild);

    fn container_frame(&self) -> Rect;

    fn set_container_frame(&mut self, frame: Rect);

    fn scroll_frame(&self) -> Rect;

    fn set_scroll_frame(&mut self, frame: Rect);

    /// Detach every page from the scroll region
    fn remove_pages(&mut self);

    fn add_page(&mut self, page: Rc<P>);

    fn set_content_size(&mut self, size: Size);

    fn set_paging_enabled(&mut self, enabled: bool);

    fn content_offset(&self) -> Point;

    fn set_content_offset(&mut self, offset: Point, animated: bool);

    fn set_scroll_hidden(&mut self, hidden: bool);

    /// Register a tap recognizer on the scroll region
    fn add_tap_recognizer(&mut self, taps_required: u32);
}

/// Scroll region state held by [`ViewTree`]
pub struct ScrollRegion<P: ?Sized> {
    pub frame: Rect,
    pub content_size: Size,
    pub content_offset: Point,
    pub paging_enabled: bool,
    pub hidden: bool,
    pub pages: Vec<Rc<P>>,
    pub tap_recognizers: Vec<u32>,
}

impl<P: ?Sized> Default for ScrollRegion<P> {
    fn default() -> Self {
        Self {
            frame: Rect::default(),
            content_size: Size::default(),
            content_offset: Point::ZERO,
            paging_enabled: false,
            hidden: false,
            pages: Vec::new(),
            tap_recognizers: Vec::new(),
        }
    }
}

impl<P: ?Sized> fmt::Debug for ScrollRegion<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollRegion")
            .field("frame", &self.frame)
            .field("content_size", &self.content_size)
            .field("content_offset", &self.content_offset)
            .field("paging_enabled", &self.paging_enabled)
            .field("hidden", &self.hidden)
            .field("pages", &self.pages.len())
            .field("tap_recognizers", &self.tap_recognizers)
            .finish()
    }
}

/// In-memory view hierarchy: an outer container with a scroll region and an
/// indicator slot
pub struct ViewTree<P: ?Sized> {
    frame: Rect,
    children: Vec<ContainerChild>,
    scroll: ScrollRegion<P>,
}

impl<P: ?Sized> Default for ViewTree<P> {
    fn default() -> Self {
        Self {
            frame: Rect::default(),
            children: Vec::new(),
            scroll: ScrollRegion::default(),
        }
    }
}

impl<P: ?Sized> fmt::Debug for ViewTree<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewTree")
            .field("frame", &self.frame)
            .field("children", &self.children)
            .field("scroll", &self.scroll)
            .finish()
    }
}

impl<P: ?Sized> ViewTree<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[ContainerChild] {
        &self.children
    }

    pub fn scroll_region(&self) -> &ScrollRegion<P> {
        &self.scroll
    }

    /// Pages currently attached to the scroll region, in attach order
    pub fn pages(&self) -> &[Rc<P>] {
        &self.scroll.pages
    }
}

impl<P: ?Sized> HostSurface<P> for ViewTree<P> {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn add_child(&mut self, child: ContainerChild) {
        self.children.push(child);
    }

    fn container_frame(&self) -> Rect {
        self.frame
    }

    fn set_container_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn scroll_frame(&self) -> Rect {
        self.scroll.frame
    }

    fn set_scroll_frame(&mut self, frame: Rect) {
        self.scroll.frame = frame;
    }

    fn remove_pages(&mut self) {
        self.scroll.pages.clear();
    }

    fn add_page(&mut self, page: Rc<P>) {
        self.scroll.pages.push(page);
    }

    fn set_content_size(&mut self, size: Size) {
        self.scroll.content_size = size;
    }

    fn set_paging_enabled(&mut self, enabled: bool) {
        self.scroll.paging_enabled = enabled;
    }

    fn content_offset(&self) -> Point {
        self.scroll.content_offset
    }

    fn set_content_offset(&mut self, offset: Point, _animated: bool) {
        self.scroll.content_offset = offset;
    }

    fn set_scroll_hidden(&mut self, hidden: bool) {
        self.scroll.hidden = hidden;
    }

    fn add_tap_recognizer(&mut self, taps_required: u32) {
        self.scroll.tap_recognizers.push(taps_required);
    }
}
