//! Page handles.
//!
//! A page is caller-owned content the carousel only positions. The carousel
//! holds `Rc` handles to pages, so the frame it assigns is visible to the
//! caller and survives in the caller's copy after the page list is replaced.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::geometry::Rect;

/// How a page draws content whose aspect ratio differs from its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Stretch to fill the frame
    #[default]
    ScaleToFill,
    /// Fit inside the frame, preserving aspect ratio, never cropping
    ScaleAspectFit,
}

/// What the carousel needs from a page
pub trait Page: fmt::Debug {
    fn frame(&self) -> Rect;

    fn set_frame(&self, frame: Rect);

    /// Image-like leaves get `ContentMode::ScaleAspectFit` at construction
    fn is_image(&self) -> bool {
        false
    }

    fn content_mode(&self) -> ContentMode {
        ContentMode::default()
    }

    fn set_content_mode(&self, _mode: ContentMode) {}
}

/// Kind of leaf a [`PageView`] wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Image,
    Composite,
}

/// Ready-made [`Page`] wrapping arbitrary content
#[derive(Debug)]
pub struct PageView<T> {
    content: T,
    kind: PageKind,
    frame: Cell<Rect>,
    content_mode: Cell<ContentMode>,
}

impl<T> PageView<T> {
    /// A composite page (labels, stacks, anything that is not a bare image)
    pub fn new(content: T) -> Rc<Self> {
        Self::with_kind(content, PageKind::Composite)
    }

    /// An image leaf
    pub fn image(content: T) -> Rc<Self> {
        Self::with_kind(content, PageKind::Image)
    }

    pub fn with_kind(content: T, kind: PageKind) -> Rc<Self> {
        Rc::new(Self {
            content,
            kind,
            frame: Cell::new(Rect::default()),
            content_mode: Cell::new(ContentMode::default()),
        })
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }
}

impl<T: fmt::Debug> Page for PageView<T> {
    fn frame(&self) -> Rect {
        self.frame.get()
    }

    fn set_frame(&self, frame: Rect) {
        self.frame.set(frame);
    }

    fn is_image(&self) -> bool {
        self.kind == PageKind::Image
    }

    fn content_mode(&self) -> ContentMode {
        self.content_mode.get()
    }

    fn set_content_mode(&self, mode: ContentMode) {
        self.content_mode.set(mode);
    }
}
