use std::rc::Rc;
use std::time::Instant;

use carousel_core::{ContainerChild, HostSurface, Point, Rect, ScrollConfig, Size, ViewTree};

use crate::scroll::OffsetAnimator;

/// Host surface for the terminal: the in-memory view tree plus an animator
/// for the offset that actually gets drawn.
#[derive(Debug)]
pub struct TerminalSurface<P: ?Sized> {
    tree: ViewTree<P>,
    animator: OffsetAnimator,
}

impl<P: ?Sized> TerminalSurface<P> {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            tree: ViewTree::new(),
            animator: OffsetAnimator::new(config),
        }
    }

    pub fn tree(&self) -> &ViewTree<P> {
        &self.tree
    }

    /// Horizontal offset to draw this frame
    pub fn visible_offset(&self) -> f64 {
        self.animator.current_offset()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn update_animation(&mut self, now: Instant) -> f64 {
        self.animator.update(now)
    }

    /// Largest offset that still shows a full page
    pub fn max_offset(&self) -> f64 {
        let region = self.tree.scroll_region();
        (region.content_size.width - region.frame.width).max(0.0)
    }
}

impl<P: ?Sized> HostSurface<P> for TerminalSurface<P> {
    fn child_count(&self) -> usize {
        self.tree.child_count()
    }

    fn add_child(&mut self, child: ContainerChild) {
        self.tree.add_child(child);
    }

    fn container_frame(&self) -> Rect {
        self.tree.container_frame()
    }

    fn set_container_frame(&mut self, frame: Rect) {
        self.tree.set_container_frame(frame);
    }

    fn scroll_frame(&self) -> Rect {
        self.tree.scroll_frame()
    }

    fn set_scroll_frame(&mut self, frame: Rect) {
        self.tree.set_scroll_frame(frame);
    }

    fn remove_pages(&mut self) {
        self.tree.remove_pages();
    }

    fn add_page(&mut self, page: Rc<P>) {
        self.tree.add_page(page);
    }

    fn set_content_size(&mut self, size: Size) {
        self.tree.set_content_size(size);
    }

    fn set_paging_enabled(&mut self, enabled: bool) {
        self.tree.set_paging_enabled(enabled);
    }

    fn content_offset(&self) -> Point {
        self.tree.content_offset()
    }

    fn set_content_offset(&mut self, offset: Point, animated: bool) {
        self.tree.set_content_offset(offset, false);
        if animated {
            self.animator.animate_to(offset.x, Instant::now());
        } else {
            self.animator.jump_to(offset.x);
        }
    }

    fn set_scroll_hidden(&mut self, hidden: bool) {
        self.tree.set_scroll_hidden(hidden);
    }

    fn add_tap_recognizer(&mut self, taps_required: u32) {
        self.tree.add_tap_recognizer(taps_required);
    }
}
