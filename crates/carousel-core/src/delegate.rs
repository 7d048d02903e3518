use std::rc::Rc;

use tokio::sync::mpsc::UnboundedSender;

/// What moved the carousel to a new page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollSource {
    /// A drag released by the user
    User,
    /// The auto-scroll timer
    Automatic,
}

/// Observer notified when the current page changes or is tapped.
///
/// Calls are synchronous and happen on the thread driving the carousel.
pub trait CarouselDelegate<P: ?Sized> {
    fn page_changed(&mut self, index: usize, page: &Rc<P>, source: ScrollSource);

    fn page_tapped(&mut self, index: usize, page: &Rc<P>);
}

/// Delegate notification as a plain value, for event loops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    PageChanged { index: usize, source: ScrollSource },
    PageTapped { index: usize },
}

/// Forwards notifications into a channel; a closed receiver is ignored.
impl<P: ?Sized> CarouselDelegate<P> for UnboundedSender<CarouselEvent> {
    fn page_changed(&mut self, index: usize, _page: &Rc<P>, source: ScrollSource) {
        if self.send(CarouselEvent::PageChanged { index, source }).is_err() {
            tracing::debug!("Carousel event receiver dropped");
        }
    }

    fn page_tapped(&mut self, index: usize, _page: &Rc<P>) {
        if self.send(CarouselEvent::PageTapped { index }).is_err() {
            tracing::debug!("Carousel event receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageView;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_channel_delegate_forwards_events() {
        let (mut tx, mut rx) = mpsc::unbounded_channel::<CarouselEvent>();
        let page = PageView::new("A");

        tx.page_changed(1, &page, ScrollSource::User);
        tx.page_tapped(1, &page);

        assert_eq!(
            rx.recv().await,
            Some(CarouselEvent::PageChanged {
                index: 1,
                source: ScrollSource::User
            })
        );
        assert_eq!(rx.recv().await, Some(CarouselEvent::PageTapped { index: 1 }));
    }

    #[test]
    fn test_channel_delegate_ignores_closed_receiver() {
        let (mut tx, rx) = mpsc::unbounded_channel::<CarouselEvent>();
        drop(rx);
        tx.page_tapped(0, &PageView::new("A"));
    }
}
