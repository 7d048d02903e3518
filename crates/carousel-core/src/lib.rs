pub mod carousel;
pub mod color;
pub mod config;
pub mod delegate;
pub mod error;
pub mod geometry;
pub mod indicator;
pub mod page;
pub mod scrolling;
pub mod surface;
pub mod timer;

pub use carousel::Carousel;
pub use color::Color;
pub use config::{AppConfig, AutoScrollConfig, EasingType, IndicatorConfig, ScrollConfig};
pub use delegate::{CarouselDelegate, CarouselEvent, ScrollSource};
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
pub use indicator::{IndicatorSize, PageIndicator};
pub use page::{ContentMode, Page, PageKind, PageView};
pub use scrolling::ScrollingCarousel;
pub use surface::{ContainerChild, HostSurface, ViewTree};
pub use timer::RepeatingTimer;
