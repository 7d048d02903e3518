mod carousel;
mod status_bar;

pub use carousel::CarouselWidget;
pub use status_bar::StatusBarWidget;
