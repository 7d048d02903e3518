pub mod app;
pub mod content;
pub mod event;
pub mod input;
pub mod scroll;
pub mod surface;
pub mod widgets;

pub use app::{App, TextCarousel};
pub use content::{TextPage, TextPageRef};
pub use surface::TerminalSurface;
