use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::Rect;

/// Discrete dot sizes for the page indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorSize {
    #[default]
    Small,
    Medium,
    Large,
    ExtraLarge,
    Largest,
}

impl IndicatorSize {
    /// Scale transform applied to the dot row
    pub fn scale(self) -> f64 {
        match self {
            IndicatorSize::Small => 1.0,
            IndicatorSize::Medium => 1.2,
            IndicatorSize::Large => 1.4,
            IndicatorSize::ExtraLarge => 1.8,
            IndicatorSize::Largest => 2.2,
        }
    }
}

/// Row of dots showing how many pages exist and which one is current.
///
/// Behaves like a native page control: the current page is always kept
/// inside `0..number_of_pages` (or 0 when there are no pages).
#[derive(Debug, Clone, PartialEq)]
pub struct PageIndicator {
    number_of_pages: usize,
    current_page: usize,
    selected_color: Color,
    unselected_color: Color,
    background_color: Option<Color>,
    size: IndicatorSize,
    scale: f64,
    frame: Rect,
    hidden: bool,
}

impl Default for PageIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl PageIndicator {
    pub fn new() -> Self {
        let size = IndicatorSize::default();
        Self {
            number_of_pages: 0,
            current_page: 0,
            selected_color: Color::BLUE,
            unselected_color: Color::SYSTEM_GRAY,
            background_color: None,
            size,
            scale: size.scale(),
            frame: Rect::new(0.0, 0.0, 0.0, 30.0),
            hidden: false,
        }
    }

    pub fn number_of_pages(&self) -> usize {
        self.number_of_pages
    }

    pub fn set_number_of_pages(&mut self, count: usize) {
        self.number_of_pages = count;
        self.current_page = self.clamp_page(self.current_page);
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = self.clamp_page(page);
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.min(self.number_of_pages.saturating_sub(1))
    }

    /// Color of the dot for the current page
    pub fn selected_color(&mut self, color: Color) {
        self.selected_color = color;
    }

    /// Color of the dots for every other page
    pub fn unselected_color(&mut self, color: Color) {
        self.unselected_color = color;
    }

    /// Color of the rectangle behind the dots
    pub fn background_color(&mut self, color: Color) {
        self.background_color = Some(color);
    }

    pub fn selected(&self) -> Color {
        self.selected_color
    }

    pub fn unselected(&self) -> Color {
        self.unselected_color
    }

    pub fn background(&self) -> Option<Color> {
        self.background_color
    }

    /// Replaces the current scale with the one for `size`.
    pub fn set_size(&mut self, size: IndicatorSize) {
        self.size = size;
        self.scale = size.scale();
    }

    pub fn size(&self) -> IndicatorSize {
        self.size
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Move the indicator down by `pixels` from where it is now
    pub fn offset_down(&mut self, pixels: i32) {
        self.shift_y(i64::from(pixels));
    }

    /// Move the indicator up by `pixels` from where it is now
    pub fn offset_up(&mut self, pixels: i32) {
        self.shift_y(-i64::from(pixels));
    }

    // Origin is truncated to a whole pixel before shifting.
    fn shift_y(&mut self, delta: i64) {
        let y = self.frame.y.trunc() as i64 + delta;
        self.frame = self.frame.with_y(y as f64);
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}
