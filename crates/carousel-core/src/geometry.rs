//! Plain geometry types shared by the carousel and its host surface.
//!
//! Units are whatever the host measures in (points on a phone, cells in a
//! terminal). The carousel never converts between them.

/// A position in the host's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An origin plus a size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Same rect moved horizontally to `x`
    pub fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    /// Same rect moved vertically to `y`
    pub fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 5.0, 300.0, 200.0);
        assert_eq!(rect.min_x(), 10.0);
        assert_eq!(rect.max_x(), 310.0);
        assert_eq!(rect.origin(), Point::new(10.0, 5.0));
        assert_eq!(rect.size(), Size::new(300.0, 200.0));
    }

    #[test]
    fn test_rect_with_keeps_other_fields() {
        let rect = Rect::new(0.0, 0.0, 300.0, 200.0).with_x(600.0).with_y(-4.0);
        assert_eq!(rect, Rect::new(600.0, -4.0, 300.0, 200.0));
    }
}
