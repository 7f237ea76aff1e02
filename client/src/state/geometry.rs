#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in viewport (client) CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in viewport CSS pixels, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Edge-inclusive containment. Degenerate (zero or negative size)
    /// rectangles contain nothing.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        point.x >= self.left && point.x <= self.right() && point.y >= self.top && point.y <= self.bottom()
    }
}
