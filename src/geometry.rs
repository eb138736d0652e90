//! Pixel-space primitives shared by the shape, sensing and layout builders.

/// A position in pixels. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Move the point by `(dx, dy)`.
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Width and height in pixels.
///
/// Sizes computed from user insets can be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

/// Axis-aligned rectangle.
///
/// Width and height may be negative when the inputs were degenerate; such a
/// rectangle is kept as is so callers can see how far off the configuration is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Width and height without the position.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Shrink by `margin` on every side.
    pub fn inset(self, margin: f64) -> Self {
        Rect {
            x: self.x + margin,
            y: self.y + margin,
            width: self.width - 2.0 * margin,
            height: self.height - 2.0 * margin,
        }
    }

    /// Map a fractional coordinate (0.0..=1.0 on each axis) into this rectangle.
    pub fn at_fraction(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.x + self.width * fx, self.y + self.height * fy)
    }

    /// Whether `point` lies inside, right and bottom edges excluded.
    ///
    /// A rectangle with a non-positive width or height contains nothing.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}
