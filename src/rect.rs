/// A point in pixel space; `y` grows downwards.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

/// A rectangle in pixel space, specified by its top-left and bottom-right corners.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    /// The left edge
    pub min_x: i32,
    /// The top edge
    pub min_y: i32,
    /// The right edge
    pub max_x: i32,
    /// The bottom edge
    pub max_y: i32,
}

impl Rect {
    /// Create a rectangle from two corners. The corners are swapped where needed so
    /// that `max_x >= min_x` and `max_y >= min_y` always hold.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
        Rect {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// Create a rectangle anchored at the origin
    pub fn from_size(width: u32, height: u32) -> Rect {
        Rect::new(0, 0, width as i32, height as i32)
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// Shrink the rectangle by the given amount on each side. When the vertical
    /// insets meet or cross, the result collapses to a 1 pixel band starting at the
    /// inset top rather than an inverted rectangle; the same holds horizontally.
    pub fn inset(&self, left: i32, top: i32, right: i32, bottom: i32) -> Rect {
        let min_x = self.min_x + left;
        let min_y = self.min_y + top;
        let mut max_x = self.max_x - right;
        let mut max_y = self.max_y - bottom;
        if max_y <= min_y {
            max_y = min_y + 1;
        }
        if max_x < min_x {
            max_x = min_x + 1;
        }
        Rect {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The same rectangle with a different bottom edge
    pub fn with_max_y(&self, max_y: i32) -> Rect {
        Rect { max_y, ..*self }
    }
}
