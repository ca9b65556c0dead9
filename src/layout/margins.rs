use crate::rect::Rect;
use crate::units::{px, Px};

/// Insets applied around a node by [`padding`](crate::layout::padding) and around
/// table cells. All values are in pixels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Margins {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl<T: Into<Px>, R: Into<Px>, B: Into<Px>, L: Into<Px>>(
        top: T,
        right: R,
        bottom: B,
        left: L,
    ) -> Margins {
        Margins {
            top: px(top),
            right: px(right),
            bottom: px(bottom),
            left: px(left),
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Px>>(value: D) -> Margins {
        let value = px(value);
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric<V: Into<Px>, H: Into<Px>>(vertical: V, horizontal: H) -> Margins {
        let vertical = px(vertical);
        let horizontal = px(horizontal);
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins on the left and right only
    pub fn left_right<H: Into<Px>>(horizontal: H) -> Margins {
        Margins::symmetric(Px(0), horizontal)
    }

    /// Create margins on the top and bottom only
    pub fn top_bottom<V: Into<Px>>(vertical: V) -> Margins {
        Margins::symmetric(vertical, Px(0))
    }

    /// Create margins where all values are 0
    pub fn empty() -> Margins {
        Margins::default()
    }

    /// Shrink `rect` by these margins, see [`Rect::inset`]
    pub fn apply(&self, rect: Rect) -> Rect {
        rect.inset(self.left, self.top, self.right, self.bottom)
    }
}
