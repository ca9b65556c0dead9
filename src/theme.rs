use crate::font::FontId;
use crate::layout::Margins;
use crate::pen::Pen;
use crate::units::{px, Mm, Px};

/// Default values every document is rendered with: the fallback font and pen, and the
/// table metrics. A theme is handed to [`Canvas::new`](crate::Canvas::new), and
/// anything a node does not specify itself is taken from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Used for any text that does not name a font of its own
    pub font: FontId,
    /// Point size used for any text that does not specify one
    pub font_size: f32,
    /// Used for text and borders that do not specify a pen
    pub pen: Pen,
    /// Inset applied to table cells that are not explicitly padded
    pub cell_padding: Margins,
    /// Nominal height of a table's header band, before captions are fitted
    pub header_height: i32,
    /// Minimum height of a table row
    pub row_height: i32,
    /// Distance between consecutive baselines of wrapped text, relative to the line height
    pub line_spacing: f32,
}

impl Theme {
    pub fn new(font: FontId) -> Theme {
        Theme {
            font,
            font_size: 12.0,
            pen: Pen::default(),
            cell_padding: Margins::all(Mm(1.5)),
            header_height: px(Mm(5.0)),
            row_height: px(Mm(2.0)),
            line_spacing: 1.25,
        }
    }

    pub fn with_font_size(mut self, size: f32) -> Theme {
        self.font_size = size;
        self
    }

    pub fn with_pen(mut self, pen: Pen) -> Theme {
        self.pen = pen;
        self
    }

    pub fn with_cell_padding(mut self, padding: Margins) -> Theme {
        self.cell_padding = padding;
        self
    }

    pub fn with_header_height<L: Into<Px>>(mut self, height: L) -> Theme {
        self.header_height = px(height);
        self
    }

    pub fn with_row_height<L: Into<Px>>(mut self, height: L) -> Theme {
        self.row_height = px(height);
        self
    }

    pub fn with_line_spacing(mut self, spacing: f32) -> Theme {
        self.line_spacing = spacing;
        self
    }
}
