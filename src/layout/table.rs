use super::text::{fill_text_into_rect, Alignment, TextOption, TextStyle};
use super::{write_padded, Columns, Node};
use crate::canvas::Canvas;
use crate::pen::Pen;
use crate::rect::{Point, Rect};
use crate::theme::Theme;

/// A column of a [`Table`]: its caption, its share of the table's width, and the
/// default text options for its cells
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub caption: String,
    /// Fraction of the table width, in (0, 1]. Fractions of a table's columns are
    /// not required to add up to 1.
    pub fraction: f32,
    pub options: Vec<TextOption>,
}

/// A table column, see [`Column`]
pub fn column<S: Into<String>>(caption: S, fraction: f32, options: Vec<TextOption>) -> Column {
    Column {
        caption: caption.into(),
        fraction,
        options,
    }
}

impl Column {
    /// The style of the column's cells
    pub fn style(&self, theme: &Theme) -> TextStyle {
        TextStyle::resolve(&self.options, theme)
    }

    /// Width in pixels of the column in a table `table_width` pixels wide
    pub fn width(&self, table_width: i32) -> i32 {
        (table_width as f32 * self.fraction).round() as i32
    }
}

/// Captions are centred both ways, whatever their column's alignment
fn caption_style(style: &TextStyle) -> TextStyle {
    TextStyle {
        alignment: Alignment::Center,
        vertical_center: true,
        ..*style
    }
}

/// A cell of a row after column spans have been resolved
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RowCell<'a> {
    /// The cell's content, still wrapped in any padding it was given
    pub node: &'a Node,
    /// Index of the first column the cell covers
    pub column: usize,
    /// Number of columns the cell covers
    pub span: usize,
    /// Left edge of the cell
    pub x: i32,
    pub width: i32,
}

/// A grid of bordered cells with a header of column captions
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Columns>,
}

/// A table with the given columns and rows. Each row holds one node per cell; a cell
/// wrapped in [`column_span`](crate::layout::column_span) takes up several columns
/// and the next node of the row goes in the column after them.
pub fn table<R: IntoIterator<Item = Columns>>(columns: Vec<Column>, rows: R) -> Node {
    Node::Table(Table {
        columns,
        rows: rows.into_iter().collect(),
    })
}

impl Table {
    /// Match the nodes of `row` to columns. Each node takes the next free column, or as
    /// many as its span asks for; a span running past the last column is cut short
    /// there. Column widths are rounded individually, so a cell is exactly as wide as
    /// the columns it covers.
    pub fn row_cells<'a>(&self, row: &'a Columns, left: i32, table_width: i32) -> Vec<RowCell<'a>> {
        let mut cells = Vec::with_capacity(self.columns.len());
        let mut column = 0;
        let mut content = 0;
        let mut x = left;
        while column < self.columns.len() {
            let (node, span) = row.child(content).unwrap_span();
            let span = span.min(self.columns.len() - column);
            let width = self.columns[column..column + span]
                .iter()
                .map(|c| c.width(table_width))
                .sum();
            cells.push(RowCell {
                node,
                column,
                span,
                x,
                width,
            });
            x += width;
            column += span;
            content += 1;
        }
        cells
    }

    pub(crate) fn write_to(&self, canvas: &mut Canvas, rect: Rect) -> Point {
        let theme = canvas.theme().clone();
        let padding = theme.cell_padding;
        let table_width = rect.width();
        let top = rect.min_y;
        let mut left = rect.min_x;
        let mut bottom = top;

        let styles: Vec<TextStyle> = self
            .columns
            .iter()
            .map(|c| c.style(&theme).with_known_font(canvas.shaper(), &theme))
            .collect();

        let mut borders: Vec<(Rect, Pen)> = Vec::with_capacity(self.columns.len());
        for (column, style) in self.columns.iter().zip(styles.iter()) {
            let width = column.width(table_width);
            let cell = Rect::new(left, top, left + width, top + theme.header_height);
            let caption = caption_style(style);
            let end = fill_text_into_rect(canvas, &column.caption, padding.apply(cell), &caption);
            bottom = bottom.max(end + padding.bottom);
            left += width;
            borders.push((cell, style.pen));
        }
        for (cell, pen) in borders.drain(..) {
            canvas.stroke_rect(cell.with_max_y(bottom), pen);
        }

        for row in self.rows.iter() {
            let top = bottom;
            bottom = top + theme.row_height;
            for cell in self.row_cells(row, rect.min_x, table_width) {
                // merged cells read like the last column they cover, but are
                // bordered with the pen of the first
                let style = &styles[cell.column + cell.span - 1];
                let bounds = Rect::new(cell.x, top, cell.x + cell.width, bottom);
                let content = cell.node.unwrap_padding();
                let styled;
                let node = match content.node {
                    Node::Text(text) => {
                        styled = Node::Text(text.with_defaults(&style.to_options()));
                        &styled
                    }
                    other => other,
                };
                let end = write_padded(canvas, bounds, content.padding.unwrap_or(padding), node);
                bottom = bottom.max(end.y);
                left = cell.x + cell.width;
                borders.push((bounds, styles[cell.column].pen));
            }
            for (cell, pen) in borders.drain(..) {
                canvas.stroke_rect(cell.with_max_y(bottom), pen);
            }
        }

        log::debug!(
            "table of {} columns and {} rows from y={} to y={}",
            self.columns.len(),
            self.rows.len(),
            top,
            bottom
        );
        Point::new(left, bottom)
    }
}
