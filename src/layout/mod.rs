//! Declarative layout of documents.
//!
//! A document is a tree of [`Node`]s. Rendering hands the root node a rectangle;
//! every node draws itself within (or, when its content does not fit, past) the
//! rectangle it is given and returns the point where it ended, which is where the
//! next sibling starts.
//!
//! - [`empty`] and [`fixed`] occupy no content and are used as placeholders and spacers
//! - [`text`] draws a string, wrapping it at word boundaries
//! - [`padding`] and its variants inset the rectangle around another node
//! - [`lines`] stacks nodes vertically, [`cols`] places them side by side
//! - [`table`] draws a bordered grid with a header, see [`column`] and [`column_span`]
//!
//! # Example
//!
//! ```no_run
//! use raster_gen::layout::*;
//! use raster_gen::{colours, Canvas, Font, FontBook, Mm, Pen, Theme};
//!
//! # fn main() -> Result<(), raster_gen::RasterError> {
//! let mut fonts = FontBook::new();
//! let regular = fonts.add_font(Font::load_from_disk("Regular.ttf")?);
//! let pen = Pen::new(colours::BLACK, Mm(0.25));
//!
//! let document = padding(
//!     Mm(5.0),
//!     lines(vec![
//!         text("Order #1", vec![option_font(regular, 12.0, pen)]),
//!         fixed_y(Mm(2.0)),
//!         table(
//!             vec![
//!                 column("PRODUCT", 0.8, vec![option_centered()]),
//!                 column("COUNT", 0.2, vec![option_alignment(Alignment::Right)]),
//!             ],
//!             vec![cols(vec![text("Paper", vec![]), text("20", vec![])])],
//!         ),
//!     ]),
//! );
//!
//! let mut image = image::RgbaImage::new(800, 600);
//! let mut canvas = Canvas::new(&mut image, &fonts, Theme::new(regular))?;
//! canvas.fill(colours::WHITE);
//! let end = canvas.write(&document);
//! let receipt = raster_gen::crop_to_content(&image, end.y);
//! receipt.save("receipt.png")?;
//! # Ok(())
//! # }
//! ```

mod margins;
mod table;
mod text;

pub use margins::*;
pub use table::*;
pub use text::*;

use crate::canvas::Canvas;
use crate::rect::{Point, Rect};
use crate::units::{px, Px};

static EMPTY: Node = Node::Empty;

/// A unit of layout. See the [module documentation](self) for an overview.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Draws nothing and ends where it starts
    Empty,
    /// Draws nothing and ends at a fixed offset from the top left of its rectangle
    Fixed { dx: i32, dy: i32 },
    Text(Text),
    Padding(Padding),
    Lines(Vec<Node>),
    Columns(Columns),
    ColumnSpan(ColumnSpan),
    Table(Table),
}

/// Insets the rectangle around a node
#[derive(Debug, Clone, PartialEq)]
pub struct Padding {
    pub margins: Margins,
    pub node: Box<Node>,
}

/// Nodes placed side by side; also the rows of a [`Table`]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Columns {
    pub children: Vec<Node>,
}

/// Makes a table cell cover `span` adjacent columns
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpan {
    pub node: Box<Node>,
    pub span: usize,
}

/// A node with one layer of padding peeled off, see [`Node::unwrap_padding`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellContent<'a> {
    pub node: &'a Node,
    pub padding: Option<Margins>,
}

impl Columns {
    /// The child at `index`, or an empty node when the row is shorter than that
    pub fn child(&self, index: usize) -> &Node {
        self.children.get(index).unwrap_or(&EMPTY)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn write_to(&self, canvas: &mut Canvas, rect: Rect) -> Point {
        let mut rect = rect;
        let mut bottom = rect.max_y;
        for child in self.children.iter() {
            let end = child.write_to(canvas, rect);
            rect.min_x = end.x.min(rect.max_x);
            bottom = bottom.max(end.y);
        }
        Point::new(rect.max_x, bottom)
    }
}

impl Node {
    /// Lay out and draw the node within `rect`, returning the point where it ended
    pub fn write_to(&self, canvas: &mut Canvas, rect: Rect) -> Point {
        match self {
            Node::Empty => rect.top_left(),
            Node::Fixed { dx, dy } => Point::new(rect.min_x + dx, rect.min_y + dy),
            Node::Text(text) => text.write_to(canvas, rect),
            Node::Padding(padding) => write_padded(canvas, rect, padding.margins, &padding.node),
            Node::Lines(children) => write_lines(canvas, rect, children),
            Node::Columns(columns) => columns.write_to(canvas, rect),
            Node::ColumnSpan(span) => span.node.write_to(canvas, rect),
            Node::Table(table) => table.write_to(canvas, rect),
        }
    }

    /// The node inside a column span along with the number of columns it covers;
    /// any other node covers a single column
    pub fn unwrap_span(&self) -> (&Node, usize) {
        match self {
            Node::ColumnSpan(span) => (&span.node, span.span.max(1)),
            other => (other, 1),
        }
    }

    /// The node inside a padding along with that padding; any other node is
    /// returned as is
    pub fn unwrap_padding(&self) -> CellContent<'_> {
        match self {
            Node::Padding(padding) => CellContent {
                node: &padding.node,
                padding: Some(padding.margins),
            },
            other => CellContent {
                node: other,
                padding: None,
            },
        }
    }
}

/// Render `node` inside `rect` shrunk by `margins`. The bottom margin is added back to
/// where the node ended, so whatever follows starts below the padding.
pub(crate) fn write_padded(canvas: &mut Canvas, rect: Rect, margins: Margins, node: &Node) -> Point {
    let end = node.write_to(canvas, margins.apply(rect));
    Point::new(rect.min_x, end.y + margins.bottom)
}

fn write_lines(canvas: &mut Canvas, rect: Rect, children: &[Node]) -> Point {
    let mut rect = rect.with_max_y(rect.min_y);
    for child in children {
        let end = child.write_to(canvas, rect);
        rect.min_y = end.y;
        rect.max_y = end.y;
    }
    Point::new(rect.max_x, rect.max_y)
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Columns> for Node {
    fn from(columns: Columns) -> Self {
        Node::Columns(columns)
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Node::Table(table)
    }
}

impl From<Padding> for Node {
    fn from(padding: Padding) -> Self {
        Node::Padding(padding)
    }
}

/// A node that draws nothing
pub fn empty() -> Node {
    Node::Empty
}

/// A node that draws nothing and ends `x` right of and `y` below where it starts
pub fn fixed<X: Into<Px>, Y: Into<Px>>(x: X, y: Y) -> Node {
    Node::Fixed {
        dx: px(x),
        dy: px(y),
    }
}

/// A vertical gap
pub fn fixed_y<Y: Into<Px>>(y: Y) -> Node {
    fixed(Px(0), y)
}

/// Text drawn with the given options, see [`TextOption`]
pub fn text<S: Into<String>>(s: S, options: Vec<TextOption>) -> Node {
    Node::Text(Text::new(s, options))
}

/// Pad every side of `node` by the same amount
pub fn padding<P: Into<Px>, N: Into<Node>>(pad: P, node: N) -> Node {
    padding_trbl(Margins::all(pad), node)
}

/// Pad the top and bottom of `node` by `vertical`, and its sides by `horizontal`
pub fn padding_axes<V: Into<Px>, H: Into<Px>, N: Into<Node>>(vertical: V, horizontal: H, node: N) -> Node {
    padding_trbl(Margins::symmetric(vertical, horizontal), node)
}

/// Pad only the left and right of `node`
pub fn padding_left_right<P: Into<Px>, N: Into<Node>>(pad: P, node: N) -> Node {
    padding_trbl(Margins::left_right(pad), node)
}

/// Pad only the top and bottom of `node`
pub fn padding_top_bottom<P: Into<Px>, N: Into<Node>>(pad: P, node: N) -> Node {
    padding_trbl(Margins::top_bottom(pad), node)
}

/// Pad each side of `node` individually
pub fn padding_trbl<N: Into<Node>>(margins: Margins, node: N) -> Node {
    Node::Padding(Padding {
        margins,
        node: Box::new(node.into()),
    })
}

/// Stack nodes vertically, each starting where the previous one ended
pub fn lines<I: IntoIterator<Item = Node>>(nodes: I) -> Node {
    Node::Lines(nodes.into_iter().collect())
}

/// Place nodes left to right. The result is a row of a [`table`] or, converted into
/// a [`Node`], part of any other layout.
pub fn cols<I: IntoIterator<Item = Node>>(nodes: I) -> Columns {
    Columns {
        children: nodes.into_iter().collect(),
    }
}

/// Make a table cell cover `span` columns
pub fn column_span<N: Into<Node>>(node: N, span: usize) -> Node {
    Node::ColumnSpan(ColumnSpan {
        node: Box::new(node.into()),
        span,
    })
}
