use crate::canvas::Canvas;
use crate::font::FontId;
use crate::pen::Pen;
use crate::rect::{Point, Rect};
use crate::shaper::Shaper;
use crate::theme::Theme;
use std::mem::discriminant;

/// Horizontal placement of each line of text within its rectangle
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

/// A single styling instruction for a [`Text`] node or a table [`Column`](crate::layout::Column).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TextOption {
    /// Horizontal alignment of every line
    Alignment(Alignment),
    /// Centre the first line vertically within the rectangle
    VerticalCenter,
    /// Font, point size and pen to draw with
    Font { font: FontId, size: f32, pen: Pen },
    /// Pen to draw with. Takes precedence over the pen bundled in a
    /// [`TextOption::Font`], wherever either appears in the list.
    Pen(Pen),
}

/// Font, size and pen for text
pub fn option_font(font: FontId, size: f32, pen: Pen) -> TextOption {
    TextOption::Font { font, size, pen }
}

/// Horizontal alignment of text
pub fn option_alignment(alignment: Alignment) -> TextOption {
    TextOption::Alignment(alignment)
}

/// Vertically centre the first line of text
pub fn option_centered() -> TextOption {
    TextOption::VerticalCenter
}

/// Draw text with the given pen
pub fn option_pen(pen: Pen) -> TextOption {
    TextOption::Pen(pen)
}

/// Fully resolved text styling
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontId,
    pub size: f32,
    pub pen: Pen,
    pub alignment: Alignment,
    pub vertical_center: bool,
}

impl TextStyle {
    /// The style of text with no options at all
    pub fn from_theme(theme: &Theme) -> TextStyle {
        TextStyle {
            font: theme.font,
            size: theme.font_size,
            pen: theme.pen,
            alignment: Alignment::Left,
            vertical_center: false,
        }
    }

    /// Resolve a list of options against the theme's defaults. Options are applied
    /// in order, so later options override earlier ones.
    pub fn resolve(options: &[TextOption], theme: &Theme) -> TextStyle {
        let mut style = TextStyle::from_theme(theme);
        let mut custom_pen = false;
        for option in options {
            match *option {
                TextOption::Font { font, size, pen } => {
                    style.font = font;
                    style.size = size;
                    if !custom_pen {
                        style.pen = pen;
                    }
                }
                TextOption::Alignment(alignment) => style.alignment = alignment,
                TextOption::VerticalCenter => style.vertical_center = true,
                TextOption::Pen(pen) => {
                    custom_pen = true;
                    style.pen = pen;
                }
            }
        }
        style
    }

    /// This style, or the same style in the theme font if `shaper` cannot draw the
    /// style's own
    pub fn with_known_font(self, shaper: &dyn Shaper, theme: &Theme) -> TextStyle {
        if shaper.has_font(self.font) {
            return self;
        }
        log::warn!("font {} is not available, using the theme font {}", self.font, theme.font);
        TextStyle {
            font: theme.font,
            ..self
        }
    }

    /// The options that reproduce this style
    pub fn to_options(&self) -> Vec<TextOption> {
        let mut options = Vec::with_capacity(3);
        if self.vertical_center {
            options.push(TextOption::VerticalCenter);
        }
        options.push(option_font(self.font, self.size, self.pen));
        options.push(TextOption::Alignment(self.alignment));
        options
    }
}

/// A string drawn into its rectangle, wrapped at word boundaries when it is too wide
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub options: Vec<TextOption>,
}

impl Text {
    pub fn new<S: Into<String>>(text: S, options: Vec<TextOption>) -> Text {
        Text {
            text: text.into(),
            options,
        }
    }

    /// The same text with a completely different set of options
    pub fn replace_options(&self, options: Vec<TextOption>) -> Text {
        Text {
            text: self.text.clone(),
            options,
        }
    }

    /// The same text, with any kind of option it does not set itself taken from
    /// `defaults`. Options already on the text always win.
    pub fn with_defaults(&self, defaults: &[TextOption]) -> Text {
        if self.options.is_empty() {
            return self.replace_options(defaults.to_vec());
        }
        let mut options = self.options.clone();
        for default in defaults {
            let kind = discriminant(default);
            if !self.options.iter().any(|o| discriminant(o) == kind) {
                options.push(*default);
            }
        }
        Text {
            text: self.text.clone(),
            options,
        }
    }

    pub(crate) fn write_to(&self, canvas: &mut Canvas, rect: Rect) -> Point {
        let style = TextStyle::resolve(&self.options, canvas.theme())
            .with_known_font(canvas.shaper(), canvas.theme());
        let bottom = fill_text_into_rect(canvas, &self.text, rect, &style);
        Point::new(rect.max_x, bottom)
    }
}

/// One line of laid out text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    /// Left end of the baseline
    pub origin: Point,
    pub width: i32,
}

/// Where the lines of a string land within a rectangle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLayout {
    pub lines: Vec<TextLine>,
    /// Baseline of the last line
    pub bottom: i32,
}

/// Split `text` into lines no wider than `max_width`.
///
/// Text that fits is returned as a single line, untouched. Otherwise whitespace
/// separated words are packed greedily, each line taking as many words as fit. A
/// word that is wider than `max_width` on its own gets a line to itself and is
/// left to overflow.
pub fn break_lines<F: Fn(&str) -> i32>(text: &str, max_width: i32, measure: F) -> Vec<String> {
    if measure(text) <= max_width {
        return vec![text.to_string()];
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let mut lines = Vec::new();
    let mut start = 0;
    while start < words.len() {
        let mut end = start;
        while end < words.len() && measure(&words[start..=end].join(" ")) <= max_width {
            end += 1;
        }
        if end == start {
            end = start + 1;
        }
        lines.push(words[start..end].join(" "));
        start = end;
    }
    lines
}

/// Work out where each line of `text` goes within `rect`.
///
/// The line height comes from [`REFERENCE_GLYPHS`](crate::shaper::REFERENCE_GLYPHS)
/// rather than the text itself so that it is the same for every line. The first
/// baseline sits one line height below the top of the rectangle; when vertically
/// centred it moves down to the middle, but never above two thirds of a line
/// height. Subsequent baselines are `line_spacing` line heights apart.
pub fn layout_text(
    shaper: &dyn Shaper,
    text: &str,
    rect: Rect,
    style: &TextStyle,
    line_spacing: f32,
) -> TextLayout {
    let measure = |s: &str| shaper.measure(style.font, style.size, s);
    let line_height = shaper.line_height(style.font, style.size);

    let mut y = rect.min_y + line_height;
    if style.vertical_center {
        let highest = rect.min_y + (line_height as f32 / 1.5).round() as i32;
        y += rect.height() / 2 - line_height / 2;
        if y < highest {
            y = highest;
        }
    }
    let advance = (line_height as f32 * line_spacing).round() as i32;

    let mut lines = Vec::new();
    for (i, line) in break_lines(text, rect.width(), measure).into_iter().enumerate() {
        if i > 0 {
            y += advance;
        }
        let width = measure(&line);
        if width > rect.width() {
            log::warn!("{line:?} is {width}px wide and overflows its {}px box", rect.width());
        }
        let x = match style.alignment {
            Alignment::Left => rect.min_x,
            Alignment::Right => rect.max_x - width,
            Alignment::Center => rect.min_x + rect.width() / 2 - width / 2,
        };
        log::trace!("text line {line:?} at ({x}, {y})");
        lines.push(TextLine {
            text: line,
            origin: Point::new(x, y),
            width,
        });
    }

    TextLayout { lines, bottom: y }
}

/// Draw `text` into `rect`, wrapping as needed, and return the baseline of the last line
pub(crate) fn fill_text_into_rect(
    canvas: &mut Canvas,
    text: &str,
    rect: Rect,
    style: &TextStyle,
) -> i32 {
    let layout = layout_text(
        canvas.shaper(),
        text,
        rect,
        style,
        canvas.theme().line_spacing,
    );
    for line in layout.lines.iter() {
        if line.text.is_empty() {
            continue;
        }
        canvas.draw_text(style.font, style.size, style.pen.colour, &line.text, line.origin);
    }
    layout.bottom
}
