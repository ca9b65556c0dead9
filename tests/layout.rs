mod common;

use common::*;
use raster_gen::layout::*;
use raster_gen::{colours, FontId, Pen, Point, Px, Rect};

#[test]
fn primitives_end_at_or_below_their_start() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);
    let rect = Rect::new(10, 20, 150, 120);

    for node in [
        empty(),
        fixed(Px(3), Px(4)),
        text("hello", vec![]),
        text("", vec![]),
        padding(Px(5), empty()),
    ] {
        let end = node.write_to(&mut canvas, rect);
        assert!(end.x >= rect.min_x, "{node:?} ended left of its rectangle");
        assert!(end.y >= rect.min_y, "{node:?} ended above its rectangle");
    }
}

#[test]
fn empty_and_fixed_do_not_draw() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);
    let rect = Rect::new(10, 20, 150, 120);

    assert_eq!(empty().write_to(&mut canvas, rect), Point::new(10, 20));
    assert_eq!(fixed(Px(3), Px(4)).write_to(&mut canvas, rect), Point::new(13, 24));
    assert_eq!(fixed_y(Px(7)).write_to(&mut canvas, rect), Point::new(10, 27));
    assert!(shaper.calls().is_empty());
}

#[test]
fn lines_start_where_the_previous_line_ended() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);
    let rect = Rect::new(0, 0, 200, 200);

    let end = lines(vec![text("a", vec![]), fixed_y(Px(5)), text("b", vec![])])
        .write_to(&mut canvas, rect);
    assert_eq!(end, Point::new(200, 45));
    assert_eq!(
        shaper.placements(),
        vec![
            ("a".to_string(), Point::new(0, 20)),
            ("b".to_string(), Point::new(0, 45))
        ]
    );
}

#[test]
fn nested_lines_end_in_the_same_place() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);
    let rect = Rect::new(0, 0, 200, 200);
    let a = || fixed_y(Px(3));
    let b = || text("b", vec![]);
    let c = || padding(Px(4), empty());

    let nested = lines(vec![lines(vec![a(), b()]), c()]).write_to(&mut canvas, rect);
    let flat = lines(vec![a(), b(), c()]).write_to(&mut canvas, rect);
    assert_eq!(nested.y, flat.y);
    assert_eq!(flat.y, 3 + LINE_HEIGHT + 4 + 4);
}

#[test]
fn empty_lines_end_at_the_top() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);
    assert_eq!(
        lines(vec![]).write_to(&mut canvas, Rect::new(5, 6, 50, 60)),
        Point::new(50, 6)
    );
}

#[test]
fn columns_continue_from_the_previous_right_edge() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);
    let rect = Rect::new(0, 0, 100, 0);

    let row: Node = cols(vec![
        text("ab", vec![]),
        text("cd", vec![option_alignment(Alignment::Right)]),
    ])
    .into();
    let end = row.write_to(&mut canvas, rect);
    assert_eq!(end, Point::new(100, 20));
    assert_eq!(
        shaper.placements(),
        vec![
            ("ab".to_string(), Point::new(0, 20)),
            ("cd".to_string(), Point::new(80, 20))
        ]
    );
}

#[test]
fn columns_end_at_their_tallest_child() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);
    let rect = Rect::new(0, 10, 100, 10);

    let row: Node = cols(vec![fixed(Px(10), Px(5)), fixed(Px(10), Px(40)), fixed(Px(10), Px(1))]).into();
    assert_eq!(row.write_to(&mut canvas, rect), Point::new(100, 50));
}

#[test]
fn padding_adds_its_top_and_bottom_to_the_content() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);
    let rect = Rect::new(10, 10, 100, 100);

    let margins = Margins::trbl(Px(3), Px(4), Px(5), Px(6));
    assert_eq!(
        padding_trbl(margins, empty()).write_to(&mut canvas, rect),
        Point::new(10, 10 + 3 + 5)
    );
    assert_eq!(
        padding_trbl(Margins::trbl(Px(3), Px(4), Px(0), Px(6)), empty()).write_to(&mut canvas, rect),
        Point::new(10, 13)
    );

    let end = padding_trbl(margins, text("x", vec![])).write_to(&mut canvas, rect);
    assert_eq!(end, Point::new(10, 13 + LINE_HEIGHT + 5));
    assert_eq!(shaper.placements(), vec![("x".to_string(), Point::new(16, 33))]);
}

#[test]
fn padding_an_open_rectangle_still_leaves_room() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);
    let end = padding(Px(4), text("x", vec![option_centered()]))
        .write_to(&mut canvas, Rect::new(0, 0, 100, 0));
    // the inset collapses to a 1px band, and centring cannot lift the
    // baseline above two thirds of a line
    assert_eq!(shaper.placements(), vec![("x".to_string(), Point::new(4, 4 + 13))]);
    assert_eq!(end.y, 4 + 13 + 4);
}

#[test]
fn text_that_fits_is_drawn_once_per_alignment() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);
    let rect = Rect::new(0, 0, 100, 100);

    for (alignment, x) in [
        (Alignment::Left, 0),
        (Alignment::Right, 50),
        (Alignment::Center, 25),
    ] {
        text("hello", vec![option_alignment(alignment)]).write_to(&mut canvas, rect);
        let calls = shaper.placements();
        assert_eq!(calls.last(), Some(&("hello".to_string(), Point::new(x, 20))));
    }
    assert_eq!(shaper.calls().len(), 3);
}

#[test]
fn vertically_centred_text_sits_in_the_middle() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);

    let end = text("mid", vec![option_centered()]).write_to(&mut canvas, Rect::new(0, 0, 100, 100));
    assert_eq!(end, Point::new(100, 20 + 50 - 10));

    let end = text("low", vec![option_centered()]).write_to(&mut canvas, Rect::new(0, 0, 100, 4));
    assert_eq!(end.y, 13);
}

#[test]
fn wrapped_text_advances_by_line_spacing() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);

    let end = text("aaaa bbbb cccc", vec![option_alignment(Alignment::Right)])
        .write_to(&mut canvas, Rect::new(0, 0, 100, 100));
    assert_eq!(end, Point::new(100, 45));
    assert_eq!(
        shaper.placements(),
        vec![
            ("aaaa bbbb".to_string(), Point::new(10, 20)),
            ("cccc".to_string(), Point::new(60, 45))
        ]
    );
}

#[test]
fn wrapped_lines_fit_unless_they_are_a_single_word() {
    let shaper = MonoShaper::new();
    let theme = theme();
    let style = TextStyle::from_theme(&theme);
    let rect = Rect::new(0, 0, 75, 500);

    for sample in [
        "Some product name. Pretty stuff with long name. 60x90x12 box everywhere.",
        "Total including delivery and fee (wholesale)",
        "a b c d e f g h i j k l m n o p",
        "incomprehensibilities everywhere",
    ] {
        let layout = layout_text(&shaper, sample, rect, &style, theme.line_spacing);
        assert!(layout.lines.len() > 1);
        for line in layout.lines.iter() {
            assert!(
                line.width <= rect.width() || !line.text.contains(' '),
                "{:?} overflows",
                line.text
            );
        }
        let words: Vec<&str> = sample.split_whitespace().collect();
        let rejoined: Vec<String> = layout.lines.iter().map(|l| l.text.clone()).collect();
        assert_eq!(rejoined.join(" "), words.join(" "));
    }
}

#[test]
fn wrapping_is_repeatable() {
    let shaper = MonoShaper::new();
    let theme = theme();
    let style = TextStyle::from_theme(&theme);
    let rect = Rect::new(3, 7, 90, 90);
    let sample = "the same words wrapped into the same box every time";

    let first = layout_text(&shaper, sample, rect, &style, theme.line_spacing);
    let second = layout_text(&shaper, sample, rect, &style, theme.line_spacing);
    assert_eq!(first, second);
    assert_eq!(first.bottom, first.lines.last().map(|l| l.origin.y).unwrap_or_default());
}

#[test]
fn last_font_option_wins() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);
    let red = Pen::new(colours::RED, Px(1));

    text(
        "x",
        vec![
            option_font(FontId(0), 10.0, Pen::default()),
            option_font(FontId(1), 14.0, red),
        ],
    )
    .write_to(&mut canvas, Rect::new(0, 0, 100, 100));
    let calls = shaper.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].font, FontId(1));
    assert_eq!(calls[0].size, 14.0);
    assert_eq!(calls[0].colour, colours::RED);
}

#[test]
fn unknown_fonts_fall_back_to_the_theme() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);

    text("x", vec![option_font(FontId(7), 9.0, Pen::default())])
        .write_to(&mut canvas, Rect::new(0, 0, 100, 100));
    let calls = shaper.calls();
    assert_eq!(calls[0].font, FontId(0));
    assert_eq!(calls[0].size, 9.0);
}

#[test]
fn canvas_writes_stack() {
    let shaper = MonoShaper::new();
    let mut image = white(220, 220);
    let mut canvas = canvas(&mut image, &shaper);

    assert_eq!(canvas.write(&text("one", vec![])), Point::new(200, 20));
    assert_eq!(canvas.write(&text("two", vec![])), Point::new(200, 40));
    assert_eq!(canvas.cursor(), 40);
    assert_eq!(
        shaper.placements(),
        vec![
            ("one".to_string(), Point::new(0, 20)),
            ("two".to_string(), Point::new(0, 40))
        ]
    );
}
