use raster_gen::image::{DynamicImage, RgbaImage};
use raster_gen::layout::*;
use raster_gen::{crop_to_content, Canvas, Colour, Font, FontBook, Mm, Pen, Px, RasterError, Theme};

fn main() -> Result<(), RasterError> {
    let mut args = std::env::args().skip(1);
    let (Some(regular), bold) = (args.next(), args.next()) else {
        eprintln!("usage: receipt <regular.ttf> [bold.ttf]");
        std::process::exit(1);
    };

    // load the fonts to draw with; without a bold face the regular one is used
    let mut fonts = FontBook::new();
    let regular = fonts.add_font(Font::load_from_disk(regular)?);
    let bold = match bold {
        Some(path) => fonts.add_font(Font::load_from_disk(path)?),
        None => regular,
    };

    // an A4 sheet
    let width = Px::from(Mm(210.0)).get() as u32;
    let height = Px::from(Mm(297.0)).get() as u32;

    let front = Colour::new_rgb_bytes(46, 46, 46);
    let accent = Colour::new_rgb_bytes(198, 46, 46);
    let pen = Pen::new(front, Mm(0.25));
    let accent_pen = Pen::new(accent, Mm(0.25));

    let font = option_font(regular, 12.0, pen);
    let font_accent = option_font(regular, 12.0, accent_pen);
    let table_medium = option_font(regular, 9.0, pen);
    let table_small = option_font(regular, 8.0, pen);
    let table_bold = option_font(bold, 8.0, pen);
    let right = option_alignment(Alignment::Right);

    let product = format!("Some product name. {}. 60x90x12 box everywhere. BEER", lipsum::lipsum_words(12));
    let document = padding(
        Mm(5.0),
        lines(vec![
            padding_left_right(
                Mm(10.0),
                lines(vec![
                    cols(vec![
                        text("Order #4217 10.16.2026 15:04", vec![option_alignment(Alignment::Left), font]),
                        text("DRAFT", vec![right, font_accent]),
                    ])
                    .into(),
                    text("555-345-65-66 Menshenin Igor", vec![font]),
                ]),
            ),
            fixed_y(Mm(2.0)),
            table(
                vec![
                    column("PRODUCT NAME", 0.49, vec![option_centered(), table_medium, option_alignment(Alignment::Left)]),
                    column("COUNT", 0.06, vec![option_centered(), table_small, option_alignment(Alignment::Center)]),
                    column("PRICE", 0.08, vec![option_centered(), table_small, right]),
                    column("AMOUNT", 0.1, vec![option_centered(), table_small, right]),
                    column("PRICE WS", 0.09, vec![option_centered(), table_small, right]),
                    column("AMOUNT WS", 0.1, vec![option_centered(), table_small, right]),
                    column("DELIVERY", 0.08, vec![option_centered(), table_small, right]),
                ],
                vec![
                    cols(vec![
                        text(product, vec![option_centered(), table_small]),
                        text("20", vec![]),
                        text("36.00", vec![]),
                        text("720.00", vec![]),
                        text("30.00", vec![]),
                        text("600.00", vec![]),
                        text("", vec![]),
                    ]),
                    cols(vec![
                        text("Foo and Bar company paper", vec![option_centered(), table_small]),
                        text("20", vec![]),
                        text("36.00", vec![]),
                        text("720.00", vec![]),
                        text("30.00", vec![]),
                        text("600.00", vec![]),
                        text("120.00", vec![]),
                    ]),
                    cols(vec![
                        empty(),
                        column_span(text("1440.00", vec![table_bold, right]), 3),
                        column_span(text("1200.00", vec![table_bold, right]), 2),
                        text("120.00", vec![table_bold, right]),
                    ]),
                    cols(vec![
                        text("Total including delivery and fee (retail)", vec![table_bold, right]),
                        column_span(text("1977.37", vec![table_bold, right]), 6),
                    ]),
                    cols(vec![
                        text("Total including delivery and fee (wholesale)", vec![table_bold, right]),
                        column_span(text("1812.22", vec![table_bold, right]), 6),
                    ]),
                ],
            ),
        ]),
    );

    let mut image = RgbaImage::new(width, height);
    let mut canvas = Canvas::new(&mut image, &fonts, Theme::new(regular))?;
    canvas.fill(Colour::new_rgb_bytes(255, 255, 255));
    let end = canvas.write(&document);

    let receipt = crop_to_content(&image, end.y);
    receipt.save("receipt.png")?;
    DynamicImage::ImageRgba8(receipt).to_rgb8().save("receipt.jpeg")?;
    Ok(())
}
