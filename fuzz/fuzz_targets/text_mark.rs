#![no_main]

use std::path::Path;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use watermagick::{Anchor, CommandBuilder, Font, Offset, TileSize, WatermarkOptions};
use watermagick_fuzz::{draw_strings, operand, shell_words};

#[derive(Debug, Arbitrary)]
struct TextMarkInput {
    text: String,
    source: String,
    output: String,
    font: Option<String>,
    anchor: u8,
    offset: (i16, i16),
    opacity: u8,
    tiled: bool,
    rotate: Option<i16>,
}

const ANCHORS: [Anchor; 9] = [
    Anchor::TopLeft,
    Anchor::Top,
    Anchor::TopRight,
    Anchor::Left,
    Anchor::Center,
    Anchor::Right,
    Anchor::BottomLeft,
    Anchor::Bottom,
    Anchor::BottomRight,
];

fuzz_target!(|input: TextMarkInput| {
    let options = WatermarkOptions {
        anchor: ANCHORS[usize::from(input.anchor) % ANCHORS.len()],
        offset: Offset::new(i32::from(input.offset.0), i32::from(input.offset.1)),
        opacity: f64::from(input.opacity) / f64::from(u8::MAX),
        tiled: input.tiled,
        rotate: input.rotate.map(i32::from),
        font: input.font.map(Font::new),
        tile_size: TileSize::new(100, 100),
        ..Default::default()
    };

    let builder = CommandBuilder::new(&input.source);
    let Ok(command) = builder.build_text_mark(&input.text, Path::new(&input.output), &options)
    else {
        // empty source, empty font name, NUL bytes or a leading @; all rejected before any quoting
        return;
    };

    let stages = shell_words(&command);
    assert_eq!(stages.len(), if input.tiled { 2 } else { 1 });

    let producer = &stages[0];
    let draw_at = producer.iter().position(|w| w == "-draw").expect("no -draw");
    let drawn = input.text.replace('%', "%%");
    assert_eq!(draw_strings(&producer[draw_at + 1]), [drawn.clone(), drawn]);

    let last = stages.last().expect("no stages");
    let source = operand(&input.source);
    let destination = if input.output.is_empty() {
        source.clone()
    } else {
        operand(&input.output)
    };
    assert_eq!(last[last.len() - 1], destination);
    assert_eq!(last[last.len() - 2], source);
});
