//! Frame layout: caption, digit preview, decoded text.
//!
//! ```text
//! +--------------------------------+
//! | format(12.345, 2, 10)          |  caption
//! |  [8] [8] : [8] [8]             |  preview
//! | shown: "12.35"                 |  decoded buffer
//! +--------------------------------+
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use profont::PROFONT_12_POINT;
use segment_common::DigitBuffer;
use segment_common::colors::{BLACK, SEGMENT_ON, WHITE};
use segment_common::preview::{PreviewStyle, draw_buffer};

const MARGIN: u32 = 16;

/// Height reserved for one caption line.
const LINE_HEIGHT: u32 = 20;

const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, WHITE);
const SHOWN_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, SEGMENT_ON);
const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Canvas size for `style`.
pub fn frame_size(style: &PreviewStyle) -> Size {
    let preview = style.size();
    Size::new(preview.width + 2 * MARGIN, preview.height + 2 * LINE_HEIGHT + 2 * MARGIN)
}

/// Draw one complete frame.
pub fn draw_frame<D>(
    display: &mut D,
    caption: &str,
    shown: &str,
    buffer: &DigitBuffer,
    style: &PreviewStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    let left = MARGIN as i32;
    let preview_top = (MARGIN + LINE_HEIGHT) as i32;

    Text::with_text_style(caption, Point::new(left, MARGIN as i32), CAPTION_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    draw_buffer(display, Point::new(left, preview_top), buffer, style);

    let shown_top = preview_top + style.digit_size.height as i32 + (LINE_HEIGHT / 2) as i32;
    let line = format!("shown: \"{shown}\"");
    Text::with_text_style(&line, Point::new(left, shown_top), SHOWN_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
}
