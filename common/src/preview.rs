//! Draw the digit buffer as 7-segment glyphs with `embedded-graphics`.
//!
//! Used by the simulator to show exactly what the HT16K33 would light. The
//! layout follows the backpack: four digit cells with the colon column between
//! the second and third digit.
//!
//! Segment rectangles share corner coordinates; each one is shrunk along its
//! long axis before drawing so neighbouring segments do not overlap:
//! ```text
//!     +-- a --+
//!     f       b
//!     +-- g --+
//!     e       c
//!     +-- d --+  dp
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::buffer::DigitBuffer;
use crate::colors::{SEGMENT_OFF, SEGMENT_ON};
use crate::config::{SEPARATOR_SLOT, SLOT_COUNT};
use crate::font::{DECIMAL_POINT, SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F, SEG_G};

/// Geometry and colors of the preview.
#[derive(Debug, Clone, Copy)]
pub struct PreviewStyle {
    /// Size of one digit cell (without the decimal point).
    pub digit_size: Size,
    /// Segment thickness.
    pub segment_width: u32,
    /// Gap between cells. The decimal point is drawn inside this gap.
    pub spacing: u32,
    /// Width of the colon column.
    pub colon_width: u32,
    /// Lit segment color.
    pub on: Rgb565,
    /// Unlit segment color, `None` to leave unlit segments undrawn.
    pub off: Option<Rgb565>,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            digit_size: Size::new(40, 72),
            segment_width: 8,
            spacing: 14,
            colon_width: 10,
            on: SEGMENT_ON,
            off: Some(SEGMENT_OFF),
        }
    }
}

impl PreviewStyle {
    /// Left edge of a slot, relative to the preview origin.
    fn slot_x(
        &self,
        position: usize,
    ) -> i32 {
        let cell = self.digit_size.width + self.spacing;
        let colon = self.colon_width + self.spacing;
        let x = match position {
            p if p <= SEPARATOR_SLOT => p as u32 * cell,
            p => (p as u32 - 1) * cell + colon,
        };
        x as i32
    }

    /// Bounding size of the whole preview.
    pub fn size(&self) -> Size {
        let width = self.slot_x(SLOT_COUNT - 1) as u32 + self.digit_size.width + self.spacing;
        Size::new(width, self.digit_size.height)
    }
}

/// Draw all five slots of `buffer` with the top-left corner at `origin`.
pub fn draw_buffer<D>(
    display: &mut D,
    origin: Point,
    buffer: &DigitBuffer,
    style: &PreviewStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for position in 0..SLOT_COUNT {
        let top_left = origin + Point::new(style.slot_x(position), 0);
        if position == SEPARATOR_SLOT {
            draw_colon(display, top_left, buffer.colon(), style);
        } else {
            draw_digit(display, top_left, buffer.mask(position), style);
        }
    }
}

/// Draw one digit cell from its raw mask.
pub fn draw_digit<D>(
    display: &mut D,
    top_left: Point,
    mask: u8,
    style: &PreviewStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let sw = style.segment_width;
    let w = style.digit_size.width;
    let h = style.digit_size.height;

    let segments = [
        (SEG_A, Rectangle::new(top_left, Size::new(w, sw))),
        (SEG_B, Rectangle::new(top_left + Size::new(w - sw, 0), Size::new(sw, h / 2))),
        (SEG_C, Rectangle::new(top_left + Size::new(w - sw, h / 2), Size::new(sw, h / 2))),
        (SEG_D, Rectangle::new(top_left + Size::new(0, h - sw), Size::new(w, sw))),
        (SEG_E, Rectangle::new(top_left + Size::new(0, h / 2), Size::new(sw, h / 2))),
        (SEG_F, Rectangle::new(top_left, Size::new(sw, h / 2))),
        (SEG_G, Rectangle::new(top_left + Size::new(0, h / 2 - sw / 2), Size::new(w, sw))),
    ];

    for (bit, rect) in segments {
        fill(display, reduced_rect(rect), segment_color(mask & bit != 0, style));
    }

    let dot = Rectangle::new(top_left + Size::new(w + sw / 2, h - sw), Size::new(sw, sw));
    fill(display, dot, segment_color(mask & DECIMAL_POINT != 0, style));
}

/// Draw the two colon dots.
pub fn draw_colon<D>(
    display: &mut D,
    top_left: Point,
    on: bool,
    style: &PreviewStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let h = style.digit_size.height;
    let dot = Size::new(style.colon_width, style.colon_width);
    let color = segment_color(on, style);
    fill(display, Rectangle::new(top_left + Point::new(0, (h / 3) as i32), dot), color);
    fill(display, Rectangle::new(top_left + Point::new(0, (h * 2 / 3) as i32), dot), color);
}

fn segment_color(
    lit: bool,
    style: &PreviewStyle,
) -> Option<Rgb565> {
    if lit { Some(style.on) } else { style.off }
}

fn fill<D>(
    display: &mut D,
    rect: Rectangle,
    color: Option<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if let Some(color) = color {
        rect.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
    }
}

/// Shrink a segment along its long axis so corners do not overlap.
fn reduced_rect(mut rect: Rectangle) -> Rectangle {
    if rect.size.width > rect.size.height {
        let inset = rect.size.height / 2 + 1;
        rect.top_left.x += inset as i32;
        rect.size.width = rect.size.width.saturating_sub(2 * inset);
    } else {
        let inset = rect.size.width / 2 + 1;
        rect.top_left.y += inset as i32;
        rect.size.height = rect.size.height.saturating_sub(2 * inset);
    }
    rect
}
