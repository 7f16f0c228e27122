//! The snake's head-to-tail color gradient
use crate::consts;
use ratatui::style::{Color, Style};

/// Color of the snake's head
const HEAD: Color = Color::Rgb(0x17, 0xc2, 0x57);

/// Color of the cell just behind the head; the gradient starts here
const SECOND: (u8, u8, u8) = (0x14, 0xa8, 0x4b);

/// Color of the tail; the gradient ends here
const TAIL: (u8, u8, u8) = (0x0a, 0x5a, 0x2a);

/// Compute the color of the body cell at `index` (0 = head) of a snake `len`
/// cells long.
///
/// The head keeps a fixed color.  The rest of the body fades from [`SECOND`]
/// to [`TAIL`], with each channel interpolated on the square root of the
/// relative position so that the change is front-loaded towards the head.
/// The result depends only on the arguments, making renders reproducible.
#[allow(clippy::cast_precision_loss)]
pub(super) fn segment_color(index: usize, len: usize) -> Color {
    if index == 0 {
        return HEAD;
    }
    if len == 2 {
        return Color::Rgb(SECOND.0, SECOND.1, SECOND.2);
    }
    let segment_factor = if len > 2 {
        (index - 1) as f64 / (len - 2) as f64
    } else {
        0.0
    };
    let factor = segment_factor.sqrt();
    Color::Rgb(
        blend(SECOND.0, TAIL.0, factor),
        blend(SECOND.1, TAIL.1, factor),
        blend(SECOND.2, TAIL.2, factor),
    )
}

/// Style for the body cell at `index` of a snake `len` cells long
pub(super) fn segment_style(index: usize, len: usize) -> Style {
    Style::new()
        .fg(segment_color(index, len))
        .bg(consts::BOARD_COLOR)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(second: u8, tail: u8, factor: f64) -> u8 {
    let channel = (f64::from(tail) - f64::from(second)).mul_add(factor, f64::from(second));
    channel.round().clamp(0.0, 255.0) as u8
}
