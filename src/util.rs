use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a `size`-dimensioned rectangle centered within `area`.  If `area`
/// is too small in either dimension, the rectangle is clamped to fit.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}

/// Return the centered rectangle of [`consts::DISPLAY_SIZE`] dimensions in
/// which everything is drawn
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}
