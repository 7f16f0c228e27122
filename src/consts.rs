//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Default number of columns on the board
pub(crate) const DEFAULT_BOARD_COLS: u16 = 20;

/// Default number of rows on the board
pub(crate) const DEFAULT_BOARD_ROWS: u16 = 20;

/// Default time in milliseconds between movements of the snake
pub(crate) const DEFAULT_TICK_MS: u64 = 120;

/// Smallest allowed board dimension in either direction
pub(crate) const MIN_BOARD_DIM: u16 = 2;

/// Largest allowed number of columns on the board.  The board plus its border
/// must fit inside [`DISPLAY_SIZE`].
pub(crate) const MAX_BOARD_COLS: u16 = 76;

/// Largest allowed number of rows on the board.  The board plus its border,
/// the score bar, and the hint line must fit inside [`DISPLAY_SIZE`].
pub(crate) const MAX_BOARD_ROWS: u16 = 20;

/// Shortest allowed time in milliseconds between movements of the snake
pub(crate) const MIN_TICK_MS: u64 = 1;

/// Longest allowed time in milliseconds between movements of the snake
pub(crate) const MAX_TICK_MS: u64 = 10_000;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyph for the cells of the snake
pub(crate) const SNAKE_SYMBOL: char = '█';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the cell where the snake ran into itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Background color of the board
pub(crate) const BOARD_COLOR: Color = Color::Rgb(0x18, 0x18, 0x18);

/// Style applied to the whole of the board's interior
pub(crate) const BOARD_STYLE: Style = Style::new().bg(BOARD_COLOR);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Rgb(0xf7, 0x3e, 0x25)).bg(BOARD_COLOR);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .bg(BOARD_COLOR)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the key code of a directional key currently held down
pub(crate) const HELD_KEY_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::REVERSED);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
