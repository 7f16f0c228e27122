use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};
use std::time::Duration;

/// A pop-up displayed over the board while the game is paused
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct PauseOverlay;

impl PauseOverlay {
    /// The height that should be used for the `Rect` passed to
    /// `PauseOverlay::render()`
    pub(super) const HEIGHT: u16 = 3;

    /// The width that should be used for the `Rect` passed to
    /// `PauseOverlay::render()`
    pub(super) const WIDTH: u16 = 23;
}

impl Widget for PauseOverlay {
    /*
     * ┌──── GAME PAUSED ────┐
     * │ Press Esc to resume │
     * └─────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" GAME PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        Line::from_iter([
            Span::raw("Press "),
            Span::styled("Esc", consts::KEY_STYLE),
            Span::raw(" to resume"),
        ])
        .render(inner, buf);
    }
}

/// A pop-up displayed over the board once the game has ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOverOverlay {
    /// Did the snake fill the whole board?
    pub(super) won: bool,

    /// Number of apples eaten
    pub(super) score: u32,

    /// Time from game start to the final tick
    pub(super) elapsed: Option<Duration>,
}

impl GameOverOverlay {
    const WIDTH: u16 = 26;

    /// The size that should be used for the `Rect` passed to
    /// `GameOverOverlay::render()`.  A won game carries an extra line for
    /// the elapsed time.
    pub(super) fn size(&self) -> Size {
        let height = if self.won { 5 } else { 4 };
        Size::new(GameOverOverlay::WIDTH, height)
    }
}

impl Widget for &GameOverOverlay {
    /*
     * ┌────── GAME OVER ───────┐
     * │ Apples eaten: 3        │
     * │ Press Space to restart │
     * └────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.won { " YOU WIN! " } else { " GAME OVER " };
        let block = Block::bordered()
            .title(title)
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        let mut lines = vec![Line::from(format!("Apples eaten: {}", self.score))];
        if self.won {
            let secs = self.elapsed.map_or(0.0, |d| d.as_secs_f64());
            lines.push(Line::from(format!("Time: {secs:.1} seconds")));
        }
        lines.push(Line::from_iter([
            Span::raw("Press "),
            Span::styled("Space", consts::KEY_STYLE),
            Span::raw(" to restart"),
        ]));
        for (line, row) in lines.iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
