mod direction;
mod grid;
mod overlay;
mod palette;
mod snake;
use self::direction::Direction;
use self::grid::Grid;
use self::overlay::{GameOverOverlay, PauseOverlay};
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event, KeyEventKind};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};
use std::time::Instant;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    config: Config,
    grid: Grid,
    snake: Snake,
    food: Position,
    score: u32,
    phase: Phase,

    /// The cell where the snake ran into itself, `Some` once the game is lost
    collision: Option<Position>,

    /// The directional key currently held down, highlighted in the hint line.
    /// Purely cosmetic; it tracks the key even when the turn it requests is
    /// rejected.
    held: Option<Direction>,

    /// When the game started
    started: Instant,

    /// When the game was won or lost
    ended: Option<Instant>,

    /// When the snake should next move, `None` whenever the timer is not
    /// running
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: Config) -> Self {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: Config, mut rng: R) -> Game<R> {
        let grid = Grid::new(config.game.cols, config.game.rows);
        let snake = Snake::new(grid.center(), Direction::East);
        let food = place_food(&mut rng, grid, &snake);
        Game {
            rng,
            config,
            grid,
            snake,
            food,
            score: 0,
            phase: Phase::Running,
            collision: None,
            held: None,
            started: Instant::now(),
            ended: None,
            next_tick: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.config.game.tick_period());
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        let direction = self.snake.commit_direction();
        let target = self.grid.step(self.snake.head(), direction);
        if self.snake.occupies(target) {
            self.lose(target);
            return;
        }
        if target == self.food {
            self.snake.grow_to(target);
            self.score += 1;
            // Check for a win before placing new food; a full board has no
            // free cell to put it in
            if self.snake.len() == self.grid.cell_count() {
                self.win();
            } else {
                self.food = place_food(&mut self.rng, self.grid, &self.snake);
            }
        } else {
            self.snake.slide_to(target);
        }
    }
}

/// Pick a uniformly random cell not occupied by `snake`.  The board must
/// have at least one free cell.
fn place_food<R: Rng>(rng: &mut R, grid: Grid, snake: &Snake) -> Position {
    assert!(
        snake.len() < grid.cell_count(),
        "food placement requires a free cell on the board"
    );
    loop {
        let pos = grid.random_cell(rng);
        if !snake.occupies(pos) {
            return pos;
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.phase {
            Phase::Running => {
                if event == Event::FocusLost {
                    self.pause();
                } else if is_directional_release(&event) {
                    self.held = None;
                } else {
                    match Command::from_key_event(event.as_key_press_event()?)? {
                        Command::Quit => return Some(Screen::Quit),
                        Command::Up => self.steer(Direction::North),
                        Command::Left => self.steer(Direction::West),
                        Command::Down => self.steer(Direction::South),
                        Command::Right => self.steer(Direction::East),
                        Command::Esc => self.pause(),
                        _ => (),
                    }
                }
            }
            Phase::Paused => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Esc => self.phase = Phase::Running,
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            },
            Phase::Won | Phase::Lost => {
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::Space | Command::R => {
                        return Some(Screen::Game(Game::new(self.config.clone())))
                    }
                    Command::Quit | Command::Q => return Some(Screen::Quit),
                    _ => (),
                }
            }
        }
        None
    }

    /// Record the keypress for the hint line and request the turn.  The
    /// highlight follows the key even when the turn is rejected.
    fn steer(&mut self, direction: Direction) {
        self.snake.steer(direction);
        self.held = Some(direction);
    }

    fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    fn pause(&mut self) {
        self.phase = Phase::Paused;
        self.held = None;
        self.next_tick = None;
    }

    fn lose(&mut self, pos: Position) {
        self.phase = Phase::Lost;
        self.collision = Some(pos);
        self.ended = Some(Instant::now());
        self.held = None;
        self.next_tick = None;
    }

    fn win(&mut self) {
        self.phase = Phase::Won;
        self.ended = Some(Instant::now());
        self.held = None;
        self.next_tick = None;
    }

    fn render_hint(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" Steer: ")];
        for direction in [
            Direction::West,
            Direction::North,
            Direction::South,
            Direction::East,
        ] {
            let style = if self.held == Some(direction) {
                consts::HELD_KEY_STYLE
            } else {
                consts::KEY_STYLE
            };
            spans.push(Span::styled(direction.arrow(), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw("  Pause ("));
        spans.push(Span::styled("Esc", consts::KEY_STYLE));
        spans.push(Span::raw(")"));
        Line::from(spans).render(area, buf);
    }
}

fn is_directional_release(event: &Event) -> bool {
    let Event::Key(kev) = event else {
        return false;
    };
    kev.kind == KeyEventKind::Release
        && Command::from_key_event(*kev).is_some_and(Command::is_directional)
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let mut block_size = self.grid.size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(board_area, block_size);
        DottedBorder.render(block_area, buf);

        let board = block_area.inner(Margin::new(1, 1));
        buf.set_style(board, consts::BOARD_STYLE);
        let mut canvas = Canvas { area: board, buf };
        canvas.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        let len = self.snake.len();
        for (index, pos) in self.snake.cells().enumerate() {
            canvas.draw_cell(pos, consts::SNAKE_SYMBOL, palette::segment_style(index, len));
        }
        // Mark the fatal cell last so that it overwrites the segment drawn
        // there
        if let Some(pos) = self.collision {
            canvas.draw_cell(pos, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
        }

        self.render_hint(hint_area, buf);

        match self.phase {
            Phase::Running => (),
            Phase::Paused => {
                let pause_area = center_rect(
                    display,
                    Size {
                        width: PauseOverlay::WIDTH,
                        height: PauseOverlay::HEIGHT,
                    },
                );
                PauseOverlay.render(pause_area, buf);
            }
            Phase::Won | Phase::Lost => {
                let overlay = GameOverOverlay {
                    won: self.phase == Phase::Won,
                    score: self.score,
                    elapsed: self.ended.map(|t| t.duration_since(self.started)),
                };
                let overlay_area = center_rect(display, overlay.size());
                overlay.render(overlay_area, buf);
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_char(&mut self, pos: Position, symbol: char) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
        }
    }

    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// A border of dots, signifying edges that wrap around to the opposite side
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let size = area.as_size();
        let max_x = size.width.saturating_sub(1);
        let max_y = size.height.saturating_sub(1);
        let mut canvas = Canvas { area, buf };
        canvas.draw_char(Position::ORIGIN, '·');
        canvas.draw_char(Position::new(max_x, 0), '·');
        canvas.draw_char(Position::new(max_x, max_y), '·');
        canvas.draw_char(Position::new(0, max_y), '·');
        for x in 1..max_x {
            canvas.draw_char(Position::new(x, 0), '⋯');
            canvas.draw_char(Position::new(x, max_y), '⋯');
        }
        for y in 1..max_y {
            canvas.draw_char(Position::new(0, y), '⋮');
            canvas.draw_char(Position::new(max_x, y), '⋮');
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Running,
    Paused,
    /// The snake has filled every cell of the board.
    Won,
    Lost,
}
