use super::direction::Direction;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake: an ordered run of board cells plus its direction of travel.
///
/// All positions are relative to the top-left corner of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head first, tail last
    pub(super) body: VecDeque<Position>,

    /// The direction of travel committed at the most recent tick
    pub(super) direction: Direction,

    /// The direction requested since the most recent tick, to be committed
    /// at the next one
    pub(super) pending: Direction,
}

impl Snake {
    /// Create a one-cell snake with its head at `head`, travelling in
    /// `direction`
    pub(super) fn new(head: Position, direction: Direction) -> Snake {
        Snake {
            body: VecDeque::from([head]),
            direction,
            pending: direction,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        *self.body.front().expect("snake body should never be empty")
    }

    /// Return the number of cells in the snake
    pub(super) fn len(&self) -> usize {
        self.body.len()
    }

    /// Iterate over the snake's cells from head to tail
    pub(super) fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Does any part of the snake occupy `pos`?
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Request a change of travel to `direction`, to take effect at the next
    /// tick.  Ignored if `direction` is the exact reverse of the committed
    /// direction, so the snake can never turn back on itself — not even via
    /// two quick presses within a single tick.
    pub(super) fn steer(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.pending = direction;
        }
    }

    /// Commit the pending direction at the start of a tick and return it
    pub(super) fn commit_direction(&mut self) -> Direction {
        self.direction = self.pending;
        self.direction
    }

    /// Move the snake's head to `pos`, growing by one cell; the tail stays
    /// put
    pub(super) fn grow_to(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    /// Move the snake's head to `pos`; the tail vacates its cell
    pub(super) fn slide_to(&mut self, pos: Position) {
        self.body.push_front(pos);
        let _ = self.body.pop_back();
    }
}
