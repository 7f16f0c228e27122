use super::direction::Direction;
use rand::Rng;
use ratatui::layout::{Position, Size};

/// A toroidal coordinate space, `cols` cells wide and `rows` cells tall.
/// Cells that leave one edge re-enter from the opposite edge; there are no
/// walls anywhere.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Grid {
    cols: u16,
    rows: u16,
}

impl Grid {
    pub(super) fn new(cols: u16, rows: u16) -> Grid {
        Grid { cols, rows }
    }

    /// Return the cell one step from `pos` in `direction`, wrapping around
    /// the board edges
    pub(super) fn step(self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: wrap(pos.x, dx, self.cols),
            y: wrap(pos.y, dy, self.rows),
        }
    }

    /// Return the cell at the center of the board
    pub(super) fn center(self) -> Position {
        Position::new(self.cols / 2, self.rows / 2)
    }

    /// Return the total number of cells on the board
    pub(super) fn cell_count(self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }

    /// Return a uniformly random cell on the board
    pub(super) fn random_cell<R: Rng>(self, rng: &mut R) -> Position {
        Position {
            x: rng.random_range(0..self.cols),
            y: rng.random_range(0..self.rows),
        }
    }

    pub(super) fn size(self) -> Size {
        Size::new(self.cols, self.rows)
    }
}

fn wrap(coord: u16, delta: i32, size: u16) -> u16 {
    let wrapped = (i32::from(coord) + delta).rem_euclid(i32::from(size));
    u16::try_from(wrapped).expect("wrapped coordinate should fit in u16")
}
