use rand::Rng;

use crate::error::GameError;
use crate::snake::Direction;

pub const BOARD_WIDTH: usize = 20;
pub const BOARD_HEIGHT: usize = 20;

/// A grid coordinate that is always inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    x: usize,
    y: usize,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Result<Self, GameError> {
        let in_bounds =
            (0..BOARD_WIDTH as i32).contains(&x) && (0..BOARD_HEIGHT as i32).contains(&y);

        if !in_bounds {
            return Err(GameError::OutOfBounds { x, y });
        }

        Ok(Cell { x: x as usize, y: y as usize })
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }
}

/// Fixed board geometry. Built once and shared by every session.
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    pub fn new() -> Self {
        Board { rows: initial_board() }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// The cell one step from `cell` along `direction`, reappearing on the
    /// opposite edge when it leaves the board.
    pub fn wrap(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        let x = wrap_axis(cell.x as i32 + dx, BOARD_WIDTH);
        let y = wrap_axis(cell.y as i32 + dy, BOARD_HEIGHT);

        Cell { x, y }
    }

    /// Uniform draw over `[0, W) x [0, H)`.
    pub fn random_head_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Cell, GameError> {
        let x = rng.gen_range(0..BOARD_WIDTH as i32);
        let y = rng.gen_range(0..BOARD_HEIGHT as i32);

        Cell::new(x, y)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Row-major grid of every board cell: `rows[y][x]`.
pub fn initial_board() -> Vec<Vec<Cell>> {
    (0..BOARD_HEIGHT)
        .map(|y| (0..BOARD_WIDTH).map(|x| Cell { x, y }).collect())
        .collect()
}

fn wrap_axis(value: i32, len: usize) -> usize {
    let max = len as i32 - 1;

    if value < 0 {
        max as usize
    } else if value > max {
        0
    } else {
        value as usize
    }
}
