use std::collections::HashSet;

use crate::board::Cell;
use crate::error::GameError;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn reverse(&self) -> Direction {
        match self {
            Up => Down,
            Right => Left,
            Down => Up,
            Left => Right,
        }
    }

    pub fn is_reverse_of(&self, other: Direction) -> bool {
        self.reverse() == other
    }

    /// Unit offset `(dx, dy)`; y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Right => (1, 0),
            Down => (0, 1),
            Left => (-1, 0),
        }
    }
}

/// Body cells ordered tail-first, head-last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    pub fn new(body: Vec<Cell>) -> Result<Self, GameError> {
        if body.is_empty() {
            return Err(GameError::EmptySnake);
        }

        let mut seen = HashSet::with_capacity(body.len());
        for cell in &body {
            if !seen.insert(*cell) {
                return Err(GameError::OverlappingBody { x: cell.x(), y: cell.y() });
            }
        }

        Ok(Snake { body })
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// A snake always holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body.contains(cell)
    }

    /// Snake with `new_head` appended and nothing dropped.
    pub fn grown(&self, new_head: Cell) -> Snake {
        let mut body = Vec::with_capacity(self.body.len() + 1);
        body.extend_from_slice(&self.body);
        body.push(new_head);
        Snake { body }
    }

    /// Snake with the tail dropped and `new_head` appended.
    pub fn moved(&self, new_head: Cell) -> Snake {
        let mut body = Vec::with_capacity(self.body.len());
        body.extend_from_slice(&self.body[1..]);
        body.push(new_head);
        Snake { body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: i32, y: i32) -> Cell {
        Cell::new(x, y).unwrap()
    }

    #[test]
    fn test_reverse_directions() {
        assert!(Up.is_reverse_of(Down));
        assert!(Down.is_reverse_of(Up));
        assert!(Left.is_reverse_of(Right));
        assert!(Right.is_reverse_of(Left));

        assert!(!Up.is_reverse_of(Left));
        assert!(!Right.is_reverse_of(Right));
    }

    #[test]
    fn test_snake_validation() {
        assert_eq!(Snake::new(vec![]), Err(GameError::EmptySnake));
        assert_eq!(
            Snake::new(vec![cell(1, 1), cell(2, 1), cell(1, 1)]),
            Err(GameError::OverlappingBody { x: 1, y: 1 })
        );

        let snake = Snake::new(vec![cell(1, 1), cell(2, 1)]).unwrap();
        assert_eq!(snake.head(), cell(2, 1));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_moved_drops_tail() {
        let snake = Snake::new(vec![cell(3, 3), cell(4, 3), cell(5, 3)]).unwrap();
        let moved = snake.moved(cell(6, 3));

        assert_eq!(moved.body(), &[cell(4, 3), cell(5, 3), cell(6, 3)]);
        // Original untouched
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), cell(5, 3));
    }

    #[test]
    fn test_grown_keeps_tail() {
        let snake = Snake::new(vec![cell(5, 5)]).unwrap();
        let grown = snake.grown(cell(4, 5));

        assert_eq!(grown.body(), &[cell(5, 5), cell(4, 5)]);
        assert_eq!(grown.head(), cell(4, 5));
    }
}
