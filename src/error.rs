use thiserror::Error;

/// Conditions that correct game transitions never produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no empty cell left to place food on")]
    BoardFull,

    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("snake body must hold at least one cell")]
    EmptySnake,

    #[error("snake body occupies ({x}, {y}) more than once")]
    OverlappingBody { x: usize, y: usize },
}
