//! Game state for one play-through and its pure transitions.
//!
//! A [`Session`] is never mutated by the tick: [`Session::step`] builds the
//! next session and the caller swaps it in.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::board::{Board, Cell};
use crate::error::GameError;
use crate::snake::{Direction, Snake};

pub const FOOD_SCORE: u32 = 100;
pub const INITIAL_DIRECTION: Direction = Direction::Left;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

impl RunState {
    pub fn toggled(self) -> RunState {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    snake: Snake,
    direction: Direction,
    food: Option<Cell>,
    score: u32,
    run_state: RunState,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Paused; nothing moved.
    Idle,
    Moved,
    Ate,
    /// The head hit the body. The returned session is a fresh one.
    GameOver { score: u32 },
    /// The snake filled every cell. The returned session is a fresh one.
    BoardCleared { score: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub session: Session,
    pub outcome: StepOutcome,
}

/// Per-cell classification handed to the renderer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Player,
    Food,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// `tiles[y][x]`
    pub tiles: Vec<Vec<Tile>>,
    pub score: u32,
    pub run_state: RunState,
}

impl Session {
    /// Single random head, no food yet, paused.
    pub fn new<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Self, GameError> {
        let head = board.random_head_position(rng)?;

        Ok(Session::with_snake(Snake::new(vec![head])?, INITIAL_DIRECTION))
    }

    /// Fresh session with food already placed.
    pub fn fresh<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Self, GameError> {
        let mut session = Session::new(board, rng)?;
        let food = place_food(board, &session.snake, rng)?;
        session.set_food(food)?;

        info!(head = ?session.snake.head(), food = ?session.food, "new session");
        Ok(session)
    }

    pub fn with_snake(snake: Snake, direction: Direction) -> Self {
        Session {
            snake,
            direction,
            food: None,
            score: 0,
            run_state: RunState::Paused,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Places food on `cell`, which must not be on the snake.
    pub fn set_food(&mut self, cell: Cell) -> Result<(), GameError> {
        if self.snake.contains(&cell) {
            return Err(GameError::OverlappingBody { x: cell.x(), y: cell.y() });
        }

        self.food = Some(cell);
        Ok(())
    }

    pub fn set_run_state(&mut self, run_state: RunState) {
        self.run_state = run_state;
    }

    pub fn toggle_run_state(&mut self) {
        self.run_state = self.run_state.toggled();
        debug!(run_state = ?self.run_state, "pause toggled");
    }

    /// `requested`, unless it would reverse onto the neck.
    pub fn apply_direction(&self, requested: Direction) -> Direction {
        if requested.is_reverse_of(self.direction) {
            debug!(current = ?self.direction, ?requested, "reversal ignored");
            self.direction
        } else {
            requested
        }
    }

    pub fn set_direction(&mut self, requested: Direction) {
        self.direction = self.apply_direction(requested);
    }

    /// One tick. Leaves `self` untouched.
    pub fn step<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Result<Step, GameError> {
        if !self.is_running() {
            return Ok(Step { session: self.clone(), outcome: StepOutcome::Idle });
        }

        let new_head = board.wrap(self.snake.head(), self.direction);

        if self.snake.contains(&new_head) {
            info!(score = self.score, length = self.snake.len(), "game over");
            return Ok(Step {
                session: Session::fresh(board, rng)?,
                outcome: StepOutcome::GameOver { score: self.score },
            });
        }

        if self.food == Some(new_head) {
            let snake = self.snake.grown(new_head);
            let score = self.score + FOOD_SCORE;

            let food = match place_food(board, &snake, rng) {
                Ok(food) => food,
                Err(GameError::BoardFull) => {
                    info!(score, "board cleared");
                    return Ok(Step {
                        session: Session::fresh(board, rng)?,
                        outcome: StepOutcome::BoardCleared { score },
                    });
                }
                Err(e) => return Err(e),
            };

            return Ok(Step {
                session: Session { snake, food: Some(food), score, ..self.clone() },
                outcome: StepOutcome::Ate,
            });
        }

        Ok(Step {
            session: Session { snake: self.snake.moved(new_head), ..self.clone() },
            outcome: StepOutcome::Moved,
        })
    }

    pub fn snapshot(&self, board: &Board) -> Snapshot {
        let tiles = board
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if self.snake.contains(cell) {
                            Tile::Player
                        } else if self.food == Some(*cell) {
                            Tile::Food
                        } else {
                            Tile::Empty
                        }
                    })
                    .collect()
            })
            .collect();

        Snapshot { tiles, score: self.score, run_state: self.run_state }
    }
}

/// Uniformly picks a board cell the snake does not cover.
pub fn place_food<R: Rng + ?Sized>(
    board: &Board,
    snake: &Snake,
    rng: &mut R,
) -> Result<Cell, GameError> {
    let choices: Vec<Cell> = board.cells().filter(|cell| !snake.contains(cell)).collect();

    choices.choose(rng).copied().ok_or(GameError::BoardFull)
}
