use std::time::{Duration, Instant};

use anyhow::Result;
use rand::Rng;
use tracing::{debug, trace};

use crate::board::Board;
use crate::error::GameError;
use crate::input::{self, KeyAction};
use crate::session::{RunState, Session, Snapshot, StepOutcome};
use crate::term::TermManager;

pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the session and arbitrates key presses against ticks.
pub struct GameLoop<R: Rng> {
    board: Board,
    session: Session,
    rng: R,
}

impl<R: Rng> GameLoop<R> {
    pub fn new(mut rng: R) -> Result<Self, GameError> {
        let board = Board::new();
        let session = Session::fresh(&board, &mut rng)?;

        Ok(GameLoop { board, session, rng })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot(&self.board)
    }

    /// Applies a key immediately; the next tick sees the result. Returns
    /// whether anything visible changed.
    pub fn handle_key(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::TogglePause => {
                self.session.toggle_run_state();
                true
            }
            KeyAction::Quit => false,
            _ if !self.session.is_running() => {
                debug!(?action, "resuming");
                self.session.set_run_state(RunState::Running);
                true
            }
            KeyAction::Steer(direction) => {
                self.session.set_direction(direction);
                false
            }
            KeyAction::Other => false,
        }
    }

    pub fn tick(&mut self) -> Result<StepOutcome, GameError> {
        let step = self.session.step(&self.board, &mut self.rng)?;
        trace!(outcome = ?step.outcome, "tick");
        self.session = step.session;
        Ok(step.outcome)
    }
}

/// Fixed-interval deadline. Whoever holds it owns the schedule; dropping it
/// stops the ticks.
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    pub fn start(interval: Duration, now: Instant) -> Self {
        Ticker { interval, next: now + interval }
    }

    pub fn until_next(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// True at most once per interval. A late loop is rescheduled from `now`
    /// rather than catching up with a burst.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        true
    }
}

/// Drives the game on the terminal until Ctrl+C.
pub fn run<R: Rng>(game: &mut GameLoop<R>, term: &mut TermManager) -> Result<()> {
    let mut ticker = Ticker::start(TICK_INTERVAL, Instant::now());
    let mut notice: Option<String> = None;
    term.draw(&game.snapshot(), notice.as_deref())?;

    loop {
        let mut dirty = false;

        for key_ev in term.read_key_events(ticker.until_next(Instant::now()))? {
            match input::classify(&key_ev) {
                Some(KeyAction::Quit) => return Ok(()),
                Some(action) => {
                    if game.handle_key(action) {
                        dirty = true;
                        if game.session().is_running() {
                            notice = None;
                        }
                    }
                }
                None => {}
            }
        }

        if ticker.fire(Instant::now()) {
            match game.tick()? {
                StepOutcome::Idle => {}
                StepOutcome::Moved | StepOutcome::Ate => dirty = true,
                StepOutcome::GameOver { score } => {
                    notice = Some(format!("Game over! Score: {}", score));
                    dirty = true;
                }
                StepOutcome::BoardCleared { score } => {
                    notice = Some(format!("You won! Score: {}", score));
                    dirty = true;
                }
            }
        }

        if dirty {
            term.draw(&game.snapshot(), notice.as_deref())?;
        }
    }
}
