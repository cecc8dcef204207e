use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};
use tracing::warn;

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::input::PAUSE_KEY;
use crate::session::{RunState, Snapshot, Tile};

// Each board cell is two columns wide so the grid looks square.
const CELL_WIDTH: u16 = 2;
const PLAYER_GLYPH: &str = "██";
const FOOD_GLYPH: &str = "()";
const EMPTY_GLYPH: &str = "  ";

const FRAME_WIDTH: u16 = BOARD_WIDTH as u16 * CELL_WIDTH + 2;
const FRAME_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;
const STATUS_LINES: u16 = 3;

/// Raw-mode alternate screen. Restored when dropped.
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn setup() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        ensure!(
            width >= FRAME_WIDTH && height >= FRAME_HEIGHT + STATUS_LINES,
            "terminal is {}x{}, need at least {}x{}",
            width,
            height,
            FRAME_WIDTH,
            FRAME_HEIGHT + STATUS_LINES
        );

        let mut term = TermManager { stdout: stdout() };
        execute!(term.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error setting raw mode")?;
        execute!(
            term.stdout,
            cursor::Hide,
            cursor::DisableBlinking,
            terminal::Clear(ClearType::All)
        )
        .context("Error preparing screen")?;
        term.draw_borders()?;

        Ok(term)
    }

    /// Waits up to `timeout` for input, then drains whatever else is queued.
    pub fn read_key_events(&self, timeout: Duration) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];
        let mut wait = timeout;

        while poll(wait).context("Error polling events")? {
            if let Event::Key(ev) = read().context("Error reading event")? {
                events.push(ev);
            }
            wait = Duration::ZERO;
        }

        Ok(events)
    }

    /// Redraws the whole board, the status line and an optional notice.
    pub fn draw(&mut self, snapshot: &Snapshot, notice: Option<&str>) -> Result<()> {
        for (y, row) in snapshot.tiles.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(1, y as u16 + 1))?;
            for tile in row {
                let glyph = match tile {
                    Tile::Player => PLAYER_GLYPH,
                    Tile::Food => FOOD_GLYPH,
                    Tile::Empty => EMPTY_GLYPH,
                };
                queue!(self.stdout, style::Print(glyph))?;
            }
        }

        let state = match snapshot.run_state {
            RunState::Running => "Running",
            RunState::Paused => "Paused ",
        };
        let status = format!("Score: {:<6} Game is {}", snapshot.score, state);
        let help = format!("Arrows to move, '{}' to pause, Ctrl+C to quit", PAUSE_KEY);

        queue!(
            self.stdout,
            cursor::MoveTo(0, FRAME_HEIGHT),
            terminal::Clear(ClearType::CurrentLine),
            style::Print(status),
            cursor::MoveTo(0, FRAME_HEIGHT + 1),
            terminal::Clear(ClearType::CurrentLine),
            style::Print(help),
            cursor::MoveTo(0, FRAME_HEIGHT + 2),
            terminal::Clear(ClearType::CurrentLine),
            style::Print(notice.unwrap_or(""))
        )?;

        self.flush()
    }

    fn draw_borders(&mut self) -> Result<()> {
        let end_x = FRAME_WIDTH - 1;
        let end_y = FRAME_HEIGHT - 1;

        for x in 0..FRAME_WIDTH {
            let ch = if x == 0 || x == end_x { '+' } else { '-' };
            self.print_at((x, 0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        self.flush()
    }

    fn print_at(&mut self, pos: (u16, u16), ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }

    fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("failed to restore terminal: {:#}", e);
        }
    }
}
