use crate::grid::{CELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::surface::Surface;
use crate::Cell;

use std::io::{stdout, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::{cursor, execute, queue, Result};

// Terminal characters are roughly twice as tall as they are wide, so one
// 20x20 cell is drawn as a 2x1 character block: 64x24 characters in total.
const COLS: u16 = (SCREEN_WIDTH / CELL_SIZE * 2) as u16;
const ROWS: u16 = (SCREEN_HEIGHT / CELL_SIZE) as u16;

const BLOCK_CHAR: char = '█';

/// Crossterm-backed implementation of the rendering surface: raw mode,
/// alternate screen, draws queued then flushed once per frame.
pub struct TermSurface {
    stdout: Stdout,
    epoch: Instant,
    restored: bool,
}

impl TermSurface {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        if width < COLS || height < ROWS {
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("terminal must be at least {}x{} characters, got {}x{}", COLS, ROWS, width, height),
            )
            .into());
        }

        let mut stdout = stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, SetTitle("Snake"), cursor::Hide)?;

        Ok(TermSurface { stdout, epoch: Instant::now(), restored: false })
    }

    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }

        self.restored = true;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)
    }
}

impl Surface for TermSurface {
    fn clear(&mut self, color: Color) -> Result<()> {
        queue!(self.stdout, SetBackgroundColor(color), terminal::Clear(ClearType::All), ResetColor)
    }

    fn fill_rect(&mut self, pos: Cell, width: i32, height: i32, color: Color) -> Result<()> {
        queue!(self.stdout, SetForegroundColor(color))?;

        for row in pos.1 / CELL_SIZE..(pos.1 + height) / CELL_SIZE {
            for col in pos.0 / CELL_SIZE..(pos.0 + width) / CELL_SIZE {
                // The crash frame can contain an off-field head cell
                if row < 0 || col < 0 || row >= ROWS as i32 || col * 2 >= COLS as i32 {
                    continue;
                }
                queue!(
                    self.stdout,
                    cursor::MoveTo((col * 2) as u16, row as u16),
                    Print(BLOCK_CHAR),
                    Print(BLOCK_CHAR)
                )?;
            }
        }

        queue!(self.stdout, ResetColor)
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }

    fn poll_events(&mut self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }
}

impl Drop for TermSurface {
    fn drop(&mut self) {
        // Nothing sensible to do with an error this late
        let _ = self.restore();
    }
}
