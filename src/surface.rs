use crate::Cell;

use crossterm::event::KeyEvent;
use crossterm::style::Color;
use crossterm::Result;

/// The drawing/input/timing capabilities the game loop depends on.
///
/// The loop never touches the terminal directly; it draws through this
/// trait, so tests can run it headlessly against a recording fake.
pub trait Surface {
    /// Clear the whole drawable area to a single color.
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Queue a filled rectangle. Coordinates are logical pixels.
    fn fill_rect(&mut self, pos: Cell, width: i32, height: i32, color: Color) -> Result<()>;

    /// Make everything queued since the last present visible.
    fn present(&mut self) -> Result<()>;

    /// Monotonic milliseconds since the surface was created.
    fn now_ms(&self) -> u64;

    /// Block for the given number of milliseconds.
    fn sleep_ms(&mut self, ms: u64);

    /// Drain every pending key event without blocking.
    fn poll_events(&mut self) -> Result<Vec<KeyEvent>>;
}
