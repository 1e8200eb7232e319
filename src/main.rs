mod food;
mod game;
mod grid;
mod snake;
mod surface;
mod term;

use std::process::exit;

use game::Game;
use rand::{rngs::StdRng, SeedableRng};
use term::TermSurface;

/// One grid-aligned square of the play field. Coordinates are logical
/// pixels (multiples of the cell size); signed so an off-grid head
/// position is representable for the collision check.
pub type Cell = (i32, i32);

fn main() {
    exit(run());
}

fn run() -> i32 {
    let surface = match TermSurface::new() {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Could not initialize terminal: {}", err);
            return 1;
        }
    };

    let mut game = Game::new(surface, StdRng::from_entropy());
    let result = game.run();

    // Dropping the game restores the terminal before anything is printed
    drop(game);

    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Terminal error: {}", err);
            1
        }
    }
}
