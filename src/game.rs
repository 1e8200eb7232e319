use crate::food::Food;
use crate::grid::{FRAME_BUDGET_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::snake::Snake;
use crate::surface::Surface;
use crate::Cell;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;
use crossterm::Result;
use rand::Rng;

const CLEAR_COLOR: Color = Color::Black;

const SNAKE_START: Cell = (SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2);
const FOOD_START: Cell = (100, 100);

/// All per-game state: the two entities, the quit flag and the injected
/// surface and randomness. One `tick` per displayed frame.
pub struct Game<S: Surface, R: Rng> {
    surface: S,
    rng: R,
    snake: Snake,
    food: Food,
    quit: bool,
}

impl<S: Surface, R: Rng> Game<S, R> {
    pub fn new(surface: S, rng: R) -> Self {
        Game {
            surface,
            rng,
            snake: Snake::new(SNAKE_START),
            food: Food::new(FOOD_START),
            quit: false,
        }
    }

    /// Runs ticks at a fixed rate until the player quits or the snake
    /// crashes. The quit flag is only checked between ticks, so the
    /// crash frame is still rendered and paced.
    pub fn run(&mut self) -> Result<()> {
        while !self.quit {
            let start = self.surface.now_ms();

            self.tick()?;

            let elapsed = self.surface.now_ms() - start;
            if elapsed < FRAME_BUDGET_MS {
                self.surface.sleep_ms(FRAME_BUDGET_MS - elapsed);
            }
        }

        Ok(())
    }

    fn tick(&mut self) -> Result<()> {
        for ev in self.surface.poll_events()? {
            if is_quit(&ev) {
                self.quit = true;
            } else {
                self.snake.handle_input(ev.code);
            }
        }

        self.snake.move_step();

        if self.snake.check_collision() {
            self.quit = true;
        }

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.food.respawn(&mut self.rng);
        }

        self.surface.clear(CLEAR_COLOR)?;
        self.snake.render(&mut self.surface)?;
        self.food.render(&mut self.surface)?;
        self.surface.present()
    }
}

fn is_quit(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
        || matches!(ev.code, KeyCode::Char('q') | KeyCode::Esc)
}
