use crate::grid::{self, CELL_SIZE};
use crate::surface::Surface;
use crate::Cell;

use crossterm::event::KeyCode;
use crossterm::style::Color;
use crossterm::Result;

use Heading::*;

const SNAKE_COLOR: Color = Color::Green;

/// The direction the head will move on the next tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    fn opposite(self) -> Heading {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    fn from_key(code: KeyCode) -> Option<Heading> {
        match code {
            KeyCode::Char('w') | KeyCode::Up => Some(Up),
            KeyCode::Char('s') | KeyCode::Down => Some(Down),
            KeyCode::Char('a') | KeyCode::Left => Some(Left),
            KeyCode::Char('d') | KeyCode::Right => Some(Right),
            _ => None,
        }
    }
}

pub struct Snake {
    body: Vec<Cell>,
    heading: Heading,
}

impl Snake {
    /// A single-cell snake at `start`, heading right.
    pub fn new(start: Cell) -> Self {
        Snake { body: vec![start], heading: Right }
    }

    #[cfg(test)]
    pub fn from_parts(body: Vec<Cell>, heading: Heading) -> Self {
        Snake { body, heading }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    #[cfg(test)]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Steers the snake. Turning straight back onto the neck is rejected,
    /// anything that isn't a direction key is ignored. Takes effect on the
    /// next `move_step`.
    pub fn handle_input(&mut self, code: KeyCode) {
        if let Some(heading) = Heading::from_key(code) {
            if heading != self.heading.opposite() {
                self.heading = heading;
            }
        }
    }

    /// Advances the body one cell: new head in front, tail removed.
    pub fn move_step(&mut self) {
        let (dx, dy) = self.heading.delta();
        let head = self.head();
        let new_head = (head.0 + dx * CELL_SIZE, head.1 + dy * CELL_SIZE);

        self.body.insert(0, new_head);
        self.body.pop();
    }

    /// Duplicates the tail cell. The duplicate sits still until the next
    /// `move_step` pops it, which is what makes the snake one cell longer.
    pub fn grow(&mut self) {
        let tail = *self.body.last().unwrap();
        self.body.push(tail);
    }

    /// True once the head has left the play field or run into the body.
    pub fn check_collision(&self) -> bool {
        !grid::in_bounds(self.head()) || self.body[1..].contains(&self.head())
    }

    pub fn render(&self, surface: &mut impl Surface) -> Result<()> {
        for &cell in self.body() {
            surface.fill_rect(cell, CELL_SIZE, CELL_SIZE, SNAKE_COLOR)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_step_translates_without_changing_length() {
        let mut snake = Snake::new((320, 240));

        snake.move_step();

        assert_eq!(snake.body(), &[(340, 240)]);
    }

    #[test]
    fn move_step_drags_the_body_behind_the_head() {
        let mut snake = Snake::from_parts(vec![(100, 100), (80, 100), (60, 100)], Right);

        snake.move_step();

        assert_eq!(snake.body(), &[(120, 100), (100, 100), (80, 100)]);
    }

    #[test]
    fn grow_duplicates_the_tail() {
        let mut snake = Snake::from_parts(vec![(120, 100), (100, 100)], Right);

        snake.grow();
        assert_eq!(snake.body(), &[(120, 100), (100, 100), (100, 100)]);

        // The next step consumes the duplicate, leaving the snake one longer
        snake.move_step();
        assert_eq!(snake.body(), &[(140, 100), (120, 100), (100, 100)]);
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::from_parts(vec![(100, 100), (80, 100)], Right);

        snake.handle_input(KeyCode::Left);
        assert_eq!(snake.heading(), Right);

        snake.handle_input(KeyCode::Up);
        assert_eq!(snake.heading(), Up);

        snake.handle_input(KeyCode::Down);
        assert_eq!(snake.heading(), Up);
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let mut snake = Snake::new((100, 100));

        snake.handle_input(KeyCode::Char('x'));
        snake.handle_input(KeyCode::Enter);

        assert_eq!(snake.heading(), Right);
    }

    #[test]
    fn collision_with_each_wall() {
        for head in [(-20, 100), (640, 100), (100, -20), (100, 480)].iter() {
            let snake = Snake::from_parts(vec![*head], Right);
            assert!(snake.check_collision(), "head {:?} should collide", head);
        }

        let snake = Snake::from_parts(vec![(0, 0)], Right);
        assert!(!snake.check_collision());
    }

    #[test]
    fn collision_with_own_body() {
        // Head has just turned back into the second segment
        let body = vec![(100, 100), (120, 100), (120, 120), (100, 120), (100, 100)];
        let snake = Snake::from_parts(body, Up);
        assert!(snake.check_collision());

        let snake = Snake::from_parts(vec![(100, 100), (80, 100)], Right);
        assert!(!snake.check_collision());
    }

    #[test]
    fn head_left_of_wall_crashes_after_one_step() {
        let mut snake = Snake::from_parts(vec![(0, 100)], Left);

        snake.move_step();

        assert_eq!(snake.head(), (-20, 100));
        assert!(snake.check_collision());
    }
}
