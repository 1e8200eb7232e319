use crate::grid::{self, CELL_SIZE};
use crate::surface::Surface;
use crate::Cell;

use crossterm::style::Color;
use crossterm::Result;
use rand::Rng;

const FOOD_COLOR: Color = Color::Red;

pub struct Food {
    cell: Cell,
}

impl Food {
    pub fn new(cell: Cell) -> Self {
        Food { cell }
    }

    pub fn position(&self) -> Cell {
        self.cell
    }

    /// Moves the food to a random cell. The new cell may land on the
    /// snake's body; placement is not filtered.
    pub fn respawn(&mut self, rng: &mut impl Rng) {
        self.cell = grid::random_cell(rng);
    }

    pub fn render(&self, surface: &mut impl Surface) -> Result<()> {
        surface.fill_rect(self.cell, CELL_SIZE, CELL_SIZE, FOOD_COLOR)
    }
}
