use crate::Cell;
use rand::Rng;

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const CELL_SIZE: i32 = 20;

pub const FPS: u64 = 10;
pub const FRAME_BUDGET_MS: u64 = 1000 / FPS;

/// Whether a cell lies within the play field.
pub fn in_bounds(cell: Cell) -> bool {
    cell.0 >= 0 && cell.0 < SCREEN_WIDTH && cell.1 >= 0 && cell.1 < SCREEN_HEIGHT
}

/// A uniformly random grid-aligned cell within the play field.
pub fn random_cell(rng: &mut impl Rng) -> Cell {
    let x = rng.gen_range(0..SCREEN_WIDTH / CELL_SIZE) * CELL_SIZE;
    let y = rng.gen_range(0..SCREEN_HEIGHT / CELL_SIZE) * CELL_SIZE;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn bounds_are_half_open() {
        assert!(in_bounds((0, 0)));
        assert!(in_bounds((SCREEN_WIDTH - CELL_SIZE, SCREEN_HEIGHT - CELL_SIZE)));
        assert!(!in_bounds((-CELL_SIZE, 100)));
        assert!(!in_bounds((100, -CELL_SIZE)));
        assert!(!in_bounds((SCREEN_WIDTH, 100)));
        assert!(!in_bounds((100, SCREEN_HEIGHT)));
    }

    #[test]
    fn random_cells_are_aligned_and_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let cell = random_cell(&mut rng);
            assert!(in_bounds(cell));
            assert_eq!(cell.0 % CELL_SIZE, 0);
            assert_eq!(cell.1 % CELL_SIZE, 0);
        }
    }
}
