use std::collections::HashSet;

use super::grid::Position;
use super::rng::GameRng;

/// A static blocking run of cells. Fixed at creation, never moves, and only
/// accumulates over a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    cells: Vec<Position>,
}

impl Obstacle {
    /// Generate a horizontal run of 3 to 5 cells at a random row and start
    /// column chosen so the run fits the grid.
    ///
    /// Cells already in `occupied` (the snake at generation time) are
    /// silently dropped, so the run may come out shorter than drawn or even
    /// empty. That matches the original game and is covered by tests.
    pub fn generate(
        rng: &mut GameRng,
        occupied: &HashSet<Position>,
        width: i32,
        height: i32,
    ) -> Self {
        let length = rng.gen_range(3..6).min(width);
        let start_x = rng.gen_range(0..(width - length + 1));
        let y = rng.gen_range(0..height);

        let cells = (0..length)
            .map(|i| Position::new(start_x + i, y))
            .filter(|cell| !occupied.contains(cell))
            .collect();

        Self { cells }
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
