/// A cell on the game grid.
///
/// The grid is toroidal: moving off one edge re-enters from the opposite
/// edge, so translation is modular on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a raw delta, wrapping into `[0, width) x [0, height)`.
    ///
    /// `rem_euclid` keeps negative intermediates in range, so stepping left
    /// from x = 0 lands on x = width - 1.
    pub fn translate_by(&self, dx: i32, dy: i32, width: i32, height: i32) -> Self {
        Self {
            x: (self.x + dx).rem_euclid(width),
            y: (self.y + dy).rem_euclid(height),
        }
    }

    /// Translate one step in a direction with wrap-around.
    pub fn translate(&self, direction: Direction, width: i32, height: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.translate_by(dx, dy, width, height)
    }
}

/// Direction the snake can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta (dx, dy) for this direction. Y grows downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
