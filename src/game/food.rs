use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

use super::config::FoodWeights;
use super::grid::Position;
use super::rng::GameRng;

/// What landed on the board. Non-Normal kinds despawn after a wall-clock
/// lifetime if not eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Normal,
    Bonus,
    Speed,
    Slow,
}

impl FoodKind {
    /// Weighted draw over the four kinds. Deterministic under a seeded rng.
    pub fn choose(rng: &mut GameRng, weights: &FoodWeights) -> FoodKind {
        let roll = rng.gen_unit();
        let mut threshold = weights.normal;
        if roll < threshold {
            return FoodKind::Normal;
        }
        threshold += weights.bonus;
        if roll < threshold {
            return FoodKind::Bonus;
        }
        threshold += weights.speed;
        if roll < threshold {
            return FoodKind::Speed;
        }
        FoodKind::Slow
    }
}

/// No unoccupied cell could be found for a new food.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoFreeCell;

impl fmt::Display for NoFreeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no free cell available for food placement")
    }
}

impl std::error::Error for NoFreeCell {}

/// The single active collectible on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub kind: FoodKind,
    pub position: Position,
    spawned_at: Instant,
}

impl Food {
    pub fn new(kind: FoodKind, position: Position, spawned_at: Instant) -> Self {
        Self {
            kind,
            position,
            spawned_at,
        }
    }

    /// Spawn a food of freshly drawn kind at a random cell outside
    /// `occupied` (snake and obstacle cells).
    pub fn spawn(
        rng: &mut GameRng,
        weights: &FoodWeights,
        occupied: &HashSet<Position>,
        width: i32,
        height: i32,
        now: Instant,
    ) -> Result<Food, NoFreeCell> {
        let kind = FoodKind::choose(rng, weights);
        let position = Self::randomize_position(rng, occupied, width, height)?;
        Ok(Self {
            kind,
            position,
            spawned_at: now,
        })
    }

    /// Rejection-sample a free cell. Attempts are bounded so a near-full
    /// grid fails with `NoFreeCell` instead of spinning forever.
    fn randomize_position(
        rng: &mut GameRng,
        occupied: &HashSet<Position>,
        width: i32,
        height: i32,
    ) -> Result<Position, NoFreeCell> {
        let attempts = (width as u64 * height as u64).saturating_mul(8);
        for _ in 0..attempts {
            let pos = Position::new(rng.gen_range(0..width), rng.gen_range(0..height));
            if !occupied.contains(&pos) {
                return Ok(pos);
            }
        }
        Err(NoFreeCell)
    }

    /// Whether this food has outlived its lifetime. Normal food never
    /// expires; the clock is wall time, threaded in by the caller.
    pub fn is_expired(&self, now: Instant, lifetime: Duration) -> bool {
        self.kind != FoodKind::Normal && now.duration_since(self.spawned_at) > lifetime
    }

    /// Time since spawn, for the renderer's blink phase.
    pub fn age(&self, now: Instant) -> Duration {
        now.duration_since(self.spawned_at)
    }
}
