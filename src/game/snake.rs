use std::collections::HashSet;

use super::grid::{Direction, Position};

/// Timed movement modifiers the snake can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Double step per tick
    Speed,
    /// Move only on alternating ticks
    Slow,
}

impl EffectKind {
    fn index(self) -> usize {
        match self {
            EffectKind::Speed => 0,
            EffectKind::Slow => 1,
        }
    }
}

/// Remaining durations for active effects, one fixed slot per kind.
///
/// Zero means inactive. Re-applying a kind overwrites its remaining time
/// rather than adding to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectSet {
    remaining: [u32; 2],
}

impl EffectSet {
    pub fn set(&mut self, kind: EffectKind, ticks: u32) {
        self.remaining[kind.index()] = ticks;
    }

    pub fn is_active(&self, kind: EffectKind) -> bool {
        self.remaining[kind.index()] > 0
    }

    pub fn remaining(&self, kind: EffectKind) -> u32 {
        self.remaining[kind.index()]
    }

    /// Count down every active effect by one tick.
    pub fn tick(&mut self) {
        for r in &mut self.remaining {
            *r = r.saturating_sub(1);
        }
    }
}

/// Why a move failed. Either ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    SelfCollision,
    Obstacle,
}

/// The snake: body segments head-first, plus movement state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    direction: Direction,
    pending_growth: bool,
    effects: EffectSet,
    // Parity for alternate-tick movement while Slow is active.
    slow_phase: bool,
}

impl Snake {
    /// Create a snake with the head at `head` and `length` total segments
    /// trailing opposite to `direction`, wrapping on the grid if needed.
    pub fn new(head: Position, direction: Direction, length: usize, width: i32, height: i32) -> Self {
        let (dx, dy) = direction.delta();
        let mut body = vec![head];
        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.translate_by(-dx, -dy, width, height));
        }

        Self {
            body,
            direction,
            pending_growth: false,
            effects: EffectSet::default(),
            slow_phase: false,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Turn the snake. Reversing straight into itself is ignored; the new
    /// direction applies from the next `advance`.
    pub fn change_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.direction = requested;
        }
    }

    /// Queue one segment of growth for the next successful move. A boolean
    /// flag, so repeated calls within a tick still grow by exactly one.
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    pub fn add_effect(&mut self, kind: EffectKind, duration_ticks: u32) {
        self.effects.set(kind, duration_ticks);
        if kind == EffectKind::Slow {
            self.slow_phase = false;
        }
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effects.is_active(kind)
    }

    pub fn effect_remaining(&self, kind: EffectKind) -> u32 {
        self.effects.remaining(kind)
    }

    /// Advance one tick: move the head, resolve self/obstacle collisions,
    /// consume pending growth, and count down effect timers.
    ///
    /// With Speed active the step is doubled and only the landing cell is
    /// collision-checked. With Slow active the body moves on alternating
    /// ticks; timers still run on the skipped tick.
    pub fn advance(
        &mut self,
        blocked: &HashSet<Position>,
        width: i32,
        height: i32,
    ) -> Result<(), Collision> {
        if self.effects.is_active(EffectKind::Slow) {
            self.slow_phase = !self.slow_phase;
            if !self.slow_phase {
                self.effects.tick();
                return Ok(());
            }
        }

        let (dx, dy) = self.direction.delta();
        let step = if self.effects.is_active(EffectKind::Speed) { 2 } else { 1 };
        let new_head = self.head().translate_by(dx * step, dy * step, width, height);

        // The tail cell vacates this tick unless the snake is growing, so it
        // does not count as a self-collision.
        let solid = if self.pending_growth {
            &self.body[..]
        } else {
            &self.body[..self.body.len() - 1]
        };
        if solid.contains(&new_head) {
            return Err(Collision::SelfCollision);
        }
        if blocked.contains(&new_head) {
            return Err(Collision::Obstacle);
        }

        self.body.insert(0, new_head);
        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop();
        }
        self.effects.tick();

        Ok(())
    }
}
