use serde::{Deserialize, Serialize};

use super::food::FoodKind;

/// Relative weights for the food kind draw. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FoodWeights {
    pub normal: f64,
    pub bonus: f64,
    pub speed: f64,
    pub slow: f64,
}

impl Default for FoodWeights {
    fn default() -> Self {
        Self {
            normal: 0.70,
            bonus: 0.20,
            speed: 0.05,
            slow: 0.05,
        }
    }
}

/// Points awarded per food kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FoodScores {
    pub normal: u32,
    pub bonus: u32,
    pub speed: u32,
    pub slow: u32,
}

impl Default for FoodScores {
    fn default() -> Self {
        Self {
            normal: 10,
            bonus: 30,
            speed: 15,
            slow: 15,
        }
    }
}

impl FoodScores {
    pub fn for_kind(&self, kind: FoodKind) -> u32 {
        match kind {
            FoodKind::Normal => self.normal,
            FoodKind::Bonus => self.bonus,
            FoodKind::Speed => self.speed,
            FoodKind::Slow => self.slow,
        }
    }
}

/// Configuration for a game session.
///
/// Immutable once handed to the session; tests construct alternates to pin
/// down timing and scoring behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: i32,
    /// Height of the game grid in cells
    pub grid_height: i32,
    /// Snake length at session start
    pub initial_snake_length: usize,
    /// Obstacles placed at session start
    pub initial_obstacles: usize,

    // Timing
    /// Game tick interval at level 1, in milliseconds
    pub base_tick_ms: u64,
    /// Tick interval reduction per level-up, in milliseconds
    pub tick_decrement_ms: u64,
    /// Fastest allowed tick interval
    pub min_tick_ms: u64,

    // Progression
    /// Score milestone step for level-ups
    pub level_score_step: u32,
    /// A new obstacle appears every this many levels
    pub obstacle_level_interval: u32,

    // Food and effects
    pub food_weights: FoodWeights,
    pub food_scores: FoodScores,
    /// Lifetime of non-Normal food before it despawns, wall-clock
    pub food_lifetime_ms: u64,
    /// Duration of Speed/Slow effects, in ticks
    pub effect_duration_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 20,
            initial_snake_length: 1,
            initial_obstacles: 3,
            base_tick_ms: 100,
            tick_decrement_ms: 10,
            min_tick_ms: 40,
            level_score_step: 50,
            obstacle_level_interval: 2,
            food_weights: FoodWeights::default(),
            food_scores: FoodScores::default(),
            food_lifetime_ms: 5000,
            effect_duration_ticks: 40,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 30);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_snake_length, 1);
        assert_eq!(config.level_score_step, 50);
    }

    #[test]
    fn test_custom_grid() {
        let config = GameConfig::new(40, 30);
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 30);
    }

    #[test]
    fn test_food_weights_sum_to_one() {
        let w = FoodWeights::default();
        let sum = w.normal + w.bonus + w.speed + w.slow;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_food_scores_by_kind() {
        let scores = FoodScores::default();
        assert_eq!(scores.for_kind(FoodKind::Normal), 10);
        assert_eq!(scores.for_kind(FoodKind::Bonus), 30);
        assert_eq!(scores.for_kind(FoodKind::Speed), 15);
        assert_eq!(scores.for_kind(FoodKind::Slow), 15);
    }
}
