use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use super::config::GameConfig;
use super::food::{Food, FoodKind};
use super::grid::{Direction, Position};
use super::obstacle::Obstacle;
use super::rng::GameRng;
use super::snake::{Collision, EffectKind, Snake};
use crate::score::HighScores;

/// Where the session is in its lifecycle. `update` only advances the game
/// while `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Player intention, already decoded from raw input by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Direction(Direction),
    PauseToggle,
    Confirm,
    Cancel,
}

/// What happened during one tick, for callers that react to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Set when the move failed and the session ended
    pub collision: Option<Collision>,
    /// Kind of food eaten this tick, if any
    pub ate: Option<FoodKind>,
    /// Whether a score milestone was crossed this tick
    pub leveled_up: bool,
}

/// One playthrough plus the surrounding menu/pause/game-over shell.
///
/// Owns the snake, obstacles, food, score and high-score list exclusively;
/// the renderer only sees read-only accessors.
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    snake: Snake,
    obstacles: Vec<Obstacle>,
    // Union of all obstacle cells, kept alongside `obstacles` for O(1)
    // collision lookups.
    blocked: HashSet<Position>,
    food: Food,
    score: u32,
    level: u32,
    tick_ms: u64,
    state: SessionState,
    high_scores: HighScores,
    scores_path: Option<PathBuf>,
}

impl GameSession {
    /// Create a session in the menu state with a board already laid out.
    /// High scores are loaded from `scores_path` when given; a missing or
    /// unreadable file is an empty list.
    pub fn new(config: GameConfig, rng: GameRng, scores_path: Option<PathBuf>) -> Result<Self> {
        let high_scores = scores_path
            .as_deref()
            .map(HighScores::load)
            .unwrap_or_default();

        let mut session = Self {
            snake: Snake::new(
                Position::new(config.grid_width / 2, config.grid_height / 2),
                Direction::Right,
                config.initial_snake_length,
                config.grid_width,
                config.grid_height,
            ),
            obstacles: Vec::new(),
            blocked: HashSet::new(),
            food: Food::new(FoodKind::Normal, Position::new(0, 0), Instant::now()),
            score: 0,
            level: 1,
            tick_ms: config.base_tick_ms,
            state: SessionState::Menu,
            high_scores,
            scores_path,
            config,
            rng,
        };
        session.reset_board(Instant::now())?;
        Ok(session)
    }

    /// Lay out a fresh board: snake at grid center, the configured number of
    /// obstacles, one food, score and level reset.
    fn reset_board(&mut self, now: Instant) -> Result<()> {
        let center = Position::new(self.config.grid_width / 2, self.config.grid_height / 2);
        self.snake = Snake::new(
            center,
            Direction::Right,
            self.config.initial_snake_length,
            self.config.grid_width,
            self.config.grid_height,
        );

        self.obstacles.clear();
        self.blocked.clear();
        let snake_cells: HashSet<Position> = self.snake.body.iter().copied().collect();
        for _ in 0..self.config.initial_obstacles {
            let obstacle = Obstacle::generate(
                &mut self.rng,
                &snake_cells,
                self.config.grid_width,
                self.config.grid_height,
            );
            self.blocked.extend(obstacle.cells().iter().copied());
            self.obstacles.push(obstacle);
        }

        self.food = self.spawn_food(now).context("failed to place initial food")?;
        self.score = 0;
        self.level = 1;
        self.tick_ms = self.config.base_tick_ms;
        Ok(())
    }

    /// Apply a player intent, driving the state machine.
    pub fn handle(&mut self, intent: Intent, now: Instant) -> Result<()> {
        match (self.state, intent) {
            (SessionState::Menu | SessionState::GameOver, Intent::Confirm) => {
                self.reset_board(now)?;
                self.state = SessionState::Playing;
            }
            (SessionState::GameOver, Intent::Cancel) => {
                self.state = SessionState::Menu;
            }
            (SessionState::Playing | SessionState::Paused, Intent::Cancel) => {
                // Abandons the run: no score persisted, board reset on the
                // next confirm.
                self.state = SessionState::Menu;
            }
            (SessionState::Playing, Intent::PauseToggle) => {
                self.state = SessionState::Paused;
            }
            (SessionState::Paused, Intent::PauseToggle) => {
                self.state = SessionState::Playing;
            }
            (SessionState::Playing, Intent::Direction(dir)) => {
                self.snake.change_direction(dir);
            }
            _ => {}
        }
        Ok(())
    }

    /// Advance the game by one tick. A no-op outside `Playing`.
    pub fn update(&mut self, now: Instant) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.state != SessionState::Playing {
            return outcome;
        }

        if let Err(collision) = self.snake.advance(
            &self.blocked,
            self.config.grid_width,
            self.config.grid_height,
        ) {
            self.state = SessionState::GameOver;
            self.persist_score();
            outcome.collision = Some(collision);
            return outcome;
        }

        if self.snake.head() == self.food.position {
            let kind = self.food.kind;
            self.score += self.config.food_scores.for_kind(kind);
            match kind {
                FoodKind::Speed => self
                    .snake
                    .add_effect(EffectKind::Speed, self.config.effect_duration_ticks),
                FoodKind::Slow => self
                    .snake
                    .add_effect(EffectKind::Slow, self.config.effect_duration_ticks),
                FoodKind::Normal | FoodKind::Bonus => {}
            }
            self.snake.grow();
            self.replace_food(now);
            outcome.ate = Some(kind);
            outcome.leveled_up = self.check_level_up();
        } else if self
            .food
            .is_expired(now, Duration::from_millis(self.config.food_lifetime_ms))
        {
            self.replace_food(now);
        }

        outcome
    }

    /// Exact-multiple milestone check. A large food value can jump the score
    /// past a multiple of the step without triggering; that aliasing is kept
    /// from the original game.
    fn check_level_up(&mut self) -> bool {
        if self.score == 0 || self.score % self.config.level_score_step != 0 {
            return false;
        }

        self.level += 1;
        self.tick_ms = self
            .tick_ms
            .saturating_sub(self.config.tick_decrement_ms)
            .max(self.config.min_tick_ms);

        if self.level % self.config.obstacle_level_interval == 0 {
            let mut occupied: HashSet<Position> = self.snake.body.iter().copied().collect();
            occupied.insert(self.food.position);
            let obstacle = Obstacle::generate(
                &mut self.rng,
                &occupied,
                self.config.grid_width,
                self.config.grid_height,
            );
            self.blocked.extend(obstacle.cells().iter().copied());
            self.obstacles.push(obstacle);
        }

        true
    }

    fn spawn_food(&mut self, now: Instant) -> Result<Food> {
        let mut occupied: HashSet<Position> = self.snake.body.iter().copied().collect();
        occupied.extend(self.blocked.iter().copied());
        let food = Food::spawn(
            &mut self.rng,
            &self.config.food_weights,
            &occupied,
            self.config.grid_width,
            self.config.grid_height,
            now,
        )?;
        Ok(food)
    }

    /// Replace the current food. If no free cell can be found the old food
    /// stays on the board; the player never sees the failure.
    fn replace_food(&mut self, now: Instant) {
        if let Ok(food) = self.spawn_food(now) {
            self.food = food;
        }
    }

    fn persist_score(&mut self) {
        self.high_scores.record(self.score);
        if let Some(path) = &self.scores_path {
            // Best effort: an unwritable file never interrupts the game.
            self.high_scores.save(path).ok();
        }
    }

    // Read-only surface for the renderer.

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacle_cells(&self) -> &HashSet<Position> {
        &self.blocked
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current game tick interval; shrinks as levels go up.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
