//! Core game rules for the snake arcade
//!
//! Everything in here is free of I/O and rendering dependencies: the session
//! consumes decoded player intents and a caller-supplied clock, and exposes
//! read-only state for a renderer.

pub mod config;
pub mod food;
pub mod grid;
pub mod obstacle;
pub mod rng;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use config::{FoodScores, FoodWeights, GameConfig};
pub use food::{Food, FoodKind, NoFreeCell};
pub use grid::{Direction, Position};
pub use obstacle::Obstacle;
pub use rng::GameRng;
pub use session::{GameSession, Intent, SessionState, TickOutcome};
pub use snake::{Collision, EffectKind, EffectSet, Snake};
