//! snake-arcade - a terminal snake game with power-ups and high scores
//!
//! This library provides:
//! - Core game rules (game module): grid, snake, food, obstacles, session
//! - Persistent high scores (score module)
//! - Keyboard input decoding (input module)
//! - TUI rendering (render module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod score;
