//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Delta-time scaled steps, driven by the caller
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod arc;
pub mod collision;
pub mod difficulty;
pub mod geometry;
pub mod state;
pub mod tick;

pub use arc::{Bump, Segment};
pub use collision::{BoundaryHit, reflect_velocity, resolve_boundary};
pub use difficulty::{DifficultyConfig, SpeedBounds, difficulty_level, speed_bounds};
pub use geometry::{PaddleShape, paddle_segments};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
