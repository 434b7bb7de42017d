//! Polar Pong - A gesture-controlled circular arena game
//!
//! Core modules:
//! - `sim`: Simulation (paddle geometry, collisions, game state)
//! - `control`: Rotation input (gesture slot, keyboard fallback, autopilot)
//! - `app`: Application state machine wiring input, sim and renderer
//! - `renderer`: Tessellation of render snapshots
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod control;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod snapshot;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use app::{App, AppState, Renderer};
pub use settings::{ControlMode, Settings};
pub use snapshot::Snapshot;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Reference frame duration (ms). Velocities and rotation rates are per reference tick.
    pub const REFERENCE_TICK_MS: f32 = 1000.0 / 60.0;
    /// Maximum elapsed/reference ratio applied in one tick
    pub const MAX_FRAME_MULTIPLIER: f32 = 6.0;

    /// Arena dimensions
    pub const ARENA_RADIUS: f32 = 250.0;

    /// Paddle defaults
    pub const PADDLE_ARC_LENGTH: f32 = PI / 3.0; // 60 degrees
    pub const PADDLE_THICKNESS: f32 = 20.0;
    pub const GAP_SIZE: f32 = PI / 36.0; // 5 degrees per gap
    pub const MAX_GAPS: u32 = 3;
    pub const MAX_BUMPS: u32 = 4;
    /// Score points per extra gap / bump
    pub const POINTS_PER_GAP: u32 = 3;
    pub const POINTS_PER_BUMP: u32 = 4;

    /// Bump defaults
    pub const BUMP_HIT_RADIUS: f32 = 15.0;
    pub const BUMP_DRAW_RADIUS: f32 = 8.0;
    /// Total width of the random bump deflection (±0.4π)
    pub const BUMP_DEFLECTION: f32 = PI * 0.8;
    /// Total width of the extra bump scatter (±15°)
    pub const BUMP_SCATTER: f32 = PI / 6.0;
    pub const BUMP_SPEED_BOOST: f32 = 1.3;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_BASE_SPEED: f32 = 4.0;
    pub const BALL_SPEED_PER_POINT: f32 = 0.05;
    pub const BALL_SPEED_HEADROOM: f32 = 2.0;
    pub const BALL_SPEED_CAP: f32 = 8.0;

    /// Jitter (total width per velocity component)
    pub const REFLECTION_JITTER: f32 = 0.15;
    pub const HIT_JITTER: f32 = 0.2;

    /// Inward reposition after a hit (pixels inside the contact radius)
    pub const CLEAN_HIT_MARGIN: f32 = 5.0;
    pub const BUMP_HIT_MARGIN: f32 = 10.0;

    /// Rotation input bound (radians per reference tick)
    pub const MAX_ROTATION_RATE: f32 = 0.02;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
