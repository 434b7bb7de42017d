//! Demo/idle mode - the computer steers the paddles
//!
//! Predicts where the ball will meet the wall and turns the ganged paddles so
//! the nearest segment's middle lands there.

use glam::Vec2;

use crate::normalize_angle;
use crate::sim::GameState;

/// Proportional gain from angle error (radians) to rotation rate
const STEER_GAIN: f32 = 0.25;

/// Angle at which a ball moving from `pos` with `vel` will touch a wall of
/// radius `reach` (already reduced by the ball radius)
pub fn predict_impact_angle(pos: Vec2, vel: Vec2, reach: f32) -> f32 {
    let a = vel.length_squared();
    if a <= f32::EPSILON {
        return pos.y.atan2(pos.x);
    }
    let b = 2.0 * pos.dot(vel);
    let c = pos.length_squared() - reach * reach;
    let disc = (b * b - 4.0 * a * c).max(0.0);
    let t = ((-b + disc.sqrt()) / (2.0 * a)).max(0.0);
    let impact = pos + vel * t;
    impact.y.atan2(impact.x)
}

/// Rotation rate that steers the closest segment toward the predicted impact
pub fn steer(state: &GameState) -> f32 {
    let reach = state.tuning.arena_radius - state.ball.radius;
    let target = predict_impact_angle(state.ball.pos, state.ball.vel, reach);

    let error = state
        .paddle_segments()
        .iter()
        .flatten()
        .map(|s| normalize_angle(target - s.mid_angle()))
        .min_by(|a, b| a.abs().total_cmp(&b.abs()))
        .unwrap_or(0.0);

    // Paddle angles decrease for positive rates
    let max = state.tuning.max_rotation_rate;
    (-error * STEER_GAIN).clamp(-max, max)
}
