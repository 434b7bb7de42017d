//! Per-frame simulation step
//!
//! The update loop runs once per display refresh, so the step is scaled by
//! how much time actually elapsed relative to the reference tick.

use glam::Vec2;
use rand::Rng;

use super::collision::{
    BoundaryHit, at_boundary, bump_deflection_direction, radial_normal, reflect_velocity,
    resolve_boundary,
};
use super::difficulty::speed_bounds;
use super::state::{GameEvent, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Signed paddle rotation rate (radians per reference tick).
    /// Positive decreases the paddle angles, which is counter-clockwise on a
    /// y-down screen.
    pub rotation_rate: f32,
}

/// Symmetric random offset with the given total width
fn jitter(rng: &mut impl Rng, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    rng.random_range(-width / 2.0..width / 2.0)
}

/// Advance the game state by `elapsed_ms` of wall-clock time
///
/// Returns the boundary event that happened this tick, if any. Does nothing
/// unless the state is running.
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f32) -> Option<GameEvent> {
    if !state.is_running() {
        return None;
    }

    let tuning = &state.tuning;
    let multiplier = (elapsed_ms / tuning.reference_tick_ms).clamp(0.0, tuning.max_frame_multiplier);
    let rate = input
        .rotation_rate
        .clamp(-tuning.max_rotation_rate, tuning.max_rotation_rate);

    state.rotation_rate = rate;

    // Ganged paddles always turn together
    if rate != 0.0 {
        for paddle in &mut state.paddles {
            paddle.rotate(-rate * multiplier);
        }
    }

    state.ball.pos += state.ball.vel * multiplier;

    if !at_boundary(state.ball.pos, state.ball.radius, state.tuning.arena_radius) {
        return None;
    }

    let segments = state.paddle_segments();
    let hit = resolve_boundary(state.ball.pos, &segments, state.tuning.contact_radius());

    let event = match hit {
        BoundaryHit::Miss { angle } => {
            log::debug!("Miss at {:.3} rad", angle);
            return Some(state.end_game());
        }
        BoundaryHit::Clean { paddle, angle } => {
            reflect_clean(state);
            state.score += 1;
            log::debug!("Paddle {} hit at {:.3} rad, score {}", paddle, angle, state.score);
            GameEvent::PaddleHit {
                paddle,
                score: state.score,
            }
        }
        BoundaryHit::Bump {
            paddle, bump_angle, ..
        } => {
            reflect_bump(state, bump_angle);
            state.score += 1;
            log::debug!("Bump hit on paddle {} at {:.3} rad, score {}", paddle, bump_angle, state.score);
            GameEvent::BumpHit {
                paddle,
                score: state.score,
            }
        }
    };

    apply_hit_speed(state);
    Some(event)
}

/// Mirror reflection about the radial normal, then pull the ball back inside
fn reflect_clean(state: &mut GameState) {
    let tuning = &state.tuning;
    let normal = radial_normal(state.ball.pos);

    let mut vel = reflect_velocity(state.ball.vel, normal);
    vel.x += jitter(&mut state.rng, tuning.reflection_jitter);
    vel.y += jitter(&mut state.rng, tuning.reflection_jitter);
    state.ball.vel = vel;

    let r = tuning.arena_radius - state.ball.radius - tuning.clean_hit_margin;
    state.ball.pos = normal * r;
}

/// Chaotic bounce: random deflection around the bump plus a speed boost
fn reflect_bump(state: &mut GameState, bump_angle: f32) {
    let tuning = &state.tuning;
    let normal = radial_normal(state.ball.pos);

    let deflection = jitter(&mut state.rng, tuning.bump_deflection);
    let scatter = jitter(&mut state.rng, tuning.bump_scatter);
    let speed = state.ball.speed() * tuning.bump_speed_boost;
    state.ball.vel = bump_deflection_direction(bump_angle, deflection, scatter) * speed;

    let r = tuning.arena_radius - state.ball.radius - tuning.bump_hit_margin;
    state.ball.pos = normal * r;
}

/// Post-hit jitter and speed rescale into the score's speed range
fn apply_hit_speed(state: &mut GameState) {
    let tuning = &state.tuning;
    let jitter_x = jitter(&mut state.rng, tuning.hit_jitter);
    let jitter_y = jitter(&mut state.rng, tuning.hit_jitter);
    state.ball.vel += Vec2::new(jitter_x, jitter_y);

    let bounds = speed_bounds(state.score, tuning);
    let speed = state.ball.speed();
    if !bounds.contains(speed) {
        state.ball.set_speed(bounds.clamp(speed));
    }
}
