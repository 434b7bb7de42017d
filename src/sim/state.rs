//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::arc::Segment;
use super::difficulty::DifficultyConfig;
use super::geometry::{PaddleShape, paddle_segments};
use crate::normalize_angle;
use crate::tuning::Tuning;

/// Current phase of a rally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Fresh state, waiting for `start()`
    Idle,
    /// Active gameplay
    Running,
    /// Ball missed both paddles; terminal until restart
    GameOver,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball bounced cleanly off a paddle segment
    PaddleHit { paddle: usize, score: u32 },
    /// Ball struck a bump and was deflected chaotically
    BumpHit { paddle: usize, score: u32 },
    /// Ball reached the wall outside every segment
    Miss { final_score: u32 },
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    /// Arena-centered position (pixels)
    pub pos: Vec2,
    /// Pixels per reference tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Serve position and velocity: left of center, drifting toward the right paddle
    pub fn serve(&mut self, rng: &mut Pcg32) {
        self.pos = Vec2::new(-50.0, rng.random_range(-50.0..50.0));
        self.vel = Vec2::new(2.0, rng.random_range(-0.75..0.75));
    }

    /// Rescale velocity to the given speed, keeping direction
    pub fn set_speed(&mut self, speed: f32) {
        let current = self.speed();
        debug_assert!(current > 0.0, "cannot rescale a stationary ball");
        if current > 0.0 {
            self.vel *= speed / current;
        }
    }
}

/// A rotating paddle, identified by its index in `GameState::paddles`
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Center angle (radians, normalized to [-π, π))
    pub theta: f32,
}

impl Paddle {
    pub fn new(theta: f32) -> Self {
        Self {
            theta: normalize_angle(theta),
        }
    }

    /// Rotate by `delta` radians
    pub fn rotate(&mut self, delta: f32) {
        self.theta = normalize_angle(self.theta + delta);
    }

    /// Current segments for the given difficulty (derived, never stored)
    pub fn segments(&self, config: &DifficultyConfig, shape: &PaddleShape) -> Vec<Segment> {
        paddle_segments(self.theta, config, shape)
    }
}

/// Initial paddle angles: diametrically opposite
pub const PADDLE_START_ANGLES: [f32; 2] = [0.0, std::f32::consts::PI];

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Paddle hits this rally
    pub score: u32,
    pub ball: Ball,
    pub paddles: [Paddle; 2],
    /// Rotation rate applied on the last tick (radians per reference tick)
    pub rotation_rate: f32,
}

impl GameState {
    /// Create a new idle game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ball: Ball::new(tuning.ball_radius),
            tuning,
            phase: GamePhase::Idle,
            score: 0,
            paddles: PADDLE_START_ANGLES.map(Paddle::new),
            rotation_rate: 0.0,
        };
        state.ball.serve(&mut state.rng);
        state
    }

    /// Idle -> Running. Returns false if the state was not idle.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        self.phase = GamePhase::Running;
        log::info!("Rally started (seed {})", self.seed);
        true
    }

    /// Reinitialize ball, paddles and score, back to Idle
    pub fn restart(&mut self) {
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.paddles = PADDLE_START_ANGLES.map(Paddle::new);
        self.rotation_rate = 0.0;
        self.ball = Ball::new(self.tuning.ball_radius);
        self.ball.serve(&mut self.rng);
        log::info!("Game restarted");
    }

    /// Terminal transition on a miss
    pub fn end_game(&mut self) -> GameEvent {
        self.phase = GamePhase::GameOver;
        log::info!("Game over - final score {}", self.score);
        GameEvent::Miss {
            final_score: self.score,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Difficulty for the current score
    pub fn difficulty(&self) -> DifficultyConfig {
        DifficultyConfig::from_score(self.score, &self.tuning)
    }

    pub fn paddle_shape(&self) -> PaddleShape {
        PaddleShape::from_tuning(&self.tuning)
    }

    /// Segments of every paddle at the current score
    pub fn paddle_segments(&self) -> [Vec<Segment>; 2] {
        let config = self.difficulty();
        let shape = self.paddle_shape();
        [
            self.paddles[0].segments(&config, &shape),
            self.paddles[1].segments(&config, &shape),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(7, Tuning::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.paddles[0].theta, 0.0);
        assert!((state.paddles[1].theta.abs() - PI).abs() < 1e-6);
        assert_eq!(state.ball.pos.x, -50.0);
        assert!(state.ball.pos.y.abs() <= 50.0);
        assert_eq!(state.ball.vel.x, 2.0);
        assert!(state.ball.vel.y.abs() <= 0.75);
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut state = GameState::new(7, Tuning::default());
        assert!(state.start());
        assert_eq!(state.phase, GamePhase::Running);
        assert!(!state.start());

        state.end_game();
        assert!(!state.start());
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_restart_resets() {
        let mut state = GameState::new(7, Tuning::default());
        state.start();
        state.score = 12;
        state.paddles[0].rotate(1.0);
        state.end_game();

        state.restart();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.paddles[0].theta, 0.0);
        assert_eq!(state.ball.pos.x, -50.0);
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(99, Tuning::default());
        let b = GameState::new(99, Tuning::default());
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_paddle_rotate_wraps() {
        let mut paddle = Paddle::new(PI - 0.1);
        paddle.rotate(0.2);
        assert!((paddle.theta - (-PI + 0.1)).abs() < 1e-5);
    }

    #[test]
    fn test_set_speed_keeps_direction() {
        let mut ball = Ball::new(8.0);
        ball.vel = Vec2::new(3.0, 4.0);
        ball.set_speed(10.0);
        assert!((ball.vel - Vec2::new(6.0, 8.0)).length() < 1e-5);
    }
}
