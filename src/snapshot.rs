//! Read-only view of the game for the render layer

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GamePhase, GameState, Segment, difficulty_level};

/// Everything the renderer/HUD needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub arena_radius: f32,
    pub paddle_thickness: f32,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    /// Segments of paddle 0 and paddle 1
    pub paddles: [Vec<Segment>; 2],
    pub score: u32,
    pub rotation_rate: f32,
    pub gaps: u32,
    pub bumps: u32,
    pub difficulty_level: u32,
    pub phase: GamePhase,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let config = state.difficulty();
        Self {
            arena_radius: state.tuning.arena_radius,
            paddle_thickness: state.tuning.paddle_thickness,
            ball_pos: state.ball.pos,
            ball_radius: state.ball.radius,
            paddles: state.paddle_segments(),
            score: state.score,
            rotation_rate: state.rotation_rate,
            gaps: config.gaps,
            bumps: config.bumps,
            difficulty_level: difficulty_level(state.score, &state.tuning),
            phase: state.phase,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_reflects_difficulty() {
        let mut state = GameState::new(5, Tuning::default());
        state.score = 9;
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.gaps, 3);
        assert_eq!(snap.bumps, 2);
        assert_eq!(snap.paddles[0].len(), 4);
        assert_eq!(snap.paddles[1].len(), 4);
        assert_eq!(snap.difficulty_level, 4);
        assert!(!snap.is_terminal());
    }

    #[test]
    fn test_snapshot_json() {
        let state = GameState::new(5, Tuning::default());
        let json = Snapshot::capture(&state).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 0);
        assert_eq!(value["phase"], "Idle");
        assert_eq!(value["paddles"].as_array().unwrap().len(), 2);
    }
}
