//! Score-driven difficulty
//!
//! Everything here is a pure function of the score. Nothing is cached, so the
//! paddle geometry can never fall out of step with the score.

use crate::tuning::Tuning;

/// Paddle subdivision for the current score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyConfig {
    /// Total angular span of a paddle (radians)
    pub arc_length: f32,
    pub gaps: u32,
    pub bumps: u32,
}

impl DifficultyConfig {
    /// Derive the configuration from the score
    pub fn from_score(score: u32, tuning: &Tuning) -> Self {
        Self {
            arc_length: tuning.paddle_arc_length,
            gaps: (score / tuning.points_per_gap).min(tuning.max_gaps),
            bumps: (score / tuning.points_per_bump).min(tuning.max_bumps),
        }
    }
}

/// Difficulty level shown in the HUD (1-based)
pub fn difficulty_level(score: u32, tuning: &Tuning) -> u32 {
    (score / tuning.points_per_gap).max(score / tuning.points_per_bump) + 1
}

/// Allowed ball speed range after a hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedBounds {
    pub base: f32,
    pub max: f32,
}

impl SpeedBounds {
    /// Rescale a speed into the range (unchanged if already inside)
    #[inline]
    pub fn clamp(&self, speed: f32) -> f32 {
        speed.clamp(self.base, self.max)
    }

    pub fn contains(&self, speed: f32) -> bool {
        speed >= self.base && speed <= self.max
    }
}

/// Speed range for a score: base grows with score, max sits a little above it
pub fn speed_bounds(score: u32, tuning: &Tuning) -> SpeedBounds {
    let base = (tuning.base_speed + score as f32 * tuning.speed_per_point).min(tuning.speed_cap);
    let max = (base + tuning.speed_headroom).min(tuning.speed_cap);
    SpeedBounds { base, max }
}
