//! Data-driven game balance
//!
//! Every number the simulation uses lives in [`Tuning`]. Defaults come from
//! [`crate::consts`]; a JSON document may override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a tuning document is rejected
#[derive(Debug)]
pub enum TuningError {
    /// JSON could not be parsed
    Parse(serde_json::Error),
    /// The maximum number of gaps leaves no room for paddle segments
    DegenerateGeometry { gaps_span: f32, arc_length: f32 },
    /// A field is outside its allowed range
    OutOfRange { field: &'static str, value: f32 },
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning json: {}", e),
            TuningError::DegenerateGeometry {
                gaps_span,
                arc_length,
            } => write!(
                f,
                "gaps span {:.3} rad but paddle arc is only {:.3} rad",
                gaps_span, arc_length
            ),
            TuningError::OutOfRange { field, value } => {
                write!(f, "{} out of range: {}", field, value)
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_radius: f32,

    // === Paddles ===
    /// Total angular span of one paddle (radians), constant across difficulty
    pub paddle_arc_length: f32,
    /// Visual radial thickness; bumps sit at `arena_radius - thickness/2`
    pub paddle_thickness: f32,
    /// Angular width of one gap (radians)
    pub gap_size: f32,
    pub max_gaps: u32,
    pub max_bumps: u32,
    pub points_per_gap: u32,
    pub points_per_bump: u32,

    // === Bumps ===
    pub bump_hit_radius: f32,
    pub bump_deflection: f32,
    pub bump_scatter: f32,
    pub bump_speed_boost: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub base_speed: f32,
    pub speed_per_point: f32,
    pub speed_headroom: f32,
    pub speed_cap: f32,
    pub reflection_jitter: f32,
    pub hit_jitter: f32,
    pub clean_hit_margin: f32,
    pub bump_hit_margin: f32,

    // === Input / timing ===
    pub max_rotation_rate: f32,
    pub reference_tick_ms: f32,
    pub max_frame_multiplier: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_radius: ARENA_RADIUS,

            paddle_arc_length: PADDLE_ARC_LENGTH,
            paddle_thickness: PADDLE_THICKNESS,
            gap_size: GAP_SIZE,
            max_gaps: MAX_GAPS,
            max_bumps: MAX_BUMPS,
            points_per_gap: POINTS_PER_GAP,
            points_per_bump: POINTS_PER_BUMP,

            bump_hit_radius: BUMP_HIT_RADIUS,
            bump_deflection: BUMP_DEFLECTION,
            bump_scatter: BUMP_SCATTER,
            bump_speed_boost: BUMP_SPEED_BOOST,

            ball_radius: BALL_RADIUS,
            base_speed: BALL_BASE_SPEED,
            speed_per_point: BALL_SPEED_PER_POINT,
            speed_headroom: BALL_SPEED_HEADROOM,
            speed_cap: BALL_SPEED_CAP,
            reflection_jitter: REFLECTION_JITTER,
            hit_jitter: HIT_JITTER,
            clean_hit_margin: CLEAN_HIT_MARGIN,
            bump_hit_margin: BUMP_HIT_MARGIN,

            max_rotation_rate: MAX_ROTATION_RATE,
            reference_tick_ms: REFERENCE_TICK_MS,
            max_frame_multiplier: MAX_FRAME_MULTIPLIER,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Same tuning with all randomness switched off (reflection becomes exactly specular)
    pub fn without_jitter(mut self) -> Self {
        self.reflection_jitter = 0.0;
        self.hit_jitter = 0.0;
        self
    }

    /// Radius at which paddle contact points and bumps are projected
    #[inline]
    pub fn contact_radius(&self) -> f32 {
        self.arena_radius - self.paddle_thickness / 2.0
    }

    /// Check that no reachable difficulty produces degenerate geometry
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_radius", self.arena_radius),
            ("paddle_arc_length", self.paddle_arc_length),
            ("ball_radius", self.ball_radius),
            ("base_speed", self.base_speed),
            ("speed_cap", self.speed_cap),
            ("bump_speed_boost", self.bump_speed_boost),
            ("max_rotation_rate", self.max_rotation_rate),
            ("reference_tick_ms", self.reference_tick_ms),
            ("max_frame_multiplier", self.max_frame_multiplier),
        ];
        for (field, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(TuningError::OutOfRange { field, value });
            }
        }

        let non_negative = [
            ("gap_size", self.gap_size),
            ("paddle_thickness", self.paddle_thickness),
            ("bump_hit_radius", self.bump_hit_radius),
            ("bump_deflection", self.bump_deflection),
            ("bump_scatter", self.bump_scatter),
            ("speed_per_point", self.speed_per_point),
            ("speed_headroom", self.speed_headroom),
            ("reflection_jitter", self.reflection_jitter),
            ("hit_jitter", self.hit_jitter),
            ("clean_hit_margin", self.clean_hit_margin),
            ("bump_hit_margin", self.bump_hit_margin),
        ];
        for (field, value) in non_negative {
            if value < 0.0 || !value.is_finite() {
                return Err(TuningError::OutOfRange { field, value });
            }
        }

        if self.paddle_arc_length >= std::f32::consts::PI {
            // Two paddles must not overlap each other
            return Err(TuningError::OutOfRange {
                field: "paddle_arc_length",
                value: self.paddle_arc_length,
            });
        }

        if self.ball_radius + self.bump_hit_margin >= self.arena_radius {
            return Err(TuningError::OutOfRange {
                field: "ball_radius",
                value: self.ball_radius,
            });
        }

        if self.speed_cap < self.base_speed {
            return Err(TuningError::OutOfRange {
                field: "speed_cap",
                value: self.speed_cap,
            });
        }

        if self.points_per_gap == 0 || self.points_per_bump == 0 {
            return Err(TuningError::OutOfRange {
                field: "points_per_gap/points_per_bump",
                value: 0.0,
            });
        }

        let gaps_span = self.max_gaps as f32 * self.gap_size;
        if gaps_span >= self.paddle_arc_length {
            return Err(TuningError::DegenerateGeometry {
                gaps_span,
                arc_length: self.paddle_arc_length,
            });
        }

        Ok(())
    }
}
