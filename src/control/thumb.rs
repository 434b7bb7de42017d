//! Thumb-tilt speed control
//!
//! Maps a fist-with-thumb-out pose to a rotation rate. Thumb level (pointing
//! sideways) is the rest position; tilting it up gives a positive rate
//! (counter-clockwise on screen), tilting it down a negative one, faster the
//! further it tilts.
//!
//! Tilt is measured in image space (y down) as an angle where 0 is thumb up,
//! π/2 is level and π is thumb down.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use super::gesture::GestureSignal;

/// ±15° around level does nothing
pub const DEAD_ZONE: f32 = PI / 12.0;
/// Weight of the previous tilt when smoothing
pub const SMOOTHING: f32 = 0.7;
/// Weight of the wrist→tip direction when the thumb base is also tracked
const WRIST_WEIGHT: f32 = 0.7;

/// Landmarks needed for the tilt, in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbPose {
    pub wrist: Vec2,
    pub thumb_tip: Vec2,
    /// Thumb base joint, if tracked
    pub thumb_mcp: Option<Vec2>,
}

/// Tilt of a direction vector: 0 = up, π/2 = level, π = down (y down)
fn tilt_of(dir: Vec2) -> f32 {
    let mut tilt = dir.y.atan2(dir.x) + FRAC_PI_2;
    if tilt < 0.0 {
        tilt += 2.0 * PI;
    }
    tilt
}

/// Map a tilt to a rate in [-max_rate, max_rate]
pub fn tilt_to_rate(tilt: f32, max_rate: f32) -> f32 {
    let from_level = tilt - FRAC_PI_2;
    if from_level.abs() <= DEAD_ZONE {
        return 0.0;
    }
    let effective = from_level - from_level.signum() * DEAD_ZONE;
    let usable = FRAC_PI_2 - DEAD_ZONE;
    // Thumb up (tilt below level) is a positive rate
    (-effective / usable).clamp(-1.0, 1.0) * max_rate
}

/// Stateful thumb-tilt tracker with smoothing
#[derive(Debug, Clone)]
pub struct ThumbTilt {
    max_rate: f32,
    last_tilt: Option<f32>,
}

impl ThumbTilt {
    pub fn new(max_rate: f32) -> Self {
        Self {
            max_rate,
            last_tilt: None,
        }
    }

    /// Smoothed tilt from the last update, if a hand has been seen
    pub fn tilt(&self) -> Option<f32> {
        self.last_tilt
    }

    /// Turn one tracker frame into a gesture signal
    pub fn update(&mut self, pose: Option<ThumbPose>) -> GestureSignal {
        let Some(pose) = pose else {
            return GestureSignal::lost();
        };

        let wrist_dir = (pose.thumb_tip - pose.wrist).normalize_or_zero();
        if wrist_dir == Vec2::ZERO {
            return GestureSignal::lost();
        }

        let (dir, confidence) = match pose.thumb_mcp {
            Some(mcp) => {
                let base_dir = (pose.thumb_tip - mcp).normalize_or_zero();
                let blended = wrist_dir * WRIST_WEIGHT + base_dir * (1.0 - WRIST_WEIGHT);
                (blended.try_normalize().unwrap_or(wrist_dir), 0.95)
            }
            None => (wrist_dir, 0.9),
        };

        let raw = tilt_of(dir);
        let tilt = match self.last_tilt {
            Some(last) => raw * (1.0 - SMOOTHING) + last * SMOOTHING,
            None => raw,
        };
        self.last_tilt = Some(tilt);

        let rotation_rate = tilt_to_rate(tilt, self.max_rate);
        log::trace!("Thumb tilt {:.1}° -> rate {:.4}", tilt.to_degrees(), rotation_rate);

        GestureSignal {
            hand_detected: true,
            rotation_rate,
            confidence,
        }
    }

    /// Forget smoothing history (hand left the frame for good)
    pub fn reset(&mut self) {
        self.last_tilt = None;
    }
}
