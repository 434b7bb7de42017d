//! Paddle segment geometry in polar space
//!
//! A paddle is a set of arcs hugging the arena wall. Each arc is described
//! only by its angular extent:
//! - start, end: normalized to [-π, π), so `start > end` means the arc
//!   crosses the ±π seam
//! - bumps: point hazards inside the arc

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{normalize_angle, polar_to_cartesian};

/// A point hazard on a paddle segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bump {
    /// Angular position (radians, normalized to [-π, π))
    pub angle: f32,
    /// Hit radius in pixels, measured at the contact radius
    pub hit_radius: f32,
}

impl Bump {
    pub fn new(angle: f32, hit_radius: f32) -> Self {
        Self {
            angle: normalize_angle(angle),
            hit_radius,
        }
    }

    /// Bump center projected at the given radius
    #[inline]
    pub fn position(&self, radius: f32) -> Vec2 {
        polar_to_cartesian(radius, self.angle)
    }

    /// Whether a contact point lies within the hit radius
    pub fn is_struck_by(&self, contact: Vec2, radius: f32) -> bool {
        contact.distance(self.position(radius)) <= self.hit_radius
    }
}

/// One contiguous strikeable arc of a paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start angle (radians, normalized to [-π, π))
    pub start: f32,
    /// End angle (radians, normalized to [-π, π))
    pub end: f32,
    pub bumps: Vec<Bump>,
}

impl Segment {
    pub fn new(start: f32, end: f32) -> Self {
        Self {
            start: normalize_angle(start),
            end: normalize_angle(end),
            bumps: Vec::new(),
        }
    }

    /// Angular span of the segment (handles wraparound)
    pub fn angular_span(&self) -> f32 {
        let mut span = self.end - self.start;
        if span < 0.0 {
            span += std::f32::consts::TAU;
        }
        span
    }

    /// Mid-angle of the segment (normalized)
    pub fn mid_angle(&self) -> f32 {
        normalize_angle(self.start + self.angular_span() / 2.0)
    }

    /// Check if an angle is within the segment, both ends inclusive
    pub fn contains_angle(&self, theta: f32) -> bool {
        let theta = normalize_angle(theta);
        let start = self.start;
        let end = self.end;

        if start <= end {
            theta >= start && theta <= end
        } else {
            // Wraparound case (e.g., start=170°, end=-170°)
            theta >= start || theta <= end
        }
    }

    /// First bump struck by a contact point, if any
    pub fn struck_bump(&self, contact: Vec2, radius: f32) -> Option<&Bump> {
        self.bumps.iter().find(|b| b.is_struck_by(contact, radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_contains_angle_no_wrap() {
        let seg = Segment::new(0.0, PI / 2.0);
        assert!(seg.contains_angle(0.1));
        assert!(seg.contains_angle(PI / 4.0));
        assert!(!seg.contains_angle(PI));
        assert!(!seg.contains_angle(-PI / 4.0));
    }

    #[test]
    fn test_contains_angle_wraparound() {
        // 170° to -170° crosses the seam
        let seg = Segment::new(170.0_f32.to_radians(), -170.0_f32.to_radians());
        assert!(seg.start > seg.end);
        assert!(seg.contains_angle(PI));
        assert!(seg.contains_angle(-PI + 0.01));
        assert!(!seg.contains_angle(0.0));
    }

    #[test]
    fn test_wraparound_endpoints_inclusive() {
        let seg = Segment::new(2.8, -2.9);
        assert!(seg.contains_angle(seg.start));
        assert!(seg.contains_angle(seg.end));
        // Strictly between end and start the short way
        assert!(!seg.contains_angle(0.0));
        assert!(!seg.contains_angle(-2.8));
        assert!(!seg.contains_angle(2.7));
    }

    #[test]
    fn test_angular_span() {
        let seg = Segment::new(0.0, PI / 2.0);
        assert!((seg.angular_span() - PI / 2.0).abs() < 0.001);

        let wrapped = Segment::new(PI * 0.9, -PI * 0.9);
        assert!((wrapped.angular_span() - 0.2 * PI).abs() < 0.001);
        assert!((wrapped.mid_angle().abs() - PI).abs() < 0.001);
    }

    #[test]
    fn test_bump_hit_radius() {
        let bump = Bump::new(0.0, 15.0);
        let r = 240.0;
        assert!(bump.is_struck_by(Vec2::new(r, 0.0), r));
        assert!(bump.is_struck_by(polar_to_cartesian(r, 14.0 / r), r));
        assert!(!bump.is_struck_by(polar_to_cartesian(r, 20.0 / r), r));
    }

    proptest! {
        #[test]
        fn prop_wrapped_segment_membership(
            start in -PI..(PI - 0.01),
            span in 0.01f32..1.5,
            frac in 0.0f32..1.0,
        ) {
            let seg = Segment::new(start, start + span);
            // A point strictly inside the arc is contained regardless of the seam
            let inside = start + span * (0.05 + 0.9 * frac);
            prop_assert!(seg.contains_angle(inside));
            // A point on the far side of the circle is not
            let outside = start + span / 2.0 + PI;
            prop_assert!(!seg.contains_angle(outside));
        }
    }
}
