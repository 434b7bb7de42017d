//! Paddle geometry generation
//!
//! Turns a paddle's center angle and the current [`DifficultyConfig`] into
//! the list of strikeable [`Segment`]s. Called on every boundary check and
//! every snapshot; it never caches.

use super::arc::{Bump, Segment};
use super::difficulty::DifficultyConfig;

/// Fixed gap and bump parameters that don't vary with score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleShape {
    /// Angular width of one gap (radians)
    pub gap_size: f32,
    /// Bump hit radius (pixels)
    pub bump_hit_radius: f32,
}

impl PaddleShape {
    pub fn from_tuning(tuning: &crate::tuning::Tuning) -> Self {
        Self {
            gap_size: tuning.gap_size,
            bump_hit_radius: tuning.bump_hit_radius,
        }
    }
}

/// Generate the segments of a paddle centered at `center`
pub fn paddle_segments(center: f32, config: &DifficultyConfig, shape: &PaddleShape) -> Vec<Segment> {
    let half_arc = config.arc_length / 2.0;
    let arc_start = center - half_arc;

    if config.gaps == 0 {
        let mut segment = Segment::new(arc_start, center + half_arc);
        let spacing = config.arc_length / (config.bumps + 1) as f32;
        segment.bumps = (0..config.bumps)
            .map(|i| Bump::new(arc_start + (i + 1) as f32 * spacing, shape.bump_hit_radius))
            .collect();
        return vec![segment];
    }

    let segment_count = config.gaps + 1;
    let available = config.arc_length - config.gaps as f32 * shape.gap_size;
    let segment_size = available / segment_count as f32;
    debug_assert!(segment_size > 0.0, "gaps leave no room for segments");

    // Unnormalized start of each segment, used for bump placement below
    let starts: Vec<f32> = (0..segment_count)
        .map(|i| arc_start + i as f32 * (segment_size + shape.gap_size))
        .collect();

    let mut segments: Vec<Segment> = starts
        .iter()
        .map(|&start| Segment::new(start, start + segment_size))
        .collect();

    // Round-robin bumps; each segment spaces its own bumps evenly
    let per_segment = config.bumps.div_ceil(segment_count);
    let spacing = segment_size / (per_segment + 1) as f32;
    for bump_index in 0..config.bumps {
        let seg_index = (bump_index % segment_count) as usize;
        let slot = segments[seg_index].bumps.len() + 1;
        let angle = starts[seg_index] + slot as f32 * spacing;
        segments[seg_index]
            .bumps
            .push(Bump::new(angle, shape.bump_hit_radius));
    }

    segments
}

/// First segment containing `angle`, if any
pub fn segment_at(segments: &[Segment], angle: f32) -> Option<&Segment> {
    segments.iter().find(|s| s.contains_angle(angle))
}
