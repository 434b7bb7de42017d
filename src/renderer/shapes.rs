//! Shape generation for 2D primitives
//!
//! Everything is emitted as plain triangle lists in arena-centered
//! coordinates; the host translates and scales to its canvas.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::BUMP_DRAW_RADIUS;
use crate::polar_to_cartesian;
use crate::sim::{GamePhase, Segment};
use crate::snapshot::Snapshot;

/// Arc tessellation density
const SEGMENTS_PER_RADIAN: f32 = 24.0;
const CIRCLE_SEGMENTS: u32 = 24;
const ARENA_LINE_WIDTH: f32 = 4.0;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        let p1 = center + polar_to_cartesian(radius, theta1);
        let p2 = center + polar_to_cartesian(radius, theta2);
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Push the two triangles of a band quad between two angles
fn push_band_quad(
    vertices: &mut Vec<Vertex>,
    inner_r: f32,
    outer_r: f32,
    theta1: f32,
    theta2: f32,
    color: [f32; 4],
) {
    let inner1 = polar_to_cartesian(inner_r, theta1);
    let outer1 = polar_to_cartesian(outer_r, theta1);
    let inner2 = polar_to_cartesian(inner_r, theta2);
    let outer2 = polar_to_cartesian(outer_r, theta2);

    vertices.push(Vertex::new(inner1.x, inner1.y, color));
    vertices.push(Vertex::new(outer1.x, outer1.y, color));
    vertices.push(Vertex::new(inner2.x, inner2.y, color));

    vertices.push(Vertex::new(inner2.x, inner2.y, color));
    vertices.push(Vertex::new(outer1.x, outer1.y, color));
    vertices.push(Vertex::new(outer2.x, outer2.y, color));
}

/// Generate vertices for a ring (hollow circle) around the origin
pub fn ring(inner_radius: f32, outer_radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        push_band_quad(&mut vertices, inner_radius, outer_radius, theta1, theta2, color);
    }

    vertices
}

/// Generate vertices for a paddle segment (thick arc band)
pub fn arc_band(segment: &Segment, radius: f32, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let span = segment.angular_span();
    let num_segments = ((span * SEGMENTS_PER_RADIAN) as u32).max(4);
    let inner_r = radius - thickness / 2.0;
    let outer_r = radius + thickness / 2.0;

    let mut vertices = Vec::with_capacity((num_segments * 6) as usize);

    for i in 0..num_segments {
        // Walk from start through the span so seam-crossing segments stay contiguous
        let theta1 = segment.start + (i as f32 / num_segments as f32) * span;
        let theta2 = segment.start + ((i + 1) as f32 / num_segments as f32) * span;
        push_band_quad(&mut vertices, inner_r, outer_r, theta1, theta2, color);
    }

    vertices
}

fn faded(color: [f32; 4], phase: GamePhase) -> [f32; 4] {
    if phase == GamePhase::GameOver {
        [color[0], color[1], color[2], color[3] * colors::GAME_OVER_TINT]
    } else {
        color
    }
}

/// Tessellate a full frame: arena wall, paddles, bumps, ball, center dot
pub fn scene(snapshot: &Snapshot) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let phase = snapshot.phase;
    let r = snapshot.arena_radius;
    // Paddles and bumps sit on the contact circle, just inside the wall
    let paddle_r = r - snapshot.paddle_thickness / 2.0;

    vertices.extend(ring(
        r,
        r + ARENA_LINE_WIDTH,
        faded(colors::ARENA_WALL, phase),
        96,
    ));

    for segments in &snapshot.paddles {
        for segment in segments {
            vertices.extend(arc_band(
                segment,
                paddle_r,
                snapshot.paddle_thickness + 2.0,
                faded(colors::PADDLE, phase),
            ));
            for bump in &segment.bumps {
                vertices.extend(circle(
                    bump.position(paddle_r),
                    BUMP_DRAW_RADIUS,
                    faded(colors::BUMP, phase),
                    CIRCLE_SEGMENTS,
                ));
            }
        }
    }

    let ball = snapshot.ball_pos;
    vertices.extend(circle(
        ball,
        snapshot.ball_radius + 2.0,
        faded(colors::BALL, phase),
        CIRCLE_SEGMENTS,
    ));
    vertices.extend(circle(
        ball,
        snapshot.ball_radius,
        faded(colors::BALL_CORE, phase),
        CIRCLE_SEGMENTS,
    ));

    vertices.extend(circle(Vec2::ZERO, 5.0, colors::CENTER_DOT, 12));

    vertices
}
