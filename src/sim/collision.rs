//! Boundary detection and paddle hit-testing in polar space
//!
//! The arena wall is where everything happens: once the ball touches it we
//! convert to an angle, look that angle up in both paddles' segment lists
//! (wrap-aware), and then check the contact point against the bumps of
//! whichever segment caught it.

use glam::Vec2;

use super::arc::Segment;
use super::geometry::segment_at;
use crate::{cartesian_to_polar, normalize_angle, polar_to_cartesian};

/// Outcome of the ball reaching the arena wall
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryHit {
    /// Caught by a segment away from any bump
    Clean { paddle: usize, angle: f32 },
    /// Caught by a segment within a bump's hit radius
    Bump {
        paddle: usize,
        angle: f32,
        bump_angle: f32,
    },
    /// No segment of any paddle covers the angle
    Miss { angle: f32 },
}

/// Whether the ball touches or crosses the arena wall
#[inline]
pub fn at_boundary(ball_pos: Vec2, ball_radius: f32, arena_radius: f32) -> bool {
    ball_pos.length() + ball_radius >= arena_radius
}

/// Angular position of the ball on the boundary
#[inline]
pub fn boundary_angle(ball_pos: Vec2) -> f32 {
    let (_, theta) = cartesian_to_polar(ball_pos);
    normalize_angle(theta)
}

/// Find the first paddle segment covering `angle` (paddles in index order)
pub fn find_segment<'a>(paddles: &'a [Vec<Segment>], angle: f32) -> Option<(usize, &'a Segment)> {
    paddles.iter().enumerate().find_map(|(index, segments)| {
        segment_at(segments, angle).map(|s| (index, s))
    })
}

/// Resolve a boundary contact against both paddles
///
/// `contact_radius` is where both the contact point and the bumps are
/// projected (arena radius minus half the paddle thickness).
pub fn resolve_boundary(ball_pos: Vec2, paddles: &[Vec<Segment>], contact_radius: f32) -> BoundaryHit {
    let angle = boundary_angle(ball_pos);

    let Some((paddle, segment)) = find_segment(paddles, angle) else {
        return BoundaryHit::Miss { angle };
    };

    let contact = polar_to_cartesian(contact_radius, angle);
    match segment.struck_bump(contact, contact_radius) {
        Some(bump) => BoundaryHit::Bump {
            paddle,
            angle,
            bump_angle: bump.angle,
        },
        None => BoundaryHit::Clean { paddle, angle },
    }
}

/// Outward radial unit normal at a position
#[inline]
pub fn radial_normal(pos: Vec2) -> Vec2 {
    debug_assert!(pos.length_squared() > 0.0, "radial normal at arena center");
    pos.normalize_or_zero()
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Direction of a bump deflection: back toward the arena through the bump,
/// swung by a random deflection and scatter
///
/// `deflection` and `scatter` are already-sampled angle offsets.
pub fn bump_deflection_direction(bump_angle: f32, deflection: f32, scatter: f32) -> Vec2 {
    let theta = bump_angle + deflection + std::f32::consts::PI + scatter;
    Vec2::new(theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::arc::Bump;
    use std::f32::consts::PI;

    fn paddles() -> Vec<Vec<Segment>> {
        vec![
            vec![Segment::new(-0.5, 0.5)],
            vec![Segment::new(PI - 0.5, -PI + 0.5)],
        ]
    }

    #[test]
    fn test_at_boundary() {
        assert!(!at_boundary(Vec2::new(200.0, 0.0), 8.0, 250.0));
        assert!(at_boundary(Vec2::new(242.0, 0.0), 8.0, 250.0));
        assert!(at_boundary(Vec2::new(0.0, -260.0), 8.0, 250.0));
    }

    #[test]
    fn test_resolve_clean_hit_each_paddle() {
        let hit = resolve_boundary(Vec2::new(245.0, 10.0), &paddles(), 240.0);
        assert!(matches!(hit, BoundaryHit::Clean { paddle: 0, .. }));

        let hit = resolve_boundary(Vec2::new(-245.0, -10.0), &paddles(), 240.0);
        assert!(matches!(hit, BoundaryHit::Clean { paddle: 1, .. }));
    }

    #[test]
    fn test_resolve_miss() {
        let hit = resolve_boundary(Vec2::new(0.0, 245.0), &paddles(), 240.0);
        match hit {
            BoundaryHit::Miss { angle } => assert!((angle - PI / 2.0).abs() < 1e-5),
            other => panic!("expected miss, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_bump_hit() {
        let mut paddles = paddles();
        paddles[0][0].bumps.push(Bump::new(0.2, 15.0));

        // Right on the bump
        let hit = resolve_boundary(polar_to_cartesian(245.0, 0.2), &paddles, 240.0);
        assert!(matches!(hit, BoundaryHit::Bump { paddle: 0, .. }));

        // Same segment, far from the bump
        let hit = resolve_boundary(polar_to_cartesian(245.0, -0.3), &paddles, 240.0);
        assert!(matches!(hit, BoundaryHit::Clean { paddle: 0, .. }));
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let velocity = Vec2::new(100.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect_velocity(velocity, normal);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_reflect_specular_on_radial_normal() {
        let v = Vec2::new(3.0, 1.5);
        let n = radial_normal(Vec2::new(180.0, 160.0));
        let r = reflect_velocity(v, n);
        assert!((r.dot(n) + v.dot(n)).abs() < 1e-5);
        assert!((r.length() - v.length()).abs() < 1e-5);
    }

    #[test]
    fn test_bump_deflection_points_inward() {
        // With no random offsets the ball heads straight back through the center
        let dir = bump_deflection_direction(0.0, 0.0, 0.0);
        assert!((dir - Vec2::new(-1.0, 0.0)).length() < 1e-5);

        // Worst case offsets still point into the arena
        let dir = bump_deflection_direction(0.0, 0.4 * PI, PI / 12.0);
        assert!(dir.dot(Vec2::X) < 0.0);
    }
}
