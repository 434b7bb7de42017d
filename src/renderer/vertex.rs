//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Floats per vertex in the flattened buffer
    pub const FLOATS: usize = 6;

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// View a vertex list as interleaved `x, y, r, g, b, a` floats
pub fn as_floats(vertices: &[Vertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const ARENA_WALL: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const CENTER_DOT: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 0.0, 0.5, 1.0];
    pub const BUMP: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const BALL_CORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Faded variant used once the rally is over
    pub const GAME_OVER_TINT: f32 = 0.4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattened_layout() {
        let vertices = [
            Vertex::new(1.0, 2.0, [0.1, 0.2, 0.3, 0.4]),
            Vertex::new(5.0, 6.0, [0.5, 0.6, 0.7, 0.8]),
        ];
        let floats = as_floats(&vertices);
        assert_eq!(floats.len(), 2 * Vertex::FLOATS);
        assert_eq!(&floats[..6], &[1.0, 2.0, 0.1, 0.2, 0.3, 0.4]);
        assert_eq!(floats[6], 5.0);
    }
}
