//! Keyboard fallback when no hand is tracked
//!
//! Left/A turns the paddles counter-clockwise on screen (positive rate),
//! Right/D clockwise.

/// Held rotation keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardControl {
    clockwise: bool,
    counter_clockwise: bool,
}

impl KeyboardControl {
    /// Handle key down event. Returns true if the key is a rotation key.
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            "ArrowRight" | "d" | "D" => self.clockwise = true,
            "ArrowLeft" | "a" | "A" => self.counter_clockwise = true,
            _ => return false,
        }
        true
    }

    /// Handle key up event. Returns true if the key is a rotation key.
    pub fn key_up(&mut self, key: &str) -> bool {
        match key {
            "ArrowRight" | "d" | "D" => self.clockwise = false,
            "ArrowLeft" | "a" | "A" => self.counter_clockwise = false,
            _ => return false,
        }
        true
    }

    /// Release everything (focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Direction in {-1, 0, 1}; both keys held cancel out
    pub fn direction(&self) -> i8 {
        match (self.counter_clockwise, self.clockwise) {
            (true, false) => 1,
            (false, true) => -1,
            _ => 0,
        }
    }

    /// Rotation rate for the held keys
    pub fn rate(&self, rate: f32) -> f32 {
        self.direction() as f32 * rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_map_to_direction() {
        let mut kb = KeyboardControl::default();
        assert_eq!(kb.direction(), 0);

        assert!(kb.key_down("ArrowRight"));
        assert_eq!(kb.direction(), -1);
        assert_eq!(kb.rate(0.02), -0.02);

        assert!(kb.key_down("a"));
        assert_eq!(kb.direction(), 0);

        assert!(kb.key_up("ArrowRight"));
        assert_eq!(kb.rate(0.02), 0.02);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut kb = KeyboardControl::default();
        assert!(!kb.key_down("Enter"));
        assert!(!kb.key_up("x"));
        assert_eq!(kb, KeyboardControl::default());
    }

    #[test]
    fn test_clear() {
        let mut kb = KeyboardControl::default();
        kb.key_down("D");
        kb.clear();
        assert_eq!(kb.direction(), 0);
    }
}
