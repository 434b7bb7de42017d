//! Gesture signal delivery
//!
//! The hand tracker runs on its own schedule and only ever needs to hand
//! over its newest reading. [`gesture_slot`] creates a single-slot cell:
//! the sender overwrites it, the frame loop takes (reads and clears) it.
//! A sample that is overwritten before the next frame is simply lost.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// One processed camera frame from the hand tracker
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureSignal {
    pub hand_detected: bool,
    /// Signed rotation rate (radians per reference tick)
    pub rotation_rate: f32,
    /// Tracker confidence in [0, 1]
    pub confidence: f32,
}

impl GestureSignal {
    /// The "no hand" reading
    pub fn lost() -> Self {
        Self::default()
    }

    /// Rotation rate the game should apply, bounded to `±max_rate`
    pub fn effective_rate(&self, max_rate: f32) -> f32 {
        if !self.hand_detected || !self.rotation_rate.is_finite() {
            return 0.0;
        }
        self.rotation_rate.clamp(-max_rate, max_rate)
    }
}

/// Writing half of the gesture slot, held by the tracker callback
#[derive(Debug, Clone)]
pub struct GestureSender {
    slot: Rc<Cell<Option<GestureSignal>>>,
}

impl GestureSender {
    /// Replace whatever is waiting with the newest signal
    pub fn send(&self, signal: GestureSignal) {
        self.slot.set(Some(signal));
    }
}

/// Reading half of the gesture slot, held by the frame loop
#[derive(Debug)]
pub struct GestureReceiver {
    slot: Rc<Cell<Option<GestureSignal>>>,
}

impl GestureReceiver {
    /// Take the newest signal since the last call, if any
    pub fn take(&self) -> Option<GestureSignal> {
        self.slot.take()
    }

    /// Create another sender for the same slot
    pub fn sender(&self) -> GestureSender {
        GestureSender {
            slot: self.slot.clone(),
        }
    }
}

/// Create a connected sender/receiver pair
pub fn gesture_slot() -> (GestureSender, GestureReceiver) {
    let slot = Rc::new(Cell::new(None));
    (
        GestureSender { slot: slot.clone() },
        GestureReceiver { slot },
    )
}

/// Why gesture input is unavailable
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// No camera present or permission denied
    CameraUnavailable(String),
    /// The hand tracking model failed to load
    TrackerFailed(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::CameraUnavailable(msg) => write!(f, "camera unavailable: {}", msg),
            InputError::TrackerFailed(msg) => write!(f, "hand tracker failed: {}", msg),
        }
    }
}

impl std::error::Error for InputError {}

/// Something that produces gesture signals (camera + hand tracker)
pub trait GestureSource {
    /// Begin delivering signals into `sender`
    fn start(&mut self, sender: GestureSender) -> Result<(), InputError>;
    /// Stop delivering signals and release the camera
    fn stop(&mut self);
}

/// Source for builds without a camera. Never produces signals.
#[derive(Debug, Default)]
pub struct NoGestures;

impl GestureSource for NoGestures {
    fn start(&mut self, _sender: GestureSender) -> Result<(), InputError> {
        Err(InputError::CameraUnavailable("no camera in this build".into()))
    }

    fn stop(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detected(rate: f32) -> GestureSignal {
        GestureSignal {
            hand_detected: true,
            rotation_rate: rate,
            confidence: 0.9,
        }
    }

    #[test]
    fn test_latest_value_wins() {
        let (tx, rx) = gesture_slot();
        assert!(rx.take().is_none());

        tx.send(detected(0.01));
        tx.send(detected(-0.005));
        assert_eq!(rx.take(), Some(detected(-0.005)));
        // Taking clears the slot
        assert!(rx.take().is_none());
    }

    #[test]
    fn test_cloned_senders_share_slot() {
        let (tx, rx) = gesture_slot();
        let tx2 = tx.clone();
        let tx3 = rx.sender();
        tx.send(detected(0.01));
        tx2.send(detected(0.02));
        tx3.send(detected(0.015));
        assert_eq!(rx.take(), Some(detected(0.015)));
    }

    #[test]
    fn test_effective_rate() {
        assert_eq!(detected(0.01).effective_rate(0.02), 0.01);
        assert_eq!(detected(1.0).effective_rate(0.02), 0.02);
        assert_eq!(detected(-1.0).effective_rate(0.02), -0.02);
        assert_eq!(detected(f32::NAN).effective_rate(0.02), 0.0);

        let lost = GestureSignal {
            hand_detected: false,
            rotation_rate: 0.01,
            confidence: 0.0,
        };
        assert_eq!(lost.effective_rate(0.02), 0.0);
    }

    #[test]
    fn test_no_gestures_source_reports_unavailable() {
        let (tx, _rx) = gesture_slot();
        let mut source = NoGestures;
        assert!(matches!(source.start(tx), Err(InputError::CameraUnavailable(_))));
    }
}
