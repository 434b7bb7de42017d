//! Paddle rotation input
//!
//! The simulation only understands one number: a signed rotation rate.
//! This module turns the available input devices into that number:
//! - `gesture`: latest-value slot fed by the hand tracker
//! - `thumb`: thumb-tilt pose → rate mapping
//! - `keyboard`: arrow-key fallback
//! - `autopilot`: demo mode

pub mod autopilot;
pub mod gesture;
pub mod keyboard;
pub mod thumb;

pub use gesture::{
    GestureReceiver, GestureSender, GestureSignal, GestureSource, InputError, NoGestures,
    gesture_slot,
};
pub use keyboard::KeyboardControl;
pub use thumb::{ThumbPose, ThumbTilt};

use crate::settings::{ControlMode, Settings};

/// Combines the gesture stream and the keyboard into the current rotation rate
#[derive(Debug)]
pub struct RotationInput {
    receiver: GestureReceiver,
    /// Most recent gesture sample; stays in force until a newer one arrives
    latest: GestureSignal,
    /// False once the gesture source failed to start or was stopped
    gestures_available: bool,
    pub keyboard: KeyboardControl,
}

impl RotationInput {
    pub fn new(receiver: GestureReceiver) -> Self {
        Self {
            receiver,
            latest: GestureSignal::lost(),
            gestures_available: true,
            keyboard: KeyboardControl::default(),
        }
    }

    /// Sender for the gesture source to write into
    pub fn sender(&self) -> GestureSender {
        self.receiver.sender()
    }

    /// Pull any fresh gesture sample. Call once per frame.
    pub fn poll(&mut self) {
        if let Some(signal) = self.receiver.take() {
            self.latest = signal;
        }
    }

    /// Drop the current gesture sample (source stopped)
    pub fn forget_gesture(&mut self) {
        self.latest = GestureSignal::lost();
        let _ = self.receiver.take();
    }

    /// Without a gesture source every mode is driven by the keyboard
    pub fn set_gestures_available(&mut self, available: bool) {
        self.gestures_available = available;
        if !available {
            self.forget_gesture();
        }
    }

    pub fn latest_gesture(&self) -> GestureSignal {
        self.latest
    }

    /// Rotation rate after applying the player's settings
    pub fn rate(&self, settings: &Settings, max_rate: f32) -> f32 {
        let gesture = self.latest.effective_rate(max_rate);
        let keys = self.keyboard.rate(max_rate * settings.keyboard_rate);

        let mode = if self.gestures_available {
            settings.control_mode
        } else {
            ControlMode::Keyboard
        };

        let rate = match mode {
            ControlMode::Gesture => gesture,
            ControlMode::Keyboard => keys,
            // Hand wins while it's tracked; keys take over otherwise
            ControlMode::Auto => {
                if self.latest.hand_detected {
                    gesture
                } else {
                    keys
                }
            }
        };

        if settings.invert_rotation { -rate } else { rate }
    }
}
