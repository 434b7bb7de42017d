//! Player control preferences
//!
//! Persisted in LocalStorage on the web, defaults elsewhere.

use serde::{Deserialize, Serialize};

/// Which device drives the paddles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlMode {
    /// Hand gestures while a hand is tracked, keyboard otherwise
    #[default]
    Auto,
    Gesture,
    Keyboard,
}

impl ControlMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlMode::Auto => "Auto",
            ControlMode::Gesture => "Gesture",
            ControlMode::Keyboard => "Keyboard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(ControlMode::Auto),
            "gesture" | "hand" => Some(ControlMode::Gesture),
            "keyboard" | "keys" => Some(ControlMode::Keyboard),
            _ => None,
        }
    }
}

/// Control settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub control_mode: ControlMode,
    /// Keyboard rotation rate as a fraction of the maximum (0.0 - 1.0)
    pub keyboard_rate: f32,
    /// Swap clockwise/counter-clockwise
    pub invert_rotation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            control_mode: ControlMode::Auto,
            keyboard_rate: 1.0,
            invert_rotation: false,
        }
    }
}

impl Settings {
    /// Clamp fields into their valid ranges
    pub fn sanitized(mut self) -> Self {
        if !self.keyboard_rate.is_finite() {
            self.keyboard_rate = 1.0;
        }
        self.keyboard_rate = self.keyboard_rate.clamp(0.0, 1.0);
        self
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "polar_pong_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str::<Settings>(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings.sanitized();
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_mode_parse() {
        assert_eq!(ControlMode::from_str("HAND"), Some(ControlMode::Gesture));
        assert_eq!(ControlMode::from_str("keys"), Some(ControlMode::Keyboard));
        assert_eq!(ControlMode::from_str("auto"), Some(ControlMode::Auto));
        assert_eq!(ControlMode::from_str("mouse"), None);
        assert_eq!(ControlMode::Keyboard.as_str(), "Keyboard");
    }

    #[test]
    fn test_settings_json_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "invert_rotation": true }"#).unwrap();
        assert!(settings.invert_rotation);
        assert_eq!(settings.control_mode, ControlMode::Auto);
        assert_eq!(settings.keyboard_rate, 1.0);
    }

    #[test]
    fn test_sanitized() {
        let settings = Settings {
            keyboard_rate: 3.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.keyboard_rate, 1.0);
    }
}
