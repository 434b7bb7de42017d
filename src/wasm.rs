//! Browser bindings
//!
//! The page owns the canvas, the camera and the hand-tracking model. It calls
//! [`WasmGame::frame`] from `requestAnimationFrame`, forwards tracker results
//! through `push_thumb`/`push_gesture`, and uploads [`WasmGame::vertices`].

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::app::{App, AppState, Renderer};
use crate::control::{GestureSender, GestureSignal, GestureSource, InputError, ThumbPose, ThumbTilt};
use crate::renderer::{Vertex, as_floats, scene};
use crate::settings::{ControlMode, Settings};
use crate::snapshot::Snapshot;
use crate::tuning::Tuning;

/// Gesture source fed by the page's hand tracker
struct PageGestures {
    sender: Option<GestureSender>,
    thumb: ThumbTilt,
}

impl PageGestures {
    fn new(max_rate: f32) -> Self {
        Self {
            sender: None,
            thumb: ThumbTilt::new(max_rate),
        }
    }

    fn push(&self, signal: GestureSignal) {
        if let Some(sender) = &self.sender {
            sender.send(signal);
        }
    }
}

impl GestureSource for PageGestures {
    fn start(&mut self, sender: GestureSender) -> Result<(), InputError> {
        self.thumb.reset();
        self.sender = Some(sender);
        Ok(())
    }

    fn stop(&mut self) {
        self.sender = None;
        self.thumb.reset();
    }
}

/// Keeps the latest frame for JS to pick up
#[derive(Default)]
struct FrameBuffer {
    vertices: Vec<Vertex>,
    json: String,
    final_score: Option<u32>,
}

impl FrameBuffer {
    fn store(&mut self, snapshot: &Snapshot) {
        self.vertices = scene(snapshot);
        match snapshot.to_json() {
            Ok(json) => self.json = json,
            Err(e) => log::error!("Snapshot serialization failed: {}", e),
        }
    }
}

impl Renderer for FrameBuffer {
    fn draw(&mut self, snapshot: &Snapshot) {
        self.store(snapshot);
    }

    fn game_over(&mut self, final_score: u32) {
        self.final_score = Some(final_score);
    }
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Polar Pong starting...");
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WasmGame {
    app: App<PageGestures>,
    frame: FrameBuffer,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a game. `tuning_json` may be empty for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: &str) -> Result<WasmGame, JsError> {
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json)?
        };

        let source = PageGestures::new(tuning.max_rotation_rate);
        Ok(WasmGame {
            app: App::new(source, Settings::load(), tuning),
            frame: FrameBuffer::default(),
        })
    }

    /// Begin a rally; returns false if one is already running
    pub fn start(&mut self) -> bool {
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let started = self.app.start_game(seed);
        if started {
            self.frame.final_score = None;
            self.refresh();
        }
        started
    }

    pub fn restart(&mut self) {
        self.app.restart();
        self.frame.final_score = None;
        self.refresh();
    }

    /// Stop the game and release gesture input
    pub fn stop(&mut self) {
        self.app.stop();
        self.frame = FrameBuffer::default();
    }

    /// Advance one animation frame. Returns true while the rally continues.
    pub fn frame(&mut self, time_ms: f64) -> bool {
        self.app.frame(time_ms, &mut self.frame);
        self.app.state() == AppState::Playing
    }

    /// Precomputed tracker reading
    pub fn push_gesture(&mut self, hand_detected: bool, rotation_rate: f32, confidence: f32) {
        self.app.source_mut().push(GestureSignal {
            hand_detected,
            rotation_rate,
            confidence,
        });
    }

    /// Raw thumb landmarks in normalized image coordinates. Pass NaN for
    /// `mcp_x`/`mcp_y` when the thumb base is not tracked.
    pub fn push_thumb(
        &mut self,
        wrist_x: f32,
        wrist_y: f32,
        tip_x: f32,
        tip_y: f32,
        mcp_x: f32,
        mcp_y: f32,
    ) {
        let thumb_mcp = (mcp_x.is_finite() && mcp_y.is_finite()).then(|| Vec2::new(mcp_x, mcp_y));
        let pose = ThumbPose {
            wrist: Vec2::new(wrist_x, wrist_y),
            thumb_tip: Vec2::new(tip_x, tip_y),
            thumb_mcp,
        };
        let source = self.app.source_mut();
        let signal = source.thumb.update(Some(pose));
        source.push(signal);
    }

    /// Tracker ran but found no hand
    pub fn push_no_hand(&mut self) {
        let source = self.app.source_mut();
        let signal = source.thumb.update(None);
        source.push(signal);
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        self.app.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.app.key_up(key)
    }

    /// Set the control mode ("auto", "gesture", "keyboard") and persist it
    pub fn set_control_mode(&mut self, mode: &str) -> bool {
        let Some(control_mode) = ControlMode::from_str(mode) else {
            log::warn!("Unknown control mode: {}", mode);
            return false;
        };
        let settings = Settings {
            control_mode,
            ..self.app.settings().clone()
        };
        settings.save();
        self.app.set_settings(settings);
        true
    }

    pub fn set_invert_rotation(&mut self, invert: bool) {
        let settings = Settings {
            invert_rotation: invert,
            ..self.app.settings().clone()
        };
        settings.save();
        self.app.set_settings(settings);
    }

    pub fn gestures_live(&self) -> bool {
        self.app.gestures_live()
    }

    pub fn score(&self) -> u32 {
        self.app.game().map(|g| g.score).unwrap_or(0)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.app.state(), AppState::GameOver { .. })
    }

    /// Final score of the last rally, if it has ended
    pub fn final_score(&self) -> Option<u32> {
        self.frame.final_score
    }

    /// Latest snapshot as JSON (empty before the first game)
    pub fn snapshot_json(&self) -> String {
        self.frame.json.clone()
    }

    /// Latest frame as interleaved `x, y, r, g, b, a` triangles
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(as_floats(&self.frame.vertices))
    }

    pub fn floats_per_vertex() -> usize {
        Vertex::FLOATS
    }
}

impl WasmGame {
    fn refresh(&mut self) {
        if let Some(snapshot) = self.app.snapshot() {
            self.frame.store(&snapshot);
        }
    }
}
