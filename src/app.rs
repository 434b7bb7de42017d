//! Application state machine
//!
//! Wires the gesture source, the rotation input, the simulation and a
//! renderer together. The host drives it with one [`App::frame`] call per
//! display refresh.

use crate::control::autopilot;
use crate::control::{GestureSender, GestureSource, RotationInput, gesture_slot};
use crate::settings::{ControlMode, Settings};
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::snapshot::Snapshot;
use crate::tuning::Tuning;

/// Top-level application states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// No game yet (or stopped)
    Boot,
    Playing,
    GameOver { final_score: u32 },
}

/// Whatever presents a frame to the player
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot);
    /// Called once when a rally ends
    fn game_over(&mut self, final_score: u32);
}

/// The running application
pub struct App<S: GestureSource> {
    source: S,
    input: RotationInput,
    settings: Settings,
    tuning: Tuning,
    game: Option<GameState>,
    state: AppState,
    /// Timestamp of the previous frame (ms)
    last_time: Option<f64>,
    gestures_live: bool,
    autopilot: bool,
}

impl<S: GestureSource> App<S> {
    pub fn new(source: S, settings: Settings, tuning: Tuning) -> Self {
        let (_, receiver) = gesture_slot();
        Self {
            source,
            input: RotationInput::new(receiver),
            settings: settings.sanitized(),
            tuning,
            game: None,
            state: AppState::Boot,
            last_time: None,
            gestures_live: false,
            autopilot: false,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply new settings. Mid-game, a control mode change starts or stops
    /// the gesture source.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings.sanitized();
        if self.state != AppState::Boot {
            self.sync_gestures();
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Whether the gesture source started successfully
    pub fn gestures_live(&self) -> bool {
        self.gestures_live
    }

    /// Let the computer steer (demo mode)
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Sender feeding the same slot the gesture source writes into
    pub fn sender(&self) -> GestureSender {
        self.input.sender()
    }

    /// Boot -> Playing. Returns false if a game is already in progress.
    pub fn start_game(&mut self, seed: u64) -> bool {
        if self.state != AppState::Boot {
            log::warn!("start_game ignored in state {:?}", self.state);
            return false;
        }

        self.sync_gestures();

        let mut game = GameState::new(seed, self.tuning.clone());
        game.start();
        self.game = Some(game);
        self.state = AppState::Playing;
        self.last_time = None;
        true
    }

    /// Fresh rally with the same seed stream. No-op before the first game.
    pub fn restart(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        game.restart();
        game.start();
        self.state = AppState::Playing;
        self.last_time = None;
        self.sync_gestures();
    }

    /// Start or stop the gesture source to match the control mode
    fn sync_gestures(&mut self) {
        let wanted = self.settings.control_mode != ControlMode::Keyboard;
        if wanted && !self.gestures_live {
            match self.source.start(self.input.sender()) {
                Ok(()) => {
                    self.gestures_live = true;
                    log::info!("Gesture input started");
                }
                Err(e) => log::warn!("Gesture input unavailable ({}), using keyboard", e),
            }
        } else if !wanted && self.gestures_live {
            self.source.stop();
            self.gestures_live = false;
            log::info!("Gesture input stopped");
        }
        self.input.set_gestures_available(self.gestures_live);
    }

    /// Stop the gesture source and go back to Boot
    pub fn stop(&mut self) {
        if self.gestures_live {
            self.source.stop();
            self.gestures_live = false;
        }
        self.input.forget_gesture();
        self.input.keyboard.clear();
        self.game = None;
        self.state = AppState::Boot;
        self.last_time = None;
        log::info!("Stopped");
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.keyboard.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.keyboard.key_up(key)
    }

    /// Current view of the game, if one exists
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.game.as_ref().map(Snapshot::capture)
    }

    /// Advance one display frame and draw it
    ///
    /// `now_ms` is the host's monotonic frame timestamp. The first frame after
    /// a (re)start counts as exactly one reference tick.
    pub fn frame(&mut self, now_ms: f64, renderer: &mut impl Renderer) -> Option<GameEvent> {
        if self.state != AppState::Playing {
            return None;
        }
        let game = self.game.as_mut()?;

        self.input.poll();

        let elapsed = match self.last_time {
            Some(last) => (now_ms - last).max(0.0) as f32,
            None => game.tuning.reference_tick_ms,
        };
        self.last_time = Some(now_ms);

        let rotation_rate = if self.autopilot {
            autopilot::steer(game)
        } else {
            self.input.rate(&self.settings, game.tuning.max_rotation_rate)
        };

        let event = tick(game, &TickInput { rotation_rate }, elapsed);
        renderer.draw(&Snapshot::capture(game));

        if let Some(GameEvent::Miss { final_score }) = event {
            self.state = AppState::GameOver { final_score };
            renderer.game_over(final_score);
        }

        event
    }
}
