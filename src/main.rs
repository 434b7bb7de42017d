//! Polar Pong entry point
//!
//! The web build is a library loaded by the page (see `wasm`). Natively this
//! runs a headless demo: the autopilot plays a few rallies and the results
//! are logged.

#[cfg(not(target_arch = "wasm32"))]
use polar_pong::control::NoGestures;
#[cfg(not(target_arch = "wasm32"))]
use polar_pong::{App, AppState, Renderer, Settings, Snapshot, Tuning};

/// Frames per demo rally before giving up on a miss
#[cfg(not(target_arch = "wasm32"))]
const MAX_DEMO_FRAMES: u32 = 60 * 60 * 5;

/// Logs milestones instead of drawing
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
struct LogRenderer {
    last_score: u32,
    last_level: u32,
}

#[cfg(not(target_arch = "wasm32"))]
impl Renderer for LogRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        if snapshot.score != self.last_score {
            self.last_score = snapshot.score;
            log::debug!(
                "Score {} ({} gaps, {} bumps)",
                snapshot.score,
                snapshot.gaps,
                snapshot.bumps
            );
        }
        if snapshot.difficulty_level != self.last_level {
            self.last_level = snapshot.difficulty_level;
            log::info!("Difficulty level {}", snapshot.difficulty_level);
        }
    }

    fn game_over(&mut self, final_score: u32) {
        log::info!("Rally over: {} hits", final_score);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Polar Pong (native) starting...");
    log::info!("Native mode is a headless autopilot demo - load the wasm build in a page to play");

    let tuning = Tuning::default();
    if let Err(e) = tuning.validate() {
        log::error!("Invalid tuning: {}", e);
        return;
    }

    let mut app = App::new(NoGestures, Settings::load(), tuning);
    app.set_autopilot(true);

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);
    app.start_game(seed);

    let mut renderer = LogRenderer::default();
    let mut scores = Vec::new();
    for rally in 0..3 {
        let mut now = 0.0;
        for _ in 0..MAX_DEMO_FRAMES {
            app.frame(now, &mut renderer);
            if app.state() != AppState::Playing {
                break;
            }
            now += 1000.0 / 60.0;
        }

        let score = app.game().map(|g| g.score).unwrap_or(0);
        log::info!("Rally {}: {} hits", rally + 1, score);
        scores.push(score);
        app.restart();
        renderer = LogRenderer::default();
    }
    app.stop();

    let best = scores.iter().copied().max().unwrap_or(0);
    println!("Demo rallies (seed {}): {:?}, best {}", seed, scores, best);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm::init, this is just to satisfy the compiler
}
