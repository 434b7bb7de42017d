//! End-to-end rally scenarios driven through the public simulation API

use glam::Vec2;
use polar_pong::consts::REFERENCE_TICK_MS;
use polar_pong::control::autopilot;
use polar_pong::sim::{
    DifficultyConfig, GameEvent, GamePhase, GameState, PaddleShape, TickInput, paddle_segments,
    reflect_velocity, speed_bounds, tick,
};
use polar_pong::{Snapshot, Tuning};

fn running(seed: u64, tuning: Tuning) -> GameState {
    let mut state = GameState::new(seed, tuning);
    assert!(state.start());
    state
}

fn step(state: &mut GameState) -> Option<GameEvent> {
    tick(state, &TickInput::default(), REFERENCE_TICK_MS)
}

#[test]
fn first_hit_scores_and_reflects() {
    let mut state = running(1, Tuning::default().without_jitter());
    state.ball.pos = Vec2::new(238.0, 0.0);
    state.ball.vel = Vec2::new(4.5, 0.5);
    let incoming = state.ball.vel;

    let event = step(&mut state);
    assert_eq!(event, Some(GameEvent::PaddleHit { paddle: 0, score: 1 }));
    assert_eq!(state.score, 1);
    assert_eq!(state.phase, GamePhase::Running);

    // Contact point was (242.5, 0.5)
    let normal = Vec2::new(242.5, 0.5).normalize();
    let expected = reflect_velocity(incoming, normal);
    assert!(state.ball.vel.distance(expected) < 1e-4);
    assert!((state.ball.vel.dot(normal) + incoming.dot(normal)).abs() < 1e-4);
    assert!((state.ball.vel.length() - incoming.length()).abs() < 1e-4);

    // Pulled back inside the arena
    let r = state.ball.pos.length();
    assert!((r - (250.0 - 8.0 - 5.0)).abs() < 1e-3);
}

#[test]
fn difficulty_shapes_paddles() {
    let tuning = Tuning::default();
    let shape = PaddleShape::from_tuning(&tuning);
    for (score, gaps, bumps) in [(0, 0, 0), (3, 1, 0), (4, 1, 1), (9, 3, 2), (16, 3, 4)] {
        let config = DifficultyConfig::from_score(score, &tuning);
        assert_eq!((config.gaps, config.bumps), (gaps, bumps), "score {}", score);

        let segments = paddle_segments(0.0, &config, &shape);
        assert_eq!(segments.len() as u32, gaps + 1);
        let bump_total: usize = segments.iter().map(|s| s.bumps.len()).sum();
        assert_eq!(bump_total as u32, bumps);

        let covered: f32 = segments.iter().map(|s| s.angular_span()).sum();
        let total = covered + gaps as f32 * tuning.gap_size;
        assert!((total - tuning.paddle_arc_length).abs() < 1e-4);
    }
}

#[test]
fn gap_miss_ends_rally() {
    let mut state = running(1, Tuning::default().without_jitter());
    state.score = 3; // one gap per paddle, centered on the paddle
    state.ball.pos = Vec2::new(238.0, 0.0);
    state.ball.vel = Vec2::new(4.5, 0.0);

    let event = step(&mut state);
    assert_eq!(event, Some(GameEvent::Miss { final_score: 3 }));
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.score, 3);
    assert!(Snapshot::capture(&state).is_terminal());

    // Frozen
    let pos = state.ball.pos;
    assert_eq!(step(&mut state), None);
    assert_eq!(state.ball.pos, pos);
}

#[test]
fn rally_score_is_monotonic_and_speed_bounded() {
    let mut state = running(2024, Tuning::default());
    let mut last_score = 0;
    let mut hits = 0;

    for _ in 0..5000 {
        let input = TickInput {
            rotation_rate: autopilot::steer(&state),
        };
        match tick(&mut state, &input, REFERENCE_TICK_MS) {
            Some(GameEvent::PaddleHit { score, .. }) | Some(GameEvent::BumpHit { score, .. }) => {
                assert_eq!(score, last_score + 1);
                last_score = score;
                hits += 1;

                let bounds = speed_bounds(score, &state.tuning);
                let speed = state.ball.speed();
                assert!(speed >= bounds.base - 1e-3 && speed <= bounds.max + 1e-3);
            }
            Some(GameEvent::Miss { final_score }) => {
                assert_eq!(final_score, last_score);
                break;
            }
            None => assert_eq!(state.score, last_score),
        }
    }
    assert!(hits >= 1);
}

#[test]
fn restart_resets_everything() {
    let mut state = running(9, Tuning::default());
    state.score = 12;
    state.paddles[0].theta = 0.3;
    state.ball.pos = Vec2::new(0.0, 245.0);
    state.ball.vel = Vec2::new(0.0, 3.0);
    step(&mut state);
    assert_eq!(state.phase, GamePhase::GameOver);

    state.restart();
    assert_eq!(state.phase, GamePhase::Idle);
    assert_eq!(state.score, 0);
    assert_eq!(state.paddles[0].theta, 0.0);
    // π normalizes to -π
    assert!((state.paddles[1].theta.abs() - std::f32::consts::PI).abs() < 1e-6);
    assert_eq!(state.ball.pos.x, -50.0);

    // Idle does nothing until started again
    let pos = state.ball.pos;
    assert_eq!(step(&mut state), None);
    assert_eq!(state.ball.pos, pos);
    assert!(state.start());
}
