//! Per-frame simulation step
//!
//! The frame driver calls `tick` once per frame with the elapsed time and the
//! frame's input. Order inside a tick: input, phase check, bird, then (while
//! running) ground, pipes, scoring, collisions and a second phase check.

use super::state::{GameEvent, GamePhase, GameState};
use super::stream::GapSource;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap requested this frame (space/click/tap)
    pub flap: bool,
}

/// Advance the game state by `ticks` seconds
pub fn tick<G: GapSource>(state: &mut GameState<G>, input: &TickInput, ticks: f32) {
    let ticks = sanitize_ticks(ticks);
    state.time_ticks += 1;
    state.elapsed += ticks;

    // Input is ignored once the run is over
    if input.flap && state.phase == GamePhase::Running && state.bird.is_alive() {
        state.bird.flap();
        state.events.push(GameEvent::Flapped);
    }

    update_phase(state);

    // A dead bird keeps falling until it lands
    if state.phase == GamePhase::Running || state.bird.y() < state.tuning.death_floor_y {
        state.bird.advance(ticks);
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.ground.update(ticks);
    state.pipes.update(ticks);
    state.pipes.ensure_spawned(&mut state.gaps);

    // Scoring only looks at x; a pipe can score and still kill the bird
    if state.pipes.collect_scoring_events(state.bird.x()).is_some() {
        state.bird.increment_score();
        let score = state.bird.score();
        state.events.push(GameEvent::Scored { score });
        log::debug!("Scored: {}", score);
    }

    handle_collisions(state);
    // Same-frame switch so the renderer never sees a dead bird in a running game
    update_phase(state);
}

/// Switch to `GameOver` as soon as the bird is dead
fn update_phase<G: GapSource>(state: &mut GameState<G>) {
    if !state.bird.is_alive() && state.phase == GamePhase::Running {
        state.phase = GamePhase::GameOver;
        let score = state.bird.score();
        state.events.push(GameEvent::GameOver { score });
        log::info!(
            "Game over: score {}, distance {:.0}",
            score,
            state.bird.distance()
        );
    }
}

/// Kill the bird if it touches the ground or any pipe
fn handle_collisions<G: GapSource>(state: &mut GameState<G>) {
    let bird = state.bird.rect();
    if bird.overlaps(&state.ground.rect()) || state.pipes.collides_with(&bird) {
        state.kill_bird();
    }
}

/// Negative or non-finite frame times are treated as no time at all
fn sanitize_ticks(ticks: f32) -> f32 {
    if ticks.is_finite() && ticks >= 0.0 {
        ticks
    } else {
        log::warn!("Ignoring invalid tick delta {}", ticks);
        0.0
    }
}
