//! Flappy Sim headless driver
//!
//! Runs the simulation at a fixed timestep with a simple autopilot standing in
//! for the player, and logs what happens. Useful for eyeballing tuning changes.
//!
//! Usage: `flappy-sim [tuning.json] [seed]`

use flappy_sim::Tuning;
use flappy_sim::consts::*;
use flappy_sim::sim::{GameEvent, GameState, TickInput, tick};

/// Hard stop for runs the autopilot never loses (two minutes of game time)
const MAX_FRAMES: u64 = 120 * 60;

fn main() {
    env_logger::init();
    log::info!("Flappy Sim (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed: {}", e);
            std::process::exit(1);
        }
        None => 12345,
    };

    let mut state = GameState::with_tuning(seed, tuning);
    let mut input = TickInput::default();

    while state.time_ticks() < MAX_FRAMES && !state.bird_landed() {
        input.flap = autopilot(&state);
        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            match event {
                GameEvent::Scored { score } => log::info!("Score: {}", score),
                GameEvent::Died => log::info!("Bird died at y = {:.1}", state.bird().y()),
                GameEvent::GameOver { .. } | GameEvent::Flapped => {}
            }
        }
    }

    println!(
        "score {}  distance {:.0}  time {:.1}s  frames {}",
        state.score(),
        state.bird().distance(),
        state.elapsed(),
        state.time_ticks()
    );
}

/// Flap whenever the bird sinks below the middle of the next opening
fn autopilot(state: &GameState) -> bool {
    if state.is_game_over() {
        return false;
    }
    let bird = state.bird();
    let target = state
        .pipes()
        .iter()
        .find(|p| p.x() + PIPE_WIDTH >= bird.x())
        .map_or(FIRST_PIPE_Y, |p| p.gap_center_y());
    bird.y() + BIRD_HEIGHT / 2.0 > target + 10.0
}
