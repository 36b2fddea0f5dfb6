//! Game state and the run's phase machine
//!
//! `GameState` owns every entity for the whole run. Nothing outside the `sim`
//! module mutates it except through [`super::tick`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bird::Bird;
use super::ground::Ground;
use super::pipe::Pipe;
use super::stream::{GapSource, PipeStream};
use crate::Tuning;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// World scrolls, pipes spawn, collisions and scoring are live
    Running,
    /// Terminal. Only the bird keeps falling until it lands.
    GameOver,
}

/// Something the presentation layer may want to react to (sound, scoreboard)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Flapped,
    Scored { score: u32 },
    Died,
    GameOver { score: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState<G: GapSource = Pcg32> {
    pub(crate) tuning: Tuning,
    pub(crate) bird: Bird,
    pub(crate) ground: Ground,
    pub(crate) pipes: PipeStream,
    pub(crate) phase: GamePhase,
    /// Random opening heights for new pipes
    pub(crate) gaps: G,
    /// Events produced since the last drain
    pub(crate) events: Vec<GameEvent>,
    /// Number of `tick` calls so far
    pub(crate) time_ticks: u64,
    /// Sum of all (sanitised) ticks
    pub(crate) elapsed: f32,
}

impl GameState<Pcg32> {
    /// New run with default tuning and a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// New run with custom tuning and a seeded RNG
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        log::info!("New run with seed {}", seed);
        Self::with_gap_source(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<G: GapSource> GameState<G> {
    /// New run drawing opening heights from `gaps`
    pub fn with_gap_source(tuning: Tuning, gaps: G) -> Self {
        Self {
            bird: Bird::new(Vec2::new(BIRD_START_X, BIRD_START_Y), &tuning),
            ground: Ground::new(tuning.scroll_velocity),
            pipes: PipeStream::with_first_pipe(&tuning),
            phase: GamePhase::Running,
            gaps,
            events: Vec::new(),
            time_ticks: 0,
            elapsed: 0.0,
            tuning,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    /// Live pipes in spawn order
    pub fn pipes(&self) -> &[Pipe] {
        self.pipes.pipes()
    }

    pub fn pipe_stream(&self) -> &PipeStream {
        &self.pipes
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.bird.score()
    }

    pub fn is_alive(&self) -> bool {
        self.bird.is_alive()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether the bird has come to rest after the run ended
    pub fn bird_landed(&self) -> bool {
        self.is_game_over() && self.bird.y() >= self.tuning.death_floor_y
    }

    /// Take all events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Kill the bird, emitting `Died` only on the first call
    pub(crate) fn kill_bird(&mut self) {
        if self.bird.is_alive() {
            self.bird.die();
            self.events.push(GameEvent::Died);
        }
    }
}
