//! Flappy Sim - simulation core for a side-scrolling flap-and-dodge game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipes, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Drawing, assets, input devices and the real-time frame driver live outside
//! this crate. They feed `sim::tick` with elapsed time and a flap flag, then read
//! geometry and score back out.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the demo driver (60 Hz, seconds)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Viewport dimensions
    pub const SCREEN_WIDTH: f32 = 288.0;
    pub const SCREEN_HEIGHT: f32 = 512.0;

    /// Bird sprite box and spawn point (top-left corner)
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;
    pub const BIRD_START_X: f32 = 10.0;
    pub const BIRD_START_Y: f32 = 10.0;

    /// Tilt range in degrees (positive = nose up)
    pub const MAX_TILT: f32 = 25.0;
    pub const MIN_TILT: f32 = -90.0;
    /// At or below this tilt the wing animation holds a single frame
    pub const WING_FREEZE_TILT: f32 = -80.0;
    /// Bird keeps its nose up while within this many pixels below the last flap height
    pub const NOSE_UP_MARGIN: f32 = 50.0;

    /// Pipe barrier sprite box (each of the two barriers)
    pub const PIPE_WIDTH: f32 = 54.0;
    pub const PIPE_HEIGHT: f32 = 320.0;
    /// Opening center of the pipe that exists when a run starts
    pub const FIRST_PIPE_X: f32 = 300.0;
    pub const FIRST_PIPE_Y: f32 = 200.0;

    /// Ground strip box and resting position
    pub const GROUND_WIDTH: f32 = 336.0;
    pub const GROUND_HEIGHT: f32 = 112.0;
    pub const GROUND_Y: f32 = 475.0;

    /// Defaults for the tunable values (see `crate::Tuning`)
    pub const SCROLL_VELOCITY: f32 = -75.0;
    pub const OPENING_HEIGHT: f32 = 120.0;
    pub const PIPE_SPACING: f32 = 225.0;
    pub const MAX_PIPES: usize = 5;
    pub const GAP_CENTER_MIN: i32 = 150;
    pub const GAP_CENTER_MAX: i32 = 350;
    pub const FLAP_VELOCITY: f32 = -1.5;
    pub const FALL_ACCEL: f32 = 2.5;
    pub const TERMINAL_VELOCITY: f32 = 16.0;
    pub const RISE_BIAS: f32 = 2.0;
    pub const TILT_RATE: f32 = 20.0;
    pub const FLAP_SETTLE: f32 = 0.25;
    pub const DEATH_FLOOR_Y: f32 = 450.0;
}
