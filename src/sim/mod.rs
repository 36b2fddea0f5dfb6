//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `tick`
//! - Random opening heights only come from the injected `GapSource`
//! - Stable iteration order (pipes in spawn order)
//! - No rendering or platform dependencies

pub mod bird;
pub mod collision;
pub mod ground;
pub mod pipe;
pub mod state;
pub mod stream;
pub mod tick;

pub use bird::Bird;
pub use collision::{Rect, overlaps};
pub use ground::Ground;
pub use pipe::Pipe;
pub use state::{GameEvent, GamePhase, GameState};
pub use stream::{GapSource, PipeStream};
pub use tick::{TickInput, tick};
