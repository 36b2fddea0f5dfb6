//! Pipe gates
//!
//! A pipe is a pair of barriers with a fixed opening between them. Both barriers
//! share the same x and scroll left together; their vertical placement never
//! changes after creation.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// A pipe gate (upper + lower barrier)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    /// Spawn-ordered identifier
    id: u32,
    /// Left edge shared by both barriers
    x: f32,
    /// Opening center y at creation
    gap_center_y: f32,
    /// Vertical size of the opening
    opening_height: f32,
    /// Horizontal velocity (negative = leftward)
    velocity: f32,
}

impl Pipe {
    /// Create a pipe whose opening is centered on `(x, gap_center_y)`
    pub fn new(id: u32, x: f32, gap_center_y: f32, opening_height: f32, velocity: f32) -> Self {
        Self {
            id,
            x,
            gap_center_y,
            opening_height,
            velocity,
        }
    }

    /// Scroll left
    pub fn update(&mut self, ticks: f32) {
        self.x += self.velocity * ticks;
    }

    /// Still (at least partly) on screen
    pub fn is_alive(&self) -> bool {
        self.x + PIPE_WIDTH >= 0.0
    }

    /// The pipe's horizontal center has reached `bird_x`.
    ///
    /// Purely horizontal: says nothing about whether the bird made it through.
    pub fn passed(&self, bird_x: f32) -> bool {
        self.x + (PIPE_WIDTH / 2.0).floor() <= bird_x
    }

    /// True if `rect` touches either barrier
    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.lower().overlaps(rect) || self.upper().overlaps(rect)
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn gap_center_y(&self) -> f32 {
        self.gap_center_y
    }

    pub fn opening_height(&self) -> f32 {
        self.opening_height
    }

    /// Barrier hanging from the top of the screen
    pub fn upper(&self) -> Rect {
        let y = self.gap_center_y - self.opening_height / 2.0 - PIPE_HEIGHT;
        Rect::new(self.x, y, PIPE_WIDTH, PIPE_HEIGHT)
    }

    /// Barrier rising from the ground
    pub fn lower(&self) -> Rect {
        let y = self.gap_center_y + self.opening_height / 2.0;
        Rect::new(self.x, y, PIPE_WIDTH, PIPE_HEIGHT)
    }
}
