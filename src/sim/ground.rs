//! Scrolling ground strip
//!
//! The strip is wider than the screen and jumps back to x = 0 once its right
//! edge would expose the background, which reads as endless ground.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ground {
    x: f32,
    velocity: f32,
}

impl Ground {
    pub fn new(velocity: f32) -> Self {
        Self { x: 0.0, velocity }
    }

    pub fn update(&mut self, ticks: f32) {
        let x = self.x + self.velocity * ticks;
        self.x = if x + GROUND_WIDTH < SCREEN_WIDTH { 0.0 } else { x };
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    /// Only the top edge matters in practice; the bird never gets below it
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, GROUND_Y, GROUND_WIDTH, GROUND_HEIGHT)
    }
}
