//! The player-controlled bird
//!
//! Vertical motion is not a real gravity integration. Each advance computes a
//! displacement from the time since the last flap:
//!
//! ```text
//! d = velocity * t + fall_accel * t^1.5
//! ```
//!
//! capped at terminal velocity, with a small extra push while rising. The curve
//! gives the snappy arcade feel and the constants are tuned against it.
//!
//! A flap arms a short settle window. When it runs out the velocity state drops
//! to 0 but `t` keeps counting, so the fall picks up from the current point on
//! the `t^1.5` curve rather than starting over.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::Tuning;
use crate::consts::*;

/// The bird entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner; x never changes
    pos: Vec2,
    /// Velocity state, set by a flap and settled back to 0
    velocity: f32,
    /// Time since the last flap (or since spawn)
    tick_count: f32,
    /// y at the moment of the last flap
    flap_height: f32,
    /// Rotation in degrees, clamped to [MIN_TILT, MAX_TILT]
    tilt: f32,
    /// Remaining settle window after a flap
    settle_timer: f32,
    score: u32,
    dead: bool,
    /// Horizontal distance the world has scrolled under the bird
    distance: f32,

    // Cached tuning
    flap_velocity: f32,
    fall_accel: f32,
    terminal_velocity: f32,
    rise_bias: f32,
    tilt_rate: f32,
    flap_settle: f32,
    scroll_speed: f32,
}

impl Bird {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            velocity: 0.0,
            tick_count: 0.0,
            flap_height: 0.0,
            tilt: 0.0,
            settle_timer: 0.0,
            score: 0,
            dead: false,
            distance: 0.0,

            flap_velocity: tuning.flap_velocity,
            fall_accel: tuning.fall_accel,
            terminal_velocity: tuning.terminal_velocity,
            rise_bias: tuning.rise_bias,
            tilt_rate: tuning.tilt_rate,
            flap_settle: tuning.flap_settle,
            scroll_speed: tuning.scroll_velocity.abs(),
        }
    }

    /// Kick the bird upward and restart the displacement curve from here
    pub fn flap(&mut self) {
        self.velocity = self.flap_velocity;
        self.tick_count = 0.0;
        self.flap_height = self.pos.y;
        self.settle_timer = self.flap_settle;
    }

    /// Integrate one frame of motion and rotation
    pub fn advance(&mut self, ticks: f32) {
        self.distance += self.scroll_speed * ticks;

        self.tick_count += ticks;
        let t = self.tick_count;
        let mut d = self.velocity * t + self.fall_accel * t.powf(1.5);

        d = d.min(self.terminal_velocity);

        // Soften the rise
        if d < 0.0 {
            d -= self.rise_bias;
        }

        self.pos.y += d;

        if d < 0.0 || self.pos.y < self.flap_height + NOSE_UP_MARGIN {
            // Snap straight to nose-up, never ease into it
            self.tilt = self.tilt.max(MAX_TILT);
        } else {
            self.tilt = (self.tilt - self.tilt_rate).max(MIN_TILT);
        }

        if self.velocity != 0.0 {
            self.settle_timer -= ticks;
            if self.settle_timer <= 0.0 {
                self.velocity = 0.0;
                self.settle_timer = 0.0;
            }
        }
    }

    /// One-way transition to dead (repeat calls are harmless)
    pub fn die(&mut self) {
        self.dead = true;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    /// Credit one passed pipe. Ignored once the bird is dead.
    pub fn increment_score(&mut self) {
        if !self.dead {
            self.score += 1;
        }
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Current rotation in degrees (positive = nose up)
    #[inline]
    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    /// Whether the wing animation should hold its dive frame
    pub fn wing_frozen(&self) -> bool {
        self.tilt <= WING_FREEZE_TILT
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Velocity state (flap velocity during the settle window, 0 otherwise)
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Collision box (rotation is ignored)
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BIRD_WIDTH, BIRD_HEIGHT)
    }
}
