//! Data-driven game balance
//!
//! Every physics and spawning constant the simulation uses, with defaults that
//! match the shipped game. The values are calibrated together for ticks measured
//! in seconds, so overriding one usually means retuning its neighbours.
//!
//! Loaded from JSON. Missing fields fall back to their defaults, so a tuning file
//! only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Upper bound for `max_pipes`; far more than ever fit on screen
const MAX_PIPES_LIMIT: usize = 64;

/// Tuning load/validation errors
#[derive(Debug)]
pub enum TuningError {
    /// Tuning file could not be read
    Io(std::io::Error),
    /// Tuning JSON was malformed
    Parse(serde_json::Error),
    /// A value parsed but makes no sense for the simulation
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read tuning file: {}", e),
            Self::Parse(e) => write!(f, "Failed to parse tuning: {}", e),
            Self::Invalid { field, reason } => write!(f, "Invalid tuning `{}`: {}", field, reason),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Gameplay tuning values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Bird ===
    /// Velocity state set on every flap (negative = upward)
    pub flap_velocity: f32,
    /// Coefficient of the `t^1.5` fall term
    pub fall_accel: f32,
    /// Largest downward displacement allowed per advance
    pub terminal_velocity: f32,
    /// Extra upward nudge applied while rising
    pub rise_bias: f32,
    /// Nose-down rotation per advance (degrees)
    pub tilt_rate: f32,
    /// Time after a flap before the velocity state settles back to rest
    pub flap_settle: f32,
    /// A dead bird stops falling once it reaches this y
    pub death_floor_y: f32,

    // === Pipes ===
    /// Horizontal velocity shared by pipes and ground (negative = leftward)
    pub scroll_velocity: f32,
    /// Vertical opening between the upper and lower barrier
    pub opening_height: f32,
    /// Distance between consecutive pipe x positions
    pub pipe_spacing: f32,
    /// Number of pipes kept alive at once
    pub max_pipes: usize,
    /// Inclusive range for the random opening center
    pub gap_center_min: i32,
    pub gap_center_max: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            flap_velocity: FLAP_VELOCITY,
            fall_accel: FALL_ACCEL,
            terminal_velocity: TERMINAL_VELOCITY,
            rise_bias: RISE_BIAS,
            tilt_rate: TILT_RATE,
            flap_settle: FLAP_SETTLE,
            death_floor_y: DEATH_FLOOR_Y,

            scroll_velocity: SCROLL_VELOCITY,
            opening_height: OPENING_HEIGHT,
            pipe_spacing: PIPE_SPACING,
            max_pipes: MAX_PIPES,
            gap_center_min: GAP_CENTER_MIN,
            gap_center_max: GAP_CENTER_MAX,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON (handy as a starting point for a tuning file)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that values keep the simulation well-formed
    pub fn validate(&self) -> Result<(), TuningError> {
        let finite = [
            ("flap_velocity", self.flap_velocity),
            ("fall_accel", self.fall_accel),
            ("terminal_velocity", self.terminal_velocity),
            ("rise_bias", self.rise_bias),
            ("tilt_rate", self.tilt_rate),
            ("flap_settle", self.flap_settle),
            ("death_floor_y", self.death_floor_y),
            ("scroll_velocity", self.scroll_velocity),
            ("opening_height", self.opening_height),
            ("pipe_spacing", self.pipe_spacing),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a finite number",
                });
            }
        }

        if self.fall_accel <= 0.0 {
            return Err(invalid("fall_accel", "must be positive"));
        }
        if self.terminal_velocity <= 0.0 {
            return Err(invalid("terminal_velocity", "must be positive"));
        }
        if self.flap_settle < 0.0 {
            return Err(invalid("flap_settle", "must not be negative"));
        }
        if self.scroll_velocity >= 0.0 {
            return Err(invalid("scroll_velocity", "must be negative (pipes scroll left)"));
        }
        if self.opening_height <= 0.0 {
            return Err(invalid("opening_height", "must be positive"));
        }
        if self.pipe_spacing <= 0.0 {
            return Err(invalid("pipe_spacing", "must be positive"));
        }
        if self.max_pipes == 0 {
            return Err(invalid("max_pipes", "must be at least 1"));
        }
        if self.max_pipes > MAX_PIPES_LIMIT {
            return Err(invalid("max_pipes", "must be at most 64"));
        }
        if self.gap_center_min > self.gap_center_max {
            return Err(invalid("gap_center_min", "must not exceed gap_center_max"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> TuningError {
    TuningError::Invalid { field, reason }
}
