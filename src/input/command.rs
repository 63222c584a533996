//! Per-tick player commands
//!
//! The device layer (keyboard, gamepad, replay file) is outside this crate.
//! It only has to produce one [`PlayerCommand`] per tick; each axis is an
//! opaque scalar, normally in `-1.0..=1.0`.

use serde::{Deserialize, Serialize};

/// Movement intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerCommand {
    /// Forward (+) / backward (-)
    pub forward: f32,
    /// Strafe along local +X (+) / -X (-)
    pub strafe: f32,
    /// Yaw change direction, counter-clockwise seen from above (+)
    pub turn: f32,
    /// Return to the spawn pose instead of moving
    pub reset: bool,
}

impl PlayerCommand {
    /// No input
    pub const IDLE: Self = Self {
        forward: 0.0,
        strafe: 0.0,
        turn: 0.0,
        reset: false,
    };

    /// Walk forward at full speed
    #[must_use]
    pub const fn forward() -> Self {
        Self {
            forward: 1.0,
            ..Self::IDLE
        }
    }

    /// Set the turn axis
    #[must_use]
    pub const fn with_turn(mut self, turn: f32) -> Self {
        self.turn = turn;
        self
    }

    /// Set the strafe axis
    #[must_use]
    pub const fn with_strafe(mut self, strafe: f32) -> Self {
        self.strafe = strafe;
        self
    }

    /// Request a reset to the spawn pose
    #[must_use]
    pub const fn reset() -> Self {
        Self {
            reset: true,
            ..Self::IDLE
        }
    }

    /// Check whether the command asks for any translation
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.forward != 0.0 || self.strafe != 0.0
    }

    /// Clamp every axis to `-1.0..=1.0`, mapping NaN to zero
    #[must_use]
    pub fn clamped(self) -> Self {
        let clamp = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        Self {
            forward: clamp(self.forward),
            strafe: clamp(self.strafe),
            turn: clamp(self.turn),
            reset: self.reset,
        }
    }
}
