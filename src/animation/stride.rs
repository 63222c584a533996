//! Leg swing phase and footstep triggers for walking entities
//!
//! Only the numbers live here. Posing a skeleton and playing spatialized
//! footstep sounds is left to the presentation layer.

use serde::{Deserialize, Serialize};

/// Which foot hit the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Foot {
    /// Left foot
    Left,
    /// Right foot
    Right,
}

/// Two-leg swing in degrees.
///
/// The leading leg swings back by `step` each tick while the other swings
/// forward. Once either leg passes `footstep_angle` a footstep fires for the
/// leading foot and the legs swap roles.
#[derive(Debug, Clone, PartialEq)]
pub struct Stride {
    left_leg: f32,
    right_leg: f32,
    left_leading: bool,
    step: f32,
    footstep_angle: f32,
}

impl Stride {
    /// Create a stride with both legs straight, right leg leading
    #[must_use]
    pub fn new(step: f32, footstep_angle: f32) -> Self {
        Self {
            left_leg: 0.0,
            right_leg: 0.0,
            left_leading: false,
            step,
            footstep_angle,
        }
    }

    /// Left leg angle in degrees
    #[must_use]
    pub fn left_leg(&self) -> f32 {
        self.left_leg
    }

    /// Right leg angle in degrees
    #[must_use]
    pub fn right_leg(&self) -> f32 {
        self.right_leg
    }

    /// Advance one tick, returning the foot that landed, if any
    pub fn advance(&mut self) -> Option<Foot> {
        if self.left_leading {
            self.left_leg -= self.step;
            self.right_leg += self.step;
        } else {
            self.right_leg -= self.step;
            self.left_leg += self.step;
        }

        if self.left_leg < self.footstep_angle || self.right_leg < self.footstep_angle {
            let foot = if self.left_leading { Foot::Left } else { Foot::Right };
            self.left_leading = !self.left_leading;
            return Some(foot);
        }
        None
    }
}

impl Default for Stride {
    fn default() -> Self {
        Self::new(2.4, -30.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_footstep_is_right() {
        let mut stride = Stride::default();
        let ticks = (1..=20).find(|_| stride.advance().is_some()).unwrap();

        // 13 * 2.4 = 31.2 is the first swing past 30 degrees
        assert_eq!(ticks, 13);
        assert!(stride.right_leg() < -30.0);
        assert!(stride.left_leg() > 30.0);
    }

    #[test]
    fn test_feet_alternate() {
        let mut stride = Stride::default();
        let steps: Vec<Foot> = (0..200).filter_map(|_| stride.advance()).take(4).collect();
        assert_eq!(steps, vec![Foot::Right, Foot::Left, Foot::Right, Foot::Left]);
    }

    #[test]
    fn test_legs_stay_bounded() {
        let mut stride = Stride::default();
        for _ in 0..1000 {
            stride.advance();
            assert!(stride.left_leg().abs() < 40.0);
            assert!(stride.right_leg().abs() < 40.0);
        }
    }
}
