//! Player-controlled viewpoint

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::{MoveOutcome, MovementController, Pose};
use crate::core::PlayerConfig;
use crate::input::PlayerCommand;

/// Wrap an angle into `(-PI, PI]`
#[must_use]
pub(crate) fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// First-person viewpoint steered by [`PlayerCommand`]s
#[derive(Debug, Clone)]
pub struct Player {
    pose: Pose,
    spawn: Pose,
    move_speed: f32,
    turn_speed: f32,
}

impl Player {
    /// Create a player at its configured spawn pose
    #[must_use]
    pub fn new(config: &PlayerConfig) -> Self {
        let spawn = Pose::new(config.spawn, config.spawn_rotation);
        Self {
            pose: spawn,
            spawn,
            move_speed: config.move_speed,
            turn_speed: config.turn_speed,
        }
    }

    /// Current pose
    #[must_use]
    pub const fn pose(&self) -> Pose {
        self.pose
    }

    /// Current position
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.pose.position
    }

    /// Current yaw
    #[must_use]
    pub const fn rotation(&self) -> f32 {
        self.pose.rotation
    }

    /// Return to the spawn pose
    pub fn reset(&mut self) {
        self.pose = self.spawn;
    }

    /// Apply one tick of input.
    ///
    /// Turning always happens; translation goes through the controller and
    /// may be rejected, in which case only the turn sticks. Returns `None`
    /// when the command asked for no translation.
    pub fn apply(
        &mut self,
        controller: &MovementController<'_>,
        command: &PlayerCommand,
        dt: f32,
    ) -> Option<MoveOutcome> {
        if command.reset {
            self.reset();
            return None;
        }

        let command = command.clamped();
        self.pose.rotation = wrap_angle(self.pose.rotation + command.turn * self.turn_speed * dt);

        if !command.is_moving() {
            return None;
        }

        let step = self.move_speed * dt;
        let local_delta = Vec3::new(command.strafe * step, 0.0, command.forward * step);
        let rotation = self.pose.rotation;
        Some(controller.try_move(&mut self.pose, rotation, local_delta))
    }
}
