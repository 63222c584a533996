//! Reactive wall avoidance for the wandering entity
//!
//! No route planning: each tick the wanderer probes ahead along its
//! current heading and, if that probe would end inside a wall, tries the
//! other three headings in a fixed order.

use glam::Vec3;

use crate::animation::{Foot, Stride};
use crate::core::WandererConfig;
use crate::maze::Direction;
use crate::movement::{MoveOutcome, MovementController, Pose, preview_move};

/// Quarter turns tried in order: straight, left, right, reverse
const TURN_ORDER: [usize; 4] = [0, 1, 3, 2];

/// What the wanderer did this tick, for renderers and audio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderReport {
    /// Heading after the decision
    pub direction: Direction,
    /// Position after the move (unchanged when blocked)
    pub position: Vec3,
    /// Whether the position changed
    pub moved: bool,
    /// Footstep that landed this tick
    pub footstep: Option<Foot>,
}

/// Autonomous entity that roams the maze by local collision avoidance
#[derive(Debug, Clone)]
pub struct Wanderer {
    pose: Pose,
    direction: Direction,
    move_speed: f32,
    lookahead_frames: f32,
    stride: Stride,
}

impl Wanderer {
    /// Create a wanderer at `position` facing `direction`
    #[must_use]
    pub fn new(position: Vec3, direction: Direction, config: &WandererConfig) -> Self {
        Self {
            pose: Pose::new(position, direction.rotation()),
            direction,
            move_speed: config.move_speed,
            lookahead_frames: config.lookahead_frames,
            stride: Stride::new(config.stride_step, config.footstep_angle),
        }
    }

    /// Current heading
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
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

    /// Leg swing state
    #[must_use]
    pub const fn stride(&self) -> &Stride {
        &self.stride
    }

    /// Forward offset used for the real move this tick
    fn step(&self, dt: f32) -> Vec3 {
        Vec3::new(0.0, 0.0, self.move_speed * dt)
    }

    /// Forward offset used to probe for upcoming walls
    fn lookahead(&self, dt: f32) -> Vec3 {
        self.step(dt) * self.lookahead_frames
    }

    /// Pick a heading whose lookahead probe is clear.
    ///
    /// Tries the current heading, then a left turn, then a right turn, and
    /// reverses only as a last resort. Returns `None` when every probe is
    /// blocked.
    #[must_use]
    pub fn choose_direction(
        &self,
        controller: &MovementController<'_>,
        dt: f32,
    ) -> Option<Direction> {
        let probe = self.lookahead(dt);
        TURN_ORDER
            .into_iter()
            .map(|turns| self.direction.turned(turns))
            .find(|dir| {
                let candidate = preview_move(self.pose.position, dir.rotation(), probe);
                controller.obstruction(candidate).is_none()
            })
    }

    /// Run one tick: choose a heading, then attempt the real move
    pub fn tick(&mut self, controller: &MovementController<'_>, dt: f32) -> WanderReport {
        let mut report = WanderReport {
            direction: self.direction,
            position: self.pose.position,
            moved: false,
            footstep: None,
        };

        let Some(direction) = self.choose_direction(controller, dt) else {
            log::debug!("Wanderer boxed in at {}", self.pose.position);
            return report;
        };
        if direction != self.direction {
            log::trace!("Wanderer turns {} -> {}", self.direction, direction);
            self.direction = direction;
            self.pose.rotation = direction.rotation();
        }
        report.direction = direction;

        let step = self.step(dt);
        let outcome = controller.try_move(&mut self.pose, direction.rotation(), step);
        if outcome == MoveOutcome::Committed && self.pose.position != report.position {
            report.moved = true;
            report.position = self.pose.position;
            report.footstep = self.stride.advance();
        }
        report
    }
}
