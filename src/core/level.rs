//! One maze plus the entities moving through it

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{ConfigError, LabyrinthConfig, Time};
use crate::ai::{WanderReport, Wanderer};
use crate::input::PlayerCommand;
use crate::maze::Grid;
use crate::movement::{MoveOutcome, MovementController, Player};

/// Everything that happened during one [`Level::tick`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Player move result; `None` when no translation was requested
    pub player: Option<MoveOutcome>,
    /// Wanderer decision and movement
    pub wanderer: WanderReport,
}

/// A generated maze with a player and a wanderer.
///
/// The grid is immutable once built and handed out as `Arc<Grid>` so a
/// renderer or other readers can hold it without locking.
#[derive(Debug)]
pub struct Level {
    grid: Arc<Grid>,
    player: Player,
    wanderer: Wanderer,
    collisions: bool,
    time: Time,
    seed: Option<u64>,
}

impl Level {
    /// Generate a maze from the configuration and place both entities
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn from_config(config: &LabyrinthConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::generated(config.width, config.height, &mut rng)?;
        log::info!("Maze seed {seed}");

        let mut level = Self::with_grid(Arc::new(grid), config)?;
        level.seed = Some(seed);
        Ok(level)
    }

    /// Place entities in an existing grid
    ///
    /// # Errors
    ///
    /// Returns an error if a spawn point lies outside the grid
    pub fn with_grid(grid: Arc<Grid>, config: &LabyrinthConfig) -> Result<Self, ConfigError> {
        if !grid.in_world(config.player.spawn) {
            return Err(ConfigError::Invalid(format!(
                "player spawn {} is outside the maze",
                config.player.spawn
            )));
        }

        let (x, z) = config
            .wanderer
            .spawn_cell
            .unwrap_or((grid.width() - 1, grid.height() - 1));
        let cell = grid.cell(x, z)?;
        let direction = cell.open_directions().next().unwrap_or_default();
        let position = grid.cell_center(x, z, config.player.spawn.y);
        log::debug!("Wanderer spawns in cell ({x}, {z}) heading {direction}");

        Ok(Self {
            player: Player::new(&config.player),
            wanderer: Wanderer::new(position, direction, &config.wanderer),
            grid,
            collisions: config.collisions,
            time: Time::new(),
            seed: None,
        })
    }

    /// Shared read-only grid
    #[must_use]
    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    /// Seed the maze was generated from, if this level generated it
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The player viewpoint
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// The wandering entity
    #[must_use]
    pub const fn wanderer(&self) -> &Wanderer {
        &self.wanderer
    }

    /// Tick clock
    #[must_use]
    pub const fn time(&self) -> &Time {
        &self.time
    }

    /// Whether the player collides with walls
    #[must_use]
    pub const fn collisions(&self) -> bool {
        self.collisions
    }

    /// Toggle player wall collisions; world bounds always apply
    pub fn set_collisions(&mut self, enabled: bool) {
        log::info!("Player collisions {}", if enabled { "on" } else { "off" });
        self.collisions = enabled;
    }

    /// Advance the level by `dt` seconds.
    ///
    /// The player moves first, then the wanderer. Invalid deltas count as
    /// zero, which turns the tick into a pure steering decision.
    pub fn tick(&mut self, dt: f32, command: &PlayerCommand) -> TickReport {
        let dt = self.time.advance(dt);

        let walls = MovementController::new(&self.grid);
        let player_controller = walls.with_collisions(self.collisions);

        let player = self.player.apply(&player_controller, command, dt);
        let wanderer = self.wanderer.tick(&walls, dt);

        if let Some(foot) = wanderer.footstep {
            log::trace!("Wanderer footstep ({foot:?}) at {}", wanderer.position);
        }

        TickReport { player, wanderer }
    }
}
