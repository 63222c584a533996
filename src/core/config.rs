//! Labyrinth configuration
//!
//! Defaults reproduce the classic 20x20 maze. Configurations can be stored
//! as RON or JSON.

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Player viewpoint tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// World units per second at full input
    pub move_speed: f32,
    /// Radians per second at full input
    pub turn_speed: f32,
    /// Spawn position
    pub spawn: Vec3,
    /// Spawn yaw in radians
    pub spawn_rotation: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 1.5,
            turn_speed: std::f32::consts::FRAC_PI_2,
            spawn: Vec3::new(0.5, 0.5, 0.5),
            spawn_rotation: 0.0,
        }
    }
}

/// Wandering entity tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WandererConfig {
    /// World units per second
    pub move_speed: f32,
    /// How many frames of movement the obstacle lookahead simulates
    pub lookahead_frames: f32,
    /// Spawn cell; `None` picks the cell opposite the origin
    pub spawn_cell: Option<(usize, usize)>,
    /// Leg swing per moving tick in degrees
    pub stride_step: f32,
    /// Leg angle in degrees below which a footstep fires
    pub footstep_angle: f32,
}

impl Default for WandererConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.6,
            lookahead_frames: 46.0,
            spawn_cell: None,
            stride_step: 2.4,
            footstep_angle: -30.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabyrinthConfig {
    /// Maze width in cells
    pub width: usize,
    /// Maze height in cells
    pub height: usize,
    /// Generation seed; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Whether entities collide with walls
    pub collisions: bool,
    /// Player settings
    pub player: PlayerConfig,
    /// Wanderer settings
    pub wanderer: WandererConfig,
}

impl Default for LabyrinthConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            seed: None,
            collisions: true,
            player: PlayerConfig::default(),
            wanderer: WandererConfig::default(),
        }
    }
}

impl LabyrinthConfig {
    /// Set maze dimensions
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the generation seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable wall collisions
    #[must_use]
    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions = enabled;
        self
    }

    /// Place the wanderer in a specific cell
    #[must_use]
    pub fn with_wanderer_cell(mut self, x: usize, z: usize) -> Self {
        self.wanderer.spawn_cell = Some((x, z));
        self
    }

    /// Check values that would make the level unusable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "maze must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        let speeds = [
            ("player.move_speed", self.player.move_speed),
            ("player.turn_speed", self.player.turn_speed),
            ("wanderer.move_speed", self.wanderer.move_speed),
            ("wanderer.lookahead_frames", self.wanderer.lookahead_frames),
            ("wanderer.stride_step", self.wanderer.stride_step),
        ];
        for (name, value) in speeds {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if let Some((x, z)) = self.wanderer.spawn_cell {
            if x >= self.width || z >= self.height {
                return Err(ConfigError::Invalid(format!(
                    "wanderer spawn cell ({x}, {z}) is outside the maze"
                )));
            }
        }
        Ok(())
    }

    /// Save the configuration to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_ron()?).map_err(|e| ConfigError::IoError(e.to_string()))
    }

    /// Load a configuration from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_ron(&content)
    }

    /// Save the configuration to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        fs::write(path, json_string).map_err(|e| ConfigError::IoError(e.to_string()))
    }

    /// Load a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or deserialization fails
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::DeserializeError(e.to_string()))
    }

    /// Serialize to a pretty RON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    /// Parse from a RON string
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|e| ConfigError::DeserializeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_maze() {
        let config = LabyrinthConfig::default();
        assert_eq!((config.width, config.height), (20, 20));
        assert_eq!(config.player.move_speed, 1.5);
        assert_eq!(config.wanderer.lookahead_frames, 46.0);
        assert!(config.collisions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_ron_roundtrip() {
        let config = LabyrinthConfig::default()
            .with_size(8, 5)
            .with_seed(77)
            .with_wanderer_cell(3, 4);

        let text = config.to_ron().unwrap();
        assert!(text.contains("seed"));

        let loaded = LabyrinthConfig::from_ron(&text).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let loaded = LabyrinthConfig::from_ron("(width: 5, height: 6)").unwrap();
        assert_eq!((loaded.width, loaded.height), (5, 6));
        assert_eq!(loaded.seed, None);
        assert_eq!(loaded.player, PlayerConfig::default());
    }

    #[test]
    fn test_config_json_parse() {
        let loaded: LabyrinthConfig =
            serde_json::from_str(r#"{"width": 3, "height": 3, "seed": 9, "collisions": false}"#)
                .unwrap();
        assert_eq!(loaded.seed, Some(9));
        assert!(!loaded.collisions);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            LabyrinthConfig::default().with_size(0, 3).validate(),
            Err(ConfigError::Invalid(_))
        ));

        let mut config = LabyrinthConfig::default();
        config.wanderer.move_speed = 0.0;
        assert!(config.validate().is_err());

        let config = LabyrinthConfig::default().with_size(4, 4).with_wanderer_cell(4, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_ron_is_reported() {
        let err = LabyrinthConfig::from_ron("(width: \"wide\")").unwrap_err();
        assert!(matches!(err, ConfigError::DeserializeError(_)));
    }
}
