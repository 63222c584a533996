//! Error types for broken preconditions
//!
//! Blocked movement is never reported through these types; see
//! [`MoveOutcome`](crate::movement::MoveOutcome).

/// Errors raised by grid construction and cell queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height was zero
    InvalidDimensions {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
    },
    /// A cell index outside the grid was queried
    CellOutOfBounds {
        /// Queried column
        x: usize,
        /// Queried row
        z: usize,
        /// Grid width in cells
        width: usize,
        /// Grid height in cells
        height: usize,
    },
}

impl std::fmt::Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid maze dimensions {width}x{height}")
            }
            Self::CellOutOfBounds {
                x,
                z,
                width,
                height,
            } => write!(f, "cell ({x}, {z}) is outside the {width}x{height} grid"),
        }
    }
}

impl std::error::Error for MazeError {}

/// Errors that can occur while loading, saving or applying configuration
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error
    IoError(String),
    /// Serialization error
    SerializeError(String),
    /// Deserialization error
    DeserializeError(String),
    /// A value failed validation
    Invalid(String),
    /// The configured maze could not be built
    Maze(MazeError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::SerializeError(e) => write!(f, "Serialization error: {e}"),
            Self::DeserializeError(e) => write!(f, "Deserialization error: {e}"),
            Self::Invalid(e) => write!(f, "Invalid configuration: {e}"),
            Self::Maze(e) => write!(f, "Maze error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MazeError> for ConfigError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}
