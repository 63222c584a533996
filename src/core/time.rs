//! Tick clock

/// Tracks per-tick delta and total elapsed time
#[derive(Debug, Clone, Default)]
pub struct Time {
    delta: f32,
    elapsed: f64,
    ticks: u64,
}

impl Time {
    /// Create a clock at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new tick lasting `dt` seconds.
    ///
    /// Negative or non-finite deltas count as zero and are returned as such.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.delta = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.elapsed += f64::from(self.delta);
        self.ticks += 1;
        self.delta
    }

    /// Delta of the current tick in seconds
    #[must_use]
    pub fn delta_seconds(&self) -> f32 {
        self.delta
    }

    /// Total time since creation in seconds
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    /// Number of ticks started
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
