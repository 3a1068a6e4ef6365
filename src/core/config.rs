//! Cube configuration parameters.

use serde::{Deserialize, Serialize};

/// Cube configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeConfig {
    /// Number of moves generated by `Cube::scramble_default` (default: 20).
    pub scramble_length: usize,

    /// Seed for the scramble RNG.
    /// `None` draws a fresh seed from OS entropy for every cube.
    pub seed: Option<u64>,

    /// Whether `Cube::reset` also restores the identity orientation.
    /// When false, whole-cube rotations survive a reset.
    pub reset_orientation: bool,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            scramble_length: 20,
            seed: None,
            reset_orientation: true,
        }
    }
}

impl CubeConfig {
    /// Create a new config with a fixed scramble seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom default scramble length.
    pub fn with_scramble_length(mut self, length: usize) -> Self {
        self.scramble_length = length;
        self
    }

    /// Create a new config with custom reset behavior.
    pub fn with_reset_orientation(mut self, reset_orientation: bool) -> Self {
        self.reset_orientation = reset_orientation;
        self
    }
}
