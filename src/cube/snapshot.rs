//! Cube checkpoints.
//!
//! A `CubeSnapshot` captures everything needed to rebuild a `Cube`:
//! stickers, orientation, identity, history and the scramble RNG
//! position. Snapshots are plain serde values; `to_bytes`/`from_bytes`
//! give a compact bincode encoding.

use serde::{Deserialize, Serialize};

use crate::core::{CubeConfig, CubeError, CubeRngState, CubeState};
use crate::orientation::Orientation;

use super::metadata::CubeMetadata;

/// Serializable capture of a cube.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeSnapshot {
    pub state: CubeState,
    pub orientation: Orientation,
    pub metadata: CubeMetadata,
    pub rng: CubeRngState,
    pub config: CubeConfig,
}

impl CubeSnapshot {
    /// Check the cube invariants: nine stickers of each color and a
    /// bijective orientation.
    pub fn validate(&self) -> Result<(), CubeError> {
        self.state.validate()?;
        if !self.orientation.is_bijection() {
            return Err(CubeError::InvalidSnapshot(format!(
                "orientation is not a bijection: {:?}",
                self.orientation
            )));
        }
        Ok(())
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CubeError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode. The result is not validated; `Cube::restore`
    /// does that.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CubeError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, CubeRng, Face};

    fn solved_snapshot() -> CubeSnapshot {
        CubeSnapshot {
            state: CubeState::solved(),
            orientation: Orientation::identity(),
            metadata: CubeMetadata::new(),
            rng: CubeRng::new(1).state(),
            config: CubeConfig::default(),
        }
    }

    #[test]
    fn test_solved_snapshot_is_valid() {
        assert!(solved_snapshot().validate().is_ok());
    }

    #[test]
    fn test_bad_orientation_rejected() {
        let mut snapshot = solved_snapshot();
        snapshot.orientation.back = Face::Front;
        assert!(matches!(snapshot.validate(), Err(CubeError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_bad_colors_rejected() {
        let mut snapshot = solved_snapshot();
        snapshot.state[Face::Back][(0, 0)] = Color::Green;
        assert!(matches!(snapshot.validate(), Err(CubeError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_bytes_round_trip() {
        let snapshot = solved_snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(CubeSnapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let bytes = solved_snapshot().to_bytes().unwrap();
        let result = CubeSnapshot::from_bytes(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(CubeError::Encoding(_))));
    }
}
