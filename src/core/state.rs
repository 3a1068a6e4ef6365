//! Cube state: the six physical sticker grids.
//!
//! `CubeState` maps every physical `Face` to its own `StickerGrid`.
//! The key set is fixed at construction; only the face-rotation engine
//! and `reset` change the grids.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::Color;
use super::error::CubeError;
use super::face::{Face, FaceMap};
use super::grid::{StickerGrid, GRID_SIZE};

/// Number of stickers of each color on a complete cube.
pub const STICKERS_PER_COLOR: usize = GRID_SIZE * GRID_SIZE;

/// Sticker grids for all six physical faces.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
    grids: FaceMap<StickerGrid>,
}

impl CubeState {
    /// A solved cube: every face filled with its canonical color.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            grids: FaceMap::new(|face| StickerGrid::filled(face.canonical_color())),
        }
    }

    /// Grid of `face`, if the state holds one.
    ///
    /// The key set is fixed, so this is always `Some` today. The engine
    /// still goes through it and maps `None` to `InvalidFace`, which keeps
    /// that guard in place if states ever become partial.
    #[must_use]
    pub fn grid(&self, face: Face) -> Option<&StickerGrid> {
        Some(&self.grids[face])
    }

    /// Mutable grid of `face`, if the state holds one. Always `Some`; see
    /// `grid`.
    pub fn grid_mut(&mut self, face: Face) -> Option<&mut StickerGrid> {
        Some(&mut self.grids[face])
    }

    /// Iterate over (Face, &StickerGrid) in canonical face order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &StickerGrid)> {
        self.grids.iter()
    }

    /// True if every face is a single color.
    ///
    /// Checks per-face uniformity only, not that each face carries its
    /// canonical color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grids.values().all(StickerGrid::is_uniform)
    }

    /// Number of stickers of each color, indexed by `Color::index`.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in self.grids.values().flat_map(StickerGrid::stickers) {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Check that the state could belong to a real cube.
    ///
    /// Every color must appear exactly `STICKERS_PER_COLOR` times.
    pub fn validate(&self) -> Result<(), CubeError> {
        let counts = self.color_counts();
        for color in Color::ALL {
            let count = counts[color.index()];
            if count != STICKERS_PER_COLOR {
                return Err(CubeError::InvalidSnapshot(format!(
                    "expected {STICKERS_PER_COLOR} {color} stickers, found {count}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl Index<Face> for CubeState {
    type Output = StickerGrid;

    fn index(&self, face: Face) -> &Self::Output {
        &self.grids[face]
    }
}

impl IndexMut<Face> for CubeState {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.grids[face]
    }
}
