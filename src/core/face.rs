//! Physical face identification and per-face data storage.
//!
//! ## Face
//!
//! The six physical sides of the cube. A face's identity never changes;
//! whole-cube rotations only change which logical role addresses it
//! (see `orientation`).
//!
//! ## FaceMap
//!
//! Per-face data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Face`, so every face always has
//! exactly one entry.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::color::Color;
use super::error::CubeError;

/// One of the six physical faces.
///
/// Declaration order is the canonical iteration order used by the state
/// dump and by `FaceMap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    /// All faces in canonical order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Dense index (0..6) into `Face::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color this face carries when the cube is solved.
    #[must_use]
    pub const fn canonical_color(self) -> Color {
        match self {
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
            Face::Top => Color::White,
            Face::Bottom => Color::Yellow,
        }
    }

    /// Lower-case face name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Face {
    type Error = CubeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| CubeError::InvalidFace(format!("index {value}")))
    }
}

impl FromStr for Face {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .iter()
            .copied()
            .find(|face| face.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CubeError::InvalidFace(s.to_string()))
    }
}

/// Per-face data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rubik_cube::core::{Face, FaceMap};
///
/// let mut turns: FaceMap<u32> = FaceMap::with_value(0);
/// turns[Face::Front] += 1;
///
/// assert_eq!(turns[Face::Front], 1);
/// assert_eq!(turns[Face::Back], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceMap<T> {
    data: [T; 6],
}

impl<T> FaceMap<T> {
    /// Create a new FaceMap with values from a factory function.
    pub fn new(factory: impl Fn(Face) -> T) -> Self {
        Self {
            data: Face::ALL.map(factory),
        }
    }

    /// Create a new FaceMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a face's data.
    #[must_use]
    pub fn get(&self, face: Face) -> &T {
        &self.data[face.index()]
    }

    /// Get a mutable reference to a face's data.
    pub fn get_mut(&mut self, face: Face) -> &mut T {
        &mut self.data[face.index()]
    }

    /// Iterate over (Face, &T) pairs in canonical face order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over values in canonical face order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Face> for FaceMap<T> {
    type Output = T;

    fn index(&self, face: Face) -> &Self::Output {
        self.get(face)
    }
}

impl<T> IndexMut<Face> for FaceMap<T> {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        self.get_mut(face)
    }
}
