//! Move representation and notation.
//!
//! A `Move` is a quarter turn of the face currently playing one logical
//! role, in one direction. Moves carry no payload: which physical face
//! actually turns is decided at apply time by the cube's orientation.
//!
//! Notation follows the usual convention: `U D L R F B` for clockwise
//! quarter turns, a trailing `'` for counter-clockwise.
//!
//! ```
//! use rubik_cube::moves::{Move, MoveSequence};
//!
//! let seq: MoveSequence = "R U R' U'".parse().unwrap();
//! assert_eq!(seq.len(), 4);
//! assert_eq!(seq.as_slice()[2], Move::RPrime);
//! assert_eq!(seq.inverse().to_string(), "U R U' R'");
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::core::{CubeError, Face};
use crate::orientation::Role;

/// Sense of a quarter turn, viewed from outside the turned face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

impl std::fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotationDirection::Clockwise => f.write_str("clockwise"),
            RotationDirection::CounterClockwise => f.write_str("counterclockwise"),
        }
    }
}

/// One of the 12 legal quarter-turn moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    U,
    UPrime,
    D,
    DPrime,
    L,
    LPrime,
    R,
    RPrime,
    F,
    FPrime,
    B,
    BPrime,
}

impl Move {
    /// All 12 moves.
    pub const ALL: [Move; 12] = [
        Move::U,
        Move::UPrime,
        Move::D,
        Move::DPrime,
        Move::L,
        Move::LPrime,
        Move::R,
        Move::RPrime,
        Move::F,
        Move::FPrime,
        Move::B,
        Move::BPrime,
    ];

    /// Logical role of the face this move turns.
    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Move::U | Move::UPrime => Role::Top,
            Move::D | Move::DPrime => Role::Bottom,
            Move::L | Move::LPrime => Role::Left,
            Move::R | Move::RPrime => Role::Right,
            Move::F | Move::FPrime => Role::Front,
            Move::B | Move::BPrime => Role::Back,
        }
    }

    /// Turn direction inherent to this move.
    #[must_use]
    pub const fn direction(self) -> RotationDirection {
        match self {
            Move::U | Move::D | Move::L | Move::R | Move::F | Move::B => {
                RotationDirection::Clockwise
            }
            _ => RotationDirection::CounterClockwise,
        }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Move::U => Move::UPrime,
            Move::UPrime => Move::U,
            Move::D => Move::DPrime,
            Move::DPrime => Move::D,
            Move::L => Move::LPrime,
            Move::LPrime => Move::L,
            Move::R => Move::RPrime,
            Move::RPrime => Move::R,
            Move::F => Move::FPrime,
            Move::FPrime => Move::F,
            Move::B => Move::BPrime,
            Move::BPrime => Move::B,
        }
    }

    /// Standard notation symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Move::U => "U",
            Move::UPrime => "U'",
            Move::D => "D",
            Move::DPrime => "D'",
            Move::L => "L",
            Move::LPrime => "L'",
            Move::R => "R",
            Move::RPrime => "R'",
            Move::F => "F",
            Move::FPrime => "F'",
            Move::B => "B",
            Move::BPrime => "B'",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .iter()
            .copied()
            .find(|m| m.symbol() == s)
            .ok_or_else(|| CubeError::InvalidMove(s.to_string()))
    }
}

/// A move resolved against an orientation: the physical face that turns
/// and the direction it turns in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDefinition {
    /// Physical face to turn.
    pub face: Face,

    /// Direction of the quarter turn.
    pub direction: RotationDirection,
}

/// An ordered list of moves.
///
/// SmallVec keeps a default-length scramble (20 moves) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSequence {
    moves: SmallVec<[Move; 20]>,
}

impl MoveSequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `length` moves independently and uniformly from `Move::ALL`.
    ///
    /// Repeats and immediate cancellations are allowed.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Self {
        (0..length)
            .filter_map(|_| Move::ALL.choose(rng).copied())
            .collect()
    }

    /// Append a move.
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True if the sequence has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The moves as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Iterate over the moves in order.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }

    /// The sequence that undoes this one: reversed, each move inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.moves.iter().rev().map(|m| m.inverse()).collect()
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl From<&[Move]> for MoveSequence {
    fn from(moves: &[Move]) -> Self {
        Self {
            moves: SmallVec::from_slice(moves),
        }
    }
}

/// Whitespace-separated notation. Every token is checked before the
/// sequence is returned.
impl FromStr for MoveSequence {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Move>).collect()
    }
}

impl std::fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}
