//! Whole-cube rotations and move resolution.
//!
//! Rotating the whole cube about an axis does not move any sticker; it
//! only relabels which physical face plays each role. Each of the six
//! (axis, direction) pairs maps to a fixed orientation, kept here as
//! constant data.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{CubeError, Face};
use crate::moves::{Move, MoveDefinition, RotationDirection};

use super::role::Orientation;

/// Whole-cube rotation axis.
///
/// - `X`: front / top / back / bottom cycle
/// - `Y`: front / left / back / right cycle
/// - `Z`: top / left / bottom / right cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
            Axis::Z => f.write_str("Z"),
        }
    }
}

impl FromStr for Axis {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Axis::X),
            "Y" | "y" => Ok(Axis::Y),
            "Z" | "z" => Ok(Axis::Z),
            _ => Err(CubeError::InvalidAxis(s.to_string())),
        }
    }
}

const fn orientation(
    top: Face,
    bottom: Face,
    left: Face,
    right: Face,
    front: Face,
    back: Face,
) -> Orientation {
    Orientation {
        top,
        bottom,
        left,
        right,
        front,
        back,
    }
}

use Face::{Back, Bottom, Front, Left, Right, Top};

/// Orientation after each (axis, direction) rotation.
///
/// Columns: top, bottom, left, right, front, back.
pub const AXIS_ROTATIONS: [(Axis, RotationDirection, Orientation); 6] = [
    (Axis::X, RotationDirection::Clockwise, orientation(Front, Back, Left, Right, Bottom, Top)),
    (Axis::X, RotationDirection::CounterClockwise, orientation(Back, Front, Left, Right, Top, Bottom)),
    (Axis::Y, RotationDirection::Clockwise, orientation(Top, Bottom, Front, Back, Right, Left)),
    (Axis::Y, RotationDirection::CounterClockwise, orientation(Top, Bottom, Back, Front, Left, Right)),
    (Axis::Z, RotationDirection::Clockwise, orientation(Left, Right, Bottom, Top, Front, Back)),
    (Axis::Z, RotationDirection::CounterClockwise, orientation(Right, Left, Top, Bottom, Back, Front)),
];

/// Look up the orientation a rotation produces.
#[must_use]
pub fn axis_rotation(axis: Axis, direction: RotationDirection) -> Orientation {
    let index = match (axis, direction) {
        (Axis::X, RotationDirection::Clockwise) => 0,
        (Axis::X, RotationDirection::CounterClockwise) => 1,
        (Axis::Y, RotationDirection::Clockwise) => 2,
        (Axis::Y, RotationDirection::CounterClockwise) => 3,
        (Axis::Z, RotationDirection::Clockwise) => 4,
        (Axis::Z, RotationDirection::CounterClockwise) => 5,
    };
    AXIS_ROTATIONS[index].2
}

/// Replace `orientation` with the one produced by rotating about `axis`.
///
/// Stickers are not touched.
pub fn apply_axis_rotation(orientation: &mut Orientation, axis: Axis, direction: RotationDirection) {
    *orientation = axis_rotation(axis, direction);
}

/// Resolve a move to the physical face and direction it turns.
#[must_use]
pub fn resolve_move(orientation: &Orientation, m: Move) -> MoveDefinition {
    MoveDefinition {
        face: orientation.face_for(m.role()),
        direction: m.direction(),
    }
}
