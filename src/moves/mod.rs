//! Quarter-turn moves, turn directions and move sequences.

pub mod notation;

pub use notation::{Move, MoveDefinition, MoveSequence, RotationDirection};
