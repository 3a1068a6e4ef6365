//! Orientation layer: logical roles, whole-cube rotations, move resolution.
//!
//! ## Key Types
//!
//! - `Role`: logical face name (top, front, ...)
//! - `Orientation`: role -> physical face bijection
//! - `Axis`: whole-cube rotation axis
//! - `resolve_move`: move -> (physical face, direction)

pub mod role;
pub mod axis;

pub use role::{Orientation, Role};
pub use axis::{apply_axis_rotation, axis_rotation, resolve_move, Axis, AXIS_ROTATIONS};
