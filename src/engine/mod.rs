//! Face-rotation engine.
//!
//! Pure state mutation: given a `CubeState`, a physical face and a
//! direction, turn that face and propagate the turn to its four
//! neighbors. The engine knows nothing about orientation or history.
//!
//! ## Key Types
//!
//! - `Neighbor` / `Line`: one bordering strip of a face
//! - `ADJACENCY`: the constant neighbor table
//! - `rotate_face`: apply one quarter turn

pub mod adjacency;
pub mod rotation;

pub use adjacency::{neighbors, Line, Neighbor, ADJACENCY};
pub use rotation::rotate_face;
