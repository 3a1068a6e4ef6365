//! # rubik-cube
//!
//! State and legal transformations of a 3x3x3 Rubik's Cube.
//!
//! ## Design Principles
//!
//! 1. **Closed Sets**: Faces, colors, moves and axes are enums. The
//!    adjacency and orientation tables are exhaustive over them.
//!
//! 2. **Tables as Data**: The neighbor table and the whole-cube rotation
//!    permutations are constants, separate from the traversal logic.
//!
//! 3. **Single Owner**: `Cube` owns all mutable state and only lends
//!    mutable access to the engine and the orientation layer.
//!
//! ## Architecture
//!
//! - **Engine**: turns one physical face and cycles its four bordering
//!   strips. Knows nothing about orientation.
//!
//! - **Orientation**: maps logical roles (top, front, ...) to physical
//!   faces, so moves issued after a whole-cube rotation act on the
//!   geometrically correct face.
//!
//! - **Controller**: resolves a move via the orientation, turns via the
//!   engine, records history. Undo, reset and scramble live here.
//!
//! ## Modules
//!
//! - `core`: Colors, faces, grids, state, RNG, configuration, errors
//! - `moves`: Moves, directions, move sequences
//! - `engine`: Face-rotation engine and adjacency table
//! - `orientation`: Roles, orientation mapping, whole-cube rotations
//! - `cube`: The `Cube` controller, metadata and snapshots

pub mod core;
pub mod moves;
pub mod engine;
pub mod orientation;
pub mod cube;

// Re-export commonly used types
pub use crate::core::{
    Color, Face, FaceMap, StickerGrid,
    CubeState, STICKERS_PER_COLOR, CubeRng, CubeRngState,
    CubeConfig, CubeError, CubeId,
};

pub use crate::moves::{Move, MoveDefinition, MoveSequence, RotationDirection};

pub use crate::engine::{rotate_face, Line, Neighbor};

pub use crate::orientation::{Axis, Orientation, Role, resolve_move, apply_axis_rotation};

pub use crate::cube::{Cube, CubeMetadata, CubeSnapshot};
