//! Error taxonomy for cube commands.
//!
//! Every fallible operation validates its input before touching any state,
//! so an `Err` always means the cube is exactly as it was before the call.

use thiserror::Error;

/// Errors surfaced by the cube engine.
#[derive(Debug, Error)]
pub enum CubeError {
    /// Symbol outside the 12 legal quarter-turn moves.
    #[error("invalid move: {0:?}")]
    InvalidMove(String),

    /// Face name or index outside the six physical faces, or a face with no
    /// grid in the cube state.
    #[error("invalid face: {0}")]
    InvalidFace(String),

    /// Axis name outside X, Y, Z.
    #[error("invalid axis: {0:?}")]
    InvalidAxis(String),

    /// Undo requested with an empty move history.
    #[error("no move to undo")]
    NoMoveToUndo,

    /// A restored snapshot breaks a cube invariant.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Snapshot bytes could not be encoded or decoded.
    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}
