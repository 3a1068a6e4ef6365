//! The cube controller.
//!
//! `Cube` exclusively owns the sticker state, the orientation and the move
//! history. Commands resolve logical moves through the orientation layer,
//! hand the resulting physical turn to the engine, then record history.
//!
//! ```
//! use rubik_cube::{Cube, Move};
//!
//! let mut cube = Cube::with_seed(42);
//! cube.apply_move(Move::F).unwrap();
//! assert!(!cube.is_solved());
//!
//! cube.undo_move().unwrap();
//! assert!(cube.is_solved());
//! assert!(cube.move_history().is_empty());
//! ```

use im::Vector;
use rand::Rng;
use tracing::debug;

use crate::core::{CubeConfig, CubeError, CubeId, CubeRng, CubeState};
use crate::engine::rotate_face;
use crate::moves::{Move, MoveDefinition, MoveSequence, RotationDirection};
use crate::orientation::{apply_axis_rotation, resolve_move, Axis, Orientation};

use super::metadata::CubeMetadata;
use super::snapshot::CubeSnapshot;

/// A 3x3x3 cube with orientation, history and a scramble RNG.
#[derive(Clone, Debug)]
pub struct Cube {
    state: CubeState,
    orientation: Orientation,
    metadata: CubeMetadata,
    rng: CubeRng,
    config: CubeConfig,
}

impl Cube {
    /// A solved cube with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CubeConfig::default())
    }

    /// A solved cube whose scrambles are drawn from a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(CubeConfig::default().with_seed(seed))
    }

    /// A solved cube with the given configuration.
    #[must_use]
    pub fn with_config(config: CubeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => CubeRng::new(seed),
            None => CubeRng::from_entropy(),
        };
        let metadata = CubeMetadata::new();
        debug!(cube = %metadata.id, seed = rng.seed(), "cube created");

        Self {
            state: CubeState::solved(),
            orientation: Orientation::identity(),
            metadata,
            rng,
            config,
        }
    }

    // === Queries ===

    /// Configuration this cube was built with.
    #[must_use]
    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    /// Opaque identity.
    #[must_use]
    pub fn id(&self) -> CubeId {
        self.metadata.id
    }

    /// Identity and move history.
    #[must_use]
    pub fn metadata(&self) -> &CubeMetadata {
        &self.metadata
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn move_history(&self) -> &Vector<Move> {
        &self.metadata.move_history
    }

    /// Current sticker grids.
    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Current role -> face mapping.
    #[must_use]
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// True if every face is a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Physical face and direction `m` would turn right now.
    #[must_use]
    pub fn map_move_to_face_and_direction(&self, m: Move) -> MoveDefinition {
        resolve_move(&self.orientation, m)
    }

    // === Commands ===

    /// Apply one move and record it.
    pub fn apply_move(&mut self, m: Move) -> Result<(), CubeError> {
        let MoveDefinition { face, direction } = self.map_move_to_face_and_direction(m);
        rotate_face(&mut self.state, face, direction)?;
        self.metadata.record(m);
        debug!(cube = %self.metadata.id, %m, %face, %direction, "move applied");
        Ok(())
    }

    /// Apply every move of a sequence, in order.
    pub fn apply_moves(&mut self, moves: &MoveSequence) -> Result<(), CubeError> {
        for m in moves.iter() {
            self.apply_move(m)?;
        }
        Ok(())
    }

    /// Parse whitespace-separated notation and apply it.
    ///
    /// The whole string is parsed first; an unknown token fails with
    /// `InvalidMove` before any move is applied.
    pub fn apply_notation(&mut self, notation: &str) -> Result<MoveSequence, CubeError> {
        let moves: MoveSequence = notation.parse()?;
        self.apply_moves(&moves)?;
        Ok(moves)
    }

    /// Undo the most recent move and return it.
    ///
    /// The move is re-resolved against the current orientation and its
    /// face turned the opposite way. Fails with `NoMoveToUndo` on an empty
    /// history.
    pub fn undo_move(&mut self) -> Result<Move, CubeError> {
        let last = self.metadata.last_move().ok_or(CubeError::NoMoveToUndo)?;
        let MoveDefinition { face, direction } = self.map_move_to_face_and_direction(last);
        rotate_face(&mut self.state, face, direction.inverse())?;
        self.metadata.pop();
        debug!(cube = %self.metadata.id, m = %last, "move undone");
        Ok(last)
    }

    /// Restore the solved grids and clear history.
    ///
    /// Orientation goes back to identity unless
    /// `CubeConfig::reset_orientation` is false.
    pub fn reset(&mut self) {
        self.state = CubeState::solved();
        self.metadata.clear_history();
        if self.config.reset_orientation {
            self.orientation = Orientation::identity();
        }
        debug!(cube = %self.metadata.id, "cube reset");
    }

    /// Apply `length` uniformly random moves from the cube's own RNG.
    pub fn scramble(&mut self, length: usize) -> Result<MoveSequence, CubeError> {
        let moves: MoveSequence = (0..length)
            .filter_map(|_| self.rng.choose(&Move::ALL).copied())
            .collect();
        self.apply_scramble(moves)
    }

    /// Scramble with `CubeConfig::scramble_length` moves.
    pub fn scramble_default(&mut self) -> Result<MoveSequence, CubeError> {
        self.scramble(self.config.scramble_length)
    }

    /// Apply `length` uniformly random moves drawn from `rng`.
    pub fn scramble_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        length: usize,
    ) -> Result<MoveSequence, CubeError> {
        let moves = MoveSequence::random(rng, length);
        self.apply_scramble(moves)
    }

    fn apply_scramble(&mut self, moves: MoveSequence) -> Result<MoveSequence, CubeError> {
        self.apply_moves(&moves)?;
        debug!(cube = %self.metadata.id, length = moves.len(), scramble = %moves, "cube scrambled");
        Ok(moves)
    }

    /// Rotate the whole cube. Stickers and history are untouched.
    pub fn apply_rotation(&mut self, axis: Axis, direction: RotationDirection) {
        apply_axis_rotation(&mut self.orientation, axis, direction);
        debug!(cube = %self.metadata.id, %axis, %direction, "cube reoriented");
    }

    // === Snapshots ===

    /// Capture the full cube.
    #[must_use]
    pub fn snapshot(&self) -> CubeSnapshot {
        CubeSnapshot {
            state: self.state.clone(),
            orientation: self.orientation,
            metadata: self.metadata.clone(),
            rng: self.rng.state(),
            config: self.config.clone(),
        }
    }

    /// Rebuild a cube from a snapshot after validating it.
    pub fn restore(snapshot: CubeSnapshot) -> Result<Self, CubeError> {
        snapshot.validate()?;
        debug!(cube = %snapshot.metadata.id, "cube restored");
        Ok(Self {
            state: snapshot.state,
            orientation: snapshot.orientation,
            metadata: snapshot.metadata,
            rng: CubeRng::from_state(&snapshot.rng),
            config: snapshot.config,
        })
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable dump of all six faces.
impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (face, grid) in self.state.iter() {
            writeln!(f, "{face} face: ")?;
            write!(f, "{grid}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}
