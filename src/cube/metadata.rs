//! Cube identity and move history.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::CubeId;
use crate::moves::Move;

/// Identity plus the ordered history of applied moves.
///
/// History uses an `im::Vector` so cloning a cube (or snapshotting it)
/// shares the history structurally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeMetadata {
    /// Opaque identity assigned at construction.
    pub id: CubeId,

    /// Moves applied so far, oldest first.
    pub move_history: Vector<Move>,
}

impl CubeMetadata {
    /// Fresh metadata with a new id and empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: CubeId::next(),
            move_history: Vector::new(),
        }
    }

    /// Record a move.
    pub fn record(&mut self, m: Move) {
        self.move_history.push_back(m);
    }

    /// Most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.move_history.last().copied()
    }

    /// Drop the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.move_history.pop_back()
    }

    /// Forget all moves.
    pub fn clear_history(&mut self) {
        self.move_history = Vector::new();
    }
}

impl Default for CubeMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_pop() {
        let mut meta = CubeMetadata::new();
        assert_eq!(meta.last_move(), None);

        meta.record(Move::F);
        meta.record(Move::UPrime);
        assert_eq!(meta.move_history.len(), 2);
        assert_eq!(meta.last_move(), Some(Move::UPrime));

        assert_eq!(meta.pop(), Some(Move::UPrime));
        assert_eq!(meta.pop(), Some(Move::F));
        assert_eq!(meta.pop(), None);
    }

    #[test]
    fn test_clear_history_keeps_id() {
        let mut meta = CubeMetadata::new();
        let id = meta.id;
        meta.record(Move::R);
        meta.clear_history();
        assert!(meta.move_history.is_empty());
        assert_eq!(meta.id, id);
    }

    #[test]
    fn test_fresh_ids_differ() {
        assert_ne!(CubeMetadata::new().id, CubeMetadata::new().id);
    }
}
