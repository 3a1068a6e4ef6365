//! Quarter turns of a single physical face.
//!
//! A turn has two parts:
//!
//! 1. The face's own grid is rotated 90 degrees (`StickerGrid::rotated`).
//! 2. The four bordering strips on neighboring faces are cycled one step
//!    around the face.
//!
//! Strips are read into traversal order (reversing flagged strips), shifted,
//! then written back from traversal order (reversing flagged strips again).
//! This makes every turn an exact 4-cycle of the 12 border stickers, so
//! clockwise and counter-clockwise are inverses and four equal turns are
//! the identity.

use tracing::trace;

use crate::core::{CubeError, CubeState, Face, Strip};
use crate::moves::RotationDirection;

use super::adjacency::{neighbors, Neighbor};

/// Turn `face` a quarter in `direction`, updating its four neighbors.
///
/// Touches exactly five grids. Fails with `InvalidFace` if the state is
/// missing the face or any of its neighbors; in that case nothing is
/// modified.
pub fn rotate_face(
    state: &mut CubeState,
    face: Face,
    direction: RotationDirection,
) -> Result<(), CubeError> {
    let ring = neighbors(face);

    let turned = state
        .grid(face)
        .ok_or_else(|| CubeError::InvalidFace(face.to_string()))?
        .rotated(direction);

    let strips = [
        extract(state, &ring[0])?,
        extract(state, &ring[1])?,
        extract(state, &ring[2])?,
        extract(state, &ring[3])?,
    ];
    trace!(%face, %direction, ?strips, "extracted border strips");

    // Clockwise: each slot takes its cyclic predecessor's strip.
    let shift = match direction {
        RotationDirection::Clockwise => 3,
        RotationDirection::CounterClockwise => 1,
    };

    state[face] = turned;
    for (i, neighbor) in ring.iter().enumerate() {
        insert(state, neighbor, strips[(i + shift) % 4])?;
    }
    trace!(%face, %direction, "face turned");

    Ok(())
}

fn extract(state: &CubeState, neighbor: &Neighbor) -> Result<Strip, CubeError> {
    let grid = state
        .grid(neighbor.face)
        .ok_or_else(|| CubeError::InvalidFace(neighbor.face.to_string()))?;
    let mut strip = neighbor.line.read(grid);
    if neighbor.reversed {
        strip.reverse();
    }
    Ok(strip)
}

// `strip` arrives in traversal order, so flagged lines are reversed again
// on the way out. Writing it unreversed would break the inverse and period-4
// laws on any non-solved state.
fn insert(state: &mut CubeState, neighbor: &Neighbor, mut strip: Strip) -> Result<(), CubeError> {
    let grid = state
        .grid_mut(neighbor.face)
        .ok_or_else(|| CubeError::InvalidFace(neighbor.face.to_string()))?;
    if neighbor.reversed {
        strip.reverse();
    }
    neighbor.line.write(grid, strip);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    /// A state where every sticker on a face is distinguishable by
    /// position: each cell gets a color derived from (face, row, col).
    fn patterned() -> CubeState {
        let mut state = CubeState::solved();
        for face in Face::ALL {
            for r in 0..3 {
                for c in 0..3 {
                    state[face][(r, c)] = Color::ALL[(face.index() + r * 3 + c) % 6];
                }
            }
        }
        state
    }

    #[test]
    fn test_insert_reverses_flagged_line() {
        let mut state = patterned();
        let flagged = neighbors(Face::Front)[2];
        assert!(flagged.reversed);

        let strip = [Color::Red, Color::Green, Color::Blue];
        insert(&mut state, &flagged, strip).unwrap();

        assert_eq!(flagged.line.read(&state[flagged.face]), [Color::Blue, Color::Green, Color::Red]);
        assert_eq!(extract(&state, &flagged).unwrap(), strip);
    }

    #[test]
    fn test_insert_keeps_unflagged_line() {
        let mut state = patterned();
        let plain = neighbors(Face::Front)[0];
        assert!(!plain.reversed);

        let strip = [Color::Red, Color::Green, Color::Blue];
        insert(&mut state, &plain, strip).unwrap();

        assert_eq!(plain.line.read(&state[plain.face]), strip);
    }

    #[test]
    fn test_front_clockwise_moves_borders() {
        let before = patterned();
        let mut state = before.clone();
        rotate_face(&mut state, Face::Front, RotationDirection::Clockwise).unwrap();

        let rev = |mut s: Strip| {
            s.reverse();
            s
        };

        assert_eq!(state[Face::Top].row(2), rev(before[Face::Left].col(2)));
        assert_eq!(state[Face::Right].col(0), before[Face::Top].row(2));
        assert_eq!(state[Face::Bottom].row(0), rev(before[Face::Right].col(0)));
        assert_eq!(state[Face::Left].col(2), before[Face::Bottom].row(0));
        assert_eq!(
            state[Face::Front],
            before[Face::Front].rotated(RotationDirection::Clockwise)
        );
    }

    #[test]
    fn test_front_counter_clockwise_moves_borders() {
        let before = patterned();
        let mut state = before.clone();
        rotate_face(&mut state, Face::Front, RotationDirection::CounterClockwise).unwrap();

        let rev = |mut s: Strip| {
            s.reverse();
            s
        };

        assert_eq!(state[Face::Top].row(2), before[Face::Right].col(0));
        assert_eq!(state[Face::Right].col(0), rev(before[Face::Bottom].row(0)));
        assert_eq!(state[Face::Bottom].row(0), before[Face::Left].col(2));
        assert_eq!(state[Face::Left].col(2), rev(before[Face::Top].row(2)));
    }

    #[test]
    fn test_opposite_face_untouched() {
        let before = patterned();
        for (face, opposite) in [
            (Face::Front, Face::Back),
            (Face::Left, Face::Right),
            (Face::Top, Face::Bottom),
        ] {
            let mut state = before.clone();
            rotate_face(&mut state, face, RotationDirection::Clockwise).unwrap();
            assert_eq!(state[opposite], before[opposite]);

            let mut state = before.clone();
            rotate_face(&mut state, opposite, RotationDirection::CounterClockwise).unwrap();
            assert_eq!(state[face], before[face]);
        }
    }

    #[test]
    fn test_neighbor_middle_slices_untouched() {
        let before = patterned();
        let mut state = before.clone();
        rotate_face(&mut state, Face::Top, RotationDirection::Clockwise).unwrap();

        for face in [Face::Front, Face::Back, Face::Left, Face::Right] {
            assert_eq!(state[face].row(1), before[face].row(1));
            assert_eq!(state[face].row(2), before[face].row(2));
        }
    }

    #[test]
    fn test_clockwise_then_counter_clockwise_is_identity() {
        let before = patterned();
        for face in Face::ALL {
            let mut state = before.clone();
            rotate_face(&mut state, face, RotationDirection::Clockwise).unwrap();
            assert_ne!(state, before, "{face} turn changed nothing");
            rotate_face(&mut state, face, RotationDirection::CounterClockwise).unwrap();
            assert_eq!(state, before, "{face} turn not undone");
        }
    }

    #[test]
    fn test_four_turns_is_identity() {
        let before = patterned();
        for face in Face::ALL {
            for direction in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
                let mut state = before.clone();
                for _ in 0..4 {
                    rotate_face(&mut state, face, direction).unwrap();
                }
                assert_eq!(state, before, "{face} {direction} has order != 4");
            }
        }
    }

    #[test]
    fn test_color_counts_preserved() {
        let mut state = CubeState::solved();
        for face in Face::ALL {
            rotate_face(&mut state, face, RotationDirection::Clockwise).unwrap();
            assert_eq!(state.color_counts(), [9; 6]);
        }
    }
}
