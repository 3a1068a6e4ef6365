//! Face adjacency table.
//!
//! For every physical face, the four strips on neighboring faces that
//! border it, listed in cyclic order around the face. The table is a
//! geometric constant of the cube and is independent of turn direction.
//!
//! `reversed` marks a strip whose natural order (left to right for rows,
//! top to bottom for columns) runs against the cyclic traversal.
//!
//! | Face   | 1               | 2               | 3                 | 4                 |
//! |--------|-----------------|-----------------|-------------------|-------------------|
//! | Front  | Top row 2       | Right col 0     | Bottom row 0 (rev)| Left col 2 (rev)  |
//! | Back   | Top row 0 (rev) | Left col 0      | Bottom row 2      | Right col 2 (rev) |
//! | Left   | Top col 0       | Front col 0     | Bottom col 0      | Back col 2 (rev)  |
//! | Right  | Top col 2       | Back col 0 (rev)| Bottom col 2      | Front col 2       |
//! | Top    | Back row 0 (rev)| Right row 0     | Front row 0       | Left row 0 (rev)  |
//! | Bottom | Front row 2     | Right row 2     | Back row 2 (rev)  | Left row 2 (rev)  |

use serde::{Deserialize, Serialize};

use crate::core::{Face, StickerGrid, Strip};

/// A single row or column of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Row(usize),
    Col(usize),
}

impl Line {
    /// Copy the stickers on this line, in natural order.
    #[must_use]
    pub fn read(self, grid: &StickerGrid) -> Strip {
        match self {
            Line::Row(r) => grid.row(r),
            Line::Col(c) => grid.col(c),
        }
    }

    /// Overwrite the stickers on this line, in natural order.
    pub fn write(self, grid: &mut StickerGrid, strip: Strip) {
        match self {
            Line::Row(r) => grid.set_row(r, strip),
            Line::Col(c) => grid.set_col(c, strip),
        }
    }
}

/// One bordering strip of a turned face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighbor {
    /// Face the strip lives on.
    pub face: Face,

    /// Row or column on that face.
    pub line: Line,

    /// Natural order runs against the cyclic traversal.
    pub reversed: bool,
}

impl Neighbor {
    const fn new(face: Face, line: Line, reversed: bool) -> Self {
        Self { face, line, reversed }
    }
}

use Face::{Back, Bottom, Front, Left, Right, Top};
use Line::{Col, Row};

/// Adjacency table indexed by `Face::index`.
pub const ADJACENCY: [[Neighbor; 4]; 6] = [
    // Front
    [
        Neighbor::new(Top, Row(2), false),
        Neighbor::new(Right, Col(0), false),
        Neighbor::new(Bottom, Row(0), true),
        Neighbor::new(Left, Col(2), true),
    ],
    // Back
    [
        Neighbor::new(Top, Row(0), true),
        Neighbor::new(Left, Col(0), false),
        Neighbor::new(Bottom, Row(2), false),
        Neighbor::new(Right, Col(2), true),
    ],
    // Left
    [
        Neighbor::new(Top, Col(0), false),
        Neighbor::new(Front, Col(0), false),
        Neighbor::new(Bottom, Col(0), false),
        Neighbor::new(Back, Col(2), true),
    ],
    // Right
    [
        Neighbor::new(Top, Col(2), false),
        Neighbor::new(Back, Col(0), true),
        Neighbor::new(Bottom, Col(2), false),
        Neighbor::new(Front, Col(2), false),
    ],
    // Top
    [
        Neighbor::new(Back, Row(0), true),
        Neighbor::new(Right, Row(0), false),
        Neighbor::new(Front, Row(0), false),
        Neighbor::new(Left, Row(0), true),
    ],
    // Bottom
    [
        Neighbor::new(Front, Row(2), false),
        Neighbor::new(Right, Row(2), false),
        Neighbor::new(Back, Row(2), true),
        Neighbor::new(Left, Row(2), true),
    ],
];

/// The four bordering strips of `face`, in cyclic order.
#[must_use]
pub fn neighbors(face: Face) -> &'static [Neighbor; 4] {
    &ADJACENCY[face.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_row_matches_geometry() {
        assert_eq!(
            neighbors(Face::Front),
            &[
                Neighbor::new(Top, Row(2), false),
                Neighbor::new(Right, Col(0), false),
                Neighbor::new(Bottom, Row(0), true),
                Neighbor::new(Left, Col(2), true),
            ]
        );
    }

    #[test]
    fn test_neighbors_exclude_self_and_opposite() {
        let opposite = |face: Face| match face {
            Front => Back,
            Back => Front,
            Left => Right,
            Right => Left,
            Top => Bottom,
            Bottom => Top,
        };

        for face in Face::ALL {
            let ns = neighbors(face);
            let mut faces: Vec<_> = ns.iter().map(|n| n.face).collect();
            assert!(!faces.contains(&face), "{face} borders itself");
            assert!(!faces.contains(&opposite(face)), "{face} borders its opposite");
            faces.sort();
            faces.dedup();
            assert_eq!(faces.len(), 4, "{face} has repeated neighbors");
        }
    }

    #[test]
    fn test_lines_are_on_the_border() {
        for face in Face::ALL {
            for n in neighbors(face) {
                let index = match n.line {
                    Line::Row(i) | Line::Col(i) => i,
                };
                assert!(index == 0 || index == 2, "{face}: {n:?} is a middle slice");
            }
        }
    }

    #[test]
    fn test_every_border_strip_is_used_once() {
        // Each of the 24 outer strips (4 per face) borders exactly one face.
        let mut seen = Vec::new();
        for face in Face::ALL {
            for n in neighbors(face) {
                assert!(!seen.contains(&(n.face, n.line)), "{n:?} used twice");
                seen.push((n.face, n.line));
            }
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_line_read_write() {
        let mut grid = StickerGrid::filled(crate::core::Color::White);
        let strip = [
            crate::core::Color::Red,
            crate::core::Color::Green,
            crate::core::Color::Blue,
        ];

        Line::Col(1).write(&mut grid, strip);
        assert_eq!(Line::Col(1).read(&grid), strip);
        assert_eq!(Line::Row(0).read(&grid)[1], crate::core::Color::Red);
    }
}
