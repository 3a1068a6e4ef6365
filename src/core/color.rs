//! Sticker colors.
//!
//! A 3x3x3 cube carries exactly six colors, one per face in the solved
//! state. Colors are a closed set; the engine never creates or destroys
//! them, it only moves stickers around.

use serde::{Deserialize, Serialize};

/// One of the six sticker colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Orange,
}

impl Color {
    /// All colors in declaration order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
        Color::Orange,
    ];

    /// Dense index (0..6) for table lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case color name, as used by the state dump.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::White => "white",
            Color::Orange => "orange",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Green.to_string(), "green");
        assert_eq!(Color::Orange.to_string(), "orange");
    }
}
