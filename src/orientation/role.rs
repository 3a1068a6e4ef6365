//! Logical roles and the role -> physical face mapping.
//!
//! A `Role` names a direction relative to the viewer (top, front, ...).
//! `Orientation` records which physical `Face` currently plays each role.
//! Moves are issued against roles; the orientation turns them into
//! physical faces.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::core::Face;

/// One of the six logical roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl Role {
    /// All roles.
    pub const ALL: [Role; 6] = [
        Role::Top,
        Role::Bottom,
        Role::Left,
        Role::Right,
        Role::Front,
        Role::Back,
    ];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Top => "top",
            Role::Bottom => "bottom",
            Role::Left => "left",
            Role::Right => "right",
            Role::Front => "front",
            Role::Back => "back",
        };
        f.write_str(name)
    }
}

/// Which physical face plays each logical role.
///
/// Always a bijection between the six roles and the six faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orientation {
    pub top: Face,
    pub bottom: Face,
    pub left: Face,
    pub right: Face,
    pub front: Face,
    pub back: Face,
}

impl Orientation {
    /// Every role addresses the face of the same name.
    pub const IDENTITY: Orientation = Orientation {
        top: Face::Top,
        bottom: Face::Bottom,
        left: Face::Left,
        right: Face::Right,
        front: Face::Front,
        back: Face::Back,
    };

    /// The identity orientation.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Physical face currently playing `role`.
    #[must_use]
    pub const fn face_for(&self, role: Role) -> Face {
        match role {
            Role::Top => self.top,
            Role::Bottom => self.bottom,
            Role::Left => self.left,
            Role::Right => self.right,
            Role::Front => self.front,
            Role::Back => self.back,
        }
    }

    /// Role currently addressing `face`, if any.
    #[must_use]
    pub fn role_of(&self, face: Face) -> Option<Role> {
        Role::ALL.into_iter().find(|&role| self.face_for(role) == face)
    }

    /// True if every physical face is addressed by exactly one role.
    #[must_use]
    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; 6];
        for role in Role::ALL {
            let index = self.face_for(role).index();
            if seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<Role> for Orientation {
    type Output = Face;

    fn index(&self, role: Role) -> &Self::Output {
        match role {
            Role::Top => &self.top,
            Role::Bottom => &self.bottom,
            Role::Left => &self.left,
            Role::Right => &self.right,
            Role::Front => &self.front,
            Role::Back => &self.back,
        }
    }
}
