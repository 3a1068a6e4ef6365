//! Core cube types: colors, faces, sticker grids, state, RNG, configuration.
//!
//! This module contains the data the engine operates on. It holds no
//! rotation logic; see `engine` and `orientation` for that.

pub mod color;
pub mod face;
pub mod grid;
pub mod state;
pub mod rng;
pub mod config;
pub mod error;
pub mod id;

pub use color::Color;
pub use face::{Face, FaceMap};
pub use grid::{StickerGrid, Strip, GRID_SIZE};
pub use state::{CubeState, STICKERS_PER_COLOR};
pub use rng::{CubeRng, CubeRngState};
pub use config::CubeConfig;
pub use error::CubeError;
pub use id::CubeId;
