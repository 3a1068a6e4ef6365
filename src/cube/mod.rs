//! Cube controller: owns state, orientation and history.
//!
//! ## Key Types
//!
//! - `Cube`: command and query surface
//! - `CubeMetadata`: identity plus move history
//! - `CubeSnapshot`: serializable checkpoint

pub mod controller;
pub mod metadata;
pub mod snapshot;

pub use controller::Cube;
pub use metadata::CubeMetadata;
pub use snapshot::CubeSnapshot;
