//! Mosaic API - Shared types and wire protocol for the authoring surface.

mod ids;
mod element;
mod container;
mod payload;

pub use ids::*;
pub use element::*;
pub use container::*;
pub use payload::*;
