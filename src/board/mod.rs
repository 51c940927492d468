//! Board module - the authoritative dungeon board model
//!
//! Everything the editor edits and the renderer draws:
//! - Fixed 4x4 grid addressing for cells and edges
//! - Terrain, barrier, and prop state with copy-on-write updates
//! - External asset placements with clamped drag mutators
//! - JSON document codec with per-field fallback on malformed input

mod assets;
mod document;
mod grid;
mod objects;
mod sample;
mod state;

pub use assets::*;
pub use document::*;
pub use grid::*;
pub use objects::*;
pub use sample::*;
pub use state::*;
