//! BOARDWRIGHT: a 3D dungeon-board editor core
//!
//! The authoritative model and edit protocol behind a 4x4 grid level editor:
//! - Per-cell terrain (floor / pit / water)
//! - Per-edge barriers (wall / door) on the grid lines
//! - One built-in prop per cell (lever, trapdoor, torch, bridge, point light)
//! - Free-floating external asset placements
//! - Deterministic pointer picking and a flat JSON save format
//!
//! Rendering, cameras, and UI live in host collaborators: they read
//! [`board::BoardState`] and the asset list, and feed ground-plane points
//! into [`editor::EditorState`].

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod board;
pub mod editor;
