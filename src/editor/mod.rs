//! Board Editor
//!
//! The pick/edit protocol over the board model:
//! - Ground-plane picking with border snap (cell and edge addresses)
//! - Pure edit reducers with success/rejection feedback
//! - Session state tying board, assets, tools, and brushes together

mod engine;
mod picking;
mod state;

pub use engine::*;
pub use picking::*;
pub use state::*;
