//! External asset placements
//!
//! User-imported 3D models sit in a side list, independent of the per-cell
//! prop layer: a cell can hold a built-in prop and any number of external
//! assets at once. Placements are keyed by id; position, scale, and offset
//! are mutated in place by the drag collaborator through the clamping
//! mutators below.

use serde::{Serialize, Deserialize};
use super::grid::{GRID_WIDTH, GRID_HEIGHT};

/// Clamp ranges shared by the drag mutators and the document codec
pub mod limits {
    /// Minimum uniform scale for a placed asset
    pub const MIN_SCALE: f32 = 0.3;
    /// Maximum uniform scale
    pub const MAX_SCALE: f32 = 3.0;
    /// Lowest vertical offset (sunk into a pit)
    pub const MIN_Y_OFFSET: f32 = -1.0;
    /// Highest vertical offset
    pub const MAX_Y_OFFSET: f32 = 3.0;
}

/// A loaded model template, produced by the asset-loading collaborator.
/// The edit engine only ever references it by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTemplate {
    pub name: String,
    /// Source location, carried into saved documents so a reload can refetch
    pub url: String,
}

impl AssetTemplate {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into() }
    }
}

/// One placed instance of an external asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPlacement {
    /// Unique, never re-issued within a session
    pub id: u64,
    /// Template name this instance was created from
    pub name: String,
    #[serde(default)]
    pub url: String,
    /// Continuous cell coordinates, clamped into [0, GRID_WIDTH - 1]
    pub x: f32,
    /// Continuous cell coordinates, clamped into [0, GRID_HEIGHT - 1]
    pub y: f32,
    pub scale: f32,
    pub y_offset: f32,
    /// Yaw in degrees, wrapped into [0, 360)
    pub rotation: f32,
}

pub(crate) fn clamp_x(x: f32) -> f32 {
    x.clamp(0.0, (GRID_WIDTH - 1) as f32)
}

pub(crate) fn clamp_y(y: f32) -> f32 {
    y.clamp(0.0, (GRID_HEIGHT - 1) as f32)
}

pub(crate) fn clamp_scale(scale: f32) -> f32 {
    scale.clamp(limits::MIN_SCALE, limits::MAX_SCALE)
}

pub(crate) fn clamp_y_offset(offset: f32) -> f32 {
    offset.clamp(limits::MIN_Y_OFFSET, limits::MAX_Y_OFFSET)
}

pub(crate) fn wrap_rotation(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

/// The asset placement list plus its id allocator
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPlacements {
    items: Vec<AssetPlacement>,
    next_id: u64,
}

impl Default for AssetPlacements {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetPlacements {
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: 1 }
    }

    /// Rebuild from loaded placements, advancing the allocator past every
    /// explicit id so it never re-issues one.
    pub fn from_loaded(items: Vec<AssetPlacement>) -> Self {
        let next_id = items.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        Self { items, next_id }
    }

    /// Place a new instance at a cell with default scale/offset/rotation.
    /// Returns the fresh id.
    pub fn place(&mut self, template: &AssetTemplate, x: f32, y: f32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(AssetPlacement {
            id,
            name: template.name.clone(),
            url: template.url.clone(),
            x: clamp_x(x),
            y: clamp_y(y),
            scale: 1.0,
            y_offset: 0.0,
            rotation: 0.0,
        });
        id
    }

    /// Remove a placement by id. Returns true if it existed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.items.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&AssetPlacement> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Find a placement of the given template sitting exactly at (x, y).
    /// Dragged instances at fractional positions no longer match.
    pub fn find_at(&self, name: &str, x: f32, y: f32) -> Option<u64> {
        self.items
            .iter()
            .find(|p| p.name == name && p.x == x && p.y == y)
            .map(|p| p.id)
    }

    /// Move a placement, clamping into grid bounds. Returns true if it exists.
    pub fn move_to(&mut self, id: u64, x: f32, y: f32) -> bool {
        self.with_item(id, |p| {
            p.x = clamp_x(x);
            p.y = clamp_y(y);
        })
    }

    /// Adjust scale by a delta, clamped to the legal range
    pub fn scale_by(&mut self, id: u64, delta: f32) -> bool {
        self.with_item(id, |p| p.scale = clamp_scale(p.scale + delta))
    }

    pub fn set_scale(&mut self, id: u64, scale: f32) -> bool {
        self.with_item(id, |p| p.scale = clamp_scale(scale))
    }

    pub fn set_y_offset(&mut self, id: u64, offset: f32) -> bool {
        self.with_item(id, |p| p.y_offset = clamp_y_offset(offset))
    }

    pub fn set_rotation(&mut self, id: u64, degrees: f32) -> bool {
        self.with_item(id, |p| p.rotation = wrap_rotation(degrees))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetPlacement> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[AssetPlacement] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn with_item(&mut self, id: u64, mutate: impl FnOnce(&mut AssetPlacement)) -> bool {
        match self.items.iter_mut().find(|p| p.id == id) {
            Some(item) => {
                mutate(item);
                true
            }
            None => false,
        }
    }
}
