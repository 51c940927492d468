//! Editor session state
//!
//! Owns the live board, the asset placement list, and the tool/brush
//! configuration, and wires picks through the pure reducers in
//! [`super::engine`]. The surrounding event loop delivers picks one at a
//! time; each applied edit swaps in a freshly built board atomically.

use crate::board::{
    AssetPlacements, AssetTemplate, BoardDocument, BoardState, CellType, EdgeType, LightSettings,
    ObjectType,
};
use super::engine::{apply_object_brush, paint_cell, toggle_edge, EditFeedback};
use super::picking::{pick_ground_point, Pick};

/// Which layer the next pick edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTool {
    Cells,
    Edges,
    Objects,
}

/// Barrier value painted by the edge tool (toggling handles removal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeBrush {
    Wall,
    Door,
}

impl EdgeBrush {
    pub fn edge_type(self) -> EdgeType {
        match self {
            EdgeBrush::Wall => EdgeType::Wall,
            EdgeBrush::Door => EdgeType::Door,
        }
    }
}

/// Editor session: canonical state plus tool configuration
#[derive(Debug, Clone)]
pub struct EditorState {
    /// The board being edited
    pub board: BoardState,
    /// External asset placements (independent of the prop layer)
    pub assets: AssetPlacements,

    pub tool: EditorTool,
    pub cell_brush: CellType,
    pub edge_brush: EdgeBrush,
    pub object_brush: ObjectType,
    /// Settings copied onto every light placed while the light brush is active
    pub light_brush: LightSettings,
    /// Template used by the asset brush; only applies while the object brush
    /// is the eraser
    pub selected_template: Option<AssetTemplate>,

    /// Cell whose light is shown in the light panel
    pub selected_light: Option<(usize, usize)>,
    /// Asset placement shown in the transform panel
    pub selected_asset: Option<u64>,

    /// Unsaved changes
    pub dirty: bool,
    /// Last status message (shown in the status bar until replaced)
    pub status: Option<&'static str>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Fresh session over an empty board
    pub fn new() -> Self {
        Self {
            board: BoardState::empty(),
            assets: AssetPlacements::new(),
            tool: EditorTool::Cells,
            cell_brush: CellType::Floor,
            edge_brush: EdgeBrush::Wall,
            object_brush: ObjectType::Lever,
            light_brush: LightSettings::default(),
            selected_template: None,
            selected_light: None,
            selected_asset: None,
            dirty: false,
            status: None,
        }
    }

    /// Replace the session contents with a loaded document, resetting
    /// selections. Tool and brush configuration survives the load.
    pub fn load_document(&mut self, document: BoardDocument) {
        self.board = document.board;
        self.assets = document.assets;
        self.selected_light = None;
        self.selected_asset = None;
        self.dirty = false;
        self.status = None;
    }

    /// True while edge picks are resolvable
    pub fn edge_mode(&self) -> bool {
        self.tool == EditorTool::Edges
    }

    /// Resolve a ground-plane point under the current tool
    pub fn pick_at(&self, world_x: f32, world_z: f32) -> Pick {
        pick_ground_point(world_x, world_z, self.edge_mode())
    }

    /// Full pointer protocol: resolve the point, then apply the edit
    pub fn apply_ground_point(&mut self, world_x: f32, world_z: f32) -> EditFeedback {
        let pick = self.pick_at(world_x, world_z);
        self.apply_pick(pick)
    }

    /// Apply a discrete pick against the current tool and brushes
    pub fn apply_pick(&mut self, pick: Pick) -> EditFeedback {
        let feedback = match (self.tool, pick) {
            (EditorTool::Edges, Pick::Cell { .. }) => EditFeedback::CellPickInEdgeMode,
            (EditorTool::Edges, Pick::Edge { dir, x, y }) => {
                let (next, feedback) =
                    toggle_edge(&self.board, dir, x, y, self.edge_brush.edge_type());
                self.commit(next);
                feedback
            }
            (_, Pick::Edge { .. }) => EditFeedback::EdgePickIgnored,
            (EditorTool::Cells, Pick::Cell { x, y }) => {
                let (next, feedback) = paint_cell(&self.board, x, y, self.cell_brush);
                self.commit(next);
                feedback
            }
            (EditorTool::Objects, Pick::Cell { x, y }) => self.apply_object_pick(x, y),
        };
        self.status = feedback.message();
        feedback
    }

    /// Object-mode cell pick: asset toggle first, then the object brush
    fn apply_object_pick(&mut self, x: usize, y: usize) -> EditFeedback {
        if self.object_brush == ObjectType::None {
            if let Some(template) = self.selected_template.clone() {
                return self.toggle_asset(&template, x, y);
            }
        }

        let (next, feedback) =
            apply_object_brush(&self.board, x, y, self.object_brush, &self.light_brush);
        if feedback.changes_board() {
            self.commit(next);
            if self.object_brush == ObjectType::Light {
                self.selected_light = Some((x, y));
            } else if self.selected_light == Some((x, y)) {
                // The light at this cell was replaced or erased
                self.selected_light = None;
            }
        }
        feedback
    }

    /// Place the template at the cell, or remove the instance already there.
    /// Never touches the board itself.
    fn toggle_asset(&mut self, template: &AssetTemplate, x: usize, y: usize) -> EditFeedback {
        let (ax, ay) = (x as f32, y as f32);
        if let Some(id) = self.assets.find_at(&template.name, ax, ay) {
            self.assets.remove(id);
            if self.selected_asset == Some(id) {
                self.selected_asset = None;
            }
            self.dirty = true;
            EditFeedback::AssetRemoved(id)
        } else {
            let id = self.assets.place(template, ax, ay);
            self.selected_asset = Some(id);
            self.dirty = true;
            EditFeedback::AssetPlaced(id)
        }
    }

    fn commit(&mut self, next: BoardState) {
        self.board = next;
        self.dirty = true;
    }
}
