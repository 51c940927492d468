//! Canonical board state
//!
//! Pure data with minimal behavior: terrain per cell, barrier per edge, one
//! prop slot per cell. Every edit clones the previous state and mutates the
//! clone, so earlier holders never observe the change.

use serde::{Serialize, Deserialize};
use super::grid::{
    cell_index, h_edge_index, v_edge_index, CELL_COUNT, H_EDGE_COUNT, V_EDGE_COUNT,
};
use super::objects::ObjectPlacement;

/// Terrain of one grid square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    #[default]
    Floor,
    Pit,
    Water,
}

impl CellType {
    /// True for terrain a bridge can span
    pub fn is_hollow(&self) -> bool {
        matches!(self, CellType::Pit | CellType::Water)
    }
}

/// Barrier state of one grid-line segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    #[default]
    None,
    Wall,
    Door,
}

/// The whole board: terrain, barriers, and prop slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub cells: [CellType; CELL_COUNT],
    pub h_edges: [EdgeType; H_EDGE_COUNT],
    pub v_edges: [EdgeType; V_EDGE_COUNT],
    pub objects: [ObjectPlacement; CELL_COUNT],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoardState {
    /// All-floor board with no barriers and no props
    pub fn empty() -> Self {
        Self {
            cells: [CellType::Floor; CELL_COUNT],
            h_edges: [EdgeType::None; H_EDGE_COUNT],
            v_edges: [EdgeType::None; V_EDGE_COUNT],
            objects: [ObjectPlacement::empty(); CELL_COUNT],
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> CellType {
        self.cells[cell_index(x, y)]
    }

    pub fn set_cell(&mut self, x: usize, y: usize, terrain: CellType) {
        self.cells[cell_index(x, y)] = terrain;
    }

    pub fn object(&self, x: usize, y: usize) -> ObjectPlacement {
        self.objects[cell_index(x, y)]
    }

    pub fn set_object(&mut self, x: usize, y: usize, placement: ObjectPlacement) {
        self.objects[cell_index(x, y)] = placement;
    }

    /// Horizontal edge at gridline y (0..=GRID_HEIGHT)
    pub fn h_edge(&self, x: usize, y: usize) -> EdgeType {
        self.h_edges[h_edge_index(x, y)]
    }

    pub fn set_h_edge(&mut self, x: usize, y: usize, edge: EdgeType) {
        self.h_edges[h_edge_index(x, y)] = edge;
    }

    /// Vertical edge at gridline x (0..=GRID_WIDTH)
    pub fn v_edge(&self, x: usize, y: usize) -> EdgeType {
        self.v_edges[v_edge_index(x, y)]
    }

    pub fn set_v_edge(&mut self, x: usize, y: usize, edge: EdgeType) {
        self.v_edges[v_edge_index(x, y)] = edge;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::objects::{ObjectKind, Rotation};

    #[test]
    fn test_empty_board_defaults() {
        let board = BoardState::empty();
        assert!(board.cells.iter().all(|&c| c == CellType::Floor));
        assert!(board.h_edges.iter().all(|&e| e == EdgeType::None));
        assert!(board.v_edges.iter().all(|&e| e == EdgeType::None));
        assert!(board.objects.iter().all(|o| o.is_empty()));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = BoardState::empty();
        let snapshot = board.clone();

        board.set_cell(1, 2, CellType::Water);
        board.set_v_edge(2, 1, EdgeType::Wall);
        board.set_object(0, 0, ObjectPlacement { kind: ObjectKind::Torch, rotation: Rotation::Deg90 });

        assert_eq!(snapshot.cell(1, 2), CellType::Floor);
        assert_eq!(snapshot.v_edge(2, 1), EdgeType::None);
        assert!(snapshot.object(0, 0).is_empty());
    }

    #[test]
    fn test_board_wire_field_names() {
        let json = serde_json::to_value(BoardState::empty()).unwrap();
        assert_eq!(json["cells"].as_array().unwrap().len(), CELL_COUNT);
        assert_eq!(json["hEdges"].as_array().unwrap().len(), H_EDGE_COUNT);
        assert_eq!(json["vEdges"].as_array().unwrap().len(), V_EDGE_COUNT);
        assert_eq!(json["objects"].as_array().unwrap().len(), CELL_COUNT);
        assert_eq!(json["cells"][0], "floor");
    }
}
