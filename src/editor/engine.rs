//! Edit engine - pure reducers over the board state
//!
//! Every entry point takes the current board by reference and returns a new
//! board plus a feedback classification. A rejected edit returns an
//! untouched clone, so the caller can discard it and keep the original;
//! readers holding the previous state never observe a partial update.

use crate::board::{
    BoardState, CellType, EdgeType, LightSettings, ObjectKind, ObjectPlacement, ObjectType,
    Rotation,
};
use super::picking::EdgeDir;

/// How an edit attempt was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditClass {
    /// The board or asset list changed
    Applied,
    /// The edit was refused and nothing changed
    Rejected,
    /// The pick cannot be used with the active tool; guidance was issued
    ModeMismatch,
    /// Silently dropped (edge pick outside edge mode)
    Ignored,
}

/// Outcome of one edit attempt, carrying the status-bar feedback
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditFeedback {
    TerrainPainted(CellType),
    ObjectPlaced(ObjectType),
    /// An already-matching prop was turned a quarter step instead
    ObjectRotated(ObjectType, Rotation),
    ObjectCleared,
    EdgeSet(EdgeType),
    EdgeCleared,
    AssetPlaced(u64),
    AssetRemoved(u64),
    BridgeRequiresWaterOrPit,
    CellPickInEdgeMode,
    EdgePickIgnored,
}

impl EditFeedback {
    pub fn classification(&self) -> EditClass {
        match self {
            EditFeedback::BridgeRequiresWaterOrPit => EditClass::Rejected,
            EditFeedback::CellPickInEdgeMode => EditClass::ModeMismatch,
            EditFeedback::EdgePickIgnored => EditClass::Ignored,
            _ => EditClass::Applied,
        }
    }

    /// Transient status-bar message, if this outcome warrants one
    pub fn message(&self) -> Option<&'static str> {
        match self {
            EditFeedback::BridgeRequiresWaterOrPit => Some("Bridge requires water or pit"),
            EditFeedback::CellPickInEdgeMode => Some("Switch to Cells or Objects mode"),
            _ => None,
        }
    }

    /// True when the board itself (not the asset list) was modified
    pub fn changes_board(&self) -> bool {
        matches!(
            self,
            EditFeedback::TerrainPainted(_)
                | EditFeedback::ObjectPlaced(_)
                | EditFeedback::ObjectRotated(..)
                | EditFeedback::ObjectCleared
                | EditFeedback::EdgeSet(_)
                | EditFeedback::EdgeCleared
        )
    }
}

/// Paint terrain onto a cell. Repainting a bridged cell to floor clears the
/// bridge - a bridge cannot span solid ground.
pub fn paint_cell(board: &BoardState, x: usize, y: usize, brush: CellType) -> (BoardState, EditFeedback) {
    let mut next = board.clone();
    next.set_cell(x, y, brush);
    if brush == CellType::Floor && next.object(x, y).object_type() == ObjectType::Bridge {
        next.set_object(x, y, ObjectPlacement::empty());
    }
    (next, EditFeedback::TerrainPainted(brush))
}

/// Apply the object brush to a cell.
///
/// - `light` places a light carrying a copy of the light brush, keeping the
///   previous rotation so re-lighting a cell does not spin the fixture
/// - `none` erases
/// - `bridge` is refused unless the terrain is water or pit
/// - any other brush rotates an already-matching prop a quarter turn, and
///   otherwise replaces the slot at rotation 0
pub fn apply_object_brush(
    board: &BoardState,
    x: usize,
    y: usize,
    brush: ObjectType,
    light_brush: &LightSettings,
) -> (BoardState, EditFeedback) {
    let previous = board.object(x, y);
    let mut next = board.clone();

    match brush {
        ObjectType::Light => {
            next.set_object(
                x,
                y,
                ObjectPlacement { kind: ObjectKind::Light(*light_brush), rotation: previous.rotation },
            );
            (next, EditFeedback::ObjectPlaced(ObjectType::Light))
        }
        ObjectType::None => {
            next.set_object(x, y, ObjectPlacement::empty());
            (next, EditFeedback::ObjectCleared)
        }
        ObjectType::Bridge if !board.cell(x, y).is_hollow() => {
            (next, EditFeedback::BridgeRequiresWaterOrPit)
        }
        _ => {
            if previous.object_type() == brush {
                let rotated = ObjectPlacement { kind: previous.kind, rotation: previous.rotation.next() };
                next.set_object(x, y, rotated);
                (next, EditFeedback::ObjectRotated(brush, rotated.rotation))
            } else {
                next.set_object(x, y, ObjectPlacement::new(solid_kind(brush)));
                (next, EditFeedback::ObjectPlaced(brush))
            }
        }
    }
}

/// Toggle an edge: painting the brush value over itself resets to `none`.
pub fn toggle_edge(
    board: &BoardState,
    dir: EdgeDir,
    x: usize,
    y: usize,
    brush: EdgeType,
) -> (BoardState, EditFeedback) {
    let current = match dir {
        EdgeDir::Horizontal => board.h_edge(x, y),
        EdgeDir::Vertical => board.v_edge(x, y),
    };
    let value = if current == brush { EdgeType::None } else { brush };

    let mut next = board.clone();
    match dir {
        EdgeDir::Horizontal => next.set_h_edge(x, y, value),
        EdgeDir::Vertical => next.set_v_edge(x, y, value),
    }

    let feedback = if value == EdgeType::None {
        EditFeedback::EdgeCleared
    } else {
        EditFeedback::EdgeSet(value)
    };
    (next, feedback)
}

/// Payload-free brush tags map straight to their placement kind
fn solid_kind(brush: ObjectType) -> ObjectKind {
    match brush {
        ObjectType::None => ObjectKind::None,
        ObjectType::Lever => ObjectKind::Lever,
        ObjectType::Trapdoor => ObjectKind::Trapdoor,
        ObjectType::Torch => ObjectKind::Torch,
        ObjectType::Bridge => ObjectKind::Bridge,
        // Lights are placed through the light-brush path
        ObjectType::Light => ObjectKind::Light(LightSettings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_clears_bridge() {
        let mut board = BoardState::empty();
        board.set_cell(1, 1, CellType::Water);
        board.set_object(1, 1, ObjectPlacement::new(ObjectKind::Bridge));

        let (next, _) = paint_cell(&board, 1, 1, CellType::Floor);
        assert_eq!(next.object(1, 1), ObjectPlacement::empty());
    }

    #[test]
    fn test_floor_leaves_other_objects_alone() {
        let mut board = BoardState::empty();
        board.set_object(2, 2, ObjectPlacement { kind: ObjectKind::Torch, rotation: Rotation::Deg180 });

        let (next, _) = paint_cell(&board, 2, 2, CellType::Floor);
        assert_eq!(next.object(2, 2).object_type(), ObjectType::Torch);
        assert_eq!(next.object(2, 2).rotation, Rotation::Deg180);
    }

    #[test]
    fn test_bridge_rejected_on_floor() {
        let board = BoardState::empty();
        let (next, feedback) =
            apply_object_brush(&board, 1, 1, ObjectType::Bridge, &LightSettings::default());
        assert_eq!(feedback, EditFeedback::BridgeRequiresWaterOrPit);
        assert_eq!(feedback.classification(), EditClass::Rejected);
        assert_eq!(next, board, "a rejected edit leaves the state untouched");
    }

    #[test]
    fn test_bridge_allowed_on_water_and_pit() {
        let mut board = BoardState::empty();
        board.set_cell(1, 1, CellType::Water);
        let (next, feedback) =
            apply_object_brush(&board, 1, 1, ObjectType::Bridge, &LightSettings::default());
        assert_eq!(feedback, EditFeedback::ObjectPlaced(ObjectType::Bridge));
        assert_eq!(next.object(1, 1).object_type(), ObjectType::Bridge);
        assert_eq!(next.object(1, 1).rotation, Rotation::Deg0);

        board.set_cell(1, 1, CellType::Pit);
        let (_, feedback) =
            apply_object_brush(&board, 1, 1, ObjectType::Bridge, &LightSettings::default());
        assert_eq!(feedback, EditFeedback::ObjectPlaced(ObjectType::Bridge));
    }

    #[test]
    fn test_repeat_placement_rotates_full_circle() {
        let mut board = BoardState::empty();
        let light_brush = LightSettings::default();
        let mut expected = [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270, Rotation::Deg0]
            .into_iter();

        let (next, _) = apply_object_brush(&board, 0, 0, ObjectType::Lever, &light_brush);
        board = next;
        assert_eq!(board.object(0, 0).rotation, expected.next().unwrap());

        for _ in 0..4 {
            let (next, feedback) = apply_object_brush(&board, 0, 0, ObjectType::Lever, &light_brush);
            board = next;
            assert!(matches!(feedback, EditFeedback::ObjectRotated(ObjectType::Lever, _)));
            assert_eq!(board.object(0, 0).rotation, expected.next().unwrap());
        }
    }

    #[test]
    fn test_light_keeps_previous_rotation() {
        let mut board = BoardState::empty();
        board.set_object(3, 0, ObjectPlacement { kind: ObjectKind::Torch, rotation: Rotation::Deg270 });

        let brush = LightSettings { intensity: 2.0, ..Default::default() };
        let (next, feedback) = apply_object_brush(&board, 3, 0, ObjectType::Light, &brush);
        assert_eq!(feedback, EditFeedback::ObjectPlaced(ObjectType::Light));
        assert_eq!(next.object(3, 0).rotation, Rotation::Deg270);
        assert_eq!(next.object(3, 0).kind.light().unwrap().intensity, 2.0);

        // Placing the light again copies the brush anew and does not rotate
        let (again, _) = apply_object_brush(&next, 3, 0, ObjectType::Light, &brush);
        assert_eq!(again.object(3, 0).rotation, Rotation::Deg270);
    }

    #[test]
    fn test_eraser_resets_slot() {
        let mut board = BoardState::empty();
        board.set_object(2, 1, ObjectPlacement { kind: ObjectKind::Lever, rotation: Rotation::Deg90 });

        let (next, feedback) =
            apply_object_brush(&board, 2, 1, ObjectType::None, &LightSettings::default());
        assert_eq!(feedback, EditFeedback::ObjectCleared);
        assert_eq!(next.object(2, 1), ObjectPlacement::empty());
    }

    #[test]
    fn test_edge_toggle_law() {
        let board = BoardState::empty();
        let (set, feedback) = toggle_edge(&board, EdgeDir::Vertical, 2, 1, EdgeType::Wall);
        assert_eq!(feedback, EditFeedback::EdgeSet(EdgeType::Wall));
        assert_eq!(set.v_edge(2, 1), EdgeType::Wall);

        let (cleared, feedback) = toggle_edge(&set, EdgeDir::Vertical, 2, 1, EdgeType::Wall);
        assert_eq!(feedback, EditFeedback::EdgeCleared);
        assert_eq!(cleared.v_edge(2, 1), EdgeType::None);
    }

    #[test]
    fn test_edge_overwrite_with_other_brush() {
        let board = BoardState::empty();
        let (walled, _) = toggle_edge(&board, EdgeDir::Horizontal, 0, 2, EdgeType::Wall);
        let (doored, feedback) = toggle_edge(&walled, EdgeDir::Horizontal, 0, 2, EdgeType::Door);
        assert_eq!(feedback, EditFeedback::EdgeSet(EdgeType::Door));
        assert_eq!(doored.h_edge(0, 2), EdgeType::Door);
    }
}
