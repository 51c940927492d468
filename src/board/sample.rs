//! A small built-in demo board
//!
//! Used as a starting point for new sessions and as a realistic fixture in
//! codec tests: a moat with a bridge, a walled-off corner with a door, a
//! torch, and a point light over the water.

use super::assets::{AssetPlacements, AssetTemplate};
use super::objects::{LightSettings, ObjectKind, ObjectPlacement, Rgb, Rotation};
use super::state::{BoardState, CellType, EdgeType};

/// Build the demo board and its asset placements
pub fn sample_board() -> (BoardState, AssetPlacements) {
    let mut board = BoardState::empty();

    // Water moat across row 1, bridged in the middle
    for x in 0..4 {
        board.set_cell(x, 1, CellType::Water);
    }
    board.set_object(1, 1, ObjectPlacement::new(ObjectKind::Bridge));

    // Pit in the far corner with a trapdoor beside it
    board.set_cell(3, 3, CellType::Pit);
    board.set_object(2, 3, ObjectPlacement::new(ObjectKind::Trapdoor));

    // Walled-off corner room with a door on its south side
    board.set_v_edge(2, 1, EdgeType::Wall);
    board.set_v_edge(2, 0, EdgeType::Wall);
    board.set_h_edge(3, 1, EdgeType::Door);

    // A torch facing east and a cool light over the moat
    board.set_object(
        0,
        0,
        ObjectPlacement { kind: ObjectKind::Torch, rotation: Rotation::Deg90 },
    );
    board.set_object(
        3,
        1,
        ObjectPlacement::new(ObjectKind::Light(LightSettings {
            color: Rgb::new(140, 180, 255),
            intensity: 0.8,
            distance: 3.0,
            decay: 2.0,
        })),
    );

    let mut assets = AssetPlacements::new();
    assets.place(&AssetTemplate::new("crate", "models/crate.glb"), 3.0, 0.0);

    (board, assets)
}
