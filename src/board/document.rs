//! Board document loading and saving
//!
//! The persisted form is a flat JSON document:
//! `{version, board: {cells, hEdges, vEdges, objects}, customObjects}`.
//!
//! Loading degrades gracefully per field: a board array that is absent,
//! malformed, or the wrong length falls back to its empty-board counterpart
//! while the remaining arrays keep their document values. Only a document
//! that is not a JSON object, or that has no usable `board`, is rejected
//! whole - callers keep their in-memory state in that case.

use std::fs;
use std::path::Path;
use serde::Serialize;
use serde_json::Value;

use super::assets::{
    clamp_scale, clamp_x, clamp_y, clamp_y_offset, wrap_rotation, AssetPlacement, AssetPlacements,
};
use super::state::BoardState;

/// Document format version written by [`serialize_board`]
pub const DOCUMENT_VERSION: u32 = 1;

/// Error type for document loading and saving
#[derive(Debug)]
pub enum DocumentError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    StructureError(String),
}

impl From<std::io::Error> for DocumentError {
    fn from(e: std::io::Error) -> Self {
        DocumentError::IoError(e)
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> Self {
        DocumentError::ParseError(e)
    }
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::IoError(e) => write!(f, "IO error: {}", e),
            DocumentError::ParseError(e) => write!(f, "Parse error: {}", e),
            DocumentError::StructureError(e) => write!(f, "Invalid document: {}", e),
        }
    }
}

/// A successfully loaded document
#[derive(Debug, Clone, PartialEq)]
pub struct BoardDocument {
    pub board: BoardState,
    pub assets: AssetPlacements,
}

/// Wire shape of the whole document
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentBody<'a> {
    version: u32,
    board: &'a BoardState,
    custom_objects: &'a [AssetPlacement],
}

/// Serialize a board and its asset placements to a JSON document string
pub fn serialize_board(
    board: &BoardState,
    assets: &AssetPlacements,
) -> Result<String, DocumentError> {
    let body = DocumentBody {
        version: DOCUMENT_VERSION,
        board,
        custom_objects: assets.as_slice(),
    };
    Ok(serde_json::to_string_pretty(&body)?)
}

/// Parse a JSON document string into a board and asset placements
pub fn parse_board(text: &str) -> Result<BoardDocument, DocumentError> {
    let value: Value = serde_json::from_str(text)?;
    let root = value
        .as_object()
        .ok_or_else(|| DocumentError::StructureError("document is not a JSON object".into()))?;
    let board_value = root
        .get("board")
        .and_then(Value::as_object)
        .ok_or_else(|| DocumentError::StructureError("missing or invalid `board`".into()))?;

    let empty = BoardState::empty();
    let board = BoardState {
        cells: board_array(board_value.get("cells"), "cells", empty.cells),
        h_edges: board_array(board_value.get("hEdges"), "hEdges", empty.h_edges),
        v_edges: board_array(board_value.get("vEdges"), "vEdges", empty.v_edges),
        objects: board_array(board_value.get("objects"), "objects", empty.objects),
    };

    let assets = parse_custom_objects(root.get("customObjects"));

    Ok(BoardDocument { board, assets })
}

/// Load a board document from a JSON file
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<BoardDocument, DocumentError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_board(&contents).map_err(|e| {
        eprintln!("failed to load board from {}: {}", path.display(), e);
        e
    })
}

/// Save a board document to a JSON file
pub fn save_board<P: AsRef<Path>>(
    board: &BoardState,
    assets: &AssetPlacements,
    path: P,
) -> Result<(), DocumentError> {
    let contents = serialize_board(board, assets)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Parse one fixed-length board array, falling back to the empty-board value
/// when the field is absent, malformed, or the wrong length.
fn board_array<T, const N: usize>(source: Option<&Value>, field: &str, fallback: [T; N]) -> [T; N]
where
    T: serde::de::DeserializeOwned,
{
    let Some(value) = source else {
        return fallback;
    };
    match serde_json::from_value::<Vec<T>>(value.clone()) {
        Ok(items) if items.len() == N => match <[T; N]>::try_from(items) {
            Ok(array) => array,
            Err(_) => fallback,
        },
        Ok(items) => {
            eprintln!(
                "board.{}: expected {} entries, got {}; resetting to defaults",
                field,
                N,
                items.len()
            );
            fallback
        }
        Err(e) => {
            eprintln!("board.{}: {}; resetting to defaults", field, e);
            fallback
        }
    }
}

/// Accept asset entries that carry a string name and numeric coordinates;
/// everything else about an entry is defaulted and clamped.
fn parse_custom_objects(source: Option<&Value>) -> AssetPlacements {
    let Some(entries) = source.and_then(Value::as_array) else {
        return AssetPlacements::new();
    };

    let mut items: Vec<AssetPlacement> = entries.iter().filter_map(parse_asset_entry).collect();

    // Entries without an id get a fresh one past every explicit id
    let mut next_id = items.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
    for item in &mut items {
        if item.id == 0 {
            item.id = next_id;
            next_id += 1;
        }
    }

    AssetPlacements::from_loaded(items)
}

fn parse_asset_entry(value: &Value) -> Option<AssetPlacement> {
    let obj = value.as_object()?;
    let name = obj.get("name")?.as_str()?;
    let x = obj.get("x")?.as_f64()?;
    let y = obj.get("y")?.as_f64()?;

    let url = obj.get("url").and_then(Value::as_str).unwrap_or_default();
    let id = obj.get("id").and_then(Value::as_u64).unwrap_or(0);
    let scale = obj.get("scale").and_then(Value::as_f64).unwrap_or(1.0);
    let y_offset = obj.get("yOffset").and_then(Value::as_f64).unwrap_or(0.0);
    let rotation = obj.get("rotation").and_then(Value::as_f64).unwrap_or(0.0);

    Some(AssetPlacement {
        id,
        name: name.to_string(),
        url: url.to_string(),
        x: clamp_x(x as f32),
        y: clamp_y(y as f32),
        scale: clamp_scale(scale as f32),
        y_offset: clamp_y_offset(y_offset as f32),
        rotation: wrap_rotation(rotation as f32),
    })
}
