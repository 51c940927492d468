//! Grid addressing for the fixed 4x4 board
//!
//! Pure index math shared by the board model, the edit engine, and the
//! picking code. Cells are addressed by integer (x, y); edges live on the
//! grid lines between and around them.

/// Board width in cells (X axis)
pub const GRID_WIDTH: usize = 4;
/// Board depth in cells (Z axis)
pub const GRID_HEIGHT: usize = 4;
/// Cell size in world units
pub const CELL_SIZE: f32 = 1.0;

/// Number of cells on the board
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;
/// Number of horizontal edge slots (edges running along X, one row per gridline)
pub const H_EDGE_COUNT: usize = (GRID_HEIGHT + 1) * GRID_WIDTH;
/// Number of vertical edge slots (edges running along Z, one column per gridline)
pub const V_EDGE_COUNT: usize = GRID_HEIGHT * (GRID_WIDTH + 1);

/// Linear index of a cell. Caller must pass in-range coordinates.
pub fn cell_index(x: usize, y: usize) -> usize {
    debug_assert!(x < GRID_WIDTH && y < GRID_HEIGHT, "cell ({}, {}) out of range", x, y);
    y * GRID_WIDTH + x
}

/// Linear index of a horizontal edge at gridline y (0..=GRID_HEIGHT).
pub fn h_edge_index(x: usize, y: usize) -> usize {
    debug_assert!(x < GRID_WIDTH && y <= GRID_HEIGHT, "h-edge ({}, {}) out of range", x, y);
    y * GRID_WIDTH + x
}

/// Linear index of a vertical edge at gridline x (0..=GRID_WIDTH).
pub fn v_edge_index(x: usize, y: usize) -> usize {
    debug_assert!(x <= GRID_WIDTH && y < GRID_HEIGHT, "v-edge ({}, {}) out of range", x, y);
    y * (GRID_WIDTH + 1) + x
}

/// Clamp a continuous board-local X coordinate to a cell column.
pub fn clamp_cell_x(local_x: f32) -> usize {
    ((local_x / CELL_SIZE).floor() as i32).clamp(0, GRID_WIDTH as i32 - 1) as usize
}

/// Clamp a continuous board-local Z coordinate to a cell row.
pub fn clamp_cell_y(local_z: f32) -> usize {
    ((local_z / CELL_SIZE).floor() as i32).clamp(0, GRID_HEIGHT as i32 - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_indices_form_permutation() {
        let mut seen = [false; CELL_COUNT];
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let idx = cell_index(x, y);
                assert!(idx < CELL_COUNT);
                assert!(!seen[idx], "duplicate index {} at ({}, {})", idx, x, y);
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_edge_index_ranges() {
        for y in 0..=GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                assert!(h_edge_index(x, y) < H_EDGE_COUNT);
            }
        }
        for y in 0..GRID_HEIGHT {
            for x in 0..=GRID_WIDTH {
                assert!(v_edge_index(x, y) < V_EDGE_COUNT);
            }
        }
        assert_eq!(h_edge_index(GRID_WIDTH - 1, GRID_HEIGHT), H_EDGE_COUNT - 1);
        assert_eq!(v_edge_index(GRID_WIDTH, GRID_HEIGHT - 1), V_EDGE_COUNT - 1);
    }

    #[test]
    fn test_clamp_cell_coords() {
        assert_eq!(clamp_cell_x(-2.5), 0);
        assert_eq!(clamp_cell_x(0.99), 0);
        assert_eq!(clamp_cell_x(1.0), 1);
        assert_eq!(clamp_cell_x(3.7), 3);
        assert_eq!(clamp_cell_x(11.0), 3);
        assert_eq!(clamp_cell_y(2.2), 2);
        assert_eq!(clamp_cell_y(4.0), 3);
    }
}
