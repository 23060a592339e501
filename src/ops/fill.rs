// ============================================================================
// BUCKET FILL — recolor the 4-connected region under the cursor
// ============================================================================

use image::Rgba;

use crate::canvas::PixelGrid;
use crate::log_info;

/// Result of a bucket fill. None of these are errors; the no-op cases are
/// reported so the caller can log or ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// `cells` pixels were recolored. `bounds` is the inclusive bounding box
    /// (min_x, min_y, max_x, max_y) of the filled region.
    Filled {
        cells: usize,
        bounds: (u32, u32, u32, u32),
    },
    /// The origin already has the pen color.
    AlreadyPainted,
    /// The origin is not on the grid.
    OffCanvas,
}

impl FillOutcome {
    pub fn changed_cells(&self) -> usize {
        match self {
            FillOutcome::Filled { cells, .. } => *cells,
            _ => 0,
        }
    }
}

/// Flood fill starting at `(origin_x, origin_y)`.
///
/// Every cell 4-connected to the origin through cells of the origin's color
/// becomes `pen_color`. Cells of any other color stop the fill and are never
/// touched. Uses a heap-allocated DFS stack, so region size is not limited by
/// the call stack.
pub fn flood_fill(grid: &mut PixelGrid, origin_x: i32, origin_y: i32, pen_color: Rgba<u8>) -> FillOutcome {
    if !grid.contains(origin_x, origin_y) {
        log_info!("Fill at ({}, {}) is not on the canvas", origin_x, origin_y);
        return FillOutcome::OffCanvas;
    }

    let start_x = origin_x as u32;
    let start_y = origin_y as u32;
    let target = grid.get(start_x, start_y);
    if target == pen_color {
        log_info!("The pixel at ({}, {}) has already been painted", origin_x, origin_y);
        return FillOutcome::AlreadyPainted;
    }

    let w = grid.width();
    let h = grid.height();

    let mut min_x = start_x;
    let mut min_y = start_y;
    let mut max_x = start_x;
    let mut max_y = start_y;

    // A cell is recolored as it is pushed. Since pen_color != target, a
    // recolored cell no longer matches and can never be pushed again.
    let mut stack: Vec<(u32, u32)> = Vec::with_capacity(256);
    grid.put(start_x, start_y, pen_color);
    stack.push((start_x, start_y));
    let mut cells = 1usize;

    while let Some((x, y)) = stack.pop() {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);

        // Left, right, up, down. No diagonals.
        let neighbors = [
            (x > 0).then(|| (x - 1, y)),
            (x + 1 < w).then(|| (x + 1, y)),
            (y > 0).then(|| (x, y - 1)),
            (y + 1 < h).then(|| (x, y + 1)),
        ];
        for (nx, ny) in neighbors.into_iter().flatten() {
            if grid.get(nx, ny) == target {
                grid.put(nx, ny, pen_color);
                cells += 1;
                stack.push((nx, ny));
            }
        }
    }

    log_info!(
        "Filled {} cells from ({}, {}) within ({}, {})-({}, {})",
        cells, origin_x, origin_y, min_x, min_y, max_x, max_y
    );
    FillOutcome::Filled {
        cells,
        bounds: (min_x, min_y, max_x, max_y),
    }
}
