// ============================================================================
// PEN PAINTING — single stamps and interpolated drag strokes
// ============================================================================

use crate::canvas::PixelGrid;
use crate::components::tools::PenState;

/// Cell offsets covered by a pen of `radius`. Radius 1 is the centre cell
/// alone; larger radii give a filled disc of `radius - 1` cells around it.
pub fn pen_footprint(radius: u32) -> Vec<(i32, i32)> {
    let r = radius.max(1) as i32 - 1;
    let mut offsets = Vec::with_capacity(((2 * r + 1) * (2 * r + 1)) as usize);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Paints the pen footprint centred on `(x, y)`. Cells off the grid are
/// skipped, and a cell already holding the pen color is not rewritten.
/// Returns the number of cells that changed.
pub fn stamp(grid: &mut PixelGrid, x: i32, y: i32, pen: &PenState) -> usize {
    let mut changed = 0;
    for (dx, dy) in pen_footprint(pen.radius()) {
        let (px, py) = (x + dx, y + dy);
        if grid.contains(px, py) && grid.get(px as u32, py as u32) != pen.color {
            grid.put(px as u32, py as u32, pen.color);
            changed += 1;
        }
    }
    changed
}

/// Stamps every cell on the line from `from` to `to`, both ends included.
pub fn stroke(grid: &mut PixelGrid, from: (i32, i32), to: (i32, i32), pen: &PenState) -> usize {
    line_cells(from, to)
        .into_iter()
        .map(|(x, y)| stamp(grid, x, y, pen))
        .sum()
}

/// Bresenham line between two grid cells.
pub fn line_cells(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        cells.push((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tools::PenSize;
    use image::Rgba;
    use pretty_assertions::assert_eq;

    const B: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn pen(size: PenSize) -> PenState {
        PenState::new(INK, size)
    }

    #[test]
    fn footprint_sizes() {
        assert_eq!(pen_footprint(1), vec![(0, 0)]);
        assert_eq!(pen_footprint(0), vec![(0, 0)]);
        // Radius 3: disc of radius 2 = 13 cells.
        assert_eq!(pen_footprint(3).len(), 13);
        assert!(pen_footprint(6).contains(&(5, 0)));
        assert!(!pen_footprint(6).contains(&(4, 4)));
    }

    #[test]
    fn small_stamp_paints_one_cell() {
        let mut grid = PixelGrid::new(5, 5, B);
        assert_eq!(stamp(&mut grid, 2, 3, &pen(PenSize::Small)), 1);
        assert_eq!(grid.color_at(2, 3), Ok(INK));
        assert_eq!(grid.color_at(2, 2), Ok(B));
    }

    #[test]
    fn repaint_of_same_color_writes_nothing() {
        let mut grid = PixelGrid::new(5, 5, B);
        stamp(&mut grid, 1, 1, &pen(PenSize::Small));
        let generation = grid.generation();
        assert_eq!(stamp(&mut grid, 1, 1, &pen(PenSize::Small)), 0);
        assert_eq!(grid.generation(), generation);
    }

    #[test]
    fn large_stamp_is_clipped_at_the_edge() {
        let mut grid = PixelGrid::new(4, 4, B);
        let changed = stamp(&mut grid, 0, 0, &pen(PenSize::Medium));
        // Quarter disc of radius 2 inside the grid.
        assert_eq!(changed, 6);
        assert_eq!(grid.color_at(2, 0), Ok(INK));
        assert_eq!(grid.color_at(2, 2), Ok(B));
    }

    #[test]
    fn line_includes_both_ends_without_gaps() {
        let cells = line_cells((0, 0), (5, 2));
        assert_eq!(cells.first(), Some(&(0, 0)));
        assert_eq!(cells.last(), Some(&(5, 2)));
        for pair in cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1);
        }
        assert_eq!(line_cells((3, 3), (3, 3)), vec![(3, 3)]);
    }

    #[test]
    fn stroke_connects_distant_points() {
        let mut grid = PixelGrid::new(10, 3, B);
        let changed = stroke(&mut grid, (0, 1), (9, 1), &pen(PenSize::Small));
        assert_eq!(changed, 10);
        for x in 0..10 {
            assert_eq!(grid.color_at(x, 1), Ok(INK));
        }
    }
}
