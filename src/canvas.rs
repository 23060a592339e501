use eframe::egui;
use egui::{Color32, ColorImage, Pos2, Rect, TextureOptions, Vec2};
use image::{Rgba, RgbaImage};

use crate::error::{GridError, Result};

// ============================================================================
// COORDINATE MAPPING
// ============================================================================

/// Converts a window-space point to grid coordinates.
///
/// Each grid cell covers a `zoom` × `zoom` block of screen pixels, so this is
/// just `floor(screen / zoom)` on both axes. No bounds check happens here;
/// use [`screen_to_grid`] when the point may fall outside the canvas.
pub fn to_grid_coord(screen_x: f32, screen_y: f32, zoom: f32) -> (i32, i32) {
    (
        (screen_x / zoom).floor() as i32,
        (screen_y / zoom).floor() as i32,
    )
}

/// Maps a window-space point to a grid cell, or `None` when the point lies
/// outside the canvas region (`[0, W*zoom) × [0, H*zoom)`).
pub fn screen_to_grid(screen_x: f32, screen_y: f32, zoom: f32, grid: &PixelGrid) -> Option<(i32, i32)> {
    if !canvas_contains(screen_x, screen_y, zoom, grid) {
        return None;
    }
    let (x, y) = to_grid_coord(screen_x, screen_y, zoom);
    // Float rounding right at the far edge can land one cell past the end.
    grid.contains(x, y).then_some((x, y))
}

/// True when the window point is inside the drawn canvas area.
pub fn canvas_contains(screen_x: f32, screen_y: f32, zoom: f32, grid: &PixelGrid) -> bool {
    screen_x >= 0.0
        && screen_y >= 0.0
        && screen_x < grid.width() as f32 * zoom
        && screen_y < grid.height() as f32 * zoom
}

// ============================================================================
// PIXEL GRID
// ============================================================================

/// The drawing surface: one `Rgba<u8>` per cell, fixed size.
#[derive(Clone, Debug)]
pub struct PixelGrid {
    pixels: RgbaImage,
    background: Rgba<u8>,
    /// Bounding box (min_x, min_y, max_x, max_y) of writes since the last
    /// `take_dirty`, inclusive.
    dirty_rect: Option<(u32, u32, u32, u32)>,
    /// Bumped on every committed write.
    dirty_generation: u64,
}

impl PixelGrid {
    /// Creates a `width` × `height` grid filled with `background`.
    /// Zero dimensions are clamped to 1.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            pixels: RgbaImage::from_pixel(width, height, background),
            background,
            dirty_rect: None,
            dirty_generation: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn background(&self) -> Rgba<u8> {
        self.background
    }

    /// True when `(x, y)` addresses a cell.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Color of the cell at `(x, y)`.
    pub fn color_at(&self, x: i32, y: i32) -> Result<Rgba<u8>> {
        self.check(x, y)?;
        Ok(*self.pixels.get_pixel(x as u32, y as u32))
    }

    /// Overwrites the cell at `(x, y)`. The change is visible to the next
    /// read and to the next render pass.
    pub fn set_color(&mut self, x: i32, y: i32, color: Rgba<u8>) -> Result<()> {
        self.check(x, y)?;
        self.put(x as u32, y as u32, color);
        Ok(())
    }

    /// Unchecked read for callers that already validated the coordinate.
    pub(crate) fn get(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// Unchecked write for callers that already validated the coordinate.
    pub(crate) fn put(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.pixels.put_pixel(x, y, color);
        self.dirty_generation += 1;
        self.dirty_rect = Some(match self.dirty_rect {
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            None => (x, y, x, y),
        });
    }

    /// Monotonic write counter; the renderer compares it against the value
    /// it last uploaded.
    pub fn generation(&self) -> u64 {
        self.dirty_generation
    }

    /// Returns and clears the region written since the previous call.
    pub fn take_dirty(&mut self) -> Option<(u32, u32, u32, u32)> {
        self.dirty_rect.take()
    }

    /// Whole grid as an egui image.
    pub fn to_color_image(&self) -> ColorImage {
        self.region_to_color_image(0, 0, self.width(), self.height())
    }

    /// Sub-rectangle as an egui image, for partial texture uploads.
    pub fn region_to_color_image(&self, rx: u32, ry: u32, rw: u32, rh: u32) -> ColorImage {
        let mut pixels = Vec::with_capacity((rw * rh) as usize);
        for y in ry..ry + rh {
            for x in rx..rx + rw {
                let [r, g, b, a] = self.get(x, y).0;
                pixels.push(Color32::from_rgba_unmultiplied(r, g, b, a));
            }
        }
        ColorImage {
            size: [rw as usize, rh as usize],
            pixels,
        }
    }

    fn check(&self, x: i32, y: i32) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }
}

// ============================================================================
// CANVAS VIEW
// ============================================================================

/// Renders a `PixelGrid` as a nearest-filtered texture scaled by `zoom`.
pub struct Canvas {
    pub zoom: f32,
    texture: Option<egui::TextureHandle>,
    /// Grid generation that the texture currently reflects.
    uploaded_generation: u64,
}

impl Canvas {
    pub fn new(zoom: f32) -> Self {
        Self {
            zoom,
            texture: None,
            uploaded_generation: 0,
        }
    }

    /// Screen size of the canvas region.
    pub fn size(&self, grid: &PixelGrid) -> Vec2 {
        Vec2::new(grid.width() as f32 * self.zoom, grid.height() as f32 * self.zoom)
    }

    /// Uploads any pending grid changes and paints the canvas with its top-left
    /// corner at `origin`.
    pub fn show(&mut self, ui: &mut egui::Ui, origin: Pos2, grid: &mut PixelGrid) {
        if self.texture.is_none() {
            let texture = ui.ctx().load_texture(
                "painter_canvas",
                grid.to_color_image(),
                TextureOptions::NEAREST,
            );
            self.texture = Some(texture);
            grid.take_dirty();
            self.uploaded_generation = grid.generation();
        } else if self.uploaded_generation != grid.generation() {
            if let (Some(texture), Some((x0, y0, x1, y1))) = (self.texture.as_mut(), grid.take_dirty()) {
                let patch = grid.region_to_color_image(x0, y0, x1 - x0 + 1, y1 - y0 + 1);
                texture.set_partial([x0 as usize, y0 as usize], patch, TextureOptions::NEAREST);
            }
            self.uploaded_generation = grid.generation();
        }

        if let Some(texture) = &self.texture {
            let rect = Rect::from_min_size(origin, self.size(grid));
            let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
            ui.painter().image(texture.id(), rect, uv, Color32::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn new_grid_is_filled_with_background() {
        let grid = PixelGrid::new(5, 3, WHITE);
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(grid.color_at(x, y), Ok(WHITE));
            }
        }
        assert_eq!(grid.background(), WHITE);
    }

    #[test]
    fn set_then_read_returns_written_color() {
        let mut grid = PixelGrid::new(4, 4, WHITE);
        for y in 0..4 {
            for x in 0..4 {
                let c = Rgba([x as u8 * 40, y as u8 * 40, 7, 255]);
                grid.set_color(x, y, c).unwrap();
                assert_eq!(grid.color_at(x, y), Ok(c));
            }
        }
    }

    #[test]
    fn out_of_range_access_is_rejected() {
        let mut grid = PixelGrid::new(4, 3, WHITE);
        for &(x, y) in &[(-1, 0), (0, -1), (4, 0), (0, 3), (100, 100), (i32::MIN, 2)] {
            let expected: Result<Rgba<u8>> = Err(GridError::OutOfBounds { x, y, width: 4, height: 3 });
            assert_eq!(grid.color_at(x, y), expected);
            assert_eq!(grid.set_color(x, y, RED), expected.map(|_| ()));
        }
        // Nothing was stored by the failed writes.
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.take_dirty(), None);
    }

    #[test]
    fn writes_track_generation_and_dirty_box() {
        let mut grid = PixelGrid::new(10, 10, WHITE);
        grid.set_color(2, 7, RED).unwrap();
        grid.set_color(5, 1, RED).unwrap();
        assert_eq!(grid.generation(), 2);
        assert_eq!(grid.take_dirty(), Some((2, 1, 5, 7)));
        assert_eq!(grid.take_dirty(), None);
    }

    #[test]
    fn zero_sized_grid_is_clamped() {
        let grid = PixelGrid::new(0, 0, WHITE);
        assert_eq!((grid.width(), grid.height()), (1, 1));
    }

    #[test]
    fn maps_click_to_cell() {
        assert_eq!(to_grid_coord(17.0, 33.0, 8.0), (2, 4));
        assert_eq!(to_grid_coord(0.0, 0.0, 8.0), (0, 0));
        assert_eq!(to_grid_coord(7.99, 8.0, 8.0), (0, 1));
    }

    #[test]
    fn mapping_round_trips_cell_origins() {
        for zoom in [1.0f32, 2.0, 3.0, 8.0, 16.0] {
            for gy in 0..40 {
                for gx in 0..60 {
                    let sx = gx as f32 * zoom;
                    let sy = gy as f32 * zoom;
                    assert_eq!(to_grid_coord(sx, sy, zoom), (gx, gy));
                }
            }
        }
    }

    #[test]
    fn screen_to_grid_rejects_points_outside_canvas() {
        let grid = PixelGrid::new(60, 40, WHITE);
        assert_eq!(screen_to_grid(17.0, 33.0, 8.0, &grid), Some((2, 4)));
        assert_eq!(screen_to_grid(479.9, 319.9, 8.0, &grid), Some((59, 39)));
        assert_eq!(screen_to_grid(480.0, 10.0, 8.0, &grid), None);
        assert_eq!(screen_to_grid(10.0, 320.0, 8.0, &grid), None);
        assert_eq!(screen_to_grid(-0.5, 10.0, 8.0, &grid), None);
    }

    #[test]
    fn color_image_matches_grid() {
        let mut grid = PixelGrid::new(3, 2, WHITE);
        grid.set_color(1, 1, RED).unwrap();
        let img = grid.to_color_image();
        assert_eq!(img.size, [3, 2]);
        assert_eq!(img.pixels[4], Color32::from_rgb(255, 0, 0));
        assert_eq!(img.pixels[0], Color32::WHITE);

        let patch = grid.region_to_color_image(1, 1, 2, 1);
        assert_eq!(patch.size, [2, 1]);
        assert_eq!(patch.pixels[0], Color32::from_rgb(255, 0, 0));
    }
}
