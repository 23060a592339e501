use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};

use crate::components::tools::{PenSize, PenState};

/// Width of the toolbar column to the right of the canvas.
pub const TOOLBAR_WIDTH: f32 = 100.0;

const BUTTON_W: f32 = 80.0;
const BUTTON_H: f32 = 30.0;
/// Distance from the window's right edge to a button's left edge.
const BUTTON_INSET: f32 = 90.0;
const BUTTON_TOP: f32 = 10.0;
const BUTTON_SPACING: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Quit,
    Color,
    Small,
    Medium,
    Large,
}

impl ToolbarButton {
    /// Top-to-bottom order in the toolbar column.
    pub fn all() -> &'static [ToolbarButton] {
        &[
            ToolbarButton::Quit,
            ToolbarButton::Color,
            ToolbarButton::Small,
            ToolbarButton::Medium,
            ToolbarButton::Large,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolbarButton::Quit => "Quit",
            ToolbarButton::Color => "Color",
            ToolbarButton::Small => "Small",
            ToolbarButton::Medium => "Medium",
            ToolbarButton::Large => "Large",
        }
    }

    pub fn command(self) -> ToolbarCommand {
        match self {
            ToolbarButton::Quit => ToolbarCommand::Quit,
            ToolbarButton::Color => ToolbarCommand::OpenColorPicker,
            ToolbarButton::Small => ToolbarCommand::SetPenSize(PenSize::Small),
            ToolbarButton::Medium => ToolbarCommand::SetPenSize(PenSize::Medium),
            ToolbarButton::Large => ToolbarCommand::SetPenSize(PenSize::Large),
        }
    }

    fn pen_size(self) -> Option<PenSize> {
        match self.command() {
            ToolbarCommand::SetPenSize(size) => Some(size),
            _ => None,
        }
    }
}

/// What a toolbar button asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    Quit,
    OpenColorPicker,
    SetPenSize(PenSize),
}

/// Axis-aligned button rectangle in window coordinates. Half-open on the far
/// edges so adjacent rectangles never share a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ToolbarRect {
    pub fn contains(self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    fn to_rect(self, origin: Pos2) -> Rect {
        Rect::from_min_size(origin + Vec2::new(self.x, self.y), Vec2::new(self.w, self.h))
    }
}

/// Fixed button placement for a window of the given width.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarLayout {
    pub buttons: Vec<(ToolbarButton, ToolbarRect)>,
}

impl ToolbarLayout {
    pub fn new(window_width: f32) -> Self {
        let buttons = ToolbarButton::all()
            .iter()
            .enumerate()
            .map(|(idx, &button)| {
                (
                    button,
                    ToolbarRect {
                        x: window_width - BUTTON_INSET,
                        y: BUTTON_TOP + idx as f32 * BUTTON_SPACING,
                        w: BUTTON_W,
                        h: BUTTON_H,
                    },
                )
            })
            .collect();
        Self { buttons }
    }

    /// Button under the window point, if any.
    pub fn hit(&self, x: f32, y: f32) -> Option<ToolbarButton> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(button, _)| *button)
    }

    /// Paints every button. The button matching the current pen size is drawn
    /// selected; `hover` is in window coordinates.
    pub fn show(&self, painter: &egui::Painter, origin: Pos2, pen: &PenState, hover: Option<Pos2>) {
        let hovered = hover.and_then(|p| self.hit(p.x, p.y));
        for &(button, rect) in &self.buttons {
            let selected = button.pen_size() == Some(pen.size);
            let fill = if selected {
                Color32::from_rgb(66, 133, 244)
            } else if hovered == Some(button) {
                Color32::from_gray(110)
            } else {
                Color32::from_gray(80)
            };
            let r = rect.to_rect(origin);
            painter.rect_filled(r, 4.0, fill);
            painter.rect_stroke(r, 4.0, Stroke::new(1.0, Color32::from_gray(30)));
            painter.text(
                r.center(),
                Align2::CENTER_CENTER,
                button.label(),
                FontId::proportional(14.0),
                Color32::WHITE,
            );

            // Color button shows the current pen color as a swatch.
            if button == ToolbarButton::Color {
                let [cr, cg, cb, _] = pen.color.0;
                let swatch = Rect::from_min_size(r.left_top() + Vec2::new(4.0, 9.0), Vec2::splat(12.0));
                painter.rect_filled(swatch, 2.0, Color32::from_rgb(cr, cg, cb));
                painter.rect_stroke(swatch, 2.0, Stroke::new(1.0, Color32::WHITE));
            }
        }
    }
}
