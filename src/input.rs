// ============================================================================
// INPUT ROUTING — pointer events to paint, fill, or toolbar actions
// ============================================================================

use crate::canvas::{PixelGrid, screen_to_grid};
use crate::components::toolbar::{ToolbarButton, ToolbarCommand, ToolbarLayout};
use crate::components::tools::PenState;
use crate::log_info;
use crate::ops::fill::{FillOutcome, flood_fill};
use crate::ops::paint::{stamp, stroke};

/// One input event, in window coordinates. Events are handled strictly in the
/// order they arrive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button went down.
    PrimaryClick { x: f32, y: f32 },
    /// Secondary button went down.
    SecondaryClick { x: f32, y: f32 },
    /// Pointer moved with the primary button held.
    Drag { x: f32, y: f32 },
    /// Primary button released.
    Release,
    /// Toolbar action triggered without a pointer (keyboard shortcut).
    ToolbarClick(ToolbarButton),
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// Pen stamped; `cells` pixels changed color.
    Painted { cells: usize },
    Filled(FillOutcome),
    /// A toolbar button was activated. `SetPenSize` has already been applied
    /// to the pen; the other commands are for the caller to carry out.
    Toolbar(ToolbarCommand),
    /// The event landed somewhere meaningful but required no change.
    Unchanged,
    /// The event was outside both the canvas and the toolbar.
    Ignored,
}

/// Dispatches input events against the grid and pen.
///
/// The only state kept between events is the last cell of the current stroke,
/// used to join consecutive drag positions with a line.
pub struct InputRouter {
    zoom: f32,
    toolbar: ToolbarLayout,
    stroke_last: Option<(i32, i32)>,
}

impl InputRouter {
    pub fn new(zoom: f32, toolbar: ToolbarLayout) -> Self {
        Self {
            zoom,
            toolbar,
            stroke_last: None,
        }
    }

    pub fn toolbar(&self) -> &ToolbarLayout {
        &self.toolbar
    }

    /// True while the primary button is down over the canvas.
    pub fn is_stroking(&self) -> bool {
        self.stroke_last.is_some()
    }

    pub fn dispatch(&mut self, event: InputEvent, grid: &mut PixelGrid, pen: &mut PenState) -> Routed {
        match event {
            InputEvent::PrimaryClick { x, y } => {
                if let Some(button) = self.toolbar.hit(x, y) {
                    self.stroke_last = None;
                    return self.activate(button, pen);
                }
                match screen_to_grid(x, y, self.zoom, grid) {
                    Some(cell) => {
                        self.stroke_last = Some(cell);
                        painted(stamp(grid, cell.0, cell.1, pen))
                    }
                    None => {
                        self.stroke_last = None;
                        Routed::Ignored
                    }
                }
            }
            InputEvent::Drag { x, y } => match screen_to_grid(x, y, self.zoom, grid) {
                Some(cell) => {
                    let changed = match self.stroke_last {
                        Some(last) if last != cell => stroke(grid, last, cell, pen),
                        Some(_) => 0,
                        None => stamp(grid, cell.0, cell.1, pen),
                    };
                    self.stroke_last = Some(cell);
                    painted(changed)
                }
                None => {
                    // Re-entering the canvas must not draw a line across the gap.
                    self.stroke_last = None;
                    Routed::Ignored
                }
            },
            InputEvent::SecondaryClick { x, y } => match screen_to_grid(x, y, self.zoom, grid) {
                Some((gx, gy)) => Routed::Filled(flood_fill(grid, gx, gy, pen.color)),
                None => Routed::Ignored,
            },
            InputEvent::Release => {
                self.stroke_last = None;
                Routed::Unchanged
            }
            InputEvent::ToolbarClick(button) => self.activate(button, pen),
        }
    }

    fn activate(&mut self, button: ToolbarButton, pen: &mut PenState) -> Routed {
        let command = button.command();
        if let ToolbarCommand::SetPenSize(size) = command {
            if pen.size != size {
                log_info!("Pen size set to {} (radius {})", size.label(), size.radius());
            }
            pen.size = size;
        }
        Routed::Toolbar(command)
    }
}

fn painted(cells: usize) -> Routed {
    if cells == 0 {
        Routed::Unchanged
    } else {
        Routed::Painted { cells }
    }
}
