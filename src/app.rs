use eframe::egui;
use egui::{Color32, PointerButton, Pos2, Sense, Vec2};

use crate::canvas::{Canvas, PixelGrid};
use crate::components::colors::ColorsPanel;
use crate::components::toolbar::{TOOLBAR_WIDTH, ToolbarButton, ToolbarCommand, ToolbarLayout};
use crate::components::tools::PenState;
use crate::input::{InputEvent, InputRouter, Routed};
use crate::log_info;
use crate::settings::PainterSettings;

/// Window background behind the toolbar column.
const WINDOW_BG: Color32 = Color32::from_rgb(64, 64, 64);

pub struct PainterApp {
    grid: PixelGrid,
    pen: PenState,
    router: InputRouter,
    canvas: Canvas,
    colors_panel: ColorsPanel,
}

impl PainterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: &PainterSettings) -> Self {
        let zoom = settings.zoom as f32;
        let grid = PixelGrid::new(settings.grid_width, settings.grid_height, settings.background);
        let window_width = settings.window_size(TOOLBAR_WIDTH)[0];
        log_info!(
            "Canvas {}x{} at zoom {}",
            grid.width(),
            grid.height(),
            settings.zoom
        );
        Self {
            grid,
            pen: PenState::new(settings.pen_color, settings.pen_size),
            router: InputRouter::new(zoom, ToolbarLayout::new(window_width)),
            canvas: Canvas::new(zoom),
            colors_panel: ColorsPanel::default(),
        }
    }

    /// Converts this frame's pointer and keyboard state into input events,
    /// in the order they happened. `origin` is the window-space position of
    /// the canvas's top-left corner.
    fn collect_events(&self, ctx: &egui::Context, origin: Pos2, blocked: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let keyboard_free = !ctx.wants_keyboard_input();
        ctx.input(|i| {
            if let Some(pos) = i.pointer.interact_pos() {
                let local = pos - origin;
                if !blocked {
                    if i.pointer.button_pressed(PointerButton::Primary) {
                        events.push(InputEvent::PrimaryClick { x: local.x, y: local.y });
                    } else if i.pointer.primary_down() && i.pointer.delta() != Vec2::ZERO {
                        events.push(InputEvent::Drag { x: local.x, y: local.y });
                    }
                    if i.pointer.button_pressed(PointerButton::Secondary) {
                        events.push(InputEvent::SecondaryClick { x: local.x, y: local.y });
                    }
                }
            }
            if i.pointer.button_released(PointerButton::Primary) {
                events.push(InputEvent::Release);
            }

            if keyboard_free {
                let shortcuts = [
                    (egui::Key::Num1, ToolbarButton::Small),
                    (egui::Key::Num2, ToolbarButton::Medium),
                    (egui::Key::Num3, ToolbarButton::Large),
                    (egui::Key::C, ToolbarButton::Color),
                ];
                for (key, button) in shortcuts {
                    if i.key_pressed(key) {
                        events.push(InputEvent::ToolbarClick(button));
                    }
                }
            }
        });
        events
    }

    fn handle(&mut self, ctx: &egui::Context, event: InputEvent) {
        match self.router.dispatch(event, &mut self.grid, &mut self.pen) {
            Routed::Toolbar(ToolbarCommand::Quit) => {
                log_info!("Quit requested from toolbar");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Routed::Toolbar(ToolbarCommand::OpenColorPicker) => self.colors_panel.open(),
            Routed::Toolbar(ToolbarCommand::SetPenSize(_))
            | Routed::Painted { .. }
            | Routed::Filled(_)
            | Routed::Unchanged
            | Routed::Ignored => {}
        }
    }
}

impl eframe::App for PainterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Color picker first so its window claims pointer input over the canvas.
        self.colors_panel.show(ctx, &mut self.pen);

        egui::CentralPanel::default()
            .frame(egui::Frame {
                fill: WINDOW_BG,
                ..Default::default()
            })
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let (_, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());

                // Pointer over a floating window (the color picker) must not paint.
                let blocked = !(response.hovered() || response.dragged());
                for event in self.collect_events(ctx, origin, blocked) {
                    self.handle(ctx, event);
                }

                self.canvas.show(ui, origin, &mut self.grid);
                let hover = ctx.pointer_hover_pos().map(|p| (p - origin).to_pos2());
                self.router.toolbar().show(ui.painter(), origin, &self.pen, hover);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log_info!("All done, goodbye!");
    }
}
