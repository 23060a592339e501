use eframe::egui;
use egui::Color32;
use egui::widgets::color_picker::{Alpha, color_picker_color32};
use image::Rgba;

use crate::components::tools::PenState;
use crate::log_info;

/// Floating pen-color picker. Opened by the toolbar's Color button.
#[derive(Default)]
pub struct ColorsPanel {
    open: bool,
}

impl ColorsPanel {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Draws the picker window while open. Returns `true` when the pen color
    /// changed this frame.
    pub fn show(&mut self, ctx: &egui::Context, pen: &mut PenState) -> bool {
        if !self.open {
            return false;
        }

        let mut open = self.open;
        let mut color = rgba_to_color32(pen.color);
        let mut changed = false;

        egui::Window::new("Pen Color")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                changed |= color_picker_color32(ui, &mut color, Alpha::Opaque);
                ui.separator();
                changed |= draw_hex_row(ui, &mut color);
            });

        self.open = open;
        if changed {
            pen.color = color32_to_rgba(color);
            log_info!("Pen color set to {}", to_hex(pen.color));
        }
        changed
    }
}

fn draw_hex_row(ui: &mut egui::Ui, color: &mut Color32) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("#").monospace().strong());
        let mut hex = format!("{:02X}{:02X}{:02X}", color.r(), color.g(), color.b());
        let edited = ui
            .add_sized(
                [64.0, 18.0],
                egui::TextEdit::singleline(&mut hex).font(egui::TextStyle::Monospace),
            )
            .changed();
        if edited {
            if let Some(c) = parse_hex_color(&hex) {
                *color = rgba_to_color32(c);
                changed = true;
            }
        }
    });
    changed
}

pub fn rgba_to_color32(c: Rgba<u8>) -> Color32 {
    let [r, g, b, a] = c.0;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub fn color32_to_rgba(c: Color32) -> Rgba<u8> {
    Rgba(c.to_srgba_unmultiplied())
}

/// Parses `RRGGBB` or `#RRGGBB` into an opaque color.
pub fn parse_hex_color(s: &str) -> Option<Rgba<u8>> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let val = u32::from_str_radix(hex, 16).ok()?;
    Some(Rgba([
        ((val >> 16) & 0xFF) as u8,
        ((val >> 8) & 0xFF) as u8,
        (val & 0xFF) as u8,
        255,
    ]))
}

/// `#RRGGBB` form of a color, alpha dropped.
pub fn to_hex(c: Rgba<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", c.0[0], c.0[1], c.0[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Rgba([255, 0, 0, 255])));
        assert_eq!(parse_hex_color("1a1a2e"), Some(Rgba([0x1a, 0x1a, 0x2e, 255])));
        assert_eq!(parse_hex_color("  #00ff7F "), Some(Rgba([0, 255, 127, 255])));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex_color("#F00"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#+FFFFF"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn hex_formatting_is_uppercase() {
        assert_eq!(to_hex(Rgba([0x12, 0xab, 0xff, 10])), "#12ABFF");
    }

    #[test]
    fn opaque_colors_survive_egui_conversion() {
        let c = Rgba([12, 200, 99, 255]);
        assert_eq!(color32_to_rgba(rgba_to_color32(c)), c);
    }
}
