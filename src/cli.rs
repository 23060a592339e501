// ============================================================================
// Command-line arguments — override the settings file for one session
// ============================================================================
//
// Usage examples:
//   painter                                   (settings file or defaults)
//   painter --width 32 --height 32 --zoom 16
//   painter --background "#202020" --pen-color "#FFCC00"
//   painter --print-config > ~/.config/painter/painter_settings.cfg

use std::path::PathBuf;

use clap::Parser;
use image::Rgba;

use crate::components::colors::parse_hex_color;
use crate::settings::{MAX_GRID_DIMENSION, MAX_ZOOM, PainterSettings};

/// Painter — a small pixel-painting program.
///
/// Left-click or drag paints, right-click bucket-fills.
#[derive(Parser, Debug)]
#[command(name = "painter", about = "A small mouse-driven pixel painter")]
pub struct CliArgs {
    /// Canvas width in cells.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_GRID_DIMENSION as i64))]
    pub width: Option<u32>,

    /// Canvas height in cells.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_GRID_DIMENSION as i64))]
    pub height: Option<u32>,

    /// Screen pixels per canvas cell.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_ZOOM as i64))]
    pub zoom: Option<u32>,

    /// Background color as #RRGGBB.
    #[arg(long, value_name = "#RRGGBB", value_parser = parse_color_arg)]
    pub background: Option<Rgba<u8>>,

    /// Initial pen color as #RRGGBB.
    #[arg(long, value_name = "#RRGGBB", value_parser = parse_color_arg)]
    pub pen_color: Option<Rgba<u8>>,

    /// Read settings from this file instead of the default location.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective settings in settings-file format and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Mirror log output to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Settings file contents with the command-line overrides applied.
    pub fn resolve_settings(&self) -> PainterSettings {
        let mut settings = PainterSettings::load(self.config.as_deref());
        self.apply_overrides(&mut settings);
        settings
    }

    fn apply_overrides(&self, settings: &mut PainterSettings) {
        if let Some(w) = self.width {
            settings.grid_width = w;
        }
        if let Some(h) = self.height {
            settings.grid_height = h;
        }
        if let Some(z) = self.zoom {
            settings.zoom = z;
        }
        if let Some(c) = self.background {
            settings.background = c;
        }
        if let Some(c) = self.pen_color {
            settings.pen_color = c;
        }
    }
}

fn parse_color_arg(s: &str) -> Result<Rgba<u8>, String> {
    parse_hex_color(s).ok_or_else(|| format!("'{}' is not a #RRGGBB color", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::tools::PenSize;
    use pretty_assertions::assert_eq;

    #[test]
    fn overrides_apply_on_top_of_settings() {
        let args = CliArgs::parse_from([
            "painter",
            "--width",
            "32",
            "-z",
            "16",
            "--pen-color",
            "#FF8800",
        ]);
        let mut settings = PainterSettings::default();
        args.apply_overrides(&mut settings);
        assert_eq!(settings.grid_width, 32);
        assert_eq!(settings.grid_height, 40);
        assert_eq!(settings.zoom, 16);
        assert_eq!(settings.pen_color, Rgba([255, 136, 0, 255]));
        assert_eq!(settings.background, PainterSettings::default().background);
    }

    #[test]
    fn flags_override_settings_file_over_defaults() {
        let path = std::env::temp_dir().join(format!("painter-cli-{}.cfg", std::process::id()));
        std::fs::write(&path, "grid_width=20\nzoom=4\npen_size=medium\n").unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let args = CliArgs::parse_from(["painter", "--config", path_arg.as_str(), "--zoom", "12"]);
        let settings = args.resolve_settings();
        std::fs::remove_file(&path).unwrap();

        // File beats defaults.
        assert_eq!(settings.grid_width, 20);
        assert_eq!(settings.pen_size, PenSize::Medium);
        // Flag beats file.
        assert_eq!(settings.zoom, 12);
        // Untouched by either layer.
        assert_eq!(settings.grid_height, PainterSettings::default().grid_height);
        assert_eq!(settings.background, PainterSettings::default().background);
    }

    #[test]
    fn no_flags_leave_settings_alone() {
        let args = CliArgs::parse_from(["painter"]);
        let mut settings = PainterSettings::default();
        args.apply_overrides(&mut settings);
        assert_eq!(settings, PainterSettings::default());
        assert!(!args.print_config);
        assert!(!args.verbose);
    }

    #[test]
    fn rejects_zero_zoom_and_bad_colors() {
        assert!(CliArgs::try_parse_from(["painter", "--zoom", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["painter", "--width", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["painter", "--background", "blue"]).is_err());
        assert!(CliArgs::try_parse_from(["painter", "--width", "100000"]).is_err());
        assert!(CliArgs::try_parse_from(["painter", "--zoom", "65"]).is_err());
    }
}
