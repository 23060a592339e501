use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use image::Rgba;

use crate::components::tools::PenSize;
use crate::log_warn;

const SETTINGS_FILE: &str = "painter_settings.cfg";

/// Largest canvas width or height, in cells. Shared with the CLI.
pub const MAX_GRID_DIMENSION: u32 = 4096;
/// Largest screen pixels per cell. Shared with the CLI.
pub const MAX_ZOOM: u32 = 64;

/// Startup configuration. Stored as `key=value` lines; unknown keys and
/// unparsable values are skipped so a hand-edited file never blocks startup.
#[derive(Clone, Debug, PartialEq)]
pub struct PainterSettings {
    /// Canvas width in cells.
    pub grid_width: u32,
    /// Canvas height in cells.
    pub grid_height: u32,
    /// Screen pixels per cell.
    pub zoom: u32,
    pub background: Rgba<u8>,
    pub pen_color: Rgba<u8>,
    pub pen_size: PenSize,
}

impl Default for PainterSettings {
    fn default() -> Self {
        Self {
            grid_width: 60,
            grid_height: 40,
            zoom: 8,
            background: Rgba([255, 255, 255, 255]),
            pen_color: Rgba([0, 0, 0, 255]),
            pen_size: PenSize::Small,
        }
    }
}

impl PainterSettings {
    /// Path to the settings file.
    /// On Linux:   ~/.config/painter/painter_settings.cfg  (XDG_CONFIG_HOME respected)
    /// On Windows: %APPDATA%\Painter\painter_settings.cfg
    /// On macOS:   ~/Library/Application Support/Painter/painter_settings.cfg
    pub fn settings_path() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            let appdata = std::env::var("APPDATA").ok()?;
            return Some(PathBuf::from(appdata).join("Painter").join(SETTINGS_FILE));
        }
        #[cfg(target_os = "macos")]
        {
            let home = std::env::var("HOME").ok()?;
            return Some(
                PathBuf::from(home)
                    .join("Library")
                    .join("Application Support")
                    .join("Painter")
                    .join(SETTINGS_FILE),
            );
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            let config_dir = match std::env::var("XDG_CONFIG_HOME") {
                Ok(dir) => PathBuf::from(dir),
                Err(_) => PathBuf::from(std::env::var("HOME").ok()?).join(".config"),
            };
            Some(config_dir.join("painter").join(SETTINGS_FILE))
        }
    }

    /// Load from `path`, or from the default location when `None`. A missing
    /// file yields the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::settings_path() {
                Some(p) => p,
                None => return Self::default(),
            },
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parse settings text over the defaults.
    pub fn parse(content: &str) -> Self {
        let mut s = Self::default();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else { continue };
            let key = key.trim();
            let val = val.trim();
            let applied = match key {
                "grid_width" => parse_in_range(val, 1..=MAX_GRID_DIMENSION).map(|v| s.grid_width = v).is_some(),
                "grid_height" => parse_in_range(val, 1..=MAX_GRID_DIMENSION).map(|v| s.grid_height = v).is_some(),
                "zoom" => parse_in_range(val, 1..=MAX_ZOOM).map(|v| s.zoom = v).is_some(),
                "background" => str_to_color(val).map(|c| s.background = c).is_some(),
                "pen_color" => str_to_color(val).map(|c| s.pen_color = c).is_some(),
                "pen_size" => PenSize::from_config_name(val).map(|p| s.pen_size = p).is_some(),
                _ => true,
            };
            if !applied {
                log_warn!("Ignoring invalid settings value {}={}", key, val);
            }
        }
        s
    }

    /// Settings in file format, one `key=value` per line.
    pub fn to_config_string(&self) -> String {
        format!(
            "grid_width={}\n\
             grid_height={}\n\
             zoom={}\n\
             background={}\n\
             pen_color={}\n\
             pen_size={}\n",
            self.grid_width,
            self.grid_height,
            self.zoom,
            color_to_str(self.background),
            color_to_str(self.pen_color),
            self.pen_size.config_name(),
        )
    }

    /// Window size: canvas plus the toolbar column.
    pub fn window_size(&self, toolbar_width: f32) -> [f32; 2] {
        let zoom = self.zoom as f32;
        [
            self.grid_width as f32 * zoom + toolbar_width,
            self.grid_height as f32 * zoom,
        ]
    }
}

fn parse_in_range(val: &str, range: RangeInclusive<u32>) -> Option<u32> {
    val.parse::<u32>().ok().filter(|v| range.contains(v))
}

/// Serialize a color as "r,g,b,a"
fn color_to_str(c: Rgba<u8>) -> String {
    format!("{},{},{},{}", c.0[0], c.0[1], c.0[2], c.0[3])
}

/// Parse a color from "r,g,b,a"
fn str_to_color(s: &str) -> Option<Rgba<u8>> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() == 4 {
        let r = parts[0].trim().parse::<u8>().ok()?;
        let g = parts[1].trim().parse::<u8>().ok()?;
        let b = parts[2].trim().parse::<u8>().ok()?;
        let a = parts[3].trim().parse::<u8>().ok()?;
        Some(Rgba([r, g, b, a]))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_gives_defaults() {
        assert_eq!(PainterSettings::parse(""), PainterSettings::default());
    }

    #[test]
    fn parses_every_key() {
        let s = PainterSettings::parse(
            "grid_width=32\n\
             grid_height = 24\n\
             zoom=16\n\
             background=10,20,30,255\n\
             pen_color=200,0,0,255\n\
             pen_size=large\n",
        );
        assert_eq!(
            s,
            PainterSettings {
                grid_width: 32,
                grid_height: 24,
                zoom: 16,
                background: Rgba([10, 20, 30, 255]),
                pen_color: Rgba([200, 0, 0, 255]),
                pen_size: PenSize::Large,
            }
        );
    }

    #[test]
    fn bad_lines_keep_defaults() {
        let s = PainterSettings::parse(
            "# comment\n\
             zoom=0\n\
             grid_width=-4\n\
             grid_height=100000\n\
             zoom=65\n\
             background=1,2,3\n\
             pen_size=huge\n\
             no_equals_sign\n\
             unknown_key=5\n",
        );
        assert_eq!(s, PainterSettings::default());
    }

    #[test]
    fn config_string_parses_back() {
        let s = PainterSettings {
            grid_width: 7,
            grid_height: 9,
            zoom: 3,
            background: Rgba([1, 2, 3, 4]),
            pen_color: Rgba([5, 6, 7, 8]),
            pen_size: PenSize::Medium,
        };
        assert_eq!(PainterSettings::parse(&s.to_config_string()), s);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("painter-settings-that-does-not-exist.cfg");
        assert_eq!(PainterSettings::load(Some(path.as_path())), PainterSettings::default());
    }

    #[test]
    fn oversized_values_are_rejected() {
        let s = PainterSettings::parse("grid_width=100000\ngrid_height=100000\nzoom=100000\n");
        assert_eq!(s, PainterSettings::default());

        let s = PainterSettings::parse("grid_width=4096\ngrid_height=1\nzoom=64\n");
        assert_eq!((s.grid_width, s.grid_height, s.zoom), (4096, 1, 64));
    }

    #[test]
    fn window_adds_toolbar_column() {
        assert_eq!(PainterSettings::default().window_size(100.0), [580.0, 320.0]);
    }
}
