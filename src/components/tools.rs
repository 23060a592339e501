use image::Rgba;

// ============================================================================
// PEN
// ============================================================================

/// Pen sizes offered by the toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PenSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl PenSize {
    pub fn all() -> &'static [PenSize] {
        &[PenSize::Small, PenSize::Medium, PenSize::Large]
    }

    /// Pen radius in cells. Radius 1 covers only the centre cell.
    pub fn radius(self) -> u32 {
        match self {
            PenSize::Small => 1,
            PenSize::Medium => 3,
            PenSize::Large => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PenSize::Small => "Small",
            PenSize::Medium => "Medium",
            PenSize::Large => "Large",
        }
    }

    /// Name used in the settings file.
    pub fn config_name(self) -> &'static str {
        match self {
            PenSize::Small => "small",
            PenSize::Medium => "medium",
            PenSize::Large => "large",
        }
    }

    pub fn from_config_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Some(PenSize::Small),
            "medium" => Some(PenSize::Medium),
            "large" => Some(PenSize::Large),
            _ => None,
        }
    }
}

/// Current pen color and size, shared by painting and filling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PenState {
    pub color: Rgba<u8>,
    pub size: PenSize,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            color: Rgba([0, 0, 0, 255]),
            size: PenSize::Small,
        }
    }
}

impl PenState {
    pub fn new(color: Rgba<u8>, size: PenSize) -> Self {
        Self { color, size }
    }

    pub fn radius(&self) -> u32 {
        self.size.radius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_map_to_toolbar_radii() {
        let radii: Vec<u32> = PenSize::all().iter().map(|s| s.radius()).collect();
        assert_eq!(radii, vec![1, 3, 6]);
    }

    #[test]
    fn config_names_parse_back() {
        for &size in PenSize::all() {
            assert_eq!(PenSize::from_config_name(size.config_name()), Some(size));
        }
        assert_eq!(PenSize::from_config_name(" LARGE "), Some(PenSize::Large));
        assert_eq!(PenSize::from_config_name("huge"), None);
    }

    #[test]
    fn default_pen_is_small_black() {
        let pen = PenState::default();
        assert_eq!(pen.color, Rgba([0, 0, 0, 255]));
        assert_eq!(pen.radius(), 1);
    }
}
