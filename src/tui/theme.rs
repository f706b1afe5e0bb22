use ratatui::style::Color;

use crate::model::AssetKind;

/// Color palette for the viewer. There is no configuration surface,
/// so the palette is fixed.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub selection_bg: Color,
    pub cyan: Color,
    pub purple: Color,
    pub yellow: Color,
    pub green: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x20),
            text: Color::Rgb(0xA8, 0xB4, 0xD0),
            text_bright: Color::Rgb(0xF2, 0xF6, 0xFF),
            highlight: Color::Rgb(0xFF, 0x8A, 0x3D),
            dim: Color::Rgb(0x5C, 0x66, 0x80),
            selection_bg: Color::Rgb(0x2A, 0x33, 0x4D),
            cyan: Color::Rgb(0x53, 0xD0, 0xE8),
            purple: Color::Rgb(0xB8, 0x7A, 0xF0),
            yellow: Color::Rgb(0xF0, 0xC6, 0x4A),
            green: Color::Rgb(0x5F, 0xD7, 0x87),
        }
    }
}

impl Theme {
    /// Accent color for an asset kind's icon and label
    pub fn kind_color(&self, kind: AssetKind) -> Color {
        match kind {
            AssetKind::Article => self.cyan,
            AssetKind::Video => self.highlight,
            AssetKind::Audio => self.purple,
            AssetKind::File => self.yellow,
        }
    }
}
