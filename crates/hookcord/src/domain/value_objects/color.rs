//! Color - semantic notification colors and the palettes that render them

use serde::{Deserialize, Serialize};

/// Semantic color of a notification.
///
/// The domain never deals in RGB values; a [`Palette`] maps these
/// at the transport boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Success,
    Warning,
    Danger,
    Info,
    Merged,
}

/// RGB values for each semantic color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub success: u32,
    pub warning: u32,
    pub danger: u32,
    pub info: u32,
    pub merged: u32,
}

impl Palette {
    /// Green / yellow / red with blue merges
    pub const CLASSIC: Palette = Palette {
        success: 0x31b967,
        warning: 0xf2c359,
        danger: 0xd72b2b,
        info: 0x5798d2,
        merged: 0x5798d2,
    };

    /// Flat palette with a purple merge color distinct from info
    pub const DETAILED: Palette = Palette {
        success: 0x2ecc71,
        warning: 0xf1c40f,
        danger: 0xe74c3c,
        info: 0x3498db,
        merged: 0x9b59b6,
    };

    pub fn rgb(&self, color: Color) -> u32 {
        match color {
            Color::Success => self.success,
            Color::Warning => self.warning,
            Color::Danger => self.danger,
            Color::Info => self.info,
            Color::Merged => self.merged,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}
