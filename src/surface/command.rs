//! Commands understood by a display surface

use std::fmt;

use serde::{Serialize, Serializer};

/// Handle to an element created on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ElementId(pub u32);

/// 24-bit RGB color, serialized as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Bitmap fonts available on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Font {
    #[serde(rename = "4x6")]
    Small,
    #[serde(rename = "10x20")]
    Large,
}

impl Font {
    /// Advance width of one glyph in pixels
    pub fn char_width(self) -> i32 {
        match self {
            Font::Small => 4,
            Font::Large => 10,
        }
    }
}

/// One side effect issued to the surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SurfaceCommand {
    CreateText { id: ElementId },
    CreateRectangle { id: ElementId },
    SetFont { id: ElementId, font: Font },
    SetText { id: ElementId, text: String },
    SetColor { id: ElementId, color: Color },
    SetSize { id: ElementId, width: u32, height: u32 },
    MoveTo { id: ElementId, x: i32, y: i32 },
    /// Surface-owned tween; the call returns immediately
    AnimateTo { id: ElementId, x: i32, y: i32, duration_ms: u32 },
}

impl SurfaceCommand {
    /// Element the command targets
    pub fn id(&self) -> ElementId {
        match self {
            SurfaceCommand::CreateText { id }
            | SurfaceCommand::CreateRectangle { id }
            | SurfaceCommand::SetFont { id, .. }
            | SurfaceCommand::SetText { id, .. }
            | SurfaceCommand::SetColor { id, .. }
            | SurfaceCommand::SetSize { id, .. }
            | SurfaceCommand::MoveTo { id, .. }
            | SurfaceCommand::AnimateTo { id, .. } => *id,
        }
    }
}
