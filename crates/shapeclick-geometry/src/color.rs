use serde::{Deserialize, Serialize};

/// Paint color for shapes. Small named palette shared by every surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShapeColor {
    #[default]
    Black,
    White,
    Red,
    Green,
    Blue,
    Magenta,
    Yellow,
    Cyan,
    Gray,
    Orange,
}

impl ShapeColor {
    /// Convert to CSS color string for SVG output
    pub fn to_css(self) -> &'static str {
        match self {
            ShapeColor::Black => "#000000",
            ShapeColor::White => "#ffffff",
            ShapeColor::Red => "#ff0000",
            ShapeColor::Green => "#00ff00",
            ShapeColor::Blue => "#0000ff",
            ShapeColor::Magenta => "#ff00ff",
            ShapeColor::Yellow => "#ffff00",
            ShapeColor::Cyan => "#00ffff",
            ShapeColor::Gray => "#808080",
            ShapeColor::Orange => "#ffc800",
        }
    }

    /// Human-readable name, used in click status messages
    pub fn name(self) -> &'static str {
        match self {
            ShapeColor::Black => "Black",
            ShapeColor::White => "White",
            ShapeColor::Red => "Red",
            ShapeColor::Green => "Green",
            ShapeColor::Blue => "Blue",
            ShapeColor::Magenta => "Magenta",
            ShapeColor::Yellow => "Yellow",
            ShapeColor::Cyan => "Cyan",
            ShapeColor::Gray => "Gray",
            ShapeColor::Orange => "Orange",
        }
    }
}
