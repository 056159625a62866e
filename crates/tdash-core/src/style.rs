#![forbid(unsafe_code)]

//! Style tokens stored by container configuration.
//!
//! These are plain comparable values. Turning them into escape sequences or
//! glyphs is the renderer's job.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Color {
    /// The terminal's default foreground/background.
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// 256-color palette entry.
    Indexed(u8),
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

/// Line style used for container borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LineStyle {
    /// No border.
    #[default]
    None,
    /// Single thin line (┌─┐).
    Light,
    /// Double line (╔═╗).
    Double,
    /// Thin line with rounded corners (╭─╮).
    Round,
    /// Thick line (┏━┓).
    Thick,
}

impl LineStyle {
    /// Whether a border is drawn, i.e. whether it consumes cells.
    #[inline]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None)
    }
}
