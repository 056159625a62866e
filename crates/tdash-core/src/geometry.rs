#![forbid(unsafe_code)]

//! Geometric primitives and the shrink helpers used for margins and padding.
//!
//! Both [`shrink`] and [`shrink_percent`] are pure. Shrinking a rectangle down
//! to exactly zero width or height is allowed; asking for more cells than the
//! dimension holds is an error, never a silent clamp.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangle for layout bounds and hit testing.
///
/// Uses terminal coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Create a new rectangle inside the current one with the given margin.
    ///
    /// Saturates to an empty rectangle instead of failing; use [`shrink`]
    /// where an oversized margin must be reported.
    pub fn inner(&self, margin: Sides) -> Rect {
        let x = self.x.saturating_add(margin.left);
        let y = self.y.saturating_add(margin.top);
        let width = self
            .width
            .saturating_sub(margin.left)
            .saturating_sub(margin.right);
        let height = self
            .height
            .saturating_sub(margin.top)
            .saturating_sub(margin.bottom);

        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@({},{})", self.width, self.height, self.x, self.y)
    }
}

/// Per-side cell amounts for padding/margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: u16) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with specific values.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right, widened so it cannot overflow.
    #[inline]
    pub const fn horizontal_sum(&self) -> u32 {
        self.left as u32 + self.right as u32
    }

    /// Sum of top and bottom, widened so it cannot overflow.
    #[inline]
    pub const fn vertical_sum(&self) -> u32 {
        self.top as u32 + self.bottom as u32
    }
}

/// Failure of a shrink helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The requested amounts exceed the rectangle's width or height.
    ShrinkUnderflow { area: Rect, sides: Sides },
    /// A percentage outside `0..=100`.
    InvalidPercent { value: u8 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShrinkUnderflow { area, sides } => write!(
                f,
                "cannot shrink area {area} by top:{}, right:{}, bottom:{}, left:{}, the result would have a negative size",
                sides.top, sides.right, sides.bottom, sides.left
            ),
            Self::InvalidPercent { value } => {
                write!(f, "invalid shrink percentage {value}, must be in range 0 <= p <= 100")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Shrink `area` by a fixed number of cells on each side.
///
/// The result may be empty, but shrinking past zero fails.
pub fn shrink(
    area: Rect,
    top: u16,
    right: u16,
    bottom: u16,
    left: u16,
) -> Result<Rect, GeometryError> {
    let sides = Sides::new(top, right, bottom, left);
    if sides.vertical_sum() > u32::from(area.height)
        || sides.horizontal_sum() > u32::from(area.width)
    {
        return Err(GeometryError::ShrinkUnderflow { area, sides });
    }
    Ok(Rect {
        x: area.x.saturating_add(left),
        y: area.y.saturating_add(top),
        width: area.width - left - right,
        height: area.height - top - bottom,
    })
}

/// Shrink `area` by a percentage of its height (top/bottom) or width
/// (left/right) on each side.
///
/// Amounts are rounded down to whole cells before shrinking.
pub fn shrink_percent(
    area: Rect,
    top: u8,
    right: u8,
    bottom: u8,
    left: u8,
) -> Result<Rect, GeometryError> {
    for value in [top, right, bottom, left] {
        if value > 100 {
            return Err(GeometryError::InvalidPercent { value });
        }
    }
    shrink(
        area,
        percent_of(area.height, top),
        percent_of(area.width, right),
        percent_of(area.height, bottom),
        percent_of(area.width, left),
    )
}

/// `floor(len * percent / 100)`; never exceeds `len` for `percent <= 100`.
#[inline]
pub const fn percent_of(len: u16, percent: u8) -> u16 {
    ((len as u32 * percent as u32) / 100) as u16
}
