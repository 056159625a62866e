#![forbid(unsafe_code)]

//! Split and geometry resolution.
//!
//! [`Container::resolve`] walks the tree top-down. For each node the offered
//! rectangle is shrunk by the margin to get the node's area; a visible border
//! then takes one cell from every side. Split nodes divide what is left
//! between their children, widget nodes shrink it by the padding to get the
//! content area.
//!
//! A node whose margin or padding does not fit fails on its own: it and its
//! subtree are left with empty areas while the rest of the tree is still
//! resolved, and the first failure in pre-order is reported.

use std::fmt;

use tdash_core::geometry::{GeometryError, Rect, Sides};

use crate::container::{Container, ContainerId, Content};
use crate::options::{SplitAxis, SplitSize};

/// Split `len` cells into `(first, second)` according to `size`.
///
/// A fixed size gives `min(cells, len)` to the sized side. A percentage gives
/// `round(len * percent / 100)` (half-up) to the sized side, kept within
/// `1..len` whenever `len >= 2` so neither side collapses. The sized side is
/// the first child unless the split is reversed. The two lengths always sum
/// to `len`.
#[must_use]
pub fn split_lengths(len: u16, size: SplitSize) -> (u16, u16) {
    let sized = match size.fixed {
        Some(cells) => cells.min(len),
        None => {
            let rounded = ((u32::from(len) * u32::from(size.percent) + 50) / 100) as u16;
            if len >= 2 {
                rounded.clamp(1, len - 1)
            } else {
                rounded.min(len)
            }
        }
    };
    if size.reversed {
        (len - sized, sized)
    } else {
        (sized, len - sized)
    }
}

/// Divide `area` between the two children of a split.
#[must_use]
pub fn split_rect(area: Rect, axis: SplitAxis, size: SplitSize) -> (Rect, Rect) {
    match axis {
        SplitAxis::Vertical => {
            let (left, right) = split_lengths(area.width, size);
            (
                Rect::new(area.x, area.y, left, area.height),
                Rect::new(area.x.saturating_add(left), area.y, right, area.height),
            )
        }
        SplitAxis::Horizontal => {
            let (top, bottom) = split_lengths(area.height, size);
            (
                Rect::new(area.x, area.y, area.width, top),
                Rect::new(area.x, area.y.saturating_add(top), area.width, bottom),
            )
        }
    }
}

/// Which spacing failed to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveStage {
    Margin,
    Padding,
}

impl fmt::Display for ResolveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Margin => "margin",
            Self::Padding => "padding",
        })
    }
}

/// A container's margin or padding does not fit the space it was offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    pub container: ContainerId,
    /// User identifier of the container, empty when unset.
    pub id: String,
    pub stage: ResolveStage,
    pub source: GeometryError,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id.is_empty() {
            write!(f, "container {}", self.container)?;
        } else {
            write!(f, "container {:?}", self.id)?;
        }
        write!(f, ": {} does not fit: {}", self.stage, self.source)
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl Container {
    /// Compute the area of every container for a root rectangle.
    ///
    /// Every node is visited even after a failure; failed subtrees end up
    /// with empty areas and the first failure is returned.
    pub fn resolve(&mut self, area: Rect) -> Result<(), ResolveError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("container.resolve", area = %area).entered();

        let mut first_error = None;
        self.resolve_node(area, &mut first_error);
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn resolve_node(&mut self, offered: Rect, first_error: &mut Option<ResolveError>) {
        let area = match self.config.margin.apply(offered) {
            Ok(area) => area,
            Err(source) => {
                self.fail(ResolveStage::Margin, source, first_error);
                return;
            }
        };
        self.area = area;
        self.content_area = None;

        let usable = if self.config.border.is_visible() {
            area.inner(Sides::all(1))
        } else {
            area
        };

        if let Content::Split { first, second } = &mut self.content {
            let (first_area, second_area) =
                split_rect(usable, self.config.split, self.config.split_size);
            first.resolve_node(first_area, first_error);
            second.resolve_node(second_area, first_error);
        } else if self.widget().is_some() {
            match self.config.padding.apply(usable) {
                Ok(inner) => self.content_area = Some(inner),
                Err(source) => self.fail(ResolveStage::Padding, source, first_error),
            }
        }
    }

    fn fail(
        &mut self,
        stage: ResolveStage,
        source: GeometryError,
        first_error: &mut Option<ResolveError>,
    ) {
        let err = ResolveError {
            container: self.id(),
            id: self.config.id.clone(),
            stage,
            source,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(container = %self.id(), error = %err, "container geometry rejected");
        self.clear_areas();
        if first_error.is_none() {
            *first_error = Some(err);
        }
    }

    fn clear_areas(&mut self) {
        self.area = Rect::default();
        self.content_area = None;
        if let Content::Split { first, second } = &mut self.content {
            first.clear_areas();
            second.clear_areas();
        }
    }

    /// Deepest container whose resolved area contains the point.
    #[must_use]
    pub fn container_at(&self, x: u16, y: u16) -> Option<&Container> {
        self.pre_order()
            .filter(|node| node.area.contains(x, y))
            .last()
    }
}
