#![forbid(unsafe_code)]

//! Container tree for terminal dashboards.
//!
//! A dashboard is a strictly binary tree of [`Container`]s. Each container
//! either holds a widget or is split into two children, with per-container
//! sizing, margin, padding, border and focus settings.
//!
//! ```
//! use tdash_layout::{Container, ContainerOption, Rect, SplitOption};
//!
//! let mut root = Container::new(&[ContainerOption::split_vertical(
//!     [ContainerOption::id("left")],
//!     [ContainerOption::id("right"), ContainerOption::padding_left(1)],
//!     [SplitOption::Percent(25)],
//! )])
//! .unwrap();
//! root.resolve(Rect::from_size(80, 24)).unwrap();
//! assert_eq!(root.find_by_name("left").unwrap().area().width, 20);
//! ```

pub mod align;
pub mod container;
pub mod focus;
pub mod options;
pub mod resolve;

pub use align::{HAlign, VAlign};
pub use container::{
    Container, ContainerError, ContainerId, ContainerSnapshot, Content, PreOrder,
    ValidationError, Widget,
};
pub use options::{
    ConfigError, ContainerConfig, ContainerOption, DEFAULT_SPLIT_PERCENT, FocusDirection,
    FocusGroup, FocusGroups, GlobalOptions, Inherited, OptionError, Side, Spacing, SpacingKind,
    SpacingValue, SplitAxis, SplitOption, SplitSize, apply_options,
};
pub use resolve::{ResolveError, ResolveStage, split_lengths, split_rect};
pub use tdash_core::geometry::{Rect, Sides};
