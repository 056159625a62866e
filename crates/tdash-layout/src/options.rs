#![forbid(unsafe_code)]

//! Container configuration record and the option application engine.
//!
//! Every container carries a [`ContainerConfig`] with two of the three
//! configuration scopes:
//!
//! - **local** fields (identifier, split, alignment, border, spacing, focus
//!   membership) that belong to this container only;
//! - **inherited** fields ([`Inherited`]) copied by value from the parent when
//!   the container is created, free to diverge afterwards.
//!
//! The third scope, [`GlobalOptions`], exists once per tree and is shared by
//! every container in it.
//!
//! Configuration changes are expressed as [`ContainerOption`] values and
//! applied in order by [`apply_options`], which stops at the first failure.
//! Options applied before the failing one stay applied.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tdash_core::event::KeyChord;
use tdash_core::geometry::{GeometryError, Rect, shrink, shrink_percent};
use tdash_core::style::{Color, LineStyle};

use crate::align::{HAlign, VAlign};
use crate::container::{Container, ContainerId, Widget};

/// Percentage given to the first child when no split size is configured.
pub const DEFAULT_SPLIT_PERCENT: u8 = 50;

/// Axis along which a container is divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitAxis {
    /// The divider is a vertical line: children are left and right.
    #[default]
    Vertical,
    /// The divider is a horizontal line: children are top and bottom.
    Horizontal,
}

/// Sizing of a split.
///
/// A fixed cell count wins over the percentage when both are present; the
/// tree validator rejects containers that set both explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSize {
    /// Share of the available length, `0 < percent < 100`.
    pub percent: u8,
    /// Exact cell count, when configured.
    pub fixed: Option<u16>,
    /// Apply the size to the second child instead of the first.
    pub reversed: bool,
}

impl SplitSize {
    /// True when both a fixed size and a non-default percentage are set.
    #[must_use]
    pub const fn is_conflicting(&self) -> bool {
        self.fixed.is_some() && self.percent != DEFAULT_SPLIT_PERCENT
    }
}

impl Default for SplitSize {
    fn default() -> Self {
        Self {
            percent: DEFAULT_SPLIT_PERCENT,
            fixed: None,
            reversed: false,
        }
    }
}

/// Sizing modifiers accepted by a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum SplitOption {
    /// Percentage of the available length given to the first child.
    Percent(u8),
    /// Percentage of the available length given to the second child.
    PercentFromEnd(u8),
    /// Cell count given to the first child; the second gets the rest.
    Fixed(u16),
    /// Cell count given to the second child; the first gets the rest.
    FixedFromEnd(u16),
}

impl SplitOption {
    /// Validate and record this modifier.
    pub fn apply(self, size: &mut SplitSize) -> Result<(), ConfigError> {
        match self {
            Self::Percent(value) | Self::PercentFromEnd(value) => {
                if value == 0 || value >= 100 {
                    return Err(ConfigError::InvalidSplitPercent { value });
                }
                size.percent = value;
                size.reversed |= matches!(self, Self::PercentFromEnd(_));
            }
            Self::Fixed(cells) => size.fixed = Some(cells),
            Self::FixedFromEnd(cells) => {
                size.fixed = Some(cells);
                size.reversed = true;
            }
        }
        Ok(())
    }
}

/// One side of a margin or padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "Top",
            Self::Right => "Right",
            Self::Bottom => "Bottom",
            Self::Left => "Left",
        })
    }
}

/// Which spacing record an option targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingKind {
    /// Space outside the container's box.
    Margin,
    /// Space between the box and the widget.
    Padding,
}

impl fmt::Display for SpacingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Margin => "Margin",
            Self::Padding => "Padding",
        })
    }
}

/// Amount reserved on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacingValue {
    /// Absolute number of cells.
    Cells(u16),
    /// Percentage of the height (top/bottom) or width (left/right).
    Percent(u8),
}

impl SpacingValue {
    /// Whether `self`, already stored on a side, blocks setting `requested`.
    ///
    /// A zero value of either representation never blocks.
    const fn blocks(self, requested: Self) -> bool {
        match (self, requested) {
            (Self::Cells(cells), Self::Percent(_)) => cells > 0,
            (Self::Percent(percent), Self::Cells(_)) => percent > 0,
            _ => false,
        }
    }

    const fn cells(value: Option<Self>) -> u16 {
        match value {
            Some(Self::Cells(cells)) => cells,
            _ => 0,
        }
    }

    const fn percent(value: Option<Self>) -> u8 {
        match value {
            Some(Self::Percent(percent)) => percent,
            _ => 0,
        }
    }
}

/// Four-sided margin or padding, each side independently in cells or percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Spacing {
    pub top: Option<SpacingValue>,
    pub right: Option<SpacingValue>,
    pub bottom: Option<SpacingValue>,
    pub left: Option<SpacingValue>,
}

impl Spacing {
    /// Value configured for one side.
    #[must_use]
    pub const fn side(&self, side: Side) -> Option<SpacingValue> {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// True when no side reserves any space.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .into_iter()
            .all(|value| matches!(value, None | Some(SpacingValue::Cells(0) | SpacingValue::Percent(0))))
    }

    fn side_mut(&mut self, side: Side) -> &mut Option<SpacingValue> {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }

    fn set(&mut self, kind: SpacingKind, side: Side, value: SpacingValue) -> Result<(), ConfigError> {
        if let SpacingValue::Percent(percent) = value
            && percent > 100
        {
            return Err(ConfigError::InvalidSpacingPercent {
                kind,
                side,
                value: percent,
            });
        }
        if let Some(existing) = self.side(side)
            && existing.blocks(value)
        {
            return Err(ConfigError::ConflictingSpacing {
                kind,
                side,
                requested: value,
                existing,
            });
        }
        *self.side_mut(side) = Some(value);
        Ok(())
    }

    /// Shrink `area` by this spacing.
    ///
    /// Percentages are taken of `area`'s own height/width. Shrinking to zero
    /// is allowed, shrinking past zero fails.
    pub fn apply(&self, area: Rect) -> Result<Rect, GeometryError> {
        if self.is_empty() {
            return Ok(area);
        }
        // Percent amounts come from the unshrunk dimensions, so applying
        // them first and the cell amounts second equals one combined shrink.
        let area = shrink_percent(
            area,
            SpacingValue::percent(self.top),
            SpacingValue::percent(self.right),
            SpacingValue::percent(self.bottom),
            SpacingValue::percent(self.left),
        )?;
        shrink(
            area,
            SpacingValue::cells(self.top),
            SpacingValue::cells(self.right),
            SpacingValue::cells(self.bottom),
            SpacingValue::cells(self.left),
        )
    }
}

/// Configuration a child copies from its parent when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inherited {
    pub border_color: Color,
    pub focused_color: Color,
    pub title_color: Option<Color>,
    pub title_focused_color: Option<Color>,
}

impl Default for Inherited {
    fn default() -> Self {
        Self {
            border_color: Color::Default,
            focused_color: Color::Yellow,
            title_color: None,
            title_focused_color: None,
        }
    }
}

/// Tag grouping containers for scoped focus navigation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FocusGroup(pub u32);

impl fmt::Display for FocusGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of focus groups a key is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusGroups(BTreeSet<FocusGroup>);

impl FocusGroups {
    /// First group of `declared` (in declaration order) present in this set.
    #[must_use]
    pub fn first_matching(&self, declared: &[FocusGroup]) -> Option<FocusGroup> {
        declared.iter().copied().find(|&group| self.contains(group))
    }

    #[must_use]
    pub fn contains(&self, group: FocusGroup) -> bool {
        self.0.contains(&group)
    }

    /// Groups in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = FocusGroup> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for FocusGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, group) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{group}")?;
        }
        f.write_str("]")
    }
}

impl FromIterator<FocusGroup> for FocusGroups {
    fn from_iter<I: IntoIterator<Item = FocusGroup>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Direction of a focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusDirection {
    Next,
    Previous,
}

impl FocusDirection {
    const fn opposite(self) -> Self {
        match self {
            Self::Next => Self::Previous,
            Self::Previous => Self::Next,
        }
    }
}

impl fmt::Display for FocusDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Next => "KeyFocusGroupsNext",
            Self::Previous => "KeyFocusGroupsPrevious",
        })
    }
}

/// Options with exactly one value per tree.
///
/// Setting any of these through any container changes them for the whole
/// tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlobalOptions {
    /// Key moving focus to the next leaf.
    pub key_focus_next: Option<KeyChord>,
    /// Key moving focus to the previous leaf.
    pub key_focus_previous: Option<KeyChord>,
    /// Keys moving focus to the next leaf within their groups.
    pub key_focus_groups_next: FxHashMap<KeyChord, FocusGroups>,
    /// Keys moving focus to the previous leaf within their groups.
    pub key_focus_groups_previous: FxHashMap<KeyChord, FocusGroups>,
}

impl GlobalOptions {
    /// Groups bound to `key` for `direction`, if any.
    #[must_use]
    pub fn groups_for(&self, direction: FocusDirection, key: KeyChord) -> Option<&FocusGroups> {
        self.group_map(direction).get(&key)
    }

    fn group_map(&self, direction: FocusDirection) -> &FxHashMap<KeyChord, FocusGroups> {
        match direction {
            FocusDirection::Next => &self.key_focus_groups_next,
            FocusDirection::Previous => &self.key_focus_groups_previous,
        }
    }

    fn bind_groups(
        &mut self,
        direction: FocusDirection,
        key: KeyChord,
        groups: &[FocusGroup],
    ) -> Result<(), ConfigError> {
        if groups.is_empty() {
            return Ok(());
        }
        if let Some(bound) = self.group_map(direction.opposite()).get(&key) {
            return Err(ConfigError::KeyAlreadyBound {
                key,
                bound_as: direction.opposite(),
                groups: bound.clone(),
            });
        }
        let map = match direction {
            FocusDirection::Next => &mut self.key_focus_groups_next,
            FocusDirection::Previous => &mut self.key_focus_groups_previous,
        };
        map.entry(key).or_default().0.extend(groups.iter().copied());
        Ok(())
    }
}

/// Local and inherited configuration of one container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// User identifier, empty when unset.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub split: SplitAxis,
    pub split_size: SplitSize,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub border: LineStyle,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub border_title: String,
    pub border_title_align: HAlign,
    pub margin: Spacing,
    pub padding: Spacing,
    /// Excluded from global next/previous focus traversal.
    pub key_focus_skip: bool,
    /// Focus groups in declaration order.
    pub key_focus_groups: Vec<FocusGroup>,
    pub inherited: Inherited,
}

impl ContainerConfig {
    pub(crate) fn new(inherited: Inherited) -> Self {
        Self {
            id: String::new(),
            split: SplitAxis::default(),
            split_size: SplitSize::default(),
            h_align: HAlign::Center,
            v_align: VAlign::Middle,
            border: LineStyle::None,
            border_title: String::new(),
            border_title_align: HAlign::Left,
            margin: Spacing::default(),
            padding: Spacing::default(),
            key_focus_skip: false,
            key_focus_groups: Vec::new(),
            inherited,
        }
    }

    /// Whether the container declared membership in `group`.
    #[must_use]
    pub fn in_focus_group(&self, group: FocusGroup) -> bool {
        self.key_focus_groups.contains(&group)
    }
}

/// One configuration mutation.
///
/// Options are plain values: they can be inspected, cloned, and applied to
/// several containers.
#[derive(Debug, Clone)]
pub enum ContainerOption {
    /// Set a tree-unique, non-empty identifier.
    Id(String),
    /// Remove the widget and any children.
    Clear,
    /// Place a widget, removing any children.
    PlaceWidget(Arc<dyn Widget>),
    /// Replace the content with two new children.
    Split {
        axis: SplitAxis,
        /// Options for the left (vertical) or top (horizontal) child.
        first: Vec<ContainerOption>,
        /// Options for the right (vertical) or bottom (horizontal) child.
        second: Vec<ContainerOption>,
        sizing: Vec<SplitOption>,
    },
    Margin {
        side: Side,
        value: SpacingValue,
    },
    Padding {
        side: Side,
        value: SpacingValue,
    },
    AlignHorizontal(HAlign),
    AlignVertical(VAlign),
    Border(LineStyle),
    BorderTitle(String),
    BorderTitleAlign(HAlign),
    BorderColor(Color),
    FocusedColor(Color),
    TitleColor(Color),
    TitleFocusedColor(Color),
    KeyFocusNext(KeyChord),
    KeyFocusPrevious(KeyChord),
    KeyFocusSkip,
    /// Append groups; an empty list removes the container from all groups.
    KeyFocusGroups(Vec<FocusGroup>),
    KeyFocusGroupsNext {
        key: KeyChord,
        groups: Vec<FocusGroup>,
    },
    KeyFocusGroupsPrevious {
        key: KeyChord,
        groups: Vec<FocusGroup>,
    },
    /// Give this container keyboard focus.
    Focused,
}

macro_rules! spacing_options {
    ($($(#[$doc:meta])* $name:ident => $kind:ident, $side:ident, $value:ident($ty:ty);)*) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name(value: $ty) -> Self {
                Self::$kind {
                    side: Side::$side,
                    value: SpacingValue::$value(value),
                }
            }
        )*
    };
}

impl ContainerOption {
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    #[must_use]
    pub fn place_widget(widget: Arc<dyn Widget>) -> Self {
        Self::PlaceWidget(widget)
    }

    /// Split into left and right children.
    #[must_use]
    pub fn split_vertical(
        left: impl IntoIterator<Item = ContainerOption>,
        right: impl IntoIterator<Item = ContainerOption>,
        sizing: impl IntoIterator<Item = SplitOption>,
    ) -> Self {
        Self::Split {
            axis: SplitAxis::Vertical,
            first: left.into_iter().collect(),
            second: right.into_iter().collect(),
            sizing: sizing.into_iter().collect(),
        }
    }

    /// Split into top and bottom children.
    #[must_use]
    pub fn split_horizontal(
        top: impl IntoIterator<Item = ContainerOption>,
        bottom: impl IntoIterator<Item = ContainerOption>,
        sizing: impl IntoIterator<Item = SplitOption>,
    ) -> Self {
        Self::Split {
            axis: SplitAxis::Horizontal,
            first: top.into_iter().collect(),
            second: bottom.into_iter().collect(),
            sizing: sizing.into_iter().collect(),
        }
    }

    spacing_options! {
        /// Cells reserved outside the container at its top.
        margin_top => Margin, Top, Cells(u16);
        margin_right => Margin, Right, Cells(u16);
        margin_bottom => Margin, Bottom, Cells(u16);
        margin_left => Margin, Left, Cells(u16);
        /// Percentage of the height reserved outside the container at its top.
        margin_top_percent => Margin, Top, Percent(u8);
        margin_right_percent => Margin, Right, Percent(u8);
        margin_bottom_percent => Margin, Bottom, Percent(u8);
        margin_left_percent => Margin, Left, Percent(u8);
        /// Cells between the container's top edge and its widget.
        padding_top => Padding, Top, Cells(u16);
        padding_right => Padding, Right, Cells(u16);
        padding_bottom => Padding, Bottom, Cells(u16);
        padding_left => Padding, Left, Cells(u16);
        padding_top_percent => Padding, Top, Percent(u8);
        padding_right_percent => Padding, Right, Percent(u8);
        padding_bottom_percent => Padding, Bottom, Percent(u8);
        padding_left_percent => Padding, Left, Percent(u8);
    }

    #[must_use]
    pub fn border_title(title: impl Into<String>) -> Self {
        Self::BorderTitle(title.into())
    }

    #[must_use]
    pub fn key_focus_next(key: impl Into<KeyChord>) -> Self {
        Self::KeyFocusNext(key.into())
    }

    #[must_use]
    pub fn key_focus_previous(key: impl Into<KeyChord>) -> Self {
        Self::KeyFocusPrevious(key.into())
    }

    #[must_use]
    pub fn key_focus_groups(groups: impl IntoIterator<Item = FocusGroup>) -> Self {
        Self::KeyFocusGroups(groups.into_iter().collect())
    }

    #[must_use]
    pub fn key_focus_groups_next(
        key: impl Into<KeyChord>,
        groups: impl IntoIterator<Item = FocusGroup>,
    ) -> Self {
        Self::KeyFocusGroupsNext {
            key: key.into(),
            groups: groups.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn key_focus_groups_previous(
        key: impl Into<KeyChord>,
        groups: impl IntoIterator<Item = FocusGroup>,
    ) -> Self {
        Self::KeyFocusGroupsPrevious {
            key: key.into(),
            groups: groups.into_iter().collect(),
        }
    }

    /// Validate the argument and mutate `container`.
    ///
    /// A failing split reports the innermost container whose option was
    /// rejected.
    pub fn apply(&self, container: &mut Container) -> Result<(), OptionError> {
        if let Self::Split {
            axis,
            first,
            second,
            sizing,
        } = self
        {
            return container.split(*axis, sizing, first, second);
        }
        self.apply_local(container)
            .map_err(|source| OptionError::new(container, source))
    }

    fn apply_local(&self, container: &mut Container) -> Result<(), ConfigError> {
        let config = &mut container.config;
        match self {
            Self::Id(id) => {
                if id.is_empty() {
                    return Err(ConfigError::EmptyId);
                }
                config.id.clone_from(id);
            }
            Self::Clear => container.clear_content(),
            Self::PlaceWidget(widget) => container.place_widget(Arc::clone(widget)),
            // Routed through `apply`.
            Self::Split { .. } => {}
            Self::Margin { side, value } => config.margin.set(SpacingKind::Margin, *side, *value)?,
            Self::Padding { side, value } => {
                config.padding.set(SpacingKind::Padding, *side, *value)?;
            }
            Self::AlignHorizontal(align) => config.h_align = *align,
            Self::AlignVertical(align) => config.v_align = *align,
            Self::Border(style) => config.border = *style,
            Self::BorderTitle(title) => config.border_title.clone_from(title),
            Self::BorderTitleAlign(align) => config.border_title_align = *align,
            Self::BorderColor(color) => config.inherited.border_color = *color,
            Self::FocusedColor(color) => config.inherited.focused_color = *color,
            Self::TitleColor(color) => config.inherited.title_color = Some(*color),
            Self::TitleFocusedColor(color) => config.inherited.title_focused_color = Some(*color),
            Self::KeyFocusNext(key) => container.shared.global_mut().key_focus_next = Some(*key),
            Self::KeyFocusPrevious(key) => {
                container.shared.global_mut().key_focus_previous = Some(*key);
            }
            Self::KeyFocusSkip => config.key_focus_skip = true,
            Self::KeyFocusGroups(groups) => {
                if groups.is_empty() {
                    config.key_focus_groups.clear();
                } else {
                    config.key_focus_groups.extend(groups.iter().copied());
                }
            }
            Self::KeyFocusGroupsNext { key, groups } => container
                .shared
                .global_mut()
                .bind_groups(FocusDirection::Next, *key, groups)?,
            Self::KeyFocusGroupsPrevious { key, groups } => container
                .shared
                .global_mut()
                .bind_groups(FocusDirection::Previous, *key, groups)?,
            Self::Focused => container.shared.set_focus(container.id()),
        }
        Ok(())
    }
}

/// Apply `opts` in order, stopping at the first failure.
///
/// Options before the failing one remain applied.
pub fn apply_options(container: &mut Container, opts: &[ContainerOption]) -> Result<(), OptionError> {
    for opt in opts {
        if let Err(err) = opt.apply(container) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                container = %err.container,
                error = %err.source,
                "container option rejected"
            );
            return Err(err);
        }
    }
    Ok(())
}

/// A [`ConfigError`] tied to the container it was raised on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionError {
    pub container: ContainerId,
    /// User identifier of the container at the time of the failure, empty
    /// when unset.
    pub id: String,
    pub source: ConfigError,
}

impl OptionError {
    pub(crate) fn new(container: &Container, source: ConfigError) -> Self {
        Self {
            container: container.id(),
            id: container.config.id.clone(),
            source,
        }
    }
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id.is_empty() {
            write!(f, "container {}: {}", self.container, self.source)
        } else {
            write!(f, "container {:?}: {}", self.id, self.source)
        }
    }
}

impl std::error::Error for OptionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Split percentage outside `0 < p < 100`.
    InvalidSplitPercent { value: u8 },
    /// Margin/padding percentage outside `0 <= p <= 100`.
    InvalidSpacingPercent {
        kind: SpacingKind,
        side: Side,
        value: u8,
    },
    /// The side already holds a non-zero value in the other representation.
    ConflictingSpacing {
        kind: SpacingKind,
        side: Side,
        requested: SpacingValue,
        existing: SpacingValue,
    },
    EmptyId,
    /// The key already moves focus within groups in the other direction.
    KeyAlreadyBound {
        key: KeyChord,
        bound_as: FocusDirection,
        groups: FocusGroups,
    },
    DuplicateId { id: String },
    /// Both a fixed size and a non-default percentage are configured.
    ConflictingSplitSize {
        container: ContainerId,
        id: String,
        percent: u8,
        fixed: u16,
    },
    /// No container carries the requested identifier.
    UnknownId { id: String },
    /// No container carries the requested internal ID.
    UnknownContainer { container: ContainerId },
}

fn spacing_option_name(kind: SpacingKind, side: Side, value: SpacingValue) -> String {
    match value {
        SpacingValue::Cells(cells) => format!("{kind}{side}({cells})"),
        SpacingValue::Percent(percent) => format!("{kind}{side}Percent({percent})"),
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSplitPercent { value } => {
                write!(f, "invalid split percentage {value}, must be in range 0 < p < 100")
            }
            Self::InvalidSpacingPercent { kind, side, value } => write!(
                f,
                "invalid {}, must be in range 0 <= value <= 100",
                spacing_option_name(*kind, *side, SpacingValue::Percent(*value))
            ),
            Self::ConflictingSpacing {
                kind,
                side,
                requested,
                existing,
            } => write!(
                f,
                "cannot specify both {} and {}",
                spacing_option_name(*kind, *side, *requested),
                spacing_option_name(*kind, *side, *existing)
            ),
            Self::EmptyId => f.write_str("the container ID cannot be an empty string"),
            Self::KeyAlreadyBound {
                key,
                bound_as,
                groups,
            } => write!(
                f,
                "key {key} is already assigned as a {bound_as} for focus groups {groups}"
            ),
            Self::DuplicateId { id } => write!(f, "duplicate container ID {id:?}"),
            Self::ConflictingSplitSize {
                container,
                id,
                percent,
                fixed,
            } => {
                if id.is_empty() {
                    write!(f, "container {container}: ")?;
                } else {
                    write!(f, "container {id:?}: ")?;
                }
                write!(
                    f,
                    "only one of split fixed `{fixed}` and split percent `{percent}` is allowed per container"
                )
            }
            Self::UnknownId { id } => write!(f, "no container with ID {id:?}"),
            Self::UnknownContainer { container } => {
                write!(f, "container {container} is not part of this tree")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
