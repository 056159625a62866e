#![forbid(unsafe_code)]

//! The binary container tree.
//!
//! A [`Container`] owns either two children, a widget, or nothing. The tree
//! is built declaratively from [`ContainerOption`] lists: a split option
//! creates both children and applies their own option lists, recursively.
//!
//! All containers of one tree share a single [`GlobalOptions`] instance and a
//! focus tracker through an `Arc`. A tree is `Send + Sync`: an application that
//! reads input and renders on different threads guards the root with one
//! external mutex.
//!
//! # Invariants
//!
//! - Children and widget are mutually exclusive ([`Content`] holds one).
//! - Non-empty user identifiers are unique in the tree (checked by
//!   [`Container::validate`]).
//! - Every container has a non-zero [`ContainerId`] that is never reused
//!   within its tree.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tdash_core::geometry::Rect;

use crate::options::{
    ConfigError, ContainerConfig, ContainerOption, GlobalOptions, Inherited, OptionError,
    SplitAxis, SplitOption, apply_options,
};
use crate::resolve::ResolveError;

/// Stable identifier of a container within its tree.
///
/// `0` is reserved so IDs are always non-zero. IDs are allocated in creation
/// order and never reused, even after the container is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(u64);

impl ContainerId {
    /// ID of the first container created in a tree (its root).
    pub const ROOT: Self = Self(1);

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Content placed into a leaf container.
///
/// The container tree only checks for presence; drawing is up to the
/// application.
pub trait Widget: fmt::Debug + Send + Sync {
    /// Short human-readable name used in snapshots and logs.
    fn name(&self) -> &str {
        "widget"
    }
}

/// State shared by every container of one tree.
#[derive(Debug)]
pub(crate) struct TreeShared {
    global: RwLock<GlobalOptions>,
    /// Raw ID of the focused container, `0` when unset.
    focus: AtomicU64,
    next_id: AtomicU64,
}

impl TreeShared {
    fn new() -> Self {
        Self {
            global: RwLock::new(GlobalOptions::default()),
            focus: AtomicU64::new(0),
            next_id: AtomicU64::new(ContainerId::ROOT.get()),
        }
    }

    fn allocate_id(&self) -> ContainerId {
        ContainerId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    pub(crate) fn global(&self) -> RwLockReadGuard<'_, GlobalOptions> {
        self.global.read().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn global_mut(&self) -> RwLockWriteGuard<'_, GlobalOptions> {
        self.global.write().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn focus(&self) -> Option<ContainerId> {
        match self.focus.load(Ordering::Relaxed) {
            0 => None,
            raw => Some(ContainerId(raw)),
        }
    }

    pub(crate) fn set_focus(&self, id: ContainerId) {
        self.focus.store(id.get(), Ordering::Relaxed);
    }
}

/// What a container holds.
#[derive(Debug, Default)]
pub enum Content {
    /// Fresh or cleared leaf.
    #[default]
    Empty,
    /// A leaf displaying a widget.
    Widget(Arc<dyn Widget>),
    /// An inner node with exactly two children.
    Split {
        first: Box<Container>,
        second: Box<Container>,
    },
}

/// A node of the container tree.
#[derive(Debug)]
pub struct Container {
    id: ContainerId,
    pub(crate) config: ContainerConfig,
    pub(crate) shared: Arc<TreeShared>,
    pub(crate) content: Content,
    pub(crate) area: Rect,
    pub(crate) content_area: Option<Rect>,
}

impl Container {
    /// Build a new tree, apply `opts` to its root, and validate it.
    ///
    /// The root holds focus unless an option focuses another container.
    pub fn new(opts: &[ContainerOption]) -> Result<Self, ContainerError> {
        let mut root = Self::with_shared(Arc::new(TreeShared::new()), Inherited::default());
        root.shared.set_focus(root.id);
        apply_options(&mut root, opts)?;
        root.validate()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            containers = root.pre_order().count(),
            "container tree built"
        );
        Ok(root)
    }

    fn with_shared(shared: Arc<TreeShared>, inherited: Inherited) -> Self {
        Self {
            id: shared.allocate_id(),
            config: ContainerConfig::new(inherited),
            shared,
            content: Content::Empty,
            area: Rect::default(),
            content_area: None,
        }
    }

    /// Apply `opts` to this container without re-validating the tree.
    pub fn apply(&mut self, opts: &[ContainerOption]) -> Result<(), OptionError> {
        apply_options(self, opts)
    }

    /// Apply `opts` to the container with user identifier `id`, then
    /// re-validate the whole tree.
    pub fn update(&mut self, id: &str, opts: &[ContainerOption]) -> Result<(), ContainerError> {
        if id.is_empty() {
            return Err(ConfigError::EmptyId.into());
        }
        let target = self
            .find_mut(&|node| node.config.id == id)
            .ok_or_else(|| ConfigError::UnknownId { id: id.to_owned() })?;
        apply_options(target, opts)?;
        self.validate()?;
        Ok(())
    }

    /// Like [`update`](Self::update), addressing the container by its
    /// internal ID.
    pub fn apply_to(
        &mut self,
        container: ContainerId,
        opts: &[ContainerOption],
    ) -> Result<(), ContainerError> {
        let target = self
            .find_mut(&|node| node.id == container)
            .ok_or(ConfigError::UnknownContainer { container })?;
        apply_options(target, opts)?;
        self.validate()?;
        Ok(())
    }

    /// Check tree-wide invariants, reporting every violation at once.
    ///
    /// Walks the tree in pre-order (parent, first, second).
    pub fn validate(&self) -> Result<(), ValidationError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("container.validate").entered();

        let mut seen = FxHashSet::default();
        let mut issues = Vec::new();
        for node in self.pre_order() {
            let id = node.config.id.as_str();
            if !id.is_empty() && !seen.insert(id) {
                issues.push(ConfigError::DuplicateId { id: id.to_owned() });
            }
            let size = node.config.split_size;
            if size.is_conflicting()
                && let Some(fixed) = size.fixed
            {
                issues.push(ConfigError::ConflictingSplitSize {
                    container: node.id,
                    id: id.to_owned(),
                    percent: size.percent,
                    fixed,
                });
            }
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }

    pub(crate) fn clear_content(&mut self) {
        self.content = Content::Empty;
    }

    pub(crate) fn place_widget(&mut self, widget: Arc<dyn Widget>) {
        self.content = Content::Widget(widget);
    }

    /// Replace the content with two fresh children.
    ///
    /// The content stays empty when sizing or a child option fails.
    pub(crate) fn split(
        &mut self,
        axis: SplitAxis,
        sizing: &[SplitOption],
        first: &[ContainerOption],
        second: &[ContainerOption],
    ) -> Result<(), OptionError> {
        self.config.split = axis;
        self.content = Content::Empty;
        for opt in sizing {
            if let Err(source) = opt.apply(&mut self.config.split_size) {
                return Err(OptionError::new(self, source));
            }
        }
        let mut first_child = Self::with_shared(Arc::clone(&self.shared), self.config.inherited);
        apply_options(&mut first_child, first)?;
        let mut second_child = Self::with_shared(Arc::clone(&self.shared), self.config.inherited);
        apply_options(&mut second_child, second)?;
        self.content = Content::Split {
            first: Box::new(first_child),
            second: Box::new(second_child),
        };
        Ok(())
    }

    #[must_use]
    pub const fn id(&self) -> ContainerId {
        self.id
    }

    /// Local and inherited configuration.
    #[must_use]
    pub const fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Copy of the tree-wide options.
    #[must_use]
    pub fn global_options(&self) -> GlobalOptions {
        self.shared.global().clone()
    }

    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// Left (vertical split) or top (horizontal split) child.
    #[must_use]
    pub fn first(&self) -> Option<&Container> {
        match &self.content {
            Content::Split { first, .. } => Some(first),
            _ => None,
        }
    }

    /// Right (vertical split) or bottom (horizontal split) child.
    #[must_use]
    pub fn second(&self) -> Option<&Container> {
        match &self.content {
            Content::Split { second, .. } => Some(second),
            _ => None,
        }
    }

    #[must_use]
    pub fn widget(&self) -> Option<&Arc<dyn Widget>> {
        match &self.content {
            Content::Widget(widget) => Some(widget),
            _ => None,
        }
    }

    /// True when the container has no children.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !matches!(self.content, Content::Split { .. })
    }

    /// Area computed by the last [`resolve`](Self::resolve), margin excluded.
    #[must_use]
    pub const fn area(&self) -> Rect {
        self.area
    }

    /// Area left for the widget after border and padding, if this container
    /// holds a widget and was resolved successfully.
    #[must_use]
    pub const fn content_area(&self) -> Option<Rect> {
        self.content_area
    }

    /// Iterate the subtree rooted here, parent before first before second.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Find a container of this subtree by internal ID.
    #[must_use]
    pub fn find(&self, container: ContainerId) -> Option<&Container> {
        self.pre_order().find(|node| node.id == container)
    }

    /// Find a container of this subtree by user identifier.
    #[must_use]
    pub fn find_by_name(&self, id: &str) -> Option<&Container> {
        if id.is_empty() {
            return None;
        }
        self.pre_order().find(|node| node.config.id == id)
    }

    fn find_mut(&mut self, matches: &dyn Fn(&Container) -> bool) -> Option<&mut Container> {
        if matches(self) {
            return Some(self);
        }
        match &mut self.content {
            Content::Split { first, second } => first
                .find_mut(matches)
                .or_else(|| second.find_mut(matches)),
            _ => None,
        }
    }

    /// Serializable view of the subtree, for debug dumps and assertions.
    #[must_use]
    pub fn snapshot(&self) -> ContainerSnapshot {
        ContainerSnapshot {
            container: self.id,
            config: self.config.clone(),
            area: self.area,
            content_area: self.content_area,
            widget: self.widget().map(|widget| widget.name().to_owned()),
            children: match &self.content {
                Content::Split { first, second } => vec![first.snapshot(), second.snapshot()],
                _ => Vec::new(),
            },
        }
    }
}

/// Pre-order iterator over a subtree.
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Container>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Container;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Content::Split { first, second } = &node.content {
            self.stack.push(second);
            self.stack.push(first);
        }
        Some(node)
    }
}

/// Serializable view of one container and its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSnapshot {
    pub container: ContainerId,
    pub config: ContainerConfig,
    pub area: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_area: Option<Rect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContainerSnapshot>,
}

/// Every invariant violation found by one [`Container::validate`] pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<ConfigError>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Failure of a tree-level operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// The target of an update does not exist or cannot be named.
    Config(ConfigError),
    /// An option was rejected by a container.
    Apply(OptionError),
    /// The tree violates an invariant.
    Validation(ValidationError),
    /// Geometry could not be resolved.
    Geometry(ResolveError),
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid container option: {err}"),
            Self::Apply(err) => write!(f, "invalid container option: {err}"),
            Self::Validation(err) => write!(f, "invalid container tree: {err}"),
            Self::Geometry(err) => write!(f, "cannot resolve container geometry: {err}"),
        }
    }
}

impl std::error::Error for ContainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Apply(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::Geometry(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ContainerError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<OptionError> for ContainerError {
    fn from(err: OptionError) -> Self {
        Self::Apply(err)
    }
}

impl From<ValidationError> for ContainerError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<ResolveError> for ContainerError {
    fn from(err: ResolveError) -> Self {
        Self::Geometry(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{FocusGroup, SpacingValue};
    use tdash_core::style::{Color, LineStyle};

    #[derive(Debug)]
    struct Label(&'static str);

    impl Widget for Label {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn label(name: &'static str) -> Arc<dyn Widget> {
        Arc::new(Label(name))
    }

    fn ids(root: &Container) -> Vec<String> {
        root.pre_order().map(|node| node.config().id.clone()).collect()
    }

    #[test]
    fn new_root_is_an_empty_focused_leaf() {
        let root = Container::new(&[]).unwrap();
        assert_eq!(root.id(), ContainerId::ROOT);
        assert!(root.is_leaf());
        assert!(root.widget().is_none());
        assert!(root.first().is_none());
        assert_eq!(root.focused(), root.id());
    }

    #[test]
    fn split_creates_children_in_order() {
        let root = Container::new(&[
            ContainerOption::id("root"),
            ContainerOption::split_vertical(
                [ContainerOption::id("left")],
                [ContainerOption::split_horizontal(
                    [ContainerOption::id("top")],
                    [ContainerOption::id("bottom")],
                    [],
                )],
                [SplitOption::Percent(30)],
            ),
        ])
        .unwrap();
        assert_eq!(ids(&root), ["root", "left", "", "top", "bottom"]);
        assert_eq!(root.config().split, SplitAxis::Vertical);
        assert_eq!(root.config().split_size.percent, 30);
        let right = root.second().unwrap();
        assert_eq!(right.config().split, SplitAxis::Horizontal);
        // IDs follow creation order: root, left, right, top, bottom.
        let raw: Vec<u64> = root.pre_order().map(|node| node.id().get()).collect();
        assert_eq!(raw, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn split_drops_widget_and_widget_drops_children() {
        let mut root = Container::new(&[ContainerOption::place_widget(label("a"))]).unwrap();
        assert!(root.widget().is_some());

        root.apply(&[ContainerOption::split_vertical([], [], [])]).unwrap();
        assert!(root.widget().is_none());
        assert!(!root.is_leaf());

        let widget = label("b");
        root.apply(&[ContainerOption::place_widget(Arc::clone(&widget))])
            .unwrap();
        assert!(root.is_leaf());
        assert!(Arc::ptr_eq(root.widget().unwrap(), &widget));
    }

    #[test]
    fn clear_then_place_widget_holds_exactly_that_widget() {
        let mut root = Container::new(&[ContainerOption::split_horizontal(
            [ContainerOption::place_widget(label("x"))],
            [],
            [],
        )])
        .unwrap();
        let widget = label("w");
        root.apply(&[
            ContainerOption::Clear,
            ContainerOption::place_widget(Arc::clone(&widget)),
        ])
        .unwrap();
        assert!(root.first().is_none() && root.second().is_none());
        assert!(Arc::ptr_eq(root.widget().unwrap(), &widget));

        root.apply(&[ContainerOption::Clear]).unwrap();
        assert!(matches!(root.content(), Content::Empty));
    }

    #[test]
    fn failed_split_leaves_container_empty() {
        let mut root = Container::new(&[ContainerOption::place_widget(label("a"))]).unwrap();
        let err = root
            .apply(&[ContainerOption::split_vertical(
                [],
                [ContainerOption::id("")],
                [],
            )])
            .unwrap_err();
        // Reported on the second child, created after the root and the first.
        assert_eq!(err.container, ContainerId(3));
        assert_eq!(err.source, ConfigError::EmptyId);
        assert!(matches!(root.content(), Content::Empty));

        let err = root
            .apply(&[ContainerOption::split_vertical([], [], [SplitOption::Percent(0)])])
            .unwrap_err();
        assert_eq!(err.container, ContainerId::ROOT);
        assert_eq!(err.source, ConfigError::InvalidSplitPercent { value: 0 });
        assert!(root.is_leaf());
    }

    #[test]
    fn options_before_a_failure_stay_applied() {
        let err = Container::new(&[
            ContainerOption::id("kept"),
            ContainerOption::margin_top(2),
            ContainerOption::margin_top_percent(10),
            ContainerOption::Border(LineStyle::Light),
        ])
        .unwrap_err();
        let ContainerError::Apply(err) = err else {
            panic!("expected a rejected option, got {err:?}");
        };
        assert_eq!(err.id, "kept");
        assert!(matches!(err.source, ConfigError::ConflictingSpacing { .. }));

        let mut root = Container::new(&[]).unwrap();
        let result = root.apply(&[
            ContainerOption::id("kept"),
            ContainerOption::margin_top(2),
            ContainerOption::margin_top_percent(10),
            ContainerOption::Border(LineStyle::Light),
        ]);
        assert!(result.is_err());
        assert_eq!(root.config().id, "kept");
        assert_eq!(root.config().margin.top, Some(SpacingValue::Cells(2)));
        assert_eq!(root.config().border, LineStyle::None);
    }

    #[test]
    fn rejected_option_names_the_nested_container() {
        let err = Container::new(&[ContainerOption::split_vertical(
            [],
            [
                ContainerOption::id("x"),
                ContainerOption::margin_top(1),
                ContainerOption::margin_top_percent(5),
            ],
            [],
        )])
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid container option: container \"x\": cannot specify both MarginTopPercent(5) and MarginTop(1)"
        );
        let ContainerError::Apply(err) = err else {
            panic!("expected a rejected option, got {err:?}");
        };
        assert_eq!(err.container, ContainerId(3));

        let err = Container::new(&[ContainerOption::split_horizontal(
            [ContainerOption::padding_left_percent(101)],
            [],
            [],
        )])
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid container option: container #2: invalid PaddingLeftPercent(101), must be in range 0 <= value <= 100"
        );
    }

    #[test]
    fn tree_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Container>();
        assert_send_sync::<ContainerOption>();
        assert_send_sync::<ContainerError>();
    }

    #[test]
    fn inherited_scope_is_copied_at_creation() {
        let root = Container::new(&[
            ContainerOption::BorderColor(Color::Red),
            ContainerOption::split_vertical(
                [ContainerOption::FocusedColor(Color::Blue)],
                [],
                [],
            ),
        ])
        .unwrap();
        let left = root.first().unwrap();
        let right = root.second().unwrap();
        assert_eq!(left.config().inherited.border_color, Color::Red);
        assert_eq!(left.config().inherited.focused_color, Color::Blue);
        assert_eq!(right.config().inherited.focused_color, Color::Yellow);
        assert_eq!(root.config().inherited.focused_color, Color::Yellow);
    }

    #[test]
    fn parent_changes_after_split_do_not_reach_children() {
        let mut root = Container::new(&[ContainerOption::split_vertical([], [], [])]).unwrap();
        root.apply(&[ContainerOption::BorderColor(Color::Green)])
            .unwrap();
        assert_eq!(root.config().inherited.border_color, Color::Green);
        assert_eq!(
            root.first().unwrap().config().inherited.border_color,
            Color::Default
        );
    }

    #[test]
    fn global_scope_is_shared_by_every_container() {
        use tdash_core::event::{KeyChord, KeyCode};

        let mut root = Container::new(&[ContainerOption::split_vertical(
            [ContainerOption::id("left")],
            [],
            [],
        )])
        .unwrap();
        root.update("left", &[ContainerOption::key_focus_next(KeyCode::Tab)])
            .unwrap();
        assert_eq!(
            root.global_options().key_focus_next,
            Some(KeyChord::from(KeyCode::Tab))
        );
    }

    #[test]
    fn duplicate_ids_are_reported_together() {
        let err = Container::new(&[
            ContainerOption::id("a"),
            ContainerOption::split_vertical(
                [ContainerOption::id("a")],
                [ContainerOption::id("a")],
                [],
            ),
        ])
        .unwrap_err();
        let ContainerError::Validation(validation) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(validation.issues.len(), 2);
        assert_eq!(
            validation.to_string(),
            "duplicate container ID \"a\"; duplicate container ID \"a\""
        );
    }

    #[test]
    fn empty_ids_never_conflict() {
        let root = Container::new(&[ContainerOption::split_vertical(
            [ContainerOption::split_vertical([], [], [])],
            [],
            [],
        )])
        .unwrap();
        assert_eq!(root.pre_order().count(), 5);
        assert!(root.validate().is_ok());
    }

    #[test]
    fn fixed_with_non_default_percent_fails_validation() {
        let err = Container::new(&[ContainerOption::split_horizontal(
            [],
            [],
            [SplitOption::Fixed(3), SplitOption::Percent(40)],
        )])
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid container tree: container #1: only one of split fixed `3` and split percent `40` is allowed per container"
        );

        // An explicit 50 is indistinguishable from the default.
        assert!(
            Container::new(&[ContainerOption::split_horizontal(
                [],
                [],
                [SplitOption::Percent(50), SplitOption::Fixed(3)],
            )])
            .is_ok()
        );
    }

    #[test]
    fn update_targets_by_identifier_and_revalidates() {
        let mut root = Container::new(&[ContainerOption::split_vertical(
            [ContainerOption::id("left")],
            [ContainerOption::id("right")],
            [],
        )])
        .unwrap();
        root.update("right", &[ContainerOption::place_widget(label("gauge"))])
            .unwrap();
        assert_eq!(
            root.find_by_name("right").unwrap().widget().unwrap().name(),
            "gauge"
        );

        let err = root.update("missing", &[]).unwrap_err();
        assert_eq!(
            err,
            ContainerError::Config(ConfigError::UnknownId {
                id: "missing".into()
            })
        );
        assert_eq!(
            root.update("", &[]).unwrap_err(),
            ContainerError::Config(ConfigError::EmptyId)
        );

        let err = root
            .update("right", &[ContainerOption::id("left")])
            .unwrap_err();
        assert!(matches!(err, ContainerError::Validation(_)));
    }

    #[test]
    fn apply_to_uses_internal_ids() {
        let mut root = Container::new(&[ContainerOption::split_vertical([], [], [])]).unwrap();
        let second = root.second().unwrap().id();
        root.apply_to(second, &[ContainerOption::KeyFocusSkip])
            .unwrap();
        assert!(root.find(second).unwrap().config().key_focus_skip);

        let gone = ContainerId(99);
        assert_eq!(
            root.apply_to(gone, &[]).unwrap_err(),
            ContainerError::Config(ConfigError::UnknownContainer { container: gone })
        );
    }

    #[test]
    fn key_focus_groups_append_and_clear() {
        let mut root = Container::new(&[
            ContainerOption::key_focus_groups([FocusGroup(1)]),
            ContainerOption::key_focus_groups([FocusGroup(3), FocusGroup(2)]),
        ])
        .unwrap();
        assert_eq!(
            root.config().key_focus_groups,
            [FocusGroup(1), FocusGroup(3), FocusGroup(2)]
        );
        root.apply(&[ContainerOption::key_focus_groups([])]).unwrap();
        assert!(root.config().key_focus_groups.is_empty());
    }

    #[test]
    fn snapshot_mirrors_tree_shape() {
        let root = Container::new(&[ContainerOption::split_vertical(
            [ContainerOption::place_widget(label("text"))],
            [],
            [],
        )])
        .unwrap();
        let snapshot = root.snapshot();
        assert_eq!(snapshot.children.len(), 2);
        assert_eq!(snapshot.children[0].widget.as_deref(), Some("text"));
        assert!(snapshot.children[1].widget.is_none());
        assert!(snapshot.children[1].children.is_empty());
    }

    #[test]
    fn container_error_chains_source() {
        use std::error::Error as _;

        let err = ContainerError::from(ConfigError::EmptyId);
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("the container ID cannot be an empty string".to_owned())
        );

        let root = Container::new(&[ContainerOption::id("menu")]).unwrap();
        let err = ContainerError::from(OptionError::new(&root, ConfigError::EmptyId));
        let option = err.source().unwrap();
        assert_eq!(
            option.to_string(),
            "container \"menu\": the container ID cannot be an empty string"
        );
        assert_eq!(
            option.source().map(ToString::to_string),
            Some("the container ID cannot be an empty string".to_owned())
        );
    }
}
