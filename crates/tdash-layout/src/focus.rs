#![forbid(unsafe_code)]

//! Keyboard focus.
//!
//! Exactly one container of a tree holds focus. Focus starts on the root
//! and falls back to it whenever the focused container is removed from the
//! tree.
//!
//! Traversal order is the pre-order of the tree (parent, first, second)
//! restricted to leaves. Moving from a container picks the nearest eligible
//! leaf after (next) or before (previous) its position, wrapping around the
//! ends of the order.
//!
//! - Global navigation skips leaves configured with
//!   [`ContainerOption::KeyFocusSkip`](crate::options::ContainerOption::KeyFocusSkip).
//! - Group navigation first picks one group: the first group declared by the
//!   focused container that the pressed key is bound to. It then only
//!   considers leaves in that group, skip flags ignored. If the focused
//!   container is in none of the key's groups nothing moves.

use tdash_core::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tdash_core::geometry::Rect;

use crate::container::{Container, ContainerError, ContainerId};
use crate::options::{ConfigError, FocusDirection, FocusGroups};

impl Container {
    /// The container currently holding focus.
    #[must_use]
    pub fn focused(&self) -> ContainerId {
        match self.shared.focus() {
            Some(id) if self.find(id).is_some() => id,
            _ => self.id(),
        }
    }

    /// Whether `container` currently holds focus.
    #[must_use]
    pub fn is_focused(&self, container: ContainerId) -> bool {
        self.focused() == container
    }

    /// Focus `container` unconditionally.
    pub fn focus(&mut self, container: ContainerId) -> Result<(), ConfigError> {
        if self.find(container).is_none() {
            return Err(ConfigError::UnknownContainer { container });
        }
        self.move_focus(Some(container));
        Ok(())
    }

    /// Move focus to the next non-skipped leaf. Returns whether focus moved.
    pub fn focus_next(&mut self) -> bool {
        self.step_global(FocusDirection::Next)
    }

    /// Move focus to the previous non-skipped leaf. Returns whether focus
    /// moved.
    pub fn focus_previous(&mut self) -> bool {
        self.step_global(FocusDirection::Previous)
    }

    /// Move focus to the next leaf of the group selected from `groups`.
    pub fn focus_group_next(&mut self, groups: &FocusGroups) -> bool {
        self.step_group(FocusDirection::Next, groups)
    }

    /// Move focus to the previous leaf of the group selected from `groups`.
    pub fn focus_group_previous(&mut self, groups: &FocusGroups) -> bool {
        self.step_group(FocusDirection::Previous, groups)
    }

    /// Focus the deepest container under the point, if any.
    pub fn focus_at(&mut self, x: u16, y: u16) -> bool {
        let target = self.container_at(x, y).map(Container::id);
        self.move_focus(target)
    }

    /// Route a key press to the configured focus bindings.
    ///
    /// The global next/previous keys are checked first, then the group
    /// "next" bindings, then the group "previous" bindings. Releases are
    /// ignored. Returns whether focus moved.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if !event.is_press() {
            return false;
        }
        let chord = event.chord();
        let global = self.shared.global();
        if global.key_focus_next == Some(chord) {
            self.step_global(FocusDirection::Next)
        } else if global.key_focus_previous == Some(chord) {
            self.step_global(FocusDirection::Previous)
        } else if let Some(groups) = global.groups_for(FocusDirection::Next, chord) {
            self.step_group(FocusDirection::Next, groups)
        } else if let Some(groups) = global.groups_for(FocusDirection::Previous, chord) {
            self.step_group(FocusDirection::Previous, groups)
        } else {
            false
        }
    }

    /// Focus the container under a left-button press.
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> bool {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (x, y) = event.position();
                self.focus_at(x, y)
            }
            _ => false,
        }
    }

    /// Dispatch one input event.
    ///
    /// Resizes re-resolve the tree at the origin. Returns whether focus
    /// moved.
    pub fn handle_event(&mut self, event: &Event) -> Result<bool, ContainerError> {
        match event {
            Event::Key(key) => Ok(self.handle_key(key)),
            Event::Mouse(mouse) => Ok(self.handle_mouse(mouse)),
            Event::Resize { width, height } => {
                self.resolve(Rect::from_size(*width, *height))?;
                Ok(false)
            }
            Event::Focus(_) => Ok(false),
        }
    }

    fn step_global(&self, direction: FocusDirection) -> bool {
        let target = self.neighbour(self.focused(), direction, |node| {
            !node.config.key_focus_skip
        });
        self.move_focus(target)
    }

    fn step_group(&self, direction: FocusDirection, groups: &FocusGroups) -> bool {
        let current = self.focused();
        let Some(declared) = self.find(current).map(|node| &node.config.key_focus_groups) else {
            return false;
        };
        let Some(group) = groups.first_matching(declared) else {
            return false;
        };
        let target = self.neighbour(current, direction, |node| node.config.in_focus_group(group));
        self.move_focus(target)
    }

    /// Nearest eligible leaf after (or before) `from` in pre-order, wrapping.
    fn neighbour(
        &self,
        from: ContainerId,
        direction: FocusDirection,
        eligible: impl Fn(&Container) -> bool,
    ) -> Option<ContainerId> {
        let mut passed = false;
        let mut first_before = None;
        let mut last_before = None;
        let mut first_after = None;
        let mut last_after = None;
        for node in self.pre_order() {
            if node.id() == from {
                passed = true;
                continue;
            }
            if !node.is_leaf() || !eligible(node) {
                continue;
            }
            if passed {
                first_after.get_or_insert(node.id());
                last_after = Some(node.id());
            } else {
                first_before.get_or_insert(node.id());
                last_before = Some(node.id());
            }
        }
        match direction {
            FocusDirection::Next => first_after.or(first_before),
            FocusDirection::Previous => last_before.or(last_after),
        }
    }

    fn move_focus(&self, target: Option<ContainerId>) -> bool {
        let Some(target) = target else {
            return false;
        };
        let current = self.focused();
        if target == current {
            return false;
        }
        self.shared.set_focus(target);
        #[cfg(feature = "tracing")]
        tracing::debug!(from = %current, to = %target, "focus moved");
        true
    }
}
