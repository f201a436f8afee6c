//! Navigation dropdown groups.
//!
//! At most one group is open at a time. Toggles are refused while the
//! desktop rail is collapsed and not hovered, since the rail has no room for
//! a submenu.

use crate::dom::{DomRecorder, Target};
use crate::sidebar::SidebarState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a dropdown group (its `data-group` attribute).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Create a group id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Outcome of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The group is now open
    Opened,
    /// The group is now closed
    Closed,
    /// The collapsed rail refused the toggle
    Gated,
    /// No such group
    Unknown,
}

/// Open/closed state of every dropdown group.
#[derive(Debug, Clone)]
pub struct DropdownController {
    groups: Vec<GroupId>,
    open: Option<GroupId>,
    open_class: String,
}

impl DropdownController {
    /// Create a controller with no groups.
    #[must_use]
    pub fn new(open_class: impl Into<String>) -> Self {
        Self {
            groups: Vec::new(),
            open: None,
            open_class: open_class.into(),
        }
    }

    /// Register a group. Duplicates are ignored.
    pub fn register(&mut self, group: GroupId) {
        if !self.groups.contains(&group) {
            self.groups.push(group);
        }
    }

    /// Registered groups, in registration order.
    #[must_use]
    pub fn groups(&self) -> &[GroupId] {
        &self.groups
    }

    /// The open group, if any.
    #[must_use]
    pub const fn open_group(&self) -> Option<&GroupId> {
        self.open.as_ref()
    }

    /// Whether `group` is open.
    #[must_use]
    pub fn is_open(&self, group: &GroupId) -> bool {
        self.open.as_ref() == Some(group)
    }

    /// Close any other group, then flip `group`.
    pub fn toggle(
        &mut self,
        group: &GroupId,
        sidebar: &SidebarState,
        rec: &mut DomRecorder,
    ) -> ToggleOutcome {
        if !self.groups.contains(group) {
            tracing::warn!(%group, "dropdown.toggle: unknown group");
            return ToggleOutcome::Unknown;
        }
        if !sidebar.allows_submenus() {
            tracing::debug!(%group, "dropdown.toggle: gated by collapsed rail");
            return ToggleOutcome::Gated;
        }

        let was_open = self.is_open(group);
        self.close_all(rec);
        if was_open {
            tracing::debug!(%group, "dropdown.close");
            ToggleOutcome::Closed
        } else {
            rec.add_class(Target::DropdownGroup(group.clone()), self.open_class.clone());
            self.open = Some(group.clone());
            tracing::debug!(%group, "dropdown.open");
            ToggleOutcome::Opened
        }
    }

    /// Close every group.
    pub fn close_all(&mut self, rec: &mut DomRecorder) {
        if let Some(group) = self.open.take() {
            rec.remove_class(Target::DropdownGroup(group), self.open_class.clone());
        }
    }
}
