//! DOM commands - the contract between the state machines and the page.
//!
//! Controllers never hold element handles. They record [`DomCommand`]s on a
//! [`DomRecorder`]; the browser runtime resolves each [`Target`] against the
//! document and applies it. A command whose target is missing from the page is
//! skipped without error.
//!
//! Recording instead of mutating keeps every transition observable in tests:
//!
//! ```
//! use admin_dash_core::{DomCommand, DomRecorder, Target};
//!
//! let mut rec = DomRecorder::new();
//! rec.add_class(Target::Sidebar, "open");
//! rec.lock_scroll();
//! assert_eq!(rec.command_count(), 2);
//! assert!(rec.contains(&DomCommand::LockScroll));
//! ```

use crate::dropdown::GroupId;
use serde::{Deserialize, Serialize};

/// An element the dashboard addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Sidebar container
    Sidebar,
    /// Mobile overlay behind the drawer
    Overlay,
    /// Hamburger toggle
    Hamburger,
    /// Icon element inside the hamburger toggle
    HamburgerIcon,
    /// First navigation link inside the sidebar
    FirstNavLink,
    /// Users table body
    TableBody,
    /// "Showing x to y of z entries" line
    TableSummary,
    /// Entries-per-page selector
    PageSizeSelect,
    /// Toast container
    ToastContainer,
    /// Brand logo
    Logo,
    /// A dropdown group by its `data-group` value
    DropdownGroup(GroupId),
    /// Any element by id (transient toasts, tooltips)
    Element(String),
}

/// A message delivered back to the dashboard after a delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredMessage {
    /// Close the mobile drawer (after a navigation click)
    CloseDrawer,
    /// Remove a transient class
    RemoveClass {
        /// Element
        target: Target,
        /// Class to remove
        class: String,
    },
    /// Remove a transient element
    RemoveElement {
        /// Element
        target: Target,
    },
    /// Apply a debounced search if it is still the latest one
    FlushSearch {
        /// Debounce ticket
        ticket: u64,
    },
}

/// A single DOM mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomCommand {
    /// `classList.add`
    AddClass {
        /// Element
        target: Target,
        /// Class name
        class: String,
    },
    /// `classList.remove`
    RemoveClass {
        /// Element
        target: Target,
        /// Class name
        class: String,
    },
    /// Replace the full `className`
    SetClassName {
        /// Element
        target: Target,
        /// New class attribute
        class_name: String,
    },
    /// Replace `innerHTML`
    SetInnerHtml {
        /// Element
        target: Target,
        /// Markup
        html: String,
    },
    /// `insertAdjacentHTML("beforeend", ..)`
    AppendHtml {
        /// Element
        target: Target,
        /// Markup
        html: String,
    },
    /// Detach an element from the document
    RemoveElement {
        /// Element
        target: Target,
    },
    /// Move keyboard focus
    Focus {
        /// Element
        target: Target,
    },
    /// Suppress page scroll
    LockScroll,
    /// Restore page scroll
    UnlockScroll,
    /// Dispatch `message` after `delay_ms`
    Defer {
        /// Delay in milliseconds
        delay_ms: u32,
        /// Message to deliver
        message: DeferredMessage,
    },
}

/// Records DOM commands in order.
#[derive(Debug, Default, Clone)]
pub struct DomRecorder {
    commands: Vec<DomCommand>,
}

impl DomRecorder {
    /// Create a new empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[DomCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the recorder.
    pub fn take_commands(&mut self) -> Vec<DomCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether an identical command was recorded.
    #[must_use]
    pub fn contains(&self, command: &DomCommand) -> bool {
        self.commands.contains(command)
    }

    /// Record an arbitrary command.
    pub fn push(&mut self, command: DomCommand) {
        self.commands.push(command);
    }

    pub fn add_class(&mut self, target: Target, class: impl Into<String>) {
        self.push(DomCommand::AddClass {
            target,
            class: class.into(),
        });
    }

    pub fn remove_class(&mut self, target: Target, class: impl Into<String>) {
        self.push(DomCommand::RemoveClass {
            target,
            class: class.into(),
        });
    }

    pub fn set_class_name(&mut self, target: Target, class_name: impl Into<String>) {
        self.push(DomCommand::SetClassName {
            target,
            class_name: class_name.into(),
        });
    }

    pub fn set_inner_html(&mut self, target: Target, html: impl Into<String>) {
        self.push(DomCommand::SetInnerHtml {
            target,
            html: html.into(),
        });
    }

    pub fn append_html(&mut self, target: Target, html: impl Into<String>) {
        self.push(DomCommand::AppendHtml {
            target,
            html: html.into(),
        });
    }

    pub fn focus(&mut self, target: Target) {
        self.push(DomCommand::Focus { target });
    }

    pub fn lock_scroll(&mut self) {
        self.push(DomCommand::LockScroll);
    }

    pub fn unlock_scroll(&mut self) {
        self.push(DomCommand::UnlockScroll);
    }

    /// Schedule a message for later delivery.
    pub fn defer(&mut self, delay_ms: u32, message: DeferredMessage) {
        self.push(DomCommand::Defer { delay_ms, message });
    }
}
