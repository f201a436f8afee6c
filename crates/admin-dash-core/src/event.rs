//! Input events understood by the dashboard.
//!
//! The browser runtime converts DOM events into these; tests construct them
//! directly.

use crate::dom::DeferredMessage;
use crate::dropdown::GroupId;
use crate::geometry::Point;
use crate::table::{PageRequest, RowAction};
use serde::{Deserialize, Serialize};

/// Keys the dashboard reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Escape
    Escape,
    /// Enter/Return
    Enter,
    /// Tab
    Tab,
    /// Anything else
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value. `Esc` is the legacy Escape name.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }
}

/// Dashboard input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardEvent {
    /// Hamburger toggle clicked
    HamburgerClick,
    /// Mobile overlay clicked
    OverlayClick,
    /// Sidebar close control clicked
    CloseButtonClick,
    /// Key pressed anywhere in the document
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Window resized
    Resize {
        /// New viewport width
        width: f32,
    },
    /// Pointer entered the sidebar
    SidebarEnter,
    /// Pointer left the sidebar
    SidebarLeave,
    /// First finger down
    TouchStart {
        /// Touch position
        position: Point,
    },
    /// Finger moved
    TouchMove {
        /// New position
        position: Point,
    },
    /// Finger lifted or touch cancelled
    TouchEnd,
    /// Navigation link clicked
    NavLinkClick {
        /// Link target, if any
        href: Option<String>,
    },
    /// Dropdown group trigger clicked
    DropdownToggle {
        /// Group identifier
        group: GroupId,
    },
    /// Click anywhere in the document
    DocumentClick {
        /// Whether the click landed inside a dropdown group
        inside_dropdown: bool,
    },
    /// Search box changed
    SearchInput {
        /// Current text
        text: String,
    },
    /// Page-size selector changed
    PageSizeChange {
        /// Raw selector value
        value: String,
    },
    /// Pagination control used
    PageChange(PageRequest),
    /// Row action button clicked
    RowAction {
        /// Which button
        action: RowAction,
        /// Record identifier
        user_id: u32,
    },
    /// Add-admin button clicked
    AddAdminClick,
    /// Logo clicked
    LogoClick,
    /// A message scheduled by an earlier [`DomCommand::Defer`](crate::DomCommand::Defer)
    Deferred(DeferredMessage),
}
