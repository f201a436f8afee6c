//! Sidebar state machine.
//!
//! Two presentation modes share one sidebar element:
//!
//! - **Mobile** (below the breakpoint): a drawer that is `closed` or `open`.
//!   Opening locks page scroll and moves focus into the navigation; closing
//!   restores scroll and returns focus to the hamburger.
//! - **Desktop**: a rail that is `collapsed` or `expanded`, and that widens
//!   temporarily while hovered.
//!
//! Only the mode matching the current viewport is ever active. Resizing
//! across the breakpoint tears one down and sets the other up.

use crate::config::ClassNames;
use crate::dom::{DomRecorder, Target};
use crate::geometry::Viewport;
use serde::{Deserialize, Serialize};

/// Sidebar presentation state.
///
/// Invariants: on desktop `is_open` is false; on mobile `is_expanded`,
/// `is_hovered` and `hover_enabled` are false; `scroll_locked == is_open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidebarState {
    /// Current viewport class
    pub viewport: Viewport,
    /// Mobile drawer visible
    pub is_open: bool,
    /// Desktop rail pinned open
    pub is_expanded: bool,
    /// Pointer is over the desktop rail
    pub is_hovered: bool,
    /// Hover triggers are attached (desktop only)
    pub hover_enabled: bool,
    /// Page scroll is suppressed
    pub scroll_locked: bool,
}

impl SidebarState {
    /// Whether the viewport is desktop.
    #[must_use]
    pub const fn is_desktop(&self) -> bool {
        self.viewport.is_desktop()
    }

    /// Whether a dropdown submenu has room to show.
    #[must_use]
    pub const fn allows_submenus(&self) -> bool {
        !self.is_desktop() || self.is_expanded || self.is_hovered
    }

    /// Check the mode invariants.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        let mode_ok = if self.is_desktop() {
            !self.is_open
        } else {
            !self.is_expanded && !self.is_hovered && !self.hover_enabled
        };
        mode_ok && self.scroll_locked == self.is_open
    }
}

/// What a sidebar operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Drawer opened
    Opened,
    /// Drawer closed
    Closed,
    /// Rail expanded
    Expanded,
    /// Rail collapsed
    Collapsed,
    /// Nothing changed
    None,
}

/// Result of re-deriving the viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Crossed from desktop to mobile
    BecameMobile,
    /// Crossed from mobile to desktop
    BecameDesktop,
    /// Stayed in the same class
    Unchanged,
}

/// Sidebar controller.
#[derive(Debug, Clone)]
pub struct Sidebar {
    state: SidebarState,
    breakpoint: f32,
    classes: ClassNames,
}

impl Sidebar {
    /// Create a sidebar for a viewport `width` wide.
    #[must_use]
    pub fn new(width: f32, breakpoint: f32, classes: ClassNames) -> Self {
        let viewport = Viewport::classify(width, breakpoint);
        Self {
            state: SidebarState {
                viewport,
                hover_enabled: viewport.is_desktop(),
                ..SidebarState::default()
            },
            breakpoint,
            classes,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SidebarState {
        &self.state
    }

    /// Record the initial visual state.
    pub fn initialize(&self, rec: &mut DomRecorder) {
        rec.add_class(Target::Overlay, self.classes.hidden.clone());
        if self.state.is_desktop() {
            self.apply_collapsed_visuals(rec);
        } else {
            self.clear_rail_visuals(rec);
        }
    }

    /// Drawer toggle on mobile, rail toggle on desktop.
    pub fn toggle(&mut self, rec: &mut DomRecorder) -> Transition {
        match (self.state.is_desktop(), self.state.is_open, self.state.is_expanded) {
            (false, false, _) => self.open(rec),
            (false, true, _) => self.close(rec),
            (true, _, false) => self.expand(rec),
            (true, _, true) => self.collapse(rec),
        }
    }

    /// Open the mobile drawer.
    pub fn open(&mut self, rec: &mut DomRecorder) -> Transition {
        if self.state.is_desktop() || self.state.is_open {
            return Transition::None;
        }
        rec.add_class(Target::Sidebar, self.classes.open.clone());
        rec.remove_class(Target::Overlay, self.classes.hidden.clone());
        rec.lock_scroll();
        rec.focus(Target::FirstNavLink);
        self.state.is_open = true;
        self.state.scroll_locked = true;
        tracing::debug!("sidebar.open");
        Transition::Opened
    }

    /// Close the mobile drawer. Closing a closed drawer records nothing.
    pub fn close(&mut self, rec: &mut DomRecorder) -> Transition {
        if !self.state.is_open {
            return Transition::None;
        }
        rec.remove_class(Target::Sidebar, self.classes.open.clone());
        rec.add_class(Target::Overlay, self.classes.hidden.clone());
        rec.unlock_scroll();
        rec.focus(Target::Hamburger);
        self.state.is_open = false;
        self.state.scroll_locked = false;
        tracing::debug!("sidebar.close");
        Transition::Closed
    }

    /// Pin the desktop rail open.
    pub fn expand(&mut self, rec: &mut DomRecorder) -> Transition {
        if !self.state.is_desktop() || self.state.is_expanded {
            return Transition::None;
        }
        rec.remove_class(Target::Sidebar, self.classes.collapsed.clone());
        rec.add_class(Target::Sidebar, self.classes.expanded.clone());
        rec.set_class_name(Target::HamburgerIcon, self.classes.icon_chevron.clone());
        self.state.is_expanded = true;
        tracing::debug!("sidebar.expand");
        Transition::Expanded
    }

    /// Return the desktop rail to icons only.
    ///
    /// The caller must close any open dropdown when this returns
    /// [`Transition::Collapsed`].
    pub fn collapse(&mut self, rec: &mut DomRecorder) -> Transition {
        if !self.state.is_desktop() || !self.state.is_expanded {
            return Transition::None;
        }
        self.apply_collapsed_visuals(rec);
        self.state.is_expanded = false;
        tracing::debug!("sidebar.collapse");
        Transition::Collapsed
    }

    /// Pointer entered the rail.
    pub fn hover_enter(&mut self, rec: &mut DomRecorder) -> bool {
        if !self.state.hover_enabled || self.state.is_hovered {
            return false;
        }
        rec.add_class(Target::Sidebar, self.classes.hovered.clone());
        self.state.is_hovered = true;
        true
    }

    /// Pointer left the rail.
    ///
    /// Returns true when the rail is back to collapsed, in which case open
    /// dropdowns lose their anchor and must be closed.
    pub fn hover_leave(&mut self, rec: &mut DomRecorder) -> bool {
        if !self.state.hover_enabled || !self.state.is_hovered {
            return false;
        }
        rec.remove_class(Target::Sidebar, self.classes.hovered.clone());
        self.state.is_hovered = false;
        !self.state.is_expanded
    }

    /// Re-derive the viewport class from a new width.
    ///
    /// Any resize on mobile closes the drawer, even when the width stays
    /// below the breakpoint.
    pub fn handle_resize(&mut self, width: f32, rec: &mut DomRecorder) -> ResizeOutcome {
        let viewport = Viewport::classify(width, self.breakpoint);
        let outcome = match (self.state.viewport, viewport) {
            (Viewport::Desktop, Viewport::Mobile) => {
                self.state.viewport = viewport;
                self.state.is_expanded = false;
                self.state.is_hovered = false;
                self.state.hover_enabled = false;
                self.clear_rail_visuals(rec);
                ResizeOutcome::BecameMobile
            }
            (Viewport::Mobile, Viewport::Desktop) => {
                self.close(rec);
                self.state.viewport = viewport;
                self.state.is_expanded = false;
                self.state.is_hovered = false;
                self.state.hover_enabled = true;
                self.apply_collapsed_visuals(rec);
                ResizeOutcome::BecameDesktop
            }
            (Viewport::Mobile, Viewport::Mobile) => {
                self.close(rec);
                ResizeOutcome::Unchanged
            }
            (Viewport::Desktop, Viewport::Desktop) => ResizeOutcome::Unchanged,
        };
        if outcome != ResizeOutcome::Unchanged {
            tracing::debug!(width, viewport = ?viewport, "sidebar.viewport");
        }
        outcome
    }

    fn apply_collapsed_visuals(&self, rec: &mut DomRecorder) {
        rec.remove_class(Target::Sidebar, self.classes.expanded.clone());
        rec.add_class(Target::Sidebar, self.classes.collapsed.clone());
        rec.set_class_name(Target::HamburgerIcon, self.classes.icon_bars.clone());
    }

    fn clear_rail_visuals(&self, rec: &mut DomRecorder) {
        rec.remove_class(Target::Sidebar, self.classes.expanded.clone());
        rec.remove_class(Target::Sidebar, self.classes.collapsed.clone());
        rec.remove_class(Target::Sidebar, self.classes.hovered.clone());
        rec.set_class_name(Target::HamburgerIcon, self.classes.icon_bars.clone());
    }
}
