//! The dashboard controller.
//!
//! [`Dashboard`] owns every piece of page state and is the only thing the
//! runtime talks to: feed it a [`DashboardEvent`], apply the returned
//! [`DomCommand`]s.
//!
//! ```
//! use admin_dash_core::{Dashboard, DashboardConfig, DashboardEvent, DomCommand};
//!
//! let mut dash = Dashboard::new(DashboardConfig::default(), 375.0);
//! let commands = dash.dispatch(DashboardEvent::HamburgerClick);
//! assert!(dash.sidebar_state().is_open);
//! assert!(commands.contains(&DomCommand::LockScroll));
//! ```

use crate::actions::{LoggingActions, UserActions};
use crate::config::DashboardConfig;
use crate::dom::{DeferredMessage, DomCommand, DomRecorder, Target};
use crate::dropdown::{DropdownController, GroupId};
use crate::effects::{Toast, ToastKind};
use crate::event::{DashboardEvent, Key};
use crate::gesture::{SwipeConfig, SwipeDirection, SwipeRecognizer};
use crate::markup::{escape_html, page_size_options_html, rows_html, toast_html};
use crate::sidebar::{ResizeOutcome, Sidebar, SidebarState, Transition};
use crate::table::{RowAction, UserTable};
use crate::user::{mock_users, UserRecord};
use crate::util::Debouncer;
use std::fmt;

/// Page controller: sidebar, dropdowns, swipe tracking and the user table.
pub struct Dashboard {
    config: DashboardConfig,
    sidebar: Sidebar,
    dropdowns: DropdownController,
    swipe: SwipeRecognizer,
    table: UserTable,
    actions: Box<dyn UserActions>,
    search: Debouncer<String>,
    toast_seq: u64,
}

impl fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("sidebar", self.sidebar.state())
            .field("open_dropdown", &self.dropdowns.open_group())
            .field("filter", &self.table.filter())
            .field("page", &self.table.page())
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Create a dashboard over the built-in users for a viewport `width` wide.
    #[must_use]
    pub fn new(config: DashboardConfig, width: f32) -> Self {
        let sidebar = Sidebar::new(width, config.breakpoint_px, config.classes.clone());
        let dropdowns = DropdownController::new(config.classes.dropdown_open.clone());
        let swipe = SwipeRecognizer::with_config(SwipeConfig {
            threshold: config.swipe_threshold_px,
        });
        let table = UserTable::new(mock_users(), config.default_page_size)
            .with_actions(config.row_actions.clone());
        Self {
            config,
            sidebar,
            dropdowns,
            swipe,
            table,
            actions: Box::new(LoggingActions),
            search: Debouncer::new(),
            toast_seq: 0,
        }
    }

    /// Replace the user list.
    #[must_use]
    pub fn with_users(mut self, users: Vec<UserRecord>) -> Self {
        self.table = UserTable::new(users, self.config.default_page_size)
            .with_actions(self.config.row_actions.clone());
        self
    }

    /// Replace the user-management backend.
    #[must_use]
    pub fn with_actions(mut self, actions: impl UserActions + 'static) -> Self {
        self.actions = Box::new(actions);
        self
    }

    /// Register a dropdown group found on the page.
    pub fn register_dropdown_group(&mut self, group: impl Into<GroupId>) {
        self.dropdowns.register(group.into());
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Sidebar state.
    #[must_use]
    pub const fn sidebar_state(&self) -> &SidebarState {
        self.sidebar.state()
    }

    /// Dropdown groups.
    #[must_use]
    pub const fn dropdowns(&self) -> &DropdownController {
        &self.dropdowns
    }

    /// User table.
    #[must_use]
    pub const fn table(&self) -> &UserTable {
        &self.table
    }

    /// Commands that bring a freshly loaded page in line with the state.
    pub fn initialize(&mut self) -> Vec<DomCommand> {
        let mut rec = DomRecorder::new();
        self.sidebar.initialize(&mut rec);
        rec.set_inner_html(
            Target::PageSizeSelect,
            page_size_options_html(&self.config.page_sizes, self.table.page_size()),
        );
        self.render_table(&mut rec);
        tracing::info!(
            viewport = ?self.sidebar.state().viewport,
            users = self.table.records().len(),
            "dashboard initialized"
        );
        rec.take_commands()
    }

    /// Show a toast.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> Vec<DomCommand> {
        let mut rec = DomRecorder::new();
        self.push_toast(Toast::new(message, kind, self.config.toast_duration_ms), &mut rec);
        rec.take_commands()
    }

    /// Handle one event.
    pub fn dispatch(&mut self, event: DashboardEvent) -> Vec<DomCommand> {
        let mut rec = DomRecorder::new();
        tracing::trace!(?event, "dispatch");

        match event {
            DashboardEvent::HamburgerClick => {
                if self.sidebar.toggle(&mut rec) == Transition::Collapsed {
                    self.dropdowns.close_all(&mut rec);
                }
            }
            DashboardEvent::OverlayClick | DashboardEvent::CloseButtonClick => {
                self.sidebar.close(&mut rec);
            }
            DashboardEvent::KeyDown { key: Key::Escape } => {
                if self.sidebar.state().is_desktop() {
                    self.sidebar.collapse(&mut rec);
                } else {
                    self.sidebar.close(&mut rec);
                }
                self.dropdowns.close_all(&mut rec);
            }
            DashboardEvent::KeyDown { .. } => {}
            DashboardEvent::Resize { width } => {
                if self.sidebar.handle_resize(width, &mut rec) == ResizeOutcome::BecameDesktop {
                    self.dropdowns.close_all(&mut rec);
                }
            }
            DashboardEvent::SidebarEnter => {
                self.sidebar.hover_enter(&mut rec);
            }
            DashboardEvent::SidebarLeave => {
                if self.sidebar.hover_leave(&mut rec) {
                    self.dropdowns.close_all(&mut rec);
                }
            }
            DashboardEvent::TouchStart { position } => self.swipe.on_touch_start(position),
            DashboardEvent::TouchMove { position } => {
                if let Some(direction) = self.swipe.on_touch_move(position) {
                    self.handle_swipe(direction, &mut rec);
                }
            }
            DashboardEvent::TouchEnd => self.swipe.on_touch_end(),
            DashboardEvent::NavLinkClick { href } => {
                tracing::debug!(href = href.as_deref().unwrap_or(""), "navigation");
                if self.sidebar.state().is_open {
                    rec.defer(self.config.nav_close_delay_ms, DeferredMessage::CloseDrawer);
                }
            }
            DashboardEvent::DropdownToggle { group } => {
                let sidebar = *self.sidebar.state();
                self.dropdowns.toggle(&group, &sidebar, &mut rec);
            }
            DashboardEvent::DocumentClick { inside_dropdown } => {
                if !inside_dropdown {
                    self.dropdowns.close_all(&mut rec);
                }
            }
            DashboardEvent::SearchInput { text } => self.handle_search(text, &mut rec),
            DashboardEvent::PageSizeChange { value } => {
                match self.table.set_page_size_str(&value) {
                    Ok(()) => self.render_table(&mut rec),
                    Err(err) => tracing::warn!(%err, "page size change ignored"),
                }
            }
            DashboardEvent::PageChange(request) => {
                if self.table.apply(request) {
                    self.render_table(&mut rec);
                }
            }
            DashboardEvent::RowAction { action, user_id } => {
                self.handle_row_action(action, user_id, &mut rec);
            }
            DashboardEvent::AddAdminClick => {
                if let Err(err) = self.actions.add_admin() {
                    tracing::warn!(%err, "add admin failed");
                    self.push_error_toast(&err.to_string(), &mut rec);
                }
            }
            DashboardEvent::LogoClick => {
                let bounce = self.config.classes.bounce.clone();
                rec.add_class(Target::Logo, bounce.clone());
                rec.defer(
                    self.config.bounce_duration_ms,
                    DeferredMessage::RemoveClass {
                        target: Target::Logo,
                        class: bounce,
                    },
                );
            }
            DashboardEvent::Deferred(message) => self.handle_deferred(message, &mut rec),
        }

        rec.take_commands()
    }

    fn handle_swipe(&mut self, direction: SwipeDirection, rec: &mut DomRecorder) {
        let state = self.sidebar.state();
        if state.is_desktop() {
            return;
        }
        match (direction, state.is_open) {
            (SwipeDirection::Right, false) => {
                self.sidebar.open(rec);
            }
            (SwipeDirection::Left, true) => {
                self.sidebar.close(rec);
            }
            _ => {}
        }
    }

    fn handle_search(&mut self, text: String, rec: &mut DomRecorder) {
        if self.config.search_debounce_ms == 0 {
            self.table.set_filter(&text);
            self.render_table(rec);
            return;
        }
        let ticket = self.search.push(text);
        rec.add_class(Target::TableBody, self.config.classes.loading.clone());
        rec.defer(
            self.config.search_debounce_ms,
            DeferredMessage::FlushSearch { ticket },
        );
    }

    fn handle_row_action(&mut self, action: RowAction, user_id: u32, rec: &mut DomRecorder) {
        if self.table.record(user_id).is_none() {
            tracing::warn!(action = action.as_str(), user_id, "row action for unknown user");
            return;
        }
        if let Err(err) = self.actions.perform(action, user_id) {
            tracing::warn!(%err, user_id, "row action failed");
            self.push_error_toast(&err.to_string(), rec);
        }
        self.render_table(rec);
    }

    fn handle_deferred(&mut self, message: DeferredMessage, rec: &mut DomRecorder) {
        match message {
            DeferredMessage::CloseDrawer => {
                self.sidebar.close(rec);
            }
            DeferredMessage::RemoveClass { target, class } => rec.remove_class(target, class),
            DeferredMessage::RemoveElement { target } => {
                rec.push(DomCommand::RemoveElement { target });
            }
            DeferredMessage::FlushSearch { ticket } => {
                // Stale tickets fall through; the newest one clears `loading`.
                if let Some(text) = self.search.fire(ticket) {
                    self.table.set_filter(&text);
                    rec.remove_class(Target::TableBody, self.config.classes.loading.clone());
                    self.render_table(rec);
                }
            }
        }
    }

    fn render_table(&self, rec: &mut DomRecorder) {
        rec.set_inner_html(Target::TableBody, rows_html(&self.table.render()));
        let summary = self.table.summary().to_string();
        rec.set_inner_html(Target::TableSummary, escape_html(&summary).into_owned());
    }

    fn push_error_toast(&mut self, message: &str, rec: &mut DomRecorder) {
        let toast = Toast::new(message, ToastKind::Error, self.config.toast_duration_ms);
        self.push_toast(toast, rec);
    }

    fn push_toast(&mut self, toast: Toast, rec: &mut DomRecorder) {
        self.toast_seq += 1;
        let id = format!("toast-{}", self.toast_seq);
        rec.append_html(Target::ToastContainer, toast_html(&toast, &id));
        rec.defer(
            toast.duration_ms,
            DeferredMessage::RemoveElement {
                target: Target::Element(id),
            },
        );
    }
}
