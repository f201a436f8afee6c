//! Core state and rendering logic for the admin dashboard.
//!
//! This crate has no DOM dependency. It provides:
//! - The sidebar state machine: [`Sidebar`], [`SidebarState`]
//! - Dropdown navigation groups: [`DropdownController`]
//! - The user table pipeline: [`UserTable`], [`RowDescriptor`], [`rows_html`]
//! - The page controller: [`Dashboard`]
//!
//! Every transition is expressed as a list of [`DomCommand`]s that the
//! browser runtime applies to the document.

mod actions;
mod config;
mod dashboard;
mod dom;
mod dropdown;
mod effects;
mod error;
mod event;
mod geometry;
mod gesture;
mod markup;
mod sidebar;
mod table;
mod user;
mod util;

pub use actions::{LoggingActions, UserActions};
pub use config::{ClassNames, DashboardConfig, ElementIds};
pub use dashboard::Dashboard;
pub use dom::{DeferredMessage, DomCommand, DomRecorder, Target};
pub use dropdown::{DropdownController, GroupId, ToggleOutcome};
pub use effects::{tooltip_position, Ripple, Toast, ToastKind, TOOLTIP_GAP};
pub use error::{ActionError, ConfigError, FixtureError, TableError};
pub use event::{DashboardEvent, Key};
pub use geometry::{Point, Rect, Size, Viewport};
pub use gesture::{SwipeConfig, SwipeDirection, SwipeRecognizer};
pub use markup::{escape_html, page_size_options_html, rows_html, toast_html};
pub use sidebar::{ResizeOutcome, Sidebar, SidebarState, Transition};
pub use table::{
    filter_records, page_count, paginate, render_rows, PageRequest, PageSummary, RowAction,
    RowDescriptor, UserTable,
};
pub use user::{mock_users, parse_users, UserRecord};
pub use util::{format_count, Debouncer};
