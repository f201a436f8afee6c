//! Dashboard configuration.
//!
//! Every field has a default matching the stock page, so an empty document
//! (`{}` or an empty YAML file) is a valid configuration.
//!
//! ```
//! use admin_dash_core::DashboardConfig;
//!
//! let config = DashboardConfig::from_yaml("breakpoint_px: 900\nswipe_threshold_px: 40\n").unwrap();
//! assert_eq!(config.breakpoint_px, 900.0);
//! assert_eq!(config.default_page_size, 10);
//! ```

use crate::error::ConfigError;
use crate::table::RowAction;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Element identifiers and selectors the page binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// Sidebar container id
    pub sidebar: String,
    /// Mobile overlay id
    pub overlay: String,
    /// Hamburger toggle id
    pub hamburger: String,
    /// Selector for the icon inside the hamburger toggle
    pub hamburger_icon: String,
    /// Sidebar close control id
    pub sidebar_close: String,
    /// Table body id
    pub table_body: String,
    /// Table summary line id
    pub table_summary: String,
    /// Page-size selector id
    pub page_size_select: String,
    /// Search input id
    pub search_input: String,
    /// Previous-page button id
    pub page_prev: String,
    /// Next-page button id
    pub page_next: String,
    /// Toast container id
    pub toast_container: String,
    /// Logo id
    pub logo: String,
    /// Selector for navigation links
    pub nav_link_selector: String,
    /// Selector for dropdown groups; each carries a `data-group` attribute
    pub dropdown_selector: String,
    /// Selector for the trigger inside a dropdown group
    pub dropdown_trigger_selector: String,
    /// Selector for the add-admin button
    pub add_admin_selector: String,
    /// Selector for elements that show a tooltip
    pub tooltip_selector: String,
    /// Selector for elements that get a ripple on press
    pub ripple_selector: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            sidebar: "sidebar".to_string(),
            overlay: "mobileOverlay".to_string(),
            hamburger: "hamburgerBtn".to_string(),
            hamburger_icon: "#hamburgerBtn i".to_string(),
            sidebar_close: "sidebarClose".to_string(),
            table_body: "usersTableBody".to_string(),
            table_summary: "tableSummary".to_string(),
            page_size_select: "entriesSelect".to_string(),
            search_input: "searchInput".to_string(),
            page_prev: "prevPage".to_string(),
            page_next: "nextPage".to_string(),
            toast_container: "toastContainer".to_string(),
            logo: "logo".to_string(),
            nav_link_selector: ".nav-link".to_string(),
            dropdown_selector: ".nav-dropdown".to_string(),
            dropdown_trigger_selector: ".nav-item".to_string(),
            add_admin_selector: ".add-admin-btn".to_string(),
            tooltip_selector: "[data-tooltip]".to_string(),
            ripple_selector: ".ripple".to_string(),
        }
    }
}

/// CSS class vocabulary shared with the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Drawer visible
    pub open: String,
    /// Overlay hidden
    pub hidden: String,
    /// Rail pinned open
    pub expanded: String,
    /// Rail showing icons only
    pub collapsed: String,
    /// Rail temporarily widened by the pointer
    pub hovered: String,
    /// Dropdown group showing its submenu
    pub dropdown_open: String,
    /// Table is recomputing
    pub loading: String,
    /// Logo bounce animation
    pub bounce: String,
    /// Body class while scroll is locked
    pub scroll_lock: String,
    /// Hamburger icon while the rail can be expanded
    pub icon_bars: String,
    /// Hamburger icon while the rail is expanded
    pub icon_chevron: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            open: "open".to_string(),
            hidden: "hidden".to_string(),
            expanded: "expanded".to_string(),
            collapsed: "collapsed".to_string(),
            hovered: "hovered".to_string(),
            dropdown_open: "open".to_string(),
            loading: "loading".to_string(),
            bounce: "bounce".to_string(),
            scroll_lock: "overflow-hidden".to_string(),
            icon_bars: "fas fa-bars text-xl".to_string(),
            icon_chevron: "fas fa-chevron-left text-xl".to_string(),
        }
    }
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Widths at or above this are desktop
    pub breakpoint_px: f32,
    /// Minimum horizontal travel for a swipe
    pub swipe_threshold_px: f32,
    /// Delay before the drawer closes after a navigation click
    pub nav_close_delay_ms: u32,
    /// Ripple lifetime
    pub ripple_duration_ms: u32,
    /// Logo bounce lifetime
    pub bounce_duration_ms: u32,
    /// Toast lifetime
    pub toast_duration_ms: u32,
    /// Quiet period before a search is applied (0 = immediate)
    pub search_debounce_ms: u32,
    /// Choices offered by the page-size selector
    pub page_sizes: Vec<usize>,
    /// Initial page size
    pub default_page_size: usize,
    /// Buttons rendered in each row
    pub row_actions: Vec<RowAction>,
    /// Maximum log level (`trace`..`error`)
    pub log_level: String,
    /// Element identifiers
    pub elements: ElementIds,
    /// Class vocabulary
    pub classes: ClassNames,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 1024.0,
            swipe_threshold_px: 50.0,
            nav_close_delay_ms: 150,
            ripple_duration_ms: 600,
            bounce_duration_ms: 1000,
            toast_duration_ms: 3000,
            search_debounce_ms: 0,
            page_sizes: vec![10, 25, 50, 100],
            default_page_size: 10,
            row_actions: vec![RowAction::Edit, RowAction::Password, RowAction::Block],
            log_level: "info".to_string(),
            elements: ElementIds::default(),
            classes: ClassNames::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty YAML document deserializes to unit, not to a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()
    }

    /// Check value ranges, returning the config unchanged when valid.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(self.breakpoint_px.is_finite() && self.breakpoint_px > 0.0) {
            return Err(ConfigError::invalid(
                "breakpoint_px",
                format!("{} is not a positive width", self.breakpoint_px),
            ));
        }
        if !(self.swipe_threshold_px.is_finite() && self.swipe_threshold_px >= 0.0) {
            return Err(ConfigError::invalid(
                "swipe_threshold_px",
                format!("{} is not a non-negative distance", self.swipe_threshold_px),
            ));
        }
        if self.page_sizes.is_empty() {
            return Err(ConfigError::invalid("page_sizes", "at least one size is required"));
        }
        if self.page_sizes.contains(&0) {
            return Err(ConfigError::invalid("page_sizes", "sizes must be greater than zero"));
        }
        if self.default_page_size == 0 {
            return Err(ConfigError::invalid(
                "default_page_size",
                "must be greater than zero",
            ));
        }
        if !self.page_sizes.contains(&self.default_page_size) {
            return Err(ConfigError::invalid(
                "default_page_size",
                format!("{} is not one of page_sizes", self.default_page_size),
            ));
        }
        if tracing::Level::from_str(&self.log_level).is_err() {
            return Err(ConfigError::invalid(
                "log_level",
                format!("`{}` is not a log level", self.log_level),
            ));
        }
        Ok(self)
    }

    /// The configured log level, falling back to `INFO`.
    #[must_use]
    pub fn level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.log_level).unwrap_or(tracing::Level::INFO)
    }
}
