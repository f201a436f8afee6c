//! User table: filter, paginate, describe rows.
//!
//! The pipeline is `records -> filter -> page slice -> row descriptors`.
//! [`paginate`] is a plain slice and returns an empty page when the start
//! offset is past the end; [`UserTable`] keeps its own page index clamped so
//! it never lands there while the filtered list is non-empty.

use crate::error::TableError;
use crate::user::UserRecord;
use crate::util::format_count;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Buttons rendered in a row's action cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    /// Edit the user
    Edit,
    /// Reset the user's password
    Password,
    /// Block or unblock the user
    Block,
    /// Delete the user
    Delete,
    /// Open the user's details
    View,
}

impl RowAction {
    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Password => "Password",
            Self::Block => "Block",
            Self::Delete => "Delete",
            Self::View => "View",
        }
    }

    /// Value of the button's `data-action` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Password => "password",
            Self::Block => "block",
            Self::Delete => "delete",
            Self::View => "view",
        }
    }
}

impl FromStr for RowAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edit" => Ok(Self::Edit),
            "password" => Ok(Self::Password),
            "block" => Ok(Self::Block),
            "delete" => Ok(Self::Delete),
            "view" => Ok(Self::View),
            other => Err(format!("unknown row action `{other}`")),
        }
    }
}

/// A pagination control request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageRequest {
    /// Previous page
    Prev,
    /// Next page
    Next,
    /// Go to a 1-based page
    Goto(usize),
}

/// Everything needed to draw one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDescriptor {
    /// Record identifier
    pub id: u32,
    /// Email cell
    pub email: String,
    /// Name cell
    pub full_name: String,
    /// Role cell
    pub role: String,
    /// Phone cell
    pub phone: String,
    /// Blocked flag (drives the badge tone)
    pub blocked: bool,
    /// Action buttons, in order
    pub actions: Vec<RowAction>,
}

impl RowDescriptor {
    fn from_record(record: &UserRecord, actions: &[RowAction]) -> Self {
        Self {
            id: record.id,
            email: record.email.clone(),
            full_name: record.full_name.clone(),
            role: record.role.clone(),
            phone: record.phone.clone(),
            blocked: record.blocked,
            actions: actions.to_vec(),
        }
    }

    /// `Yes` / `No` label for the blocked badge.
    #[must_use]
    pub const fn blocked_label(&self) -> &'static str {
        if self.blocked {
            "Yes"
        } else {
            "No"
        }
    }
}

/// "Showing x to y of z entries".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// 1-based index of the first visible row (0 when empty)
    pub from: usize,
    /// 1-based index of the last visible row (0 when empty)
    pub to: usize,
    /// Filtered row count
    pub total: usize,
    /// Unfiltered row count, when a filter is active
    pub unfiltered: Option<usize>,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            format_count(self.from),
            format_count(self.to),
            format_count(self.total)
        )?;
        if let Some(unfiltered) = self.unfiltered {
            write!(f, " (filtered from {} total entries)", format_count(unfiltered))?;
        }
        Ok(())
    }
}

/// Records whose email, full name or role contain `filter`, ignoring case,
/// in original order.
#[must_use]
pub fn filter_records<'a>(records: &'a [UserRecord], filter: &str) -> Vec<&'a UserRecord> {
    let needle = filter.to_lowercase();
    records.iter().filter(|r| r.matches(&needle)).collect()
}

/// The 1-based `page` of `items`, `page_size` long.
///
/// No clamping: a start offset at or past the end yields an empty slice.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items; at least one.
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Build row descriptors for one page of a filtered list.
#[must_use]
pub fn render_rows(
    filtered: &[&UserRecord],
    page: usize,
    page_size: usize,
    actions: &[RowAction],
) -> Vec<RowDescriptor> {
    paginate(filtered, page, page_size)
        .iter()
        .map(|record| RowDescriptor::from_record(record, actions))
        .collect()
}

/// Table view state over an immutable record list.
#[derive(Debug, Clone)]
pub struct UserTable {
    records: Vec<UserRecord>,
    filter: String,
    /// Indices into `records` that pass the filter
    filtered: Vec<usize>,
    page: usize,
    page_size: usize,
    actions: Vec<RowAction>,
}

impl UserTable {
    /// Create a table showing page 1 of all records.
    #[must_use]
    pub fn new(records: Vec<UserRecord>, page_size: usize) -> Self {
        let filtered = (0..records.len()).collect();
        Self {
            records,
            filter: String::new(),
            filtered,
            page: 1,
            page_size: page_size.max(1),
            actions: vec![RowAction::Edit, RowAction::Password, RowAction::Block],
        }
    }

    /// Set the buttons rendered in each row.
    #[must_use]
    pub fn with_actions(mut self, actions: Vec<RowAction>) -> Self {
        self.actions = actions;
        self
    }

    /// All records.
    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Look up a record by id.
    #[must_use]
    pub fn record(&self, id: u32) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Active filter text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Current page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records passing the filter.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Number of pages for the filtered list.
    #[must_use]
    pub fn page_count(&self) -> usize {
        page_count(self.filtered.len(), self.page_size)
    }

    /// Records passing the filter, in original order.
    #[must_use]
    pub fn filtered_records(&self) -> Vec<&UserRecord> {
        self.filtered.iter().map(|&i| &self.records[i]).collect()
    }

    /// Apply a filter and return to page 1.
    pub fn set_filter(&mut self, text: &str) {
        let needle = text.to_lowercase();
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matches(&needle))
            .map(|(i, _)| i)
            .collect();
        self.filter = text.to_string();
        self.page = 1;
        tracing::debug!(filter = text, matches = self.filtered.len(), "table.filter");
    }

    /// Change page size and return to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), TableError> {
        if page_size == 0 {
            return Err(TableError::ZeroPageSize);
        }
        self.page_size = page_size;
        self.page = 1;
        tracing::debug!(page_size, "table.page_size");
        Ok(())
    }

    /// Parse a page-size selector value and apply it.
    pub fn set_page_size_str(&mut self, value: &str) -> Result<(), TableError> {
        let size = value
            .trim()
            .parse::<usize>()
            .map_err(|_| TableError::UnparsablePageSize(value.to_string()))?;
        self.set_page_size(size)
    }

    /// Go to a page, clamped to `1..=page_count`. Returns whether it moved.
    pub fn set_page(&mut self, page: usize) -> bool {
        let clamped = page.clamp(1, self.page_count());
        let moved = clamped != self.page;
        self.page = clamped;
        moved
    }

    /// Apply a pagination request. Returns whether the page changed.
    pub fn apply(&mut self, request: PageRequest) -> bool {
        match request {
            PageRequest::Prev => self.set_page(self.page.saturating_sub(1)),
            PageRequest::Next => self.set_page(self.page.saturating_add(1)),
            PageRequest::Goto(page) => self.set_page(page),
        }
    }

    /// Row descriptors for the current page. Does not change state.
    #[must_use]
    pub fn render(&self) -> Vec<RowDescriptor> {
        render_rows(&self.filtered_records(), self.page, self.page_size, &self.actions)
    }

    /// Summary line for the current page.
    #[must_use]
    pub fn summary(&self) -> PageSummary {
        let total = self.filtered.len();
        let visible = paginate(&self.filtered, self.page, self.page_size).len();
        let from = if visible == 0 {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        };
        let to = if visible == 0 { 0 } else { from + visible - 1 };
        PageSummary {
            from,
            to,
            total,
            unfiltered: (!self.filter.is_empty()).then_some(self.records.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::mock_users;
    use proptest::prelude::*;

    fn ids(rows: &[RowDescriptor]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_first_page_holds_all_ten() {
        let table = UserTable::new(mock_users(), 10);
        assert_eq!(ids(&table.render()), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_two_of_ten_is_empty() {
        let users = mock_users();
        let all: Vec<&UserRecord> = users.iter().collect();
        assert!(render_rows(&all, 2, 10, &[]).is_empty());
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 3, 10), &items[20..25]);
        assert!(paginate(&items, 4, 10).is_empty());
        assert_eq!(paginate(&items, 0, 10), &items[0..10]);
    }

    #[test]
    fn test_filter_single_field_hits() {
        let mut table = UserTable::new(mock_users(), 10);
        table.set_filter("oper");
        assert_eq!(ids(&table.render()), vec![8]);

        table.set_filter("son");
        assert_eq!(ids(&table.render()), vec![3, 5]);
    }

    #[test]
    fn test_filter_exactly_three_in_order() {
        let mut table = UserTable::new(mock_users(), 10);
        // manager@, Diana, Analyst
        table.set_filter("ana");
        assert_eq!(ids(&table.render()), vec![2, 6, 7]);

        // Moderator, Developer, Designer
        table.set_filter("de");
        assert_eq!(ids(&table.render()), vec![6, 8, 9]);
    }

    #[test]
    fn test_filter_case_insensitive() {
        let mut table = UserTable::new(mock_users(), 10);
        table.set_filter("ADMIN");
        assert_eq!(ids(&table.render()), vec![1]);
        assert_eq!(table.render()[0].role, "Super Admin");
    }

    #[test]
    fn test_filter_idempotent() {
        let mut table = UserTable::new(mock_users(), 10);
        table.set_filter("an");
        let once = table.render();
        table.set_filter("an");
        assert_eq!(table.render(), once);
    }

    #[test]
    fn test_filter_resets_page() {
        let mut table = UserTable::new(mock_users(), 3);
        assert!(table.set_page(3));
        table.set_filter("");
        assert_eq!(table.page(), 1);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut table = UserTable::new(mock_users(), 2);
        table.set_page(4);
        table.set_page_size(5).unwrap();
        assert_eq!(table.page(), 1);
        assert_eq!(table.page_size(), 5);
        assert_eq!(table.render().len(), 5);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut table = UserTable::new(mock_users(), 10);
        assert_eq!(table.set_page_size(0), Err(TableError::ZeroPageSize));
        assert_eq!(table.page_size(), 10);
    }

    #[test]
    fn test_page_size_str() {
        let mut table = UserTable::new(mock_users(), 10);
        table.set_page_size_str(" 25 ").unwrap();
        assert_eq!(table.page_size(), 25);
        assert!(matches!(
            table.set_page_size_str("all"),
            Err(TableError::UnparsablePageSize(_))
        ));
    }

    #[test]
    fn test_set_page_clamps() {
        let mut table = UserTable::new(mock_users(), 3);
        assert_eq!(table.page_count(), 4);
        table.set_page(99);
        assert_eq!(table.page(), 4);
        assert_eq!(ids(&table.render()), vec![10]);
        table.set_page(0);
        assert_eq!(table.page(), 1);
    }

    #[test]
    fn test_prev_next() {
        let mut table = UserTable::new(mock_users(), 4);
        assert!(!table.apply(PageRequest::Prev));
        assert!(table.apply(PageRequest::Next));
        assert!(table.apply(PageRequest::Next));
        assert!(!table.apply(PageRequest::Next));
        assert_eq!(table.page(), 3);
        assert!(table.apply(PageRequest::Goto(1)));
    }

    #[test]
    fn test_empty_filter_result_has_one_page() {
        let mut table = UserTable::new(mock_users(), 10);
        table.set_filter("zzz");
        assert_eq!(table.page_count(), 1);
        assert!(table.render().is_empty());
        assert_eq!(table.summary().to_string(), "Showing 0 to 0 of 0 entries (filtered from 10 total entries)");
    }

    #[test]
    fn test_summary() {
        let mut table = UserTable::new(mock_users(), 4);
        assert_eq!(table.summary().to_string(), "Showing 1 to 4 of 10 entries");
        table.set_page(3);
        assert_eq!(table.summary().to_string(), "Showing 9 to 10 of 10 entries");
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut table = UserTable::new(mock_users(), 3);
        table.set_page(2);
        let before = (table.page(), table.page_size(), table.filtered_len());
        let _ = table.render();
        let _ = table.summary();
        assert_eq!(before, (table.page(), table.page_size(), table.filtered_len()));
    }

    #[test]
    fn test_row_actions_follow_config() {
        let table = UserTable::new(mock_users(), 1).with_actions(vec![RowAction::Delete, RowAction::View]);
        assert_eq!(table.render()[0].actions, vec![RowAction::Delete, RowAction::View]);
    }

    #[test]
    fn test_row_action_str() {
        for action in [
            RowAction::Edit,
            RowAction::Password,
            RowAction::Block,
            RowAction::Delete,
            RowAction::View,
        ] {
            assert_eq!(action.as_str().parse::<RowAction>(), Ok(action));
        }
        assert!("archive".parse::<RowAction>().is_err());
    }

    #[test]
    fn test_record_lookup() {
        let table = UserTable::new(mock_users(), 10);
        assert_eq!(table.record(4).map(|r| r.full_name.as_str()), Some("Alice Brown"));
        assert!(table.record(42).is_none());
    }

    proptest! {
        #[test]
        fn prop_page_never_exceeds_size(page in 0usize..20, size in 1usize..15) {
            let users = mock_users();
            let all: Vec<&UserRecord> = users.iter().collect();
            prop_assert!(render_rows(&all, page, size, &[]).len() <= size);
        }

        #[test]
        fn prop_clamped_page_non_empty(page in 0usize..50, size in 1usize..15, filter in "[a-z]{0,2}") {
            let mut table = UserTable::new(mock_users(), size);
            table.set_filter(&filter);
            table.set_page(page);
            if table.filtered_len() > 0 {
                prop_assert!(!table.render().is_empty());
            }
        }

        #[test]
        fn prop_filter_idempotent(filter in "[A-Za-z@.]{0,4}") {
            let mut table = UserTable::new(mock_users(), 10);
            table.set_filter(&filter);
            let once = table.render();
            table.set_filter(&filter);
            prop_assert_eq!(table.render(), once);
        }
    }
}
