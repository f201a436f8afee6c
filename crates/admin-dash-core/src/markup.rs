//! HTML markup for table rows, the page-size selector and toasts.
//!
//! All record text is escaped. Action buttons carry `data-action` and
//! `data-user-id` so the runtime can route clicks with one delegated listener.

use crate::effects::Toast;
use crate::table::RowDescriptor;
use std::borrow::Cow;
use std::fmt::Write;

const CELL_CLASS: &str = "px-2 lg:px-4 py-3 text-sm lg:text-base";

/// Escape text for use in element content or a quoted attribute.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Markup for a page of rows, ready for the table body's `innerHTML`.
#[must_use]
pub fn rows_html(rows: &[RowDescriptor]) -> String {
    let mut html = String::new();
    for row in rows {
        write_row(&mut html, row);
    }
    html
}

fn write_row(html: &mut String, row: &RowDescriptor) {
    let badge = if row.blocked {
        "bg-red-100 text-red-800"
    } else {
        "bg-green-100 text-green-800"
    };
    // Writing to a String never fails.
    let _ = write!(
        html,
        "<tr class=\"hover:bg-gray-50\" data-user-id=\"{id}\">\
         <td class=\"{CELL_CLASS}\">{id}</td>\
         <td class=\"{CELL_CLASS}\">{email}</td>\
         <td class=\"{CELL_CLASS}\">{name}</td>\
         <td class=\"{CELL_CLASS}\">{role}</td>\
         <td class=\"{CELL_CLASS}\">{phone}</td>\
         <td class=\"{CELL_CLASS}\"><span class=\"px-2 py-1 rounded-full text-xs {badge}\">{blocked}</span></td>\
         <td class=\"{CELL_CLASS}\"><div class=\"flex flex-col sm:flex-row space-y-1 sm:space-y-0 sm:space-x-2\">",
        id = row.id,
        email = escape_html(&row.email),
        name = escape_html(&row.full_name),
        role = escape_html(&row.role),
        phone = escape_html(&row.phone),
        blocked = row.blocked_label(),
    );
    for action in &row.actions {
        let _ = write!(
            html,
            "<button type=\"button\" class=\"action-btn {kind}-btn px-3 py-1 text-white rounded text-xs\" \
             data-action=\"{kind}\" data-user-id=\"{id}\">{label}</button>",
            kind = action.as_str(),
            id = row.id,
            label = action.label(),
        );
    }
    html.push_str("</div></td></tr>");
}

/// `<option>` list for the entries-per-page selector, with `selected`
/// marked.
#[must_use]
pub fn page_size_options_html(sizes: &[usize], selected: usize) -> String {
    let mut html = String::new();
    for size in sizes {
        let mark = if *size == selected { " selected" } else { "" };
        let _ = write!(html, "<option value=\"{size}\"{mark}>{size}</option>");
    }
    html
}

/// Markup for a toast element with the given DOM id.
#[must_use]
pub fn toast_html(toast: &Toast, element_id: &str) -> String {
    format!(
        "<div id=\"{id}\" class=\"toast {kind}\" role=\"status\">{message}</div>",
        id = escape_html(element_id),
        kind = toast.kind.class(),
        message = escape_html(&toast.message),
    )
}
