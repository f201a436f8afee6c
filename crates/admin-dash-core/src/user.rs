//! User records shown in the table.

use crate::error::FixtureError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// A user row.
///
/// `blocked` accepts either a JSON boolean or the strings `"Yes"`/`"No"`
/// when deserialized, and always serializes as a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Stable unique identifier
    pub id: u32,
    /// Email address
    pub email: String,
    /// Display name
    pub full_name: String,
    /// Role label (open set)
    pub role: String,
    /// Free-form phone number
    pub phone: String,
    /// Whether the account is blocked
    #[serde(deserialize_with = "deserialize_blocked")]
    pub blocked: bool,
}

impl UserRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(
        id: u32,
        email: impl Into<String>,
        full_name: impl Into<String>,
        role: impl Into<String>,
        phone: impl Into<String>,
        blocked: bool,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            full_name: full_name.into(),
            role: role.into(),
            phone: phone.into(),
            blocked,
        }
    }

    /// Whether email, full name or role contains `needle`.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.email.to_lowercase().contains(needle)
            || self.full_name.to_lowercase().contains(needle)
            || self.role.to_lowercase().contains(needle)
    }

    /// `Yes` / `No` label for the blocked column.
    #[must_use]
    pub const fn blocked_label(&self) -> &'static str {
        if self.blocked {
            "Yes"
        } else {
            "No"
        }
    }
}

fn deserialize_blocked<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Blocked {
        Flag(bool),
        Label(String),
    }

    match Blocked::deserialize(deserializer)? {
        Blocked::Flag(flag) => Ok(flag),
        Blocked::Label(label) if label.eq_ignore_ascii_case("yes") => Ok(true),
        Blocked::Label(label) if label.eq_ignore_ascii_case("no") => Ok(false),
        Blocked::Label(other) => Err(serde::de::Error::custom(format!(
            "blocked must be a boolean or Yes/No, got `{other}`"
        ))),
    }
}

/// Parse a JSON array of users, rejecting duplicate identifiers.
pub fn parse_users(json: &str) -> Result<Vec<UserRecord>, FixtureError> {
    let users: Vec<UserRecord> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(users.len());
    for user in &users {
        if !seen.insert(user.id) {
            return Err(FixtureError::DuplicateId(user.id));
        }
    }
    Ok(users)
}

/// The built-in mock user list.
#[must_use]
pub fn mock_users() -> Vec<UserRecord> {
    [
        (1, "admin@example.com", "John Doe", "Super Admin", false),
        (2, "manager@example.com", "Jane Smith", "Manager", false),
        (3, "user@example.com", "Bob Johnson", "User", true),
        (4, "support@example.com", "Alice Brown", "Support", false),
        (5, "editor@example.com", "Charlie Wilson", "Editor", false),
        (6, "moderator@example.com", "Diana Davis", "Moderator", false),
        (7, "analyst@example.com", "Eve Miller", "Analyst", false),
        (8, "developer@example.com", "Frank Garcia", "Developer", false),
        (9, "designer@example.com", "Grace Lee", "Designer", false),
        (10, "tester@example.com", "Henry Taylor", "Tester", false),
    ]
    .into_iter()
    .map(|(id, email, name, role, blocked)| {
        UserRecord::new(id, email, name, role, format!("+123456789{}", id - 1), blocked)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_users_shape() {
        let users = mock_users();
        assert_eq!(users.len(), 10);
        assert_eq!(users[0].phone, "+1234567890");
        assert_eq!(users[9].phone, "+1234567899");
        assert_eq!(users.iter().filter(|u| u.blocked).count(), 1);
        assert_eq!(users[2].blocked_label(), "Yes");
        assert_eq!(users[0].blocked_label(), "No");
    }

    #[test]
    fn test_matches_fields() {
        let user = UserRecord::new(1, "admin@example.com", "John Doe", "Super Admin", "+1", false);
        assert!(user.matches("admin"));
        assert!(user.matches("john"));
        assert!(user.matches("super"));
        assert!(user.matches(""));
        assert!(!user.matches("+1"));
        assert!(!user.matches("jane"));
    }

    #[test]
    fn test_parse_users_accepts_both_blocked_shapes() {
        let json = r#"[
            {"id": 1, "email": "a@x", "fullName": "A", "role": "User", "phone": "1", "blocked": "Yes"},
            {"id": 2, "email": "b@x", "fullName": "B", "role": "User", "phone": "2", "blocked": false},
            {"id": 3, "email": "c@x", "fullName": "C", "role": "User", "phone": "3", "blocked": "no"}
        ]"#;
        let users = parse_users(json).unwrap();
        assert!(users[0].blocked);
        assert!(!users[1].blocked);
        assert!(!users[2].blocked);
    }

    #[test]
    fn test_parse_users_rejects_bad_blocked() {
        let json = r#"[{"id": 1, "email": "a", "fullName": "A", "role": "R", "phone": "", "blocked": "maybe"}]"#;
        assert!(matches!(parse_users(json), Err(FixtureError::Parse(_))));
    }

    #[test]
    fn test_parse_users_rejects_duplicates() {
        let json = r#"[
            {"id": 4, "email": "a", "fullName": "A", "role": "R", "phone": "", "blocked": true},
            {"id": 4, "email": "b", "fullName": "B", "role": "R", "phone": "", "blocked": true}
        ]"#;
        assert!(matches!(parse_users(json), Err(FixtureError::DuplicateId(4))));
    }

    #[test]
    fn test_serializes_blocked_as_bool() {
        let json = serde_json::to_string(&mock_users()[2]).unwrap();
        assert!(json.contains(r#""blocked":true"#));
        assert!(json.contains(r#""fullName":"Bob Johnson""#));
    }
}
