//! User-management capability injected into the dashboard.
//!
//! The page has no backend. [`LoggingActions`] is the stock implementation
//! and only logs; a real integration implements [`UserActions`] against its
//! API and is handed to [`Dashboard::with_actions`](crate::Dashboard::with_actions).

use crate::error::ActionError;
use crate::table::RowAction;

/// Operations the table's buttons trigger.
///
/// Each method receives the record identifier. After any call the dashboard
/// re-renders the table.
pub trait UserActions {
    /// Edit a user.
    fn edit(&mut self, user_id: u32) -> Result<(), ActionError>;

    /// Reset a user's password.
    fn change_password(&mut self, user_id: u32) -> Result<(), ActionError>;

    /// Block or unblock a user.
    fn toggle_block(&mut self, user_id: u32) -> Result<(), ActionError>;

    /// Delete a user.
    fn delete(&mut self, user_id: u32) -> Result<(), ActionError>;

    /// Show a user's details.
    fn view(&mut self, user_id: u32) -> Result<(), ActionError>;

    /// Create a new administrator.
    fn add_admin(&mut self) -> Result<(), ActionError>;

    /// Route a row button to its method.
    fn perform(&mut self, action: RowAction, user_id: u32) -> Result<(), ActionError> {
        match action {
            RowAction::Edit => self.edit(user_id),
            RowAction::Password => self.change_password(user_id),
            RowAction::Block => self.toggle_block(user_id),
            RowAction::Delete => self.delete(user_id),
            RowAction::View => self.view(user_id),
        }
    }
}

/// Log-only stand-in for a user-management backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingActions;

impl LoggingActions {
    fn log(action: &str, user_id: u32) -> Result<(), ActionError> {
        tracing::info!(action, user_id, "user action requested (no backend configured)");
        Ok(())
    }
}

impl UserActions for LoggingActions {
    fn edit(&mut self, user_id: u32) -> Result<(), ActionError> {
        Self::log("edit", user_id)
    }

    fn change_password(&mut self, user_id: u32) -> Result<(), ActionError> {
        Self::log("password", user_id)
    }

    fn toggle_block(&mut self, user_id: u32) -> Result<(), ActionError> {
        Self::log("block", user_id)
    }

    fn delete(&mut self, user_id: u32) -> Result<(), ActionError> {
        Self::log("delete", user_id)
    }

    fn view(&mut self, user_id: u32) -> Result<(), ActionError> {
        Self::log("view", user_id)
    }

    fn add_admin(&mut self) -> Result<(), ActionError> {
        tracing::info!("add admin requested (no backend configured)");
        Ok(())
    }
}
