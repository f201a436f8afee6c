//! Delegated click routing.
//!
//! The page installs one document-level click listener. The runtime inspects
//! the clicked element's ancestors, fills in a [`ClickContext`], and
//! [`click_events`] turns it into the dashboard events to dispatch, in order.

use admin_dash_core::{DashboardEvent, GroupId, RowAction};
use serde::{Deserialize, Serialize};

/// What the clicked element sits inside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickContext {
    /// Inside a dropdown group, whether or not it carries `data-group`
    pub inside_dropdown: bool,
    /// `data-group` of the enclosing dropdown group
    pub dropdown_group: Option<String>,
    /// The click hit the group's trigger rather than its submenu
    pub on_dropdown_trigger: bool,
    /// Enclosing navigation link, with its `href` if it has one
    pub nav_link: Option<Option<String>>,
    /// `data-action` and `data-user-id` of an enclosing row button
    pub row_action: Option<(String, String)>,
    /// Inside the add-admin button
    pub add_admin: bool,
    /// Inside the logo
    pub logo: bool,
}

/// Events for one document click.
///
/// The element-specific event comes first; the trailing
/// [`DashboardEvent::DocumentClick`] lets open dropdowns close when the click
/// landed outside them.
#[must_use]
pub fn click_events(ctx: &ClickContext) -> Vec<DashboardEvent> {
    let mut events = Vec::with_capacity(2);

    match (&ctx.dropdown_group, ctx.on_dropdown_trigger) {
        (Some(group), true) => events.push(DashboardEvent::DropdownToggle {
            group: GroupId::new(group.clone()),
        }),
        _ => {
            if let Some(href) = &ctx.nav_link {
                events.push(DashboardEvent::NavLinkClick { href: href.clone() });
            }
        }
    }

    if let Some((action, user_id)) = &ctx.row_action {
        match (action.parse::<RowAction>(), user_id.trim().parse::<u32>()) {
            (Ok(action), Ok(user_id)) => events.push(DashboardEvent::RowAction { action, user_id }),
            _ => tracing::warn!(%action, %user_id, "unroutable row button"),
        }
    }
    if ctx.add_admin {
        events.push(DashboardEvent::AddAdminClick);
    }
    if ctx.logo {
        events.push(DashboardEvent::LogoClick);
    }

    events.push(DashboardEvent::DocumentClick {
        inside_dropdown: ctx.inside_dropdown,
    });
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_click_only_reports_document_click() {
        assert_eq!(
            click_events(&ClickContext::default()),
            vec![DashboardEvent::DocumentClick {
                inside_dropdown: false
            }]
        );
    }

    #[test]
    fn test_dropdown_trigger_toggles_group() {
        let ctx = ClickContext {
            inside_dropdown: true,
            dropdown_group: Some("users".to_string()),
            on_dropdown_trigger: true,
            nav_link: Some(None),
            ..ClickContext::default()
        };
        assert_eq!(
            click_events(&ctx),
            vec![
                DashboardEvent::DropdownToggle {
                    group: GroupId::from("users")
                },
                DashboardEvent::DocumentClick {
                    inside_dropdown: true
                },
            ]
        );
    }

    #[test]
    fn test_submenu_link_is_navigation() {
        let ctx = ClickContext {
            inside_dropdown: true,
            dropdown_group: Some("users".to_string()),
            nav_link: Some(Some("#all-users".to_string())),
            ..ClickContext::default()
        };
        let events = click_events(&ctx);
        assert_eq!(
            events[0],
            DashboardEvent::NavLinkClick {
                href: Some("#all-users".to_string())
            }
        );
        assert_eq!(
            events[1],
            DashboardEvent::DocumentClick {
                inside_dropdown: true
            }
        );
    }

    #[test]
    fn test_unnamed_dropdown_click_is_inside() {
        let ctx = ClickContext {
            inside_dropdown: true,
            on_dropdown_trigger: true,
            ..ClickContext::default()
        };
        assert_eq!(
            click_events(&ctx),
            vec![DashboardEvent::DocumentClick {
                inside_dropdown: true
            }]
        );
    }

    #[test]
    fn test_row_button_routes_action() {
        let ctx = ClickContext {
            row_action: Some(("password".to_string(), "7".to_string())),
            ..ClickContext::default()
        };
        assert_eq!(
            click_events(&ctx)[0],
            DashboardEvent::RowAction {
                action: RowAction::Password,
                user_id: 7
            }
        );
    }

    #[test]
    fn test_malformed_row_button_is_dropped() {
        let ctx = ClickContext {
            row_action: Some(("explode".to_string(), "7".to_string())),
            ..ClickContext::default()
        };
        assert_eq!(click_events(&ctx).len(), 1);

        let ctx = ClickContext {
            row_action: Some(("edit".to_string(), "seven".to_string())),
            ..ClickContext::default()
        };
        assert_eq!(click_events(&ctx).len(), 1);
    }

    #[test]
    fn test_logo_and_add_admin() {
        let ctx = ClickContext {
            add_admin: true,
            ..ClickContext::default()
        };
        assert_eq!(click_events(&ctx)[0], DashboardEvent::AddAdminClick);

        let ctx = ClickContext {
            logo: true,
            ..ClickContext::default()
        };
        assert_eq!(click_events(&ctx)[0], DashboardEvent::LogoClick);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn context() -> impl Strategy<Value = ClickContext> {
            (
                proptest::option::of("[a-z]{1,8}"),
                any::<bool>(),
                any::<bool>(),
                proptest::option::of(proptest::option::of("#[a-z]{0,8}")),
                proptest::option::of(("[a-z]{1,8}", "[0-9a-z]{1,3}")),
                any::<bool>(),
                any::<bool>(),
            )
                .prop_map(
                    |(
                        dropdown_group,
                        unnamed,
                        on_dropdown_trigger,
                        nav_link,
                        row_action,
                        add_admin,
                        logo,
                    )| {
                        ClickContext {
                            inside_dropdown: unnamed || dropdown_group.is_some(),
                            dropdown_group,
                            on_dropdown_trigger,
                            nav_link,
                            row_action,
                            add_admin,
                            logo,
                        }
                    },
                )
        }

        proptest! {
            #[test]
            fn test_document_click_is_always_last(ctx in context()) {
                let events = click_events(&ctx);
                prop_assert_eq!(
                    events.last(),
                    Some(&DashboardEvent::DocumentClick {
                        inside_dropdown: ctx.inside_dropdown,
                    })
                );
                let closers = events
                    .iter()
                    .filter(|e| matches!(e, DashboardEvent::DocumentClick { .. }))
                    .count();
                prop_assert_eq!(closers, 1);
            }
        }
    }
}
