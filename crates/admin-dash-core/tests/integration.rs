//! Integration tests for admin-dash-core.
//!
//! These drive a [`Dashboard`] through event sequences and check the
//! resulting state and DOM commands.

use admin_dash_core::{
    mock_users, parse_users, Dashboard, DashboardConfig, DashboardEvent, DeferredMessage,
    DomCommand, GroupId, Key, PageRequest, Point, RowAction, Target, UserRecord, UserTable,
};
use proptest::prelude::*;

const MOBILE: f32 = 375.0;
const DESKTOP: f32 = 1440.0;

fn dashboard(width: f32) -> Dashboard {
    let mut dash = Dashboard::new(DashboardConfig::default(), width);
    for group in ["users", "reports", "settings"] {
        dash.register_dropdown_group(group);
    }
    dash.initialize();
    dash
}

fn swipe(dash: &mut Dashboard, from_x: f32, to_x: f32) -> Vec<DomCommand> {
    dash.dispatch(DashboardEvent::TouchStart {
        position: Point::new(from_x, 400.0),
    });
    let commands = dash.dispatch(DashboardEvent::TouchMove {
        position: Point::new(to_x, 400.0),
    });
    dash.dispatch(DashboardEvent::TouchEnd);
    commands
}

fn visible_ids(table: &UserTable) -> Vec<u32> {
    table.render().iter().map(|row| row.id).collect()
}

// =============================================================================
// Sidebar
// =============================================================================

#[test]
fn test_mobile_drawer_round_trip() {
    let mut dash = dashboard(MOBILE);

    let opened = dash.dispatch(DashboardEvent::HamburgerClick);
    assert!(dash.sidebar_state().is_open);
    assert!(opened.contains(&DomCommand::Focus {
        target: Target::FirstNavLink
    }));

    let closed = dash.dispatch(DashboardEvent::OverlayClick);
    assert!(!dash.sidebar_state().is_open);
    assert!(closed.contains(&DomCommand::Focus {
        target: Target::Hamburger
    }));
    assert!(dash.dispatch(DashboardEvent::CloseButtonClick).is_empty());
}

#[test]
fn test_desktop_rail_round_trip() {
    let mut dash = dashboard(DESKTOP);

    let expanded = dash.dispatch(DashboardEvent::HamburgerClick);
    assert!(dash.sidebar_state().is_expanded);
    assert!(expanded.contains(&DomCommand::SetClassName {
        target: Target::HamburgerIcon,
        class_name: "fas fa-chevron-left text-xl".to_string(),
    }));

    dash.dispatch(DashboardEvent::HamburgerClick);
    assert!(!dash.sidebar_state().is_expanded);
    assert!(!dash.sidebar_state().is_open);
}

#[test]
fn test_resize_back_and_forth() {
    let mut dash = dashboard(DESKTOP);
    dash.dispatch(DashboardEvent::HamburgerClick);
    dash.dispatch(DashboardEvent::SidebarEnter);

    dash.dispatch(DashboardEvent::Resize { width: MOBILE });
    let state = *dash.sidebar_state();
    assert!(!state.is_desktop());
    assert!(!state.is_expanded && !state.is_hovered && !state.hover_enabled);

    dash.dispatch(DashboardEvent::HamburgerClick);
    assert!(dash.sidebar_state().is_open);

    dash.dispatch(DashboardEvent::Resize { width: DESKTOP });
    let state = *dash.sidebar_state();
    assert!(state.is_desktop());
    assert!(!state.is_open && !state.scroll_locked && state.hover_enabled);
}

#[test]
fn test_breakpoint_is_inclusive() {
    let dash = dashboard(1024.0);
    assert!(dash.sidebar_state().is_desktop());
    let dash = dashboard(1023.9);
    assert!(!dash.sidebar_state().is_desktop());
}

#[test]
fn test_swipe_left_sixty_px_closes_open_drawer() {
    let mut dash = dashboard(MOBILE);
    dash.dispatch(DashboardEvent::HamburgerClick);
    swipe(&mut dash, 300.0, 240.0);
    assert!(!dash.sidebar_state().is_open);
}

#[test]
fn test_swipe_left_forty_px_leaves_drawer_open() {
    let mut dash = dashboard(MOBILE);
    dash.dispatch(DashboardEvent::HamburgerClick);
    let commands = swipe(&mut dash, 300.0, 260.0);
    assert!(commands.is_empty());
    assert!(dash.sidebar_state().is_open);
}

#[test]
fn test_vertical_drag_is_not_a_swipe() {
    let mut dash = dashboard(MOBILE);
    dash.dispatch(DashboardEvent::TouchStart {
        position: Point::new(20.0, 100.0),
    });
    dash.dispatch(DashboardEvent::TouchMove {
        position: Point::new(90.0, 300.0),
    });
    assert!(!dash.sidebar_state().is_open);
}

#[test]
fn test_swipe_threshold_is_configurable() {
    let config = DashboardConfig::from_yaml("swipe_threshold_px: 30").expect("valid config");
    let mut dash = Dashboard::new(config, MOBILE);
    swipe(&mut dash, 10.0, 50.0);
    assert!(dash.sidebar_state().is_open);
}

// =============================================================================
// Dropdowns
// =============================================================================

#[test]
fn test_dropdowns_gated_on_collapsed_rail() {
    let mut dash = dashboard(DESKTOP);
    let users = GroupId::from("users");

    assert!(dash
        .dispatch(DashboardEvent::DropdownToggle {
            group: users.clone()
        })
        .is_empty());
    assert!(dash.dropdowns().open_group().is_none());

    dash.dispatch(DashboardEvent::SidebarEnter);
    dash.dispatch(DashboardEvent::DropdownToggle {
        group: users.clone(),
    });
    assert!(dash.dropdowns().is_open(&users));
}

#[test]
fn test_opening_one_dropdown_closes_another() {
    let mut dash = dashboard(MOBILE);
    dash.dispatch(DashboardEvent::DropdownToggle {
        group: GroupId::from("users"),
    });
    let commands = dash.dispatch(DashboardEvent::DropdownToggle {
        group: GroupId::from("reports"),
    });
    assert_eq!(dash.dropdowns().open_group(), Some(&GroupId::from("reports")));
    assert!(commands.contains(&DomCommand::RemoveClass {
        target: Target::DropdownGroup(GroupId::from("users")),
        class: "open".to_string(),
    }));
}

#[test]
fn test_escape_closes_dropdowns_on_mobile() {
    let mut dash = dashboard(MOBILE);
    dash.dispatch(DashboardEvent::DropdownToggle {
        group: GroupId::from("settings"),
    });
    dash.dispatch(DashboardEvent::KeyDown { key: Key::Escape });
    assert!(dash.dropdowns().open_group().is_none());
}

#[test]
fn test_unknown_dropdown_is_ignored() {
    let mut dash = dashboard(MOBILE);
    assert!(dash
        .dispatch(DashboardEvent::DropdownToggle {
            group: GroupId::from("billing"),
        })
        .is_empty());
}

// =============================================================================
// Table
// =============================================================================

#[test]
fn test_ten_records_page_size_ten() {
    let table = UserTable::new(mock_users(), 10);
    assert_eq!(table.render().len(), 10);
    assert!(admin_dash_core::render_rows(
        &table.filtered_records(),
        2,
        10,
        &[RowAction::Edit]
    )
    .is_empty());
}

#[test]
fn test_filter_is_idempotent() {
    let mut table = UserTable::new(mock_users(), 10);
    table.set_filter("er");
    let once = visible_ids(&table);
    table.set_filter("er");
    assert_eq!(visible_ids(&table), once);
}

#[test]
fn test_filter_three_preserves_order() {
    let mut table = UserTable::new(mock_users(), 10);
    table.set_filter("ana");
    assert_eq!(visible_ids(&table), vec![2, 6, 7]);
}

#[test]
fn test_filter_ignores_case() {
    let users = parse_users(
        r#"[
            {"id": 1, "email": "a@x.io", "fullName": "Ann", "role": "Admin", "phone": "1", "blocked": "No"},
            {"id": 2, "email": "b@x.io", "fullName": "Ben", "role": "User", "phone": "2", "blocked": true}
        ]"#,
    )
    .expect("valid fixture");
    let mut table = UserTable::new(users, 10);
    table.set_filter("ADMIN");
    assert_eq!(visible_ids(&table), vec![1]);
}

#[test]
fn test_filter_from_late_page_returns_to_first() {
    let mut dash = dashboard(MOBILE);
    dash.dispatch(DashboardEvent::PageSizeChange {
        value: "3".to_string(),
    });
    dash.dispatch(DashboardEvent::PageChange(PageRequest::Goto(4)));
    assert_eq!(dash.table().page(), 4);

    dash.dispatch(DashboardEvent::SearchInput {
        text: "john".to_string(),
    });
    assert_eq!(dash.table().page(), 1);
    assert_eq!(dash.table().render().len(), 2);
}

#[test]
fn test_goto_past_end_clamps() {
    let mut dash = dashboard(MOBILE);
    dash.dispatch(DashboardEvent::PageSizeChange {
        value: "25".to_string(),
    });
    dash.dispatch(DashboardEvent::PageChange(PageRequest::Goto(9)));
    assert_eq!(dash.table().page(), 1);
}

#[test]
fn test_no_matches_summary() {
    let mut dash = dashboard(MOBILE);
    let commands = dash.dispatch(DashboardEvent::SearchInput {
        text: "zzz".to_string(),
    });
    assert!(commands.contains(&DomCommand::SetInnerHtml {
        target: Target::TableBody,
        html: String::new(),
    }));
    assert!(commands.contains(&DomCommand::SetInnerHtml {
        target: Target::TableSummary,
        html: "Showing 0 to 0 of 0 entries (filtered from 10 total entries)".to_string(),
    }));
}

#[test]
fn test_configured_row_actions_render() {
    let config = DashboardConfig::from_json(r#"{"row_actions": ["view", "delete"]}"#)
        .expect("valid config");
    let mut dash = Dashboard::new(config, DESKTOP);
    let commands = dash.initialize();
    let body = commands
        .iter()
        .find_map(|c| match c {
            DomCommand::SetInnerHtml {
                target: Target::TableBody,
                html,
            } => Some(html.clone()),
            _ => None,
        })
        .expect("table body rendered");
    assert!(body.contains(r#"data-action="view""#));
    assert!(body.contains(r#"data-action="delete""#));
    assert!(!body.contains(r#"data-action="edit""#));
}

#[test]
fn test_custom_users_replace_mock_list() {
    let users = vec![UserRecord::new(42, "x@y.z", "Xavier", "Owner", "+0", false)];
    let mut dash = Dashboard::new(DashboardConfig::default(), MOBILE).with_users(users);
    dash.initialize();
    assert_eq!(dash.table().records().len(), 1);
    assert!(dash
        .dispatch(DashboardEvent::RowAction {
            action: RowAction::Edit,
            user_id: 42,
        })
        .iter()
        .any(|c| matches!(c, DomCommand::SetInnerHtml { .. })));
}

// =============================================================================
// Deferred messages
// =============================================================================

#[test]
fn test_nav_click_then_timer_closes_drawer() {
    let mut dash = dashboard(MOBILE);
    dash.dispatch(DashboardEvent::HamburgerClick);
    let commands = dash.dispatch(DashboardEvent::NavLinkClick {
        href: Some("#settings".to_string()),
    });
    let message = commands
        .into_iter()
        .find_map(|c| match c {
            DomCommand::Defer { message, .. } => Some(message),
            _ => None,
        })
        .expect("close scheduled");
    assert_eq!(message, DeferredMessage::CloseDrawer);

    dash.dispatch(DashboardEvent::Deferred(message));
    assert!(!dash.sidebar_state().is_open);
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Debug, Clone)]
enum Step {
    Hamburger,
    Escape,
    Resize(f32),
    Enter,
    Leave,
    Toggle(usize),
    Outside,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Hamburger),
        Just(Step::Escape),
        (200.0f32..2000.0).prop_map(Step::Resize),
        Just(Step::Enter),
        Just(Step::Leave),
        (0usize..3).prop_map(Step::Toggle),
        Just(Step::Outside),
    ]
}

fn event(step: &Step) -> DashboardEvent {
    const GROUPS: [&str; 3] = ["users", "reports", "settings"];
    match step {
        Step::Hamburger => DashboardEvent::HamburgerClick,
        Step::Escape => DashboardEvent::KeyDown { key: Key::Escape },
        Step::Resize(width) => DashboardEvent::Resize { width: *width },
        Step::Enter => DashboardEvent::SidebarEnter,
        Step::Leave => DashboardEvent::SidebarLeave,
        Step::Toggle(i) => DashboardEvent::DropdownToggle {
            group: GroupId::from(GROUPS[*i]),
        },
        Step::Outside => DashboardEvent::DocumentClick {
            inside_dropdown: false,
        },
    }
}

proptest! {
    #[test]
    fn prop_state_stays_consistent(
        width in 200.0f32..2000.0,
        steps in proptest::collection::vec(step(), 0..40),
    ) {
        let mut dash = dashboard(width);
        for s in &steps {
            dash.dispatch(event(s));
            let state = dash.sidebar_state();
            prop_assert!(state.is_consistent());
            if state.is_desktop() {
                prop_assert!(!state.is_open);
            }
        }
    }

    #[test]
    fn prop_open_dropdown_always_registered(
        steps in proptest::collection::vec(step(), 0..40),
    ) {
        let mut dash = dashboard(MOBILE);
        for s in &steps {
            dash.dispatch(event(s));
            if let Some(open) = dash.dropdowns().open_group() {
                prop_assert!(dash.dropdowns().groups().contains(open));
            }
        }
    }
}
