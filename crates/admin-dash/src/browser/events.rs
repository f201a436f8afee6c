//! Browser event handling - converts web events to dashboard events.

use super::delegate::ClickContext;
use admin_dash_core::{DashboardEvent, ElementIds, Key, Point};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, KeyboardEvent, TouchEvent};

/// Element an event was dispatched to, if it is an element.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Nearest ancestor (or self) matching `selector`.
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Convert a keydown event.
pub fn keyboard_event_to_dashboard(event: &KeyboardEvent) -> DashboardEvent {
    DashboardEvent::KeyDown {
        key: Key::from_key(&event.key()),
    }
}

/// First touch position in client coordinates.
pub fn first_touch(event: &TouchEvent) -> Option<Point> {
    let touch = event.touches().get(0)?;
    Some(Point::new(touch.client_x() as f32, touch.client_y() as f32))
}

/// Convert a touch event (first finger only).
pub fn touch_event_to_dashboard(event: &TouchEvent, event_type: &str) -> Option<DashboardEvent> {
    match event_type {
        "touchstart" => first_touch(event).map(|position| DashboardEvent::TouchStart { position }),
        "touchmove" => first_touch(event).map(|position| DashboardEvent::TouchMove { position }),
        "touchend" | "touchcancel" => Some(DashboardEvent::TouchEnd),
        _ => None,
    }
}

/// Current text of the search box.
pub fn search_event(event: &Event) -> Option<DashboardEvent> {
    let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    Some(DashboardEvent::SearchInput {
        text: input.value(),
    })
}

/// Current value of the page-size selector.
pub fn page_size_event(event: &Event) -> Option<DashboardEvent> {
    let select = event.target()?.dyn_into::<HtmlSelectElement>().ok()?;
    Some(DashboardEvent::PageSizeChange {
        value: select.value(),
    })
}

/// Describe where a click landed.
pub fn click_context(element: &Element, ids: &ElementIds) -> ClickContext {
    let group = closest(element, &ids.dropdown_selector);
    let on_trigger = group.as_ref().is_some_and(|group| {
        closest(element, &ids.dropdown_trigger_selector)
            .is_some_and(|trigger| group.contains(Some(&*trigger)))
    });
    let logo_selector = format!("#{}", ids.logo);

    ClickContext {
        inside_dropdown: group.is_some(),
        dropdown_group: group.and_then(|g| g.get_attribute("data-group")),
        on_dropdown_trigger: on_trigger,
        nav_link: closest(element, &ids.nav_link_selector).map(|link| link.get_attribute("href")),
        row_action: closest(element, "[data-action]").and_then(|button| {
            Some((
                button.get_attribute("data-action")?,
                button.get_attribute("data-user-id")?,
            ))
        }),
        add_admin: closest(element, &ids.add_admin_selector).is_some(),
        logo: closest(element, &logo_selector).is_some(),
    }
}
