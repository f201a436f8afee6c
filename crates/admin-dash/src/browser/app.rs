//! WASM application entry point.
//!
//! [`App`] owns the [`Dashboard`] and every DOM listener. Listeners convert
//! browser events, dispatch them, and apply the returned commands; `Defer`
//! commands become `setTimeout` callbacks that dispatch the message back.

use super::delegate::click_events;
use super::dom::DomRenderer;
use super::events::{
    click_context, closest, event_element, keyboard_event_to_dashboard, page_size_event,
    search_event, touch_event_to_dashboard,
};
use super::logging::init_logging;
use admin_dash_core::{
    tooltip_position, Dashboard, DashboardConfig, DashboardEvent, DeferredMessage, DomCommand,
    GroupId, PageRequest, Point, Rect, Ripple, Size, ToastKind,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    window, DomRect, Element, Event, EventTarget, KeyboardEvent, MouseEvent, Node, TouchEvent,
    Window,
};

/// An attached listener, kept so it can be detached on drop.
struct Listener {
    target: EventTarget,
    event_type: String,
    callback: Closure<dyn FnMut(Event)>,
}

/// State shared by every listener.
struct Runtime {
    dashboard: RefCell<Dashboard>,
    renderer: DomRenderer,
    window: Window,
    config: DashboardConfig,
    tooltip: RefCell<Option<Element>>,
}

impl Runtime {
    fn dispatch(self: &Rc<Self>, event: DashboardEvent) {
        let commands = match self.dashboard.try_borrow_mut() {
            Ok(mut dashboard) => dashboard.dispatch(event),
            Err(_) => {
                tracing::warn!(?event, "re-entrant dispatch dropped");
                return;
            }
        };
        self.apply(commands);
    }

    fn apply(self: &Rc<Self>, commands: Vec<DomCommand>) {
        for command in commands {
            match command {
                DomCommand::Defer { delay_ms, message } => self.schedule(delay_ms, message),
                other => self.renderer.apply(&other),
            }
        }
    }

    fn schedule(self: &Rc<Self>, delay_ms: u32, message: DeferredMessage) {
        let runtime = Rc::clone(self);
        self.after(delay_ms, move || {
            runtime.dispatch(DashboardEvent::Deferred(message));
        });
    }

    fn after(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        let callback = Closure::once_into_js(f);
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        if self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout)
            .is_err()
        {
            tracing::warn!(delay_ms, "setTimeout failed");
        }
    }

    fn ripple(&self, host: &Element, event: &MouseEvent) {
        let pointer = Point::new(event.client_x() as f32, event.client_y() as f32);
        let ripple = Ripple::compute(to_rect(&host.get_bounding_client_rect()), pointer);
        let Ok(span) = self.renderer.document().create_element("span") else {
            return;
        };
        span.set_class_name("ripple-effect");
        span.set_attribute("style", &ripple.style()).ok();
        host.append_child(&span).ok();
        self.after(self.config.ripple_duration_ms, move || span.remove());
    }

    fn show_tooltip(&self, anchor: &Element) {
        self.hide_tooltip();
        let Some(text) = anchor.get_attribute("data-tooltip") else {
            return;
        };
        let document = self.renderer.document();
        let (Ok(tip), Some(body)) = (document.create_element("div"), document.body()) else {
            return;
        };
        tip.set_class_name("tooltip");
        tip.set_text_content(Some(text.as_str()));
        body.append_child(&tip).ok();

        let measured = tip.get_bounding_client_rect();
        let position = tooltip_position(
            to_rect(&anchor.get_bounding_client_rect()),
            Size::new(measured.width() as f32, measured.height() as f32),
        );
        // Placement is computed in viewport space; the tooltip lives in the page.
        let left = f64::from(position.x) + self.window.scroll_x().unwrap_or(0.0);
        let top = f64::from(position.y) + self.window.scroll_y().unwrap_or(0.0);
        tip.set_attribute("style", &format!("position:absolute;left:{left}px;top:{top}px"))
            .ok();
        *self.tooltip.borrow_mut() = Some(tip);
    }

    fn hide_tooltip(&self) {
        if let Some(tip) = self.tooltip.borrow_mut().take() {
            tip.remove();
        }
    }
}

fn to_rect(rect: &DomRect) -> Rect {
    Rect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

fn viewport_width(window: &Window) -> f32 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0) as f32
}

/// Main application runner for browser.
#[wasm_bindgen]
pub struct App {
    runtime: Rc<Runtime>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl App {
    /// Attach the dashboard to the current document.
    ///
    /// `config_json` is an optional JSON [`DashboardConfig`]; missing fields
    /// take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<App, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json.as_deref().map(str::trim) {
            Some(json) if !json.is_empty() => DashboardConfig::from_json(json)
                .map_err(|e| JsValue::from_str(&format!("Config error: {e}")))?,
            _ => DashboardConfig::default(),
        };
        if let Err(err) = init_logging(config.level()) {
            web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
        }

        let window = window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;

        let mut dashboard = Dashboard::new(config.clone(), viewport_width(&window));
        if let Ok(groups) = document.query_selector_all(&config.elements.dropdown_selector) {
            for i in 0..groups.length() {
                let group = groups
                    .item(i)
                    .and_then(|node| node.dyn_into::<Element>().ok())
                    .and_then(|el| el.get_attribute("data-group"));
                if let Some(group) = group {
                    dashboard.register_dropdown_group(GroupId::new(group));
                }
            }
        }

        let renderer = DomRenderer::new(
            document,
            config.elements.clone(),
            config.classes.clone(),
        );
        let runtime = Rc::new(Runtime {
            dashboard: RefCell::new(dashboard),
            renderer,
            window,
            config,
            tooltip: RefCell::new(None),
        });

        let initial = runtime.dashboard.borrow_mut().initialize();
        runtime.apply(initial);

        let mut app = Self {
            runtime,
            listeners: Vec::new(),
        };
        app.wire();
        Ok(app)
    }

    /// Show a toast. `kind` is `info` (default), `success`, `warning` or `error`.
    pub fn toast(&self, message: &str, kind: Option<String>) {
        let kind = kind
            .and_then(|k| serde_json::from_value::<ToastKind>(serde_json::Value::String(k)).ok())
            .unwrap_or_default();
        let commands = match self.runtime.dashboard.try_borrow_mut() {
            Ok(mut dashboard) => dashboard.notify(message, kind),
            Err(_) => return,
        };
        self.runtime.apply(commands);
    }

    /// Dispatch a JSON-encoded dashboard event.
    pub fn dispatch_json(&self, json: &str) -> Result<(), JsValue> {
        let event: DashboardEvent = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("JSON parse error: {e}")))?;
        self.runtime.dispatch(event);
        Ok(())
    }

    /// Current sidebar state as JSON.
    pub fn sidebar_state_json(&self) -> String {
        self.runtime
            .dashboard
            .try_borrow()
            .ok()
            .and_then(|dashboard| serde_json::to_string(dashboard.sidebar_state()).ok())
            .unwrap_or_default()
    }

    /// Number of attached DOM listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl App {
    fn wire(&mut self) {
        let ids = self.runtime.config.elements.clone();
        let document: EventTarget = self.runtime.renderer.document().clone().into();
        let window: EventTarget = self.runtime.window.clone().into();

        // Sidebar chrome
        self.route_id(&ids.hamburger, "click", |_| Some(DashboardEvent::HamburgerClick));
        self.route_id(&ids.overlay, "click", |_| Some(DashboardEvent::OverlayClick));
        self.route_id(&ids.sidebar_close, "click", |_| {
            Some(DashboardEvent::CloseButtonClick)
        });
        self.route_id(&ids.sidebar, "mouseenter", |_| Some(DashboardEvent::SidebarEnter));
        self.route_id(&ids.sidebar, "mouseleave", |_| Some(DashboardEvent::SidebarLeave));

        // Keyboard, viewport and touch
        self.route(&document, "keydown", |e| {
            e.dyn_ref::<KeyboardEvent>().map(keyboard_event_to_dashboard)
        });
        let win = self.runtime.window.clone();
        self.route(&window, "resize", move |_| {
            Some(DashboardEvent::Resize {
                width: viewport_width(&win),
            })
        });
        for event_type in ["touchstart", "touchmove", "touchend", "touchcancel"] {
            self.route(&document, event_type, move |e| {
                e.dyn_ref::<TouchEvent>()
                    .and_then(|touch| touch_event_to_dashboard(touch, event_type))
            });
        }

        // Table controls
        self.route_id(&ids.search_input, "input", search_event);
        self.route_id(&ids.page_size_select, "change", page_size_event);
        self.route_id(&ids.page_prev, "click", |_| {
            Some(DashboardEvent::PageChange(PageRequest::Prev))
        });
        self.route_id(&ids.page_next, "click", |_| {
            Some(DashboardEvent::PageChange(PageRequest::Next))
        });

        // Delegated clicks: navigation, dropdowns, row buttons, logo, ripple
        let runtime = Rc::clone(&self.runtime);
        let click_ids = ids.clone();
        self.listen(&document, "click", move |e| {
            let Some(element) = event_element(e) else {
                runtime.dispatch(DashboardEvent::DocumentClick {
                    inside_dropdown: false,
                });
                return;
            };
            if let Some(host) = closest(&element, &click_ids.ripple_selector) {
                if let Some(mouse) = e.dyn_ref::<MouseEvent>() {
                    runtime.ripple(&host, mouse);
                }
            }
            let ctx = click_context(&element, &click_ids);
            if ctx.on_dropdown_trigger {
                e.prevent_default();
            }
            for event in click_events(&ctx) {
                runtime.dispatch(event);
            }
        });

        // Tooltips
        let runtime = Rc::clone(&self.runtime);
        let selector = ids.tooltip_selector.clone();
        self.listen(&document, "mouseover", move |e| {
            if let Some(anchor) = event_element(e).and_then(|el| closest(&el, &selector)) {
                runtime.show_tooltip(&anchor);
            }
        });
        let runtime = Rc::clone(&self.runtime);
        let selector = ids.tooltip_selector;
        self.listen(&document, "mouseout", move |e| {
            let Some(anchor) = event_element(e).and_then(|el| closest(&el, &selector)) else {
                return;
            };
            let into = e
                .dyn_ref::<MouseEvent>()
                .and_then(MouseEvent::related_target)
                .and_then(|t| t.dyn_into::<Node>().ok());
            if !anchor.contains(into.as_ref()) {
                runtime.hide_tooltip();
            }
        });

        tracing::debug!(listeners = self.listeners.len(), "listeners attached");
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        event_type: &str,
        mut handler: impl FnMut(&Event) + 'static,
    ) {
        let callback: Closure<dyn FnMut(Event)> = Closure::new(move |e: Event| handler(&e));
        if target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .is_ok()
        {
            self.listeners.push(Listener {
                target: target.clone(),
                event_type: event_type.to_string(),
                callback,
            });
        } else {
            tracing::warn!(event_type, "addEventListener failed");
        }
    }

    fn route(
        &mut self,
        target: &EventTarget,
        event_type: &str,
        convert: impl Fn(&Event) -> Option<DashboardEvent> + 'static,
    ) {
        let runtime = Rc::clone(&self.runtime);
        self.listen(target, event_type, move |e| {
            if let Some(event) = convert(e) {
                runtime.dispatch(event);
            }
        });
    }

    fn route_id(
        &mut self,
        id: &str,
        event_type: &str,
        convert: impl Fn(&Event) -> Option<DashboardEvent> + 'static,
    ) {
        match self.runtime.renderer.document().get_element_by_id(id) {
            Some(element) => self.route(&element, event_type, convert),
            None => tracing::debug!(id, event_type, "element missing, listener not attached"),
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            listener
                .target
                .remove_event_listener_with_callback(
                    &listener.event_type,
                    listener.callback.as_ref().unchecked_ref(),
                )
                .ok();
        }
        self.runtime.hide_tooltip();
    }
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to browser console.
#[wasm_bindgen]
pub fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
