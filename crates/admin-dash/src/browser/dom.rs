//! DOM renderer - applies [`DomCommand`]s to the host document.
//!
//! Targets are resolved on every command, so elements the page adds or
//! removes later are picked up. A command whose element is absent is skipped.

use admin_dash_core::{ClassNames, DomCommand, ElementIds, Target};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Applies DOM commands to a document.
pub struct DomRenderer {
    document: Document,
    elements: ElementIds,
    classes: ClassNames,
}

impl DomRenderer {
    /// Create a renderer over `document`.
    pub fn new(document: Document, elements: ElementIds, classes: ClassNames) -> Self {
        Self {
            document,
            elements,
            classes,
        }
    }

    /// The document being rendered to.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Find the element a target refers to.
    pub fn resolve(&self, target: &Target) -> Option<Element> {
        let ids = &self.elements;
        match target {
            Target::Sidebar => self.by_id(&ids.sidebar),
            Target::Overlay => self.by_id(&ids.overlay),
            Target::Hamburger => self.by_id(&ids.hamburger),
            Target::HamburgerIcon => self.query(&ids.hamburger_icon),
            Target::FirstNavLink => self
                .by_id(&ids.sidebar)?
                .query_selector(&ids.nav_link_selector)
                .ok()
                .flatten(),
            Target::TableBody => self.by_id(&ids.table_body),
            Target::TableSummary => self.by_id(&ids.table_summary),
            Target::PageSizeSelect => self.by_id(&ids.page_size_select),
            Target::ToastContainer => self.by_id(&ids.toast_container),
            Target::Logo => self.by_id(&ids.logo),
            Target::DropdownGroup(group) => self.query(&format!(
                "{}[data-group=\"{}\"]",
                ids.dropdown_selector,
                group.as_str().replace('"', "\\\"")
            )),
            Target::Element(id) => self.by_id(id),
        }
    }

    /// Apply commands in order. `Defer` commands are left to the caller.
    pub fn render(&self, commands: &[DomCommand]) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Apply one command.
    pub fn apply(&self, command: &DomCommand) {
        match command {
            DomCommand::AddClass { target, class } => {
                self.with_element(target, |el| {
                    el.class_list().add_1(class).ok();
                });
            }
            DomCommand::RemoveClass { target, class } => {
                self.with_element(target, |el| {
                    el.class_list().remove_1(class).ok();
                });
            }
            DomCommand::SetClassName { target, class_name } => {
                self.with_element(target, |el| el.set_class_name(class_name));
            }
            DomCommand::SetInnerHtml { target, html } => {
                self.with_element(target, |el| el.set_inner_html(html));
            }
            DomCommand::AppendHtml { target, html } => {
                self.with_element(target, |el| {
                    el.insert_adjacent_html("beforeend", html).ok();
                });
            }
            DomCommand::RemoveElement { target } => self.with_element(target, Element::remove),
            DomCommand::Focus { target } => {
                self.with_element(target, |el| {
                    if let Some(html) = el.dyn_ref::<HtmlElement>() {
                        html.focus().ok();
                    }
                });
            }
            DomCommand::LockScroll => self.body_class(true),
            DomCommand::UnlockScroll => self.body_class(false),
            DomCommand::Defer { .. } => {
                tracing::trace!("renderer ignores deferred message");
            }
        }
    }

    fn with_element(&self, target: &Target, f: impl FnOnce(&Element)) {
        match self.resolve(target) {
            Some(el) => f(&el),
            None => tracing::trace!(?target, "element missing, command skipped"),
        }
    }

    fn body_class(&self, locked: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let list = body.class_list();
        let result = if locked {
            list.add_1(&self.classes.scroll_lock)
        } else {
            list.remove_1(&self.classes.scroll_lock)
        };
        result.ok();
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }
}
