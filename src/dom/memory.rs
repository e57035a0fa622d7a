//! Headless in-memory [`Dom`] implementation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::dom::Dom;

#[derive(Debug, Default, Clone)]
struct Element {
    html: String,
    display: Option<String>,
    value: String,
    checked: bool,
}

#[derive(Debug, Default)]
struct State {
    elements: HashMap<String, Element>,
    focused: Option<String>,
}

/// In-memory DOM for headless operation and tests.
///
/// Elements materialize on first touch, visible and empty; seed initial
/// stylesheet state (such as a panel starting hidden) with
/// [`Dom::set_display`] before driving a controller.
#[derive(Debug, Default)]
pub struct MemoryDom {
    state: Mutex<State>,
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_element<R>(&self, id: &str, apply: impl FnOnce(&mut Element) -> R) -> R {
        let mut state = self.state();
        apply(state.elements.entry(id.to_string()).or_default())
    }

    /// Inner HTML of an element, for assertions.
    #[must_use]
    pub fn html_of(&self, id: &str) -> String {
        self.with_element(id, |element| element.html.clone())
    }

    /// Field value of an element, for assertions.
    #[must_use]
    pub fn value_of(&self, id: &str) -> String {
        self.with_element(id, |element| element.value.clone())
    }

    /// Checked state of a checkbox, for assertions.
    #[must_use]
    pub fn is_checked(&self, id: &str) -> bool {
        self.with_element(id, |element| element.checked)
    }

    /// Id of the focused element, for assertions.
    #[must_use]
    pub fn focused(&self) -> Option<String> {
        self.state().focused.clone()
    }
}

impl Dom for MemoryDom {
    fn show(&self, id: &str) {
        self.with_element(id, |element| element.display = None);
    }

    fn hide(&self, id: &str) {
        self.with_element(id, |element| element.display = Some("none".to_string()));
    }

    fn display(&self, id: &str) -> Option<String> {
        self.with_element(id, |element| element.display.clone())
    }

    fn set_display(&self, id: &str, display: &str) {
        self.with_element(id, |element| element.display = Some(display.to_string()));
    }

    fn set_html(&self, id: &str, html: &str) {
        self.with_element(id, |element| element.html = html.to_string());
    }

    fn append_html(&self, id: &str, html: &str) {
        self.with_element(id, |element| element.html.push_str(html));
    }

    fn value(&self, id: &str) -> String {
        self.with_element(id, |element| element.value.clone())
    }

    fn set_value(&self, id: &str, value: &str) {
        self.with_element(id, |element| element.value = value.to_string());
    }

    fn set_checked(&self, id: &str, checked: bool) {
        self.with_element(id, |element| element.checked = checked);
    }

    fn active_element(&self) -> Option<String> {
        self.state().focused.clone()
    }

    fn focus(&self, id: &str) {
        self.state().focused = Some(id.to_string());
    }
}
