//! DOM abstraction the page controllers mutate through.
//!
//! The trait covers exactly the surface the controllers need: visibility,
//! inline display state, HTML replacement and appending, form field values,
//! checkbox state, and focus tracking. Elements are addressed by id. The
//! controllers assume the expected structure is present; a missing element is
//! not a recoverable condition.

pub mod memory;

pub use memory::MemoryDom;

/// Mutable view of the page the controllers run against.
pub trait Dom: Send + Sync {
    /// Make an element visible by clearing its inline display style.
    fn show(&self, id: &str);

    /// Hide an element.
    fn hide(&self, id: &str);

    /// Current inline display style, if one is set.
    fn display(&self, id: &str) -> Option<String>;

    /// Set an element's inline display style.
    fn set_display(&self, id: &str, display: &str);

    /// Replace an element's inner HTML.
    fn set_html(&self, id: &str, html: &str);

    /// Append a fragment to an element's inner HTML.
    fn append_html(&self, id: &str, html: &str);

    /// Current value of a form field.
    fn value(&self, id: &str) -> String;

    /// Set the value of a form field.
    fn set_value(&self, id: &str, value: &str);

    /// Set the checked state of a checkbox.
    fn set_checked(&self, id: &str, checked: bool);

    /// Id of the element holding keyboard focus, if any.
    fn active_element(&self) -> Option<String>;

    /// Move keyboard focus to an element.
    fn focus(&self, id: &str);

    /// Whether an element is hidden via its inline display style.
    fn is_hidden(&self, id: &str) -> bool {
        self.display(id).as_deref() == Some("none")
    }
}
