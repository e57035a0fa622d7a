//! Volunteer form controller.
//!
//! Maintains the growable list of "other symptom" entries: an ordered list of
//! checkbox/text-field pairs with contiguous zero-based values and at most
//! one unchecked trailing scratch entry. The list state lives here; the DOM
//! rendering is derived from it, never inspected.

use maud::html;
use tracing::debug;

use crate::components::OtherEntryRow;
use crate::constants::OTHER_ENTRIES_CONTAINER;
use crate::dom::Dom;

/// Lifecycle state of one "other symptom" entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Rendered with the page (e.g. restored from a previous submission).
    Fixed,
    /// Auto-appended entry awaiting its first keystroke.
    ScratchPending,
    /// Entry that has spawned its own trailing scratch; further keystrokes
    /// must not append another.
    ScratchCommitted,
}

/// One checkbox/text-field pair of the "other symptoms" list.
#[derive(Debug, Clone)]
pub struct OtherEntry {
    /// Contiguous zero-based value carried by the checkbox.
    pub value: usize,
    pub text: String,
    pub checked: bool,
    pub state: EntryState,
}

/// Controller for the volunteer form's "other symptoms" list.
pub struct VolunteerForm<D> {
    dom: D,
    entries: Vec<OtherEntry>,
}

impl<D: Dom> VolunteerForm<D> {
    /// Construct the controller with a single empty scratch entry.
    pub fn new(dom: D) -> Self {
        Self::with_existing(dom, &[])
    }

    /// Construct the controller from previously submitted symptom texts
    /// (form redisplay), appending the trailing scratch entry.
    pub fn with_existing(dom: D, symptoms: &[&str]) -> Self {
        let mut entries: Vec<OtherEntry> = symptoms
            .iter()
            .enumerate()
            .map(|(value, text)| OtherEntry {
                value,
                text: (*text).to_string(),
                checked: true,
                state: EntryState::Fixed,
            })
            .collect();
        entries.push(OtherEntry {
            value: entries.len(),
            text: String::new(),
            checked: false,
            state: EntryState::ScratchPending,
        });

        let form = Self { dom, entries };
        form.sync_dom(None);
        form
    }

    /// The entries in document order.
    pub fn entries(&self) -> &[OtherEntry] {
        &self.entries
    }

    /// The DOM the controller runs against.
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Checkbox change handler. Unchecking any entry but the last deletes
    /// it; everything else is left to the key-up handler.
    pub fn on_checkbox_change(&mut self, value: usize, checked: bool) {
        if !checked && value + 1 < self.entries.len() {
            self.delete_entry(value);
        }
    }

    /// Checkbox mousedown handler. Returns `true`: the default is always
    /// prevented so clicking a checkbox does not steal focus from an
    /// adjacent text field.
    #[must_use]
    pub fn on_checkbox_mousedown(&self) -> bool {
        true
    }

    /// Text field key-up handler, with the field's current content.
    pub fn on_text_keyup(&mut self, value: usize, text: &str) {
        let len = self.entries.len();
        if value >= len {
            return;
        }

        if text.is_empty() {
            // Second-to-last entry emptied: drop its trailing scratch and
            // allow a new one to be appended later.
            if value + 2 == len {
                self.entries.remove(value + 1);
                let entry = &mut self.entries[value];
                entry.text.clear();
                entry.checked = false;
                entry.state = EntryState::ScratchPending;
                let focused = self.dom.active_element();
                self.sync_dom(focused.as_deref());
                return;
            }

            let entry = &mut self.entries[value];
            entry.text.clear();
            entry.checked = false;
            self.dom.set_checked(&OtherEntryRow::checkbox_id(value), false);
        } else {
            self.entries[value].text = text.to_string();
            let is_last = value + 1 == len;
            if is_last && self.entries[value].state != EntryState::ScratchCommitted {
                let entry = &mut self.entries[value];
                entry.checked = true;
                entry.state = EntryState::ScratchCommitted;
                self.entries.push(OtherEntry {
                    value: len,
                    text: String::new(),
                    checked: false,
                    state: EntryState::ScratchPending,
                });
                let focused = self.dom.active_element();
                self.sync_dom(focused.as_deref());
            } else {
                self.entries[value].checked = true;
                self.dom.set_checked(&OtherEntryRow::checkbox_id(value), true);
            }
        }
    }

    /// Remove the entry with the given value, renumber the remainder to
    /// contiguous values preserving order, and restore focus across the
    /// re-render. Never deletes the last remaining entry.
    fn delete_entry(&mut self, value: usize) {
        if self.entries.len() < 2 {
            return;
        }
        let Some(position) = self.entries.iter().position(|entry| entry.value == value) else {
            return;
        };

        debug!(value, "removing other-symptom entry");
        let focused = self.dom.active_element();
        self.entries.remove(position);
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.value = index;
        }
        self.sync_dom(refocus_after_removal(focused, value).as_deref());
    }

    /// Re-render the entry rows into their container and restore focus.
    fn sync_dom(&self, refocus: Option<&str>) {
        let markup = html! {
            @for entry in &self.entries {
                (OtherEntryRow::new(entry.value, &entry.text, entry.checked))
            }
        };
        self.dom
            .set_html(OTHER_ENTRIES_CONTAINER, &markup.into_string());
        if let Some(id) = refocus {
            self.dom.focus(id);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryField {
    Checkbox,
    Text,
}

impl EntryField {
    fn element_id(self, value: usize) -> String {
        match self {
            Self::Checkbox => OtherEntryRow::checkbox_id(value),
            Self::Text => OtherEntryRow::text_id(value),
        }
    }
}

/// Map an entry field id to its field kind and entry value.
fn parse_entry_field(id: &str) -> Option<(EntryField, usize)> {
    if let Some(rest) = id.strip_prefix(OtherEntryRow::CHECKBOX_ID_PREFIX) {
        return rest.parse().ok().map(|value| (EntryField::Checkbox, value));
    }
    if let Some(rest) = id.strip_prefix(OtherEntryRow::TEXT_ID_PREFIX) {
        return rest.parse().ok().map(|value| (EntryField::Text, value));
    }
    None
}

/// Where focus should land after the entry with `removed` is deleted and the
/// remainder renumbered: entries past it shift down one value, the removed
/// entry's own fields are gone, and anything else keeps its id.
fn refocus_after_removal(focused: Option<String>, removed: usize) -> Option<String> {
    let id = focused?;
    match parse_entry_field(&id) {
        Some((_, value)) if value == removed => None,
        Some((field, value)) if value > removed => Some(field.element_id(value - 1)),
        _ => Some(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_field() {
        assert_eq!(
            parse_entry_field("other-check-3"),
            Some((EntryField::Checkbox, 3))
        );
        assert_eq!(parse_entry_field("other-text-0"), Some((EntryField::Text, 0)));
        assert_eq!(parse_entry_field("feedback-subject"), None);
        assert_eq!(parse_entry_field("other-check-x"), None);
    }

    #[test]
    fn test_refocus_shifts_values_past_removed() {
        assert_eq!(
            refocus_after_removal(Some("other-text-2".to_string()), 1),
            Some("other-text-1".to_string())
        );
        assert_eq!(
            refocus_after_removal(Some("other-check-0".to_string()), 1),
            Some("other-check-0".to_string())
        );
        assert_eq!(refocus_after_removal(Some("other-text-1".to_string()), 1), None);
        assert_eq!(
            refocus_after_removal(Some("feedback-subject".to_string()), 1),
            Some("feedback-subject".to_string())
        );
        assert_eq!(refocus_after_removal(None, 0), None);
    }
}
