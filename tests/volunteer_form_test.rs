//! Integration tests for the volunteer form controller.

use trial_search_pages::constants;
use trial_search_pages::dom::{Dom, MemoryDom};
use trial_search_pages::pages::{EntryState, VolunteerForm};

fn rendered_rows(form: &VolunteerForm<MemoryDom>) -> String {
    form.dom().html_of(constants::OTHER_ENTRIES_CONTAINER)
}

fn row_count(form: &VolunteerForm<MemoryDom>) -> usize {
    rendered_rows(form).matches("class=\"check other\"").count()
}

#[test]
fn test_starts_with_single_scratch_entry() {
    let form = VolunteerForm::new(MemoryDom::new());

    let entries = form.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].value, 0);
    assert!(!entries[0].checked);
    assert_eq!(entries[0].state, EntryState::ScratchPending);
    assert_eq!(row_count(&form), 1);
}

#[test]
fn test_typing_appends_scratch_exactly_once() {
    let mut form = VolunteerForm::new(MemoryDom::new());

    form.on_text_keyup(0, "a");
    assert_eq!(form.entries().len(), 2);
    assert!(form.entries()[0].checked);
    assert_eq!(form.entries()[0].state, EntryState::ScratchCommitted);
    assert_eq!(form.entries()[1].value, 1);
    assert!(!form.entries()[1].checked);
    assert_eq!(form.entries()[1].state, EntryState::ScratchPending);

    // Further keystrokes update the text but never append another entry.
    form.on_text_keyup(0, "ac");
    form.on_text_keyup(0, "ach");
    assert_eq!(form.entries().len(), 2);
    assert_eq!(form.entries()[0].text, "ach");
    assert_eq!(row_count(&form), 2);
}

#[test]
fn test_clearing_second_to_last_removes_scratch_and_resets() {
    let mut form = VolunteerForm::new(MemoryDom::new());
    form.on_text_keyup(0, "aches");
    assert_eq!(form.entries().len(), 2);

    form.on_text_keyup(0, "");
    let entries = form.entries();
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].checked);
    assert_eq!(entries[0].state, EntryState::ScratchPending);
    assert_eq!(row_count(&form), 1);

    // The reset state allows a new scratch entry to be appended again.
    form.on_text_keyup(0, "chills");
    assert_eq!(form.entries().len(), 2);
}

#[test]
fn test_typing_into_scratch_spawns_next() {
    let mut form = VolunteerForm::new(MemoryDom::new());
    form.on_text_keyup(0, "aches");
    form.on_text_keyup(1, "chills");

    let entries = form.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries.iter().map(|entry| entry.value).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert!(entries[1].checked);
    assert_eq!(entries[1].state, EntryState::ScratchCommitted);
    assert_eq!(entries[2].state, EntryState::ScratchPending);
}

#[test]
fn test_unchecking_renumbers_and_restores_focus() {
    let mut form = VolunteerForm::new(MemoryDom::new());
    form.on_text_keyup(0, "aches");
    form.on_text_keyup(1, "chills");
    form.dom().focus("other-text-2");

    form.on_checkbox_change(1, false);

    let entries = form.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries.iter().map(|entry| entry.value).collect::<Vec<_>>(),
        vec![0, 1]
    );
    // Order preserved: the first entry keeps its text, the scratch follows.
    assert_eq!(entries[0].text, "aches");
    assert_eq!(entries[0].state, EntryState::ScratchCommitted);
    assert_eq!(entries[1].text, "");

    // The focused field kept its place in the list under its new value.
    assert_eq!(form.dom().focused().as_deref(), Some("other-text-1"));

    let html = rendered_rows(&form);
    assert!(html.contains("other-check-1"));
    assert!(!html.contains("other-check-2"));
}

#[test]
fn test_focus_before_removed_entry_is_untouched() {
    let mut form = VolunteerForm::new(MemoryDom::new());
    form.on_text_keyup(0, "aches");
    form.on_text_keyup(1, "chills");
    form.dom().focus("other-text-0");

    form.on_checkbox_change(1, false);

    assert_eq!(form.dom().focused().as_deref(), Some("other-text-0"));
}

#[test]
fn test_deleting_only_entry_is_a_noop() {
    let mut form = VolunteerForm::new(MemoryDom::new());

    form.on_checkbox_change(0, false);

    assert_eq!(form.entries().len(), 1);
    assert_eq!(row_count(&form), 1);
}

#[test]
fn test_unchecking_last_entry_keeps_it() {
    let mut form = VolunteerForm::new(MemoryDom::new());
    form.on_text_keyup(0, "aches");

    form.on_checkbox_change(1, false);

    assert_eq!(form.entries().len(), 2);
}

#[test]
fn test_checkbox_mousedown_is_suppressed() {
    let form = VolunteerForm::new(MemoryDom::new());
    assert!(form.on_checkbox_mousedown());
}

#[test]
fn test_clearing_non_second_to_last_only_unchecks() {
    let mut form = VolunteerForm::new(MemoryDom::new());
    form.on_text_keyup(0, "aches");
    form.on_text_keyup(1, "chills");
    assert_eq!(form.entries().len(), 3);

    form.on_text_keyup(0, "");

    let entries = form.entries();
    assert_eq!(entries.len(), 3);
    assert!(!entries[0].checked);
    assert_eq!(entries[0].text, "");
    // The spawn state is not reset on this path.
    assert_eq!(entries[0].state, EntryState::ScratchCommitted);
    assert!(!form.dom().is_checked("other-check-0"));

    // Typing again re-checks without appending (the entry is not last).
    form.on_text_keyup(0, "sore throat");
    assert!(form.entries()[0].checked);
    assert_eq!(form.entries().len(), 3);
}

#[test]
fn test_with_existing_restores_fixed_entries() {
    let form = VolunteerForm::with_existing(MemoryDom::new(), &["fatigue", "cough"]);

    let entries = form.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].text, "fatigue");
    assert!(entries[0].checked);
    assert_eq!(entries[0].state, EntryState::Fixed);
    assert_eq!(entries[1].value, 1);
    assert_eq!(entries[2].state, EntryState::ScratchPending);

    let html = rendered_rows(&form);
    assert!(html.contains("value=\"fatigue\""));
    assert!(html.contains("value=\"cough\""));
    assert!(html.contains("other-check-2"));
    assert_eq!(row_count(&form), 3);
}

#[test]
fn test_deleting_fixed_entry_renumbers_rest() {
    let mut form = VolunteerForm::with_existing(MemoryDom::new(), &["fatigue", "cough"]);

    form.on_checkbox_change(0, false);

    let entries = form.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "cough");
    assert_eq!(entries[0].value, 0);
    assert_eq!(entries[1].state, EntryState::ScratchPending);
    assert_eq!(entries[1].value, 1);
}
