//! Form components for the volunteer page.

use maud::{html, Markup, Render};

/// One "other symptom" row: a checkbox and its free-text field wrapped in a
/// `label.check.other`, matching the fixed symptom rows rendered by the page
/// template.
#[derive(Debug, Clone, Copy)]
pub struct OtherEntryRow<'a> {
    pub value: usize,
    pub text: &'a str,
    pub checked: bool,
}

impl<'a> OtherEntryRow<'a> {
    /// Id prefix of the row's checkbox element.
    pub const CHECKBOX_ID_PREFIX: &'static str = "other-check-";
    /// Id prefix of the row's text field element.
    pub const TEXT_ID_PREFIX: &'static str = "other-text-";

    #[must_use]
    pub const fn new(value: usize, text: &'a str, checked: bool) -> Self {
        Self {
            value,
            text,
            checked,
        }
    }

    /// Element id of the checkbox for the given entry value.
    #[must_use]
    pub fn checkbox_id(value: usize) -> String {
        format!("{}{value}", Self::CHECKBOX_ID_PREFIX)
    }

    /// Element id of the text field for the given entry value.
    #[must_use]
    pub fn text_id(value: usize) -> String {
        format!("{}{value}", Self::TEXT_ID_PREFIX)
    }
}

impl Render for OtherEntryRow<'_> {
    fn render(&self) -> Markup {
        html! {
            label class="check other" {
                input
                    type="checkbox"
                    id=(Self::checkbox_id(self.value))
                    name="other"
                    value=(self.value)
                    checked[self.checked];
                input
                    type="text"
                    id=(Self::text_id(self.value))
                    name=(format!("other-{}", self.value))
                    value=(self.text);
            }
        }
    }
}
