//! Result block for one clinical trial.
//!
//! Mirrors the markup the site's templates use for a result entry: a
//! `div.apaper` wrapper holding the date/sponsor line, the title link, and a
//! blockquote of key trial facts, followed by a trailing separator.

use maud::{html, Markup, Render};

use crate::api::TrialRecord;
use crate::constants::UNSPECIFIED;

/// One rendered search result.
#[derive(Debug, Clone, Copy)]
pub struct TrialCard<'a> {
    record: &'a TrialRecord,
}

impl<'a> TrialCard<'a> {
    #[must_use]
    pub const fn new(record: &'a TrialRecord) -> Self {
        Self { record }
    }

    /// Field text with the placeholder substituted for missing/empty values.
    fn field(value: Option<&'a str>) -> &'a str {
        match value {
            Some(text) if !text.is_empty() => text,
            _ => UNSPECIFIED,
        }
    }
}

impl Render for TrialCard<'_> {
    fn render(&self) -> Markup {
        let record = self.record;
        let sponsor = Self::field(record.sponsor.as_deref());

        html! {
            div class="apaper" {
                div class="paperdesc" {
                    @if let Some(timestamp) = &record.timestamp {
                        div class="ds" { (timestamp.long_date()) " \u{b7} " (sponsor) }
                    } @else {
                        div class="ds" { (sponsor) }
                    }

                    div class="ts" {
                        a href=(Self::field(record.url.as_deref())) target="_blank" {
                            (Self::field(record.title.as_deref()))
                        }
                    }

                    blockquote class="as" {
                        b { "Condition" } ": " (Self::field(record.target_disease.as_deref())) br;
                        b { "Intervention" } ": " (Self::field(record.intervention.as_deref())) br;
                        b { "Sample Size" } ": " (Self::field(record.sample_size.as_deref())) br;
                        b { "Location" } ": " (Self::field(record.location.as_deref())) br;
                        b { "Status" } ": " (Self::field(record.recruiting_status.as_deref()))
                    }

                    br;
                }
            }
        }
    }
}
