//! Wire models for the search endpoint.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Position in the server-paginated result set.
///
/// The server echoes the requested page number back, or the sentinel `-1`
/// once the result set is exhausted. A controller on a route without search
/// starts out exhausted so every fetch trigger is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Last page loaded; the next request asks for the following one.
    Page(u32),
    /// No more results, or search is disabled on this route.
    Exhausted,
}

impl Cursor {
    /// Page number the next fetch should request, if any.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        match self {
            Self::Page(page) => Some(page.saturating_add(1)),
            Self::Exhausted => None,
        }
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

impl From<i64> for Cursor {
    fn from(raw: i64) -> Self {
        u32::try_from(raw).map_or(Self::Exhausted, Self::Page)
    }
}

impl<'de> Deserialize<'de> for Cursor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self::from)
    }
}

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Cursor after this page, or the exhaustion sentinel.
    pub page: Cursor,
    /// Result records; may be empty or absent entirely.
    #[serde(default)]
    pub papers: Vec<TrialRecord>,
    /// Server-rendered summary line for the stats panel.
    #[serde(default)]
    pub stats: Option<String>,
}

/// A single trial record as served by the search endpoint.
///
/// Every field is optional on the wire; rendering substitutes a placeholder
/// for whatever is missing or empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrialRecord {
    pub title: Option<String>,
    pub url: Option<String>,
    pub timestamp: Option<Timestamp>,
    pub recruiting_status: Option<String>,
    pub sex: Option<String>,
    pub target_disease: Option<String>,
    pub intervention: Option<String>,
    pub sponsor: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub institution: Option<String>,
    pub contact: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub sample_size: Option<String>,
    pub abandoned: Option<bool>,
    pub abandoned_reason: Option<String>,
}

/// Registration timestamp in MongoDB extended-JSON form.
///
/// Arrives as `{"$date": <epoch millis>}` from document dumps, or with an
/// ISO-8601 string payload from other export paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Long-form date line used in the rendered result block.
    #[must_use]
    pub fn long_date(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(rename = "$date")]
            date: RawDate,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawDate {
            Millis(i64),
            Text(String),
        }

        let wrapper = Wrapper::deserialize(deserializer)?;
        let parsed = match wrapper.date {
            RawDate::Millis(millis) => Utc
                .timestamp_millis_opt(millis)
                .single()
                .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {millis}")))?,
            RawDate::Text(text) => DateTime::parse_from_rfc3339(&text)
                .map_err(serde::de::Error::custom)?
                .with_timezone(&Utc),
        };
        Ok(Self(parsed))
    }
}

/// Accept a JSON string or number, normalizing to a display string.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Int(number) => number.to_string(),
        Raw::Float(number) => number.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_sentinel() {
        assert_eq!(Cursor::from(-1), Cursor::Exhausted);
        assert_eq!(Cursor::from(3), Cursor::Page(3));
        assert!(Cursor::Exhausted.next_page().is_none());
        assert_eq!(Cursor::Page(0).next_page(), Some(1));
    }

    #[test]
    fn test_response_defaults() {
        let response: SearchResponse = serde_json::from_str(r#"{"page": -1}"#).unwrap();
        assert!(response.page.is_exhausted());
        assert!(response.papers.is_empty());
        assert!(response.stats.is_none());
    }

    #[test]
    fn test_timestamp_from_millis() {
        let record: TrialRecord =
            serde_json::from_str(r#"{"timestamp": {"$date": 1583366400000}}"#).unwrap();
        let timestamp = record.timestamp.unwrap();
        assert_eq!(timestamp.long_date(), "March 5, 2020");
    }

    #[test]
    fn test_timestamp_from_iso_string() {
        let record: TrialRecord =
            serde_json::from_str(r#"{"timestamp": {"$date": "2020-03-05T00:00:00Z"}}"#).unwrap();
        assert_eq!(record.timestamp.unwrap().long_date(), "March 5, 2020");
    }

    #[test]
    fn test_sample_size_accepts_string_and_number() {
        let record: TrialRecord = serde_json::from_str(r#"{"sample_size": 120}"#).unwrap();
        assert_eq!(record.sample_size.as_deref(), Some("120"));

        let record: TrialRecord = serde_json::from_str(r#"{"sample_size": "about 50"}"#).unwrap();
        assert_eq!(record.sample_size.as_deref(), Some("about 50"));
    }

    #[test]
    fn test_full_record() {
        let record: TrialRecord = serde_json::from_str(
            r#"{
                "title": "Trial of Drug A",
                "url": "https://trials.example.com/1",
                "timestamp": {"$date": 1583366400000},
                "recruiting_status": "Recruiting",
                "sex": "All",
                "target_disease": "Influenza",
                "intervention": "Drug A",
                "sponsor": "Example Hospital",
                "summary": "A trial.",
                "location": "Berlin",
                "institution": "Example Hospital",
                "contact": "trials@example.com",
                "sample_size": "120",
                "abandoned": false,
                "abandoned_reason": ""
            }"#,
        )
        .unwrap();
        assert_eq!(record.title.as_deref(), Some("Trial of Drug A"));
        assert_eq!(record.abandoned, Some(false));
    }
}
