//! The meeting dataset.
//!
//! One ordered sequence of paired records: a meeting date and, when the
//! meeting was announced on meetup.com, its event id. Keeping the pair in a
//! single record means the dates and ids can never drift out of alignment.
//!
//! The data lives in `data/meetings.toml`, embedded at compile time, so
//! adding a meeting is an append to a versioned file rather than a code
//! change. Report order is dataset order, never re-sorted.

use crate::error::Result;
use serde::de::Error as _;
use serde::Deserialize;

/// Built-in dataset, maintained alongside the source.
const BUILTIN_DATA: &str = include_str!("../data/meetings.toml");

/// One meeting: its date and, if any, the meetup.com event announcing it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Meeting {
    /// Calendar date, `YYYY-MM-DD`. The year prefix becomes a path segment
    /// in the minutes URL.
    pub date: String,

    /// Opaque numeric-string meetup.com event id. `None` for the early
    /// meetings that predate the meetup.com group; absent means skip, no
    /// event page is ever fetched for these.
    #[serde(default)]
    pub meetup_id: Option<String>,
}

/// The ordered meeting dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub meetings: Vec<Meeting>,
}

impl Dataset {
    /// Load the built-in dataset embedded from `data/meetings.toml`.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_DATA)
    }

    /// Decode a dataset from TOML, validating each date as `YYYY-MM-DD`.
    pub fn from_toml(data: &str) -> Result<Self> {
        let dataset: Dataset = toml::from_str(data)?;
        for meeting in &dataset.meetings {
            if chrono::NaiveDate::parse_from_str(&meeting.date, "%Y-%m-%d").is_err() {
                return Err(toml::de::Error::custom(format!(
                    "meeting date `{}` is not YYYY-MM-DD",
                    meeting.date
                ))
                .into());
            }
        }
        Ok(dataset)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    /// Date of the earliest meeting in dataset order, for the banner line.
    #[must_use]
    pub fn first_date(&self) -> Option<&str> {
        self.meetings.first().map(|m| m.date.as_str())
    }

    /// Date of the latest meeting in dataset order, for the banner line.
    #[must_use]
    pub fn last_date(&self) -> Option<&str> {
        self.meetings.last().map(|m| m.date.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_loads() {
        let dataset = match Dataset::builtin() {
            Ok(d) => d,
            Err(err) => panic!("builtin dataset must decode, got {err}"),
        };
        assert_eq!(dataset.len(), 62);
        assert_eq!(dataset.first_date(), Some("2014-02-24"));
        assert_eq!(dataset.last_date(), Some("2019-08-12"));
    }

    #[test]
    fn early_meetings_have_no_meetup_id() {
        let dataset = match Dataset::builtin() {
            Ok(d) => d,
            Err(err) => panic!("builtin dataset must decode, got {err}"),
        };
        assert!(dataset.meetings[0].meetup_id.is_none());
        assert!(dataset.meetings[3].meetup_id.is_none());
        assert_eq!(dataset.meetings[4].meetup_id.as_deref(), Some("184039822"));
    }

    #[test]
    fn from_toml_preserves_input_order() {
        // Deliberately unsorted; report order is input order.
        let data = r#"
            [[meetings]]
            date = "2019-07-08"
            meetup_id = "257167804"

            [[meetings]]
            date = "2014-02-24"
        "#;
        let dataset = match Dataset::from_toml(data) {
            Ok(d) => d,
            Err(err) => panic!("expected Ok(_), got Err({err})"),
        };
        assert_eq!(dataset.meetings[0].date, "2019-07-08");
        assert_eq!(dataset.meetings[1].date, "2014-02-24");
    }

    #[test]
    fn malformed_date_rejected() {
        let data = r#"
            [[meetings]]
            date = "24-02-2014"
        "#;
        assert!(Dataset::from_toml(data).is_err());
    }
}
