//! Meetup event extraction.
//!
//! Each event page embeds a schema.org Event payload as JSON inside one of
//! its `<script>` blocks. The block is found by fixed document-order
//! position, not by content inspection; the position is a brittle coupling
//! to the third-party markup, so it lives in one named constant with an
//! explicit bounds check.

use crate::dom::{self, Document, Selection};
use crate::encoding;
use crate::error::{Error, Result};
use chrono::{NaiveDateTime, Timelike};
use serde_json::Value;

/// Document-order index (0-based) of the `<script>` element carrying the
/// event payload.
pub const EVENT_SCRIPT_INDEX: usize = 2;

/// Timestamp pattern of the payload's `startDate`, after the UTC-offset
/// suffix is discarded.
const START_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// The fixed 4-field projection of one event payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Payload `name`.
    pub title: String,
    /// Payload `location.name`.
    pub venue: String,
    /// Payload `startDate`, reformatted for display.
    pub start_display: String,
    /// Payload `description`; may contain embedded newlines, preserved
    /// verbatim.
    pub description: String,
}

impl EventRecord {
    /// Render the 4-line block: title, venue, start, description.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n",
            self.title, self.venue, self.start_display, self.description
        )
    }
}

/// Extract the event details from a meetup.com event page.
pub fn extract_event(html: &[u8]) -> Result<EventRecord> {
    let html = encoding::transcode_to_utf8(html);
    let doc = Document::from(html.as_str());

    let scripts = doc.select("script");
    let nodes = scripts.nodes();
    let Some(script) = nodes.get(EVENT_SCRIPT_INDEX) else {
        return Err(Error::StructureNotFound(format!(
            "expected at least {} <script> elements, found {}",
            EVENT_SCRIPT_INDEX + 1,
            nodes.len()
        )));
    };

    let payload_text = dom::text_content(&Selection::from(*script));
    let payload: Value = serde_json::from_str(payload_text.trim())?;

    let title = string_field(&payload, &["name"], "name")?;
    let venue = string_field(&payload, &["location", "name"], "location.name")?;
    let raw_start = string_field(&payload, &["startDate"], "startDate")?;
    let description = string_field(&payload, &["description"], "description")?;

    Ok(EventRecord {
        title,
        venue,
        start_display: format_start_date(&raw_start)?,
        description,
    })
}

/// Look up a string by key path; absence of any step is a missing field.
fn string_field(payload: &Value, path: &[&str], name: &'static str) -> Result<String> {
    path.iter()
        .try_fold(payload, |value, key| value.get(key))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(Error::MissingField(name))
}

/// Reformat a payload timestamp for display: `2019-07-08T19:00+12:00`
/// becomes `2019-07-08 7PM`.
///
/// The offset suffix after the first `+` is discarded, and the hour is
/// rendered with an explicit 12-hour formatter; strftime's no-leading-zero
/// hour directive is not portable.
fn format_start_date(raw: &str) -> Result<String> {
    let local = raw.split('+').next().unwrap_or(raw);
    let dt = NaiveDateTime::parse_from_str(local, START_DATE_FORMAT)
        .map_err(|_| Error::TimestampParse(raw.to_string()))?;

    Ok(format!(
        "{} {}",
        dt.format("%Y-%m-%d"),
        hour_12_display(dt.hour())
    ))
}

/// 12-hour clock label for a 24-hour value: 0 -> 12AM, 12 -> 12PM, 13 -> 1PM.
fn hour_12_display(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display}{suffix}")
}
