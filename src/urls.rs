//! URL derivation for the two document sources.
//!
//! Pure, deterministic address computation; no I/O. The base addresses are
//! single-point-of-change constants since both source layouts are
//! third-party-controlled.

use crate::dataset::Dataset;
use crate::error::Result;
use url::Url;

/// Base of the rendered minutes pages; the full address is
/// `{base}/{year}/{date}/README.md`.
pub const MINUTES_BASE: &str = "https://github.com/HamPUG/meetings/blob/master";

/// Base of the meetup.com event pages; the full address is `{base}/{id}/`.
pub const EVENTS_BASE: &str = "https://www.meetup.com/NZPUG-Hamilton/events";

/// Derived addresses, index-aligned with the dataset.
///
/// `events[i]` is `None` when meeting `i` has no meetup id; no address is
/// synthesized for an absent id and nothing is ever fetched for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSet {
    pub minutes: Vec<Url>,
    pub events: Vec<Option<Url>>,
}

/// Address of one meeting's rendered README.md.
///
/// The year path segment is the date's prefix before the first `-`.
pub fn minutes_url(date: &str) -> Result<Url> {
    let year = date.split('-').next().unwrap_or(date);
    Ok(Url::parse(&format!("{MINUTES_BASE}/{year}/{date}/README.md"))?)
}

/// Address of one meetup.com event page.
pub fn event_url(id: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{EVENTS_BASE}/{id}/"))?)
}

/// Derive both address lists for the whole dataset.
pub fn derive_urls(dataset: &Dataset) -> Result<UrlSet> {
    let mut minutes = Vec::with_capacity(dataset.len());
    let mut events = Vec::with_capacity(dataset.len());

    for meeting in &dataset.meetings {
        minutes.push(minutes_url(&meeting.date)?);
        events.push(match meeting.meetup_id.as_deref() {
            Some(id) => Some(event_url(id)?),
            None => None,
        });
    }

    Ok(UrlSet { minutes, events })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_url_uses_year_segment() {
        let url = match minutes_url("2019-07-08") {
            Ok(u) => u,
            Err(err) => panic!("expected Ok(_), got Err({err})"),
        };
        assert_eq!(
            url.as_str(),
            "https://github.com/HamPUG/meetings/blob/master/2019/2019-07-08/README.md"
        );
    }

    #[test]
    fn event_url_has_trailing_slash() {
        let url = match event_url("257167804") {
            Ok(u) => u,
            Err(err) => panic!("expected Ok(_), got Err({err})"),
        };
        assert_eq!(
            url.as_str(),
            "https://www.meetup.com/NZPUG-Hamilton/events/257167804/"
        );
    }
}
