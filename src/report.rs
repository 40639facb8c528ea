//! Report assembly.
//!
//! Drives the two extractors over the dataset and concatenates the results
//! into one ordered text report. Order is a correctness property: sections
//! appear in dataset order, which is not necessarily sorted date order.
//!
//! Failure policy is fail-the-whole-batch: the first fetch or extraction
//! error aborts assembly with no per-item recovery. Output is streamed
//! append-as-you-go, so a failed run may leave a truncated file behind, but
//! the error always surfaces.

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::event;
use crate::fetch::Fetch;
use crate::minutes;
use crate::urls::{self, UrlSet};
use std::io::Write;
use tracing::info;

/// Width of the rule line separating meetings in the full report.
pub const RULE_WIDTH: usize = 80;

/// Rendered in place of event details for meetings with no meetup id.
pub const NO_MEETUP_SENTINEL: &str = "No meetup data for this meeting";

/// Assembles the report from a dataset over a fetch seam.
pub struct ReportBuilder<'a> {
    fetcher: &'a dyn Fetch,
    dataset: &'a Dataset,
    urls: UrlSet,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(fetcher: &'a dyn Fetch, dataset: &'a Dataset) -> Result<Self> {
        let urls = urls::derive_urls(dataset)?;
        Ok(Self {
            fetcher,
            dataset,
            urls,
        })
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        self.dataset
    }

    /// Render the section for one meeting by dataset index: a "Meeting"
    /// block with the numbered minutes, then a "Meetup" block with either
    /// the event details or the no-data sentinel. For an absent meetup id
    /// nothing is fetched and nothing is fabricated.
    pub fn section(&self, index: usize) -> Result<String> {
        let (Some(meeting), Some(minutes_url), Some(event_url)) = (
            self.dataset.meetings.get(index),
            self.urls.minutes.get(index),
            self.urls.events.get(index),
        ) else {
            return Err(Error::InvalidSelection {
                input: (index + 1).to_string(),
                max: self.dataset.len(),
            });
        };
        let ordinal = index + 1;

        let minutes_html = self.fetcher.fetch(minutes_url)?;
        let minutes_text = minutes::extract_minutes(&minutes_html)?.render();

        let mut section = format!("\n***** Meeting: {ordinal} *****\n\n{minutes_text}");

        match (&meeting.meetup_id, event_url) {
            (Some(id), Some(url)) => {
                let event_html = self.fetcher.fetch(url)?;
                let event_text = event::extract_event(&event_html)?.render();
                section.push_str(&format!(
                    "\n***** Meetup: {ordinal} *****\n\nurl ID: {id}\n{event_text}"
                ));
            }
            _ => {
                section.push_str(&format!(
                    "\n***** Meetup: {ordinal} *****\n\n{NO_MEETUP_SENTINEL}\n"
                ));
            }
        }

        Ok(section)
    }

    /// Stream the full report, in dataset order, to a sink.
    ///
    /// Each meeting's section is followed by a fixed-width rule line and
    /// written as soon as it is assembled. The first error aborts the run.
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<()> {
        let total = self.dataset.len();
        for index in 0..total {
            let section = self.section(index)?;
            out.write_all(section.as_bytes())?;
            writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
            info!(progress = index + 1, total, "meeting assembled");
        }
        out.flush()?;
        Ok(())
    }
}
