//! # hampug-meetings
//!
//! Retrieves and flattens two classes of web documents — the HamPUG
//! meeting-minutes pages rendered on GitHub and the group's meetup.com event
//! pages — into a uniform plain-text report.
//!
//! Both pipelines share one shape: fetch, parse the structured document,
//! locate the anchor substructure, project the fields, and format a text
//! record. Everything is sequential and single-threaded; the first failure
//! aborts the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hampug_meetings::{Dataset, HttpFetcher, ReportBuilder};
//!
//! let dataset = Dataset::builtin()?;
//! let fetcher = HttpFetcher::new()?;
//! let report = ReportBuilder::new(&fetcher, &dataset)?;
//! report.write_report(&mut std::io::stdout().lock())?;
//! # Ok::<(), hampug_meetings::Error>(())
//! ```

mod error;

/// The versioned meeting dataset: paired date / meetup-id records.
pub mod dataset;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Meetup event extraction (embedded JSON payload projection).
pub mod event;

/// Blocking document retrieval.
pub mod fetch;

/// Interactive single-meeting selection.
pub mod menu;

/// Minutes extraction (content container flattening).
pub mod minutes;

/// Report assembly over the full dataset.
pub mod report;

/// URL derivation for the two document sources.
pub mod urls;

// Public API - re-exports
pub use dataset::{Dataset, Meeting};
pub use error::{Error, Result};
pub use event::{extract_event, EventRecord};
pub use fetch::{Fetch, HttpFetcher};
pub use minutes::{extract_minutes, MinutesRecord};
pub use report::{ReportBuilder, NO_MEETUP_SENTINEL, RULE_WIDTH};
pub use urls::{derive_urls, UrlSet};
