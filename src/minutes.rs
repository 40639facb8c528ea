//! Minutes extraction.
//!
//! GitHub renders each meeting's README.md inside a single `<article>`
//! element. Extraction locates that container and serializes each of its
//! direct children into a numbered line of flattened visible text, so the
//! line number is stable across runs for the same page.

use crate::dom::{self, Document, Selection};
use crate::encoding;
use crate::error::{Error, Result};
use std::fmt::Write as _;

/// The element holding the rendered long-form content. By the source's
/// markup convention exactly one exists per page; if several appear, the
/// first in document order is authoritative.
pub const CONTENT_SELECTOR: &str = "article";

/// The minutes of one meeting: the flattened text of each direct child of
/// the content container, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinutesRecord {
    lines: Vec<String>,
}

impl MinutesRecord {
    /// The per-child text lines, 0-indexed by position in the container.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render as `"{index}. {text}\n"` per child, joined.
    ///
    /// Whitespace-only children keep their numbered line (positional
    /// stability is worth the visibly blank output), and no per-line
    /// trimming is applied; text fidelity wins over cosmetic cleanup.
    /// A container with zero children renders as the empty string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            let _ = writeln!(out, "{index}. {line}");
        }
        out
    }
}

/// Extract the minutes from a rendered README.md page.
///
/// Fails with [`Error::StructureNotFound`] when the page has no content
/// container at all.
pub fn extract_minutes(html: &[u8]) -> Result<MinutesRecord> {
    let html = encoding::transcode_to_utf8(html);
    let doc = Document::from(html.as_str());

    let containers = doc.select(CONTENT_SELECTOR);
    let nodes = containers.nodes();
    let Some(first) = nodes.first() else {
        return Err(Error::StructureNotFound(format!(
            "no <{CONTENT_SELECTOR}> content container in document"
        )));
    };
    let container = Selection::from(*first);

    let lines = dom::children(&container)
        .nodes()
        .iter()
        .map(|child| dom::text_content(&Selection::from(*child)).to_string())
        .collect();

    Ok(MinutesRecord { lines })
}
