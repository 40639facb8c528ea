//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate so the extractors read in terms
//! of the operations they actually perform: select, enumerate children, and
//! flatten text.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Get all text content of a node and its descendants.
///
/// Markup collapses to plain text: bold/italic/link styling disappears and
/// only the concatenated text nodes remain. Returns `StrTendril` for
/// zero-copy passing; use `.to_string()` only when owned storage is needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get the direct element children of a selection, in document order.
///
/// Text nodes between elements are not included; they only contribute to
/// their parent's flattened text.
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}
