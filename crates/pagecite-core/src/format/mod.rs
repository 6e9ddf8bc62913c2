//! Style dispatch over a normalized metadata record.
//!
//! Pure functions of (record, style, rendering instant): no clock reads, no
//! I/O. Statute records only ever render through the legal templates, and
//! legal styles requested against ordinary records fall back to APA.

pub mod generic;
pub mod legal;

pub use legal::Jurisdiction;

use chrono::NaiveDate;

use crate::error::{CiteError, Result};
use crate::metadata::{SourceKind, SourceMetadata};
use crate::style::Style;

/// Render `meta` in `style` at the rendering instant `today`, with the
/// default statute jurisdiction labels.
pub fn format(meta: &SourceMetadata, style: Style, today: NaiveDate) -> Result<String> {
    format_with(meta, style, today, &Jurisdiction::default())
}

/// Render with explicit jurisdiction labels (the configured ones).
pub fn format_with(
    meta: &SourceMetadata,
    style: Style,
    today: NaiveDate,
    jurisdiction: &Jurisdiction,
) -> Result<String> {
    meta.validate()?;

    if meta.kind == SourceKind::Statute {
        let code = meta
            .statute_code
            .as_deref()
            .ok_or_else(|| CiteError::InvalidStatuteCode(String::new()))?;
        // Non-legal styles against a statute record keep the citation legally
        // correct: they render as Bluebook instead of the requested template.
        let style = if style.is_legal() { style } else { Style::Bluebook };
        return Ok(legal::format_statute(meta, code, style, today, jurisdiction));
    }

    generic::format_generic(meta, style, today)
}

/// Long-form calendar date: "June 1, 2025".
pub(crate) fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
