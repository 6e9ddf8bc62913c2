use chrono::NaiveDate;

use crate::error::Result;
use crate::format::long_date;
use crate::metadata::{SourceKind, SourceMetadata};
use crate::style::Style;

/// Render a non-statute record. Whether the journal-style or website-style
/// variant applies is decided by `SourceKind`, never re-derived from the
/// shape of the journal name.
pub(crate) fn format_generic(
    meta: &SourceMetadata,
    style: Style,
    today: NaiveDate,
) -> Result<String> {
    let year = meta.year()?;
    let journal_like = meta.kind == SourceKind::Academic;

    Ok(match style {
        Style::Apa => {
            if journal_like {
                format!(
                    "{}. ({}). {}. {}.",
                    meta.authors, year, meta.title, meta.journal
                )
            } else if let Some(date) = full_date(&meta.date) {
                format!(
                    "{}. ({}, {}). Retrieved from {}",
                    meta.title,
                    year,
                    date.format("%B %-d"),
                    meta.url
                )
            } else {
                format!("{}. ({}). Retrieved from {}", meta.title, year, meta.url)
            }
        }
        Style::Mla => {
            if journal_like {
                format!("\"{}.\" {}, {}.", meta.title, meta.journal, year)
            } else {
                format!(
                    "\"{}.\" {}, {}, {}.",
                    meta.title, meta.journal, year, meta.url
                )
            }
        }
        Style::Chicago => {
            if journal_like {
                format!(
                    "{}. \"{}.\" {} ({}).",
                    meta.authors, meta.title, meta.journal, year
                )
            } else {
                format!(
                    "{}. \"{}.\" {}. Last modified {}. Accessed {}. {}",
                    meta.authors,
                    meta.title,
                    meta.journal,
                    year,
                    long_date(today),
                    meta.url
                )
            }
        }
        Style::Ieee => {
            let mut out = format!(
                "[1] {}, \"{},\" {}, {}.",
                meta.authors, meta.title, meta.journal, year
            );
            if let Some(doi) = meta.doi.as_deref() {
                out.push_str(&format!(" doi: {doi}"));
            }
            out
        }
        Style::Plain => format!("\"{}.\" {}", meta.title, meta.url),
        // Legal styles on a non-statute record fall back to APA.
        Style::Bluebook | Style::BluebookUrl | Style::LegalShort => {
            return format_generic(meta, Style::Apa, today);
        }
    })
}

/// Full calendar date when `date` leads with an ISO `YYYY-MM-DD`.
fn full_date(date: &str) -> Option<NaiveDate> {
    let head = date.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
