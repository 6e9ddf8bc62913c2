//! Source classification and layered field extraction.
//!
//! Classification tiers run in priority order (statute, video, then the
//! generic academic/webpage path) and every field falls back through an
//! ordered rule chain, so extraction never fails: a miss anywhere degrades
//! to a documented default instead of an error.

pub mod fields;
pub mod statute;
pub mod video;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::document::PageSnapshot;
use crate::metadata::{SourceKind, SourceMetadata, UNKNOWN_AUTHOR, UNKNOWN_TITLE};

/// Extract a normalized metadata record from one page snapshot.
///
/// `today` is the capture date; it supplies the current-year default so the
/// pipeline stays deterministic under test. Repeated calls against an
/// unchanged snapshot return equal records.
pub fn extract(doc: &PageSnapshot, today: NaiveDate) -> SourceMetadata {
    let url = doc.url_str();

    if statute::is_statute_page(url, doc.title()) {
        match statute::statute_code(doc) {
            Some(code) => {
                debug!(code, "classified as statute");
                return statute_record(doc, code, today);
            }
            // Pattern match without a parsable code is not a statute;
            // fall through rather than emit a broken statute record.
            None => debug!("statute patterns matched but no cite= code, treating as webpage"),
        }
    }

    if let Some(record) = video::extract_video(doc, today) {
        return record;
    }

    webpage_record(doc, today)
}

fn statute_record(doc: &PageSnapshot, code: String, today: NaiveDate) -> SourceMetadata {
    let title = doc.title().trim();
    SourceMetadata {
        kind: SourceKind::Statute,
        title: if title.is_empty() {
            UNKNOWN_TITLE.to_string()
        } else {
            title.to_string()
        },
        authors: UNKNOWN_AUTHOR.to_string(),
        date: today.year().to_string(),
        journal: doc.host().to_string(),
        doi: None,
        domain: doc.host().to_string(),
        url: doc.url_str().to_string(),
        statute_code: Some(code),
        site: None,
    }
}

fn webpage_record(doc: &PageSnapshot, today: NaiveDate) -> SourceMetadata {
    let kind = if fields::has_citation_meta(doc) {
        SourceKind::Academic
    } else {
        SourceKind::Webpage
    };
    debug!(?kind, "classified via layered selector search");

    let title = fields::first_match(doc, fields::TITLE_RULES)
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
    let authors = fields::first_match(doc, fields::AUTHOR_RULES)
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
    let date = fields::first_match(doc, fields::DATE_RULES)
        .unwrap_or_else(|| today.year().to_string());
    let journal = fields::first_match(doc, fields::JOURNAL_RULES)
        .unwrap_or_else(|| doc.host().to_string());

    SourceMetadata {
        kind,
        title,
        authors,
        date,
        journal,
        doi: fields::find_doi(doc).map(|d| d.normalized),
        domain: doc.host().to_string(),
        url: doc.url_str().to_string(),
        statute_code: None,
        site: None,
    }
}
