use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::document::PageSnapshot;
use crate::error::Result;
use crate::extract::extract;
use crate::format::{format, format_with};
use crate::metadata::SourceMetadata;
use crate::style::Style;

/// What a citation request returns: the rendered string plus the record it
/// was rendered from, so callers can display or re-edit the fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    pub citation: String,
    pub metadata: SourceMetadata,
}

/// One full request: extract from the snapshot, then render.
///
/// `today` is both the capture date (current-year defaults) and the
/// rendering instant ("accessed"/"last visited" dates). Each call is
/// independent; nothing is retained between requests.
pub fn cite(doc: &PageSnapshot, style: Style, today: NaiveDate) -> Result<Citation> {
    let metadata = extract(doc, today);
    let citation = format(&metadata, style, today)?;
    Ok(Citation { citation, metadata })
}

/// As [`cite`], applying the configured default style when the request names
/// none and the configured statute jurisdiction labels.
pub fn cite_with_config(
    doc: &PageSnapshot,
    style: Option<Style>,
    config: &AppConfig,
    today: NaiveDate,
) -> Result<Citation> {
    let style = style.unwrap_or_else(|| Style::parse(&config.general.default_style));
    let metadata = extract(doc, today);
    let citation = format_with(&metadata, style, today, &config.statute)?;
    Ok(Citation { citation, metadata })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn returns_both_citation_and_record() {
        let doc = PageSnapshot::new(
            "https://example.com/",
            "<html><head><title>Example Domain</title></head></html>",
        )
        .unwrap();
        let result = cite(&doc, Style::Mla, day()).unwrap();
        assert!(result.citation.contains("Example Domain"));
        assert_eq!(result.metadata.title, "Example Domain");
    }

    #[test]
    fn config_default_style_applies_when_none_given() {
        let doc = PageSnapshot::new(
            "https://example.com/",
            "<html><head><title>Example Domain</title></head></html>",
        )
        .unwrap();
        let mut config = AppConfig::default();
        config.general.default_style = "ieee".to_string();

        let result = cite_with_config(&doc, None, &config, day()).unwrap();
        assert!(result.citation.starts_with("[1] "));

        let result = cite_with_config(&doc, Some(Style::Plain), &config, day()).unwrap();
        assert_eq!(result.citation, "\"Example Domain.\" https://example.com/");
    }

    #[test]
    fn repeated_requests_are_idempotent() {
        let doc = PageSnapshot::new(
            "https://example.com/",
            "<html><head><title>Example Domain</title></head><body>From 2019.</body></html>",
        )
        .unwrap();
        let first = cite(&doc, Style::Apa, day()).unwrap();
        let second = cite(&doc, Style::Apa, day()).unwrap();
        assert_eq!(first.citation, second.citation);
    }
}
