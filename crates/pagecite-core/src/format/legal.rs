use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::format::long_date;
use crate::metadata::SourceMetadata;
use crate::style::Style;

/// Reporter labels used by the statute templates.
///
/// The default targets the Revised Code of Washington; other jurisdictions
/// can be configured without touching the templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Jurisdiction {
    /// Full reporter name as it appears in a Bluebook citation.
    pub reporter: String,
    /// Short prefix for in-document references.
    pub short_prefix: String,
}

impl Default for Jurisdiction {
    fn default() -> Self {
        Self {
            reporter: "WASH. REV. CODE".to_string(),
            short_prefix: "RCW".to_string(),
        }
    }
}

/// Render a statute record. Callers normalize non-legal styles to Bluebook
/// before dispatching here; the catch-all arm keeps the match total anyway.
pub(crate) fn format_statute(
    meta: &SourceMetadata,
    code: &str,
    style: Style,
    today: NaiveDate,
    jurisdiction: &Jurisdiction,
) -> String {
    match style {
        Style::BluebookUrl => format!(
            "{} § {} ({}), {} (last visited {}).",
            jurisdiction.reporter,
            code,
            today.year(),
            meta.url,
            long_date(today),
        ),
        Style::LegalShort => format!("{} {}", jurisdiction.short_prefix, code),
        _ => format!("{} § {} ({}).", jurisdiction.reporter, code, today.year()),
    }
}
