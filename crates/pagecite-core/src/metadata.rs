use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CiteError, Result};
use crate::extract::statute;

/// Placeholder title when no extraction rule matched.
pub const UNKNOWN_TITLE: &str = "Unknown Title";
/// Placeholder author when no extraction rule matched.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// What kind of page a record was extracted from. Drives which citation
/// templates apply and which field defaults were used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Statute,
    Video,
    Academic,
    Webpage,
}

/// Normalized bibliographic record for one page snapshot.
///
/// Constructed fresh for every citation request and never mutated after
/// construction. Every field a formatter reads is non-empty: extraction
/// substitutes a defined default whenever a rule chain comes up dry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    pub kind: SourceKind,
    pub title: String,
    pub authors: String,

    /// At minimum a 4-digit year; longer ISO-like strings are accepted and
    /// truncated to the year by consumers.
    pub date: String,

    /// Containing publication or site; the page's domain for plain webpages.
    pub journal: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    pub domain: String,
    pub url: String,

    /// Dotted section code, set exactly when `kind == Statute`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statute_code: Option<String>,

    /// Platform label for video records ("YouTube", "Vimeo").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

impl SourceMetadata {
    /// Leading 4 characters of `date`. Truncation is idempotent: a 4-char
    /// date passes through unchanged.
    pub fn year(&self) -> Result<&str> {
        if self.date.len() < 4 || !self.date.is_char_boundary(4) {
            return Err(CiteError::DateTooShort(self.date.clone()));
        }
        Ok(&self.date[..4])
    }

    /// Check the invariants every formatter relies on.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(CiteError::EmptyField("title"));
        }
        if self.authors.is_empty() {
            return Err(CiteError::EmptyField("authors"));
        }
        if self.journal.is_empty() {
            return Err(CiteError::EmptyField("journal"));
        }
        if self.url.is_empty() {
            return Err(CiteError::EmptyField("url"));
        }
        self.year()?;
        match (self.kind, self.statute_code.as_deref()) {
            (SourceKind::Statute, None) => Err(CiteError::InvalidStatuteCode(String::new())),
            (SourceKind::Statute, Some(code)) if !statute::is_dotted_code(code) => {
                Err(CiteError::InvalidStatuteCode(code.to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// User-supplied field values for a manually entered source.
///
/// Same shape as an extracted record; the conversion substitutes the same
/// placeholders the extractor would and enforces the same invariants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManualEntry {
    pub title: String,
    pub authors: String,
    pub date: String,
    pub journal: String,
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statute_code: Option<String>,
}

impl ManualEntry {
    pub fn into_metadata(self) -> Result<SourceMetadata> {
        let url = Url::parse(self.url.trim())
            .map_err(|_| CiteError::InvalidUrl(self.url.clone()))?;
        let domain = url.host_str().unwrap_or_default().to_string();

        let date = self.date.trim().to_string();
        if date.len() < 4 {
            return Err(CiteError::DateTooShort(date));
        }

        let kind = match &self.statute_code {
            Some(code) if statute::is_dotted_code(code) => SourceKind::Statute,
            Some(code) => return Err(CiteError::InvalidStatuteCode(code.clone())),
            None => SourceKind::Webpage,
        };

        let title = non_empty_or(self.title, UNKNOWN_TITLE);
        let authors = non_empty_or(self.authors, UNKNOWN_AUTHOR);
        let journal = non_empty_or(self.journal, &domain);

        let metadata = SourceMetadata {
            kind,
            title,
            authors,
            date,
            journal,
            doi: self.doi.map(|d| d.trim().to_string()).filter(|d| !d.is_empty()),
            domain,
            url: url.to_string(),
            statute_code: self.statute_code,
            site: None,
        };
        metadata.validate()?;
        Ok(metadata)
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
