use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CiteError, Result};

static DOI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)10\.\d{4,9}/[-._;()/:A-Z0-9]+[A-Z0-9]").expect("valid regex"));

/// A DOI in raw, normalized (lowercase, prefix-free) and resolver-URL form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doi {
    pub raw: String,
    pub normalized: String,
    pub url: String,
}

impl Doi {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        // Strip known prefixes to get the raw DOI
        let stripped = if let Some(s) = input.strip_prefix("https://doi.org/") {
            s
        } else if let Some(s) = input.strip_prefix("http://doi.org/") {
            s
        } else if let Some(s) = input.strip_prefix("https://dx.doi.org/") {
            s
        } else if let Some(s) = input.strip_prefix("http://dx.doi.org/") {
            s
        } else if let Some(s) = input.strip_prefix("doi:") {
            s.trim_start()
        } else if let Some(s) = input.strip_prefix("DOI:") {
            s.trim_start()
        } else {
            input
        };

        // Validate: must start with "10.", contain "/", and have non-empty suffix
        if !stripped.starts_with("10.") {
            return Err(CiteError::InvalidDoi(input.to_string()));
        }
        let slash_pos = stripped
            .find('/')
            .ok_or_else(|| CiteError::InvalidDoi(input.to_string()))?;
        let suffix = &stripped[slash_pos + 1..];
        if suffix.is_empty() {
            return Err(CiteError::InvalidDoi(input.to_string()));
        }

        let normalized = stripped.to_lowercase();
        let url = format!("https://doi.org/{normalized}");

        Ok(Self {
            raw: input.to_string(),
            normalized,
            url,
        })
    }
}

/// First DOI-shaped token in `text`, if any.
pub fn find_doi_in_text(text: &str) -> Option<Doi> {
    DOI_REGEX
        .find_iter(text)
        .find_map(|m| Doi::parse(m.as_str()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_doi() {
        let doi = Doi::parse("10.1000/xyz123").unwrap();
        assert_eq!(doi.normalized, "10.1000/xyz123");
        assert_eq!(doi.url, "https://doi.org/10.1000/xyz123");
    }

    #[test]
    fn doi_with_https_prefix() {
        let doi = Doi::parse("https://doi.org/10.1000/xyz123").unwrap();
        assert_eq!(doi.normalized, "10.1000/xyz123");
    }

    #[test]
    fn doi_with_doi_colon_prefix() {
        let doi = Doi::parse("doi:10.1000/xyz123").unwrap();
        assert_eq!(doi.normalized, "10.1000/xyz123");
    }

    #[test]
    fn doi_uppercase_normalized_to_lowercase() {
        let doi = Doi::parse("10.1000/XYZ123").unwrap();
        assert_eq!(doi.normalized, "10.1000/xyz123");
    }

    #[test]
    fn reject_not_a_doi() {
        assert!(Doi::parse("not-a-doi").is_err());
    }

    #[test]
    fn reject_doi_without_suffix() {
        assert!(Doi::parse("10.1000").is_err());
    }

    #[test]
    fn finds_doi_inside_prose() {
        let text = "As shown previously (doi: 10.1038/s41586-021-03819-2) the model...";
        let doi = find_doi_in_text(text).unwrap();
        assert_eq!(doi.normalized, "10.1038/s41586-021-03819-2");
    }

    #[test]
    fn finds_doi_inside_url_path() {
        let doi = find_doi_in_text("https://doi.org/10.1145/3313831.3376166").unwrap();
        assert_eq!(doi.normalized, "10.1145/3313831.3376166");
    }

    #[test]
    fn no_doi_in_plain_text() {
        assert!(find_doi_in_text("nothing to see here, just 10 words").is_none());
    }
}
