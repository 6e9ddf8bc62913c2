use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::PageSnapshot;
use crate::doi::{Doi, find_doi_in_text};

/// One extraction strategy: a pure lookup against the snapshot.
/// Rule order inside each chain encodes a trust ranking: explicit
/// citation-oriented structured metadata, then generic social-metadata tags,
/// then semantic HTML, then a free-text pattern guess.
pub(crate) type FieldRule = fn(&PageSnapshot) -> Option<String>;

static YEAR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid regex"));

static BYLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[Bb]y\s+([A-Z][A-Za-z'-]*(?:\s+[A-Z][A-Za-z'-]*){0,3})").expect("valid regex")
});

pub(crate) const TITLE_RULES: &[FieldRule] = &[
    |doc| doc.meta_content("citation_title"),
    |doc| doc.meta_content("og:title"),
    |doc| doc.meta_content("twitter:title"),
    |doc| doc.select_text("h1"),
    |doc| {
        let title = doc.title().trim();
        (!title.is_empty()).then(|| title.to_string())
    },
];

pub(crate) const AUTHOR_RULES: &[FieldRule] = &[
    |doc| {
        let authors = doc.meta_all("citation_author");
        (!authors.is_empty()).then(|| authors.join(", "))
    },
    |doc| doc.meta_content("author"),
    |doc| doc.meta_content("article:author"),
    |doc| doc.select_text(r#"[rel="author"]"#),
    |doc| doc.select_text(".author, .byline"),
    |doc| {
        BYLINE
            .captures(doc.body_text())
            .map(|c| c[1].to_string())
    },
];

pub(crate) const DATE_RULES: &[FieldRule] = &[
    |doc| doc.meta_content("citation_publication_date"),
    |doc| doc.meta_content("citation_date"),
    |doc| doc.meta_content("article:published_time"),
    |doc| doc.select_attr("time[datetime]", "datetime"),
    |doc| {
        YEAR_TOKEN
            .find(doc.body_text())
            .map(|m| m.as_str().to_string())
    },
];

pub(crate) const JOURNAL_RULES: &[FieldRule] = &[
    |doc| doc.meta_content("citation_journal_title"),
    |doc| doc.meta_content("og:site_name"),
];

/// First rule in the chain that yields a value wins.
pub(crate) fn first_match(doc: &PageSnapshot, rules: &[FieldRule]) -> Option<String> {
    rules.iter().find_map(|rule| rule(doc))
}

/// DOI search order: the address first, then the citation tag, then visible
/// text. A match in the URL always beats a match in the page body.
pub(crate) fn find_doi(doc: &PageSnapshot) -> Option<Doi> {
    find_doi_in_text(doc.url_str())
        .or_else(|| doc.meta_content("citation_doi").and_then(|v| Doi::parse(&v).ok()))
        .or_else(|| find_doi_in_text(doc.body_text()))
}

/// A page counts as academic when any citation-oriented structured tag
/// matched; otherwise it is a plain webpage. Same extraction path, two labels.
pub(crate) fn has_citation_meta(doc: &PageSnapshot) -> bool {
    doc.meta_content("citation_title").is_some()
        || doc.meta_content("citation_journal_title").is_some()
        || !doc.meta_all("citation_author").is_empty()
}
