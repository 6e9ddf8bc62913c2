use serde::{Deserialize, Serialize};

/// Named citation formats the formatter can render.
///
/// `Plain` is the catch-all: any unrecognized style name degrades to the
/// bare `"{title}." {url}` template instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Apa,
    Mla,
    Chicago,
    Ieee,
    Bluebook,
    BluebookUrl,
    LegalShort,
    Plain,
}

impl Style {
    /// Style applied when the caller does not name one.
    pub const DEFAULT: Style = Style::Mla;

    /// Total over all inputs: unknown names map to `Plain`.
    pub fn parse(name: &str) -> Style {
        match name.trim().to_ascii_lowercase().as_str() {
            "apa" => Style::Apa,
            "mla" => Style::Mla,
            "chicago" => Style::Chicago,
            "ieee" => Style::Ieee,
            "bluebook" => Style::Bluebook,
            "bluebook_url" | "bluebook-url" => Style::BluebookUrl,
            "legal_short" | "legal-short" => Style::LegalShort,
            _ => Style::Plain,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Style::Apa => "apa",
            Style::Mla => "mla",
            Style::Chicago => "chicago",
            Style::Ieee => "ieee",
            Style::Bluebook => "bluebook",
            Style::BluebookUrl => "bluebook_url",
            Style::LegalShort => "legal_short",
            Style::Plain => "plain",
        }
    }

    pub fn all() -> &'static [Style] {
        &[
            Style::Apa,
            Style::Mla,
            Style::Chicago,
            Style::Ieee,
            Style::Bluebook,
            Style::BluebookUrl,
            Style::LegalShort,
            Style::Plain,
        ]
    }

    /// The three statute-only formats.
    pub fn is_legal(&self) -> bool {
        matches!(self, Style::Bluebook | Style::BluebookUrl | Style::LegalShort)
    }
}
