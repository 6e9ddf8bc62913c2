use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::PageSnapshot;

/// Fixed set of legal-citation markers checked against both URL and title.
/// Matching any of them only *proposes* statute classification; it must be
/// confirmed by a parsable `cite=` code before a statute record is built.
static LEGAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bRCW\b",
        r"(?i)revised.*code.*washington",
        r"(?i)app\.leg\.wa\.gov/RCW",
        r"cite=\d+\.\d+\.\d+",
        r"(?i)\btitle \d+",
        r"(?i)\bchapter \d+",
        r"(?i)\bsection \d+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

static DOTTED_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\d+\.\d+").expect("valid regex"));

pub fn is_statute_page(url: &str, title: &str) -> bool {
    LEGAL_PATTERNS
        .iter()
        .any(|p| p.is_match(url) || p.is_match(title))
}

/// Dotted section code from the `cite=` query parameter, e.g. "59.18.030".
pub fn statute_code(doc: &PageSnapshot) -> Option<String> {
    let cite = doc.query_param("cite")?;
    DOTTED_CODE.find(&cite).map(|m| m.as_str().to_string())
}

/// Whether `code` has the dotted-numeric shape statute records require.
pub fn is_dotted_code(code: &str) -> bool {
    DOTTED_CODE
        .find(code)
        .is_some_and(|m| m.as_str().len() == code.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rcw_title_is_a_statute_page() {
        assert!(is_statute_page("https://example.com/", "RCW 59.18.030"));
    }

    #[test]
    fn leg_wa_gov_url_is_a_statute_page() {
        assert!(is_statute_page("https://app.leg.wa.gov/RCW/?cite=59.18.030", ""));
    }

    #[test]
    fn spelled_out_code_name_matches() {
        assert!(is_statute_page(
            "https://example.com/",
            "Revised Code of Washington, Landlord Tenant"
        ));
    }

    #[test]
    fn ordinary_page_is_not_a_statute() {
        assert!(!is_statute_page("https://example.com/blog", "Cooking at Home"));
    }

    #[test]
    fn code_extraction_from_cite_param() {
        let doc = PageSnapshot::new("https://app.leg.wa.gov/RCW/?cite=59.18.030", "").unwrap();
        assert_eq!(statute_code(&doc).as_deref(), Some("59.18.030"));
    }

    #[test]
    fn missing_cite_param_yields_none() {
        let doc = PageSnapshot::new("https://app.leg.wa.gov/RCW/default.aspx", "").unwrap();
        assert!(statute_code(&doc).is_none());
    }

    #[test]
    fn non_dotted_cite_param_yields_none() {
        let doc = PageSnapshot::new("https://app.leg.wa.gov/RCW/?cite=landlord", "").unwrap();
        assert!(statute_code(&doc).is_none());
    }

    #[test]
    fn dotted_code_shape() {
        assert!(is_dotted_code("59.18.030"));
        assert!(!is_dotted_code("59.18.030 extra"));
        assert!(!is_dotted_code("59-18-030"));
    }
}
