use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::document::PageSnapshot;
use crate::metadata::{SourceKind, SourceMetadata, UNKNOWN_TITLE};

/// Where to read a value from: element text or an attribute.
enum Rule {
    Text(&'static str),
    Attr(&'static str, &'static str),
}

/// Extraction rules for one known video platform. Selector lists are ordered
/// by trust; the first rule that yields a non-empty value wins.
struct Platform {
    label: &'static str,
    hosts: &'static [&'static str],
    title_suffixes: &'static [&'static str],
    uploader_rules: &'static [Rule],
    unknown_uploader: &'static str,
    date_rules: &'static [Rule],
}

const PLATFORMS: &[Platform] = &[
    Platform {
        label: "YouTube",
        hosts: &["youtube.com", "youtu.be"],
        title_suffixes: &[" - YouTube"],
        uploader_rules: &[
            Rule::Attr(r#"link[itemprop="name"]"#, "content"),
            Rule::Text("#owner-name a"),
            Rule::Text("ytd-channel-name a"),
            Rule::Attr(r#"meta[itemprop="author"]"#, "content"),
        ],
        unknown_uploader: "Unknown Channel",
        date_rules: &[
            Rule::Attr(r#"meta[itemprop="datePublished"]"#, "content"),
            Rule::Attr(r#"meta[itemprop="uploadDate"]"#, "content"),
        ],
    },
    Platform {
        label: "Vimeo",
        hosts: &["vimeo.com"],
        title_suffixes: &[" on Vimeo"],
        uploader_rules: &[
            Rule::Attr(r#"meta[name="author"]"#, "content"),
            Rule::Text(".userlink a"),
            Rule::Text(r#"a[rel="author"]"#),
        ],
        unknown_uploader: "Unknown Creator",
        date_rules: &[
            Rule::Attr(r#"meta[itemprop="datePublished"]"#, "content"),
            Rule::Attr(r#"meta[property="video:release_date"]"#, "content"),
        ],
    },
];

/// Build a video record when the host belongs to a known platform.
/// Returns `None` otherwise so classification falls through to the
/// generic webpage tier.
pub fn extract_video(doc: &PageSnapshot, today: NaiveDate) -> Option<SourceMetadata> {
    let platform = match_platform(doc.host())?;
    debug!(platform = platform.label, "video platform matched");

    let title = doc
        .meta_content("og:title")
        .unwrap_or_else(|| strip_platform_suffix(doc.title(), platform));
    let title = if title.is_empty() {
        UNKNOWN_TITLE.to_string()
    } else {
        title
    };

    let authors = first_rule_match(doc, platform.uploader_rules)
        .unwrap_or_else(|| platform.unknown_uploader.to_string());

    let date = first_rule_match(doc, platform.date_rules)
        .unwrap_or_else(|| today.year().to_string());

    Some(SourceMetadata {
        kind: SourceKind::Video,
        title,
        authors,
        date,
        journal: platform.label.to_string(),
        doi: None,
        domain: doc.host().to_string(),
        url: doc.url_str().to_string(),
        statute_code: None,
        site: Some(platform.label.to_string()),
    })
}

fn match_platform(host: &str) -> Option<&'static Platform> {
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(host);
    PLATFORMS.iter().find(|p| {
        p.hosts
            .iter()
            .any(|h| host == *h || host.ends_with(&format!(".{h}")))
    })
}

fn first_rule_match(doc: &PageSnapshot, rules: &[Rule]) -> Option<String> {
    rules.iter().find_map(|rule| match rule {
        Rule::Text(css) => doc.select_text(css),
        Rule::Attr(css, attr) => doc.select_attr(css, attr),
    })
}

fn strip_platform_suffix(title: &str, platform: &Platform) -> String {
    for suffix in platform.title_suffixes {
        if let Some(stripped) = title.strip_suffix(suffix) {
            return stripped.trim().to_string();
        }
    }
    title.trim().to_string()
}
