use chrono::NaiveDate;

use pagecite_core::{PageSnapshot, SourceKind, Style, cite, extract, format};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

#[test]
fn rcw_statute_page_renders_bluebook_without_url() {
    let doc = PageSnapshot::with_title(
        "https://app.leg.wa.gov/RCW/?cite=59.18.030",
        "RCW 59.18.030",
        "<html></html>",
    )
    .unwrap();

    let result = cite(&doc, Style::Bluebook, day()).unwrap();
    assert_eq!(result.metadata.kind, SourceKind::Statute);
    assert_eq!(result.metadata.statute_code.as_deref(), Some("59.18.030"));
    assert_eq!(result.citation, "WASH. REV. CODE § 59.18.030 (2025).");
    assert!(!result.citation.contains("http"));
}

#[test]
fn youtube_watch_page_strips_suffix_and_uses_channel_placeholder() {
    let doc = PageSnapshot::with_title(
        "https://youtube.com/watch?v=x",
        "My Talk - YouTube",
        "<html></html>",
    )
    .unwrap();

    let result = cite(&doc, Style::Mla, day()).unwrap();
    assert_eq!(result.metadata.kind, SourceKind::Video);
    assert_eq!(result.metadata.authors, "Unknown Channel");
    assert_eq!(
        result.citation,
        "\"My Talk.\" YouTube, 2025, https://youtube.com/watch?v=x."
    );
}

#[test]
fn plain_webpage_gets_url_in_mla_and_retrieved_from_in_apa() {
    let doc = PageSnapshot::with_title("https://example.com/", "Example Domain", "<html></html>")
        .unwrap();

    let mla = cite(&doc, Style::Mla, day()).unwrap();
    assert_eq!(mla.metadata.kind, SourceKind::Webpage);
    assert_eq!(mla.metadata.journal, "example.com");
    assert!(mla.citation.contains("https://example.com/"));

    let apa = cite(&doc, Style::Apa, day()).unwrap();
    assert_eq!(
        apa.citation,
        "Example Domain. (2025). Retrieved from https://example.com/"
    );
}

#[test]
fn statute_classification_beats_video_host_match() {
    let doc = PageSnapshot::with_title(
        "https://youtube.com/watch?cite=59.18.030",
        "RCW 59.18.030",
        "<html></html>",
    )
    .unwrap();
    let m = extract(&doc, day());
    assert_eq!(m.kind, SourceKind::Statute);
    assert_eq!(m.statute_code.as_deref(), Some("59.18.030"));
}

#[test]
fn url_doi_wins_over_body_doi() {
    let html = r#"<html><head><title>Paper</title></head>
        <body><p>Preprint at doi:10.9999/preprint-copy</p></body></html>"#;
    let doc = PageSnapshot::new("https://doi.org/10.1000/final-version", html).unwrap();
    let m = extract(&doc, day());
    assert_eq!(m.doi.as_deref(), Some("10.1000/final-version"));
}

#[test]
fn iso_date_truncates_to_year_in_every_dated_style() {
    let html = r#"<html><head>
        <title>On Things</title>
        <meta name="citation_title" content="On Things">
        <meta name="citation_author" content="Jane Doe">
        <meta name="citation_journal_title" content="Journal of Things">
        <meta name="citation_publication_date" content="2024-03-15">
        </head></html>"#;
    let doc = PageSnapshot::new("https://journals.example.org/on-things", html).unwrap();
    let m = extract(&doc, day());
    assert_eq!(m.date, "2024-03-15");

    for style in [Style::Apa, Style::Mla, Style::Chicago, Style::Ieee] {
        let out = format(&m, style, day()).unwrap();
        assert!(out.contains("2024"), "{style:?}: {out}");
        assert!(!out.contains("2024-03-15"), "{style:?} leaked raw date: {out}");
    }
}

#[test]
fn formatting_is_idempotent_for_a_fixed_instant() {
    let html = r#"<html><head><title>Stable Page</title></head>
        <body><p>By Ana Ruiz. Written 2021.</p></body></html>"#;
    let doc = PageSnapshot::new("https://example.org/stable", html).unwrap();

    for style in Style::all() {
        let first = format(&extract(&doc, day()), *style, day()).unwrap();
        let second = format(&extract(&doc, day()), *style, day()).unwrap();
        assert_eq!(first, second, "{style:?}");
    }
}

#[test]
fn every_style_keeps_the_title_for_generic_records() {
    let doc = PageSnapshot::with_title("https://example.com/", "Example Domain", "<html></html>")
        .unwrap();
    let m = extract(&doc, day());

    for style in Style::all() {
        let out = format(&m, *style, day()).unwrap();
        assert!(!out.is_empty(), "{style:?}");
        assert!(out.contains("Example Domain"), "{style:?}: {out}");
    }
}

#[test]
fn academic_record_carries_doi_through_to_ieee() {
    let html = r#"<html><head>
        <meta name="citation_title" content="On Things">
        <meta name="citation_author" content="Jane Doe">
        <meta name="citation_journal_title" content="Journal of Things">
        <meta name="citation_publication_date" content="2022">
        <meta name="citation_doi" content="10.1000/jot.2022">
        </head></html>"#;
    let doc = PageSnapshot::new("https://journals.example.org/on-things", html).unwrap();
    let result = cite(&doc, Style::Ieee, day()).unwrap();
    assert_eq!(
        result.citation,
        "[1] Jane Doe, \"On Things,\" Journal of Things, 2022. doi: 10.1000/jot.2022"
    );
}
