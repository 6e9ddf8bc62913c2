use once_cell::unsync::OnceCell;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{CiteError, Result};

/// Owned point-in-time capture of one document: address, tab title and markup.
///
/// All accessors are pure with respect to the captured markup; repeated reads
/// against an unchanged snapshot return equal values, which is what makes the
/// extraction pipeline idempotent per request.
#[derive(Debug)]
pub struct PageSnapshot {
    url: Url,
    title: String,
    dom: Html,
    body_text: OnceCell<String>,
}

impl PageSnapshot {
    /// Build a snapshot, taking the tab title from the markup's `<title>`.
    pub fn new(url: &str, html: &str) -> Result<Self> {
        let dom = Html::parse_document(html);
        let title = first_text(&dom, "title").unwrap_or_default();
        Self::from_parts(url, title, dom)
    }

    /// Build a snapshot with an explicit tab title (the browser's
    /// `document.title`, which can drift from the markup on dynamic pages).
    pub fn with_title(url: &str, title: impl Into<String>, html: &str) -> Result<Self> {
        Self::from_parts(url, title.into(), Html::parse_document(html))
    }

    fn from_parts(url: &str, title: String, dom: Html) -> Result<Self> {
        let url = Url::parse(url).map_err(|_| CiteError::InvalidUrl(url.to_string()))?;
        Ok(Self {
            url,
            title,
            dom,
            body_text: OnceCell::new(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn url_str(&self) -> &str {
        self.url.as_str()
    }

    /// Host part of the address; empty for hostless URLs.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// First value of a query parameter, percent-decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    /// Content of the first `<meta>` whose `name` or `property` equals `key`.
    pub fn meta_content(&self, key: &str) -> Option<String> {
        self.meta_all(key).into_iter().next()
    }

    /// Contents of every `<meta>` matching `key`, in document order.
    /// Citation tags like `citation_author` legitimately repeat.
    pub fn meta_all(&self, key: &str) -> Vec<String> {
        let css = format!(r#"meta[name="{key}"], meta[property="{key}"]"#);
        let Ok(selector) = Selector::parse(&css) else {
            return Vec::new();
        };
        self.dom
            .select(&selector)
            .filter_map(|el| el.value().attr("content"))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Trimmed text of the first element matching `css`, if non-empty.
    pub fn select_text(&self, css: &str) -> Option<String> {
        first_text(&self.dom, css)
    }

    /// Attribute value of the first element matching `css`.
    pub fn select_attr(&self, css: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(css).ok()?;
        self.dom
            .select(&selector)
            .find_map(|el| el.value().attr(attr))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(ToOwned::to_owned)
    }

    /// Visible text content of the whole document, whitespace-joined.
    /// Computed once per snapshot.
    pub fn body_text(&self) -> &str {
        self.body_text.get_or_init(|| {
            self.dom
                .root_element()
                .text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }
}

fn first_text(dom: &Html, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    dom.select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .find(|t| !t.is_empty())
}
