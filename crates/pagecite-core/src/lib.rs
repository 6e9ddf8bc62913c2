//! pagecite: page metadata extraction and citation formatting.
//!
//! Two components composed in strict sequence: an extractor that classifies
//! a page snapshot and produces a normalized metadata record, and a
//! formatter that renders that record in a named citation style. The
//! extractor never fails; the formatter is total over the style enum.

pub mod config;
pub mod document;
pub mod doi;
pub mod error;
pub mod extract;
pub mod format;
pub mod metadata;
pub mod pipeline;
pub mod style;

pub use config::AppConfig;
pub use document::PageSnapshot;
pub use doi::Doi;
pub use error::{CiteError, Result};
pub use extract::extract;
pub use format::{Jurisdiction, format, format_with};
pub use metadata::{ManualEntry, SourceKind, SourceMetadata};
pub use pipeline::{Citation, cite, cite_with_config};
pub use style::Style;
