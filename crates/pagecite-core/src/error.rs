use thiserror::Error;

/// All errors that can occur in pagecite-core.
///
/// Extraction itself never fails; every miss degrades to a documented
/// default. Errors surface only at the formatting boundary (a record that
/// violates the metadata invariants) and around config I/O.
#[derive(Debug, Error)]
pub enum CiteError {
    #[error("date {0:?} is too short to hold a 4-digit year")]
    DateTooShort(String),

    #[error("empty metadata field: {0}")]
    EmptyField(&'static str),

    #[error("statute record without a dotted section code: {0:?}")]
    InvalidStatuteCode(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid DOI: {0}")]
    InvalidDoi(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, CiteError>;
