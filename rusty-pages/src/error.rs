//! Error types for paginator configuration and page building.

use thiserror::Error;

/// A configuration value was rejected at the call that supplied it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Items per page must be at least one.
    #[error("items per page must be at least 1, got {0}")]
    InvalidPerPage(usize),

    /// Emoji override sets map onto either three or five controls.
    #[error("expected 3 or 5 emoji entries, got {len}")]
    InvalidEmojiCount { len: usize },

    /// Two named emoji keys collapse to the same control identifier.
    #[error("duplicate emoji key `{0}`")]
    DuplicateEmojiKey(String),

    /// Content type token not recognized.
    #[error("unknown content type `{0}` (expected inline-text, structured-field or two-column)")]
    UnknownContentType(String),

    /// Component type token not recognized.
    #[error("unknown component type `{0}` (expected buttons or select-menu)")]
    UnknownComponentType(String),

    /// An environment override could not be parsed.
    #[error("invalid value `{value}` for {key}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Errors raised while building or sending a paginator.
#[derive(Error, Debug)]
pub enum PaginatorError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Pages were requested before any contents were set.
    #[error("no contents found; call set_contents with at least one item")]
    Contents,

    /// The send target is not a user, channel, or command interaction.
    #[error("unsupported send target: {0}")]
    SendTarget(String),

    /// Filtering was requested but the target has no owning user.
    #[error("filtered paginators need a target with an owning user")]
    Filter,

    /// A rendered page failed embed validation.
    #[error("page {page} is not a valid embed: {reason}")]
    Embed { page: usize, reason: String },
}

/// Result type for paginator operations.
pub type Result<T> = std::result::Result<T, PaginatorError>;
