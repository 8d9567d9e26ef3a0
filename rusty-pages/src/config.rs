//! Paginator configuration.
//!
//! Defaults match the common case: ten structured fields per page, button
//! navigation, a five minute expiration, and components stripped (not the
//! message deleted) when the session ends.

use std::{env, str::FromStr, time::Duration};

use crate::error::ConfigError;
use crate::pagination::{ComponentType, ContentType, EmojiSet};

/// Default number of content items per page.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Default lifetime of a pagination session.
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(300);

/// Every recognized paginator option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatorConfig {
    /// Content items per page; must be at least 1.
    pub per_page: usize,
    /// How each chunk is laid out on its page.
    pub content_type: ContentType,
    /// Buttons or a select menu.
    pub component_type: ComponentType,
    /// Emoji/label overrides for buttons.
    pub emojis: Option<EmojiSet>,
    /// Delete the message when the session ends instead of stripping its components.
    pub delete_on_end: bool,
    /// Session lifetime; `None` keeps it open until closed.
    pub expiration: Option<Duration>,
    /// Send interaction replies as ephemeral messages.
    pub ephemeral: bool,
    /// Only the invoking user may navigate.
    pub filtered: bool,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            content_type: ContentType::default(),
            component_type: ComponentType::default(),
            emojis: None,
            delete_on_end: false,
            expiration: Some(DEFAULT_EXPIRATION),
            ephemeral: false,
            filtered: false,
        }
    }
}

impl PaginatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 {
            return Err(ConfigError::InvalidPerPage(self.per_page));
        }

        Ok(())
    }

    /// Defaults overridden by `PAGINATOR_*` environment variables.
    ///
    /// `PAGINATOR_EXPIRATION_SECS=0` disables expiration.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("PAGINATOR_PER_PAGE") {
            config.per_page = parse_env("PAGINATOR_PER_PAGE", &raw)?;
        }
        if let Some(raw) = lookup("PAGINATOR_CONTENT_TYPE") {
            config.content_type = raw.parse()?;
        }
        if let Some(raw) = lookup("PAGINATOR_COMPONENT_TYPE") {
            config.component_type = raw.parse()?;
        }
        if let Some(raw) = lookup("PAGINATOR_DELETE_ON_END") {
            config.delete_on_end = parse_env("PAGINATOR_DELETE_ON_END", &raw)?;
        }
        if let Some(raw) = lookup("PAGINATOR_EXPIRATION_SECS") {
            let secs: u64 = parse_env("PAGINATOR_EXPIRATION_SECS", &raw)?;
            config.expiration = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(raw) = lookup("PAGINATOR_EPHEMERAL") {
            config.ephemeral = parse_env("PAGINATOR_EPHEMERAL", &raw)?;
        }
        if let Some(raw) = lookup("PAGINATOR_FILTERED") {
            config.filtered = parse_env("PAGINATOR_FILTERED", &raw)?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_env<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key,
        value: raw.to_owned(),
    })
}
