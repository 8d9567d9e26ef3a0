//! Paginated embeds with button or select-menu navigation for twilight bots.
//!
//! Configure a [`Paginator`], give it contents of a single item type, and
//! either [`Paginator::build`] the pages yourself or [`Paginator::send`] them
//! to a user, channel, or command interaction. Component interactions from
//! the gateway are forwarded with [`SessionRegistry::dispatch`].

/// Paginator configuration and environment overrides.
pub mod config;
/// Error types.
pub mod error;
/// Page model and embed conversion.
pub mod page;
/// Chunking, rendering, components, navigation, and session runtime.
pub mod pagination;
/// The paginator orchestrator.
pub mod paginator;
/// Pure parser helpers.
pub mod parse;

pub use config::PaginatorConfig;
pub use error::{ConfigError, PaginatorError};
pub use page::{Field, Page};
pub use pagination::{
    ComponentType, ContentType, EmojiSet, PageContent, SendTarget, SessionRegistry,
};
pub use paginator::{BuiltPaginator, Paginator, RunningPaginator};
