//! Paginator orchestration: configure, add contents, build, send.

use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;
use tracing::{debug, info};
use twilight_http::Client;
use twilight_model::id::{Id, marker::UserMarker};

use crate::config::PaginatorConfig;
use crate::error::{ConfigError, PaginatorError, Result};
use crate::page::Page;
use crate::pagination::{
    ComponentLayout, ComponentType, ContentType, Delivery, EmojiSet, Navigator, PageContent,
    SendTarget, Session, SessionOptions, SessionOutcome, SessionRegistry, TwilightDelivery,
    build_components, chunk, render, total_pages,
};

/// Pages and navigation controls, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPaginator {
    pages: Vec<Page>,
    layout: ComponentLayout,
}

impl BuiltPaginator {
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn layout(&self) -> &ComponentLayout {
        &self.layout
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// A fresh navigator positioned on the first page.
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.pages.len())
    }
}

/// A sent paginator and the task driving its session.
#[derive(Debug)]
pub struct RunningPaginator {
    /// ID routed to by the message's component custom IDs.
    pub session_id: u64,
    /// Resolves once the session closes, expires, or loses its event feed.
    pub task: JoinHandle<SessionOutcome>,
}

/// Splits contents of one item type into pages and drives their navigation.
#[derive(Debug, Clone)]
pub struct Paginator<T: PageContent> {
    config: PaginatorConfig,
    contents: Vec<T>,
    templates: Vec<Page>,
}

impl<T: PageContent> Default for Paginator<T> {
    fn default() -> Self {
        Self {
            config: PaginatorConfig::default(),
            contents: Vec::new(),
            templates: Vec::new(),
        }
    }
}

impl<T: PageContent> Paginator<T> {
    pub fn new(config: PaginatorConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    pub fn contents(&self) -> &[T] {
        &self.contents
    }

    /// Pages the current contents fill, before any building.
    pub fn total_pages(&self) -> usize {
        total_pages(self.contents.len(), self.config.per_page)
    }

    pub fn set_per_page(&mut self, per_page: usize) -> std::result::Result<&mut Self, ConfigError> {
        if per_page == 0 {
            return Err(ConfigError::InvalidPerPage(per_page));
        }
        self.config.per_page = per_page;
        Ok(self)
    }

    pub fn set_content_type(&mut self, content_type: ContentType) -> &mut Self {
        self.config.content_type = content_type;
        self
    }

    pub fn set_component_type(&mut self, component_type: ComponentType) -> &mut Self {
        self.config.component_type = component_type;
        self
    }

    pub fn set_emojis(&mut self, emojis: EmojiSet) -> &mut Self {
        self.config.emojis = Some(emojis);
        self
    }

    pub fn set_delete_on_end(&mut self, delete_on_end: bool) -> &mut Self {
        self.config.delete_on_end = delete_on_end;
        self
    }

    pub fn set_expiration(&mut self, expiration: Option<Duration>) -> &mut Self {
        self.config.expiration = expiration;
        self
    }

    pub fn set_ephemeral(&mut self, ephemeral: bool) -> &mut Self {
        self.config.ephemeral = ephemeral;
        self
    }

    pub fn set_filtered(&mut self, filtered: bool) -> &mut Self {
        self.config.filtered = filtered;
        self
    }

    /// Append content items. Repeated calls accumulate.
    pub fn set_contents(&mut self, contents: impl IntoIterator<Item = T>) -> &mut Self {
        self.contents.extend(contents);
        self
    }

    /// Add page templates. Chunk `n` renders onto template `n`, or onto the
    /// first template when there are fewer templates than chunks.
    pub fn add_pages(&mut self, pages: impl IntoIterator<Item = Page>) -> &mut Self {
        self.templates.extend(pages);
        self
    }

    /// Chunk and render every page, then build the navigation layout.
    pub fn build(&self) -> Result<BuiltPaginator> {
        if self.contents.is_empty() {
            return Err(PaginatorError::Contents);
        }

        let chunks = chunk(&self.contents, self.config.per_page)?;
        let blank = Page::default();
        let fallback = self.templates.first().unwrap_or(&blank);

        let mut pages: Vec<Page> = chunks
            .iter()
            .enumerate()
            .map(|(index, items)| {
                let template = self.templates.get(index).unwrap_or(fallback);
                render(template, items, self.config.content_type)
            })
            .collect();

        let total = pages.len();
        for (index, page) in pages.iter_mut().enumerate() {
            page.stamp_position(index + 1, total);
        }

        let layout = build_components(
            self.config.component_type,
            total,
            self.config.emojis.as_ref(),
        );

        debug!(
            pages = total,
            items = self.contents.len(),
            content_type = %self.config.content_type,
            component_type = %self.config.component_type,
            "built paginator pages"
        );

        Ok(BuiltPaginator { pages, layout })
    }

    /// Build, send the first page through `delivery`, and spawn the session loop.
    ///
    /// `owner` is the user allowed to navigate when the paginator is filtered.
    pub async fn start<D>(
        &self,
        delivery: D,
        owner: Option<Id<UserMarker>>,
        registry: &SessionRegistry,
    ) -> anyhow::Result<RunningPaginator>
    where
        D: Delivery + 'static,
    {
        let built = self.build()?;

        let filter_owner = if self.config.filtered {
            Some(owner.ok_or(PaginatorError::Filter)?)
        } else {
            None
        };

        let options = SessionOptions {
            expiration: self.config.expiration,
            delete_on_end: self.config.delete_on_end,
            owner: filter_owner,
        };

        let (session_id, events) = registry.register().await;
        let session = match Session::start(delivery, built, session_id, options).await {
            Ok(session) => session,
            Err(source) => {
                registry.remove(session_id).await;
                return Err(source);
            }
        };

        info!(session_id, "pagination session started");

        let registry = registry.clone();
        let task = tokio::spawn(async move {
            let outcome = session.run(events).await;
            registry.remove(session_id).await;
            outcome
        });

        Ok(RunningPaginator { session_id, task })
    }

    /// Send to a Discord target over HTTP.
    pub async fn send(
        &self,
        http: Arc<Client>,
        target: SendTarget,
        registry: &SessionRegistry,
    ) -> anyhow::Result<RunningPaginator> {
        let owner = target.owner();
        let delivery = TwilightDelivery::new(http, target, self.config.ephemeral);
        self.start(delivery, owner, registry).await
    }
}
