//! Page model and embed conversion.

use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};

use crate::error::PaginatorError;

/// Default embed color used when a page does not set one.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// Zero-width space, used where the platform requires a non-empty name.
pub const BLANK: &str = "\u{200b}";

/// A single named field on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }

    /// A field with an invisible name.
    pub fn unnamed(value: impl Into<String>, inline: bool) -> Self {
        Self::new(BLANK, value, inline)
    }
}

/// One renderable card of a paginator.
///
/// Callers use it as a template; the renderer appends content fields and the
/// paginator stamps the footer once the page count is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<u32>,
    pub fields: Vec<Field>,
    pub footer: Option<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Replace the footer with the page position, keeping any template note.
    pub(crate) fn stamp_position(&mut self, page: usize, total_pages: usize) {
        let position = format!("Page {page} of {total_pages}");
        self.footer = Some(match self.footer.as_deref() {
            Some(note) if !note.is_empty() => format!("{position} • {note}"),
            _ => position,
        });
    }

    /// Convert into a validated twilight embed.
    pub fn to_embed(&self) -> anyhow::Result<Embed> {
        let mut builder = EmbedBuilder::new().color(self.color.unwrap_or(DEFAULT_EMBED_COLOR));

        if let Some(title) = &self.title {
            builder = builder.title(title);
        }
        if let Some(description) = &self.description {
            builder = builder.description(description);
        }

        for field in &self.fields {
            let mut field_builder = EmbedFieldBuilder::new(&field.name, &field.value);
            if field.inline {
                field_builder = field_builder.inline();
            }
            builder = builder.field(field_builder.build());
        }

        if let Some(footer) = self.footer.as_deref().filter(|text| !text.is_empty()) {
            builder = builder.footer(EmbedFooterBuilder::new(footer).build());
        }

        Ok(builder.validate()?.build())
    }
}

/// Render every page to an embed, tagging validation failures with the page number.
pub fn render_embeds(pages: &[Page]) -> Result<Vec<Embed>, PaginatorError> {
    pages
        .iter()
        .enumerate()
        .map(|(index, page)| {
            page.to_embed().map_err(|source| PaginatorError::Embed {
                page: index + 1,
                reason: source.to_string(),
            })
        })
        .collect()
}
