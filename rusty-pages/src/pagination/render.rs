//! Content-type rendering of a chunk onto a page template.

use std::{fmt, str::FromStr};

use crate::error::ConfigError;
use crate::page::{BLANK, Field, Page};

/// How a chunk of content is laid out on its page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentType {
    /// All items joined by newlines into one field.
    InlineText,
    /// One field per item.
    #[default]
    StructuredField,
    /// Items split into two side-by-side columns.
    TwoColumn,
}

impl FromStr for ContentType {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "inline-text" | "inline" | "single" => Ok(Self::InlineText),
            "structured-field" | "fields" | "field" => Ok(Self::StructuredField),
            "two-column" | "columns" => Ok(Self::TwoColumn),
            _ => Err(ConfigError::UnknownContentType(raw.to_owned())),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InlineText => "inline-text",
            Self::StructuredField => "structured-field",
            Self::TwoColumn => "two-column",
        })
    }
}

/// A content item that can be placed on a page.
///
/// Every paginator holds items of exactly one implementing type.
pub trait PageContent: Clone {
    /// Text form used by the inline and column layouts.
    fn to_text(&self) -> String;

    /// Field form used by the structured layout.
    fn to_field(&self) -> Field {
        Field::unnamed(self.to_text(), false)
    }
}

impl PageContent for String {
    fn to_text(&self) -> String {
        self.clone()
    }
}

impl PageContent for &str {
    fn to_text(&self) -> String {
        (*self).to_owned()
    }
}

impl PageContent for Field {
    fn to_text(&self) -> String {
        format!("**{}**\n{}", self.name, self.value)
    }

    fn to_field(&self) -> Field {
        self.clone()
    }
}

macro_rules! impl_page_content_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PageContent for $ty {
                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_page_content_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Render one chunk onto a copy of `template`.
pub fn render<T: PageContent>(template: &Page, chunk: &[T], mode: ContentType) -> Page {
    let mut page = template.clone();

    match mode {
        ContentType::InlineText => {
            page.fields.push(Field::unnamed(join_lines(chunk), false));
        }
        ContentType::StructuredField => {
            page.fields.extend(chunk.iter().map(PageContent::to_field));
        }
        ContentType::TwoColumn => {
            let (left, right) = chunk.split_at(chunk.len() / 2);
            page.fields.push(Field::unnamed(join_lines(left), true));
            page.fields.push(Field::unnamed(join_lines(right), true));
        }
    }

    page
}

// Field values may not be empty, so an empty column renders as a blank.
fn join_lines<T: PageContent>(items: &[T]) -> String {
    if items.is_empty() {
        return BLANK.to_owned();
    }

    items
        .iter()
        .map(PageContent::to_text)
        .collect::<Vec<_>>()
        .join("\n")
}
