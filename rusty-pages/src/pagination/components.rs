//! Navigation control layout (buttons or select menu) and its twilight form.

use std::{fmt, str::FromStr};

use twilight_model::channel::message::component::{
    ActionRow, Button, ButtonStyle, Component, SelectMenu, SelectMenuOption, SelectMenuType,
};

use super::token::{MENU_CONTROL_ID, build_custom_id};
use crate::error::ConfigError;
use crate::parse::parse_emoji;

/// Platform ceiling on options in a single select menu.
pub const SELECT_MENU_MAX_OPTIONS: usize = 25;

/// Named emoji keys that render as destructive controls.
const DESTRUCTIVE_KEYS: [&str; 4] = ["stop", "close", "end", "delete"];

/// Control identifiers for positional emoji sets, by set length.
const POSITIONAL_SHORT: [&str; 3] = ["previous", "close", "next"];
const POSITIONAL_FULL: [&str; 5] = ["first", "previous", "close", "next", "last"];

/// Default button controls as `(identifier, label)`.
const DEFAULT_BUTTONS: [(&str, &str); 5] = [
    ("first", "First"),
    ("previous", "Previous"),
    ("next", "Next"),
    ("last", "Last"),
    ("close", "Close"),
];

/// Select menu actions used once pages no longer fit as options.
const MENU_ACTIONS: [(&str, &str, &str); 5] = [
    ("First", "first", "Go to the first page"),
    ("Back", "back", "Go back a page"),
    ("Forward", "forward", "Go forward a page"),
    ("Last", "last", "Go to the last page"),
    ("Close", "stop", "Close the paginator"),
];

/// Whether navigation is shown as buttons or a select menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComponentType {
    #[default]
    Buttons,
    SelectMenu,
}

impl FromStr for ComponentType {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "buttons" | "button" => Ok(Self::Buttons),
            "select-menu" | "select" | "menu" => Ok(Self::SelectMenu),
            _ => Err(ConfigError::UnknownComponentType(raw.to_owned())),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Buttons => "buttons",
            Self::SelectMenu => "select-menu",
        })
    }
}

/// Emoji/label overrides for navigation buttons.
///
/// Only constructible through the validating constructors, so a held set
/// always has three or five entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmojiSet {
    /// Emojis mapped onto `previous, close, next` or
    /// `first, previous, close, next, last`.
    Positional(Vec<String>),
    /// `(key, emoji)` pairs; each key becomes a control identifier and label.
    Named(Vec<(String, String)>),
}

impl EmojiSet {
    pub fn positional<I, S>(emojis: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let emojis: Vec<String> = emojis.into_iter().map(Into::into).collect();
        check_len(emojis.len())?;
        Ok(Self::Positional(emojis))
    }

    /// Build a named set from `(key, emoji)` pairs.
    ///
    /// Only keys the navigator understands move or close the paginator:
    /// `first`, `previous`/`prev`/`back`, `next`/`forward`, `last`, and the
    /// close aliases `close`/`stop`/`cancel`/`delete`/`end`. Any other key
    /// still renders a button, but pressing it is acknowledged and ignored.
    pub fn named<I, K, V>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(key, emoji)| (key.into(), emoji.into()))
            .collect();
        check_len(entries.len())?;

        let mut seen: Vec<String> = Vec::with_capacity(entries.len());
        for (key, _) in &entries {
            let id = key.to_lowercase();
            if seen.contains(&id) {
                return Err(ConfigError::DuplicateEmojiKey(key.clone()));
            }
            seen.push(id);
        }

        Ok(Self::Named(entries))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Positional(emojis) => emojis.len(),
            Self::Named(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn check_len(len: usize) -> Result<(), ConfigError> {
    match len {
        3 | 5 => Ok(()),
        _ => Err(ConfigError::InvalidEmojiCount { len }),
    }
}

/// Visual class of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStyle {
    Neutral,
    Destructive,
}

/// A single navigation button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonControl {
    /// Action token delivered when pressed.
    pub id: String,
    pub label: Option<String>,
    pub emoji: Option<String>,
    pub style: ControlStyle,
}

/// A single select menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    /// Action token (or page number) delivered when chosen.
    pub value: String,
    pub description: String,
}

/// Declarative navigation layout for one paginator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentLayout {
    Buttons(Vec<ButtonControl>),
    Menu {
        placeholder: String,
        options: Vec<MenuOption>,
    },
}

impl ComponentLayout {
    /// Whether the menu lists fixed actions instead of one option per page.
    pub fn is_action_menu(&self) -> bool {
        match self {
            Self::Menu { options, .. } => options
                .first()
                .is_some_and(|option| option.value.parse::<usize>().is_err()),
            Self::Buttons(_) => false,
        }
    }

    /// Convert into a twilight action row whose custom IDs route to `session_id`.
    pub fn to_components(&self, session_id: u64) -> Vec<Component> {
        let components = match self {
            Self::Buttons(controls) => controls
                .iter()
                .map(|control| Component::Button(to_button(control, session_id)))
                .collect(),
            Self::Menu {
                placeholder,
                options,
            } => vec![Component::SelectMenu(SelectMenu {
                channel_types: None,
                custom_id: build_custom_id(session_id, MENU_CONTROL_ID),
                default_values: None,
                disabled: false,
                id: None,
                kind: SelectMenuType::Text,
                max_values: Some(1),
                min_values: Some(1),
                options: Some(options.iter().map(to_menu_option).collect()),
                placeholder: Some(placeholder.clone()),
                required: None,
            })],
        };

        vec![Component::ActionRow(ActionRow {
            id: None,
            components,
        })]
    }
}

fn to_button(control: &ButtonControl, session_id: u64) -> Button {
    Button {
        id: None,
        custom_id: Some(build_custom_id(session_id, &control.id)),
        disabled: false,
        emoji: control.emoji.as_deref().map(parse_emoji),
        label: control.label.clone(),
        style: match control.style {
            ControlStyle::Neutral => ButtonStyle::Secondary,
            ControlStyle::Destructive => ButtonStyle::Danger,
        },
        url: None,
        sku_id: None,
    }
}

fn to_menu_option(option: &MenuOption) -> SelectMenuOption {
    SelectMenuOption {
        default: false,
        description: Some(option.description.clone()),
        emoji: None,
        label: option.label.clone(),
        value: option.value.clone(),
    }
}

/// Build the navigation layout for `total_pages` pages.
pub fn build_components(
    mode: ComponentType,
    total_pages: usize,
    overrides: Option<&EmojiSet>,
) -> ComponentLayout {
    match mode {
        ComponentType::Buttons => ComponentLayout::Buttons(build_buttons(overrides)),
        ComponentType::SelectMenu if total_pages > SELECT_MENU_MAX_OPTIONS => {
            ComponentLayout::Menu {
                placeholder: "Select An Action".to_owned(),
                options: MENU_ACTIONS
                    .iter()
                    .map(|(label, value, description)| MenuOption {
                        label: (*label).to_owned(),
                        value: (*value).to_owned(),
                        description: (*description).to_owned(),
                    })
                    .collect(),
            }
        }
        ComponentType::SelectMenu => ComponentLayout::Menu {
            placeholder: "Select A Page".to_owned(),
            options: (1..=total_pages.max(1))
                .map(|page| MenuOption {
                    label: format!("Page {page}"),
                    value: page.to_string(),
                    description: format!("Go to page {page}"),
                })
                .collect(),
        },
    }
}

fn build_buttons(overrides: Option<&EmojiSet>) -> Vec<ButtonControl> {
    match overrides {
        None => DEFAULT_BUTTONS
            .iter()
            .map(|(id, label)| ButtonControl {
                id: (*id).to_owned(),
                label: Some((*label).to_owned()),
                emoji: None,
                style: style_for(id),
            })
            .collect(),
        Some(EmojiSet::Positional(emojis)) => {
            let ids: &[&str] = if emojis.len() == POSITIONAL_SHORT.len() {
                &POSITIONAL_SHORT
            } else {
                &POSITIONAL_FULL
            };

            ids.iter()
                .zip(emojis)
                .map(|(id, emoji)| ButtonControl {
                    id: (*id).to_owned(),
                    label: None,
                    emoji: Some(emoji.clone()),
                    style: style_for(id),
                })
                .collect()
        }
        Some(EmojiSet::Named(entries)) => entries
            .iter()
            .map(|(key, emoji)| {
                let id = key.to_lowercase();
                ButtonControl {
                    style: style_for(&id),
                    id,
                    label: Some(key.clone()),
                    emoji: Some(emoji.clone()),
                }
            })
            .collect(),
    }
}

fn style_for(id: &str) -> ControlStyle {
    if DESTRUCTIVE_KEYS.contains(&id) {
        ControlStyle::Destructive
    } else {
        ControlStyle::Neutral
    }
}
