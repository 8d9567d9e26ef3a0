//! Decoding of component interactions into paginator events.

use twilight_model::{
    application::interaction::{Interaction, InteractionData},
    channel::message::component::ComponentType as TwilightComponentType,
    id::{
        Id,
        marker::{ApplicationMarker, InteractionMarker, UserMarker},
    },
};

use super::navigation::NavAction;
use super::token::parse_custom_id;

/// What the user did with a paginator control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentAction {
    /// A button was pressed; carries its control identifier.
    Button { control: String },
    /// A select menu option was chosen; carries the selected values.
    Menu { values: Vec<String> },
}

impl ComponentAction {
    /// Map onto a navigation action, or `None` for unrelated input.
    pub fn nav_action(&self) -> Option<NavAction> {
        match self {
            Self::Button { control } => NavAction::parse(control),
            Self::Menu { values } => values
                .first()
                .and_then(|value| NavAction::parse_menu_value(value)),
        }
    }
}

/// Everything needed to answer an interaction after it has been routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyHandle {
    pub application_id: Id<ApplicationMarker>,
    pub interaction_id: Id<InteractionMarker>,
    pub token: String,
}

/// A routed interaction for one pagination session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEvent {
    pub session_id: u64,
    pub action: ComponentAction,
    pub user_id: Option<Id<UserMarker>>,
    pub reply: ReplyHandle,
}

/// Decode the routing part of a component interaction.
///
/// Returns `None` when the custom ID does not belong to a paginator.
pub fn decode_component(
    custom_id: &str,
    is_menu: bool,
    values: &[String],
) -> Option<(u64, ComponentAction)> {
    let token = parse_custom_id(custom_id)?;

    let action = if is_menu {
        ComponentAction::Menu {
            values: values.to_vec(),
        }
    } else {
        ComponentAction::Button {
            control: token.control,
        }
    };

    Some((token.session_id, action))
}

/// Decode a gateway interaction into a paginator event.
pub fn component_event(interaction: &Interaction) -> Option<ComponentEvent> {
    let Some(InteractionData::MessageComponent(data)) = interaction.data.as_ref() else {
        return None;
    };

    let is_menu = data.component_type == TwilightComponentType::TextSelectMenu;
    let (session_id, action) = decode_component(&data.custom_id, is_menu, &data.values)?;

    Some(ComponentEvent {
        session_id,
        action,
        user_id: interaction.author_id(),
        reply: ReplyHandle {
            application_id: interaction.application_id,
            interaction_id: interaction.id,
            token: interaction.token.clone(),
        },
    })
}
