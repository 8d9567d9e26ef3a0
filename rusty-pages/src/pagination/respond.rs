//! Message delivery for pagination sessions over the Discord HTTP API.

use std::{future::Future, slice, sync::Arc};

use twilight_http::Client;
use twilight_model::{
    application::interaction::{Interaction, InteractionType},
    channel::{
        Message,
        message::{MessageFlags, component::Component, embed::Embed},
    },
    http::interaction::{InteractionResponse, InteractionResponseType},
    id::{
        Id,
        marker::{ApplicationMarker, ChannelMarker, MessageMarker, UserMarker},
    },
};
use twilight_util::builder::InteractionResponseDataBuilder;

use super::interaction::ReplyHandle;
use crate::error::PaginatorError;

/// Notice shown when someone other than the owner uses a filtered paginator.
pub const PAGINATION_WRONG_USER_MESSAGE: &str = "This pagination session belongs to another user.";

/// Where a paginator is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendTarget {
    /// Direct message to a user.
    User(Id<UserMarker>),
    /// A guild or DM text channel, optionally owned by the invoking user.
    Channel {
        channel_id: Id<ChannelMarker>,
        owner: Option<Id<UserMarker>>,
    },
    /// Reply to an application command.
    ///
    /// `replied` edits the existing (possibly deferred) response instead of
    /// creating one.
    Interaction {
        reply: ReplyHandle,
        user_id: Option<Id<UserMarker>>,
        replied: bool,
    },
}

impl SendTarget {
    /// Target the channel a command message was posted in, owned by its author.
    pub fn from_message(message: &Message) -> Self {
        Self::Channel {
            channel_id: message.channel_id,
            owner: Some(message.author.id),
        }
    }

    /// Target an application command interaction.
    pub fn from_interaction(interaction: &Interaction, replied: bool) -> Result<Self, PaginatorError> {
        let reply = ReplyHandle {
            application_id: interaction.application_id,
            interaction_id: interaction.id,
            token: interaction.token.clone(),
        };

        Self::for_interaction_kind(interaction.kind, reply, interaction.author_id(), replied)
    }

    /// Only application commands can host a paginator; component and modal
    /// interactions already belong to another message.
    fn for_interaction_kind(
        kind: InteractionType,
        reply: ReplyHandle,
        user_id: Option<Id<UserMarker>>,
        replied: bool,
    ) -> Result<Self, PaginatorError> {
        if kind != InteractionType::ApplicationCommand {
            return Err(PaginatorError::SendTarget(format!(
                "{kind:?} interactions cannot host a paginator"
            )));
        }

        Ok(Self::Interaction {
            reply,
            user_id,
            replied,
        })
    }

    /// User allowed to drive a filtered paginator.
    pub fn owner(&self) -> Option<Id<UserMarker>> {
        match self {
            Self::User(user_id) => Some(*user_id),
            Self::Channel { owner, .. } => *owner,
            Self::Interaction { user_id, .. } => *user_id,
        }
    }
}

/// Message operations a pagination session needs from the platform.
pub trait Delivery: Send + Sync {
    /// Create the paginated message.
    fn send(
        &mut self,
        embed: &Embed,
        components: &[Component],
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Answer a component interaction by re-rendering the message.
    fn update(
        &self,
        reply: &ReplyHandle,
        embed: &Embed,
        components: &[Component],
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Answer a component interaction without changing the message.
    fn acknowledge(&self, reply: &ReplyHandle) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Answer a component interaction with a private notice.
    fn reject(
        &self,
        reply: &ReplyHandle,
        notice: &str,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Leave `embed` on the message and remove every component.
    fn strip(&self, embed: &Embed) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Delete the message.
    fn delete(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone)]
enum SentMessage {
    Channel {
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
    },
    Interaction {
        application_id: Id<ApplicationMarker>,
        token: String,
    },
}

/// [`Delivery`] backed by the twilight HTTP client.
pub struct TwilightDelivery {
    http: Arc<Client>,
    target: SendTarget,
    ephemeral: bool,
    sent: Option<SentMessage>,
}

impl TwilightDelivery {
    pub fn new(http: Arc<Client>, target: SendTarget, ephemeral: bool) -> Self {
        Self {
            http,
            target,
            ephemeral,
            sent: None,
        }
    }

    fn sent(&self) -> anyhow::Result<&SentMessage> {
        self.sent
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("paginated message was never sent"))
    }

    async fn create_in_channel(
        &self,
        channel_id: Id<ChannelMarker>,
        embed: &Embed,
        components: &[Component],
    ) -> anyhow::Result<SentMessage> {
        let created = self
            .http
            .create_message(channel_id)
            .embeds(slice::from_ref(embed))
            .components(components)
            .await?
            .model()
            .await?;

        Ok(SentMessage::Channel {
            channel_id: created.channel_id,
            message_id: created.id,
        })
    }
}

impl Delivery for TwilightDelivery {
    async fn send(&mut self, embed: &Embed, components: &[Component]) -> anyhow::Result<()> {
        let sent = match &self.target {
            SendTarget::User(user_id) => {
                let channel = self
                    .http
                    .create_private_channel(*user_id)
                    .await?
                    .model()
                    .await?;
                self.create_in_channel(channel.id, embed, components).await?
            }
            SendTarget::Channel { channel_id, .. } => {
                self.create_in_channel(*channel_id, embed, components).await?
            }
            SendTarget::Interaction {
                reply,
                replied: true,
                ..
            } => {
                self.http
                    .interaction(reply.application_id)
                    .update_response(&reply.token)
                    .embeds(Some(slice::from_ref(embed)))
                    .components(Some(components))
                    .await?;

                SentMessage::Interaction {
                    application_id: reply.application_id,
                    token: reply.token.clone(),
                }
            }
            SendTarget::Interaction { reply, .. } => {
                let mut data = InteractionResponseDataBuilder::new()
                    .embeds(vec![embed.clone()])
                    .components(components.to_vec());
                if self.ephemeral {
                    data = data.flags(MessageFlags::EPHEMERAL);
                }

                let response = InteractionResponse {
                    kind: InteractionResponseType::ChannelMessageWithSource,
                    data: Some(data.build()),
                };

                self.http
                    .interaction(reply.application_id)
                    .create_response(reply.interaction_id, &reply.token, &response)
                    .await?;

                SentMessage::Interaction {
                    application_id: reply.application_id,
                    token: reply.token.clone(),
                }
            }
        };

        self.sent = Some(sent);
        Ok(())
    }

    async fn update(
        &self,
        reply: &ReplyHandle,
        embed: &Embed,
        components: &[Component],
    ) -> anyhow::Result<()> {
        let response = InteractionResponse {
            kind: InteractionResponseType::UpdateMessage,
            data: Some(
                InteractionResponseDataBuilder::new()
                    .embeds(vec![embed.clone()])
                    .components(components.to_vec())
                    .build(),
            ),
        };

        self.http
            .interaction(reply.application_id)
            .create_response(reply.interaction_id, &reply.token, &response)
            .await?;

        Ok(())
    }

    async fn acknowledge(&self, reply: &ReplyHandle) -> anyhow::Result<()> {
        let response = InteractionResponse {
            kind: InteractionResponseType::DeferredUpdateMessage,
            data: None,
        };

        self.http
            .interaction(reply.application_id)
            .create_response(reply.interaction_id, &reply.token, &response)
            .await?;

        Ok(())
    }

    async fn reject(&self, reply: &ReplyHandle, notice: &str) -> anyhow::Result<()> {
        let response = InteractionResponse {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(
                InteractionResponseDataBuilder::new()
                    .content(notice)
                    .flags(MessageFlags::EPHEMERAL)
                    .build(),
            ),
        };

        self.http
            .interaction(reply.application_id)
            .create_response(reply.interaction_id, &reply.token, &response)
            .await?;

        Ok(())
    }

    async fn strip(&self, embed: &Embed) -> anyhow::Result<()> {
        let empty_components: [Component; 0] = [];

        match self.sent()? {
            SentMessage::Channel {
                channel_id,
                message_id,
            } => {
                self.http
                    .update_message(*channel_id, *message_id)
                    .embeds(Some(slice::from_ref(embed)))
                    .components(Some(&empty_components))
                    .await?;
            }
            SentMessage::Interaction {
                application_id,
                token,
            } => {
                self.http
                    .interaction(*application_id)
                    .update_response(token)
                    .embeds(Some(slice::from_ref(embed)))
                    .components(Some(&empty_components))
                    .await?;
            }
        }

        Ok(())
    }

    async fn delete(&self) -> anyhow::Result<()> {
        match self.sent()? {
            SentMessage::Channel {
                channel_id,
                message_id,
            } => {
                self.http.delete_message(*channel_id, *message_id).await?;
            }
            SentMessage::Interaction {
                application_id,
                token,
            } => {
                self.http
                    .interaction(*application_id)
                    .delete_response(token)
                    .await?;
            }
        }

        Ok(())
    }
}
