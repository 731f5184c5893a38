use twilight_http::Client;
use twilight_model::{
    channel::message::{MessageFlags, component::Component},
    gateway::payload::incoming::InteractionCreate,
    http::interaction::{InteractionResponse, InteractionResponseType},
    id::{Id, marker::ChannelMarker},
};
use twilight_util::builder::InteractionResponseDataBuilder;

use helpforum_core::model::Actor;

/// Respond to an interaction with a message only the invoker can see.
pub async fn respond_ephemeral_message(
    http: &Client,
    interaction: &InteractionCreate,
    content: &str,
) -> anyhow::Result<()> {
    let response = InteractionResponse {
        kind: InteractionResponseType::ChannelMessageWithSource,
        data: Some(
            InteractionResponseDataBuilder::new()
                .content(content)
                .flags(MessageFlags::EPHEMERAL)
                .build(),
        ),
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Respond to a component interaction by swapping the message components.
pub async fn respond_update_components(
    http: &Client,
    interaction: &InteractionCreate,
    components: &[Component],
) -> anyhow::Result<()> {
    let response = InteractionResponse {
        kind: InteractionResponseType::UpdateMessage,
        data: Some(
            InteractionResponseDataBuilder::new()
                .components(components.to_vec())
                .build(),
        ),
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Identity of whoever triggered the interaction.
pub fn interaction_actor(interaction: &InteractionCreate) -> Option<Actor> {
    interaction
        .author()
        .map(|user| Actor::new(user.id, user.name.clone()))
}

/// Channel the interaction was triggered in.
pub fn interaction_channel_id(interaction: &InteractionCreate) -> Option<Id<ChannelMarker>> {
    interaction.channel.as_ref().map(|channel| channel.id)
}
