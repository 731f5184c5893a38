use twilight_model::{
    application::interaction::InteractionData,
    gateway::payload::incoming::InteractionCreate,
};

use crate::CommandMeta;
use helpforum_core::{Context, errors::Denial};
use helpforum_utils::interaction::{
    interaction_actor, interaction_channel_id, respond_ephemeral_message,
};
use helpforum_utils::parse::string_option;

pub const META: CommandMeta = CommandMeta {
    name: "topic",
    desc: "Sets the topic of a help thread.",
};

pub const NAME_OPTION: &str = "name";
pub const TAG_OPTION: &str = "tag";

/// Rename the help thread and/or toggle one of its topic tags.
pub async fn run(ctx: Context, interaction: Box<InteractionCreate>) -> anyhow::Result<()> {
    let http = &ctx.http;
    let forum = &ctx.forum;

    let Some(InteractionData::ApplicationCommand(data)) = interaction.data.as_ref() else {
        return Ok(());
    };

    let Some(actor) = interaction_actor(&interaction) else {
        respond_ephemeral_message(http, &interaction, "Unable to determine interaction user.")
            .await?;
        return Ok(());
    };

    let thread = match interaction_channel_id(&interaction) {
        Some(channel_id) => forum.fetch_help_thread(channel_id).await?,
        None => None,
    };

    let Some(thread) = thread else {
        let denial = Denial::NotInHelpThread.to_string();
        respond_ephemeral_message(http, &interaction, &denial).await?;
        return Ok(());
    };

    if thread.is_closed() {
        let denial = Denial::AlreadyClosed.to_string();
        respond_ephemeral_message(http, &interaction, &denial).await?;
        return Ok(());
    }

    let new_name = string_option(&data.options, NAME_OPTION);
    let tag_key = string_option(&data.options, TAG_OPTION);

    let outcome = forum
        .change_topic(&thread, actor.id, new_name, tag_key)
        .await?;
    respond_ephemeral_message(http, &interaction, &outcome.message()).await?;

    Ok(())
}
