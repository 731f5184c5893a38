use twilight_model::gateway::payload::incoming::InteractionCreate;

use crate::CommandMeta;
use helpforum_core::{Context, errors::Denial, model::CloseMethod};
use helpforum_utils::interaction::{
    interaction_actor, interaction_channel_id, respond_ephemeral_message,
};
use helpforum_utils::permissions::member_roles;

pub const META: CommandMeta = CommandMeta {
    name: "close",
    desc: "Close this help thread.",
};

/// Close the help thread the command was used in.
pub async fn run(ctx: Context, interaction: Box<InteractionCreate>) -> anyhow::Result<()> {
    let http = &ctx.http;
    let forum = &ctx.forum;

    let Some(actor) = interaction_actor(&interaction) else {
        respond_ephemeral_message(http, &interaction, "Unable to determine interaction user.")
            .await?;
        return Ok(());
    };

    let thread = match interaction_channel_id(&interaction) {
        Some(channel_id) => forum.fetch_help_thread(channel_id).await?,
        None => None,
    };

    let thread = match forum.authorize_close(
        thread,
        actor.id,
        member_roles(&interaction),
        Denial::CloseNotAuthorized,
    ) {
        Ok(thread) => thread,
        Err(denial) => {
            respond_ephemeral_message(http, &interaction, &denial.to_string()).await?;
            return Ok(());
        }
    };

    respond_ephemeral_message(http, &interaction, "Closing.").await?;
    forum
        .close_thread(CloseMethod::Command, &thread, &actor)
        .await?;

    Ok(())
}
