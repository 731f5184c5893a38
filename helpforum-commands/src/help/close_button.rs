use twilight_model::gateway::payload::incoming::InteractionCreate;

use helpforum_core::{
    Context,
    errors::Denial,
    model::CloseMethod,
    notices::close_button_components,
};
use helpforum_utils::interaction::{
    interaction_actor, interaction_channel_id, respond_ephemeral_message,
    respond_update_components,
};
use helpforum_utils::permissions::member_roles;

/// Handle a press of the Close button on a welcome message.
///
/// Dispatch is keyed on the button's custom id alone, so nothing is kept per
/// message between presses.
pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<bool> {
    let http = &ctx.http;
    let forum = &ctx.forum;

    let Some(actor) = interaction_actor(&interaction) else {
        respond_ephemeral_message(http, &interaction, "Unable to determine interaction user.")
            .await?;
        return Ok(true);
    };

    let thread = match interaction_channel_id(&interaction) {
        Some(channel_id) => forum.fetch_help_thread(channel_id).await?,
        None => None,
    };

    let thread = match forum.authorize_close(
        thread,
        actor.id,
        member_roles(&interaction),
        Denial::CloseNotAllowed,
    ) {
        Ok(thread) => thread,
        Err(denial) => {
            respond_ephemeral_message(http, &interaction, &denial.to_string()).await?;
            return Ok(true);
        }
    };

    respond_update_components(http, &interaction, &close_button_components(true)).await?;
    forum
        .close_thread(CloseMethod::Button, &thread, &actor)
        .await?;

    Ok(true)
}
