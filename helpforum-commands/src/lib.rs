pub mod help;
/// Slash command definitions and startup registration.
pub mod registry;

use twilight_model::{
    application::interaction::InteractionData,
    gateway::payload::incoming::{
        InteractionCreate, MessageCreate, ThreadCreate, ThreadMembersUpdate,
    },
};

use helpforum_core::{Context, notices::CLOSE_BUTTON_CUSTOM_ID};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum InteractionRoute {
    CloseCommand,
    TopicCommand,
    CloseButton,
}

fn route_command(name: &str) -> Option<InteractionRoute> {
    const ROUTES: [(&str, InteractionRoute); 2] = [
        (help::close::META.name, InteractionRoute::CloseCommand),
        (help::topic::META.name, InteractionRoute::TopicCommand),
    ];

    ROUTES
        .into_iter()
        .find_map(|(command, route)| (command == name).then_some(route))
}

fn route_component(custom_id: &str) -> Option<InteractionRoute> {
    const ROUTES: [(&str, InteractionRoute); 1] =
        [(CLOSE_BUTTON_CUSTOM_ID, InteractionRoute::CloseButton)];

    ROUTES
        .into_iter()
        .find_map(|(id, route)| (id == custom_id).then_some(route))
}

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
}

pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<()> {
    let route = match interaction.data.as_ref() {
        Some(InteractionData::ApplicationCommand(data)) => route_command(&data.name),
        Some(InteractionData::MessageComponent(data)) => route_component(&data.custom_id),
        _ => None,
    };

    let Some(route) = route else {
        return Ok(());
    };

    match route {
        InteractionRoute::CloseCommand => help::close::run(ctx, interaction).await?,
        InteractionRoute::TopicCommand => help::topic::run(ctx, interaction).await?,
        InteractionRoute::CloseButton => {
            let _handled = help::close_button::handle_interaction(ctx, interaction).await?;
        }
    }

    Ok(())
}

pub async fn handle_thread_create(ctx: Context, event: Box<ThreadCreate>) -> anyhow::Result<()> {
    help::events::handle_thread_create(ctx, event).await
}

pub async fn handle_thread_members_update(
    ctx: Context,
    event: Box<ThreadMembersUpdate>,
) -> anyhow::Result<()> {
    help::events::handle_thread_members_update(ctx, event).await
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    help::events::handle_message(ctx, msg).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_slash_commands_by_name() {
        assert_eq!(route_command("close"), Some(InteractionRoute::CloseCommand));
        assert_eq!(route_command("topic"), Some(InteractionRoute::TopicCommand));
        assert_eq!(route_command("ban"), None);
    }

    #[test]
    fn routes_every_close_button_through_one_id() {
        assert_eq!(
            route_component("help:thread_close"),
            Some(InteractionRoute::CloseButton)
        );
        assert_eq!(route_component("help:thread_close:123"), None);
        assert_eq!(route_component("pg:help:next:2:3:1:0"), None);
    }
}
