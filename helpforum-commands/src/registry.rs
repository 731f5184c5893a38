use twilight_http::Client;
use twilight_model::{
    application::command::{Command, CommandType},
    id::{Id, marker::GuildMarker},
};
use twilight_util::builder::command::{CommandBuilder, StringBuilder};

use crate::help::{close, topic};
use helpforum_core::tags::ForumTags;

/// Longest thread name Discord accepts.
const THREAD_NAME_MAX_LENGTH: u16 = 100;

/// Slash command definitions, with `/topic` choices taken from the tag snapshot.
pub fn command_definitions(tags: &ForumTags) -> Vec<Command> {
    let close = CommandBuilder::new(close::META.name, close::META.desc, CommandType::ChatInput)
        .build();

    let mut topic =
        CommandBuilder::new(topic::META.name, topic::META.desc, CommandType::ChatInput).option(
            StringBuilder::new(topic::NAME_OPTION, "The thread's topic.")
                .max_length(THREAD_NAME_MAX_LENGTH)
                .build(),
        );

    if !tags.topics().is_empty() {
        let choices = tags
            .topics()
            .iter()
            .map(|choice| (choice.display(), choice.key.clone()));
        topic = topic.option(
            StringBuilder::new(topic::TAG_OPTION, "The emoji to use for the topic.")
                .choices(choices)
                .build(),
        );
    }

    vec![close, topic.build()]
}

/// Mention for the registered `/close` command, or plain text when it has no id.
pub fn close_command_mention(commands: &[Command]) -> String {
    commands
        .iter()
        .find(|command| command.name == close::META.name)
        .and_then(|command| command.id)
        .map(|id| format!("</{}:{}>", close::META.name, id.get()))
        .unwrap_or_else(|| format!("`/{}`", close::META.name))
}

/// Register the slash commands once at startup.
///
/// Commands go to `guild_id` when set, otherwise they are registered globally.
/// Returns the mention used for `/close` in welcome messages.
pub async fn register_commands(
    http: &Client,
    guild_id: Option<Id<GuildMarker>>,
    tags: &ForumTags,
) -> anyhow::Result<String> {
    let application_id = http.current_user_application().await?.model().await?.id;
    let interaction = http.interaction(application_id);
    let definitions = command_definitions(tags);

    let registered = match guild_id {
        Some(guild_id) => {
            interaction
                .set_guild_commands(guild_id, &definitions)
                .await?
                .model()
                .await?
        }
        None => {
            interaction
                .set_global_commands(&definitions)
                .await?
                .model()
                .await?
        }
    };

    Ok(close_command_mention(&registered))
}
