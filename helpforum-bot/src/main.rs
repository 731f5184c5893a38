use std::future::Future;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;

use helpforum_commands::registry::register_commands;
use helpforum_commands::{
    handle_interaction, handle_message, handle_thread_create, handle_thread_members_update,
};
use helpforum_core::{
    Context,
    config::Config,
    lifecycle::{HelpForum, HelpSettings},
    model::Actor,
    tags::ForumTags,
};
use helpforum_utils::platform::TwilightPlatform;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Every identifier is required; a missing one stops the bot here.
    let config = Config::from_env()?;

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(config.token.clone()));

    // Topic choices are a snapshot of the forum's tags at startup.
    let forum_channel = http.channel(config.help_channel_id).await?.model().await?;
    let tags = ForumTags::from_forum(&forum_channel, config.closed_tag_id)?;
    info!(topics = tags.topics().len(), "help forum tags loaded");

    let close_mention = register_commands(&http, config.guild_id, &tags).await?;
    info!("slash commands registered");

    let current_user = http.current_user().await?.model().await?;
    let system = Actor::new(current_user.id, current_user.name);

    let platform = Arc::new(TwilightPlatform::new(Arc::clone(&http)));
    let forum = HelpForum::new(platform, HelpSettings::from(&config), tags, system)
        .with_close_command_mention(close_mention);
    let ctx = Context::new(Arc::clone(&http), Arc::new(forum));

    // GUILD_MEMBERS is needed to hear about other members leaving threads.
    let intents = Intents::GUILDS | Intents::GUILD_MEMBERS | Intents::GUILD_MESSAGES;

    // A shard is one Gateway WebSocket connection to Discord
    let mut shard = Shard::new(ShardId::new(0, 1), config.token.clone(), intents);

    info!("help forum bot is connecting...");

    let wanted = EventTypeFlags::READY
        | EventTypeFlags::INTERACTION_CREATE
        | EventTypeFlags::MESSAGE_CREATE
        | EventTypeFlags::THREAD_CREATE
        | EventTypeFlags::THREAD_MEMBERS_UPDATE;

    while let Some(item) = shard.next_event(wanted).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(_) => {
                info!("help forum bot is ready");
            }
            Event::InteractionCreate(interaction) => {
                spawn_handler("interaction", handle_interaction(ctx.clone(), interaction));
            }
            Event::MessageCreate(msg) => {
                spawn_handler("message", handle_message(ctx.clone(), msg));
            }
            Event::ThreadCreate(thread) => {
                spawn_handler("thread_create", handle_thread_create(ctx.clone(), thread));
            }
            Event::ThreadMembersUpdate(update) => {
                spawn_handler(
                    "thread_members_update",
                    handle_thread_members_update(ctx.clone(), Box::new(update)),
                );
            }
            _ => {} // Ignore unused events
        }
    }

    Ok(()) // Return Success, shutdown cleanly
}

/// Run one trigger as its own task so a slow platform call never blocks the gateway.
fn spawn_handler<F>(handler: &'static str, task: F)
where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(source) = task.await {
            error!(?source, handler, "event handler failed");
        }
    });
}
