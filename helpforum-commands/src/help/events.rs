use std::sync::Arc;

use tracing::debug;
use twilight_model::{
    channel::message::MessageType,
    gateway::payload::incoming::{MessageCreate, ThreadCreate, ThreadMembersUpdate},
};

use helpforum_core::{
    Context,
    lifecycle::should_auto_close,
    model::{CloseMethod, HelpThread},
};
use helpforum_utils::cleanup::{PIN_NOTICE_TTL, schedule_message_delete};

/// Bootstrap threads newly created in the help forum.
pub async fn handle_thread_create(ctx: Context, event: Box<ThreadCreate>) -> anyhow::Result<()> {
    let channel = &event.0;

    // Also sent when the bot is added to an existing thread.
    if channel.newly_created == Some(false) {
        return Ok(());
    }

    let Some(thread) = HelpThread::from_channel(channel) else {
        return Ok(());
    };

    if !ctx.forum.is_help_thread(&thread) {
        return Ok(());
    }

    ctx.forum.bootstrap_thread(&thread).await
}

/// Close a help thread when its owner leaves it.
pub async fn handle_thread_members_update(
    ctx: Context,
    event: Box<ThreadMembersUpdate>,
) -> anyhow::Result<()> {
    if event.removed_member_ids.is_empty() {
        return Ok(());
    }

    let Some(thread) = ctx.forum.fetch_help_thread(event.id).await? else {
        return Ok(());
    };

    let help_channel_id = ctx.forum.settings().help_channel_id;
    let owner_left = event
        .removed_member_ids
        .iter()
        .any(|member_id| should_auto_close(&thread, *member_id, help_channel_id));

    if !owner_left {
        return Ok(());
    }

    let system = ctx.forum.system_actor().clone();
    ctx.forum
        .close_thread(CloseMethod::OwnerLeft, &thread, &system)
        .await?;

    Ok(())
}

/// Remove the "pinned a message" notice the welcome pin leaves behind.
pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.kind != MessageType::ChannelMessagePinned {
        return Ok(());
    }

    if ctx.forum.fetch_help_thread(msg.channel_id).await?.is_none() {
        return Ok(());
    }

    debug!(channel_id = msg.channel_id.get(), "scheduling pin notice cleanup");
    schedule_message_delete(Arc::clone(&ctx.http), msg.channel_id, msg.id, PIN_NOTICE_TTL);

    Ok(())
}
