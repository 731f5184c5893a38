use std::time::Duration;

use async_trait::async_trait;
use twilight_model::{
    channel::message::{component::Component, embed::Embed},
    id::{
        Id,
        marker::{ChannelMarker, GuildMarker, MessageMarker, RoleMarker, UserMarker},
    },
};

use crate::model::{Actor, GuildProfile, HelpThread, ThreadEdit};

/// Chat platform operations the help forum lifecycle depends on.
///
/// Each call is a single attempt; implementations must not retry.
#[async_trait]
pub trait ForumPlatform: Send + Sync {
    /// Current state of a thread, `None` when the channel is not a thread.
    async fn fetch_thread(&self, thread_id: Id<ChannelMarker>)
    -> anyhow::Result<Option<HelpThread>>;

    /// Most recent message in a channel, read from history.
    async fn latest_message_id(
        &self,
        channel_id: Id<ChannelMarker>,
    ) -> anyhow::Result<Option<Id<MessageMarker>>>;

    async fn send_embed(
        &self,
        channel_id: Id<ChannelMarker>,
        embed: Embed,
        components: Vec<Component>,
    ) -> anyhow::Result<Id<MessageMarker>>;

    /// Ping a role and delete the ping once `ttl` has elapsed.
    async fn send_transient_role_mention(
        &self,
        channel_id: Id<ChannelMarker>,
        role_id: Id<RoleMarker>,
        ttl: Duration,
    ) -> anyhow::Result<()>;

    async fn pin_message(
        &self,
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
    ) -> anyhow::Result<()>;

    async fn edit_thread(&self, thread_id: Id<ChannelMarker>, edit: ThreadEdit)
    -> anyhow::Result<()>;

    /// Deliver an embed privately. Callers treat failures as undeliverable.
    async fn send_direct_embed(&self, user_id: Id<UserMarker>, embed: Embed)
    -> anyhow::Result<()>;

    /// Resolve a user's display identity, falling back to a placeholder.
    async fn user_actor(&self, user_id: Id<UserMarker>) -> Actor;

    async fn guild_profile(&self, guild_id: Id<GuildMarker>) -> Option<GuildProfile>;
}
