use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use twilight_http::Client;
use twilight_model::{
    channel::message::{AllowedMentions, component::Component, embed::Embed},
    id::{
        Id,
        marker::{ChannelMarker, GuildMarker, MessageMarker, RoleMarker, UserMarker},
    },
};

use helpforum_core::{
    model::{Actor, GuildProfile, HelpThread, ThreadEdit},
    platform::ForumPlatform,
};

use crate::cleanup::schedule_message_delete;

/// `ForumPlatform` backed by the Discord HTTP API.
#[derive(Clone)]
pub struct TwilightPlatform {
    http: Arc<Client>,
}

impl TwilightPlatform {
    pub fn new(http: Arc<Client>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ForumPlatform for TwilightPlatform {
    async fn fetch_thread(
        &self,
        thread_id: Id<ChannelMarker>,
    ) -> anyhow::Result<Option<HelpThread>> {
        let channel = self.http.channel(thread_id).await?.model().await?;
        Ok(HelpThread::from_channel(&channel))
    }

    async fn latest_message_id(
        &self,
        channel_id: Id<ChannelMarker>,
    ) -> anyhow::Result<Option<Id<MessageMarker>>> {
        let messages = self
            .http
            .channel_messages(channel_id)
            .limit(1)
            .await?
            .model()
            .await?;

        Ok(messages.first().map(|message| message.id))
    }

    async fn send_embed(
        &self,
        channel_id: Id<ChannelMarker>,
        embed: Embed,
        components: Vec<Component>,
    ) -> anyhow::Result<Id<MessageMarker>> {
        let message = self
            .http
            .create_message(channel_id)
            .embeds(&[embed])
            .components(&components)
            .await?
            .model()
            .await?;

        Ok(message.id)
    }

    async fn send_transient_role_mention(
        &self,
        channel_id: Id<ChannelMarker>,
        role_id: Id<RoleMarker>,
        ttl: Duration,
    ) -> anyhow::Result<()> {
        let allowed_mentions = AllowedMentions {
            roles: vec![role_id],
            ..AllowedMentions::default()
        };
        let content = format!("<@&{}>", role_id.get());

        let message = self
            .http
            .create_message(channel_id)
            .content(&content)
            .allowed_mentions(Some(&allowed_mentions))
            .await?
            .model()
            .await?;

        schedule_message_delete(Arc::clone(&self.http), channel_id, message.id, ttl);

        Ok(())
    }

    async fn pin_message(
        &self,
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
    ) -> anyhow::Result<()> {
        self.http.create_pin(channel_id, message_id).await?;
        Ok(())
    }

    async fn edit_thread(
        &self,
        thread_id: Id<ChannelMarker>,
        edit: ThreadEdit,
    ) -> anyhow::Result<()> {
        let mut request = self.http.update_thread(thread_id);

        if let Some(name) = edit.name.as_deref() {
            request = request.name(name);
        }
        if let Some(applied_tags) = edit.applied_tags.as_deref() {
            request = request.applied_tags(Some(applied_tags));
        }
        if let Some(archived) = edit.archived {
            request = request.archived(archived);
        }
        if let Some(locked) = edit.locked {
            request = request.locked(locked);
        }

        request.await?;
        Ok(())
    }

    async fn send_direct_embed(
        &self,
        user_id: Id<UserMarker>,
        embed: Embed,
    ) -> anyhow::Result<()> {
        let channel = self
            .http
            .create_private_channel(user_id)
            .await?
            .model()
            .await?;

        self.http
            .create_message(channel.id)
            .embeds(&[embed])
            .await?;

        Ok(())
    }

    async fn user_actor(&self, user_id: Id<UserMarker>) -> Actor {
        let user = match self.http.user(user_id).await {
            Ok(response) => match response.model().await {
                Ok(user) => user,
                Err(_) => return Actor::unknown(user_id),
            },
            Err(_) => return Actor::unknown(user_id),
        };

        Actor::new(user.id, user.name)
    }

    async fn guild_profile(&self, guild_id: Id<GuildMarker>) -> Option<GuildProfile> {
        let guild = self.http.guild(guild_id).await.ok()?.model().await.ok()?;
        let icon_url = guild.icon.map(|icon| {
            format!(
                "https://cdn.discordapp.com/icons/{}/{}.png?size=128",
                guild_id.get(),
                icon
            )
        });

        Some(GuildProfile {
            name: guild.name,
            icon_url,
        })
    }
}
