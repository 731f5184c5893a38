//! Opening, annotating and closing help threads.

use std::{sync::Arc, time::Duration};

use tracing::{debug, info};
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, RoleMarker, TagMarker, UserMarker},
};

use crate::{
    config::Config,
    errors::Denial,
    model::{Actor, CloseMethod, CloseOutcome, HelpThread, ThreadEdit},
    notices::{
        close_button_components, closed_direct_embed, closed_log_embed, closing_notice_embed,
        created_log_embed, welcome_embed,
    },
    platform::ForumPlatform,
    tags::ForumTags,
};

/// How long the helper role ping stays in a new thread.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Identifiers the lifecycle needs from the configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HelpSettings {
    pub help_channel_id: Id<ChannelMarker>,
    pub log_channel_id: Id<ChannelMarker>,
    pub notification_role_id: Id<RoleMarker>,
    pub mod_role_id: Id<RoleMarker>,
    pub closed_tag_id: Id<TagMarker>,
}

impl From<&Config> for HelpSettings {
    fn from(config: &Config) -> Self {
        Self {
            help_channel_id: config.help_channel_id,
            log_channel_id: config.log_channel_id,
            notification_role_id: config.notification_role_id,
            mod_role_id: config.mod_role_id,
            closed_tag_id: config.closed_tag_id,
        }
    }
}

/// Result of a `/topic` request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopicOutcome {
    Denied(Denial),
    Unchanged,
    Changed(String),
}

impl TopicOutcome {
    /// Reply shown to the invoking user.
    pub fn message(&self) -> String {
        match self {
            Self::Denied(denial) => denial.to_string(),
            Self::Unchanged => "Changed nothing.".to_owned(),
            Self::Changed(summary) => summary.clone(),
        }
    }
}

/// Whether a departing member should close the thread they left.
pub fn should_auto_close(
    thread: &HelpThread,
    departed: Id<UserMarker>,
    help_channel_id: Id<ChannelMarker>,
) -> bool {
    thread.parent_id == Some(help_channel_id) && !thread.is_closed() && thread.owner_id == departed
}

/// Owns the rules for help threads in one forum channel.
pub struct HelpForum {
    platform: Arc<dyn ForumPlatform>,
    settings: HelpSettings,
    tags: ForumTags,
    system: Actor,
    close_command_mention: String,
}

impl HelpForum {
    pub fn new(
        platform: Arc<dyn ForumPlatform>,
        settings: HelpSettings,
        tags: ForumTags,
        system: Actor,
    ) -> Self {
        Self {
            platform,
            settings,
            tags,
            system,
            close_command_mention: "`/close`".to_owned(),
        }
    }

    /// Use a clickable command mention in welcome messages.
    pub fn with_close_command_mention(mut self, mention: impl Into<String>) -> Self {
        self.close_command_mention = mention.into();
        self
    }

    pub fn settings(&self) -> &HelpSettings {
        &self.settings
    }

    /// Identity used for closes nobody triggered directly.
    pub fn system_actor(&self) -> &Actor {
        &self.system
    }

    pub fn is_help_thread(&self, thread: &HelpThread) -> bool {
        thread.parent_id == Some(self.settings.help_channel_id)
    }

    /// Fetch a thread, keeping it only when it belongs to the help forum.
    pub async fn fetch_help_thread(
        &self,
        thread_id: Id<ChannelMarker>,
    ) -> anyhow::Result<Option<HelpThread>> {
        let thread = self.platform.fetch_thread(thread_id).await?;
        Ok(thread.filter(|thread| self.is_help_thread(thread)))
    }

    /// Check whether `actor` may close `thread`.
    ///
    /// `denied` is the refusal used when the actor is neither the owner nor a
    /// moderator, so the button and the command can word it differently.
    pub fn authorize_close(
        &self,
        thread: Option<HelpThread>,
        actor_id: Id<UserMarker>,
        actor_roles: &[Id<RoleMarker>],
        denied: Denial,
    ) -> Result<HelpThread, Denial> {
        let Some(thread) = thread.filter(|thread| self.is_help_thread(thread)) else {
            return Err(Denial::NotInHelpThread);
        };

        if thread.is_closed() {
            return Err(Denial::AlreadyClosed);
        }

        if thread.owner_id == actor_id || actor_roles.contains(&self.settings.mod_role_id) {
            Ok(thread)
        } else {
            Err(denied)
        }
    }

    /// Close a thread. A thread that is already closed is left alone.
    pub async fn close_thread(
        &self,
        method: CloseMethod,
        thread: &HelpThread,
        closed_by: &Actor,
    ) -> anyhow::Result<CloseOutcome> {
        if thread.is_closed() {
            debug!(thread_id = thread.id.get(), "thread already closed");
            return Ok(CloseOutcome::AlreadyClosed);
        }

        let latest = match thread.last_message_id {
            Some(message_id) => Some(message_id),
            None => self.platform.latest_message_id(thread.id).await?,
        };
        let jump_url = match latest {
            Some(message_id) => thread.message_jump_url(message_id),
            None => thread.jump_url(),
        };

        self.platform
            .send_embed(thread.id, closing_notice_embed()?, Vec::new())
            .await?;

        let closed_tag_id = self.settings.closed_tag_id;
        if !thread.has_tag(closed_tag_id) {
            // Editing tags reopens an archived thread, so tags go first.
            let mut applied_tags = thread.applied_tags.clone();
            applied_tags.push(closed_tag_id);
            self.platform
                .edit_thread(
                    thread.id,
                    ThreadEdit {
                        applied_tags: Some(applied_tags),
                        ..ThreadEdit::default()
                    },
                )
                .await?;
        }

        self.platform
            .edit_thread(thread.id, ThreadEdit::archive_and_lock())
            .await?;

        let owner = self.platform.user_actor(thread.owner_id).await;
        let log = closed_log_embed(thread, &owner, closed_by, method)?;
        self.platform
            .send_embed(self.settings.log_channel_id, log, Vec::new())
            .await?;

        info!(
            thread_id = thread.id.get(),
            owner_id = owner.id.get(),
            closed_by = closed_by.id.get(),
            %method,
            "help thread closed"
        );

        let guild = self.platform.guild_profile(thread.guild_id).await;
        let tag_summary = self.tags.summary(
            thread
                .applied_tags
                .iter()
                .filter(|tag_id| **tag_id != closed_tag_id),
        );
        let direct = closed_direct_embed(
            guild.as_ref().map(|guild| guild.name.as_str()),
            guild.as_ref().and_then(|guild| guild.icon_url.as_deref()),
            &thread.name,
            tag_summary.as_deref(),
            &jump_url,
        )?;

        if let Err(source) = self.platform.send_direct_embed(thread.owner_id, direct).await {
            debug!(?source, owner_id = thread.owner_id.get(), "closing DM not delivered");
        }

        Ok(CloseOutcome::Closed)
    }

    /// Announce a freshly created thread and post its Close button.
    pub async fn bootstrap_thread(&self, thread: &HelpThread) -> anyhow::Result<()> {
        let tag_summary = self.tags.summary(thread.applied_tags.iter());
        let owner = self.platform.user_actor(thread.owner_id).await;

        let log = created_log_embed(thread, tag_summary.as_deref(), &owner)?;
        self.platform
            .send_embed(self.settings.log_channel_id, log, Vec::new())
            .await?;

        let welcome = welcome_embed(&self.close_command_mention)?;
        let message_id = self
            .platform
            .send_embed(thread.id, welcome, close_button_components(false))
            .await?;
        self.platform.pin_message(thread.id, message_id).await?;

        self.platform
            .send_transient_role_mention(
                thread.id,
                self.settings.notification_role_id,
                NOTIFICATION_TTL,
            )
            .await?;

        info!(
            thread_id = thread.id.get(),
            owner_id = thread.owner_id.get(),
            "help thread bootstrapped"
        );

        Ok(())
    }

    /// Rename a thread and/or toggle one topic tag, owner only.
    pub async fn change_topic(
        &self,
        thread: &HelpThread,
        actor_id: Id<UserMarker>,
        new_name: Option<&str>,
        toggle_tag_key: Option<&str>,
    ) -> anyhow::Result<TopicOutcome> {
        if thread.owner_id != actor_id {
            return Ok(TopicOutcome::Denied(Denial::TopicNotAuthorized));
        }

        let mut edit = ThreadEdit::default();
        let mut changes: Vec<String> = Vec::new();

        if let Some(name) = new_name.map(str::trim).filter(|name| !name.is_empty())
            && name != thread.name
        {
            edit.name = Some(name.to_owned());
            changes.push("changed the thread name".to_owned());
        }

        if let Some(key) = toggle_tag_key {
            let Some(choice) = self.tags.topic(key) else {
                return Ok(TopicOutcome::Denied(Denial::UnknownTopic));
            };

            if thread.has_tag(choice.tag_id) {
                let remaining = thread
                    .applied_tags
                    .iter()
                    .copied()
                    .filter(|tag_id| *tag_id != choice.tag_id)
                    .collect();
                edit.applied_tags = Some(remaining);
                changes.push(format!("removed the \"{}\" tag", choice.tag_name));
            } else {
                let mut added = thread.applied_tags.clone();
                added.push(choice.tag_id);
                edit.applied_tags = Some(added);
                changes.push(format!("added the \"{}\" tag", choice.tag_name));
            }
        }

        if edit.is_empty() {
            return Ok(TopicOutcome::Unchanged);
        }

        self.platform.edit_thread(thread.id, edit).await?;

        Ok(TopicOutcome::Changed(topic_summary(&changes)))
    }
}

/// Join change descriptions into one capitalized sentence.
fn topic_summary(changes: &[String]) -> String {
    let joined = changes.join(" and ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
