use std::fmt;

use twilight_model::{
    channel::{Channel, ChannelType},
    id::{
        Id,
        marker::{ChannelMarker, GuildMarker, MessageMarker, TagMarker, UserMarker},
    },
};

/// Whether a help thread still accepts messages.
///
/// Transitions only go from `Open` to `Closed`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThreadState {
    Open,
    Closed,
}

/// Snapshot of a help thread as last reported by the platform.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HelpThread {
    pub id: Id<ChannelMarker>,
    pub guild_id: Id<GuildMarker>,
    pub parent_id: Option<Id<ChannelMarker>>,
    pub owner_id: Id<UserMarker>,
    pub name: String,
    pub state: ThreadState,
    pub applied_tags: Vec<Id<TagMarker>>,
    pub last_message_id: Option<Id<MessageMarker>>,
}

impl HelpThread {
    /// Build a snapshot from a gateway/HTTP channel.
    ///
    /// Returns `None` for anything that is not a guild thread with an owner.
    pub fn from_channel(channel: &Channel) -> Option<Self> {
        if !matches!(
            channel.kind,
            ChannelType::PublicThread | ChannelType::PrivateThread | ChannelType::AnnouncementThread
        ) {
            return None;
        }

        let closed = channel
            .thread_metadata
            .as_ref()
            .is_some_and(|metadata| metadata.archived || metadata.locked);

        Some(Self {
            id: channel.id,
            guild_id: channel.guild_id?,
            parent_id: channel.parent_id,
            owner_id: channel.owner_id?,
            name: channel.name.clone().unwrap_or_default(),
            state: if closed {
                ThreadState::Closed
            } else {
                ThreadState::Open
            },
            applied_tags: channel.applied_tags.clone().unwrap_or_default(),
            last_message_id: channel.last_message_id.map(|id| Id::new(id.get())),
        })
    }

    pub fn is_closed(&self) -> bool {
        self.state == ThreadState::Closed
    }

    pub fn has_tag(&self, tag_id: Id<TagMarker>) -> bool {
        self.applied_tags.contains(&tag_id)
    }

    /// Link to the thread itself.
    pub fn jump_url(&self) -> String {
        format!(
            "https://discord.com/channels/{}/{}",
            self.guild_id.get(),
            self.id.get()
        )
    }

    /// Link to a specific message inside the thread.
    pub fn message_jump_url(&self, message_id: Id<MessageMarker>) -> String {
        format!("{}/{}", self.jump_url(), message_id.get())
    }

    pub fn mention(&self) -> String {
        format!("<#{}>", self.id.get())
    }
}

/// Someone (or the bot itself) performing an operation on a thread.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Actor {
    pub id: Id<UserMarker>,
    pub name: String,
}

impl Actor {
    pub fn new(id: Id<UserMarker>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Placeholder identity when the user profile could not be fetched.
    pub fn unknown(id: Id<UserMarker>) -> Self {
        Self::new(id, format!("User {}", id.get()))
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.id.get())
    }

    /// `name (id)` form used in audit logs.
    pub fn audit_label(&self) -> String {
        format!("{} ({})", self.name, self.id.get())
    }
}

/// Trigger that caused a thread to close; only used in audit output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CloseMethod {
    Button,
    Command,
    OwnerLeft,
}

impl fmt::Display for CloseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Button => "BUTTON",
            Self::Command => "COMMAND",
            Self::OwnerLeft => "EVENT",
        };
        f.write_str(label)
    }
}

/// Result of a close request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CloseOutcome {
    Closed,
    AlreadyClosed,
}

/// A single thread edit request. Unset fields are left untouched.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ThreadEdit {
    pub name: Option<String>,
    pub applied_tags: Option<Vec<Id<TagMarker>>>,
    pub archived: Option<bool>,
    pub locked: Option<bool>,
}

impl ThreadEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.applied_tags.is_none()
            && self.archived.is_none()
            && self.locked.is_none()
    }

    pub fn archive_and_lock() -> Self {
        Self {
            archived: Some(true),
            locked: Some(true),
            ..Self::default()
        }
    }
}

/// Display data of the guild a thread lives in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuildProfile {
    pub name: String,
    pub icon_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_methods_render_audit_labels() {
        assert_eq!(CloseMethod::Button.to_string(), "BUTTON");
        assert_eq!(CloseMethod::Command.to_string(), "COMMAND");
        assert_eq!(CloseMethod::OwnerLeft.to_string(), "EVENT");
    }

    #[test]
    fn message_links_point_into_the_thread() {
        let thread = HelpThread {
            id: Id::new(20),
            guild_id: Id::new(10),
            parent_id: Some(Id::new(5)),
            owner_id: Id::new(1),
            name: "Old Title".to_owned(),
            state: ThreadState::Open,
            applied_tags: Vec::new(),
            last_message_id: None,
        };

        assert_eq!(thread.jump_url(), "https://discord.com/channels/10/20");
        assert_eq!(
            thread.message_jump_url(Id::new(30)),
            "https://discord.com/channels/10/20/30"
        );
        assert_eq!(thread.mention(), "<#20>");
    }

    #[test]
    fn unknown_actor_falls_back_to_id() {
        let actor = Actor::unknown(Id::new(42));
        assert_eq!(actor.audit_label(), "User 42 (42)");
        assert_eq!(actor.mention(), "<@42>");
    }
}
