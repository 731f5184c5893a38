//! Startup snapshot of the forum's tags and the topic choices derived from it.
//!
//! The snapshot is taken once when the bot starts. Tags added to the forum
//! afterwards only show up after a restart.

use twilight_model::{
    channel::{Channel, ChannelType, forum::ForumTag},
    id::{Id, marker::TagMarker},
};

use crate::errors::ConfigError;

/// Discord caps the number of choices on a single command option.
pub const MAX_TOPIC_CHOICES: usize = 25;

/// One tag available on the help forum.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagInfo {
    pub id: Id<TagMarker>,
    pub name: String,
    pub emoji: Option<String>,
    pub moderated: bool,
}

impl TagInfo {
    /// `emoji name`, or just the name when the tag has no emoji.
    pub fn label(&self) -> String {
        match self.emoji.as_deref() {
            Some(emoji) => format!("{emoji} {}", self.name),
            None => self.name.clone(),
        }
    }
}

impl From<&ForumTag> for TagInfo {
    fn from(tag: &ForumTag) -> Self {
        let emoji = tag
            .emoji_name
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| tag.emoji_id.map(|id| format!("<:_:{}>", id.get())));

        Self {
            id: tag.id,
            name: tag.name.clone(),
            emoji,
            moderated: tag.moderated,
        }
    }
}

/// A moderated tag the thread owner may toggle with `/topic`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TopicChoice {
    /// Emoji used as the stable option value.
    pub key: String,
    pub tag_name: String,
    pub tag_id: Id<TagMarker>,
}

impl TopicChoice {
    /// Name shown in the command option picker.
    pub fn display(&self) -> String {
        format!("{} {}", self.key, self.tag_name)
    }
}

/// All tags of the help forum at startup.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ForumTags {
    tags: Vec<TagInfo>,
    topics: Vec<TopicChoice>,
}

impl ForumTags {
    /// Build the snapshot, excluding the closed marker from topic choices.
    pub fn new(tags: Vec<TagInfo>, closed_tag_id: Id<TagMarker>) -> Self {
        let topics = tags
            .iter()
            .filter(|tag| tag.moderated && tag.id != closed_tag_id)
            .filter_map(|tag| {
                let key = tag.emoji.clone()?;
                Some(TopicChoice {
                    key,
                    tag_name: tag.name.clone(),
                    tag_id: tag.id,
                })
            })
            .take(MAX_TOPIC_CHOICES)
            .collect();

        Self { tags, topics }
    }

    /// Build the snapshot from the fetched help channel.
    pub fn from_forum(
        channel: &Channel,
        closed_tag_id: Id<TagMarker>,
    ) -> Result<Self, ConfigError> {
        if channel.kind != ChannelType::GuildForum {
            return Err(ConfigError::NotAForum(channel.id));
        }

        let tags = channel
            .available_tags
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(TagInfo::from)
            .collect();

        Ok(Self::new(tags, closed_tag_id))
    }

    pub fn get(&self, tag_id: Id<TagMarker>) -> Option<&TagInfo> {
        self.tags.iter().find(|tag| tag.id == tag_id)
    }

    pub fn topics(&self) -> &[TopicChoice] {
        &self.topics
    }

    pub fn topic(&self, key: &str) -> Option<&TopicChoice> {
        self.topics.iter().find(|choice| choice.key == key)
    }

    /// Human readable list of tags, `None` when there is nothing to show.
    pub fn summary<'a, I>(&self, tag_ids: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a Id<TagMarker>>,
    {
        let labels: Vec<String> = tag_ids
            .into_iter()
            .map(|id| match self.get(*id) {
                Some(tag) => tag.label(),
                None => format!("Tag {}", id.get()),
            })
            .collect();

        (!labels.is_empty()).then(|| labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: u64, name: &str, emoji: Option<&str>, moderated: bool) -> TagInfo {
        TagInfo {
            id: Id::new(id),
            name: name.to_owned(),
            emoji: emoji.map(ToOwned::to_owned),
            moderated,
        }
    }

    fn snapshot() -> ForumTags {
        ForumTags::new(
            vec![
                tag(1, "Bug", Some("🐛"), true),
                tag(2, "Closed", Some("❌"), true),
                tag(3, "Question", Some("❓"), false),
                tag(4, "Discussion", None, true),
                tag(5, "Rust", Some("🦀"), true),
            ],
            Id::new(2),
        )
    }

    #[test]
    fn topics_are_moderated_emoji_tags_without_closed_marker() {
        let tags = snapshot();
        let keys: Vec<&str> = tags.topics().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["🐛", "🦀"]);
        assert_eq!(tags.topic("🦀").map(|c| c.tag_id), Some(Id::new(5)));
        assert_eq!(tags.topic("❌"), None);
        assert_eq!(tags.topics()[0].display(), "🐛 Bug");
    }

    #[test]
    fn summary_uses_labels_and_handles_unknown_tags() {
        let tags = snapshot();
        let ids = [Id::new(1), Id::new(4), Id::new(99)];
        assert_eq!(
            tags.summary(ids.iter()).as_deref(),
            Some("🐛 Bug, Discussion, Tag 99")
        );
        assert_eq!(tags.summary(std::iter::empty::<&Id<TagMarker>>()), None);
    }

    #[test]
    fn topic_choices_are_capped() {
        let many = (1..=40)
            .map(|id| tag(id, &format!("t{id}"), Some(&format!("e{id}")), true))
            .collect();
        let tags = ForumTags::new(many, Id::new(999));
        assert_eq!(tags.topics().len(), MAX_TOPIC_CHOICES);
    }
}
