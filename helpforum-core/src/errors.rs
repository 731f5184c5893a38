use twilight_model::id::{Id, marker::ChannelMarker};

/// Startup configuration failures. All of them abort the bot.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("the following environmental variables must be set: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("environmental variable {name} must be a non-zero numeric id, got {value:?}")]
    InvalidId { name: &'static str, value: String },

    #[error("the channel id provided ({0}) is not a forum channel")]
    NotAForum(Id<ChannelMarker>),
}

/// A request that was refused without touching the thread.
///
/// The `Display` text is shown to the invoking user.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Denial {
    #[error("This command is only usable in help threads.")]
    NotInHelpThread,

    #[error("This thread is already closed.")]
    AlreadyClosed,

    #[error("You are not allowed to close this thread.")]
    CloseNotAllowed,

    #[error("You do not have authorization to close this thread.")]
    CloseNotAuthorized,

    #[error("You do not have authorization to change this thread's topic.")]
    TopicNotAuthorized,

    #[error("That topic tag is not available.")]
    UnknownTopic,
}
