//! Embeds and components posted by the help forum.
//!
//! Pure builders; nothing here talks to the platform.

use twilight_model::channel::message::{
    component::{ActionRow, Button, ButtonStyle, Component},
    embed::Embed,
};
use twilight_util::builder::embed::{EmbedBuilder, ImageSource};

use crate::model::{Actor, CloseMethod, HelpThread};

/// Custom id shared by every Close button the bot has ever posted.
pub const CLOSE_BUTTON_CUSTOM_ID: &str = "help:thread_close";

/// Note appended to every closing notice.
pub const THREAD_CLOSING_MESSAGE: &str = "If your question has not been answered or your issue not \
resolved, we suggest taking a look at [Python Discord's Guide to Asking Good Questions]\
(https://www.pythondiscord.com/pages/guides/pydis-guides/asking-good-questions/) \
to get more effective help.";

pub const CLOSED_COLOR: u32 = 0x36_39_3F;
pub const CLOSED_LOG_COLOR: u32 = 0xDD_2E_44;
pub const CREATED_LOG_COLOR: u32 = 0x90_54_30;
pub const WELCOME_COLOR: u32 = 0x2E_CC_71;

/// Embed posted inside a thread when it closes.
pub fn closing_notice_embed() -> anyhow::Result<Embed> {
    Ok(EmbedBuilder::new()
        .title("This thread has now been closed.")
        .description(THREAD_CLOSING_MESSAGE)
        .color(CLOSED_COLOR)
        .validate()?
        .build())
}

/// Audit entry for a closed thread.
pub fn closed_log_embed(
    thread: &HelpThread,
    owner: &Actor,
    closed_by: &Actor,
    method: CloseMethod,
) -> anyhow::Result<Embed> {
    let description = format!(
        "{thread}\n\nHelp thread created by {owner} has been closed by {closer} using **{method}**.\n\n\
         Thread author: `{owner_label}`\n\
         Closed by: `{closer_label}`",
        thread = thread.mention(),
        owner = owner.mention(),
        closer = closed_by.mention(),
        owner_label = owner.audit_label(),
        closer_label = closed_by.audit_label(),
    );

    Ok(EmbedBuilder::new()
        .title(":x: Closed help thread")
        .description(description)
        .color(CLOSED_LOG_COLOR)
        .validate()?
        .build())
}

/// Private copy of the closing notice sent to the thread owner.
pub fn closed_direct_embed(
    guild_name: Option<&str>,
    guild_icon_url: Option<&str>,
    thread_name: &str,
    tag_summary: Option<&str>,
    jump_url: &str,
) -> anyhow::Result<Embed> {
    let title = match guild_name {
        Some(name) => format!("Your help thread in the {name} server has been closed."),
        None => "Your help thread has been closed.".to_owned(),
    };

    let mut description = format!("{THREAD_CLOSING_MESSAGE}\n\nName: **{thread_name}**");
    if let Some(tags) = tag_summary {
        description.push_str(&format!("\nTags: {tags}"));
    }
    description.push_str(&format!(
        "\n\nYou can use [**this link**]({jump_url}) to access the archived thread for future reference."
    ));

    let builder = EmbedBuilder::new()
        .title(title)
        .description(description)
        .color(CLOSED_COLOR);

    let builder = match guild_icon_url {
        Some(url) => builder.thumbnail(ImageSource::url(url.to_owned())?),
        None => builder,
    };

    Ok(builder.validate()?.build())
}

/// Audit entry for a newly created thread.
pub fn created_log_embed(
    thread: &HelpThread,
    tag_summary: Option<&str>,
    owner: &Actor,
) -> anyhow::Result<Embed> {
    let description = format!(
        "{}\n\nTags: {}\nCreated by: `{}`",
        thread.mention(),
        tag_summary.unwrap_or("None"),
        owner.audit_label()
    );

    Ok(EmbedBuilder::new()
        .title("✅ Help thread created")
        .url(thread.jump_url())
        .description(description)
        .color(CREATED_LOG_COLOR)
        .validate()?
        .build())
}

/// First message of every help thread, carrying the Close button.
pub fn welcome_embed(close_command_mention: &str) -> anyhow::Result<Embed> {
    Ok(EmbedBuilder::new()
        .description(format!(
            "You can close the thread with this button or the {close_command_mention} command."
        ))
        .color(WELCOME_COLOR)
        .validate()?
        .build())
}

/// Action row holding the persistent Close button.
pub fn close_button_components(disabled: bool) -> Vec<Component> {
    vec![Component::ActionRow(ActionRow {
        id: None,
        components: vec![Component::Button(Button {
            id: None,
            custom_id: Some(CLOSE_BUTTON_CUSTOM_ID.to_owned()),
            disabled,
            emoji: None,
            label: Some("Close".to_owned()),
            style: ButtonStyle::Danger,
            url: None,
            sku_id: None,
        })],
    })]
}

#[cfg(test)]
mod tests {
    use twilight_model::id::Id;

    use super::*;
    use crate::model::ThreadState;

    fn thread() -> HelpThread {
        HelpThread {
            id: Id::new(20),
            guild_id: Id::new(10),
            parent_id: Some(Id::new(5)),
            owner_id: Id::new(1),
            name: "Borrow checker woes".to_owned(),
            state: ThreadState::Open,
            applied_tags: Vec::new(),
            last_message_id: None,
        }
    }

    #[test]
    fn closed_log_names_everyone_involved() {
        let owner = Actor::new(Id::new(1), "ferris");
        let moderator = Actor::new(Id::new(2), "crab");
        let embed = closed_log_embed(&thread(), &owner, &moderator, CloseMethod::Button).unwrap();
        let description = embed.description.unwrap();

        assert!(description.starts_with("<#20>"));
        assert!(description.contains("created by <@1> has been closed by <@2> using **BUTTON**"));
        assert!(description.contains("Thread author: `ferris (1)`"));
        assert!(description.contains("Closed by: `crab (2)`"));
        assert_eq!(embed.color, Some(CLOSED_LOG_COLOR));
    }

    #[test]
    fn direct_embed_lists_tags_only_when_present() {
        let with_tags = closed_direct_embed(
            Some("Rust Help"),
            None,
            "Lifetimes",
            Some("🐛 Bug"),
            "https://discord.com/channels/10/20/30",
        )
        .unwrap();
        let description = with_tags.description.unwrap();
        assert_eq!(
            with_tags.title.as_deref(),
            Some("Your help thread in the Rust Help server has been closed.")
        );
        assert!(description.contains("Name: **Lifetimes**\nTags: 🐛 Bug"));
        assert!(description.contains("(https://discord.com/channels/10/20/30)"));

        let without_tags = closed_direct_embed(None, None, "Lifetimes", None, "url").unwrap();
        assert!(!without_tags.description.unwrap().contains("Tags:"));
    }

    #[test]
    fn created_log_defaults_tags_to_none() {
        let owner = Actor::new(Id::new(1), "ferris");
        let embed = created_log_embed(&thread(), None, &owner).unwrap();
        assert_eq!(embed.url.as_deref(), Some("https://discord.com/channels/10/20"));
        assert!(embed.description.unwrap().contains("Tags: None\nCreated by: `ferris (1)`"));
    }

    #[test]
    fn close_button_uses_stable_custom_id() {
        let components = close_button_components(true);
        let Component::ActionRow(row) = &components[0] else {
            panic!("expected an action row");
        };
        let Component::Button(button) = &row.components[0] else {
            panic!("expected a button");
        };
        assert_eq!(button.custom_id.as_deref(), Some(CLOSE_BUTTON_CUSTOM_ID));
        assert!(button.disabled);
        assert_eq!(button.style, ButtonStyle::Danger);
    }
}
