use std::fmt;

use twilight_model::id::{
    Id,
    marker::{ChannelMarker, GuildMarker, RoleMarker, TagMarker},
};

use crate::errors::ConfigError;

/// Identifiers the help forum needs, read once at startup.
#[derive(Clone, Eq, PartialEq)]
pub struct Config {
    pub token: String,
    /// Guild to register slash commands in; global registration when unset.
    pub guild_id: Option<Id<GuildMarker>>,
    pub help_channel_id: Id<ChannelMarker>,
    pub log_channel_id: Id<ChannelMarker>,
    pub notification_role_id: Id<RoleMarker>,
    pub mod_role_id: Id<RoleMarker>,
    pub closed_tag_id: Id<TagMarker>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .field("help_channel_id", &self.help_channel_id)
            .field("log_channel_id", &self.log_channel_id)
            .field("notification_role_id", &self.notification_role_id)
            .field("mod_role_id", &self.mod_role_id)
            .field("closed_tag_id", &self.closed_tag_id)
            .finish()
    }
}

const TOKEN: &str = "DISCORD_TOKEN";
const GUILD_ID: &str = "GUILD_ID";
const HELP_CHANNEL_ID: &str = "HELP_CHANNEL_ID";
const HELP_LOG_CHANNEL_ID: &str = "HELP_LOG_CHANNEL_ID";
const HELP_NOTIFICATION_ROLE_ID: &str = "HELP_NOTIFICATION_ROLE_ID";
const HELP_MOD_ROLE_ID: &str = "HELP_MOD_ROLE_ID";
const HELP_TAG_CLOSED_ID: &str = "HELP_TAG_CLOSED_ID";

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// Every missing required variable is reported in one error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let required = [
            TOKEN,
            HELP_CHANNEL_ID,
            HELP_LOG_CHANNEL_ID,
            HELP_NOTIFICATION_ROLE_ID,
            HELP_MOD_ROLE_ID,
            HELP_TAG_CLOSED_ID,
        ];
        let missing: Vec<&'static str> = required
            .into_iter()
            .filter(|name| read(*name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let id = |name: &'static str| -> Result<u64, ConfigError> {
            let value = read(name).unwrap_or_default();
            match value.parse::<u64>() {
                Ok(raw) if raw != 0 => Ok(raw),
                _ => Err(ConfigError::InvalidId { name, value }),
            }
        };

        let guild_id = match read(GUILD_ID) {
            Some(_) => Some(Id::new(id(GUILD_ID)?)),
            None => None,
        };

        Ok(Self {
            token: read(TOKEN).unwrap_or_default(),
            guild_id,
            help_channel_id: Id::new(id(HELP_CHANNEL_ID)?),
            log_channel_id: Id::new(id(HELP_LOG_CHANNEL_ID)?),
            notification_role_id: Id::new(id(HELP_NOTIFICATION_ROLE_ID)?),
            mod_role_id: Id::new(id(HELP_MOD_ROLE_ID)?),
            closed_tag_id: Id::new(id(HELP_TAG_CLOSED_ID)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const COMPLETE: [(&str, &str); 6] = [
        ("DISCORD_TOKEN", "token"),
        ("HELP_CHANNEL_ID", "100"),
        ("HELP_LOG_CHANNEL_ID", "200"),
        ("HELP_NOTIFICATION_ROLE_ID", "300"),
        ("HELP_MOD_ROLE_ID", "400"),
        ("HELP_TAG_CLOSED_ID", "500"),
    ];

    #[test]
    fn reads_all_identifiers() {
        let config = Config::from_lookup(lookup(&COMPLETE)).unwrap();
        assert_eq!(config.help_channel_id, Id::new(100));
        assert_eq!(config.log_channel_id, Id::new(200));
        assert_eq!(config.notification_role_id, Id::new(300));
        assert_eq!(config.mod_role_id, Id::new(400));
        assert_eq!(config.closed_tag_id, Id::new(500));
        assert_eq!(config.guild_id, None);
    }

    #[test]
    fn optional_guild_id_is_parsed() {
        let mut pairs = COMPLETE.to_vec();
        pairs.push(("GUILD_ID", "42"));
        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.guild_id, Some(Id::new(42)));
    }

    #[test]
    fn reports_every_missing_variable() {
        let pairs = [("DISCORD_TOKEN", "token"), ("HELP_CHANNEL_ID", "100")];
        let error = Config::from_lookup(lookup(&pairs)).unwrap_err();
        match error {
            ConfigError::Missing(names) => assert_eq!(
                names,
                vec![
                    "HELP_LOG_CHANNEL_ID",
                    "HELP_NOTIFICATION_ROLE_ID",
                    "HELP_MOD_ROLE_ID",
                    "HELP_TAG_CLOSED_ID",
                ]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_values_count_as_missing() {
        let mut pairs = COMPLETE.to_vec();
        pairs[5] = ("HELP_TAG_CLOSED_ID", "  ");
        let error = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(error, ConfigError::Missing(names) if names == vec!["HELP_TAG_CLOSED_ID"]));
    }

    #[test]
    fn rejects_non_numeric_and_zero_ids() {
        let mut pairs = COMPLETE.to_vec();
        pairs[1] = ("HELP_CHANNEL_ID", "general");
        let error = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidId { name: "HELP_CHANNEL_ID", .. }));

        let mut pairs = COMPLETE.to_vec();
        pairs[4] = ("HELP_MOD_ROLE_ID", "0");
        let error = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidId { name: "HELP_MOD_ROLE_ID", .. }));
    }
}
