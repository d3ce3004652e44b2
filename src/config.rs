use std::collections::HashSet;
use std::env;

use crate::error::{Error, Result};

pub const DEFAULT_PREFIX: &str = "!";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BotConfig {
    pub token: String,
    pub prefix: String,
    pub operator_id: Option<u64>,
    pub disabled_commands: HashSet<String>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Builds the configuration from any key-value source. Empty values are
    // treated the same way as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let token = read("DISCORD_TOKEN")
            .ok_or_else(|| Error::Config("Expected a DISCORD_TOKEN in the environment".to_string()))?;

        let prefix = read("BOT_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        let operator_id = match read("BOT_OPERATOR_ID") {
            Some(value) => match value.parse::<u64>() {
                Ok(id) if id > 0 => Some(id),
                _ => {
                    let message = format!("BOT_OPERATOR_ID must be a user id, got '{}'", value);
                    return Err(Error::Config(message));
                }
            },
            None => None,
        };

        let disabled_commands = read("BOT_DISABLED_COMMANDS")
            .map(|value| {
                value
                    .split(',')
                    .map(|name| name.trim().to_lowercase())
                    .filter(|name| !name.is_empty())
                    .collect::<HashSet<String>>()
            })
            .unwrap_or_default();

        Ok(BotConfig {
            token,
            prefix,
            operator_id,
            disabled_commands,
        })
    }
}
