use std::collections::HashSet;

use poise::Context as PoiseContext;

use crate::config::BotConfig;
use crate::handlers::{ErrorClassifier, TracingSink};

// User data, which is stored and accessible in all command invocations
pub struct UserData {
    pub classifier: ErrorClassifier<TracingSink>,
    pub disabled_commands: HashSet<String>,
}

impl UserData {
    pub fn new(config: &BotConfig) -> Self {
        UserData {
            classifier: ErrorClassifier::new(config.operator_id, TracingSink),
            disabled_commands: config.disabled_commands.clone(),
        }
    }
}

// Generic context available across Poise commands
pub type Context<'a> = PoiseContext<'a, UserData, crate::error::Error>;
