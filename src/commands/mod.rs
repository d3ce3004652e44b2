pub mod context;
pub mod general;
pub mod help;

use std::collections::HashSet;

use poise::serenity_prelude::Permissions;

use crate::error::Error;
use crate::handlers::framework::is_disabled;

pub use crate::commands::context::{Context, UserData};

pub type Command = poise::Command<UserData, Error>;

// All commands registered in the framework.
pub fn all(disabled_commands: &HashSet<String>) -> Vec<Command> {
    let mut commands = vec![
        general::ping(),
        general::add(),
        general::whereami(),
        general::crash(),
        help::help(),
    ];
    for command in commands.iter_mut() {
        if is_disabled(disabled_commands, &command.name) {
            lift_gates(command);
        }
    }
    commands
}

// Poise runs these gates before the global command check. A disabled command
// must be reported as disabled, so nothing else may reject it first.
fn lift_gates(command: &mut Command) {
    command.owners_only = false;
    command.guild_only = false;
    command.dm_only = false;
    command.nsfw_only = false;
    command.required_permissions = Permissions::empty();
    command.required_bot_permissions = Permissions::empty();
}
