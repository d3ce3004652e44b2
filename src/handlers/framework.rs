use std::collections::HashSet;
use std::error::Error as StdError;
use std::time::Duration;

use anyhow::anyhow;
use poise::FrameworkError;
use poise::serenity_prelude::{CreateMessage, Permissions};
use serenity::async_trait;
use tracing::{debug, error};

use crate::commands::{Context, UserData};
use crate::error::{Error, Result};
use crate::handlers::classifier::InvocationContext;
use crate::handlers::raised::RaisedError;

// Adapts a poise invocation context to the error handler.
pub struct PoiseInvocation<'a> {
    ctx: Context<'a>,
}

impl<'a> PoiseInvocation<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        PoiseInvocation { ctx }
    }
}

#[async_trait]
impl<'a> InvocationContext for PoiseInvocation<'a> {
    fn command_name(&self) -> &str {
        &self.ctx.command().qualified_name
    }

    fn has_local_handler(&self) -> bool {
        self.ctx.command().on_error.is_some()
    }

    async fn reply(&self, content: &str) -> Result<()> {
        self.ctx.say(content.to_string()).await?;
        Ok(())
    }

    async fn direct_message(&self, content: &str) -> Result<()> {
        let message = CreateMessage::new().content(content);
        self.ctx
            .author()
            .direct_message(self.ctx.serenity_context(), message)
            .await?;
        Ok(())
    }
}

// Global check that rejects commands turned off in the configuration.
pub async fn command_check(ctx: Context<'_>) -> Result<bool> {
    let name = &ctx.command().qualified_name;
    if is_disabled(&ctx.data().disabled_commands, name) {
        return Err(Error::CommandDisabled(name.clone()));
    }
    Ok(true)
}

pub fn is_disabled(disabled_commands: &HashSet<String>, command: &str) -> bool {
    disabled_commands.contains(&command.to_lowercase())
}

pub fn unknown_command(msg_content: &str) -> RaisedError {
    let name = msg_content.split_whitespace().next().unwrap_or_default();
    RaisedError::CommandNotFound(name.to_string())
}

// A parse failure with a known input is a malformed argument. Without any
// input the argument was simply missing.
pub fn argument_parse_error(
    error: &(dyn StdError + Send + Sync),
    input: Option<String>,
) -> RaisedError {
    match input {
        Some(input) => RaisedError::BadArgument(format!("{} (input: '{}')", error, input)),
        None => RaisedError::UserInput(error.to_string()),
    }
}

pub fn subcommand_required() -> RaisedError {
    RaisedError::UserInput("A subcommand is required.".to_string())
}

pub fn cooldown_hit(remaining_cooldown: Duration) -> RaisedError {
    RaisedError::OnCooldown {
        retry_after: remaining_cooldown,
    }
}

pub fn guild_only() -> RaisedError {
    RaisedError::NoPrivateMessage
}

pub fn check_failure(error: Option<Error>) -> RaisedError {
    match error {
        Some(Error::CommandDisabled(_)) => RaisedError::Disabled,
        Some(err) => RaisedError::CheckFailure(Some(err.to_string())),
        None => RaisedError::CheckFailure(None),
    }
}

pub fn missing_user_permissions(missing_permissions: Option<Permissions>) -> RaisedError {
    let reason = match missing_permissions {
        Some(permissions) => format!("User is missing permissions: {}", permissions),
        None => "Can't check the user permissions".to_string(),
    };
    RaisedError::CheckFailure(Some(reason))
}

pub fn missing_bot_permissions(missing_permissions: Permissions) -> RaisedError {
    RaisedError::CheckFailure(Some(format!(
        "Bot is missing permissions: {}",
        missing_permissions
    )))
}

pub fn not_an_owner() -> RaisedError {
    RaisedError::CheckFailure(Some("Command is restricted to the bot owners".to_string()))
}

pub fn dm_only() -> RaisedError {
    RaisedError::CheckFailure(Some("Command can be used only in DMs".to_string()))
}

pub fn nsfw_only() -> RaisedError {
    RaisedError::CheckFailure(Some("Command can be used only in NSFW channels".to_string()))
}

pub fn command_panic(payload: Option<String>) -> RaisedError {
    let payload = payload.unwrap_or_else(|| "no panic message".to_string());
    RaisedError::Unexpected(anyhow!("Command panicked: {}", payload))
}

pub fn structure_mismatch(description: &str) -> RaisedError {
    RaisedError::Unexpected(anyhow!("Command structure mismatch: {}", description))
}

// Entry point for poise's `on_error` hook.
pub async fn on_error(error: FrameworkError<'_, UserData, Error>) {
    let (ctx, raised) = match error {
        FrameworkError::Command { error, ctx, .. } => (ctx, RaisedError::invoke(error.into())),
        FrameworkError::ArgumentParse {
            error, input, ctx, ..
        } => (ctx, argument_parse_error(error.as_ref(), input)),
        FrameworkError::SubcommandRequired { ctx, .. } => (ctx, subcommand_required()),
        FrameworkError::CooldownHit {
            remaining_cooldown,
            ctx,
            ..
        } => (ctx, cooldown_hit(remaining_cooldown)),
        FrameworkError::GuildOnly { ctx, .. } => (ctx, guild_only()),
        FrameworkError::CommandCheckFailed { error, ctx, .. } => (ctx, check_failure(error)),
        FrameworkError::MissingUserPermissions {
            missing_permissions,
            ctx,
            ..
        } => (ctx, missing_user_permissions(missing_permissions)),
        FrameworkError::MissingBotPermissions {
            missing_permissions,
            ctx,
            ..
        } => (ctx, missing_bot_permissions(missing_permissions)),
        FrameworkError::NotAnOwner { ctx, .. } => (ctx, not_an_owner()),
        FrameworkError::DmOnly { ctx, .. } => (ctx, dm_only()),
        FrameworkError::NsfwOnly { ctx, .. } => (ctx, nsfw_only()),
        FrameworkError::CommandPanic { payload, ctx, .. } => (ctx, command_panic(payload)),
        FrameworkError::CommandStructureMismatch {
            description, ctx, ..
        } => (
            poise::Context::Application(ctx),
            structure_mismatch(description),
        ),
        FrameworkError::UnknownCommand { msg_content, .. } => {
            // Poise gives no invocation context here, so there is nobody to answer.
            debug!("Ignoring error: {}", unknown_command(msg_content).trace());
            return;
        }
        other => {
            if let Err(why) = poise::builtins::on_error(other).await {
                error!("Error while handling a framework error: {:?}", why);
            }
            return;
        }
    };

    let invocation = PoiseInvocation::new(ctx);
    if let Err(why) = ctx.data().classifier.handle(&invocation, &raised).await {
        error!(
            "Can't report the error of '{}' command: {}",
            invocation.command_name(),
            why
        );
    }
}
