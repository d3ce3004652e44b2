use crate::commands::Context;
use crate::error::{Error, Result};

/// Checks that the bot is alive
#[poise::command(prefix_command, slash_command, user_cooldown = 5)]
pub async fn ping(ctx: Context<'_>) -> Result<()> {
    ctx.say("Pong!").await?;
    Ok(())
}

/// Adds two numbers
#[poise::command(prefix_command, slash_command)]
pub async fn add(
    ctx: Context<'_>,
    #[description = "First number"] a: i64,
    #[description = "Second number"] b: i64,
) -> Result<()> {
    let sum = checked_sum(a, b)?;
    ctx.say(sum.to_string()).await?;
    Ok(())
}

/// Shows the id of the current server
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn whereami(ctx: Context<'_>) -> Result<()> {
    let guild_id = ctx
        .guild_id()
        .ok_or_else(|| Error::Internal("The guild id is missing.".to_string()))?;
    ctx.say(format!("You are on the server with id {}.", guild_id))
        .await?;
    Ok(())
}

/// Fails on purpose, to check how unexpected errors are reported
#[poise::command(prefix_command, owners_only, hide_in_help)]
pub async fn crash(_ctx: Context<'_>) -> Result<()> {
    Err(Error::Internal("Crash requested by the bot owner.".to_string()))
}

fn checked_sum(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b)
        .ok_or_else(|| Error::InvalidArgument(format!("{} + {} doesn't fit into 64 bits", a, b)))
}
