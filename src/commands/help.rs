use poise::builtins::HelpConfiguration;

use crate::commands::Context;
use crate::error::Result;

/// Shows the list of available commands
#[poise::command(prefix_command, slash_command)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Command to get help for"] command: Option<String>,
) -> Result<()> {
    let config = HelpConfiguration {
        extra_text_at_bottom: "Type help <command> to get more info about a command.",
        ..Default::default()
    };
    poise::builtins::help(ctx, command.as_deref(), config).await?;
    Ok(())
}
