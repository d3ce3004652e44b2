pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;

use std::process;

use poise::serenity_prelude::{GatewayIntents, UserId};
use serenity::client::Client;
use tracing::{error, info, warn};

use crate::commands::UserData;
use crate::config::BotConfig;
use crate::error::Error;
use crate::handlers::{command_check, on_error};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(why) => {
            error!("Can't start the bot: {}", why);
            process::exit(1);
        }
    };
    let data = UserData::new(&config);
    match data.classifier.operator_id() {
        Some(id) => info!("Unexpected errors will be reported to the user {}", id),
        None => warn!("BOT_OPERATOR_ID is not set, nobody will be mentioned on unexpected errors"),
    }

    let framework = poise::Framework::<UserData, Error>::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(&config.disabled_commands),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.prefix.clone()),
                ..Default::default()
            },
            owners: config.operator_id.map(UserId::new).into_iter().collect(),
            command_check: Some(|ctx| Box::pin(command_check(ctx))),
            pre_command: |ctx| {
                Box::pin(async move {
                    info!(
                        "Got command '{}' by user '{}'",
                        ctx.command().qualified_name,
                        ctx.author().name
                    );
                })
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("{} is connected!", ready.user.name);
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let mut client = match Client::builder(&config.token, intents)
        .framework(framework)
        .await
    {
        Ok(client) => client,
        Err(why) => {
            error!("Cannot create a Discord client: {:?}", why);
            process::exit(1);
        }
    };

    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }
}
