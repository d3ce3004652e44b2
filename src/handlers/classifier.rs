use serenity::async_trait;
use tracing::{debug, error};

use crate::error::Result;
use crate::handlers::raised::{ErrorCategory, RaisedError};

// Discord rejects messages longer than this amount of characters.
pub const MESSAGE_LIMIT: usize = 2000;

pub const BAD_ARGUMENT_MESSAGE: &str = "Invalid arguments.";
pub const PERMISSION_DENIED_MESSAGE: &str =
    "Either you don't have permission to do that, or it can't be done here, baka!";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Sorry! An unexpected error has occurred.";

const TRUNCATION_MARK: &str = "...";

// The failed command invocation as seen by the error handler.
#[async_trait]
pub trait InvocationContext: Send + Sync {
    // Returns the fully qualified name of the invoked command.
    fn command_name(&self) -> &str;

    // Returns true when the command brings its own error handler.
    fn has_local_handler(&self) -> bool;

    // Sends a message into the channel where the command was invoked.
    async fn reply(&self, content: &str) -> Result<()>;

    // Sends a direct message to the user who invoked the command.
    async fn direct_message(&self, content: &str) -> Result<()>;
}

pub trait TraceSink: Send + Sync {
    fn write_trace(&self, command: &str, trace: &str);
}

// Writes traces through the global tracing subscriber, which prints them to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn write_trace(&self, command: &str, trace: &str) {
        error!(command = command, "Unhandled error in command:\n{}", trace);
    }
}

pub fn disabled_message(command: &str) -> String {
    format!("{} has been disabled.", command)
}

pub fn no_private_message(command: &str) -> String {
    format!("{} can not be used in Private Messages.", command)
}

pub fn cooldown_message(retry_after_secs: u64) -> String {
    format!(
        "This command is on cooldown! Please try again in {} seconds.",
        retry_after_secs
    )
}

// Builds the apology for unexpected errors. The trace gets shortened only when
// the whole message doesn't fit into a single Discord message.
pub fn unexpected_message(operator_id: Option<u64>, trace: &str) -> String {
    let operator = match operator_id {
        Some(id) => format!("<@{}>", id),
        None => "the bot owner".to_string(),
    };
    let header = format!(
        "{} Please let {} know ASAP, unless you just broke it for fun.\n```",
        UNEXPECTED_ERROR_MESSAGE, operator
    );
    let footer = "```";

    let used = header.chars().count() + footer.chars().count();
    let budget = MESSAGE_LIMIT.saturating_sub(used);
    format!("{}{}{}", header, truncate(trace, budget), footer)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(TRUNCATION_MARK.len());
    let mut shortened = text.chars().take(keep).collect::<String>();
    shortened.push_str(TRUNCATION_MARK);
    shortened
}

#[derive(Debug)]
pub struct ErrorClassifier<S: TraceSink> {
    operator_id: Option<u64>,
    sink: S,
}

impl<S: TraceSink> ErrorClassifier<S> {
    pub fn new(operator_id: Option<u64>, sink: S) -> Self {
        ErrorClassifier { operator_id, sink }
    }

    pub fn operator_id(&self) -> Option<u64> {
        self.operator_id
    }

    // Translates the failure into at most one message for the user. Failed
    // direct messages are dropped, failed channel replies are returned.
    pub async fn handle<C>(&self, ctx: &C, err: &RaisedError) -> Result<()>
    where
        C: InvocationContext + ?Sized,
    {
        if ctx.has_local_handler() {
            return Ok(());
        }

        let err = err.original();
        let command = ctx.command_name();

        match err.category() {
            ErrorCategory::NotFound | ErrorCategory::BadUserInput => Ok(()),
            ErrorCategory::Disabled => ctx.reply(&disabled_message(command)).await,
            ErrorCategory::NoPrivateMessage => {
                if let Err(why) = ctx.direct_message(&no_private_message(command)).await {
                    debug!("Can't send a direct message for '{}': {}", command, why);
                }
                Ok(())
            }
            ErrorCategory::OnCooldown(retry_after) => {
                let content = cooldown_message(retry_after.as_secs());
                if let Err(why) = ctx.direct_message(&content).await {
                    debug!("Can't send a direct message for '{}': {}", command, why);
                }
                Ok(())
            }
            ErrorCategory::BadArgument => ctx.reply(BAD_ARGUMENT_MESSAGE).await,
            ErrorCategory::PermissionDenied => ctx.reply(PERMISSION_DENIED_MESSAGE).await,
            ErrorCategory::Unclassified => {
                let trace = err.trace();
                let sent = ctx.reply(&unexpected_message(self.operator_id, &trace)).await;
                self.sink.write_trace(command, &trace);
                sent
            }
        }
    }
}
