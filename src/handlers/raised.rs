use std::time::Duration;

use crate::error::Error;

// Coarse classification of a failed command invocation. Computed from the
// tag of a `RaisedError`, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ErrorCategory {
    NotFound,
    BadUserInput,
    Disabled,
    NoPrivateMessage,
    OnCooldown(Duration),
    BadArgument,
    PermissionDenied,
    Unclassified,
}

// A failure raised while a command was dispatched or executed.
#[derive(Debug)]
pub enum RaisedError {
    CommandNotFound(String),
    UserInput(String),
    Disabled,
    NoPrivateMessage,
    OnCooldown { retry_after: Duration },
    BadArgument(String),
    CheckFailure(Option<String>),
    Unexpected(anyhow::Error),
    // The command body itself returned an error.
    Invoke { original: Box<RaisedError> },
}

impl RaisedError {
    pub fn invoke(original: RaisedError) -> Self {
        RaisedError::Invoke {
            original: Box::new(original),
        }
    }

    // Returns the wrapped cause when this is an invocation failure. Only one
    // level is unwrapped.
    pub fn original(&self) -> &RaisedError {
        match self {
            RaisedError::Invoke { original } => original.as_ref(),
            other => other,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RaisedError::CommandNotFound(_) => ErrorCategory::NotFound,
            RaisedError::UserInput(_) => ErrorCategory::BadUserInput,
            RaisedError::Disabled => ErrorCategory::Disabled,
            RaisedError::NoPrivateMessage => ErrorCategory::NoPrivateMessage,
            RaisedError::OnCooldown { retry_after } => ErrorCategory::OnCooldown(*retry_after),
            RaisedError::BadArgument(_) => ErrorCategory::BadArgument,
            RaisedError::CheckFailure(_) => ErrorCategory::PermissionDenied,
            RaisedError::Unexpected(_) | RaisedError::Invoke { .. } => {
                ErrorCategory::Unclassified
            }
        }
    }

    // Formats the error with its whole cause chain, the way it is shown to
    // the operator.
    pub fn trace(&self) -> String {
        match self {
            RaisedError::CommandNotFound(name) => format!("Command \"{}\" is not found", name),
            RaisedError::UserInput(reason) => format!("Bad user input: {}", reason),
            RaisedError::Disabled => "Command is disabled".to_string(),
            RaisedError::NoPrivateMessage => {
                "Command can not be used in private messages".to_string()
            }
            RaisedError::OnCooldown { retry_after } => format!(
                "Command is on cooldown, retry after {:.2}s",
                retry_after.as_secs_f64()
            ),
            RaisedError::BadArgument(reason) => format!("Bad argument: {}", reason),
            RaisedError::CheckFailure(Some(reason)) => format!("Check failed: {}", reason),
            RaisedError::CheckFailure(None) => "Check failed".to_string(),
            RaisedError::Unexpected(err) => format!("{:?}", err),
            RaisedError::Invoke { original } => {
                format!("Command raised an exception:\n{}", original.trace())
            }
        }
    }
}

impl From<Error> for RaisedError {
    fn from(err: Error) -> RaisedError {
        match err {
            Error::CommandDisabled(_) => RaisedError::Disabled,
            Error::InvalidArgument(reason) => RaisedError::BadArgument(reason),
            other => RaisedError::Unexpected(anyhow::Error::new(other)),
        }
    }
}
