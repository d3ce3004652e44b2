// Recording fakes for the error handler seams.
use std::sync::{Arc, Mutex};

use serenity::async_trait;

use crate::error::{Error, Result};
use crate::handlers::classifier::{ErrorClassifier, InvocationContext, TraceSink};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Sent {
    Channel(String),
    Direct(String),
}

pub struct FakeInvocation {
    command: String,
    local_handler: bool,
    dm_closed: bool,
    channel_broken: bool,
    sent: Mutex<Vec<Sent>>,
}

impl FakeInvocation {
    pub fn new(command: &str) -> Self {
        FakeInvocation {
            command: command.to_string(),
            local_handler: false,
            dm_closed: false,
            channel_broken: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn with_local_handler(mut self) -> Self {
        self.local_handler = true;
        self
    }

    pub fn with_closed_direct_messages(mut self) -> Self {
        self.dm_closed = true;
        self
    }

    pub fn with_broken_channel(mut self) -> Self {
        self.channel_broken = true;
        self
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl InvocationContext for FakeInvocation {
    fn command_name(&self) -> &str {
        &self.command
    }

    fn has_local_handler(&self) -> bool {
        self.local_handler
    }

    async fn reply(&self, content: &str) -> Result<()> {
        if self.channel_broken {
            return Err(Error::SerenityError("Missing Access".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Channel(content.to_string()));
        Ok(())
    }

    async fn direct_message(&self, content: &str) -> Result<()> {
        if self.dm_closed {
            return Err(Error::SerenityError(
                "Cannot send messages to this user".to_string(),
            ));
        }
        self.sent.lock().unwrap().push(Sent::Direct(content.to_string()));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingSink {
    traces: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingSink {
    pub fn traces(&self) -> Vec<(String, String)> {
        self.traces.lock().unwrap().clone()
    }
}

impl TraceSink for RecordingSink {
    fn write_trace(&self, command: &str, trace: &str) {
        self.traces
            .lock()
            .unwrap()
            .push((command.to_string(), trace.to_string()));
    }
}

pub fn classifier() -> (ErrorClassifier<RecordingSink>, RecordingSink) {
    let sink = RecordingSink::default();
    (ErrorClassifier::new(Some(84163178585391104), sink.clone()), sink)
}
