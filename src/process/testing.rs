//! In-memory command runner for tests.

use super::{CommandOutput, CommandRunner, ToolCommand};
use crate::error::Result;
use std::sync::Mutex;

type Responder = Box<dyn Fn(&ToolCommand) -> Option<CommandOutput> + Send>;

/// Records every command and answers from scripted responders
///
/// Responders are consulted in registration order; the first one returning
/// `Some` wins. Commands nobody answers succeed with empty output.
#[derive(Default)]
pub(crate) struct RecordingRunner {
    calls: Mutex<Vec<ToolCommand>>,
    responders: Vec<Responder>,
}

impl RecordingRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer commands whose rendered line and cwd satisfy `matches`
    pub(crate) fn respond<F>(mut self, matches: F, output: CommandOutput) -> Self
    where
        F: Fn(&ToolCommand) -> bool + Send + 'static,
    {
        self.responders
            .push(Box::new(move |cmd: &ToolCommand| matches(cmd).then(|| output.clone())));
        self
    }

    /// Answer commands rendering exactly as `line`
    pub(crate) fn respond_to(self, line: &str, output: CommandOutput) -> Self {
        let line = line.to_string();
        self.respond(move |cmd| cmd.to_string() == line, output)
    }

    pub(crate) fn calls(&self) -> Vec<ToolCommand> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Rendered command lines, in call order
    pub(crate) fn lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &ToolCommand) -> Result<CommandOutput> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command.clone());
        }
        Ok(self
            .responders
            .iter()
            .find_map(|responder| responder(command))
            .unwrap_or_else(|| CommandOutput::success_with("")))
    }
}
