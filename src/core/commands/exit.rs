use super::{Command, CommandError, Flow};
use crate::input::HistoryStore;

/// Ends the shell. The read loop unwinds normally so the terminal guard can
/// restore cooked mode before the process exits with status 0.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _history: &HistoryStore) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}
