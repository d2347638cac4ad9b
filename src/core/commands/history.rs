use super::{Command, CommandError, Flow};
use crate::input::HistoryStore;
use std::io::Write;

#[derive(Clone)]
pub struct HistoryCommand;

impl Default for HistoryCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }

    /// One numbered line per stored entry, oldest first.
    pub fn format_entries(history: &HistoryStore) -> Vec<String> {
        history
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{:>5}  {}", i + 1, entry))
            .collect()
    }
}

impl Command for HistoryCommand {
    fn execute(&self, args: &[String], history: &HistoryStore) -> Result<Flow, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "history: too many arguments".to_string(),
            ));
        }

        let mut stdout = std::io::stdout().lock();
        for line in Self::format_entries(history) {
            writeln!(stdout, "{}", line)?;
        }
        stdout.flush()?;
        Ok(Flow::Continue)
    }
}
