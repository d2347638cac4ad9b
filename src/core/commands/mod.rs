use std::collections::BTreeMap;

mod cd;
mod exit;
mod history;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use history::HistoryCommand;

use crate::input::HistoryStore;

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ExecutionError(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// What the read loop should do after a builtin ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub trait Command {
    fn execute(&self, args: &[String], history: &HistoryStore) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    History(HistoryCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], history: &HistoryStore) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, history),
            CommandType::Exit(cmd) => cmd.execute(args, history),
            CommandType::History(cmd) => cmd.execute(args, history),
        }
    }
}

/// Commands the shell runs itself instead of spawning.
#[derive(Clone)]
pub struct Builtins {
    commands: BTreeMap<String, CommandType>,
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

impl Builtins {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        commands.insert(
            "history".to_string(),
            CommandType::History(HistoryCommand::new()),
        );
        Self { commands }
    }

    /// Runs `command` if it is a builtin; `None` means it should be spawned.
    pub fn execute(
        &self,
        command: &str,
        args: &[String],
        history: &HistoryStore,
    ) -> Option<Result<Flow, CommandError>> {
        self.commands
            .get(command)
            .map(|cmd| cmd.execute(args, history))
    }
}
