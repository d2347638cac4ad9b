use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Child, Command};

pub mod executor;
pub mod pipeline;
pub mod signal;

pub use executor::{Execution, ProcessExecutor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    EmptyCommand,
    Redirect {
        path: PathBuf,
        direction: Direction,
        source: io::Error,
    },
    Pipe(io::Error),
    Spawn { command: String, source: io::Error },
    Wait(io::Error),
    SignalError(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::EmptyCommand => write!(f, "empty command"),
            ProcessError::Redirect {
                path,
                direction: Direction::Input,
                source,
            } => write!(f, "Unable to open input file '{}': {}", path.display(), source),
            ProcessError::Redirect {
                path,
                direction: Direction::Output,
                source,
            } => write!(f, "Unable to open output file '{}': {}", path.display(), source),
            ProcessError::Pipe(e) => write!(f, "pipe failed: {}", e),
            ProcessError::Spawn { command, source } => {
                write!(f, "{}: failed to start: {}", command, source)
            }
            ProcessError::Wait(e) => write!(f, "wait failed: {}", e),
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Redirect { source, .. } | ProcessError::Spawn { source, .. } => {
                Some(source)
            }
            ProcessError::Pipe(e) | ProcessError::Wait(e) => Some(e),
            _ => None,
        }
    }
}

/// Builds a `Command` from an argument vector whose first element names the
/// program.
pub(crate) fn command_for(args: &[String]) -> Result<(&str, Command), ProcessError> {
    let (name, rest) = args.split_first().ok_or(ProcessError::EmptyCommand)?;
    let mut command = Command::new(name);
    command.args(rest);
    Ok((name.as_str(), command))
}

pub(crate) fn spawn(command: &mut Command, name: &str) -> Result<Child, ProcessError> {
    command.spawn().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ProcessError::CommandNotFound(name.to_string())
        } else {
            ProcessError::Spawn {
                command: name.to_string(),
                source: e,
            }
        }
    })
}
