use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use std::process::Stdio;

use tracing::debug;

use super::{command_for, pipeline, spawn, Direction, ProcessError};
use crate::shell::{ParsedCommand, Redirect};

const OUTPUT_MODE: u32 = 0o644;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    /// Foreground work ran to completion.
    Completed,
    /// Child left running; carries its PID.
    Background(u32),
}

#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, command: &ParsedCommand) -> Result<Execution, ProcessError> {
        if let Some((left, right)) = command.pipeline() {
            pipeline::run(left, right)?;
            return Ok(Execution::Completed);
        }
        self.spawn_process(&command.args, command.redirect.as_ref(), command.background)
    }

    /// Runs one command. Redirection files are opened before the child
    /// starts, so a bad path means the command never runs.
    pub fn spawn_process(
        &self,
        args: &[String],
        redirect: Option<&Redirect>,
        background: bool,
    ) -> Result<Execution, ProcessError> {
        let (name, mut command) = command_for(args)?;

        match redirect {
            Some(Redirect::Output(path)) => {
                command.stdout(Stdio::from(open_output(path)?));
            }
            Some(Redirect::Input(path)) => {
                command.stdin(Stdio::from(open_input(path)?));
            }
            None => {}
        }

        let mut child = spawn(&mut command, name)?;
        let pid = child.id();
        debug!(command = name, pid, background, "spawned");

        if background {
            // Never waited on; the child stays a zombie until the shell exits.
            return Ok(Execution::Background(pid));
        }

        let status = child.wait().map_err(ProcessError::Wait)?;
        debug!(command = name, pid, %status, "finished");
        Ok(Execution::Completed)
    }
}

fn open_output(path: &Path) -> Result<File, ProcessError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(OUTPUT_MODE)
        .open(path)
        .map_err(|source| ProcessError::Redirect {
            path: path.to_path_buf(),
            direction: Direction::Output,
            source,
        })
}

fn open_input(path: &Path) -> Result<File, ProcessError> {
    File::open(path).map_err(|source| ProcessError::Redirect {
        path: path.to_path_buf(),
        direction: Direction::Input,
        source,
    })
}
