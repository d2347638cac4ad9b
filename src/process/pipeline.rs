use std::io;
use std::process::{Child, Stdio};

use tracing::debug;

use super::{command_for, spawn, ProcessError};

/// Runs `left | right` and waits for both sides, whatever the background
/// flag said.
///
/// Each pipe end is moved into exactly one child's stdio and the parent's
/// copy is dropped as soon as that child is spawned. A lingering write end
/// would keep the reader from ever seeing end of file.
pub fn run(left: &[String], right: &[String]) -> Result<(), ProcessError> {
    let (reader, writer) = io::pipe().map_err(ProcessError::Pipe)?;

    let mut left_child = spawn_stage(left, Stdio::inherit(), Stdio::from(writer))?;
    let mut right_child = match spawn_stage(right, Stdio::from(reader), Stdio::inherit()) {
        Ok(child) => child,
        Err(e) => {
            // The read end is gone, so the writer ends on its next write.
            let _ = left_child.wait();
            return Err(e);
        }
    };

    // Both sides are reaped before either wait error is reported.
    let left_waited = left_child.wait();
    let right_waited = right_child.wait();
    let left_status = left_waited.map_err(ProcessError::Wait)?;
    let right_status = right_waited.map_err(ProcessError::Wait)?;
    debug!(%left_status, %right_status, "pipeline finished");
    Ok(())
}

fn spawn_stage(args: &[String], stdin: Stdio, stdout: Stdio) -> Result<Child, ProcessError> {
    let (name, mut command) = command_for(args)?;
    command.stdin(stdin).stdout(stdout);
    let child = spawn(&mut command, name)?;
    debug!(command = name, pid = child.id(), "pipeline stage spawned");
    Ok(child)
}
