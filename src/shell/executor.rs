use tracing::debug;

use super::{scanner, tokenizer};
use crate::core::commands::Flow;
use crate::error::ShellError;
use crate::process::Execution;

const REPEAT_LAST: &str = "!!";

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<Flow, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Result<Flow, ShellError> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        // `!!` reruns the newest entry without being recorded itself.
        let line = if line == REPEAT_LAST {
            match self.history.most_recent() {
                Some(last) => {
                    let last = last.to_string();
                    println!("{}", last);
                    last
                }
                None => {
                    println!("No commands in history.");
                    return Ok(Flow::Continue);
                }
            }
        } else {
            self.history.record(line);
            line.to_string()
        };

        let tokens = tokenizer::tokenize(&line, self.config.arg_capacity());
        if tokens.is_empty() {
            return Ok(Flow::Continue);
        }

        let name = &tokens.args[0];
        if let Some(result) = self.builtins.execute(name, &tokens.args[1..], &self.history) {
            debug!(builtin = %name, "ran builtin");
            return Ok(result?);
        }

        let parsed = scanner::scan(tokens)?;
        if let Execution::Background(pid) = self.executor.execute(&parsed)? {
            println!("Process running in background (PID: {})", pid);
        }
        Ok(Flow::Continue)
    }
}
