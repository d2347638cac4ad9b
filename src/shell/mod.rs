use std::io;

use tracing::{debug, warn};

mod executor;
mod scanner;
mod tokenizer;

pub use scanner::{scan, ParseError, ParsedCommand, Redirect};
pub use tokenizer::{tokenize, Tokens};

use crate::{
    core::{
        commands::{Builtins, Flow},
        config::ShellConfig,
        prompt,
    },
    error::ShellError,
    highlight::Painter,
    input::{HistoryStore, LineEditor, RawMode, ReadOutcome, TerminalInput},
    process::{signal, ProcessExecutor},
};

pub(crate) use executor::CommandHandler;

pub struct Shell {
    pub(crate) config: ShellConfig,
    pub(crate) history: HistoryStore,
    pub(crate) builtins: Builtins,
    pub(crate) executor: ProcessExecutor,
    pub(crate) painter: Painter,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            history: HistoryStore::new(config.history_capacity),
            builtins: Builtins::new(),
            executor: ProcessExecutor::new(),
            painter: Painter::new(),
            config,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// The read loop. Returns once input closes or `exit` runs; the terminal
    /// is back in its original mode by then.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let raw_mode = match RawMode::enable() {
            Ok(guard) => Some(guard),
            Err(e) => {
                warn!(error = %e, "could not switch terminal to raw mode");
                None
            }
        };
        signal::setup_signal_handlers(raw_mode.as_ref().map(RawMode::saved), self.config.quiet)?;

        let mut editor = LineEditor::new(TerminalInput, io::stdout(), self.config.line_capacity());

        loop {
            let prompt = self.painter.prompt(&prompt::render(&self.config.prompt_label));
            signal::set_editing(true);
            let outcome = editor.read_line(&mut self.history, &prompt);
            signal::set_editing(false);

            let line = match outcome? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Closed => {
                    debug!("input closed");
                    break;
                }
            };

            match self.execute_command(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => self.report(&e),
            }
        }

        drop(raw_mode);
        Ok(())
    }

    fn report(&self, error: &ShellError) {
        if !self.config.quiet {
            eprintln!("osc: {}", self.painter.error(&error.to_string()));
        }
    }
}
