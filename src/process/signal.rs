use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use signal_hook::consts::{SIGHUP, SIGQUIT, SIGTERM};
use signal_hook::iterator::Signals;
use tracing::debug;

use super::ProcessError;
use crate::input::SavedTermios;

const TERMINATION_SIGNALS: [i32; 3] = [SIGTERM, SIGHUP, SIGQUIT];

/// Set while the line editor owns the terminal.
static EDITING: AtomicBool = AtomicBool::new(false);

/// Marks whether a line is being edited. Ctrl-C prints nothing while it is.
pub fn set_editing(editing: bool) {
    EDITING.store(editing, Ordering::SeqCst);
}

fn should_print_hint(quiet: bool) -> bool {
    !quiet && !EDITING.load(Ordering::SeqCst)
}

/// Ctrl-C reaches the foreground child but leaves the shell running.
/// Termination signals put the terminal back before the process exits.
pub fn setup_signal_handlers(
    saved: Option<SavedTermios>,
    quiet: bool,
) -> Result<(), ProcessError> {
    ctrlc::set_handler(move || {
        if should_print_hint(quiet) {
            println!("\nUse 'exit' to exit the shell");
        }
    })
    .map_err(|e| ProcessError::SignalError(e.to_string()))?;

    let mut signals = Signals::new(TERMINATION_SIGNALS)
        .map_err(|e| ProcessError::SignalError(e.to_string()))?;

    thread::Builder::new()
        .name("osc-signals".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                debug!(signal, "termination signal received");
                if let Some(saved) = saved {
                    let _ = saved.restore();
                }
                std::process::exit(128 + signal);
            }
        })
        .map_err(|e| ProcessError::SignalError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_only_outside_editing() {
        set_editing(true);
        assert!(!should_print_hint(false));

        set_editing(false);
        assert!(should_print_hint(false));
        assert!(!should_print_hint(true));
    }
}
