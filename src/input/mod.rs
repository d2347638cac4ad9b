pub mod editor;
pub mod history;
pub mod terminal;

pub use editor::{LineEditor, ReadOutcome};
pub use history::{HistoryStore, Navigation};
pub use terminal::{RawMode, SavedTermios, TerminalInput};
