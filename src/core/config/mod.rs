use crate::flags::Flags;

/// Longest line the editor accepts, counting the slot the terminal line
/// reserves for its terminator.
pub const MAX_LINE_LENGTH: usize = 1024;
/// Argument vector size, terminator slot included.
pub const MAX_ARGS: usize = 64;
pub const HISTORY_CAPACITY: usize = 5;
pub const PROMPT_LABEL: &str = "osc";

/// Runtime settings for one shell instance.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub history_capacity: usize,
    pub max_line_length: usize,
    pub max_args: usize,
    pub prompt_label: String,
    pub quiet: bool,
    pub debug: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_CAPACITY,
            max_line_length: MAX_LINE_LENGTH,
            max_args: MAX_ARGS,
            prompt_label: PROMPT_LABEL.to_string(),
            quiet: false,
            debug: false,
        }
    }
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags) -> Self {
        Self {
            quiet: flags.is_set("quiet"),
            debug: flags.is_set("debug"),
            ..Self::default()
        }
    }

    /// Bytes a line may hold once the terminator slot is set aside.
    pub fn line_capacity(&self) -> usize {
        self.max_line_length.saturating_sub(1)
    }

    pub fn arg_capacity(&self) -> usize {
        self.max_args.saturating_sub(1)
    }
}
