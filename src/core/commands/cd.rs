use super::{Command, CommandError, Flow};
use crate::input::HistoryStore;
use crate::path::PathExpander;
use std::env;

#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], _history: &HistoryStore) -> Result<Flow, CommandError> {
        let path_str = args
            .first()
            .ok_or_else(|| CommandError::InvalidArguments("cd: expected argument".to_string()))?;
        let expanded_path = self
            .path_expander
            .expand(path_str)
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}", e)))?;

        env::set_current_dir(&expanded_path)
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}: {}", path_str, e)))?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_cd_temp() {
        let _guard = crate::CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let cmd = CdCommand::new();
        let history = HistoryStore::new(5);
        let temp_dir = env::temp_dir().canonicalize().unwrap();
        assert!(cmd
            .execute(&[temp_dir.to_str().unwrap().to_string()], &history)
            .is_ok());
        assert_eq!(env::current_dir().unwrap(), temp_dir);
    }

    #[test]
    fn test_cd_invalid() {
        let cmd = CdCommand::new();
        let history = HistoryStore::new(5);
        let result = cmd.execute(&["/nonexistent/path".to_string()], &history);
        assert!(matches!(result, Err(CommandError::ExecutionError(ref m)) if m.starts_with("cd: /nonexistent/path")));
    }

    #[test]
    fn test_cd_missing_argument() {
        let cmd = CdCommand::new();
        let history = HistoryStore::new(5);
        let result = cmd.execute(&[], &history);
        assert!(matches!(result, Err(CommandError::InvalidArguments(ref m)) if m == "cd: expected argument"));
    }
}
