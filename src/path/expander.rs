use crate::error::ShellError;
use std::path::{Path, PathBuf};

/// Resolves a leading `~` against the home directory. Everything else is
/// taken literally.
#[derive(Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        match path.strip_prefix('~') {
            Some("") => self.home_dir(),
            Some(rest) if rest.starts_with('/') => {
                let mut home_path = self.home_dir()?;
                home_path.extend(rest.split('/').filter(|part| !part.is_empty()));
                Ok(home_path)
            }
            // "~user" forms are left alone.
            _ => Ok(Path::new(path).to_path_buf()),
        }
    }

    fn home_dir(&self) -> Result<PathBuf, ShellError> {
        dirs::home_dir().ok_or(ShellError::HomeDirNotFound)
    }
}
