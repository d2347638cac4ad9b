use std::env;
use std::path::Path;

use tracing::warn;

/// Name shown in the prompt for a working directory: its last component,
/// or `/` at the root.
pub fn directory_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None if path.has_root() => "/".to_string(),
        None => path.to_string_lossy().into_owned(),
    }
}

pub fn render(label: &str) -> String {
    let dir = match env::current_dir() {
        Ok(path) => directory_label(&path),
        Err(e) => {
            warn!(error = %e, "cannot read working directory");
            "?".to_string()
        }
    };
    format!("{}:{}> ", label, dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_root_label() {
        assert_eq!(directory_label(Path::new("/")), "/");
    }

    #[test]
    fn test_last_component() {
        assert_eq!(directory_label(Path::new("/home/user/projects")), "projects");
        assert_eq!(directory_label(Path::new("/tmp")), "tmp");
        assert_eq!(directory_label(&PathBuf::from("/var/log/")), "log");
    }

    #[test]
    fn test_render_format() {
        let prompt = render("osc");
        assert!(prompt.starts_with("osc:"));
        assert!(prompt.ends_with("> "));
    }
}
