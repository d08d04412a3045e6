// Application path utilities.
// Resolves per-user config and data locations for tabshell.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "tabshell")
}

/// Get the config directory (~/.config/tabshell on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the configuration file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Get the data directory (~/.local/share/tabshell on Linux).
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Path to the log file.
pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("tabshell.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        // Path construction only, nothing touches the filesystem
        if let Some(config) = config_path() {
            assert!(config.ends_with("config.json"));
        }
        if let Some(log) = log_path() {
            assert!(log.ends_with("tabshell.log"));
        }
    }
}
