//! XDG Base Directory paths for flatsh.
//!
//! | Purpose | XDG Variable | Default |
//! |---------|--------------|---------|
//! | Data | `$XDG_DATA_HOME` | `~/.local/share` |

use std::path::PathBuf;

use directories::BaseDirs;

/// Get the user's home directory.
///
/// Returns `$HOME` or falls back to `/tmp` if not set.
pub fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

/// Get XDG data home directory.
///
/// Returns `$XDG_DATA_HOME` or falls back to `~/.local/share`.
pub fn xdg_data_home() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_dir().join(".local").join("share"))
}

/// Get the flatsh data directory for persistent state.
pub fn data_dir() -> PathBuf {
    xdg_data_home().join("flatsh")
}

/// Location of the persisted filesystem blob.
pub fn state_file() -> PathBuf {
    data_dir().join("fs.json")
}

/// Location of the REPL history file.
pub fn history_file() -> PathBuf {
    data_dir().join("history.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_dir_is_absolute() {
        assert!(home_dir().is_absolute());
    }

    #[test]
    fn flatsh_paths_build_on_xdg_primitives() {
        assert_eq!(data_dir(), xdg_data_home().join("flatsh"));
        assert!(state_file().ends_with("flatsh/fs.json"));
        assert!(history_file().ends_with("flatsh/history.txt"));
    }
}
