//! Filesystem locations for the log and configuration files.

use std::ffi::OsString;
use std::path::PathBuf;

const APP_DIR: &str = "safedeck";

/// Path to the debug log file, in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(format!("{APP_DIR}.log"))
}

#[cfg(windows)]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(windows))]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    if let Some(dir) = var_os("XDG_CONFIG_HOME").filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    var_os("HOME").map(|home| {
        let home = PathBuf::from(home);
        #[cfg(target_os = "macos")]
        {
            home.join("Library").join("Application Support")
        }

        #[cfg(not(target_os = "macos"))]
        {
            home.join(".config")
        }
    })
}

/// The per-user configuration directory for the current platform.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_dir_from(&mut var_os)
}

/// Default location of `config.json`, falling back to the working directory.
#[must_use]
pub fn config_path() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.json")
}
