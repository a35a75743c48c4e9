//! Path resolution for user-facing files.
//!
//! During development (cargo run, debug builds) everything lands in the
//! working directory so config and logs are easy to inspect. Installed
//! builds use the platform conventions instead:
//! - Windows: `%APPDATA%\Widgetlens\`
//! - macOS: `~/Library/Application Support/Widgetlens/`
//! - Linux: `~/.config/widgetlens/` (config), `~/.local/share/widgetlens/` (data)

use std::path::PathBuf;

const APP_DIR_NAME: &str = "widgetlens";

/// True when running out of a cargo checkout rather than an install.
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Directory holding `config.json`.
pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    // Linux splits config from data; Windows and macOS keep one app dir.
    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join(APP_DIR_NAME))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

/// Directory holding logs and other machine-written files.
pub fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join(APP_DIR_NAME))
}

pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join("config.json"))
        .unwrap_or_else(|| PathBuf::from("config.json"))
}

pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Create the config and data directories if missing. Called once at
/// startup, before logging is set up.
pub fn ensure_directories() -> std::io::Result<()> {
    if is_dev_mode() {
        // Local directories, nothing to create up front
        return Ok(());
    }

    if let Some(config) = config_dir() {
        std::fs::create_dir_all(&config)?;
    }
    if let Some(data) = data_dir() {
        std::fs::create_dir_all(&data)?;
        std::fs::create_dir_all(data.join("logs"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_mode_uses_working_directory() {
        // Tests build with debug assertions, so dev mode applies
        assert!(is_dev_mode());
        assert_eq!(config_dir(), Some(PathBuf::from(".")));
        assert_eq!(data_dir(), Some(PathBuf::from(".")));
    }

    #[test]
    fn test_config_file_name() {
        assert!(config_file().to_string_lossy().ends_with("config.json"));
    }

    #[test]
    fn test_logs_dir_is_under_data_dir() {
        let logs = logs_dir();
        assert!(logs.to_string_lossy().ends_with("logs"));
    }
}
