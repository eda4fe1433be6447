use std::path::PathBuf;
use thiserror::Error;

const APP_DIR: &str = "unity-threads";

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDir(String),
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    // Prefer ~/.config/unity-threads on Unix-like systems
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push(APP_DIR);
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|mut path| {
            path.push(APP_DIR);
            path
        })
        .ok_or_else(|| PathError::ConfigDir("Unable to determine config directory".to_string()))
}

/// Get the standard configuration file path
pub fn get_config_file_path() -> Result<PathBuf, PathError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("config.toml");
    Ok(config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_app_dir() {
        if let Ok(path) = get_config_file_path() {
            assert!(path.ends_with("unity-threads/config.toml"));
        }
    }
}
