mod config;

pub use config::Config;

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the configuration directory.
///
/// `HABITSCORE_CONFIG_DIR` wins when set and non-empty. Otherwise
/// `~/.config/habitscore[-dev]/` based on HABITSCORE_ENV (set
/// HABITSCORE_ENV=dev for the development directory).
///
/// # Errors
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    resolve_config_dir(
        std::env::var_os("HABITSCORE_CONFIG_DIR"),
        std::env::var("HABITSCORE_ENV").ok(),
        dirs::home_dir(),
    )
}

fn resolve_config_dir(
    override_dir: Option<OsString>,
    env: Option<String>,
    home: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = override_dir.filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let base_dir = home.ok_or(ConfigError::NoConfigDir)?.join(".config");

    let dir = if env.as_deref() == Some("dev") {
        base_dir.join("habitscore-dev")
    } else {
        base_dir.join("habitscore")
    };

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/user"))
    }

    #[test]
    fn override_dir_wins() {
        let dir = resolve_config_dir(Some("/tmp/habits".into()), None, home()).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/habits"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let dir = resolve_config_dir(Some(OsString::new()), None, home()).unwrap();
        assert_eq!(dir, PathBuf::from("/home/user/.config/habitscore"));
    }

    #[test]
    fn dev_env_uses_dev_dir() {
        let dir = resolve_config_dir(None, Some("dev".into()), home()).unwrap();
        assert_eq!(dir, PathBuf::from("/home/user/.config/habitscore-dev"));
    }

    #[test]
    fn missing_home_is_error() {
        assert!(matches!(
            resolve_config_dir(None, None, None),
            Err(ConfigError::NoConfigDir)
        ));
    }
}
