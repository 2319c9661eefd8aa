// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use aura_core::{APP_NAME, Config as CoreConfig};

const AURA_CONFIG_ENV: &str = "AURA_CONFIG";

/// Locate and parse the configuration file.
///
/// Priority: `--config` flag, then the `AURA_CONFIG` environment variable,
/// then `$XDG_CONFIG_HOME/aura/config.toml`. A missing file at the default
/// location is not an error; the core falls back to its defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(AURA_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[core]\nstate_dir = \"/tmp/flag\"\n").unwrap();

        let env_path = temp_dir.path().join("env_config.toml");
        fs::write(&env_path, "[core]\nstate_dir = \"/tmp/env\"\n").unwrap();

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::set_var(AURA_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let config = parse_config(Some(config_path)).await.unwrap();
            assert_eq!(config.state_dir, Some(PathBuf::from("/tmp/flag")));

            unsafe {
                std::env::remove_var(AURA_CONFIG_ENV);
            }
        }
    }

    #[tokio::test]
    async fn env_var_selects_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join("env_config.toml");
        fs::write(&env_path, "[core]\nstate_dir = \"/tmp/env\"\n").unwrap();

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::set_var(AURA_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let config = parse_config(None).await.unwrap();
            assert_eq!(config.state_dir, Some(PathBuf::from("/tmp/env")));

            unsafe {
                std::env::remove_var(AURA_CONFIG_ENV);
            }
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn missing_default_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let empty_dir = temp_dir.path().join("empty");
        fs::create_dir(&empty_dir).unwrap();

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(AURA_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", empty_dir.to_str().unwrap());
            }

            let config = parse_config(None).await.unwrap();
            assert_eq!(config.state_dir, None);

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[tokio::test]
    async fn explicit_missing_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let _guard = env_lock().lock().await;
        let result = parse_config(Some(missing)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn config_without_core_section_parses() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        let _guard = env_lock().lock().await;
        let config = parse_config(Some(config_path)).await.unwrap();
        assert_eq!(config.state_dir, None);
    }
}
