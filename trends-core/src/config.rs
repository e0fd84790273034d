use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{env, fs, path::PathBuf};

/// Environment variable checked first for the WeatherAPI.com key.
pub const API_KEY_ENV: &str = "WEATHERAPI_KEY";

/// Credential for WeatherAPI.com.
///
/// The key is never baked into the binary: it comes from the environment or
/// from a TOML file in the platform config directory.
///
/// Example TOML:
/// api_key = "..."
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Load the credential: environment variable first, config file second.
    pub fn load() -> Result<Self> {
        let env_key = env::var(API_KEY_ENV).ok();
        let file_cfg = Self::load_file()?;
        Self::resolve(env_key, file_cfg)
    }

    /// Pick the credential from the gathered sources. Blank environment
    /// values are treated as unset rather than passed on to the provider.
    pub fn resolve(env_key: Option<String>, file: Option<Config>) -> Result<Self> {
        if let Some(key) = env_key {
            if !key.trim().is_empty() {
                return Ok(Self { api_key: key });
            }
        }

        file.ok_or_else(|| {
            let path_hint = Self::config_file_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "the config file".to_string());
            anyhow!(
                "No WeatherAPI.com key configured.\n\
                 Hint: set the {API_KEY_ENV} environment variable, or write\n\
                 `api_key = \"...\"` to {path_hint}."
            )
        })
    }

    /// Read the config file if it exists; `None` on first run.
    fn load_file() -> Result<Option<Self>> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(Some(cfg))
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-trends", "trends-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_wins_over_file() {
        let file = Some(Config { api_key: "FILE_KEY".into() });
        let cfg = Config::resolve(Some("ENV_KEY".into()), file).expect("env key must win");
        assert_eq!(cfg.api_key, "ENV_KEY");
    }

    #[test]
    fn blank_env_key_falls_back_to_file() {
        let file = Some(Config { api_key: "FILE_KEY".into() });
        let cfg = Config::resolve(Some("   ".into()), file).expect("file key must be used");
        assert_eq!(cfg.api_key, "FILE_KEY");
    }

    #[test]
    fn errors_when_no_source_has_a_key() {
        let err = Config::resolve(None, None).unwrap_err();
        assert!(err.to_string().contains("No WeatherAPI.com key configured"));
    }

    #[test]
    fn parses_config_file_contents() {
        let cfg: Config = toml::from_str(r#"api_key = "FROM_FILE""#).expect("toml must parse");
        assert_eq!(cfg.api_key, "FROM_FILE");
    }
}
