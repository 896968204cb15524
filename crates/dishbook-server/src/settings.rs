use std::{env, fs::read_to_string, path::Path};

use serde::Deserialize;

use crate::{db::SurrealdbCfg, error::Result};

pub const DEFAULT_CONFIG_PATH: &str = "config/services.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub http: HttpCfg,
    #[serde(default)]
    pub surrealdb: SurrealdbCfg,
    #[serde(default)]
    pub log: LogCfg,
}

#[derive(Debug, Deserialize)]
pub struct HttpCfg {
    pub port: u16,
}

impl Default for HttpCfg {
    fn default() -> Self {
        Self { port: 5000 }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LogCfg {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub level: Option<String>,
}

impl Settings {
    /// Read settings from `config_path`, then apply environment overrides.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let raw = read_to_string(config_path)?;
        let mut settings = Self::from_toml(&raw)?;
        settings.apply_env();
        Ok(settings)
    }

    /// Path from `DISHBOOK_CONFIG`, falling back to the default location.
    pub fn load_default() -> Result<Self> {
        let path = env::var("DISHBOOK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn apply_env(&mut self) {
        if let Ok(port) = env::var("PORT") {
            match port.parse() {
                Ok(port) => self.http.port = port,
                Err(e) => tracing::warn!("Ignoring invalid PORT value {port:?}: {e}"),
            }
        }

        if let Ok(url) = env::var("DISHBOOK_DB_URL") {
            self.surrealdb.url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let settings = Settings::from_toml(
            r#"
            [http]
            port = 8080

            [surrealdb]
            url = "ws://db:8000"
            namespace = "kitchen"
            database = "menu"
            username = "root"
            password = "secret"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(settings.http.port, 8080);
        assert_eq!(settings.surrealdb.url, "ws://db:8000");
        assert_eq!(settings.surrealdb.username.as_deref(), Some("root"));
        assert_eq!(settings.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let settings = Settings::from_toml("").unwrap();

        assert_eq!(settings.http.port, 5000);
        assert_eq!(settings.surrealdb.namespace, "dishbook");
        assert!(settings.surrealdb.password.is_none());
        assert!(settings.log.level.is_none());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = Settings::from_toml("[http]\nport = \"high\"").unwrap_err();
        assert!(matches!(err, crate::error::AppError::ConfigError(_)));
    }
}
