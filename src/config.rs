use crate::i18n::Language;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Language used when a request names none (or an unknown one)
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v
                    .parse()
                    .with_context(|| format!("PORT must be a port number, got '{}'", v))?,
                Err(_) => 8080,
            },
            default_language: match std::env::var("DEFAULT_LANGUAGE") {
                Ok(v) => Language::from_code(&v).context("Invalid DEFAULT_LANGUAGE")?,
                Err(_) => Language::canonical(),
            },
        })
    }

    /// Socket address string for the listener, e.g. "0.0.0.0:8080".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            default_language: Language::canonical(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("DEFAULT_LANGUAGE");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("defaults are valid");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_language, Language::En);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "3000");
        std::env::set_var("DEFAULT_LANGUAGE", "nl");

        let config = Config::from_env().expect("valid config");
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.default_language, Language::Nl);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "eighty");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_unknown_default_language() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "klingon");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("DEFAULT_LANGUAGE"));
        assert!(format!("{:#}", err).contains("klingon"));

        clear_env();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.default_language, Language::En);
    }
}
