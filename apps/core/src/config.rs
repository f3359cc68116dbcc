//! Runtime configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::AppError;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DB_PATH: &str = "data/app.db";
const DEFAULT_STATIC_DIR: &str = "frontend";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat-completion provider settings. Only present when an API key is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub provider: Option<ProviderConfig>,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} has an invalid value: {}", key, raw))),
        _ => Ok(default),
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and reads the configuration from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_process_env()
    }

    /// Reads the configuration without touching `.env`.
    pub fn from_process_env() -> Result<Self, AppError> {
        let provider = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| ProviderConfig {
                api_key,
                model: var_or("OPENAI_MODEL", DEFAULT_MODEL),
                base_url: var_or("OPENAI_BASE_URL", DEFAULT_BASE_URL)
                    .trim_end_matches('/')
                    .to_string(),
            });

        Ok(Self {
            host: var_or("APP_HOST", DEFAULT_HOST),
            port: parse_var("APP_PORT", DEFAULT_PORT)?,
            db_path: PathBuf::from(var_or("APP_DB_PATH", DEFAULT_DB_PATH)),
            static_dir: PathBuf::from(var_or("APP_STATIC_DIR", DEFAULT_STATIC_DIR)),
            max_upload_bytes: parse_var("APP_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            provider,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid bind address: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 8] = [
        "APP_HOST",
        "APP_PORT",
        "APP_DB_PATH",
        "APP_STATIC_DIR",
        "APP_MAX_UPLOAD_BYTES",
        "OPENAI_API_KEY",
        "OPENAI_MODEL",
        "OPENAI_BASE_URL",
    ];

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let mut all: Vec<(&str, Option<&str>)> = KEYS.iter().map(|k| (*k, None)).collect();
        for (key, value) in vars {
            all.retain(|(k, _)| k != key);
            all.push((*key, Some(*value)));
        }
        temp_env::with_vars(all, f);
    }

    #[test]
    fn defaults_without_environment() {
        with_env(&[], || {
            let config = AppConfig::from_process_env().unwrap();
            assert_eq!(config.port, 8000);
            assert_eq!(config.db_path, PathBuf::from("data/app.db"));
            assert_eq!(config.static_dir, PathBuf::from("frontend"));
            assert_eq!(config.max_upload_bytes, 20 * 1024 * 1024);
            assert!(config.provider.is_none());
            assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8000");
        });
    }

    #[test]
    fn provider_defaults() {
        with_env(&[("OPENAI_API_KEY", "sk-test")], || {
            let provider = AppConfig::from_process_env().unwrap().provider.unwrap();
            assert_eq!(provider.model, "gpt-4o-mini");
            assert_eq!(provider.base_url, "https://api.openai.com/v1");
        });
    }

    #[test]
    fn provider_requires_non_blank_key() {
        with_env(&[("OPENAI_API_KEY", "  ")], || {
            assert!(AppConfig::from_process_env().unwrap().provider.is_none());
        });

        with_env(
            &[
                ("OPENAI_API_KEY", "sk-test"),
                ("OPENAI_MODEL", "gpt-test"),
                ("OPENAI_BASE_URL", "http://localhost:9999/v1/"),
            ],
            || {
                let provider = AppConfig::from_process_env().unwrap().provider.unwrap();
                assert_eq!(provider.api_key, "sk-test");
                assert_eq!(provider.model, "gpt-test");
                assert_eq!(provider.base_url, "http://localhost:9999/v1");
            },
        );
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        with_env(&[("APP_PORT", "eighty")], || {
            let err = AppConfig::from_process_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
        });
    }
}
