//! Runtime configuration of the static host, read from the environment.

use std::env::VarError;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} inválida: {value}")]
    InvalidEnvVar { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the default browser on the served URL after start.
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// - `FORNECEDORES_HOST`: bind address, default `127.0.0.1`.
    /// - `FORNECEDORES_PORT`: bind port, default `8080`.
    /// - `FORNECEDORES_OPEN_BROWSER`: `1`, `true` or `yes` to open a browser.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let host = lookup("FORNECEDORES_HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("FORNECEDORES_PORT") {
            Ok(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    var: "FORNECEDORES_PORT",
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        let open_browser = lookup("FORNECEDORES_OPEN_BROWSER")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
