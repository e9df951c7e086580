use std::env;

use crate::error::{Result, ShellError};

/// Compiled-in endpoint; set `CQL_DEMO_HOST` / `CQL_DEMO_PORT` when building.
pub const DEFAULT_HOST: &str = match option_env!("CQL_DEMO_HOST") {
    Some(host) => host,
    None => "127.0.0.1",
};
pub const DEFAULT_PORT: &str = match option_env!("CQL_DEMO_PORT") {
    Some(port) => port,
    None => "9042",
};

/// Runtime override, same variable the rest of our Scylla tooling reads.
pub const URI_ENV: &str = "SCYLLA_URI";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        match env::var(URI_ENV) {
            Ok(uri) if !uri.trim().is_empty() => Self::parse_contact_point(uri.trim()),
            _ => Self::compiled(),
        }
    }

    pub fn compiled() -> Result<Self> {
        Self::parse_contact_point(&format!("{DEFAULT_HOST}:{DEFAULT_PORT}"))
    }

    pub fn parse_contact_point(uri: &str) -> Result<Self> {
        let (host, port) = uri
            .rsplit_once(':')
            .ok_or_else(|| ShellError::InvalidContactPoint(uri.to_string()))?;
        let port: u16 = port
            .parse()
            .map_err(|_| ShellError::InvalidContactPoint(uri.to_string()))?;
        if host.is_empty() {
            return Err(ShellError::InvalidContactPoint(uri.to_string()));
        }
        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    pub fn contact_point(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
