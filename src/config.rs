//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_BIND: IpAddr = IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: expected {expected}")]
    Invalid { var: &'static str, value: String, expected: &'static str },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Overrides the Leptos `site_root` when set.
    pub site_root: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: DEFAULT_BIND, port: DEFAULT_PORT, site_root: None }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `CAMPUS_BIND`: listen address, default `0.0.0.0`
    /// - `PORT`: listen port, default 3000
    /// - `CAMPUS_SITE_ROOT`: directory holding the built `pkg/` assets
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind: parse_bind(lookup("CAMPUS_BIND").as_deref())?,
            port: parse_port(lookup("PORT").as_deref())?,
            site_root: parse_site_root(lookup("CAMPUS_SITE_ROOT").as_deref()),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

pub fn parse_bind(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let Some(value) = non_blank(raw) else {
        return Ok(DEFAULT_BIND);
    };
    value.parse().map_err(|_| ConfigError::Invalid {
        var: "CAMPUS_BIND",
        value: value.to_owned(),
        expected: "an IP address",
    })
}

pub fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(value) = non_blank(raw) else {
        return Ok(DEFAULT_PORT);
    };
    value.parse().map_err(|_| ConfigError::Invalid {
        var: "PORT",
        value: value.to_owned(),
        expected: "a port number (0-65535)",
    })
}

pub fn parse_site_root(raw: Option<&str>) -> Option<PathBuf> {
    non_blank(raw).map(PathBuf::from)
}
