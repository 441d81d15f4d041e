//! Listener configuration parsed from environment variables.
//!
//! Leptos' own options (site root, pkg dir, output name, site address) come
//! from `get_configuration`. `HOST` and `PORT` override the host and port of
//! the Leptos site address independently; unset, the site address is used as
//! is.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

use crate::error::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `site_addr`'s IP
    /// - `PORT`: default `site_addr`'s port
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidConfig`] if either variable is set but
    /// does not parse.
    pub fn from_env(site_addr: SocketAddr) -> Result<Self, ServerError> {
        Self::resolve(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref(), site_addr)
    }

    fn resolve(host: Option<&str>, port: Option<&str>, site_addr: SocketAddr) -> Result<Self, ServerError> {
        Ok(Self { host: parse_host(host, site_addr.ip())?, port: parse_port(port, site_addr.port())? })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>, default: u16) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ServerError::InvalidConfig { var: "PORT", value: value.to_owned() }),
    }
}

fn parse_host(raw: Option<&str>, default: IpAddr) -> Result<IpAddr, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<IpAddr>()
            .map_err(|_| ServerError::InvalidConfig { var: "HOST", value: value.to_owned() }),
    }
}
