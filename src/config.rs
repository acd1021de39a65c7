//! Site host configuration.
//!
//! Leptos options come from the cargo-leptos metadata (exported as `LEPTOS_*`
//! environment variables). `PORT` overrides only the port of the configured
//! site address, keeping its host.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use leptos::prelude::{LeptosOptions, get_configuration};

use crate::error::ServerError;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos_options: LeptosOptions,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build the host config from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if the Leptos configuration cannot be
    /// loaded or `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        let conf = get_configuration(None).map_err(|e| ServerError::Config(format!("leptos configuration: {e}")))?;
        let leptos_options = conf.leptos_options;
        let addr = apply_port_override(leptos_options.site_addr, std::env::var("PORT").ok().as_deref())?;
        Ok(Self { leptos_options, addr })
    }
}

fn apply_port_override(addr: SocketAddr, raw: Option<&str>) -> Result<SocketAddr, ServerError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(addr);
    };
    let port = raw
        .parse::<u16>()
        .map_err(|_| ServerError::Config(format!("invalid PORT {raw:?}")))?;
    Ok(SocketAddr::new(addr.ip(), port))
}
