//! Startup and serve errors for the SSR host.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
