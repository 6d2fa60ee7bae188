use std::net::SocketAddr;
use thiserror::Error;

/// Errors that stop the service from starting or keep it from serving
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("environment variable error: {0}")]
    Config(#[from] envy::Error),

    #[error("invalid CORS origin '{origin}'")]
    InvalidCorsOrigin { origin: String },

    #[error("invalid listen address '{0}'")]
    InvalidAddress(String),

    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
