//! HTTP edge error types

use std::net::SocketAddr;

use thiserror::Error;

/// Errors raised while starting or running the edge server
#[derive(Error, Debug)]
pub enum HttpError {
    /// Provider settings missing from the environment
    #[error("Invalid configuration: {0}")]
    Config(#[from] gatehouse_core::CoreError),

    /// Listener could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Server loop terminated with an error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Result type for HTTP edge operations
pub type Result<T> = std::result::Result<T, HttpError>;
