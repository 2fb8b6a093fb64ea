//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the upstream weather API.
    #[error("Weather error: {0}")]
    Weather(#[from] crate::domains::weather::WeatherError),

    /// Error raised by the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
