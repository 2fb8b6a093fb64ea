//! Transport layer for the MCP server.
//!
//! This module provides different transport implementations:
//! - **SSE**: MCP streamable HTTP, responses as event streams (default) - feature: `sse`
//! - **STDIO**: Standard input/output - feature: `stdio`
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the MCP server handler.

mod config;
mod error;
mod service;

#[cfg(feature = "sse")]
pub mod sse;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

// Re-export configs for convenience
#[cfg(feature = "sse")]
pub use config::SseConfig;
