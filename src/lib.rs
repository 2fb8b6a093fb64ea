//! Weather MCP Server Library
//!
//! This crate exposes the WeatherAPI.com REST API as a set of Model Context
//! Protocol (MCP) tools: current conditions, forecast, history, alerts, air
//! quality, astronomy, location search, time zone and sports events.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the nine MCP tools, their registry and router
//!   - **weather**: the upstream HTTP client and parameter validation
//!
//! # Transport
//!
//! The default `sse` transport speaks MCP streamable HTTP: clients POST to
//! `http://<host>:8000/mcp` and read responses as `text/event-stream`. The
//! legacy SSE endpoint pair (`GET /sse` plus `POST /messages/`) is not
//! served, so clients configured for it must point at `/mcp` instead (or set
//! `MCP_SSE_PATH`). `MCP_TRANSPORT=stdio` selects stdin/stdout when built
//! with the `stdio` feature.
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::new(&config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
