//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the weather tools.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The ToolRouter is built in `domains/tools/router.rs`; every route hands
//! its call to the shared [`ToolRegistry`], which dispatches by tool name.

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{ToolRegistry, build_tool_router};
use crate::domains::weather::{WeatherApi, WeatherApiClient};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap: the upstream client is shared by every clone.
#[derive(Clone)]
pub struct McpServer {
    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Instructions sent to clients on initialization.
    pub const INSTRUCTIONS: &'static str = "Weather data from WeatherAPI.com. Tools take a \
        location query `q` (city name, 'lat,lon', postcode, IATA code or IP address). Dates \
        use YYYY-MM-DD; forecasts cover 1 to 14 days.";

    /// Create a new MCP server backed by the WeatherAPI.com client.
    pub fn new(config: &Config) -> super::error::Result<Self> {
        let client = WeatherApiClient::from_config(config)?;
        Ok(Self::with_api(Arc::new(client)))
    }

    /// Create a server backed by an arbitrary upstream implementation.
    pub fn with_api(api: Arc<dyn WeatherApi>) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(ToolRegistry::new(api)),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(Self::INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
