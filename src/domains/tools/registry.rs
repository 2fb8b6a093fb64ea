//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Dispatch of tool calls by name (every rmcp route ends up here)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::Value;
use tracing::warn;

use super::ToolError;
use super::definitions::{
    ToolDefinition, WeatherAirQualityTool, WeatherAlertsTool, WeatherAstronomyTool,
    WeatherCurrentTool, WeatherForecastTool, WeatherHistoryTool, WeatherSearchTool,
    WeatherSportsTool, WeatherTimezoneTool, common,
};
use crate::domains::weather::WeatherApi;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
#[derive(Clone)]
pub struct ToolRegistry {
    api: Arc<dyn WeatherApi>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by the given upstream API.
    pub fn new(api: Arc<dyn WeatherApi>) -> Self {
        Self { api }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            WeatherCurrentTool::NAME,
            WeatherForecastTool::NAME,
            WeatherHistoryTool::NAME,
            WeatherAlertsTool::NAME,
            WeatherAirQualityTool::NAME,
            WeatherAstronomyTool::NAME,
            WeatherSearchTool::NAME,
            WeatherTimezoneTool::NAME,
            WeatherSportsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            common::to_tool::<WeatherCurrentTool>(),
            common::to_tool::<WeatherForecastTool>(),
            common::to_tool::<WeatherHistoryTool>(),
            common::to_tool::<WeatherAlertsTool>(),
            common::to_tool::<WeatherAirQualityTool>(),
            common::to_tool::<WeatherAstronomyTool>(),
            common::to_tool::<WeatherSearchTool>(),
            common::to_tool::<WeatherTimezoneTool>(),
            common::to_tool::<WeatherSportsTool>(),
        ]
    }

    /// Dispatch a tool call to the matching definition.
    ///
    /// `arguments` must be a JSON object or null.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult, ToolError> {
        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be an object, got {other}"
                )));
            }
        };

        let api = self.api.as_ref();
        match name {
            WeatherCurrentTool::NAME => common::call::<WeatherCurrentTool>(arguments, api).await,
            WeatherForecastTool::NAME => common::call::<WeatherForecastTool>(arguments, api).await,
            WeatherHistoryTool::NAME => common::call::<WeatherHistoryTool>(arguments, api).await,
            WeatherAlertsTool::NAME => common::call::<WeatherAlertsTool>(arguments, api).await,
            WeatherAirQualityTool::NAME => {
                common::call::<WeatherAirQualityTool>(arguments, api).await
            }
            WeatherAstronomyTool::NAME => {
                common::call::<WeatherAstronomyTool>(arguments, api).await
            }
            WeatherSearchTool::NAME => common::call::<WeatherSearchTool>(arguments, api).await,
            WeatherTimezoneTool::NAME => common::call::<WeatherTimezoneTool>(arguments, api).await,
            WeatherSportsTool::NAME => common::call::<WeatherSportsTool>(arguments, api).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
