//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each route carries the tool's metadata and forwards calls to the shared
//! [`ToolRegistry`]; the generic route glue lives in `definitions/common.rs`.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    WeatherAirQualityTool, WeatherAlertsTool, WeatherAstronomyTool, WeatherCurrentTool,
    WeatherForecastTool, WeatherHistoryTool, WeatherSearchTool, WeatherSportsTool,
    WeatherTimezoneTool, common::create_route,
};
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<WeatherCurrentTool, S>(registry.clone()))
        .with_route(create_route::<WeatherForecastTool, S>(registry.clone()))
        .with_route(create_route::<WeatherHistoryTool, S>(registry.clone()))
        .with_route(create_route::<WeatherAlertsTool, S>(registry.clone()))
        .with_route(create_route::<WeatherAirQualityTool, S>(registry.clone()))
        .with_route(create_route::<WeatherAstronomyTool, S>(registry.clone()))
        .with_route(create_route::<WeatherSearchTool, S>(registry.clone()))
        .with_route(create_route::<WeatherTimezoneTool, S>(registry.clone()))
        .with_route(create_route::<WeatherSportsTool, S>(registry))
}
