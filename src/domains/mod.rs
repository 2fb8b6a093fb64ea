//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the MCP tools callable by clients
//! - **weather**: upstream access to the WeatherAPI.com REST API

pub mod tools;
pub mod weather;
