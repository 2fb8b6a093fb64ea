//! Tools domain module.
//!
//! This module exposes the nine weather operations as MCP tools.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/SSE transport
//! - `registry.rs` - Central tool registry and name-based dispatch
//! - `error.rs` - Tool-specific error types

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
