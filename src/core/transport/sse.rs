//! SSE transport implementation.
//!
//! MCP streamable HTTP served by axum: clients POST JSON-RPC messages to the
//! MCP path and receive responses and server-initiated messages as
//! `text/event-stream` streams. Each session gets its own clone of the
//! server, so calls on different streams run independently.

use std::sync::Arc;
use std::time::Duration;

use axum::{Json, Router, response::IntoResponse, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{TransportError, TransportResult, config::SseConfig};
use crate::core::McpServer;

/// SSE transport handler.
pub struct SseTransport {
    config: SseConfig,
}

impl SseTransport {
    /// Create a new SSE transport with the given config.
    pub fn new(config: SseConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router serving the MCP endpoint and the health check.
    pub fn router(&self, server: McpServer) -> Router {
        let service = StreamableHttpService::new(
            move || Ok(server.clone()),
            Arc::new(LocalSessionManager::default()),
            StreamableHttpServerConfig {
                sse_keep_alive: Some(Duration::from_secs(self.config.keep_alive_secs)),
                ..Default::default()
            },
        );

        Router::new()
            .nest_service(&self.config.path, service)
            .route("/health", get(health_check))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the SSE transport until the process is terminated.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (MCP over SSE)", addr);
        info!("  → MCP:    {}", self.config.path);
        info!("  → Health: GET /health");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
