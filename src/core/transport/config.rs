//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// MCP streamable HTTP with event-stream responses (default).
    #[cfg(feature = "sse")]
    Sse(SseConfig),

    /// Standard input/output transport.
    #[cfg(feature = "stdio")]
    Stdio,
}

/// SSE (streamable HTTP) transport configuration.
#[cfg(feature = "sse")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SseConfig {
    /// Port number to listen on.
    #[serde(default = "default_sse_port")]
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_sse_host")]
    pub host: String,

    /// Path the MCP endpoint is mounted at.
    #[serde(default = "default_sse_path")]
    pub path: String,

    /// Interval between keep-alive events on idle streams, in seconds.
    #[serde(default = "default_keep_alive")]
    pub keep_alive_secs: u64,
}

#[cfg(feature = "sse")]
fn default_sse_host() -> String {
    "0.0.0.0".to_string()
}

#[cfg(feature = "sse")]
const fn default_sse_port() -> u16 {
    8000
}

#[cfg(feature = "sse")]
fn default_sse_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "sse")]
const fn default_keep_alive() -> u64 {
    15
}

#[cfg(feature = "sse")]
fn env_port(var: &str, default: u16) -> u16 {
    std::env::var(var)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(default)
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "sse")]
        {
            return Self::Sse(SseConfig::default());
        }

        #[cfg(all(not(feature = "sse"), feature = "stdio"))]
        {
            return Self::Stdio;
        }

        #[cfg(not(any(feature = "sse", feature = "stdio")))]
        {
            compile_error!("At least one transport feature must be enabled: sse or stdio");
        }
    }
}

#[cfg(feature = "sse")]
impl Default for SseConfig {
    fn default() -> Self {
        Self {
            port: default_sse_port(),
            host: default_sse_host(),
            path: default_sse_path(),
            keep_alive_secs: default_keep_alive(),
        }
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    ///
    /// `MCP_TRANSPORT` picks the transport; unknown or unset values fall
    /// back to the default for the enabled features.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "sse")]
            _ => {
                let port = env_port("MCP_SSE_PORT", default_sse_port());
                let host = std::env::var("MCP_SSE_HOST").unwrap_or_else(|_| default_sse_host());
                let path = std::env::var("MCP_SSE_PATH").unwrap_or_else(|_| default_sse_path());
                Self::Sse(SseConfig {
                    port,
                    host,
                    path,
                    ..Default::default()
                })
            }
            #[cfg(not(feature = "sse"))]
            _ => Self::default(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "sse")]
            Self::Sse(cfg) => format!("SSE on {}:{}{}", cfg.host, cfg.port, cfg.path),
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
        }
    }
}
