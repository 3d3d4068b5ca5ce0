//! HTTP listener and browser access settings

use super::*;
use serde::{Deserialize, Serialize};

/// Listener settings for the label service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind, `0.0.0.0` for all
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Actix worker count; unset means one per CPU
    pub workers: Option<usize>,
    /// Seconds allowed for a client to send its request head
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Upper bound on JSON request bodies in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            timeout: default_timeout(),
            max_body_size: default_max_body_size(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` as passed to the listener
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn worker_count(&self) -> usize {
        self.workers.filter(|&n| n > 0).unwrap_or_else(num_cpus::get)
    }
}

/// Cross-origin access for browser front ends that download label archives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Origins allowed to call the API; empty or `*` allows any
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_methods")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "default_cors_headers")]
    pub allowed_headers: Vec<String>,
    /// Response headers readable by browser clients (download name, batch summary)
    #[serde(default = "default_cors_expose_headers")]
    pub expose_headers: Vec<String>,
    /// Seconds a browser may cache a preflight answer
    #[serde(default = "default_cors_max_age")]
    pub max_age: u32,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec![],
            allowed_methods: default_cors_methods(),
            allowed_headers: default_cors_headers(),
            expose_headers: default_cors_expose_headers(),
            max_age: default_cors_max_age(),
        }
    }
}

impl CorsConfig {
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn default_true() -> bool {
    true
}

fn default_cors_methods() -> Vec<String> {
    vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()]
}

fn default_cors_headers() -> Vec<String> {
    vec!["content-type".to_string(), "x-requested-with".to_string()]
}

fn default_cors_expose_headers() -> Vec<String> {
    ["content-disposition", "x-batch-id", "x-batch-rendered", "x-batch-skipped"]
        .iter()
        .map(|h| h.to_string())
        .collect()
}

fn default_cors_max_age() -> u32 {
    3600
}
