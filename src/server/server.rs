//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig, Validate};
use crate::core::render::PdfRenderer;
use crate::server::handlers::{health_check, json_error_handler};
use crate::server::routes;
use crate::server::state::AppState;
use crate::server::utils::{format_bind_error, shutdown_signal};
use crate::storage::StorageLayer;
use crate::utils::error::{RegistryError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, connecting storage and running migrations
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = StorageLayer::new(config.storage(), config.files()).await?;
        storage.migrate().await?;

        let renderer = Arc::new(PdfRenderer::default());
        let state = AppState::new(config.clone(), storage, renderer);

        Ok(Self::with_state(state))
    }

    /// Create a server around already built state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.server().clone(),
            state,
        }
    }

    /// Start the HTTP server and run until a shutdown signal arrives
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || create_app(state.clone()))
            .workers(self.config.worker_count())
            .client_request_timeout(Duration::from_secs(self.config.timeout))
            .disable_signals()
            .bind(&bind_addr)
            .map_err(|e| format_bind_error(e, &bind_addr, port))?
            .run();

        let handle = server.handle();
        tokio::spawn(async move {
            shutdown_signal().await;
            handle.stop(true).await;
        });

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| RegistryError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Create the Actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let server_config = state.config.server();
    let json_config = web::JsonConfig::default()
        .limit(server_config.max_body_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(state.clone())
        .app_data(json_config)
        .wrap(build_cors(&server_config.cors))
        .wrap(TracingLogger::default())
        .wrap(DefaultHeaders::new().add(("Server", "railqr")))
        .route("/health", web::get().to(health_check))
        .configure(routes::health::configure_routes)
        .configure(routes::qr::configure_routes)
}

fn build_cors(cors_config: &crate::config::CorsConfig) -> Cors {
    let mut cors = Cors::default();
    if !cors_config.enabled {
        return cors;
    }

    if cors_config.allows_all_origins() {
        cors = cors.allow_any_origin();
        cors_config.validate().unwrap_or_else(|e| {
            warn!(error = %e, "CORS Configuration Warning");
        });
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    let exposed: Vec<actix_web::http::header::HeaderName> = cors_config
        .expose_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !exposed.is_empty() {
        cors = cors.expose_headers(exposed);
    }

    cors.max_age(cors_config.max_age as usize)
}
