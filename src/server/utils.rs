//! Process-level helpers for the HTTP server

use crate::utils::error::RegistryError;
use std::io::ErrorKind;
use tracing::{info, warn};

/// Resolves on SIGINT, or SIGTERM on unix
pub async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
        info!("Interrupt received, draining in-flight requests");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("SIGTERM received, draining in-flight requests");
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {}
        _ = terminate => {}
    }
}

fn bind_failure_kind(error: &std::io::Error) -> ErrorKind {
    match error.raw_os_error() {
        // EADDRINUSE on macOS (48) and Linux (98)
        Some(48) | Some(98) => ErrorKind::AddrInUse,
        Some(13) => ErrorKind::PermissionDenied,
        _ => error.kind(),
    }
}

/// Turn a listener bind failure into an operator-facing server error
pub fn format_bind_error(error: std::io::Error, bind_addr: &str, port: u16) -> RegistryError {
    let hint = match bind_failure_kind(&error) {
        ErrorKind::AddrInUse => format!(
            "port {port} is taken by another process; stop it or start railqr with --port {} (PORT={})",
            port.saturating_add(1),
            port.saturating_add(1),
        ),
        ErrorKind::PermissionDenied => format!(
            "port {port} needs elevated privileges; pick a port above 1023 with --port or PORT"
        ),
        _ => return RegistryError::server(format!("Cannot listen on {bind_addr}: {error}")),
    };

    RegistryError::server(format!("Cannot listen on {bind_addr}: {hint}"))
}
