//! Health check and status endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::storage::StorageHealthStatus;
use actix_web::{HttpResponse, Result as ActixResult, web};
use std::borrow::Cow;
use tracing::{debug, warn};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health/detailed", web::get().to(detailed_health_check));
}

/// Detailed health check endpoint
///
/// Reports registry store and uploads directory health along with the number
/// of registered codes.
async fn detailed_health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Detailed health check requested");

    let storage = state.storage.health_check().await;
    let registered_codes = match state.storage.database.stats().await {
        Ok(stats) => Some(stats.total_records),
        Err(e) => {
            warn!(error = %e, "Failed to read registry statistics");
            None
        }
    };

    let status = DetailedHealthStatus {
        status: overall_status(&storage),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        git_hash: Cow::Borrowed(env!("GIT_HASH")),
        uptime_seconds: get_uptime_seconds(),
        storage,
        registered_codes,
    };

    let response = ApiResponse::success(status);
    if response.data.as_ref().is_some_and(|s| s.storage.overall) {
        Ok(HttpResponse::Ok().json(response))
    } else {
        Ok(HttpResponse::ServiceUnavailable().json(response))
    }
}

/// Detailed health status
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailedHealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
    git_hash: Cow<'static, str>,
    uptime_seconds: u64,
    storage: StorageHealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    registered_codes: Option<u64>,
}

fn overall_status(storage: &StorageHealthStatus) -> Cow<'static, str> {
    if storage.overall {
        Cow::Borrowed("healthy")
    } else {
        Cow::Borrowed("degraded")
    }
}

/// Seconds since the first health request
fn get_uptime_seconds() -> u64 {
    static START_TIME: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
    let start = START_TIME.get_or_init(std::time::Instant::now);
    start.elapsed().as_secs()
}
