// Route exports
pub mod compatibility;

use actix_web::web;

use crate::error::ApiError;

pub use compatibility::AppState;

/// Rank requests carry whole candidate batches
const MAX_JSON_BYTES: usize = 4 * 1024 * 1024;

/// JSON extractor config that reports malformed bodies as `ErrorResponse`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BYTES)
        .error_handler(|err, req| {
            tracing::info!("JSON payload error on {}: {}", req.path(), err);
            ApiError::InvalidJson(err.to_string()).into()
        })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .configure(compatibility::configure),
    );
}
