use actix_web::web;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod catalog;
pub mod health;
pub mod scorecards;

/// Malformed JSON bodies and query strings answer with the same
/// problem+json shape as every other error.
fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejected JSON body");
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid JSON body: {err}")).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query: {err}")).into()
    }));
}

/// Register every route. Used by `main.rs` and by integration tests, so
/// both exercise the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    extractor_configs(cfg);

    // Health check: /health
    cfg.configure(health::configure_routes);

    // Live scoring: /api/scorecards/{match_id}/**
    cfg.service(web::scope("/api/scorecards").configure(scorecards::configure_routes));

    // Roster, fixtures, fielding and logo: /api/**
    cfg.service(web::scope("/api").configure(catalog::configure_routes));
}
