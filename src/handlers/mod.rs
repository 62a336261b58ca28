pub mod api;

use actix_web::{web, HttpResponse};

use crate::errors::AppError;

/// Register every route of the console. Pair with
/// `.default_service(web::to(handlers::not_found))` on the `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(api::configure));
}

/// JSON 404 for unmatched routes.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}
