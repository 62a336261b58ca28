use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use crate::templates_structs::ApiErrorResponse;

#[derive(Debug)]
pub enum AppError {
    /// A query parameter that does not name a known role, status, column, or page.
    BadRequest(String),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(e) => write!(f, "Bad request: {e}"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(details) => {
                log::warn!("{self}");
                HttpResponse::BadRequest().json(ApiErrorResponse {
                    error: "Invalid query".to_string(),
                    details: Some(details.clone()),
                })
            }
            AppError::NotFound => HttpResponse::NotFound().json(ApiErrorResponse {
                error: "Not found".to_string(),
                details: None,
            }),
        }
    }
}
