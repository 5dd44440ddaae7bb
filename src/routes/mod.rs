use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod api;

/// Renders a service failure as the HTTP response the API contract promises.
///
/// Business failures map on the error kind, never on message text. Store
/// failures are logged here and collapse to an opaque 500.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::BadArguments => {
            HttpResponse::BadRequest().json(json!({"error": "Bad Request"}))
        }
        ServiceError::AlreadyExists => {
            HttpResponse::BadRequest().json(json!({"error": "Already exists"}))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({"error": "Not found"})),
        ServiceError::Repository(e) => {
            log::error!("Repository failure: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
