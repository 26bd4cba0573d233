//! src/routes/health_check.rs
use actix_web::HttpResponse;

/// Liveness probe for the hosting platform.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
