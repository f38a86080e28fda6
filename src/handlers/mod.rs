pub mod ask_handler;
pub mod assistant_handler;
pub mod health_handler;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::AppError;

pub use ask_handler::ask_gemini;
pub use assistant_handler::ask_assistant;
pub use health_handler::health_check;

/// Registers every route plus the JSON error handling and the 404 fallback.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(ask_gemini)
        .service(ask_assistant)
        .service(health_check)
        .default_service(web::to(not_found));
}

/// Malformed bodies are reported as JSON validation errors instead of
/// actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!("Rejected request body for {}: {}", req.path(), err);
        AppError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::warn!(
        "404 Not Found: Method={}, Path={}",
        req.method(),
        req.path()
    );
    HttpResponse::NotFound().body("Not Found")
}
