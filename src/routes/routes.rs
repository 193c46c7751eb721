use actix_web::{error, web, HttpResponse};

use super::auth::auth_handlers;
use super::cms::cms_handlers;
use super::common_models::{FailureResponse, INVALID_REQUEST};

// Malformed JSON bodies get the same {success, error} shape as handler failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::info!("Rejected request body: {}", err);
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(FailureResponse::new(INVALID_REQUEST)),
        )
        .into()
    })
}

pub fn auth_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .app_data(json_config())
            .route("/login", web::post().to(auth_handlers::login))
            .route("/logout", web::post().to(auth_handlers::logout))
            .route("/me", web::get().to(auth_handlers::me))
    );
}

pub fn cms_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/cms/pages")
            .route("/public", web::get().to(cms_handlers::get_public_pages))
            .route("/public/{slug}", web::get().to(cms_handlers::get_public_page))
    );
}
