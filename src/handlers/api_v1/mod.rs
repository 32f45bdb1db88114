pub mod opinions;

use actix_web::web;

/// Configure API v1 routes. The API is read-only.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/opinions")
            .route("/{id:\\d+}", web::get().to(opinions::read))
    );
}
