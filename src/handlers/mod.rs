pub mod api_v1;
pub mod feedback_handlers;
pub mod helpers;
pub mod opinion_handlers;

use actix_web::{
    Error, HttpResponse, Resource,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::from_fn,
    web,
};

use crate::errors;
use crate::pipeline;

/// A feedback submission resource with the request stages applied, outermost
/// first: `forward_mobile`, `enforce_ua`, `never_cache`.
///
/// These endpoints take no CSRF token: the legacy client that embeds the
/// forms cannot supply one.
fn submission(
    path: &'static str,
) -> Resource<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody + 'static>,
        Error = Error,
        InitError = (),
    > + 'static,
> {
    web::resource(path)
        .wrap(from_fn(pipeline::never_cache))
        .wrap(from_fn(pipeline::enforce_ua))
        .wrap(from_fn(pipeline::forward_mobile))
}

/// Register every feedback route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(|| async {
            HttpResponse::Found()
                .insert_header(("Location", feedback_handlers::FEEDBACK_PATH))
                .finish()
        }))
        .route("/thanks", web::get().to(feedback_handlers::thanks))
        .route(pipeline::DOWNLOAD_PATH, web::get().to(feedback_handlers::download))
        .route("/opinion/{id:\\d+}", web::get().to(opinion_handlers::detail))
        .service(web::scope("/api/v1").configure(api_v1::configure))
        .service(
            submission(feedback_handlers::FEEDBACK_PATH)
                .route(web::get().to(feedback_handlers::feedback_page))
                .route(web::post().to(feedback_handlers::feedback_submit)),
        )
        // Legacy per-type pages; `suggestion` is the old name of `idea`.
        .service(
            submission("/{kind:happy|sad|idea|suggestion}")
                .route(web::get().to(feedback_handlers::give_feedback_page))
                .route(web::post().to(feedback_handlers::give_feedback_submit)),
        );
}

/// Default service: the static 404 page.
pub async fn not_found() -> HttpResponse {
    errors::not_found_page()
}
