use actix_web::{HttpRequest, HttpResponse, http::header};
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::locale;
use crate::models::opinion::{self, CleanedFeedback, Opinion, OpinionType};

pub const THANKS_PATH: &str = "/thanks";

/// Given a validated form and its type code, store the opinion.
///
/// The locale is detected from the request. An unknown `type_code` fails
/// before anything is written.
pub async fn save_opinion_from_form(
    pool: &PgPool,
    req: &HttpRequest,
    config: &AppConfig,
    type_code: i32,
    form: &CleanedFeedback,
    user_agent: &str,
) -> Result<Opinion, AppError> {
    let locale = locale::detect_language(req, config);
    let new = opinion::build_opinion(type_code, form, user_agent, &locale)?;
    let saved = opinion::create(pool, &new).await?;

    log::info!(
        "Saved opinion #{} ({}, locale {}, url {})",
        saved.id,
        saved.opinion_type.label(),
        saved.locale,
        if saved.url.is_empty() { "dropped" } else { "kept" }
    );
    Ok(saved)
}

pub fn redirect_to_thanks() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, THANKS_PATH))
        .finish()
}

/// Legacy per-type pages moved to anchors on the unified page.
pub fn redirect_to_unified(kind: OpinionType) -> HttpResponse {
    HttpResponse::MovedPermanently()
        .insert_header((header::LOCATION, format!("/feedback#{}", kind.form_prefix())))
        .finish()
}
