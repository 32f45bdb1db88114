use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::opinion::{
    FeedbackForm, FeedbackInput, FeedbackSubmission, FormErrors, FormRules, OpinionType,
};
use crate::site::Site;
use crate::templates_structs::{
    APP_NAME, DownloadTemplate, FeedbackIndexTemplate, FormView, MobileDownloadTemplate,
    MobileFeedbackTemplate, MobileIndexTemplate, MobileThanksTemplate, ThanksTemplate,
};
use crate::ua::ClientUa;
use super::helpers;

pub const FEEDBACK_PATH: &str = "/feedback";

/// `?url=` as set by the feedback extension.
#[derive(Debug, Default, Deserialize)]
pub struct PrefillQuery {
    #[serde(default)]
    pub url: String,
}

fn legacy_kind(slug: &str) -> Result<OpinionType, AppError> {
    OpinionType::from_slug(slug).ok_or_else(|| AppError::BadRequest("Invalid feedback type".to_string()))
}

/// Every type gets a form on the unified page; `active` carries the
/// submitted values and errors, the rest are blank.
fn index_forms(active: Option<(&FeedbackForm, FormErrors)>) -> Vec<FormView> {
    let mut forms: Vec<FormView> = OpinionType::ALL.iter().map(|kind| FormView::blank(*kind)).collect();
    if let Some((form, errors)) = active {
        if let Some(slot) = forms.iter_mut().find(|view| view.kind == form.kind()) {
            *slot = FormView::new(form, errors);
        }
    }
    forms
}

fn render_index(config: &AppConfig, forms: Vec<FormView>) -> Result<HttpResponse, AppError> {
    render(FeedbackIndexTemplate {
        app_name: APP_NAME,
        forms,
        post_url: FEEDBACK_PATH,
        max_length: config.max_feedback_length,
    })
}

fn render_mobile_form(
    config: &AppConfig,
    slug: &str,
    form: &FeedbackForm,
    errors: FormErrors,
) -> Result<HttpResponse, AppError> {
    render(MobileFeedbackTemplate {
        app_name: APP_NAME,
        form: FormView::new(form, errors),
        post_url: format!("/{slug}"),
        max_length: config.max_feedback_length,
    })
}

/// GET /feedback
pub async fn feedback_page(
    config: web::Data<AppConfig>,
    site: Site,
) -> Result<HttpResponse, AppError> {
    if site.is_mobile() {
        return render(MobileIndexTemplate { app_name: APP_NAME });
    }
    render_index(&config, index_forms(None))
}

/// POST /feedback
/// The posted `type` field picks the form variant; unknown types are a 400.
pub async fn feedback_submit(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    req: HttpRequest,
    site: Site,
    client: web::ReqData<ClientUa>,
    form: web::Form<FeedbackSubmission>,
) -> Result<HttpResponse, AppError> {
    if site.is_mobile() {
        return render(MobileIndexTemplate { app_name: APP_NAME });
    }

    let submission = form.into_inner();
    let kind = submission.opinion_type()?;
    let bound = FeedbackForm::bind(kind, submission.into());

    match bound.validate(&FormRules::from_config(&config)) {
        Ok(cleaned) => {
            helpers::save_opinion_from_form(&pool, &req, &config, kind.code(), &cleaned, &client.raw).await?;
            Ok(helpers::redirect_to_thanks())
        }
        Err(errors) => render_index(&config, index_forms(Some((&bound, errors)))),
    }
}

/// GET /happy, /sad, /idea (/suggestion)
/// Only the mobile site still serves these; desktop goes to the unified page.
pub async fn give_feedback_page(
    config: web::Data<AppConfig>,
    site: Site,
    path: web::Path<String>,
    query: web::Query<PrefillQuery>,
) -> Result<HttpResponse, AppError> {
    let slug = path.into_inner();
    let kind = legacy_kind(&slug)?;
    if !site.is_mobile() {
        return Ok(helpers::redirect_to_unified(kind));
    }

    let form = FeedbackForm::bind(kind, FeedbackInput::initial(&query.url));
    render_mobile_form(&config, &slug, &form, FormErrors::default())
}

/// POST /happy, /sad, /idea (/suggestion)
/// The type comes from the path; a `type` field in the body is ignored.
pub async fn give_feedback_submit(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    req: HttpRequest,
    site: Site,
    path: web::Path<String>,
    client: web::ReqData<ClientUa>,
    form: web::Form<FeedbackSubmission>,
) -> Result<HttpResponse, AppError> {
    let slug = path.into_inner();
    let kind = legacy_kind(&slug)?;
    if !site.is_mobile() {
        return Ok(helpers::redirect_to_unified(kind));
    }

    let bound = FeedbackForm::bind(kind, form.into_inner().into());
    match bound.validate(&FormRules::from_config(&config)) {
        Ok(cleaned) => {
            helpers::save_opinion_from_form(&pool, &req, &config, kind.code(), &cleaned, &client.raw).await?;
            Ok(helpers::redirect_to_thanks())
        }
        Err(errors) => render_mobile_form(&config, &slug, &bound, errors),
    }
}

/// GET /thanks
pub async fn thanks(site: Site) -> Result<HttpResponse, AppError> {
    match site {
        Site::Mobile => render(MobileThanksTemplate { app_name: APP_NAME }),
        Site::Desktop => render(ThanksTemplate { app_name: APP_NAME }),
    }
}

/// GET /download
pub async fn download(site: Site) -> Result<HttpResponse, AppError> {
    match site {
        Site::Mobile => render(MobileDownloadTemplate { app_name: APP_NAME }),
        Site::Desktop => render(DownloadTemplate { app_name: APP_NAME }),
    }
}
