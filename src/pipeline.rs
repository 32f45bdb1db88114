//! Request stages wrapped around the feedback submission endpoints.
//!
//! Routes apply them in this order (outermost first):
//! `forward_mobile` → `enforce_ua` → `never_cache` → handler.
//! A stage that answers early (a redirect or a 400) skips everything after it.

use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    http::header::{self, HeaderValue},
    middleware::Next,
    web,
};

use crate::config::AppConfig;
use crate::site::Site;
use crate::ua::{self, Browser, UaVerdict, check_user_agent};

pub const DOWNLOAD_PATH: &str = "/download";

fn user_agent(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
}

/// Send mobile browsers that land on the desktop site over to the mobile
/// host, keeping path and query. Off when no mobile host is configured.
pub async fn forward_mobile(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if let Some(location) = mobile_location(&req) {
        log::debug!("Forwarding mobile client to {location}");
        let response = HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish();
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

fn mobile_location(req: &ServiceRequest) -> Option<String> {
    let config = req.app_data::<web::Data<AppConfig>>()?;
    let mobile_host = config.mobile_host.as_deref()?;
    if Site::resolve(req.request()).is_mobile() {
        return None;
    }
    let parsed = ua::parse(user_agent(req)?)?;
    if parsed.browser != Browser::Mobile {
        return None;
    }
    let scheme = req.connection_info().scheme().to_string();
    let path = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
    Some(format!("{scheme}://{mobile_host}{path}"))
}

/// Gate on the `User-Agent` header. Accepted clients are stored in the
/// request extensions as `ClientUa` for the handler to pick up.
pub async fn enforce_ua(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let verdict = match req.app_data::<web::Data<AppConfig>>() {
        Some(config) => check_user_agent(user_agent(&req), req.method(), &config.ua_policy),
        None => return Err(ErrorInternalServerError("AppConfig is not registered")),
    };

    match verdict {
        UaVerdict::Accept(client) => {
            req.extensions_mut().insert(client);
            next.call(req).await.map(|res| res.map_into_left_body())
        }
        UaVerdict::RedirectToDownload => {
            log::debug!(
                "Redirecting {} {} to download page (user agent {:?})",
                req.method(),
                req.path(),
                user_agent(&req).unwrap_or("")
            );
            let response = HttpResponse::Found()
                .insert_header((header::LOCATION, DOWNLOAD_PATH))
                .finish();
            Ok(req.into_response(response).map_into_right_body())
        }
        UaVerdict::Reject(message) => {
            log::debug!("Rejecting {} {}: {message}", req.method(), req.path());
            let response = HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(message);
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}

/// Mark the response as uncacheable; feedback pages depend on the caller.
pub async fn never_cache(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let mut res = next.call(req).await?;
    let headers = res.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("max-age=0, no-cache, no-store, must-revalidate, private"),
    );
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    headers.insert(header::VARY, HeaderValue::from_static("User-Agent"));
    Ok(res)
}
