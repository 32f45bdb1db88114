use std::convert::Infallible;
use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};

use crate::config::AppConfig;

/// Which flavour of the site a request addresses. Mobile pages are served
/// when the `Host` header names the configured mobile host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Desktop,
    Mobile,
}

impl Site {
    pub fn from_host(host: &str, mobile_host: Option<&str>) -> Self {
        let name = host.rsplit_once(':').map_or(host, |(name, port)| {
            if port.chars().all(|c| c.is_ascii_digit()) { name } else { host }
        });
        match mobile_host {
            Some(mobile) if name.eq_ignore_ascii_case(mobile) => Site::Mobile,
            _ => Site::Desktop,
        }
    }

    /// Uses the `Host` header (or the URI authority on HTTP/2) only;
    /// client-supplied `Forwarded`/`X-Forwarded-Host` headers are ignored.
    pub fn resolve(req: &HttpRequest) -> Self {
        let mobile_host = req
            .app_data::<web::Data<AppConfig>>()
            .and_then(|cfg| cfg.mobile_host.as_deref());
        let host = req
            .headers()
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| req.uri().host())
            .unwrap_or("");
        Site::from_host(host, mobile_host)
    }

    pub fn is_mobile(&self) -> bool {
        *self == Site::Mobile
    }
}

impl FromRequest for Site {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Site::resolve(req)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_matching() {
        let mobile = Some("m.example.com");
        assert_eq!(Site::from_host("m.example.com", mobile), Site::Mobile);
        assert_eq!(Site::from_host("M.Example.com:8080", mobile), Site::Mobile);
        assert_eq!(Site::from_host("example.com", mobile), Site::Desktop);
        assert_eq!(Site::from_host("m.example.com", None), Site::Desktop);
        assert_eq!(Site::from_host("", mobile), Site::Desktop);
    }

    #[test]
    fn forwarded_host_is_ignored() {
        use actix_web::test::TestRequest;

        let config = AppConfig {
            mobile_host: Some("m.example.com".to_string()),
            ..AppConfig::default()
        };
        let req = TestRequest::default()
            .app_data(web::Data::new(config))
            .insert_header((header::HOST, "example.com"))
            .insert_header(("x-forwarded-host", "m.example.com"))
            .insert_header((header::FORWARDED, "host=m.example.com"))
            .to_http_request();
        assert_eq!(Site::resolve(&req), Site::Desktop);
    }
}
