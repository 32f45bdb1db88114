//! Shared test infrastructure for the feedback integration tests.
//!
//! - `test_config()` - configuration with enforcement on and a mobile host
//! - `lazy_pool()` - a pool that never connects, for routes that stay off the DB
//! - `init_app!` - the full route table wrapped the way `main` wraps it
#![allow(dead_code)]

use feedback::config::AppConfig;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const MOBILE_HOST: &str = "m.input.example.com";
pub const DESKTOP_HOST: &str = "input.example.com";

pub const FX4_DESKTOP: &str =
    "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:2.0) Gecko/20100101 Firefox/4.0";
pub const FX36_DESKTOP: &str =
    "Mozilla/5.0 (Windows; U; Windows NT 6.1; en-US; rv:1.9.2.13) Gecko/20101203 Firefox/3.6.13";
pub const FENNEC4: &str =
    "Mozilla/5.0 (Android; Linux armv7l; rv:2.0) Gecko/20110318 Firefox/4.0 Fennec/4.0";
pub const CHROME: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// ============================================================================
// SETUP
// ============================================================================

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://localhost/feedback_test".to_string(),
        supported_locales: vec!["en-US".to_string(), "de".to_string(), "fr".to_string()],
        mobile_host: Some(MOBILE_HOST.to_string()),
        ..AppConfig::default()
    }
}

/// A pool that only connects on first use. Tests that use it assert
/// behaviour that must be reached without touching the database.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy("postgres://localhost:1/never_used")
        .expect("lazy pool")
}

/// URL-encode form pairs into a request body.
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).expect("encode form")
}

/// Build the app service the way `main` does.
macro_rules! init_app {
    ($config:expr, $pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .app_data(actix_web::web::Data::new($config))
                .app_data(actix_web::web::Data::new($pool))
                .configure(feedback::handlers::configure)
                .default_service(actix_web::web::to(feedback::handlers::not_found)),
        )
        .await
    };
}

#[allow(unused_imports)]
pub(crate) use init_app;
