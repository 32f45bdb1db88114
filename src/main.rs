use actix_web::{App, HttpServer, middleware, web};

use feedback::config::AppConfig;
use feedback::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env file is fine; the environment may already be set.
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .map_err(std::io::Error::other)?;
    db::run_migrations(&pool).await.map_err(std::io::Error::other)?;

    if config.ua_policy.enforce {
        log::info!(
            "User-Agent enforcement on (Firefox >= {}, mobile >= {})",
            config.ua_policy.latest_firefox,
            config.ua_policy.latest_mobile
        );
    } else {
        log::warn!("User-Agent enforcement is off; any recognized browser may submit feedback");
    }
    match &config.mobile_host {
        Some(host) => log::info!("Mobile site served on {host}"),
        None => log::info!("No MOBILE_HOST set; serving desktop pages only"),
    }

    let bind_addr = config.bind_addr.clone();
    log::info!("Starting server at http://{bind_addr}");

    let config = web::Data::new(config);
    let pool = web::Data::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(pool.clone())
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
