mod web;

use std::sync::Arc;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use hotelpress::config::Config;
use hotelpress::services::HttpAuthClient;

use crate::web::cookies::CookieSettings;
use crate::web::middleware::SecurityHeaders;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let client = HttpAuthClient::new(&config.auth_endpoint, config.auth_timeout)
        .map_err(std::io::Error::other)?;
    log::info!("Authenticating against {}", client.endpoint());

    let directory = if config.stub_auth {
        let directory = config.build_directory().map_err(std::io::Error::other)?;
        log::warn!(
            "Development auth endpoint enabled with {} account(s)",
            directory.len()
        );
        Some(Data::new(directory))
    } else {
        None
    };

    let state = Data::new(web::AppState::new(
        Arc::new(client),
        CookieSettings {
            secure: config.cookie_secure,
            remember_me_days: config.remember_me_days,
        },
    ));

    log::info!("Listening on {}", config.bind_addr);

    HttpServer::new(move || {
        let directory = directory.clone();

        App::new()
            .wrap(SecurityHeaders)
            .app_data(state.clone())
            .configure(web::handlers::configure)
            .configure(|cfg| {
                if let Some(directory) = directory {
                    cfg.app_data(directory);
                    web::handlers::api::configure(cfg);
                }
            })
            .service(Files::new("/static", "./static").prefer_utf8(true))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
