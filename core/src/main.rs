mod config;
mod error;
mod models;
mod outbound;
mod routes;
mod serializers;
mod store;
mod usecases;
mod webhook;

#[cfg(test)]
mod testing;

use actix_web::{web, App, HttpServer};
use std::io::{Error, Result};
use actix_web::middleware::Logger;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Settings;
use crate::usecases::UseCases;

#[actix_web::main]
async fn main() -> Result<()> {
    // A missing .env is fine; variables may come from the real environment.
    let _ = dotenvy::dotenv();
    init_tracing();
    info!("Starting course-market server");

    let settings = Settings::new().map_err(|e| {
        error!("Invalid configuration: {}", e);
        Error::other(e)
    })?;

    let db_pool = store::connect(&settings).await.map_err(|e| {
        error!("Failed to connect to Postgres: {}", e);
        Error::other(e)
    })?;

    let usecases = UseCases::new(&settings, db_pool);
    let finalize_checkout = web::Data::new(usecases.finalize_checkout.clone());
    let usecases = web::Data::new(usecases);

    info!("Listening on {}:{}", settings.server_url, settings.server_port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(usecases.clone())
            .app_data(finalize_checkout.clone())
            .app_data(routes::json_config())
            .app_data(routes::path_config())
            .service(routes::stripe_webhook)
            .service(routes::create_checkout_session)
            .service(web::scope("/api").configure(routes::api))
    })
        .bind((settings.server_url.clone(), settings.server_port))?
        .run()
        .await
}

fn init_tracing() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_line_number(true)
        .init();
}
