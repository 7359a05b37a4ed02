use actix_cors::Cors;
use actix_web::http::{Method, header};
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;

mod api;
mod auth;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod models;
mod routes;
mod seed;
mod service;
mod store;

use config::Config;
use db::init_store;
use routes::AppState;

use crate::docs::ApiDoc;
use tracing::info;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

fn cors(config: &Config) -> Cors {
    config
        .cors_allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .supports_credentials()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(environment = %config.environment, "Server starting...");

    let (leave_store, employee_store) = init_store(&config).await?;

    if config.seed_demo_users {
        seed::seed_demo_users(employee_store.as_ref()).await?;
    }

    let server_addr = config.server_addr.clone();
    let state = AppState::new(config, leave_store, employee_store);

    info!(addr = %server_addr, "Listening");

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&state.config))
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .configure(|cfg| routes::configure(cfg, &state))
    })
    .bind(&server_addr)
    .with_context(|| format!("binding {server_addr}"))?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
