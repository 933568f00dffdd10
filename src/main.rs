use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use org_console_backend::{
    config::{app_config::AppConfig, app_state::AppState, cors::configure_cors},
    routes::configure_routes,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let state = AppState::build(&config).await?;

    let bind_address = config.bind_address();
    let allowed_origin = config.allowed_origin.clone();
    info!(
        "Starting server on {}:{} with {} storage",
        bind_address.0, bind_address.1, config.storage_backend
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(configure_cors(&allowed_origin))
            .configure(|cfg| configure_routes(cfg, &state))
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}:{}", bind_address.0, bind_address.1))?
    .run()
    .await
    .context("Server terminated unexpectedly")
}
