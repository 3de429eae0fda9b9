use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use mcq_relay::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{RequestIdMiddleware, ACCESS_LOG_FORMAT},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).map_err(|e| {
        log::error!("Failed to initialise application state: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    log::info!("starting HTTP server on {}:{}", host, port);
    log::info!("relay consumer targets {}", state.config.relay_endpoint_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure)
            // Logger runs outside RequestIdMiddleware so it sees the x-request-id header.
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(ACCESS_LOG_FORMAT))
            .wrap(Cors::permissive())
    })
    .bind((host, port))?
    .run()
    .await
}
