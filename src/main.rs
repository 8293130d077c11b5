//! Markdown content server - entry point
//!
//! Serves the file operations API for the markdown content-management
//! application.

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use log::{error, info};

use mdcms_server::config::ServerConfig;
use mdcms_server::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = ServerConfig::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });
    let addr = config.socket_addr();

    info!("Launching markdown content server on {}", addr);

    let data = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind(addr)?
    .run()
    .await
}
