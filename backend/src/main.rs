mod config;
mod cors;
mod services;
mod store;

use crate::config::Config;
use crate::store::Store;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::default();

    // Open the database and create the tables on first start
    let store = Store::open(&config.database_path).map_err(std::io::Error::other)?;
    let store = web::Data::new(store);
    info!("Using database {}", config.database_path);

    info!("Server running at {}", config.url());

    let json_limit = config.json_limit;
    HttpServer::new(move || {
        App::new()
            .wrap(cors::allow_any_origin())
            .wrap(Logger::default())
            .app_data(services::json_config(json_limit))
            .app_data(store.clone())
            .configure(services::configure)
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
