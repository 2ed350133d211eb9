use crate::booking::BookingRecorder;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::router::{handle, AppState};
use astra::Server;
use env_logger::Env;

mod booking;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    // 1️⃣ Database handle + schema
    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db, &config.schema_path) {
        log::error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 2️⃣ Shared state for every worker
    let recorder = BookingRecorder::new(db, config.pricing.clone(), config.id_prefix.clone());
    let addr = config.addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    let app = AppState { config, recorder };

    log::info!("Starting server at http://{addr}");

    // 3️⃣ Serve requests
    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => responses::error_to_response(err),
        };
        log::info!("{method} {path} -> {}", resp.status().as_u16());
        resp
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
