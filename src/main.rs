mod api;
mod app_data;
mod config;
mod errors;
mod stores;
mod types;

use std::sync::Arc;

use poem::{listener::TcpListener, Server};

use app_data::AppData;
use config::{BootstrapSettings, SystemEnvironment};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = config::init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        return Ok(());
    }

    let settings = match BootstrapSettings::load(&SystemEnvironment) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Ok(());
        }
    };

    // Connect and migrate before serving anything; the original behavior is
    // to never start listening when the database is unreachable
    let db = match config::database::init_database(&settings).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            return Ok(());
        }
    };

    if let Err(e) = config::database::migrate_database(&db).await {
        tracing::error!("Failed to run migrations: {}", e);
        return Ok(());
    }

    tracing::info!("Connected to the lost and found database");

    let app_data = Arc::new(AppData::init(db));
    let app = api::build_app(app_data);

    let addr = format!("0.0.0.0:{}", settings.port());
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger",
        settings.port()
    );

    Server::new(TcpListener::bind(addr)).run(app).await
}
