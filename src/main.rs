//! Movie Catalog
//!
//! REST API for movies and genres backed by MongoDB, with request
//! validation and generated OpenAPI documentation.

use actix_web::{web, App, HttpServer, middleware};
use anyhow::Context;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;
use std::sync::Arc;

mod api;
mod config;
mod db;
mod domain;
mod validation;

use crate::config::{DatabaseSettings, Settings};
use crate::db::{DocumentStore, MemoryStore, MongoConnection, MongoStore, MovieStore};
use crate::domain::{Genre, Movie};

/// Application state shared across all handlers
pub struct AppState {
    pub movies: Arc<dyn MovieStore>,
    pub genres: Arc<dyn DocumentStore<Genre>>,
}

impl AppState {
    /// Back both collections with MongoDB. Records stay in memory only when
    /// no database URL is configured.
    ///
    /// A database that does not answer the startup ping is still used; the
    /// driver reconnects on demand and operations fail until it is back.
    async fn connect(database: &DatabaseSettings) -> anyhow::Result<Self> {
        if database.url.is_empty() {
            info!("No database URL configured, keeping records in memory");
            return Ok(Self::in_memory());
        }

        let connection = MongoConnection::new(&database.url, &database.name)
            .await
            .context("Failed to create MongoDB client")?;

        if let Err(e) = connection.ping().await {
            error!("MongoDB connection test failed: {}. Requests will fail until it is reachable.", e);
        }

        Ok(AppState {
            movies: Arc::new(MongoStore::<Movie>::new(connection.database())),
            genres: Arc::new(MongoStore::<Genre>::new(connection.database())),
        })
    }

    fn in_memory() -> Self {
        AppState {
            movies: Arc::new(MemoryStore::<Movie>::new()),
            genres: Arc::new(MemoryStore::<Genre>::new()),
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("movie_catalog=info".parse()?)
                .add_directive("actix_web=info".parse()?)
        )
        .json()
        .init();

    let settings = Settings::load()?;
    let bind_addr = settings.bind_addr();

    info!(
        "Starting Movie Catalog v{} on {}",
        env!("CARGO_PKG_VERSION"),
        bind_addr
    );

    let app_state = web::Data::new(AppState::connect(&settings.database).await?);
    let workers = settings.server.workers.unwrap_or_else(|| num_cpus::get() * 2);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("X-Service", "movie-catalog"))
                    .add(("X-Version", env!("CARGO_PKG_VERSION")))
            )
            .configure(api::configure_routes)
            .default_service(web::to(api::fallback::not_found))
    })
    .workers(workers)
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
