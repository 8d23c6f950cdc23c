pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;
pub mod state;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::Config;
pub use db::{create_pool, DbPool};
pub use state::{AppState, SharedStore};

use errors::AppError;
use infrastructure::{InMemoryDocumentStore, PostgresDocumentStore};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), BoxError> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    if !applied.is_empty() {
        log::info!("Applied {} database migration(s)", applied.len());
    }
    Ok(())
}

/// Pick the document store for `config`: Postgres when `DATABASE_URL` is set
/// (migrating it first), otherwise an in-memory store.
pub fn connect_store(config: &Config) -> Result<SharedStore, BoxError> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url)?;
            run_migrations(&pool)?;
            log::info!(
                "Using Postgres document store ({})",
                config.database_name.as_deref().unwrap_or("default database")
            );
            Ok(Arc::new(PostgresDocumentStore::new(pool)))
        }
        None => {
            log::warn!("DATABASE_URL not set, documents will only be kept in memory");
            Ok(Arc::new(InMemoryDocumentStore::new()))
        }
    }
}

/// Register every route plus the JSON extractor settings and API docs.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into()),
    )
    .route("/", web::get().to(handlers::health::root))
    .route("/test", web::get().to(handlers::health::diagnostics))
    .service(
        web::scope("/api")
            .route("/seed", web::post().to(handlers::menu::seed_products))
            .route("/menu", web::get().to(handlers::menu::get_menu))
            .route("/orders", web::post().to(handlers::orders::create_order))
            .route("/orders", web::get().to(handlers::orders::list_orders)),
    )
    .service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: AppState,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind((host.to_string(), port))?
    .run())
}
