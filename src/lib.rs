pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod models;
pub mod openapi;
pub mod schema;

#[cfg(test)]
mod test_support;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::application::entity_service::EntityService;
use crate::application::fixtures::FixtureService;
use crate::errors::validation_error;
use crate::infrastructure::{DieselReportQueries, DieselRepository};

pub use config::AppConfig;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type MigrationError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Create the tables if they do not exist yet.
pub fn run_migrations(pool: &DbPool) -> Result<(), MigrationError> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("applied {} pending migration(s)", applied.len());
    Ok(())
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let entities = web::Data::new(EntityService::new(DieselRepository::new(pool.clone())));
    let fixtures = web::Data::new(FixtureService::new(DieselRepository::new(pool.clone())));
    let reports = web::Data::new(DieselReportQueries::new(pool));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(entities.clone())
            .app_data(fixtures.clone())
            .app_data(reports.clone())
            .app_data(web::JsonConfig::default().error_handler(validation_error))
            .app_data(web::QueryConfig::default().error_handler(validation_error))
            .app_data(web::PathConfig::default().error_handler(validation_error))
            .wrap(Logger::default())
            .configure(handlers::configure)
            .service(openapi::swagger_ui())
    })
    .bind((host.to_string(), port))?
    .run())
}
