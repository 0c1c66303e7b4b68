pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::AppError;
use crate::handlers::commands::Handlers;
use crate::infrastructure::customer_repo::DieselCustomerRepository;
use crate::infrastructure::order_repo::DieselOrderRepository;
use crate::infrastructure::product_repo::DieselProductRepository;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DieselHandlers =
    Handlers<DieselOrderRepository, DieselProductRepository, DieselCustomerRepository>;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), AppError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::Setup(e.to_string()))?;
    log::info!("{} pending migration(s) applied", applied.len());
    Ok(())
}

/// Wire the Diesel adapters into the command handlers.
pub fn build_handlers(pool: DbPool) -> DieselHandlers {
    Handlers::new(
        DieselOrderRepository::new(pool.clone()),
        DieselProductRepository::new(pool.clone()),
        DieselCustomerRepository::new(pool),
    )
}
