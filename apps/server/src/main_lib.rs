use std::sync::Arc;

use crate::config::{Config, LogFormat, StorageKind};
use gobank_core::accounts::{
    AccountRepositoryTrait, AccountService, AccountServiceTrait, InMemoryAccountRepository,
};
use gobank_storage_sqlite::{accounts::AccountRepository, db};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

/// Builds the shared application state, opening and migrating the database
/// when SQLite storage is configured.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let account_repo: Arc<dyn AccountRepositoryTrait> = match config.storage {
        StorageKind::Memory => {
            tracing::info!("Using in-memory account storage");
            Arc::new(InMemoryAccountRepository::new())
        }
        StorageKind::Sqlite => {
            let db_path = db::init(&config.db_path)?;
            tracing::info!("Database path in use: {}", db_path);

            let pool = db::create_pool(&db_path)?;
            db::run_migrations(&pool)?;
            let writer = db::spawn_writer(&pool)?;
            Arc::new(AccountRepository::new(pool, writer))
        }
    };

    let account_service: Arc<dyn AccountServiceTrait> = Arc::new(
        AccountService::new(account_repo).with_missing_delete_ok(config.delete_missing_ok),
    );

    Ok(Arc::new(AppState { account_service }))
}
