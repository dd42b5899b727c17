use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::config::{BackendType, Config};
use crate::models::storage::{
    MemoryUserStore, PostgresUserStore, RedisUserStore, StorageError, UserStore,
};
use crate::services::auth::TokenService;
use crate::services::catalog::{CatalogClient, CatalogError};

pub type UserBackend = Arc<dyn UserStore + Send + Sync>;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("user store unavailable: {0}")]
    Storage(#[from] StorageError),
    #[error("catalog client could not be built: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub tokens: TokenService,
    pub users: UserBackend,
}

impl AppState {
    pub async fn from_config(config: &Config) -> Result<Self, StartupError> {
        let users = connect_user_store(config).await?;
        users.test_connection().await?;
        info!("User store connection successful");

        let catalog = CatalogClient::new(
            config.catalog_url.clone(),
            config.catalog_api_key.clone(),
            Duration::from_secs(config.catalog_timeout_secs),
        )?;

        let tokens = TokenService::new(
            &config.jwt_secret,
            chrono::Duration::minutes(config.token_ttl_minutes),
        );

        Ok(Self {
            catalog,
            tokens,
            users,
        })
    }
}

async fn connect_user_store(config: &Config) -> Result<UserBackend, StorageError> {
    let users: UserBackend = match config.backend {
        BackendType::Postgres => {
            info!("Using PostgreSQL user store");
            Arc::new(PostgresUserStore::new(&config.database_url).await?)
        }
        BackendType::Redis => {
            info!("Using Redis user store");
            Arc::new(RedisUserStore::new(&config.redis_url)?)
        }
        BackendType::Memory => {
            info!("Using in-memory user store");
            Arc::new(MemoryUserStore::new())
        }
    };

    Ok(users)
}
