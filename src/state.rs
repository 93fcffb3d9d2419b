use std::sync::Arc;
use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::roster::RosterCache;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub roster: Arc<RosterCache>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub async fn init() -> Result<Self, AppError> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&config.database_url())
            .await
            .map_err(AppError::Connection)?;

        Ok(Self {
            db,
            config,
            roster: Arc::new(RosterCache::default()),
            sessions: Arc::new(SessionStore::default()),
        })
    }
}
