use sea_orm::DatabaseConnection;

use crate::server::config::RetryConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub retry: RetryConfig,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            retry: RetryConfig::default(),
        }
    }
}
