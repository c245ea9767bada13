use scores_config::{HandlerConfig, ValidationConfig};
use scores_db::UserRepository;

use sqlx::SqlitePool;

/// Shared per-request state. Everything here is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
    pub validation: ValidationConfig,
    pub handler: HandlerConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, validation: ValidationConfig, handler: HandlerConfig) -> Self {
        Self {
            users: UserRepository::new(pool),
            validation,
            handler,
        }
    }
}
