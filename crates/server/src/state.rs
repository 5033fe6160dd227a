use configs::Environment;
use sea_orm::DatabaseConnection;

/// Shared by every handler; the pool is the only state requests have in common.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub environment: Environment,
}
