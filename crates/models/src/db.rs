use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Connect using pool sizing and timeouts from configuration.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    info!(
        backend = ?db.get_database_backend(),
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "database connected"
    );
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;
    use sea_orm::{DatabaseBackend, EntityTrait, Statement};

    fn memory_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_connect_with_config() -> anyhow::Result<()> {
        let db = connect_with_config(&memory_config()).await?;
        assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

        let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS test".to_string());
        let row = db.query_one(stmt).await?.expect("one row");
        let value: i32 = row.try_get("", "test")?;
        assert_eq!(value, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_migrated_table_starts_empty() -> anyhow::Result<()> {
        let db = connect_with_config(&memory_config()).await?;
        migration::Migrator::up(&db, None).await?;
        let rows = crate::fornecedor::Entity::find().all(&db).await?;
        assert!(rows.is_empty());
        Ok(())
    }
}
