//! Database connection and initialization.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Schema,
    Statement,
};

use common::DatabaseConfig;

use crate::repository::entities::user;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool, check connectivity and make sure the
    /// `users` table exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .idle_timeout(config.max_idle)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        let db = Self { connection };

        db.ping().await?;
        db.ensure_schema().await?;
        tracing::info!(
            max_connections = config.max_connections,
            max_idle_secs = config.max_idle.as_secs(),
            "Database connected"
        );

        Ok(db)
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Create the `users` table from the entity definition if it is missing.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let mut statement = Schema::new(backend).create_table_from_entity(user::Entity);
        statement.if_not_exists();

        self.connection.execute(backend.build(&statement)).await?;
        Ok(())
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
