/// Errors produced while establishing or using the database connection.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Required builder parameters are missing or malformed.
    #[error("database configuration error: {0}")]
    Validation(String),

    /// The engine could not be reached or refused the connection.
    #[error("failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    /// A migration script failed to apply or its checksum diverged.
    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A query failed after the pool was established.
    #[error("database query failed: {0}")]
    Sql(#[from] sqlx::Error),
}
