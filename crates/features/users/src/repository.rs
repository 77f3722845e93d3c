use crate::error::UserError;
use crate::model::UserRecord;
use async_trait::async_trait;
use rollcall_database::Database;

/// Persistence seam for account rows.
///
/// The service depends on this trait so tests can substitute an in-memory
/// implementation for the MySQL-backed one.
#[async_trait]
pub trait UserRepository: std::fmt::Debug + Send + Sync {
    async fn find_all(&self) -> Result<Vec<UserRecord>, UserError>;
    async fn find_by_id(&self, id: u64) -> Result<Option<UserRecord>, UserError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, UserError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, UserError>;
    /// Case-insensitive existence check; `exclude_id` skips the row being updated.
    async fn username_taken(
        &self,
        username: &str,
        exclude_id: Option<u64>,
    ) -> Result<bool, UserError>;
    /// Case-insensitive existence check; `exclude_id` skips the row being updated.
    async fn email_taken(&self, email: &str, exclude_id: Option<u64>)
    -> Result<bool, UserError>;
    /// Inserts the record and returns it with its assigned id.
    async fn insert(&self, record: UserRecord) -> Result<UserRecord, UserError>;
    async fn update(&self, record: UserRecord) -> Result<UserRecord, UserError>;
    /// Deletes the row if present; a missing id is not an error.
    async fn delete_by_id(&self, id: u64) -> Result<(), UserError>;
}

const SELECT_COLUMNS: &str =
    "SELECT `id`, `username`, `email`, `password`, `user_role` FROM `user`";

/// MySQL-backed implementation over the shared pool.
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    db: Database,
}

impl SqlUserRepository {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_all(&self) -> Result<Vec<UserRecord>, UserError> {
        let rows = sqlx::query_as::<_, UserRecord>(&format!("{SELECT_COLUMNS} ORDER BY `id`"))
            .fetch_all(&*self.db)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<UserRecord>, UserError> {
        let row = sqlx::query_as::<_, UserRecord>(&format!("{SELECT_COLUMNS} WHERE `id` = ?"))
            .bind(id)
            .fetch_optional(&*self.db)
            .await?;
        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, UserError> {
        let row = sqlx::query_as::<_, UserRecord>(&format!(
            "{SELECT_COLUMNS} WHERE LOWER(`username`) = LOWER(?)"
        ))
        .bind(username)
        .fetch_optional(&*self.db)
        .await?;
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, UserError> {
        let row = sqlx::query_as::<_, UserRecord>(&format!(
            "{SELECT_COLUMNS} WHERE LOWER(`email`) = LOWER(?)"
        ))
        .bind(email)
        .fetch_optional(&*self.db)
        .await?;
        Ok(row)
    }

    async fn username_taken(
        &self,
        username: &str,
        exclude_id: Option<u64>,
    ) -> Result<bool, UserError> {
        let (count,): (i64,) = match exclude_id {
            Some(id) => {
                sqlx::query_as(
                    "SELECT COUNT(*) FROM `user` \
                     WHERE LOWER(`username`) = LOWER(?) AND `id` <> ?",
                )
                .bind(username)
                .bind(id)
                .fetch_one(&*self.db)
                .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM `user` WHERE LOWER(`username`) = LOWER(?)")
                    .bind(username)
                    .fetch_one(&*self.db)
                    .await?
            }
        };
        Ok(count > 0)
    }

    async fn email_taken(
        &self,
        email: &str,
        exclude_id: Option<u64>,
    ) -> Result<bool, UserError> {
        let (count,): (i64,) = match exclude_id {
            Some(id) => {
                sqlx::query_as(
                    "SELECT COUNT(*) FROM `user` \
                     WHERE LOWER(`email`) = LOWER(?) AND `id` <> ?",
                )
                .bind(email)
                .bind(id)
                .fetch_one(&*self.db)
                .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM `user` WHERE LOWER(`email`) = LOWER(?)")
                    .bind(email)
                    .fetch_one(&*self.db)
                    .await?
            }
        };
        Ok(count > 0)
    }

    async fn insert(&self, mut record: UserRecord) -> Result<UserRecord, UserError> {
        let result = sqlx::query(
            "INSERT INTO `user` (`username`, `email`, `password`, `user_role`) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&record.username)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.role)
        .execute(&*self.db)
        .await?;

        record.id = result.last_insert_id();
        Ok(record)
    }

    async fn update(&self, record: UserRecord) -> Result<UserRecord, UserError> {
        sqlx::query(
            "UPDATE `user` \
             SET `username` = ?, `email` = ?, `password` = ?, `user_role` = ? \
             WHERE `id` = ?",
        )
        .bind(&record.username)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(record.role)
        .bind(record.id)
        .execute(&*self.db)
        .await?;

        Ok(record)
    }

    async fn delete_by_id(&self, id: u64) -> Result<(), UserError> {
        sqlx::query("DELETE FROM `user` WHERE `id` = ?")
            .bind(id)
            .execute(&*self.db)
            .await?;
        Ok(())
    }
}
