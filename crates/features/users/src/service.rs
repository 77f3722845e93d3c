use crate::dto::UserDraft;
use crate::error::UserError;
use crate::mapper;
use crate::model::{Role, UserRecord};
use crate::repository::UserRepository;
use rollcall_kernel::security::PasswordEncoder;
use std::sync::Arc;
use tracing::{info, instrument};

/// Business rules over the account repository.
#[derive(Debug, Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    encoder: PasswordEncoder,
}

impl UserService {
    #[must_use]
    pub fn new(repo: Arc<dyn UserRepository>, encoder: PasswordEncoder) -> Self {
        Self { repo, encoder }
    }

    /// Creates an account from a draft.
    ///
    /// Uniqueness of username and email is checked case-insensitively before
    /// the insert; the password is stored as a bcrypt hash. A draft without a
    /// role creates a regular user.
    ///
    /// # Errors
    /// [`UserError::AlreadyExists`] on a taken username or email,
    /// [`UserError::Invalid`] on a blank username.
    #[instrument(skip(self, draft), fields(username = %draft.username))]
    pub async fn create(&self, draft: &UserDraft) -> Result<UserRecord, UserError> {
        draft.validate()?;

        if self.repo.username_taken(&draft.username, None).await? {
            return Err(UserError::AlreadyExists("username already exists".to_owned()));
        }
        if let Some(email) = &draft.email {
            if self.repo.email_taken(email, None).await? {
                return Err(UserError::AlreadyExists("email already exists".to_owned()));
            }
        }

        let password_hash = match &draft.password {
            Some(plain) => Some(self.encoder.hash(plain)?),
            None => None,
        };

        let record = UserRecord {
            id: 0,
            username: draft.username.clone(),
            email: draft.email.clone(),
            password_hash,
            role: draft.role.unwrap_or(Role::User),
        };

        let stored = self.repo.insert(record).await?;
        info!(id = stored.id, "User created");
        Ok(stored)
    }

    /// Lists every account.
    ///
    /// # Errors
    /// Propagates repository failures.
    pub async fn all(&self) -> Result<Vec<UserRecord>, UserError> {
        self.repo.find_all().await
    }

    /// Fetches an account by id.
    ///
    /// # Errors
    /// [`UserError::NotFound`] when the id is unknown.
    pub async fn get(&self, id: u64) -> Result<UserRecord, UserError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("user {id} does not exist")))
    }

    /// Fetches an account by username (case-insensitive).
    ///
    /// # Errors
    /// [`UserError::NotFound`] when no account carries the name.
    pub async fn get_by_username(&self, username: &str) -> Result<UserRecord, UserError> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("user {username} does not exist")))
    }

    /// Fetches an account by email (case-insensitive).
    ///
    /// # Errors
    /// [`UserError::NotFound`] when no account carries the address.
    pub async fn get_by_email(&self, email: &str) -> Result<UserRecord, UserError> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("{email} does not exist")))
    }

    /// Updates the account with the given id from a draft.
    ///
    /// # Errors
    /// [`UserError::NotFound`] for an unknown id, [`UserError::AlreadyExists`]
    /// when the draft renames onto a taken username or email.
    #[instrument(skip(self, draft), fields(username = %draft.username))]
    pub async fn update_by_id(&self, id: u64, draft: &UserDraft) -> Result<UserRecord, UserError> {
        let record = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("user not found, id: {id}")))?;
        self.apply_update(record, draft).await
    }

    /// Updates the account with the given username from a draft.
    ///
    /// # Errors
    /// [`UserError::NotFound`] for an unknown name, [`UserError::AlreadyExists`]
    /// when the draft renames onto a taken username or email.
    #[instrument(skip(self, draft), fields(username = %draft.username))]
    pub async fn update_by_username(
        &self,
        username: &str,
        draft: &UserDraft,
    ) -> Result<UserRecord, UserError> {
        let record = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFound(format!("user not found, username: {username}")))?;
        self.apply_update(record, draft).await
    }

    /// Deletes an account by id; unknown ids are ignored.
    ///
    /// # Errors
    /// Propagates repository failures.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: u64) -> Result<(), UserError> {
        self.repo.delete_by_id(id).await?;
        info!("User deleted");
        Ok(())
    }

    /// Checks a username/password pair against the stored hash.
    ///
    /// Accounts without a password can never authenticate.
    ///
    /// # Errors
    /// [`UserError::Unauthorized`] on unknown name, missing hash, or mismatch.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserRecord, UserError> {
        let record =
            self.repo.find_by_username(username).await?.ok_or(UserError::Unauthorized)?;
        let hash = record.password_hash.as_deref().ok_or(UserError::Unauthorized)?;

        if self.encoder.verify(password, hash)? {
            Ok(record)
        } else {
            Err(UserError::Unauthorized)
        }
    }

    /// Uniqueness checks exclude the record under update, so keeping the same
    /// username or email never conflicts with itself.
    async fn apply_update(
        &self,
        mut record: UserRecord,
        draft: &UserDraft,
    ) -> Result<UserRecord, UserError> {
        draft.validate()?;

        if !record.has_username(&draft.username)
            && self.repo.username_taken(&draft.username, Some(record.id)).await?
        {
            return Err(UserError::AlreadyExists("username already exists".to_owned()));
        }
        if let Some(email) = &draft.email {
            if !record.has_email(email) && self.repo.email_taken(email, Some(record.id)).await? {
                return Err(UserError::AlreadyExists("email already exists".to_owned()));
            }
        }

        mapper::apply_draft(draft, &mut record);
        if let Some(plain) = &draft.password {
            record.password_hash = Some(self.encoder.hash(plain)?);
        }

        let stored = self.repo.update(record).await?;
        info!(id = stored.id, "User updated");
        Ok(stored)
    }
}
