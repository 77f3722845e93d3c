//! User roster feature slice: account records, repository, service, Basic-auth
//! middleware, and the `/api/user` HTTP surface.

mod auth;
mod dto;
mod error;
mod handlers;
mod mapper;
mod model;
mod repository;
mod routes;
mod service;

pub use auth::CurrentUser;
pub use dto::UserDraft;
pub use error::UserError;
pub use model::{Role, UserRecord};
pub use repository::{SqlUserRepository, UserRepository};
pub use routes::router;
pub use service::UserService;

use rollcall_database::Database;
use rollcall_domain::config::{ApiConfig, SecurityConfig};
use rollcall_domain::registry::{FeatureSlice, InitializedSlice};
use rollcall_kernel::security::PasswordEncoder;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

/// Cache of verified Basic-auth headers (digest → account snapshot).
pub type CredentialCache = moka::future::Cache<String, UserRecord>;

/// Inner state of the users slice.
#[derive(Debug, Clone)]
pub struct UsersInner {
    pub service: UserService,
    pub credentials: CredentialCache,
}

/// Thread-safe handle to the users feature state.
#[derive(Debug, Clone)]
pub struct Users {
    inner: Arc<UsersInner>,
}

impl Users {
    pub fn new(inner: UsersInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    /// Creates the configured administrator account when it is missing.
    ///
    /// # Errors
    /// Propagates repository and hashing failures; an existing account with
    /// the configured name is left untouched.
    pub async fn ensure_bootstrap_admin(
        &self,
        security: &SecurityConfig,
    ) -> Result<(), UserError> {
        let Some(admin) = &security.bootstrap_admin else {
            return Ok(());
        };

        match self.service.get_by_username(&admin.username).await {
            Ok(_) => Ok(()),
            Err(UserError::NotFound(_)) => {
                let draft = UserDraft {
                    username: admin.username.clone(),
                    email: admin.email.clone(),
                    password: Some(admin.password.clone()),
                    role: Some(Role::Admin),
                };
                self.service.create(&draft).await?;
                tracing::info!(username = %admin.username, "Bootstrap admin created");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

impl Deref for Users {
    type Target = UsersInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Users {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the users feature against the shared database pool.
///
/// Ensures the bootstrap admin exists when one is configured.
///
/// # Errors
/// Returns an error when the bootstrap admin cannot be created.
pub async fn init(
    config: &ApiConfig,
    database: &Database,
) -> Result<InitializedSlice, UserError> {
    let security = &config.security;

    let service = UserService::new(
        Arc::new(SqlUserRepository::new(database.clone())),
        PasswordEncoder::new(security.bcrypt_cost),
    );
    let credentials = CredentialCache::builder()
        .max_capacity(security.credential_cache_capacity)
        .time_to_live(Duration::from_secs(security.credential_cache_ttl_seconds))
        .build();

    let slice = Users::new(UsersInner { service, credentials });
    slice.ensure_bootstrap_admin(security).await?;

    tracing::info!("Users server slice initialized");

    Ok(InitializedSlice::new(slice))
}
