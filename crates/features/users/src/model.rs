use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;

/// Authority granted to an account.
///
/// Stored and serialized with the `ROLE_` prefix the authorization checks key on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    sqlx::Type,
    ToSchema,
)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    #[strum(serialize = "ROLE_ADMIN")]
    #[sqlx(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_USER")]
    #[strum(serialize = "ROLE_USER")]
    #[sqlx(rename = "ROLE_USER")]
    User,
}

/// A stored account row.
///
/// The password hash never leaves the process: it is skipped during
/// serialization and absent from the OpenAPI schema.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Database identity; zero until the record is inserted.
    #[builder(default)]
    pub id: u64,
    #[builder(setter(into))]
    pub username: String,
    #[builder(default, setter(strip_option, into))]
    pub email: Option<String>,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    #[sqlx(rename = "password")]
    #[builder(default)]
    pub password_hash: Option<String>,
    #[serde(rename = "userRole")]
    #[sqlx(rename = "user_role")]
    #[builder(default = Role::User)]
    pub role: Role,
}

impl UserRecord {
    /// Case-insensitive username comparison, matching the repository lookups.
    #[must_use]
    pub fn has_username(&self, username: &str) -> bool {
        self.username.eq_ignore_ascii_case(username)
    }

    /// Case-insensitive email comparison; `None` never matches.
    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        self.email.as_deref().is_some_and(|e| e.eq_ignore_ascii_case(email))
    }
}
