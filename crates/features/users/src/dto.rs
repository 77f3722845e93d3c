use crate::error::UserError;
use crate::model::Role;
use serde::Deserialize;
use typed_builder::TypedBuilder;
use utoipa::ToSchema;

/// Request body for creating or updating an account.
///
/// Absent fields leave the stored values untouched on update; unknown fields
/// are rejected.
#[derive(Debug, Clone, Deserialize, ToSchema, TypedBuilder)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserDraft {
    #[builder(setter(into))]
    pub username: String,
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub email: Option<String>,
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub password: Option<String>,
    #[serde(default, rename = "userRole")]
    #[builder(default, setter(strip_option))]
    pub role: Option<Role>,
}

impl UserDraft {
    /// Rejects drafts that cannot name an account.
    ///
    /// # Errors
    /// Returns [`UserError::Invalid`] when the username is blank.
    pub fn validate(&self) -> Result<(), UserError> {
        if self.username.trim().is_empty() {
            return Err(UserError::Invalid("username must not be blank".to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_username_fails_validation() {
        let draft = UserDraft::builder().username("   ").build();
        assert!(matches!(draft.validate(), Err(UserError::Invalid(_))));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<UserDraft>(
            r#"{ "username": "sam", "isAdmin": true }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("isAdmin"));
    }

    #[test]
    fn role_parses_from_wire_name() {
        let draft: UserDraft =
            serde_json::from_str(r#"{ "username": "sam", "userRole": "ROLE_ADMIN" }"#).unwrap();
        assert_eq!(draft.role, Some(Role::Admin));
    }
}
