use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use rollcall_kernel::security::PasswordError;
use rollcall_kernel::server::ApiStateError;

/// Errors produced by the user roster slice.
///
/// The [`IntoResponse`] impl is the single place where these map onto HTTP
/// statuses, so every handler surfaces failures uniformly.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    Invalid(String),

    #[error("authentication required")]
    Unauthorized,

    #[error("insufficient privileges")]
    Forbidden,

    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    #[error("repository error: {0}")]
    Repository(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ApiStateError> for UserError {
    fn from(e: ApiStateError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            Self::AlreadyExists(_) => (StatusCode::CONFLICT, self.to_string()).into_response(),
            Self::Invalid(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()).into_response()
            }
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"rollcall\"")],
                self.to_string(),
            )
                .into_response(),
            Self::Forbidden => (StatusCode::FORBIDDEN, self.to_string()).into_response(),
            Self::Password(_) | Self::Repository(_) | Self::Internal(_) => {
                // Details stay in the logs; clients get a generic body.
                tracing::error!(error = %self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_owned()).into_response()
            }
        }
    }
}
