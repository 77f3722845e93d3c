//! HTTP Basic authentication against the account table.

use crate::Users;
use crate::error::UserError;
use crate::model::{Role, UserRecord};
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rollcall_kernel::server::ApiState;
use sha2::{Digest, Sha256};

/// The authenticated account, inserted into request extensions by
/// [`authenticate`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserRecord);

impl CurrentUser {
    /// Demands the given role.
    ///
    /// # Errors
    /// Returns [`UserError::Forbidden`] when the account carries another role.
    pub fn require_role(&self, role: Role) -> Result<(), UserError> {
        if self.0.role == role { Ok(()) } else { Err(UserError::Forbidden) }
    }
}

/// Verifies the `Authorization: Basic` header against the account table.
///
/// Successful verifications are cached (keyed by a digest of the header) so a
/// hot client does not pay the bcrypt cost on every request. A password change
/// keeps a cached entry valid until its TTL lapses.
///
/// # Errors
/// Returns [`UserError::Unauthorized`] for a missing or malformed header,
/// unknown username, or wrong password.
pub(crate) async fn authenticate(
    State(state): State<ApiState>,
    mut req: Request,
    next: Next,
) -> Result<Response, UserError> {
    let users = state.try_get_slice::<Users>()?;

    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(UserError::Unauthorized)?;

    let cache_key = hex::encode(Sha256::digest(header_value.as_bytes()));
    let record = match users.credentials.get(&cache_key).await {
        Some(hit) => hit,
        None => {
            let (username, password) = decode_basic(header_value)?;
            let record = users.service.verify_credentials(&username, &password).await?;
            users.credentials.insert(cache_key, record.clone()).await;
            record
        }
    };

    req.extensions_mut().insert(CurrentUser(record));
    Ok(next.run(req).await)
}

fn decode_basic(value: &str) -> Result<(String, String), UserError> {
    let encoded = value.strip_prefix("Basic ").ok_or(UserError::Unauthorized)?;
    let decoded = BASE64.decode(encoded.trim()).map_err(|_| UserError::Unauthorized)?;
    let text = String::from_utf8(decoded).map_err(|_| UserError::Unauthorized)?;
    let (username, password) = text.split_once(':').ok_or(UserError::Unauthorized)?;
    Ok((username.to_owned(), password.to_owned()))
}
