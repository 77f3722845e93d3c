//! Draft-to-record mapping.
//!
//! Password changes are deliberately absent here: hashing belongs to the
//! service, which is the only writer of `password_hash`.

use crate::dto::UserDraft;
use crate::model::UserRecord;

/// Applies the draft onto an existing record.
///
/// Fields the draft does not carry keep their stored values.
pub(crate) fn apply_draft(draft: &UserDraft, record: &mut UserRecord) {
    record.username = draft.username.clone();
    if let Some(email) = &draft.email {
        record.email = Some(email.clone());
    }
    if let Some(role) = draft.role {
        record.role = role;
    }
}
