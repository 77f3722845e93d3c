use crate::Users;
use crate::auth::CurrentUser;
use crate::dto::UserDraft;
use crate::error::UserError;
use crate::model::{Role, UserRecord};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use rollcall_domain::constants::USERS_TAG;
use rollcall_kernel::server::ApiState;

#[utoipa::path(
    get,
    path = "/api/user/all",
    responses(
        (status = OK, description = "Every account on the roster", body = [UserRecord]),
        (status = FORBIDDEN, description = "Caller is not an administrator"),
    ),
    tag = USERS_TAG,
)]
pub(crate) async fn get_all_users(
    State(state): State<ApiState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<Vec<UserRecord>>, UserError> {
    current.require_role(Role::Admin)?;
    let users = state.try_get_slice::<Users>()?;
    Ok(Json(users.service.all().await?))
}

#[utoipa::path(
    delete,
    path = "/api/user/id/{user_id}",
    params(("user_id" = u64, Path, description = "Account id")),
    responses(
        (status = OK, description = "Account deleted (or was already absent)"),
        (status = FORBIDDEN, description = "Caller is not an administrator"),
    ),
    tag = USERS_TAG,
)]
pub(crate) async fn delete_user_by_id(
    State(state): State<ApiState>,
    Extension(current): Extension<CurrentUser>,
    Path(user_id): Path<u64>,
) -> Result<(), UserError> {
    current.require_role(Role::Admin)?;
    let users = state.try_get_slice::<Users>()?;
    users.service.delete_by_id(user_id).await
}

#[utoipa::path(
    get,
    path = "/api/user/id/{user_id}",
    params(("user_id" = u64, Path, description = "Account id")),
    responses(
        (status = OK, description = "The requested account", body = UserRecord),
        (status = NOT_FOUND, description = "No account with this id"),
    ),
    tag = USERS_TAG,
)]
pub(crate) async fn get_user_by_id(
    State(state): State<ApiState>,
    Path(user_id): Path<u64>,
) -> Result<Json<UserRecord>, UserError> {
    let users = state.try_get_slice::<Users>()?;
    Ok(Json(users.service.get(user_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/user/username/{username}",
    params(("username" = String, Path, description = "Account username, matched case-insensitively")),
    responses(
        (status = OK, description = "The requested account", body = UserRecord),
        (status = NOT_FOUND, description = "No account with this username"),
    ),
    tag = USERS_TAG,
)]
pub(crate) async fn get_user_by_username(
    State(state): State<ApiState>,
    Path(username): Path<String>,
) -> Result<Json<UserRecord>, UserError> {
    let users = state.try_get_slice::<Users>()?;
    Ok(Json(users.service.get_by_username(&username).await?))
}

#[utoipa::path(
    get,
    path = "/api/user/email/{email}",
    params(("email" = String, Path, description = "Account email, matched case-insensitively")),
    responses(
        (status = OK, description = "The requested account", body = UserRecord),
        (status = NOT_FOUND, description = "No account with this email"),
    ),
    tag = USERS_TAG,
)]
pub(crate) async fn get_user_by_email(
    State(state): State<ApiState>,
    Path(email): Path<String>,
) -> Result<Json<UserRecord>, UserError> {
    let users = state.try_get_slice::<Users>()?;
    Ok(Json(users.service.get_by_email(&email).await?))
}

#[utoipa::path(
    post,
    path = "/api/user",
    request_body = UserDraft,
    responses(
        (status = OK, description = "The created account", body = UserRecord),
        (status = CONFLICT, description = "Username or email already taken"),
        (status = UNPROCESSABLE_ENTITY, description = "Malformed draft"),
    ),
    tag = USERS_TAG,
)]
pub(crate) async fn create_user(
    State(state): State<ApiState>,
    Json(draft): Json<UserDraft>,
) -> Result<Json<UserRecord>, UserError> {
    let users = state.try_get_slice::<Users>()?;
    Ok(Json(users.service.create(&draft).await?))
}

// TODO: let non-admin callers update only their own account
#[utoipa::path(
    put,
    path = "/api/user/id/{user_id}",
    params(("user_id" = u64, Path, description = "Account id")),
    request_body = UserDraft,
    responses(
        (status = OK, description = "The updated account", body = UserRecord),
        (status = NOT_FOUND, description = "No account with this id"),
        (status = CONFLICT, description = "Draft renames onto a taken username or email"),
    ),
    tag = USERS_TAG,
)]
pub(crate) async fn update_user_by_id(
    State(state): State<ApiState>,
    Path(user_id): Path<u64>,
    Json(draft): Json<UserDraft>,
) -> Result<Json<UserRecord>, UserError> {
    let users = state.try_get_slice::<Users>()?;
    Ok(Json(users.service.update_by_id(user_id, &draft).await?))
}

#[utoipa::path(
    put,
    path = "/api/user/username/{username}",
    params(("username" = String, Path, description = "Account username, matched case-insensitively")),
    request_body = UserDraft,
    responses(
        (status = OK, description = "The updated account", body = UserRecord),
        (status = NOT_FOUND, description = "No account with this username"),
        (status = CONFLICT, description = "Draft renames onto a taken username or email"),
    ),
    tag = USERS_TAG,
)]
pub(crate) async fn update_user_by_username(
    State(state): State<ApiState>,
    Path(username): Path<String>,
    Json(draft): Json<UserDraft>,
) -> Result<Json<UserRecord>, UserError> {
    let users = state.try_get_slice::<Users>()?;
    Ok(Json(users.service.update_by_username(&username, &draft).await?))
}
