use crate::{auth, handlers};
use axum::middleware;
use rollcall_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes of the user roster API.
///
/// Every route sits behind the Basic-auth middleware; role requirements are
/// enforced inside the administrative handlers.
pub fn router(state: ApiState) -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::get_all_users))
        .routes(routes!(handlers::create_user))
        .routes(routes!(
            handlers::get_user_by_id,
            handlers::update_user_by_id,
            handlers::delete_user_by_id
        ))
        .routes(routes!(handlers::get_user_by_username, handlers::update_user_by_username))
        .routes(routes!(handlers::get_user_by_email))
        .layer(middleware::from_fn_with_state(state, auth::authenticate))
}
