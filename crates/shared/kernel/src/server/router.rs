use super::ApiState;
use super::health;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn system_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(health::health_handler))
}
