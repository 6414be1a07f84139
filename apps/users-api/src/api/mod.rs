use axum::{Json, Router, routing::get};
use axum_helpers::server::{create_router, health_router};
use domain_users::MessageResponse;

pub mod users;

pub const WELCOME_MESSAGE: &str = "Welcome to the User Management API!";

/// Creates the API routes, mounted at the root.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/users", users::router(state))
}

/// Full application: API routes plus `/health`, wrapped in docs and middleware.
pub fn app(state: &crate::state::AppState) -> std::io::Result<Router> {
    let apis = routes(state).merge(health_router(state.config.app));
    create_router::<crate::openapi::ApiDoc>(apis, &state.config.cors)
}

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    )
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}
