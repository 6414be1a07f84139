use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::root),
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)
    ),
    info(
        title = "User Management API",
        version = "0.1.0",
        description = "CRUD service for user records with filtering, sorting and pagination"
    ),
    nest(
        (path = "/users", api = domain_users::ApiDoc)
    ),
    tags((name = "root", description = "Service entry point"))
)]
pub struct ApiDoc;
