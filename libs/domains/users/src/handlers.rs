use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson, ValidatedQuery,
    errors::responses::{
        InternalServerErrorResponse, InvalidQueryResponse, NotFoundResponse,
        ValidationErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{BulkDeleteRequest, MessageResponse, User, UserDraft};
use crate::query::{SortOrder, UserPage, UserQuery};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "users";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_users,
        create_user,
        bulk_delete_users,
        search_users,
        get_user,
        update_user,
        delete_user,
    ),
    components(
        schemas(User, UserDraft, UserPage, SortOrder, BulkDeleteRequest, MessageResponse),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            InvalidQueryResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/bulk-delete", post(bulk_delete_users))
        .route("/search/{query}", get(search_users))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// List users with filtering, sorting and pagination
///
/// GET /users?page=1&page_size=10&role=user&search=bob&sort_by=name&sort_order=desc
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(UserQuery),
    responses(
        (status = 200, description = "One page of users", body = UserPage),
        (status = 422, response = InvalidQueryResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedQuery(query): ValidatedQuery<UserQuery>,
) -> Json<UserPage> {
    Json(service.list_users(query).await)
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = UserDraft,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 422, response = ValidationErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(draft): ValidatedJson<UserDraft>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(draft).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<User>> {
    let user = service.get_user(&id).await?;
    Ok(Json(user))
}

/// Replace a user's name, email and role
///
/// Omitted `email` clears it and omitted `role` resets it to `user`.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UserDraft,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(draft): ValidatedJson<UserDraft>,
) -> UserResult<Json<User>> {
    let user = service.update_user(&id, draft).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<MessageResponse>> {
    service.delete_user(&id).await?;
    Ok(Json(MessageResponse::new(format!(
        "User with ID {} deleted successfully",
        id
    ))))
}

/// Delete several users at once
///
/// Unknown ids are skipped; the message reports how many were removed.
#[utoipa::path(
    post,
    path = "/bulk-delete",
    tag = TAG,
    request_body = BulkDeleteRequest,
    responses(
        (status = 200, description = "Users deleted", body = MessageResponse),
        (status = 422, response = ValidationErrorResponse)
    )
)]
async fn bulk_delete_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(request): ValidatedJson<BulkDeleteRequest>,
) -> Json<MessageResponse> {
    let deleted = service.bulk_delete_users(&request.user_ids).await;
    Json(MessageResponse::new(format!(
        "Successfully deleted {} users",
        deleted
    )))
}

/// Search users by name or email
#[utoipa::path(
    get,
    path = "/search/{query}",
    tag = TAG,
    params(
        ("query" = String, Path, description = "Case-insensitive text to look for in name or email")
    ),
    responses(
        (status = 200, description = "Matching users in insertion order", body = Vec<User>)
    )
)]
async fn search_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(query): Path<String>,
) -> Json<Vec<User>> {
    Json(service.search_users(&query).await)
}
