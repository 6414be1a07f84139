//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "name: Name should not contain numbers",
        "details": {
            "name": [{
                "code": "name_contains_digits",
                "message": "Name should not contain numbers",
                "params": {"value": "Anna99"}
            }]
        }
    })
)]
pub struct ValidationErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - Invalid query string",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_QUERY",
        "message": "Failed to deserialize query string: sort_order: unknown variant `up`, expected `asc` or `desc`"
    })
)]
pub struct InvalidQueryResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "User with ID 42 not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[cfg(test)]
mod tests {
    use super::*;

    fn example_of<'a, R: ToResponse<'a>>() -> serde_json::Value {
        let (_, response) = R::response();
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn test_examples_carry_error_codes() {
        let not_found = example_of::<NotFoundResponse>().to_string();
        assert!(not_found.contains("NOT_FOUND"));
        assert!(not_found.contains("1004"));

        let invalid_query = example_of::<InvalidQueryResponse>().to_string();
        assert!(invalid_query.contains("INVALID_QUERY"));

        let internal = example_of::<InternalServerErrorResponse>().to_string();
        assert!(internal.contains("INTERNAL_ERROR"));
    }
}
