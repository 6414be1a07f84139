//! Query string extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string extractor with automatic validation.
///
/// Both parse failures (e.g. `page=abc`, unknown enum variant) and
/// `validator` failures (e.g. `page_size=500`) are rejected with
/// `422 Unprocessable Entity`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedQuery;
///
/// #[derive(Deserialize, Validate)]
/// struct Paging {
///     #[validate(range(min = 1))]
///     page: u32,
/// }
///
/// async fn list(ValidatedQuery(paging): ValidatedQuery<Paging>) -> String {
///     format!("page {}", paging.page)
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedQuery(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Paging {
        #[serde(default = "one")]
        #[validate(range(min = 1, max = 100))]
        page_size: u32,
    }

    fn one() -> u32 {
        1
    }

    async fn extract(uri: &str) -> Result<ValidatedQuery<Paging>, Response> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ValidatedQuery::<Paging>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_defaults_apply() {
        let ValidatedQuery(paging) = extract("/users").await.unwrap();
        assert_eq!(paging.page_size, 1);
    }

    #[tokio::test]
    async fn test_out_of_range_is_rejected_with_422() {
        let rejection = extract("/users?page_size=101").await.err().unwrap();
        assert_eq!(rejection.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unparsable_is_rejected_with_422() {
        let rejection = extract("/users?page_size=ten").await.err().unwrap();
        assert_eq!(rejection.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
