//! Custom extractors for Axum handlers.
//!
//! Both extractors deserialize, then run the `validator` checks, and reject
//! with the standard [`ErrorResponse`](crate::errors::ErrorResponse) body.

pub mod validated_json;
pub mod validated_query;

pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
