use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_general_category::{GeneralCategory, get_general_category};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::UserResult;

/// Role assigned when a draft does not name one
pub const DEFAULT_ROLE: &str = "user";

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

/// Decimal digits in any script, plus superscript and subscript digits.
///
/// Other numeric characters such as `Ⅷ` or `½` are not digits.
fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
        || matches!(
            c,
            '\u{b2}' | '\u{b3}' | '\u{b9}' | '\u{2070}' | '\u{2074}'..='\u{2079}' | '\u{2080}'..='\u{2089}'
        )
}

/// Custom validator for user names
fn validate_name_has_no_digits(name: &str) -> Result<(), ValidationError> {
    if name.chars().any(is_digit) {
        return Err(ValidationError::new("name_contains_digits")
            .with_message("Name should not contain numbers".into()));
    }
    Ok(())
}

/// User entity
///
/// `id` and `created_at` are assigned once by [`User::new`] and are not
/// reachable through [`UserDraft`], so an update can never change them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Opaque unique identifier
    #[schema(example = "f7e6d5c4-b3a2-1098-7654-321012345678")]
    pub id: String,
    /// Display name (2-50 characters, no digits)
    pub name: String,
    /// Optional contact email
    pub email: Option<String>,
    /// Free-form role, `"user"` unless specified
    pub role: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Input payload for creating or fully replacing a user
///
/// Names exactly the mutable fields of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserDraft {
    #[validate(
        length(min = 2, max = 50),
        custom(function = "validate_name_has_no_digits")
    )]
    #[schema(example = "John Doe", min_length = 2, max_length = 50)]
    pub name: String,
    #[serde(default)]
    #[schema(example = "john@example.com")]
    pub email: Option<String>,
    #[serde(default = "default_role")]
    #[schema(example = "user")]
    pub role: String,
}

impl UserDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            role: default_role(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }
}

impl User {
    /// Create a new user with a fresh id and the current time.
    ///
    /// Fails with [`UserError::Validation`](crate::UserError::Validation)
    /// if the draft's name breaks the length or no-digit rule.
    pub fn new(draft: UserDraft) -> UserResult<Self> {
        draft.validate()?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            email: draft.email,
            role: draft.role,
            created_at: Utc::now(),
        })
    }

    /// Replace every mutable field with the draft's values.
    pub fn replace(&mut self, draft: UserDraft) -> UserResult<()> {
        draft.validate()?;

        self.name = draft.name;
        self.email = draft.email;
        self.role = draft.role;
        Ok(())
    }
}

/// Simple `{"message": ...}` body used by delete endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `POST /users/bulk-delete`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BulkDeleteRequest {
    pub user_ids: Vec<String>,
}
