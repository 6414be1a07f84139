//! Filter, sort and paginate pipeline for the user list endpoint.
//!
//! Everything here is pure: the functions take the full record set by value
//! and return a new page, never touching the repository.
//!
//! Stages run in a fixed order:
//!
//! 1. role filter (exact match)
//! 2. search filter (case-insensitive substring of name or email)
//! 3. stable sort by [`SortKey`], reversed afterwards for [`SortOrder::Desc`]
//! 4. offset pagination

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::User;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> String {
    SortKey::Name.to_string()
}

/// Fields a user list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SortKey {
    Name,
    Role,
    CreatedAt,
}

impl SortKey {
    /// Ascending comparator for this key.
    ///
    /// Strings compare by code point, so `"Zed" < "adam"`.
    pub fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Role => a.role.cmp(&b.role),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Query parameters for listing users
///
/// `sort_by` stays a raw string: an unknown field is not an error, it just
/// leaves the records in repository order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    #[param(minimum = 1, default = 1)]
    pub page: usize,
    /// Items per page
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    #[param(minimum = 1, maximum = 100, default = 10)]
    pub page_size: usize,
    /// Filter by role (exact match)
    pub role: Option<String>,
    /// Search in name and email
    pub search: Option<String>,
    /// Field to sort by: `name`, `role` or `created_at`
    #[serde(default = "default_sort_by")]
    #[param(default = "name")]
    pub sort_by: String,
    /// Sort order
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            role: None,
            search: None,
            sort_by: default_sort_by(),
            sort_order: SortOrder::default(),
        }
    }
}

impl UserQuery {
    /// The recognised sort key, if any.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_by.parse().ok()
    }
}

/// One page of users plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserPage {
    pub items: Vec<User>,
    /// Matching users before pagination
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    /// `ceil(total / page_size)`, 0 when nothing matched
    pub pages: usize,
}

/// Empty strings count as "no filter".
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Case-insensitive substring test against name, or email when present.
///
/// `needle` must already be lowercased.
fn matches_search(user: &User, needle: &str) -> bool {
    user.name.to_lowercase().contains(needle)
        || user
            .email
            .as_deref()
            .is_some_and(|email| email.to_lowercase().contains(needle))
}

/// Return every record matching `query`, in input order.
pub fn search(records: Vec<User>, query: &str) -> Vec<User> {
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|user| matches_search(user, &needle))
        .collect()
}

/// Apply the role and search filters.
pub fn filter(records: Vec<User>, role: Option<&str>, search: Option<&str>) -> Vec<User> {
    let needle = search.map(str::to_lowercase);

    records
        .into_iter()
        .filter(|user| role.is_none_or(|role| user.role == role))
        .filter(|user| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_search(user, needle))
        })
        .collect()
}

/// Stable sort by `key`, then reverse the whole sequence for `Desc`.
///
/// With duplicate keys a descending result is therefore the exact mirror of
/// the ascending one, ties included.
pub fn sort(records: &mut [User], key: SortKey, order: SortOrder) {
    records.sort_by(|a, b| key.compare(a, b));
    if order == SortOrder::Desc {
        records.reverse();
    }
}

/// Run the full filter, sort and paginate pipeline.
///
/// `page` and `page_size` are validated at the HTTP boundary; out-of-range
/// values are clamped here so the arithmetic stays total.
pub fn paginate(records: Vec<User>, query: &UserQuery) -> UserPage {
    let page = query.page.max(1);
    let page_size = query.page_size.clamp(1, MAX_PAGE_SIZE);

    let mut filtered = filter(records, non_empty(&query.role), non_empty(&query.search));

    if let Some(key) = query.sort_key() {
        sort(&mut filtered, key, query.sort_order);
    }

    let total = filtered.len();
    let start = (page - 1).saturating_mul(page_size);

    let items: Vec<User> = filtered.into_iter().skip(start).take(page_size).collect();

    UserPage {
        items,
        total,
        page,
        page_size,
        pages: total.div_ceil(page_size),
    }
}
