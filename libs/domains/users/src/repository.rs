use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

use crate::error::UserResult;
use crate::models::{User, UserDraft};

/// Repository trait for User persistence
///
/// Expected misses are reported as `None`/`false`; turning them into
/// [`UserError::NotFound`](crate::UserError::NotFound) is the service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by ID
    async fn get(&self, id: &str) -> Option<User>;

    /// All users in insertion order
    async fn list(&self) -> Vec<User>;

    /// Create a user from a draft, assigning a fresh id and timestamp
    async fn insert(&self, draft: UserDraft) -> UserResult<User>;

    /// Replace every mutable field of an existing user.
    ///
    /// The draft is validated before the lookup, so an invalid draft fails
    /// even for an unknown id.
    async fn update(&self, id: &str, draft: UserDraft) -> UserResult<Option<User>>;

    /// Delete a user by ID, returning whether it existed
    async fn delete(&self, id: &str) -> bool;

    /// Delete every listed user that exists, returning how many were removed
    async fn bulk_delete(&self, ids: &[String]) -> usize;
}

/// Synchronous record store: records in insertion order plus an id index.
#[derive(Debug, Default, Clone)]
pub struct UserStore {
    records: Vec<User>,
    index: HashMap<String, usize>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Three demo users with ids `"1"`, `"2"` and `"3"`.
    pub fn sample() -> Self {
        let now = Utc::now();
        let seed = |id: &str, name: &str, email: &str, role: &str, age_minutes: i64| User {
            id: id.to_string(),
            name: name.to_string(),
            email: Some(email.to_string()),
            role: role.to_string(),
            created_at: now - Duration::minutes(age_minutes),
        };

        let mut store = Self::new();
        store.push(seed("1", "Alice Smith", "alice@example.com", "admin", 2));
        store.push(seed("2", "Bob Johnson", "bob@example.com", "user", 1));
        store.push(seed("3", "Carol Williams", "carol@example.com", "user", 0));
        store
    }

    fn push(&mut self, user: User) {
        self.index.insert(user.id.clone(), self.records.len());
        self.records.push(user);
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.index.get(id).map(|&idx| &self.records[idx])
    }

    pub fn records(&self) -> &[User] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn insert(&mut self, draft: UserDraft) -> UserResult<User> {
        let user = User::new(draft)?;
        self.push(user.clone());
        Ok(user)
    }

    pub fn update(&mut self, id: &str, draft: UserDraft) -> UserResult<Option<User>> {
        let Some(&idx) = self.index.get(id) else {
            // validate anyway so a bad draft is reported before the miss
            draft.validate()?;
            return Ok(None);
        };

        let user = &mut self.records[idx];
        user.replace(draft)?;
        Ok(Some(user.clone()))
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let Some(idx) = self.index.remove(id) else {
            return false;
        };

        self.records.remove(idx);
        for (offset, user) in self.records[idx..].iter().enumerate() {
            self.index.insert(user.id.clone(), idx + offset);
        }
        true
    }

    pub fn bulk_delete(&mut self, ids: &[String]) -> usize {
        ids.iter().filter(|id| self.delete(id)).count()
    }
}

/// In-memory implementation of UserRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<UserStore>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::from_store(UserStore::new())
    }

    /// Repository seeded with [`UserStore::sample`]
    pub fn with_sample_data() -> Self {
        Self::from_store(UserStore::sample())
    }

    pub fn from_store(store: UserStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &str) -> Option<User> {
        let store = self.store.read().await;
        store.get(id).cloned()
    }

    async fn list(&self) -> Vec<User> {
        let store = self.store.read().await;
        store.records().to_vec()
    }

    async fn insert(&self, draft: UserDraft) -> UserResult<User> {
        let mut store = self.store.write().await;
        let user = store.insert(draft)?;

        tracing::info!(user_id = %user.id, name = %user.name, "Created user");
        Ok(user)
    }

    async fn update(&self, id: &str, draft: UserDraft) -> UserResult<Option<User>> {
        let mut store = self.store.write().await;
        let updated = store.update(id, draft)?;

        if updated.is_some() {
            tracing::info!(user_id = %id, "Updated user");
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> bool {
        let mut store = self.store.write().await;
        let deleted = store.delete(id);

        if deleted {
            tracing::info!(user_id = %id, "Deleted user");
        }
        deleted
    }

    async fn bulk_delete(&self, ids: &[String]) -> usize {
        let mut store = self.store.write().await;
        let deleted = store.bulk_delete(ids);

        tracing::info!(requested = ids.len(), deleted, "Bulk deleted users");
        deleted
    }
}
