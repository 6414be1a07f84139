//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserDraft};
use crate::query::{self, UserPage, UserQuery};
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Runs the list pipeline over repository snapshots and maps missing
/// records to [`UserError::NotFound`].
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Filter, sort and paginate all users
    #[instrument(skip(self))]
    pub async fn list_users(&self, query: UserQuery) -> UserPage {
        let records = self.repository.list().await;
        query::paginate(records, &query)
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<User> {
        self.repository
            .get(id)
            .await
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, draft), fields(user_name = %draft.name))]
    pub async fn create_user(&self, draft: UserDraft) -> UserResult<User> {
        self.repository.insert(draft).await
    }

    /// Replace name, email and role of an existing user
    #[instrument(skip(self, draft))]
    pub async fn update_user(&self, id: &str, draft: UserDraft) -> UserResult<User> {
        self.repository
            .update(id, draft)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        if !self.repository.delete(id).await {
            return Err(UserError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Delete several users, returning how many actually existed
    #[instrument(skip(self))]
    pub async fn bulk_delete_users(&self, ids: &[String]) -> usize {
        self.repository.bulk_delete(ids).await
    }

    /// Case-insensitive substring search over name and email
    #[instrument(skip(self))]
    pub async fn search_users(&self, query: &str) -> Vec<User> {
        let records = self.repository.list().await;
        query::search(records, query)
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortOrder;
    use crate::repository::{MockUserRepository, UserStore};
    use mockall::predicate::eq;

    fn sample_users() -> Vec<User> {
        UserStore::sample().records().to_vec()
    }

    #[tokio::test]
    async fn test_get_user_missing_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get()
            .with(eq("42"))
            .returning(|_| None);

        let service = UserService::new(mock_repo);
        let result = service.get_user("42").await;

        match result {
            Err(UserError::NotFound(id)) => assert_eq!(id, "42"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_update()
            .withf(|id, draft| id == "42" && draft.name == "Anna")
            .returning(|_, _| Ok(None));

        let service = UserService::new(mock_repo);
        let result = service.update_user("42", UserDraft::new("Anna")).await;

        assert!(matches!(result, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_delete().with(eq("7")).returning(|_| false);

        let service = UserService::new(mock_repo);
        assert!(matches!(
            service.delete_user("7").await,
            Err(UserError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_existing_succeeds() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_delete().with(eq("1")).returning(|_| true);

        let service = UserService::new(mock_repo);
        assert!(service.delete_user("1").await.is_ok());
    }

    #[tokio::test]
    async fn test_list_users_runs_pipeline_over_snapshot() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(sample_users);

        let service = UserService::new(mock_repo);
        let page = service
            .list_users(UserQuery {
                role: Some("user".to_string()),
                sort_order: SortOrder::Desc,
                ..UserQuery::default()
            })
            .await;

        let names: Vec<_> = page.items.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Carol Williams", "Bob Johnson"]);
        assert_eq!(page.total, 2);
        assert_eq!(page.pages, 1);
    }

    #[tokio::test]
    async fn test_search_users() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_list().returning(sample_users);

        let service = UserService::new(mock_repo);
        let found = service.search_users("JOHNSON").await;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");
    }

    #[tokio::test]
    async fn test_bulk_delete_passes_ids_through() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_bulk_delete()
            .withf(|ids| ids == ["2".to_string(), "99".to_string()])
            .returning(|_| 1);

        let service = UserService::new(mock_repo);
        let removed = service
            .bulk_delete_users(&["2".to_string(), "99".to_string()])
            .await;

        assert_eq!(removed, 1);
    }

    #[tokio::test]
    async fn test_create_propagates_validation_error() {
        let service = UserService::new(crate::InMemoryUserRepository::new());
        let result = service.create_user(UserDraft::new("Anna99")).await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }
}
