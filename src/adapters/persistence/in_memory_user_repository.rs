//! In-Memory User Repository Adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::user::{User, UserErrors};
use crate::ports::UserRepository;

/// Users keyed by email.
///
/// Email uniqueness is checked and the insert performed under one write
/// lock, so two concurrent registrations cannot both succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn add(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(UserErrors::duplicate_email());
        }
        users.insert(user.email().to_string(), user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn user(email: &str) -> User {
        User::create("Grace", "Hopper", email, "hash").unwrap()
    }

    #[tokio::test]
    async fn find_returns_added_user() {
        let repo = InMemoryUserRepository::new();
        let grace = user("grace@example.com");

        repo.add(&grace).await.unwrap();

        assert_eq!(
            repo.find_by_email("grace@example.com").await.unwrap(),
            Some(grace)
        );
    }

    #[tokio::test]
    async fn find_unknown_email_returns_none() {
        let repo = InMemoryUserRepository::new();
        assert_eq!(repo.find_by_email("nobody@example.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn add_rejects_second_user_with_same_email() {
        let repo = InMemoryUserRepository::new();
        repo.add(&user("grace@example.com")).await.unwrap();

        let err = repo.add(&user("grace@example.com")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateEmail);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn concurrent_adds_with_same_email_admit_exactly_one() {
        let repo = InMemoryUserRepository::new();

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.add(&user("race@example.com")).await })
            })
            .collect();

        let mut successes = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.count().await, 1);
    }
}
