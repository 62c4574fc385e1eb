//! Hand-written port doubles shared by the authentication handler tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{User, UserErrors};
use crate::ports::{PasswordHasher, TokenGenerator, UserRepository};

pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
    fail: bool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn with_user(user: User) -> Self {
        let repo = Self::new();
        repo.users.lock().unwrap().push(user);
        repo
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated lookup failure",
            ));
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email() == email)
            .cloned())
    }

    async fn add(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email() == user.email()) {
            return Err(UserErrors::duplicate_email());
        }
        users.push(user.clone());
        Ok(())
    }
}

/// Prefixes the password; good enough to tell hashed from plain.
#[derive(Default)]
pub struct PrefixHasher {
    verifications: AtomicUsize,
}

impl PrefixHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

impl PasswordHasher for PrefixHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        Ok(hash == format!("hashed:{}", password))
    }
}

/// Records every token request.
pub struct RecordingTokenGenerator {
    calls: Mutex<Vec<(UserId, String, String)>>,
    fail: bool,
}

impl RecordingTokenGenerator {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<(UserId, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenGenerator for RecordingTokenGenerator {
    async fn generate(
        &self,
        user_id: &UserId,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::TokenGenerationFailed,
                "Simulated signing failure",
            ));
        }
        self.calls.lock().unwrap().push((
            *user_id,
            first_name.to_string(),
            last_name.to_string(),
        ));
        Ok(format!("token-for-{}", user_id))
    }
}
