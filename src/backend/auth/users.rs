/**
 * User Model and Credential Store
 *
 * This module defines the stored user record and the `CredentialStore`
 * abstraction the auth service persists users through, plus an in-memory
 * implementation. The SQLite implementation lives in `auth::db`.
 *
 * Stores assign ids and timestamps and are the only place email
 * uniqueness is enforced: `create_user` must fail with
 * `StoreError::Duplicate` when the email is taken, even under concurrent
 * calls.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::shared::UserProfile;

/// User struct representing a stored user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID, assigned by the store)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique, normalized)
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Public view without the password hash
impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Fields needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Credential store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Email uniqueness violated
    #[error("user with email {email} already exists")]
    Duplicate { email: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{0}")]
    Backend(String),
}

/// Persistence for user records, keyed by id and unique email
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Get user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Get user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Create a new user
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// All users, oldest first
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
}

/// In-memory credential store
///
/// Used when no database is configured and in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        // check and insert under one write lock
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate { email: user.email });
        }

        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "alice1".to_string(),
            email: email.to_string(),
            password_hash: "$2b$04$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = InMemoryUserStore::new();
        let user = store.create_user(new_user("a@x.com")).await.unwrap();

        let by_email = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);

        let by_id = store.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_missing_user() {
        let store = InMemoryUserStore::new();
        assert!(store.find_by_email("nobody@x.com").await.unwrap().is_none());
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let store = InMemoryUserStore::new();
        store.create_user(new_user("a@x.com")).await.unwrap();
        let result = store.create_user(new_user("a@x.com")).await;
        assert_matches!(result, Err(StoreError::Duplicate { .. }));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_users() {
        let store = InMemoryUserStore::new();
        assert!(store.is_empty().await);
        store.create_user(new_user("a@x.com")).await.unwrap();
        store.create_user(new_user("b@x.com")).await.unwrap();
        assert_eq!(store.list_users().await.unwrap().len(), 2);
    }

    #[test]
    fn test_serialized_user_has_no_hash() {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: "alice1".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("$2b$"));

        let id = user.id;
        let profile = UserProfile::from(user);
        assert_eq!(profile.id, id);
        assert_eq!(profile.email, "a@x.com");
    }
}
