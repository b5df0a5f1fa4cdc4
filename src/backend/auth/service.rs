/**
 * Authentication Service
 *
 * Orchestrates the register, login and current-user flows over a
 * `CredentialStore`, a `PasswordHasher` and a `TokenIssuer`.
 *
 * # Registration Process
 *
 * 1. Validate name, email and password, and check a signing key exists
 * 2. Reject if a user with the email exists
 * 3. Hash password using bcrypt
 * 4. Create user in the store
 * 5. Issue a session token
 *
 * # Login Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a session token
 *
 * Every step short-circuits on failure. bcrypt runs on the blocking pool.
 */

use std::sync::Arc;
use uuid::Uuid;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::{CredentialStore, NewUser};
use crate::backend::auth::validation::{normalize_email, require_login_fields, validate_registration};
use crate::backend::error::AuthError;
use crate::shared::{AppConfig, LoginRequest, RegisterRequest, SessionResult, UserProfile};

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self { store, hasher, tokens }
    }

    /// Build the service from configuration
    pub fn from_config(store: Arc<dyn CredentialStore>, config: &AppConfig) -> Self {
        Self::new(
            store,
            PasswordHasher::from_config(config),
            TokenIssuer::from_config(config),
        )
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Register a new user and start a session
    pub async fn register(&self, request: RegisterRequest) -> Result<SessionResult, AuthError> {
        let input = validate_registration(&request)?;
        // nothing is stored unless a token can be issued afterwards
        self.tokens.ensure_ready()?;
        let email = normalize_email(input.email);
        tracing::info!("Register request for email: {}", email);

        if self.store.find_by_email(&email).await?.is_some() {
            tracing::warn!("Email already exists: {}", email);
            return Err(AuthError::conflict("User with that email exists."));
        }

        let password_hash = self.hash_password(input.password.to_string()).await?;

        let user = self
            .store
            .create_user(NewUser {
                name: input.name.to_string(),
                email,
                password_hash,
            })
            .await?;

        let token = self.tokens.issue(user.id)?;
        tracing::info!("User created successfully: {} ({})", user.name, user.email);

        Ok(SessionResult {
            authenticated: true,
            user_id: user.id,
            token,
        })
    }

    /// Authenticate with email and password
    pub async fn login(&self, request: LoginRequest) -> Result<SessionResult, AuthError> {
        let input = require_login_fields(&request)?;
        let email = normalize_email(input.email);
        tracing::info!("Login request for: {}", email);

        let user = self.store.find_by_email(&email).await?.ok_or_else(|| {
            tracing::warn!("User not found: {}", email);
            AuthError::not_found("User with that email does not exist.")
        })?;

        let valid = self
            .verify_password(input.password.to_string(), user.password_hash.clone())
            .await?;
        if !valid {
            tracing::warn!("Invalid password for user: {}", user.id);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id)?;
        tracing::info!("User logged in successfully: {}", user.id);

        Ok(SessionResult {
            authenticated: true,
            user_id: user.id,
            token,
        })
    }

    /// Get the profile of the authenticated caller
    pub async fn who_am_i(&self, user_id: Uuid) -> Result<UserProfile, AuthError> {
        let user = self.store.find_by_id(user_id).await?.ok_or_else(|| {
            tracing::warn!("User not found: {}", user_id);
            AuthError::not_found("No user found.")
        })?;

        Ok(user.into())
    }

    /// Profiles of every user, oldest first
    pub async fn list_users(&self) -> Result<Vec<UserProfile>, AuthError> {
        let users = self.store.list_users().await?;
        Ok(users.into_iter().map(UserProfile::from).collect())
    }

    async fn hash_password(&self, plain: String) -> Result<String, AuthError> {
        let hasher = self.hasher;
        tokio::task::spawn_blocking(move || hasher.hash(&plain))
            .await
            .map_err(|e| AuthError::hashing(format!("hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, plain: String, hash: String) -> Result<bool, AuthError> {
        let hasher = self.hasher;
        tokio::task::spawn_blocking(move || hasher.verify(&plain, &hash))
            .await
            .map_err(|e| AuthError::hashing(format!("verification task failed: {}", e)))?
    }
}
