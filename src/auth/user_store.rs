//! Credential Store
//! Mission: Hold the fixed set of user records and verify login attempts

use crate::auth::middleware::AuthError;
use crate::auth::models::{User, UserRole};
use anyhow::{Context, Result};
use bcrypt::{hash, verify};
use tracing::warn;

// Matches the reference deployment; the demo accounts are not worth a
// production-grade work factor.
const HASH_COST: u32 = 8;

/// In-memory credential store, immutable after startup.
///
/// Constructed once at process start and injected wherever credentials need
/// checking, so a persistent store can replace it without touching the
/// authentication logic.
pub struct UserStore {
    users: Vec<User>,
    // Verified against when a username is unknown, so a miss costs the same
    // bcrypt comparison as a mismatch.
    dummy_hash: String,
}

impl UserStore {
    /// Seed the store with the demo accounts. Hashing happens here, once.
    pub fn new() -> Result<Self> {
        let users = vec![
            User {
                username: "admin".to_string(),
                password_hash: hash("adminpass", HASH_COST)
                    .context("Failed to hash admin password")?,
                role: UserRole::Admin,
            },
            User {
                username: "user".to_string(),
                password_hash: hash("userpass", HASH_COST)
                    .context("Failed to hash user password")?,
                role: UserRole::User,
            },
        ];

        let dummy_hash =
            hash("placeholder", HASH_COST).context("Failed to hash dummy password")?;

        Ok(Self { users, dummy_hash })
    }

    /// Look up a user record by username
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Authenticate a login attempt.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller: both come back as `InvalidCredentials`.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<&User, AuthError> {
        match self.find_by_username(username) {
            Some(user) => {
                let valid = verify(password, &user.password_hash).unwrap_or(false);
                if valid {
                    Ok(user)
                } else {
                    warn!("Failed login attempt: {}", username);
                    Err(AuthError::InvalidCredentials)
                }
            }
            None => {
                let _ = verify(password, &self.dummy_hash);
                warn!("Failed login attempt: {}", username);
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_accounts_seeded() {
        let store = UserStore::new().unwrap();
        assert_eq!(store.len(), 2);

        let admin = store.find_by_username("admin").unwrap();
        assert_eq!(admin.role, UserRole::Admin);

        let user = store.find_by_username("user").unwrap();
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn test_identities_unique() {
        let store = UserStore::new().unwrap();
        let mut names: Vec<&str> = store.users.iter().map(|u| u.username.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), store.len());
    }

    #[test]
    fn test_verify_correct_password() {
        let store = UserStore::new().unwrap();
        let user = store.verify_credentials("admin", "adminpass").unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_wrong_password_and_unknown_user_look_identical() {
        let store = UserStore::new().unwrap();

        let wrong_password = store.verify_credentials("admin", "nope").unwrap_err();
        let unknown_user = store.verify_credentials("nobody", "nope").unwrap_err();

        assert_eq!(wrong_password, AuthError::InvalidCredentials);
        assert_eq!(unknown_user, AuthError::InvalidCredentials);
    }

    #[test]
    fn test_unknown_username_not_found() {
        let store = UserStore::new().unwrap();
        assert!(store.find_by_username("nobody").is_none());
    }
}
