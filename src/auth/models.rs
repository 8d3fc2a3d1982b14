//! Authentication Models
//! Mission: Define user, role, and token claim structures

use serde::{Deserialize, Serialize};

/// User account held by the credential store
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password_hash: String, // bcrypt hash - never leaves the store
    pub role: UserRole,
}

/// User roles for RBAC
///
/// A closed set: an invalid role cannot be constructed, so route gating
/// never deals with free-form strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    #[serde(rename = "admin")]
    Admin, // Full access, including the admin-only routes
    #[serde(rename = "user")]
    User, // Standard dashboard access
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "user" => Some(UserRole::User),
            _ => None,
        }
    }
}

/// JWT Claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // subject (username)
    pub role: UserRole,
    pub iat: usize, // issued-at timestamp
    pub exp: usize, // expiration timestamp
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: UserRole,
    pub username: String,
}
