//! Authentication Module
//! Mission: Stateless bearer-token authentication with role-based gating
//!
//! Login exchanges credentials for an HS256 JWT; every protected request is
//! then verified independently from the token alone. No session state, no
//! revocation list.

pub mod api;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod user_store;

pub use api::AuthState;
pub use jwt::JwtHandler;
pub use middleware::{auth_middleware, require_role, AuthError};
pub use user_store::UserStore;
