//! Authentication API Endpoints
//! Mission: Exchange valid credentials for a signed bearer token

use crate::auth::{
    jwt::JwtHandler,
    middleware::AuthError,
    models::{LoginRequest, LoginResponse},
    user_store::UserStore,
};
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub user_store: Arc<UserStore>,
    pub jwt_handler: Arc<JwtHandler>,
}

impl AuthState {
    pub fn new(user_store: Arc<UserStore>, jwt_handler: Arc<JwtHandler>) -> Self {
        Self {
            user_store,
            jwt_handler,
        }
    }
}

/// Login endpoint - POST /api/auth/login
pub async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    info!("Login attempt: {}", payload.username);

    let user = state
        .user_store
        .verify_credentials(&payload.username, &payload.password)?;

    let token = state
        .jwt_handler
        .generate_token(user)
        .map_err(|_| AuthError::Internal)?;

    info!(
        "Login successful: {} ({})",
        user.username,
        user.role.as_str()
    );

    Ok(Json(LoginResponse {
        token,
        role: user.role,
        username: user.username.clone(),
    }))
}
