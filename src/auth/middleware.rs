//! Authentication Middleware
//! Mission: Gate protected routes on token possession and role

use crate::auth::jwt::JwtHandler;
use crate::auth::models::{Claims, UserRole};
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Token verifier: runs before every protected handler and short-circuits
/// the pipeline with a 401 when the token is missing or invalid.
///
/// On success the decoded claims are inserted into the request extensions
/// for the role gate and handlers downstream.
pub async fn auth_middleware(
    State(jwt_handler): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = bearer_token(header_value);

    let claims = jwt_handler
        .validate_token(token)
        .map_err(|_| AuthError::InvalidToken)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Pull the credential out of an Authorization header value.
///
/// The scheme prefix is deliberately not validated, matching the reference
/// deployment: the second whitespace-separated segment is the token
/// candidate, and a malformed header degenerates to an empty string that
/// fails signature verification downstream.
fn bearer_token(header_value: &str) -> &str {
    header_value.split_whitespace().nth(1).unwrap_or("")
}

type RoleGateFuture = Pin<Box<dyn Future<Output = Result<Response, AuthError>> + Send>>;

/// Role gate: build a middleware requiring an exact role match.
///
/// The required role is fixed at route-registration time. No hierarchy, no
/// wildcards: an admin token does not pass a gate asking for another role.
pub fn require_role(
    required: UserRole,
) -> impl Fn(Request, Next) -> RoleGateFuture + Clone + Send + 'static {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let claims = req
                .extensions()
                .get::<Claims>()
                .ok_or(AuthError::NotAuthenticated)?;

            if claims.role != required {
                return Err(AuthError::Forbidden);
            }

            Ok(next.run(req).await)
        })
    }
}

/// Authentication and authorization failures.
///
/// Every variant is terminal for the request and maps to a small JSON error
/// body; nothing internal leaks to the caller.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    MissingToken,
    InvalidToken,
    NotAuthenticated,
    Forbidden,
    Internal,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "No token provided"),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            AuthError::NotAuthenticated => (StatusCode::UNAUTHORIZED, "Not authenticated"),
            AuthError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            AuthError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
