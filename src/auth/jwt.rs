//! JWT Token Handler
//! Mission: Issue and verify signed, time-limited bearer tokens

use crate::auth::models::{Claims, User};
use anyhow::{bail, Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// JWT handler for token operations.
///
/// The signing key is process-wide: the same handler signs at login and
/// verifies on every protected request, so tokens are fully self-contained
/// and nothing is stored server-side.
pub struct JwtHandler {
    secret: String,
    ttl_hours: i64,
}

impl JwtHandler {
    pub fn new(secret: String, ttl_hours: i64) -> Self {
        Self { secret, ttl_hours }
    }

    /// Mint a token for a verified user
    pub fn generate_token(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(chrono::Duration::hours(self.ttl_hours))
            .context("Invalid expiry timestamp")?;

        let claims = Claims {
            sub: user.username.clone(),
            role: user.role,
            iat: now.timestamp() as usize,
            exp: expiration.timestamp() as usize,
        };

        debug!(
            "Issuing token for {} ({}), valid {}h",
            user.username,
            user.role.as_str(),
            self.ttl_hours
        );

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign token")
    }

    /// Verify a token's signature and validity window, returning the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .context("Invalid or expired token")?;

        // The validity window is half-open: a token is dead at exactly
        // iat + ttl, which jsonwebtoken alone would still accept.
        let now = Utc::now().timestamp() as usize;
        if decoded.claims.exp <= now {
            bail!("Token expired");
        }

        debug!("Validated token for {}", decoded.claims.sub);

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::UserRole;

    fn test_user() -> User {
        User {
            username: "admin".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Admin,
        }
    }

    #[test]
    fn test_issue_then_validate_round_trip() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string(), 8);
        let user = test_user();

        let token = handler.generate_token(&user).unwrap();
        assert!(!token.is_empty());

        let claims = handler.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.exp, claims.iat + 8 * 3600);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string(), 8);
        assert!(handler.validate_token("invalid.token.here").is_err());
        assert!(handler.validate_token("").is_err());
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string(), 8);
        let token = handler.generate_token(&test_user()).unwrap();

        // Flip one base64 character inside the payload segment.
        let mut bytes = token.clone().into_bytes();
        let payload_start = token.find('.').unwrap() + 1;
        bytes[payload_start] = if bytes[payload_start] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert_ne!(tampered, token);
        assert!(handler.validate_token(&tampered).is_err());
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let handler = JwtHandler::new("test-secret-key-12345".to_string(), 8);
        let token = handler.generate_token(&test_user()).unwrap();

        let mut bytes = token.clone().into_bytes();
        let last = bytes.len() - 1;
        bytes[last] = if bytes[last] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert!(handler.validate_token(&tampered).is_err());
    }

    #[test]
    fn test_different_secrets_reject() {
        let issuer = JwtHandler::new("secret1".to_string(), 8);
        let verifier = JwtHandler::new("secret2".to_string(), 8);

        let token = issuer.generate_token(&test_user()).unwrap();
        assert!(verifier.validate_token(&token).is_err());
    }

    #[test]
    fn test_token_dead_at_exact_expiry() {
        // Zero validity puts exp == iat == now; the half-open window means
        // this must already fail.
        let handler = JwtHandler::new("test-secret-key-12345".to_string(), 0);
        let token = handler.generate_token(&test_user()).unwrap();
        assert!(handler.validate_token(&token).is_err());
    }
}
