use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id
    sub: String,
    email: String,
    name: String,
    iat: u64,
    exp: u64,
}

/// Issues and validates locally-signed HS256 access tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: u64,
    leeway_secs: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_secs: config.token_ttl.as_secs(),
            leeway_secs: config.jwt_leeway.as_secs(),
        }
    }

    /// Issue an access token for the user.
    ///
    /// Returns the encoded token and its lifetime in seconds.
    pub fn issue_token(&self, user_id: Uuid, email: &str, name: &str) -> Result<(String, i64)> {
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            iat: now,
            exp: now + self.token_ttl_secs,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok((token, self.token_ttl_secs as i64))
    }

    /// Validate a bearer token and extract the caller's identity
    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        let claims = token_data.claims;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(AuthenticatedUser {
            user_id,
            email: claims.email,
            name: claims.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_service() -> TokenService {
        TokenService::new(&AuthConfig {
            jwt_secret: "test-secret-at-least-32-characters-long".to_string(),
            token_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(60),
        })
    }

    #[test]
    fn test_issue_and_validate_token() {
        let service = test_service();
        let user_id = Uuid::new_v4();

        let (token, expires_in) = service
            .issue_token(user_id, "patient@example.com", "Test Patient")
            .unwrap();
        assert_eq!(expires_in, 3600);

        let user = service.validate_token(&token).unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "patient@example.com");
        assert_eq!(user.name, "Test Patient");
    }

    #[test]
    fn test_validate_garbage_token() {
        let service = test_service();
        assert!(service.validate_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_validate_token_wrong_secret() {
        let service = test_service();
        let other = TokenService::new(&AuthConfig {
            jwt_secret: "another-secret-also-32-characters-xx".to_string(),
            token_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(60),
        });

        let (token, _) = service
            .issue_token(Uuid::new_v4(), "patient@example.com", "Test Patient")
            .unwrap();
        assert!(other.validate_token(&token).is_err());
    }
}
