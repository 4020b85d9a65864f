use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sqlx::PgPool;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AuthResponseDto, AuthUserDto, LoginRequestDto, SignupRequestDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::models::User;
use crate::features::auth::services::TokenService;

/// Service for account creation and credential verification
pub struct AuthService {
    pool: PgPool,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(pool: PgPool, tokens: Arc<TokenService>) -> Self {
        Self { pool, tokens }
    }

    /// Register a new account and issue an access token
    pub async fn signup(&self, dto: SignupRequestDto) -> Result<AuthResponseDto> {
        let email = dto.email.trim().to_lowercase();

        let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(&email)
            .fetch_one(&self.pool)
            .await?;

        if existing > 0 {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, full_name)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, full_name, created_at
            "#,
        )
        .bind(&email)
        .bind(&password_hash)
        .bind(dto.full_name.trim())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Registered new user {}", user.id);

        self.auth_response(user)
    }

    /// Verify credentials and issue an access token.
    ///
    /// A wrong email and a wrong password return the same error, so a caller
    /// cannot probe which half failed.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let email = dto.email.trim().to_lowercase();

        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, full_name, created_at FROM users WHERE email = $1",
        )
        .bind(&email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        if !verify_password(&dto.password, &user.password_hash)? {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        self.auth_response(user)
    }

    /// Fetch the profile of the authenticated caller
    pub async fn get_current_user(&self, user: AuthenticatedUser) -> Result<AuthUserDto> {
        let row = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, full_name, created_at FROM users WHERE id = $1",
        )
        .bind(user.user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(AuthUserDto {
            id: row.id,
            email: row.email,
            full_name: row.full_name,
            created_at: row.created_at,
        })
    }

    fn auth_response(&self, user: User) -> Result<AuthResponseDto> {
        let (access_token, expires_in) =
            self.tokens
                .issue_token(user.id, &user.email, &user.full_name)?;

        Ok(AuthResponseDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: AuthUserDto {
                id: user.id,
                email: user.email,
                full_name: user.full_name,
                created_at: user.created_at,
            },
        })
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Corrupt password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = hash_password("hunter22hunter22").unwrap();
        assert!(verify_password("hunter22hunter22", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }
}
