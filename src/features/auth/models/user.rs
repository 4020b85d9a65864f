use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// User row as stored in the `users` table
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}
