use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted chat exchange (user message + assistant response)
#[derive(Debug, Clone, FromRow)]
pub struct ChatMessage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}
