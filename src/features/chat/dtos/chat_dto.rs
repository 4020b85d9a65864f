use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request DTO for sending a chat message
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatRequestDto {
    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,
}

/// Response DTO for a chat exchange
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponseDto {
    pub response: String,
}

/// One transcript entry in the chat history
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageDto {
    pub id: Uuid,
    pub message: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}
