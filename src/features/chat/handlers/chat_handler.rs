use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, MaybeUser};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::chat::dtos::{ChatMessageDto, ChatRequestDto, ChatResponseDto};
use crate::features::chat::services::ChatService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};
use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// Send a message to the asthma assistant.
///
/// Works with or without authentication; authenticated exchanges are added to
/// the caller's transcript.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Assistant response", body = ApiResponse<ChatResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "chat"
)]
pub async fn send_message(
    State(service): State<Arc<ChatService>>,
    MaybeUser(user): MaybeUser,
    AppJson(dto): AppJson<ChatRequestDto>,
) -> Result<Json<ApiResponse<ChatResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service
        .send_message(user.map(|u| u.user_id), &dto.message)
        .await;

    Ok(Json(ApiResponse::success(
        Some(ChatResponseDto { response }),
        None,
        None,
    )))
}

/// Get the caller's chat transcript, oldest-first
#[utoipa::path(
    get,
    path = "/api/chat/history",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Chat history retrieved", body = ApiResponse<Vec<ChatMessageDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "chat",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_history(
    user: AuthenticatedUser,
    State(service): State<Arc<ChatService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ChatMessageDto>>>> {
    let (messages, total) = service.get_history(user.user_id, &pagination).await?;

    Ok(Json(ApiResponse::success(
        Some(messages),
        None,
        Some(Meta { total }),
    )))
}
