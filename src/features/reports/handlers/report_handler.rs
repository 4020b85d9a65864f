use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{
    FailedUploadDto, ReportDto, UploadReportsDto, UploadResponseDto,
};
use crate::features::reports::services::ReportService;
use crate::features::reports::workers::AnalysisWorker;
use crate::shared::constants::{ALLOWED_REPORT_MIME_TYPES, MAX_REPORT_FILE_SIZE};
use crate::shared::types::{ApiResponse, Meta};

/// Handler state for the reports feature
#[derive(Clone)]
pub struct ReportState {
    pub report_service: Arc<ReportService>,
    pub worker: Arc<AnalysisWorker>,
}

/// Text handed to the analysis simulator. Real text extraction from PDFs and
/// images is out of scope, so the file name plus a format stub stands in.
fn report_text_for(file_name: &str, content_type: &str) -> String {
    if content_type == "application/pdf" {
        format!("{} - Medical report uploaded - PDF analysis pending", file_name)
    } else {
        format!("{} - Medical image uploaded - Image analysis pending", file_name)
    }
}

fn validate_file(file_name: &str, content_type: &str, size: usize) -> std::result::Result<(), String> {
    if !ALLOWED_REPORT_MIME_TYPES.contains(&content_type) {
        return Err(format!(
            "Unsupported file type '{}' for {}. Allowed: PDF, JPEG, PNG",
            content_type, file_name
        ));
    }

    if size > MAX_REPORT_FILE_SIZE {
        return Err(format!(
            "File {} exceeds the {}MB size limit",
            file_name,
            MAX_REPORT_FILE_SIZE / (1024 * 1024)
        ));
    }

    Ok(())
}

/// Upload one or more medical reports.
///
/// Files are processed strictly in submission order. A failed file lands in
/// the `failed` list without aborting the rest of the batch. Each stored
/// report starts an analysis task; the response does not wait for analysis.
#[utoipa::path(
    post,
    path = "/api/reports/upload",
    tag = "reports",
    request_body(
        content = UploadReportsDto,
        content_type = "multipart/form-data",
        description = "One or more `file` fields (PDF, JPEG, or PNG, up to 10MB each)",
    ),
    responses(
        (status = 201, description = "Batch processed", body = ApiResponse<UploadResponseDto>),
        (status = 400, description = "Malformed multipart body"),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_reports(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadResponseDto>>)> {
    let mut uploaded = Vec::new();
    let mut failed = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();
        if field_name != "file" {
            debug!("Ignoring unknown field: {}", field_name);
            continue;
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unnamed".to_string());

        let data = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                failed.push(FailedUploadDto {
                    file_name,
                    reason: format!("Failed to read file data: {}", e),
                });
                continue;
            }
        };

        if let Err(reason) = validate_file(&file_name, &content_type, data.len()) {
            failed.push(FailedUploadDto { file_name, reason });
            continue;
        }

        match state
            .report_service
            .create(user.user_id, &file_name, data, &content_type)
            .await
        {
            Ok(report) => {
                state
                    .worker
                    .spawn_analysis(report.id, report_text_for(&file_name, &content_type));
                uploaded.push(ReportDto::from(report));
            }
            Err(e) => {
                tracing::warn!("Upload failed for {}: {:?}", file_name, e);
                failed.push(FailedUploadDto {
                    file_name,
                    reason: e.to_string(),
                });
            }
        }
    }

    if uploaded.is_empty() && failed.is_empty() {
        return Err(AppError::BadRequest(
            "No file fields in upload".to_string(),
        ));
    }

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(UploadResponseDto { uploaded, failed }),
            None,
            None,
        )),
    ))
}

/// List the caller's reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "reports",
    responses(
        (status = 200, description = "Reports retrieved", body = ApiResponse<Vec<ReportDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_reports(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
) -> Result<Json<ApiResponse<Vec<ReportDto>>>> {
    let reports = state.report_service.list(user.user_id).await?;
    let total = reports.len() as i64;
    let dtos = reports.into_iter().map(ReportDto::from).collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get one report
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    tag = "reports",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report retrieved", body = ApiResponse<ReportDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Report not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_report(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReportDto>>> {
    let report = state.report_service.get(user.user_id, id).await?;
    Ok(Json(ApiResponse::success(
        Some(ReportDto::from(report)),
        None,
        None,
    )))
}

/// Re-run analysis on a completed or errored report
#[utoipa::path(
    post,
    path = "/api/reports/{id}/reanalyze",
    tag = "reports",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Re-analysis started", body = ApiResponse<ReportDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Report not found"),
        (status = 409, description = "Report is already being analyzed")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn reanalyze_report(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReportDto>>> {
    let report = state.report_service.begin_reanalysis(user.user_id, id).await?;

    state.worker.spawn_analysis(
        report.id,
        format!("{} - Medical report re-analysis requested", report.file_name),
    );

    Ok(Json(ApiResponse::success(
        Some(ReportDto::from(report)),
        None,
        None,
    )))
}

/// Delete a report and its stored file.
///
/// The stored file is removed first; if that fails the report row is kept
/// and the error surfaced.
#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    tag = "reports",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report deleted", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Report not found"),
        (status = 502, description = "Stored file could not be deleted")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_report(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    state.report_service.delete(user.user_id, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Report deleted".to_string()),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_accepts_allowed_types() {
        assert!(validate_file("scan.pdf", "application/pdf", 1024).is_ok());
        assert!(validate_file("xray.jpg", "image/jpeg", 1024).is_ok());
        assert!(validate_file("chart.png", "image/png", 1024).is_ok());
    }

    #[test]
    fn test_validate_file_rejects_other_types() {
        assert!(validate_file("notes.txt", "text/plain", 10).is_err());
        assert!(validate_file("report.docx", "application/octet-stream", 10).is_err());
    }

    #[test]
    fn test_validate_file_rejects_oversized() {
        assert!(validate_file("big.pdf", "application/pdf", MAX_REPORT_FILE_SIZE + 1).is_err());
        assert!(validate_file("ok.pdf", "application/pdf", MAX_REPORT_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_report_text_mentions_format() {
        assert!(report_text_for("scan.pdf", "application/pdf").contains("PDF analysis pending"));
        assert!(report_text_for("xray.png", "image/png").contains("Image analysis pending"));
    }
}
