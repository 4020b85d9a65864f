use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::reports::models::{AnalysisResult, Report, ReportStatus};

/// One report as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportDto {
    pub id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub status: ReportStatus,
    pub analysis_result: Option<AnalysisResult>,
    pub upload_date: DateTime<Utc>,
}

impl From<Report> for ReportDto {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            file_name: report.file_name,
            file_url: report.file_url,
            status: report.status,
            analysis_result: report.analysis_result.map(|json| json.0),
            upload_date: report.upload_date,
        }
    }
}

/// Upload form schema (multipart/form-data, one or more `file` fields)
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadReportsDto {
    /// Report files (PDF, JPEG, or PNG, up to 10MB each)
    #[schema(value_type = Vec<String>, format = Binary)]
    pub file: Vec<String>,
}

/// One file that could not be uploaded; the rest of the batch continues
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FailedUploadDto {
    pub file_name: String,
    pub reason: String,
}

/// Result of a batch upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponseDto {
    pub uploaded: Vec<ReportDto>,
    pub failed: Vec<FailedUploadDto>,
}
