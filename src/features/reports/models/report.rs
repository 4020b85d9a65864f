use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle state of an uploaded report.
///
/// Transitions are monotonic: `uploading → analyzing → completed | error`.
/// Terminal states re-enter `analyzing` only through an explicit re-analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "report_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Uploading,
    Analyzing,
    Completed,
    Error,
}

impl ReportStatus {
    /// Whether analysis has finished one way or the other. Only terminal
    /// reports may be re-analyzed; the corresponding SQL guards use the same
    /// set of states.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReportStatus::Completed | ReportStatus::Error)
    }
}

/// Risk classification of an analysis result.
///
/// Ordered so escalation can use `max`: once a report reads `high`, a later
/// `moderate` match cannot lower it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Immutable output of the report analysis simulator, stored as JSONB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub summary: String,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub detected_conditions: Vec<String>,
    pub risk_level: RiskLevel,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

/// Report row as stored in the `reports` table
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub file_key: String,
    pub file_url: String,
    pub analysis_result: Option<sqlx::types::Json<AnalysisResult>>,
    pub status: ReportStatus,
    pub upload_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_escalation_is_monotonic() {
        assert_eq!(RiskLevel::Low.max(RiskLevel::Moderate), RiskLevel::Moderate);
        assert_eq!(RiskLevel::High.max(RiskLevel::Moderate), RiskLevel::High);
        assert_eq!(RiskLevel::Moderate.max(RiskLevel::High), RiskLevel::High);
    }

    #[test]
    fn test_only_terminal_reports_can_be_reanalyzed() {
        assert!(ReportStatus::Completed.is_terminal());
        assert!(ReportStatus::Error.is_terminal());
        assert!(!ReportStatus::Analyzing.is_terminal());
        assert!(!ReportStatus::Uploading.is_terminal());
    }

    #[test]
    fn test_risk_level_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Moderate).unwrap(),
            "\"moderate\""
        );
        assert_eq!(
            serde_json::to_string(&ReportStatus::Analyzing).unwrap(),
            "\"analyzing\""
        );
    }
}
