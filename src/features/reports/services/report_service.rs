use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{AnalysisResult, Report};
use crate::modules::storage::MinIOClient;

const REPORT_COLUMNS: &str =
    "id, user_id, file_name, file_key, file_url, analysis_result, status, upload_date";

/// Service owning report rows and their stored files.
///
/// Every status update is guarded on the expected current status, so a stale
/// background task cannot resurrect a report that was deleted or re-analyzed
/// in the meantime.
pub struct ReportService {
    pool: PgPool,
    storage: Arc<MinIOClient>,
}

impl ReportService {
    pub fn new(pool: PgPool, storage: Arc<MinIOClient>) -> Self {
        Self { pool, storage }
    }

    /// Upload the file to storage and insert the report row.
    ///
    /// The row is created in `analyzing`: at this point both the object and
    /// the row exist, and analysis is about to be spawned.
    pub async fn create(
        &self,
        user_id: Uuid,
        file_name: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<Report> {
        let file_key = self.storage.generate_report_key(user_id, file_name);
        self.storage.upload(&file_key, data, content_type).await?;
        let file_url = self.storage.get_public_url(&file_key);

        let report = sqlx::query_as::<_, Report>(&format!(
            r#"
            INSERT INTO reports (user_id, file_name, file_key, file_url, status)
            VALUES ($1, $2, $3, $4, 'analyzing')
            RETURNING {REPORT_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(file_name)
        .bind(&file_key)
        .bind(&file_url)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Created report {} for user {}", report.id, user_id);

        Ok(report)
    }

    /// The user's reports, newest upload first
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE user_id = $1 ORDER BY upload_date DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    /// Fetch one report, enforcing ownership
    pub async fn get(&self, user_id: Uuid, report_id: Uuid) -> Result<Report> {
        sqlx::query_as::<_, Report>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1 AND user_id = $2"
        ))
        .bind(report_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Report {} not found", report_id)))
    }

    /// Write the analysis result and flip `analyzing → completed`.
    ///
    /// Returns false when the guard matched no row: the report was deleted or
    /// re-analyzed while the task ran, and the result is dropped.
    pub async fn complete_analysis(
        &self,
        report_id: Uuid,
        analysis: &AnalysisResult,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE reports
            SET analysis_result = $2, status = 'completed'
            WHERE id = $1 AND status = 'analyzing'
            "#,
        )
        .bind(report_id)
        .bind(sqlx::types::Json(analysis))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Flip `analyzing → error` after a failed analysis. Guarded like
    /// `complete_analysis`.
    pub async fn fail_analysis(&self, report_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE reports SET status = 'error' WHERE id = $1 AND status = 'analyzing'",
        )
        .bind(report_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Re-enter `analyzing` from a terminal state, clearing the previous
    /// result. Rejected while a report is still `analyzing`.
    pub async fn begin_reanalysis(&self, user_id: Uuid, report_id: Uuid) -> Result<Report> {
        // Ownership check first so the caller gets 404 rather than 409 for
        // someone else's report
        let report = self.get(user_id, report_id).await?;

        if !report.status.is_terminal() {
            return Err(AppError::Conflict(
                "Report is already being analyzed".to_string(),
            ));
        }

        sqlx::query_as::<_, Report>(&format!(
            r#"
            UPDATE reports
            SET status = 'analyzing', analysis_result = NULL
            WHERE id = $1 AND status IN ('completed', 'error')
            RETURNING {REPORT_COLUMNS}
            "#
        ))
        .bind(report_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::Conflict("Report is already being analyzed".to_string()))
    }

    /// Delete the stored file, then the row.
    ///
    /// Storage goes first: if it fails the row is kept and the error
    /// surfaced, so the report stays listed rather than leaking an orphaned
    /// object. The two steps are not atomic; a crash between them leaves a
    /// row whose file is gone.
    pub async fn delete(&self, user_id: Uuid, report_id: Uuid) -> Result<()> {
        let report = self.get(user_id, report_id).await?;

        self.storage.delete(&report.file_key).await?;

        sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(report_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("Deleted report {} for user {}", report_id, user_id);

        Ok(())
    }
}
