/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// REPORT UPLOAD LIMITS
// =============================================================================

/// Maximum report file size in bytes (10MB)
pub const MAX_REPORT_FILE_SIZE: usize = 10 * 1024 * 1024;

/// MIME types accepted for medical report uploads
pub const ALLOWED_REPORT_MIME_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/png"];
