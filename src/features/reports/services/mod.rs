mod analysis_service;
mod report_service;

pub use analysis_service::{analyze_text, AnalysisService};
pub use report_service::ReportService;
