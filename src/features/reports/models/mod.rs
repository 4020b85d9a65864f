mod report;

pub use report::{AnalysisResult, Report, ReportStatus, RiskLevel};
