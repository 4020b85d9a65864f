pub mod report_handler;

pub use report_handler::{
    __path_delete_report, __path_get_report, __path_list_reports, __path_reanalyze_report,
    __path_upload_reports, delete_report, get_report, list_reports, reanalyze_report,
    upload_reports, ReportState,
};
