mod report_dto;

pub use report_dto::{FailedUploadDto, ReportDto, UploadReportsDto, UploadResponseDto};
