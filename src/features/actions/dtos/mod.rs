mod action_dto;

pub use action_dto::{
    ActionRequestDto, AirQualityDataDto, AnalyzeReportDataDto, ChatbotDataDto, ChatbotResponseDto,
};
