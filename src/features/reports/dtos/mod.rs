pub mod report_dto;

pub use report_dto::{
    CreateLocationReportDto, LocationReportResponseDto, ReportListQuery, UpdateReportStatusDto,
};
