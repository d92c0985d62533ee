pub mod location_report;

pub use location_report::{LocationReport, ReportWithLocation};
