//! Visitor reports about mapped locations.
//!
//! A report carries a free-text message and starts as "pending"; the admin
//! dashboard surfaces the pending count and the report table allows status
//! transitions. Nothing beyond that minimal lifecycle is modeled.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/reports` | No | Submit a report |
//! | GET | `/api/admin/reports` | Cookie | List reports (status filter) |
//! | PUT | `/api/admin/reports/{id}/status` | Cookie | Update status |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReportService;
