pub mod app;
pub mod components;
pub mod dashboard;
pub mod routes;
pub mod services;

pub use app::App;
pub use dashboard::Dashboard;
pub use services::{HttpReportService, PortalServices, ReportService};
