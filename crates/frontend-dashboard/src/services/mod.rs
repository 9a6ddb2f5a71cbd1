pub mod context;
pub mod report;

pub use context::{use_portal_services, PortalServices};
pub use report::{HttpReportService, ReportService};
