mod alerts;
mod assessment_list;
mod login_page;

pub use alerts::{ErrorAlert, ReportReadyAlert};
pub use assessment_list::AssessmentList;
pub use login_page::LoginPage;
