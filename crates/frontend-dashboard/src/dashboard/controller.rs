//! Mount and report-generation flows, kept free of rendering so they can be
//! driven with in-memory capabilities.

use super::assessments::{sample_assessments, Assessment};
use super::state::DashboardAction;
use crate::routes::Route;
use crate::services::ReportService;
use portal_frontend_common::client::ClientError;
use portal_frontend_common::{
    check_session, logout, Scheduler, SessionStatus, SessionStore, TaskHandle,
};
use std::time::Duration;

/// Shown when a failed generation carries no server message
pub const REPORT_FAILED_FALLBACK: &str = "Failed to generate report";

/// What the dashboard must do right after mounting
#[derive(Debug)]
pub enum MountOutcome {
    /// No credential: leave for the login route, render nothing else
    RedirectToLogin,
    /// Credential found: the list arrives when the handle's task fires.
    /// Dropping the handle abandons the load.
    Loading(TaskHandle),
}

/// Guard the dashboard behind a stored credential, then load the sample
/// list after `delay`
pub fn start_dashboard(
    store: &dyn SessionStore,
    scheduler: &dyn Scheduler,
    delay: Duration,
    on_loaded: impl FnOnce(Vec<Assessment>) + 'static,
) -> MountOutcome {
    if check_session(store) == SessionStatus::Missing {
        tracing::info!("no credential stored, redirecting to login");
        return MountOutcome::RedirectToLogin;
    }

    let handle = scheduler.schedule(delay, Box::new(move || on_loaded(sample_assessments())));
    MountOutcome::Loading(handle)
}

/// What a click on a report trigger should do
#[derive(Debug, PartialEq, Eq)]
pub enum ReportStart {
    /// Another request is still in flight
    AlreadyPending,
    /// The credential disappeared since mount
    RedirectToLogin,
    /// Go ahead with this bearer token
    Start(String),
}

/// Decide whether a report request may start. The token is re-read so a
/// logout in another tab sends the user to the login route.
pub fn begin_report(store: &dyn SessionStore, in_flight: bool) -> ReportStart {
    if in_flight {
        return ReportStart::AlreadyPending;
    }

    match check_session(store).token() {
        Some(token) => ReportStart::Start(token.to_string()),
        None => {
            tracing::info!("credential gone before report request, redirecting to login");
            ReportStart::RedirectToLogin
        }
    }
}

/// Clear the session and name the route to leave for
pub fn sign_out(store: &dyn SessionStore) -> Route {
    logout(store);
    Route::Login
}

/// Run one report generation and turn the outcome into a state action
pub async fn request_report(
    reports: &dyn ReportService,
    token: &str,
    session_id: &str,
) -> DashboardAction {
    match reports.generate(token, session_id).await {
        Ok(report) => {
            tracing::info!(session_id, url = %report.url, "report generated");
            DashboardAction::ReportReady(report.url)
        }
        Err(error) => {
            tracing::warn!(session_id, %error, "report generation failed");
            DashboardAction::ReportFailed(failure_message(&error))
        }
    }
}

/// Server-provided message, or the generic fallback
pub fn failure_message(error: &ClientError) -> String {
    error
        .server_message()
        .map_or_else(|| REPORT_FAILED_FALLBACK.to_string(), ToString::to_string)
}
