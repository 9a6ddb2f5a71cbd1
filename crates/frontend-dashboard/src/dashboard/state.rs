//! Dashboard state machine
//!
//! `Unauthenticated -> Loading -> Loaded`, with report generation toggling
//! `generating` while the phase stays `Loaded`.

use super::assessments::Assessment;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Mounted, credential not yet confirmed
    Unauthenticated,
    /// Credential found, waiting for the list
    Loading,
    Loaded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub phase: Phase,
    pub assessments: Vec<Assessment>,
    pub generating: bool,
    pub error: Option<String>,
    pub report_url: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum DashboardAction {
    SessionFound,
    AssessmentsLoaded(Vec<Assessment>),
    ReportRequested,
    ReportReady(String),
    ReportFailed(String),
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            phase: Phase::Unauthenticated,
            assessments: Vec::new(),
            generating: false,
            error: None,
            report_url: None,
        }
    }
}

impl DashboardState {
    pub fn is_loaded(&self) -> bool {
        self.phase == Phase::Loaded
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DashboardAction::SessionFound => {
                if self.phase != Phase::Unauthenticated {
                    return self;
                }
                tracing::debug!("session found, loading assessments");
                Rc::new(Self {
                    phase: Phase::Loading,
                    ..(*self).clone()
                })
            }
            DashboardAction::AssessmentsLoaded(assessments) => {
                tracing::debug!(count = assessments.len(), "assessments loaded");
                Rc::new(Self {
                    phase: Phase::Loaded,
                    assessments,
                    ..(*self).clone()
                })
            }
            DashboardAction::ReportRequested => Rc::new(Self {
                generating: true,
                error: None,
                report_url: None,
                ..(*self).clone()
            }),
            DashboardAction::ReportReady(url) => Rc::new(Self {
                generating: false,
                report_url: Some(url),
                ..(*self).clone()
            }),
            DashboardAction::ReportFailed(message) => Rc::new(Self {
                generating: false,
                error: Some(message),
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::assessments::sample_assessments;

    fn reduce_all(actions: Vec<DashboardAction>) -> Rc<DashboardState> {
        actions
            .into_iter()
            .fold(Rc::new(DashboardState::default()), |state, action| {
                state.reduce(action)
            })
    }

    fn loaded() -> Vec<DashboardAction> {
        vec![
            DashboardAction::SessionFound,
            DashboardAction::AssessmentsLoaded(sample_assessments()),
        ]
    }

    #[test]
    fn test_starts_unauthenticated_and_empty() {
        let state = DashboardState::default();
        assert_eq!(state.phase, Phase::Unauthenticated);
        assert!(state.assessments.is_empty());
        assert!(!state.is_loaded());
    }

    #[test]
    fn test_load_sequence() {
        let state = reduce_all(vec![DashboardAction::SessionFound]);
        assert_eq!(state.phase, Phase::Loading);

        let state = reduce_all(loaded());
        assert!(state.is_loaded());
        assert_eq!(state.assessments, sample_assessments());
    }

    #[test]
    fn test_report_request_clears_previous_outcome() {
        let mut actions = loaded();
        actions.push(DashboardAction::ReportRequested);
        actions.push(DashboardAction::ReportFailed("boom".into()));
        actions.push(DashboardAction::ReportRequested);
        let state = reduce_all(actions);

        assert!(state.generating);
        assert_eq!(state.error, None);
        assert_eq!(state.report_url, None);
        assert!(state.is_loaded());
    }

    #[test]
    fn test_report_ready() {
        let mut actions = loaded();
        actions.push(DashboardAction::ReportRequested);
        actions.push(DashboardAction::ReportReady(
            "http://localhost:5000/files/r1.pdf".into(),
        ));
        let state = reduce_all(actions);

        assert!(!state.generating);
        assert_eq!(
            state.report_url.as_deref(),
            Some("http://localhost:5000/files/r1.pdf")
        );
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_report_failed_keeps_list_usable() {
        let mut actions = loaded();
        actions.push(DashboardAction::ReportRequested);
        actions.push(DashboardAction::ReportFailed("boom".into()));
        let state = reduce_all(actions);

        assert!(!state.generating);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert_eq!(state.assessments.len(), 2);
    }

    #[test]
    fn test_session_found_is_ignored_once_loading() {
        let state = reduce_all(loaded());
        let again = state.clone().reduce(DashboardAction::SessionFound);
        assert!(Rc::ptr_eq(&state, &again));
    }
}
