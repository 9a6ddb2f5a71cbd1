//! Assessment dashboard page

pub mod assessments;
pub mod controller;
pub mod state;

use crate::components::{AssessmentList, ErrorAlert, ReportReadyAlert};
use crate::routes::Route;
use crate::services::use_portal_services;
use controller::{begin_report, request_report, sign_out, start_dashboard, MountOutcome, ReportStart};
use portal_frontend_common::Spinner;
use state::{DashboardAction, DashboardState};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let services = use_portal_services();
    let navigator = use_navigator();
    let state = use_reducer(DashboardState::default);
    let in_flight = use_mut_ref(|| false);

    // Session guard, then the simulated load
    {
        let state = state.clone();
        let services = services.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            let dispatcher = state.dispatcher();
            let outcome = start_dashboard(
                services.store.as_ref(),
                services.scheduler.as_ref(),
                services.config.load_delay,
                move |assessments| dispatcher.dispatch(DashboardAction::AssessmentsLoaded(assessments)),
            );

            let pending = match outcome {
                MountOutcome::RedirectToLogin => {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Login);
                    }
                    None
                }
                MountOutcome::Loading(handle) => {
                    state.dispatch(DashboardAction::SessionFound);
                    Some(handle)
                }
            };

            move || drop(pending)
        });
    }

    let on_generate = {
        let state = state.clone();
        let services = services.clone();
        let navigator = navigator.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |session_id: String| {
            let token = match begin_report(services.store.as_ref(), *in_flight.borrow()) {
                ReportStart::Start(token) => token,
                ReportStart::AlreadyPending => {
                    tracing::debug!(%session_id, "report already in flight, ignoring");
                    return;
                }
                ReportStart::RedirectToLogin => {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Login);
                    }
                    return;
                }
            };

            *in_flight.borrow_mut() = true;
            state.dispatch(DashboardAction::ReportRequested);

            let dispatcher = state.dispatcher();
            let reports = services.reports.clone();
            let in_flight = in_flight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let action = request_report(reports.as_ref(), &token, &session_id).await;
                *in_flight.borrow_mut() = false;
                dispatcher.dispatch(action);
            });
        })
    };

    let on_logout = {
        let services = services.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let route = sign_out(services.store.as_ref());
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    if !state.is_loaded() {
        return html! { <Spinner caption="Loading assessments..." /> };
    }

    html! {
        <div class="container mx-auto px-4 py-8">
            <div class="flex justify-between items-center mb-8">
                <h1 class="text-3xl font-bold">{"Assessment Dashboard"}</h1>
                <button
                    onclick={on_logout}
                    class="px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700"
                >
                    {"Logout"}
                </button>
            </div>

            if let Some(message) = &state.error {
                <ErrorAlert message={message.clone()} />
            }

            if let Some(url) = &state.report_url {
                <ReportReadyAlert url={url.clone()} />
            }

            <AssessmentList
                assessments={state.assessments.clone()}
                generating={state.generating}
                on_generate={on_generate}
            />
        </div>
    }
}
