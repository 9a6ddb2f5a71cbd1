//! Assessment list with a per-row report trigger

use crate::dashboard::assessments::Assessment;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AssessmentListProps {
    pub assessments: Vec<Assessment>,
    /// A report request is in flight; every trigger is disabled
    pub generating: bool,
    /// Emits the session identifier of the clicked row
    pub on_generate: Callback<String>,
}

#[function_component(AssessmentList)]
pub fn assessment_list(props: &AssessmentListProps) -> Html {
    html! {
        <div class="bg-white shadow-md rounded-lg overflow-hidden">
            <div class="px-4 py-5 sm:px-6">
                <h2 class="text-lg font-medium text-gray-900">{"Your Assessments"}</h2>
                <p class="mt-1 max-w-2xl text-sm text-gray-500">
                    {"Select an assessment to generate a report"}
                </p>
            </div>
            <div class="border-t border-gray-200">
                <ul class="divide-y divide-gray-200">
                    {props.assessments.iter().map(|assessment| {
                        let on_click = {
                            let session_id = assessment.session_id.clone();
                            let on_generate = props.on_generate.clone();
                            Callback::from(move |_: MouseEvent| on_generate.emit(session_id.clone()))
                        };

                        html! {
                            <li key={assessment.id} class="px-4 py-4 sm:px-6">
                                <div class="flex items-center justify-between">
                                    <div>
                                        <h3 class="text-lg font-medium text-gray-900">{&assessment.name}</h3>
                                        <p class="text-sm text-gray-500">{format!("Session ID: {}", assessment.session_id)}</p>
                                        <p class="text-sm text-gray-500">{format!("Date: {}", assessment.date)}</p>
                                    </div>
                                    <button
                                        onclick={on_click}
                                        disabled={props.generating}
                                        class="px-4 py-2 bg-indigo-600 text-white rounded hover:bg-indigo-700 disabled:bg-indigo-300"
                                    >
                                        {if props.generating { "Generating..." } else { "Generate Report" }}
                                    </button>
                                </div>
                            </li>
                        }
                    }).collect::<Html>()}
                </ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::assessments::sample_assessments;
    use yew::ServerRenderer;

    /// Whether each rendered `<button>` carries the `disabled` attribute
    fn button_states(html: &str) -> Vec<bool> {
        html.split("<button")
            .skip(1)
            .map(|rest| {
                let tag = &rest[..rest.find('>').unwrap_or(rest.len())];
                // Tailwind `disabled:` variants in the class list don't count
                tag.replace("disabled:", "").contains("disabled")
            })
            .collect()
    }

    async fn render(generating: bool) -> String {
        ServerRenderer::<AssessmentList>::with_props(move || AssessmentListProps {
            assessments: sample_assessments(),
            generating,
            on_generate: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_rows_follow_fixture_order() {
        let html = render(false).await;
        let first = html.find("as_hr_02_001").unwrap();
        let second = html.find("as_card_01_002").unwrap();
        assert!(first < second);
        assert!(html.contains("Date: 2023-05-15"));
        assert!(html.contains("Cardiac Assessment"));
        assert_eq!(html.matches("Generate Report").count(), 2);
        assert_eq!(button_states(&html), [false, false]);
    }

    #[tokio::test]
    async fn test_every_trigger_disabled_while_generating() {
        let html = render(true).await;
        assert_eq!(html.matches("Generating...").count(), 2);
        assert_eq!(button_states(&html), [true, true]);
    }
}
