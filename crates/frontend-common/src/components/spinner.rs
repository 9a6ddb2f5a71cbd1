//! Full-screen loading indicator

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    /// Caption under the spinner
    #[prop_or_default]
    pub caption: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <div
                    class="w-10 h-10 border-4 border-gray-200 border-t-indigo-600 rounded-full animate-spin mx-auto"
                    role="status"
                >
                    <span class="sr-only">{"Loading..."}</span>
                </div>
                if let Some(caption) = &props.caption {
                    <p class="mt-2 text-gray-600">{caption.to_string()}</p>
                }
            </div>
        </div>
    }
}
