//! Login route placeholder
//!
//! Sign-in happens in an external flow that stores the credential token;
//! this page only marks where the dashboard sends signed-out users.

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md w-full bg-white shadow-md rounded-lg p-8 text-center">
                <h1 class="text-2xl font-bold text-gray-900">{"Sign in required"}</h1>
                <p class="mt-2 text-gray-600">{"Sign in to view your assessments."}</p>
                <Link<Route> to={Route::Dashboard} classes="inline-block mt-6 text-indigo-600 hover:text-indigo-800">
                    {"Back to dashboard"}
                </Link<Route>>
            </div>
        </div>
    }
}
