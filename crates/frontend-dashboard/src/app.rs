use crate::components::LoginPage;
use crate::dashboard::Dashboard;
use crate::routes::Route;
use crate::services::PortalServices;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub services: PortalServices,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<PortalServices> context={props.services.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<PortalServices>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <Dashboard /> },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center text-gray-600">
                {"Page not found"}
            </div>
        },
    }
}
