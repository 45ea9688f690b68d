use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod hooks;
mod styles;
mod onboarding {
    pub mod options;
    pub mod form;
    pub mod wizard;
    pub mod handoff;
    pub mod widgets;
    pub mod modal;
}
mod components {
    pub mod navbar;
    pub mod hero;
    pub mod sections;
    pub mod investment;
    pub mod faq;
    pub mod conversion;
    pub mod footer;
}
mod pages {
    pub mod home;
}

use pages::home::Home;
use styles::GlobalStyles;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <GlobalStyles />
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
