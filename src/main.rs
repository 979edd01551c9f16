use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod catalog;
mod config;
mod dom;
mod state {
    pub mod contact;
    pub mod counter;
    pub mod detail;
    pub mod filter;
    pub mod scroll;
    pub mod tagline;
    pub mod toast;
}
mod components {
    pub mod contact_drawer;
    pub mod counter;
    pub mod details_modal;
    pub mod hero;
    pub mod premium;
    pub mod reveal;
    pub mod scroll_progress;
    pub mod toast;
}
mod pages {
    pub mod not_found;
    pub mod showroom;
}

use components::toast::ToastProvider;
use pages::{not_found::NotFound, showroom::Showroom};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Showroom,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Showroom => {
            info!("Rendering Showroom page");
            html! { <Showroom /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting showroom");
    yew::Renderer::<App>::new().render();
}
