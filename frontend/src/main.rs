use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod dom;
mod carousel;
mod components {
    pub mod disclosure;
    pub mod image_fallback;
    pub mod pill;
    pub mod reveal;
}
mod sections {
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod works;
    pub mod testimonials;
    pub mod faqs;
    pub mod contact;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{
    home::Home,
    not_found::NotFound,
};


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
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::warn!("logger already initialized");
    }

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
