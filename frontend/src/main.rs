use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod dom;
mod intro;
mod layout;
mod motion;
mod reveal;
mod sequencer;
mod components {
    pub mod button;
    pub mod footer;
    pub mod hero;
    pub mod menu_button;
    pub mod nav_bar;
    pub mod navigation;
    pub mod section;
    pub mod testimonials;
}
mod pages {
    pub mod sections;
    pub mod tabbed;
}

use pages::{
    sections::LongScroll,
    tabbed::TabbedHome,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sections")]
    Sections,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering tabbed home");
            html! { <TabbedHome /> }
        },
        Route::Sections => {
            info!("Rendering long-scroll page");
            html! { <LongScroll /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <img src={config::BRAND_LOGO} alt="Sonia" />
            <h1>{"This page doesn't exist"}</h1>
            <Link<Route> to={Route::Home}>
                {"Back to Sonia"}
            </Link<Route>>
        </div>
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
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
