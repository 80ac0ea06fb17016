use yew::prelude::*;
use log::info;

mod config;
mod content;
mod error;
mod section;
mod theme;
mod tracker;

mod pages {
    pub mod landing;
}

mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod icon;
    pub mod nav;
    pub mod portfolio;
    pub mod services;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! {
        <Landing />
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
