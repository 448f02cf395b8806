use log::info;
use yew::prelude::*;

mod carousel;
mod config;
mod dom;
mod error;
mod signals;
mod components {
    pub mod lazy_image;
    pub mod modal;
    pub mod nav;
    pub mod reveal;
    pub mod slider;
    pub mod tabs;
}
mod pages {
    pub mod landing;
}

use config::SiteConfig;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let config = use_state(SiteConfig::load);

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <Landing />
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
