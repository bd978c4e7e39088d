use dioxus::prelude::*;
use shared_types::ClientConfig;

pub mod api;
mod components;
pub mod config;
pub mod export;
pub mod format_helpers;
mod routes;
use api::ApiClient;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config: ClientConfig = use_hook(config::load_client_config);

    // Feature flags and the API client are read by every admin page.
    use_context_provider(|| config.features);
    use_context_provider(|| ApiClient::new(config.clone()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
