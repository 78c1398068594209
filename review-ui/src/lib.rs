pub mod api;
pub mod catalog;
pub mod components;
pub mod markdown;
pub mod pages;
pub mod platform;
pub mod store;

use dioxus::prelude::*;

use api::ApiClient;
use pages::Route;
use store::ReviewStore;

/// Application root: constructs the store and API client once and provides
/// them to the tree as signals, then hands control to the router.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(ReviewStore::new()));
    use_context_provider(|| Signal::new(ApiClient::new(api::api_base())));

    rsx! {
        Router::<Route> {}
    }
}
