//! Route table and the shared page shell.

pub mod admin;
pub mod home;

pub use admin::AdminPage;
pub use home::HomePage;

use dioxus::prelude::*;

use crate::components::styles::APP_STYLES;
use crate::components::Navbar;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    HomePage {},
    #[route("/admin")]
    AdminPage {},
}

#[component]
fn Shell() -> Element {
    rsx! {
        style { {APP_STYLES} }
        div { class: "app-shell",
            Navbar {}
            main { class: "app-main", Outlet::<Route> {} }
        }
    }
}
