//! Shared navigation bar: branding, route links, and a one-shot service
//! health probe surfaced as a status dot.

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::pages::Route;

fn koala_mark() -> Element {
    rsx! {
        svg { class: "navbar-logo", view_box: "0 0 100 100",
            circle { cx: "20", cy: "30", r: "18", fill: "#8B9A8E" }
            circle { cx: "20", cy: "30", r: "12", fill: "#D4B896" }
            circle { cx: "80", cy: "30", r: "18", fill: "#8B9A8E" }
            circle { cx: "80", cy: "30", r: "12", fill: "#D4B896" }
            circle { cx: "50", cy: "55", r: "35", fill: "#8B9A8E" }
            ellipse { cx: "50", cy: "60", rx: "25", ry: "22", fill: "#C4CFC6" }
            ellipse { cx: "50", cy: "55", rx: "12", ry: "9", fill: "#4A5548" }
            circle { cx: "38", cy: "45", r: "6", fill: "#2D3A2E" }
            circle { cx: "62", cy: "45", r: "6", fill: "#2D3A2E" }
            path {
                d: "M 44 65 Q 50 70 56 65",
                fill: "none",
                stroke: "#4A5548",
                stroke_width: "2",
                stroke_linecap: "round",
            }
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut menu_open = use_signal(|| false);
    let mut service_ok = use_signal(|| None::<bool>);
    let api = use_context::<Signal<ApiClient>>();
    let route = use_route::<Route>();

    // One probe at startup; the dot just reports what it found.
    use_future(move || async move {
        let client = api.read().clone();
        match client.health().await {
            Ok(_) => service_ok.set(Some(true)),
            Err(e) => {
                log::warn!("review service unreachable: {e}");
                service_ok.set(Some(false));
            }
        }
    });

    let review_class = if route == (Route::HomePage {}) {
        "navbar-link active"
    } else {
        "navbar-link"
    };

    let status = match service_ok() {
        Some(true) => Some(("status-dot ok", "service online")),
        Some(false) => Some(("status-dot down", "service unreachable")),
        None => None,
    };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                Link { class: "navbar-brand", to: Route::HomePage {},
                    {koala_mark()}
                    div { class: "navbar-title",
                        span { class: "navbar-name", "Manuscript Koala" }
                        span { class: "navbar-tagline", "Friendly feedback for writers" }
                    }
                }

                div { class: "navbar-links",
                    if let Some((dot_class, label)) = status {
                        span { class: "navbar-status",
                            span { class: "{dot_class}", "●" }
                            "{label}"
                        }
                    }
                    Link { class: "{review_class}", to: Route::HomePage {}, "Review" }
                }

                button {
                    class: "navbar-menu-button",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            if menu_open() {
                div { class: "navbar-mobile",
                    Link {
                        class: "{review_class}",
                        to: Route::HomePage {},
                        onclick: move |_| menu_open.set(false),
                        "Review"
                    }
                }
            }
        }
    }
}
