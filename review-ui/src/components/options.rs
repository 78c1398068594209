//! Review dimension toggles. Selection lives in the store; the only local
//! state is whether the advanced group is disclosed.

use dioxus::prelude::*;

use crate::catalog::{self, ReviewOption};
use crate::store::ReviewStore;

fn option_row(mut store: Signal<ReviewStore>, option: &'static ReviewOption) -> Element {
    let checked = store
        .read()
        .selected_options()
        .iter()
        .any(|id| id == option.id);

    rsx! {
        label { class: "option-row", key: "{option.id}",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |_| store.write().toggle_option(option.id),
            }
            div {
                span { class: "option-label", "{option.label}" }
                p { class: "option-description", "{option.description}" }
            }
        }
    }
}

#[component]
pub fn ReviewOptions() -> Element {
    let store = use_context::<Signal<ReviewStore>>();
    let mut show_advanced = use_signal(|| false);

    let count = store.read().selected_options().len();
    let count_text = if count == 1 {
        "1 option selected".to_string()
    } else {
        format!("{count} options selected")
    };
    let chevron = if show_advanced() { "▾" } else { "▸" };

    rsx! {
        div { class: "options",
            div {
                for option in catalog::MAIN_OPTIONS {
                    {option_row(store, option)}
                }
            }

            button {
                class: "options-advanced-toggle",
                onclick: move |_| show_advanced.set(!show_advanced()),
                span { "{chevron}" }
                "Advanced Options"
            }

            if show_advanced() {
                div { class: "options-advanced",
                    for option in catalog::ADVANCED_OPTIONS {
                        {option_row(store, option)}
                    }
                }
            }

            div { class: "options-count", "{count_text}" }
        }
    }
}
