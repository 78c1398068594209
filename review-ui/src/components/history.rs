//! Session-scoped list of completed reviews. In-memory only; gone on
//! reload, emptied by the clear action.

use dioxus::prelude::*;

use crate::components::results::format_count;
use crate::store::ReviewStore;

#[component]
pub fn SessionHistory() -> Element {
    let mut store = use_context::<Signal<ReviewStore>>();

    let entries: Vec<(String, String)> = store
        .read()
        .history()
        .iter()
        .map(|result| {
            (
                result.manuscript_name.clone(),
                format!(
                    "{} words · {} issues",
                    format_count(result.word_count),
                    result.issues_found
                ),
            )
        })
        .collect();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "history",
            div { class: "history-header",
                h3 { "Reviews this session" }
                button {
                    class: "link-button",
                    onclick: move |_| store.write().clear_history(),
                    "Clear"
                }
            }
            ul {
                for (i, (name, meta)) in entries.into_iter().enumerate() {
                    li { key: "{i}", class: "history-row",
                        span { "{name}" }
                        span { class: "history-meta", "{meta}" }
                    }
                }
            }
        }
    }
}
