//! The review workflow: intake and options side by side, then progress,
//! then the finished report.

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::{FileUpload, ReviewOptions, ReviewProgress, ReviewResults, SessionHistory};
use crate::store::ReviewStore;

const ANALYZING_PROGRESS: &str = "Thoughtfully munching eucalyptus leaves...";

#[component]
pub fn HomePage() -> Element {
    let mut store = use_context::<Signal<ReviewStore>>();
    let api = use_context::<Signal<ApiClient>>();

    // A finished review takes over the page until New Review resets it.
    let result = store.read().result().cloned();
    if let Some(result) = result {
        return rsx! {
            div { class: "page",
                ReviewResults { result, on_reset: move |_| store.write().reset() }
            }
        };
    }

    let reviewing = store.read().is_reviewing();
    let progress = store.read().progress().unwrap_or_default().to_string();
    let error = store.read().error().map(str::to_string);
    let can_submit = store.read().can_submit();

    let submit = move |_| {
        let (file, options) = {
            let state = store.read();
            (
                state.selected_file().cloned(),
                state.selected_options().to_vec(),
            )
        };
        let Some(file) = file else { return };
        if options.is_empty() {
            return;
        }

        let client = api.read().clone();
        store.write().start_review();

        spawn(async move {
            store.write().set_progress(ANALYZING_PROGRESS);
            match client.submit_review(&file, &options).await {
                Ok(result) => store.write().set_result(result),
                Err(err) => store.write().set_error(err.to_string()),
            }
        });
    };

    rsx! {
        div { class: "page",
            div { class: "review-grid",
                section { class: "card",
                    label { class: "field-label", "Upload your manuscript" }
                    FileUpload {}

                    if let Some(error) = error {
                        div { class: "error-banner", p { "{error}" } }
                    }

                    if reviewing {
                        ReviewProgress { message: progress }
                    } else {
                        button {
                            class: "submit-button",
                            disabled: !can_submit,
                            onclick: submit,
                            "Feedback"
                        }
                    }
                }

                section { class: "card",
                    label { class: "field-label", "Review Options" }
                    ReviewOptions {}
                }
            }

            p { class: "privacy-note",
                "Your manuscript is processed securely and is not stored after review."
            }

            SessionHistory {}
        }
    }
}
