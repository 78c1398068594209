//! Admin panel: password gate, tone settings, and usage statistics.
//!
//! The session is a bearer token inside the shared `ApiClient` signal —
//! nothing is persisted, so a reload always lands back on the login form.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::{AdminSettings, ToneInfo, UsageStats};

use crate::api::ApiClient;
use crate::components::results::format_count;

const SAVE_MESSAGE_MS: u32 = 3_000;

/// Saving is pointless while a save is in flight or when the candidate is
/// already the stored value.
pub fn save_disabled(candidate: &str, saved: &str, saving: bool) -> bool {
    saving || candidate == saved
}

#[component]
pub fn AdminPage() -> Element {
    let mut api = use_context::<Signal<ApiClient>>();

    let mut logged_in = use_signal(|| false);
    let mut password = use_signal(String::new);
    let mut login_error = use_signal(|| None::<String>);
    let mut logging_in = use_signal(|| false);

    let mut settings = use_signal(|| None::<AdminSettings>);
    let mut tones = use_signal(|| None::<ToneInfo>);
    let mut usage = use_signal(|| None::<UsageStats>);
    let mut selected_tone = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut save_message = use_signal(|| None::<(bool, String)>);

    let login = move |evt: FormEvent| {
        evt.prevent_default();
        let entered = password.read().clone();
        if entered.is_empty() || logging_in() {
            return;
        }
        login_error.set(None);
        logging_in.set(true);

        spawn(async move {
            let mut client = api.read().clone();
            match client.admin_login(&entered).await {
                Ok(_) => {
                    api.set(client.clone());
                    logged_in.set(true);

                    match client.admin_settings().await {
                        Ok(loaded) => {
                            selected_tone.set(loaded.tone.clone());
                            settings.set(Some(loaded));
                        }
                        Err(e) => log::error!("failed to load settings: {e}"),
                    }
                    match client.tones().await {
                        Ok(info) => tones.set(Some(info)),
                        Err(e) => log::warn!("failed to load tone descriptions: {e}"),
                    }
                    match client.usage_stats().await {
                        Ok(stats) => usage.set(Some(stats)),
                        Err(e) => log::warn!("failed to load usage stats: {e}"),
                    }
                }
                // The entered password stays in the field for another try.
                Err(_) => login_error.set(Some("Invalid password".to_string())),
            }
            logging_in.set(false);
        });
    };

    let logout = move |_| {
        api.write().clear_admin_token();
        logged_in.set(false);
        settings.set(None);
        tones.set(None);
        usage.set(None);
        selected_tone.set(String::new());
        password.set(String::new());
        save_message.set(None);
        login_error.set(None);
    };

    let save = move |_| {
        let candidate = selected_tone.read().clone();
        let saved = settings
            .read()
            .as_ref()
            .map(|s| s.tone.clone())
            .unwrap_or_default();
        if save_disabled(&candidate, &saved, saving()) {
            return;
        }
        saving.set(true);
        save_message.set(None);

        spawn(async move {
            let client = api.read().clone();
            match client.update_tone(&candidate).await {
                Ok(_) => {
                    if let Some(current) = settings.write().as_mut() {
                        current.tone = candidate.clone();
                    }
                    save_message.set(Some((true, "Settings saved successfully".to_string())));
                }
                Err(e) => {
                    log::error!("failed to save tone: {e}");
                    save_message.set(Some((false, "Failed to save settings".to_string())));
                }
            }
            saving.set(false);

            TimeoutFuture::new(SAVE_MESSAGE_MS).await;
            save_message.set(None);
        });
    };

    if !logged_in() {
        let login_disabled = logging_in() || password.read().is_empty();
        let login_label = if logging_in() { "Logging in..." } else { "Login" };
        let error = login_error.read().clone();

        return rsx! {
            div { class: "admin-login",
                form { class: "card", onsubmit: login,
                    h1 { "Admin Login" }
                    div { class: "admin-field",
                        label { r#for: "admin-password", "Password" }
                        input {
                            id: "admin-password",
                            r#type: "password",
                            placeholder: "Enter admin password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    if let Some(error) = error {
                        p { class: "admin-error", "{error}" }
                    }
                    button {
                        class: "submit-button",
                        r#type: "submit",
                        disabled: login_disabled,
                        "{login_label}"
                    }
                }
            }
        };
    }

    let settings_view = settings.read().clone();
    let descriptions = tones
        .read()
        .as_ref()
        .map(|info| info.descriptions.clone())
        .unwrap_or_default();
    let usage_view = usage.read().clone();
    let message_view = save_message.read().clone();

    let saved_tone = settings_view
        .as_ref()
        .map(|s| s.tone.clone())
        .unwrap_or_default();
    let disabled = save_disabled(&selected_tone.read(), &saved_tone, saving());
    let save_label = if saving() { "Saving..." } else { "Save Changes" };

    rsx! {
        div { class: "admin-page",
            div { class: "admin-header",
                h1 { "Admin Settings" }
                button { class: "link-button", onclick: logout, "Logout" }
            }

            div { class: "card",
                div {
                    label { class: "field-label", "Feedback Tone" }
                    p { class: "tone-intro",
                        "Controls how feedback is presented to users. \"Gentlest\" provides "
                        "encouraging, supportive feedback while \"Harsh\" is more direct and critical."
                    }

                    if let Some(current) = settings_view {
                        div { class: "tone-list",
                            for tone in current.available_tones.clone() {
                                {
                                    let is_selected = *selected_tone.read() == tone;
                                    let is_saved = current.tone == tone;
                                    let row_class = if is_selected { "tone-row selected" } else { "tone-row" };
                                    let description = descriptions.get(&tone).cloned();
                                    let value = tone.clone();
                                    rsx! {
                                        label { class: "{row_class}", key: "{tone}",
                                            input {
                                                r#type: "radio",
                                                name: "tone",
                                                checked: is_selected,
                                                onchange: move |_| selected_tone.set(value.clone()),
                                            }
                                            div {
                                                span { class: "tone-name", "{tone}" }
                                                if is_saved {
                                                    span { class: "tone-current", "(current)" }
                                                }
                                                if let Some(description) = description {
                                                    p { class: "tone-description", "{description}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "admin-save-row",
                    if let Some((ok, message)) = message_view {
                        p { class: if ok { "save-message ok" } else { "save-message err" }, "{message}" }
                    }
                    button {
                        class: "action-button primary",
                        disabled,
                        onclick: save,
                        "{save_label}"
                    }
                }
            }

            if let Some(stats) = usage_view {
                div { class: "card", style: "margin-top: 1.5rem;",
                    label { class: "field-label", "Usage — {stats.month}" }
                    div { class: "usage-totals",
                        div { class: "stat",
                            p { class: "stat-value", "{format_count(stats.total_reviews)}" }
                            p { class: "stat-label", "Reviews" }
                        }
                        div { class: "stat",
                            p { class: "stat-value", "{format_count(stats.total_words)}" }
                            p { class: "stat-label", "Words reviewed" }
                        }
                    }
                    if !stats.recent_reviews.is_empty() {
                        table { class: "usage-table",
                            thead {
                                tr {
                                    th { "Manuscript" }
                                    th { "Words" }
                                    th { "Issues" }
                                    th { "Date" }
                                }
                            }
                            tbody {
                                for review in stats.recent_reviews {
                                    {
                                        let words = format_count(review.word_count);
                                        let date = review.reviewed_at.format("%Y-%m-%d").to_string();
                                        rsx! {
                                            tr { key: "{review.manuscript_name}-{date}",
                                                td { "{review.manuscript_name}" }
                                                td { "{words}" }
                                                td { "{review.issues_found}" }
                                                td { "{date}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_is_disabled_while_saving() {
        assert!(save_disabled("harsh", "gentle", true));
    }

    #[test]
    fn save_is_disabled_when_nothing_changed() {
        assert!(save_disabled("gentle", "gentle", false));
    }

    #[test]
    fn save_is_enabled_for_a_new_candidate() {
        assert!(!save_disabled("harsh", "gentle", false));
    }
}
