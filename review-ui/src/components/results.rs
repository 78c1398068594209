//! Finished-review display: stats header, export actions, and the report
//! body in whichever mode the service response calls for.

use dioxus::prelude::*;
use shared_types::{ReportBody, ReviewResult, ReviewSection};

use crate::markdown::render_report_html;
use crate::platform;

/// Thousands separators for the stats header: `5000` → `"5,000"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn issue_badge_text(count: u32) -> String {
    if count == 1 {
        "1 issue".to_string()
    } else {
        format!("{count} issues")
    }
}

#[component]
fn SectionPanel(section: ReviewSection) -> Element {
    let html = render_report_html(&section.content);
    let badge_class = if section.issues_found == 0 {
        "issue-badge clean"
    } else {
        "issue-badge flagged"
    };
    let badge_text = issue_badge_text(section.issues_found);

    // No `open` attribute: every panel starts collapsed.
    rsx! {
        details { class: "report-section",
            summary { class: "report-section-summary",
                span { class: "report-section-title", "{section.title}" }
                span { class: "{badge_class}", "{badge_text}" }
            }
            div { class: "report-section-body",
                article { class: "report-rendered", dangerous_inner_html: "{html}" }
            }
        }
    }
}

#[component]
pub fn ReviewResults(result: ReviewResult, on_reset: EventHandler<()>) -> Element {
    let mut show_raw = use_signal(|| false);

    let words = format_count(result.word_count);
    let issues_class = if result.issues_found > 0 {
        "stat-value issues"
    } else {
        "stat-value clean"
    };

    let download = {
        let result = result.clone();
        move |_| {
            let name =
                platform::download_file_name(&result.manuscript_name, chrono::Utc::now().date_naive());
            if let Err(e) = platform::download_markdown(&name, &result.review_markdown) {
                log::error!("download failed: {e}");
            }
        }
    };

    let share = {
        let result = result.clone();
        move |_| {
            let result = result.clone();
            spawn(async move {
                let shared = if platform::share_available() {
                    platform::share_markdown(
                        &platform::share_title(&result.manuscript_name),
                        &platform::share_summary(result.issues_found),
                        &format!("review-{}.md", result.manuscript_name),
                        &result.review_markdown,
                    )
                    .await
                } else {
                    Err("share unavailable".to_string())
                };

                // No share sheet (or it failed): hand over a download instead.
                if let Err(e) = shared {
                    log::warn!("share unavailable, falling back to download: {e}");
                    let name = platform::download_file_name(
                        &result.manuscript_name,
                        chrono::Utc::now().date_naive(),
                    );
                    if let Err(e) = platform::download_markdown(&name, &result.review_markdown) {
                        log::error!("fallback download failed: {e}");
                    }
                }
            });
        }
    };

    let copy = {
        let markdown = result.review_markdown.clone();
        move |_| {
            let markdown = markdown.clone();
            spawn(async move {
                if let Err(e) = platform::copy_text(&markdown).await {
                    log::warn!("copy failed: {e}");
                }
            });
        }
    };

    let body = match result.body() {
        ReportBody::Sectioned(sections) => {
            let sections = sections.to_vec();
            rsx! {
                div { class: "report-sections",
                    for section in sections {
                        SectionPanel { key: "{section.id}", section }
                    }
                }
            }
        }
        ReportBody::Flat(markdown) => {
            let html = render_report_html(markdown);
            let raw = markdown.to_string();
            let toggle_label = if show_raw() {
                "Show formatted"
            } else {
                "Show raw markdown"
            };
            rsx! {
                div { class: "results-view-toggle",
                    button {
                        class: "link-button",
                        onclick: move |_| show_raw.set(!show_raw()),
                        "{toggle_label}"
                    }
                }
                div { class: "card",
                    if show_raw() {
                        pre { class: "report-raw", "{raw}" }
                    } else {
                        article { class: "report-rendered", dangerous_inner_html: "{html}" }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "results",
            div { class: "card",
                div { class: "results-header",
                    div { class: "results-title",
                        h2 { "Review Complete" }
                        p { "{result.manuscript_name}" }
                    }
                    div { class: "results-stats",
                        div { class: "stat",
                            p { class: "stat-value", "{words}" }
                            p { class: "stat-label", "Words" }
                        }
                        div { class: "stat",
                            p { class: "{issues_class}", "{result.issues_found}" }
                            p { class: "stat-label", "Issues" }
                        }
                    }
                }

                div { class: "results-actions",
                    button { class: "action-button primary", onclick: download, "Download .md" }
                    button { class: "action-button", onclick: share, "Share" }
                    button { class: "action-button", onclick: copy, "Copy" }
                    button {
                        class: "action-button",
                        onclick: move |_| on_reset.call(()),
                        "New Review"
                    }
                }
            }

            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(512), "512");
        assert_eq!(format_count(5000), "5,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn issue_badges_pluralize() {
        assert_eq!(issue_badge_text(0), "0 issues");
        assert_eq!(issue_badge_text(1), "1 issue");
        assert_eq!(issue_badge_text(4), "4 issues");
    }
}
