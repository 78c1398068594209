//! Browser capabilities for exporting a finished review.
//!
//! Download, share, and clipboard are environment calls, not business
//! logic: everything that decides — file names, share text — is a pure
//! function up top, and the functions that actually touch the browser sit
//! below as the only place in the crate that builds blobs or clicks anchors.

use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub const REPORT_MIME: &str = "text/markdown";

// ── Naming ────────────────────────────────────────────────────────────────

/// Manuscript name with its final extension stripped. Extensionless names
/// (and dotfiles, where stripping would leave nothing) pass through.
pub fn manuscript_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// `review-<manuscript base name>-<ISO date>.md`
pub fn download_file_name(manuscript_name: &str, date: NaiveDate) -> String {
    format!(
        "review-{}-{}.md",
        manuscript_stem(manuscript_name),
        date.format("%Y-%m-%d")
    )
}

pub fn share_title(manuscript_name: &str) -> String {
    format!("Review: {manuscript_name}")
}

pub fn share_summary(issues_found: u32) -> String {
    format!("Manuscript review with {issues_found} issues found.")
}

// ── Browser calls ─────────────────────────────────────────────────────────

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

fn report_blob(content: &str) -> Result<web_sys::Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(REPORT_MIME);

    web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "failed to build report blob".to_string())
}

/// Save the raw report through the browser's download flow. The object URL
/// is revoked as soon as the click has been dispatched.
pub fn download_markdown(file_name: &str, content: &str) -> Result<(), String> {
    let blob = report_blob(content)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "failed to create object URL".to_string())?;

    let result = click_download_anchor(&url, file_name);
    let _ = web_sys::Url::revoke_object_url(&url);
    result
}

fn click_download_anchor(url: &str, file_name: &str) -> Result<(), String> {
    let document = window()?
        .document()
        .ok_or_else(|| "no document".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "failed to create anchor".to_string())?
        .dyn_into()
        .map_err(|_| "anchor has unexpected type".to_string())?;

    anchor.set_href(url);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| "no document body".to_string())?;
    body.append_child(&anchor)
        .map_err(|_| "failed to attach anchor".to_string())?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    Ok(())
}

/// True when the platform exposes the Web Share API at all.
pub fn share_available() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w.navigator(), &"share".into()).unwrap_or(false))
        .unwrap_or(false)
}

/// Hand the report to the platform share sheet. Any failure — including the
/// user dismissing the sheet — comes back as `Err` so the caller can fall
/// back to a plain download.
pub async fn share_markdown(
    title: &str,
    text: &str,
    file_name: &str,
    content: &str,
) -> Result<(), String> {
    let navigator = window()?.navigator();

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&report_blob(content)?.into());
    let file_options = web_sys::FilePropertyBag::new();
    file_options.set_type(REPORT_MIME);
    let file =
        web_sys::File::new_with_blob_sequence_and_options(blob_parts.as_ref(), file_name, &file_options)
            .map_err(|_| "failed to build share file".to_string())?;

    let files = js_sys::Array::new();
    files.push(&file);

    let data = web_sys::ShareData::new();
    data.set_title(title);
    data.set_text(text);
    data.set_files(files.as_ref());

    JsFuture::from(navigator.share_with_data(&data))
        .await
        .map(|_| ())
        .map_err(|_| "share dismissed or failed".to_string())
}

/// Copy the raw report to the async clipboard.
pub async fn copy_text(content: &str) -> Result<(), String> {
    let clipboard = window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(content))
        .await
        .map(|_| ())
        .map_err(|_| "clipboard write failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_only_the_final_extension() {
        assert_eq!(manuscript_stem("report.docx"), "report");
        assert_eq!(manuscript_stem("draft.final.md"), "draft.final");
    }

    #[test]
    fn stem_passes_odd_names_through() {
        assert_eq!(manuscript_stem("README"), "README");
        assert_eq!(manuscript_stem(".gitignore"), ".gitignore");
    }

    #[test]
    fn download_name_matches_the_export_contract() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
        assert_eq!(
            download_file_name("report.docx", date),
            "review-report-2025-11-02.md"
        );
    }

    #[test]
    fn share_text_counts_issues() {
        assert_eq!(share_title("novel.md"), "Review: novel.md");
        assert_eq!(
            share_summary(3),
            "Manuscript review with 3 issues found."
        );
    }
}
