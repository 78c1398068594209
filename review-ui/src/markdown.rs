//! Markdown rendering for review reports.
//!
//! Reports arrive from the service as CommonMark with GitHub-flavored
//! tables. The rendered HTML is injected via `dangerous_inner_html`, so
//! anything executable is stripped first.

use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

/// Render a report (or one section of it) to display-ready HTML.
pub fn render_report_html(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(input, options);
    let mut html_output = String::with_capacity(input.len() * 2);
    html::push_html(&mut html_output, parser);

    if contains_unsafe_html(&html_output) {
        sanitize_html(&html_output)
    } else {
        html_output
    }
}

/// Cheap pre-check so the common case skips the regex pass entirely.
fn contains_unsafe_html(html: &str) -> bool {
    let unsafe_patterns = [
        "<script",
        "</script>",
        "javascript:",
        "onload=",
        "onerror=",
        "onclick=",
        "<iframe",
        "<object",
        "<embed",
    ];

    let lower = html.to_lowercase();
    unsafe_patterns
        .iter()
        .any(|pattern| lower.contains(pattern))
}

/// Remove executable tags and attributes. The report is untrusted input as
/// far as the DOM is concerned, even though it came over our own API.
fn sanitize_html(html: &str) -> String {
    // (?s) enables DOTALL mode so . matches newlines
    let script_regex = Regex::new(r#"(?s)<script[^>]*>.*?</script>"#).unwrap();
    let iframe_regex = Regex::new(r#"(?s)<iframe[^>]*>.*?</iframe>"#).unwrap();
    let object_regex = Regex::new(r#"(?s)<object[^>]*>.*?</object>"#).unwrap();
    // <embed> can be self-closing or not have a closing tag
    let embed_regex = Regex::new(r#"<embed[^>]*>"#).unwrap();
    let event_handler_regex = Regex::new(r#"\s*on\w+=["'][^"']*["']"#).unwrap();
    let js_protocol_regex = Regex::new(r#"href=["']javascript:[^"']*["']"#).unwrap();

    let mut sanitized = html.to_string();
    sanitized = script_regex.replace_all(&sanitized, "").to_string();
    sanitized = iframe_regex.replace_all(&sanitized, "").to_string();
    sanitized = object_regex.replace_all(&sanitized, "").to_string();
    sanitized = embed_regex.replace_all(&sanitized, "").to_string();
    sanitized = event_handler_regex.replace_all(&sanitized, "").to_string();
    sanitized = js_protocol_regex
        .replace_all(&sanitized, "href=\"#\"")
        .to_string();

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_emphasis() {
        let html = render_report_html("# Grammar\n\nFound **3** issues.");
        assert!(html.contains("<h1>Grammar</h1>"));
        assert!(html.contains("<strong>3</strong>"));
    }

    #[test]
    fn renders_gfm_tables() {
        let html = render_report_html("| Issue | Line |\n|---|---|\n| echo | 12 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>echo</td>"));
    }

    #[test]
    fn strips_script_tags() {
        let html = render_report_html("hello\n\n<script>alert(1)</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn strips_inline_event_handlers() {
        let html = render_report_html(r#"<p onclick="steal()">hi</p>"#);
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn neutralizes_javascript_links() {
        let html = render_report_html(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!html.contains("javascript:"));
    }
}
