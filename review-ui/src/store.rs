//! Session state for the review workflow.
//!
//! `ReviewStore` is a plain struct with no framework types so every
//! transition can be exercised in a native test. The app constructs exactly
//! one and provides it to the tree as a `Signal<ReviewStore>` context — there
//! is no ambient singleton. Single writer, single reader, one tab.

use shared_types::ReviewResult;

use crate::catalog;

/// Shown the instant a review is started, before the first progress update.
pub const INITIAL_PROGRESS: &str = "Uploading manuscript...";

/// The manuscript chosen for review. Payload is owned here and replaced
/// wholesale on a new selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Lifecycle of the single outstanding review request.
///
/// No retry, no cancellation, no partial results. The UI keeps the
/// submission control disabled while `InProgress`, so at most one request is
/// in flight per session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InProgress {
        progress: String,
    },
    Succeeded(ReviewResult),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewStore {
    selected_file: Option<SelectedFile>,
    selected_options: Vec<String>,
    state: RequestState,
    history: Vec<ReviewResult>,
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewStore {
    pub fn new() -> Self {
        Self {
            selected_file: None,
            selected_options: catalog::default_option_ids(),
            state: RequestState::Idle,
            history: Vec::new(),
        }
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    /// Selected option ids, in the order they were turned on.
    pub fn selected_options(&self) -> &[String] {
        &self.selected_options
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Completed reviews this session, newest first. Survives `reset`;
    /// cleared only by [`ReviewStore::clear_history`] or a page reload.
    pub fn history(&self) -> &[ReviewResult] {
        &self.history
    }

    pub fn is_reviewing(&self) -> bool {
        matches!(self.state, RequestState::InProgress { .. })
    }

    pub fn progress(&self) -> Option<&str> {
        match &self.state {
            RequestState::InProgress { progress } => Some(progress),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&ReviewResult> {
        match &self.state {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.selected_options.is_empty() && !self.is_reviewing()
    }

    // ── File ─────────────────────────────────────────────────────────────

    /// Choosing a file dismisses any error left over from a previous attempt.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
        self.clear_failure();
    }

    pub fn clear_file(&mut self) {
        self.selected_file = None;
        self.clear_failure();
    }

    fn clear_failure(&mut self) {
        if matches!(self.state, RequestState::Failed(_)) {
            self.state = RequestState::Idle;
        }
    }

    // ── Options ──────────────────────────────────────────────────────────

    /// Symmetric add/remove. Toggling twice restores the original set.
    pub fn toggle_option(&mut self, option_id: &str) {
        if let Some(pos) = self.selected_options.iter().position(|id| id == option_id) {
            self.selected_options.remove(pos);
        } else {
            self.selected_options.push(option_id.to_string());
        }
    }

    // ── Request lifecycle ────────────────────────────────────────────────

    /// Enter `InProgress`, discarding any prior result or error.
    pub fn start_review(&mut self) {
        self.state = RequestState::InProgress {
            progress: INITIAL_PROGRESS.to_string(),
        };
    }

    /// Cosmetic only; ignored unless a review is in flight.
    pub fn set_progress(&mut self, message: impl Into<String>) {
        if let RequestState::InProgress { progress } = &mut self.state {
            *progress = message.into();
        }
    }

    /// The only path that appends to history: exactly one entry per call,
    /// most recent first.
    pub fn set_result(&mut self, result: ReviewResult) {
        self.history.insert(0, result.clone());
        self.state = RequestState::Succeeded(result);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = RequestState::Failed(message.into());
    }

    /// Back to the initial state: no file, catalog defaults, `Idle`.
    /// History is deliberately untouched.
    pub fn reset(&mut self) {
        self.selected_file = None;
        self.selected_options = catalog::default_option_ids();
        self.state = RequestState::Idle;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_file() -> SelectedFile {
        SelectedFile {
            name: "report.docx".to_string(),
            size: 12 * 1024,
            mime: "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                .to_string(),
            bytes: vec![0u8; 16],
        }
    }

    fn sample_result(name: &str) -> ReviewResult {
        ReviewResult {
            status: "complete".to_string(),
            review_type: "grammar".to_string(),
            manuscript_name: name.to_string(),
            word_count: 5000,
            issues_found: 3,
            review_markdown: "# Review".to_string(),
            generated_at: Utc::now(),
            sections: None,
        }
    }

    #[test]
    fn new_store_starts_with_catalog_defaults() {
        let store = ReviewStore::new();
        assert_eq!(store.selected_options(), catalog::default_option_ids());
        assert_eq!(store.state(), &RequestState::Idle);
        assert!(!store.can_submit());
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut store = ReviewStore::new();
        let before = store.selected_options().to_vec();
        store.toggle_option("pacing");
        assert!(store.selected_options().contains(&"pacing".to_string()));
        store.toggle_option("pacing");
        assert_eq!(store.selected_options(), before);
    }

    #[test]
    fn toggle_preserves_order_of_remaining_options() {
        let mut store = ReviewStore::new();
        store.toggle_option("grammar");
        assert_eq!(
            store.selected_options(),
            vec!["typo", "line_edit", "characters", "developmental"]
        );
    }

    #[test]
    fn select_file_clears_previous_error() {
        let mut store = ReviewStore::new();
        store.set_error("Review failed");
        store.select_file(sample_file());
        assert_eq!(store.error(), None);
        assert!(store.can_submit());
    }

    #[test]
    fn start_review_clears_prior_result_and_error() {
        let mut store = ReviewStore::new();
        store.set_result(sample_result("a.md"));
        store.start_review();
        assert!(store.is_reviewing());
        assert_eq!(store.result(), None);
        assert_eq!(store.progress(), Some(INITIAL_PROGRESS));

        store.set_error("boom");
        store.start_review();
        assert_eq!(store.error(), None);
    }

    #[test]
    fn set_progress_is_ignored_when_not_reviewing() {
        let mut store = ReviewStore::new();
        store.set_progress("reading...");
        assert_eq!(store.state(), &RequestState::Idle);

        store.start_review();
        store.set_progress("munching...");
        assert_eq!(store.progress(), Some("munching..."));
    }

    #[test]
    fn set_result_appends_to_history_newest_first() {
        let mut store = ReviewStore::new();
        store.start_review();
        store.set_result(sample_result("first.md"));
        store.start_review();
        store.set_result(sample_result("second.md"));

        assert_eq!(store.history().len(), 2);
        assert_eq!(store.history()[0].manuscript_name, "second.md");
        assert_eq!(store.history()[1].manuscript_name, "first.md");
    }

    #[test]
    fn set_error_does_not_touch_history() {
        let mut store = ReviewStore::new();
        store.start_review();
        store.set_error("Review failed");
        assert!(store.history().is_empty());
        assert_eq!(store.error(), Some("Review failed"));
    }

    #[test]
    fn reset_restores_initial_state_but_keeps_history() {
        let mut store = ReviewStore::new();
        store.select_file(sample_file());
        store.toggle_option("themes");
        store.start_review();
        store.set_result(sample_result("kept.md"));

        store.reset();
        assert_eq!(store.selected_file(), None);
        assert_eq!(store.selected_options(), catalog::default_option_ids());
        assert_eq!(store.state(), &RequestState::Idle);
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn clear_history_empties_it() {
        let mut store = ReviewStore::new();
        store.set_result(sample_result("a.md"));
        store.clear_history();
        assert!(store.history().is_empty());
    }

    #[test]
    fn submission_is_blocked_while_in_progress() {
        let mut store = ReviewStore::new();
        store.select_file(sample_file());
        assert!(store.can_submit());
        store.start_review();
        assert!(!store.can_submit());
    }

    #[test]
    fn submission_requires_at_least_one_option() {
        let mut store = ReviewStore::new();
        store.select_file(sample_file());
        for id in catalog::default_option_ids() {
            store.toggle_option(&id);
        }
        assert!(store.selected_options().is_empty());
        assert!(!store.can_submit());
    }
}
