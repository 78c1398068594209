//! Manuscript intake: drag-and-drop zone plus a hidden file picker.

use dioxus::html::FileData;
use dioxus::html::HasFileData;
use dioxus::prelude::*;

use crate::store::{ReviewStore, SelectedFile};

pub const ACCEPTED_EXTENSIONS: &[&str] = &[".docx", ".md", ".txt"];

pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/markdown",
    "text/plain",
];

pub const UNSUPPORTED_FILE_MESSAGE: &str =
    "Unsupported file type. Please choose a .docx, .md, or .txt manuscript.";

/// MIME *or* extension must match — browsers disagree on what a `.md` or
/// `.docx` file is called, so either signal is enough.
pub fn is_supported_manuscript(name: &str, mime: &str) -> bool {
    if ACCEPTED_MIME_TYPES.contains(&mime) {
        return true;
    }
    let lower = name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Base-1024 with one decimal once past the kilobyte threshold.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[component]
pub fn FileUpload() -> Element {
    let mut store = use_context::<Signal<ReviewStore>>();
    let mut drag_over = use_signal(|| false);

    let mut take_first_file = move |files: Vec<FileData>| {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        let name = file.name();
        let mime = file.content_type().unwrap_or_default();

        if !is_supported_manuscript(&name, &mime) {
            store.write().set_error(UNSUPPORTED_FILE_MESSAGE);
            return;
        }

        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    let bytes = bytes.to_vec();
                    store.write().select_file(SelectedFile {
                        size: bytes.len() as u64,
                        name,
                        mime,
                        bytes,
                    });
                }
                Err(e) => {
                    log::error!("failed to read manuscript {name}: {e}");
                    store.write().set_error("Could not read the selected file.");
                }
            }
        });
    };

    let selected = store
        .read()
        .selected_file()
        .map(|file| (file.name.clone(), format_file_size(file.size)));

    match selected {
        Some((name, size)) => rsx! {
            div { class: "upload-selected",
                div {
                    p { class: "upload-file-name", "{name}" }
                    p { class: "upload-file-size", "{size}" }
                }
                button {
                    class: "upload-remove",
                    title: "Remove file",
                    onclick: move |_| store.write().clear_file(),
                    "✕"
                }
            }
        },
        None => {
            let zone_class = if drag_over() {
                "upload-zone drag-over"
            } else {
                "upload-zone"
            };
            rsx! {
                div {
                    class: "{zone_class}",
                    ondragover: move |evt| {
                        evt.prevent_default();
                        drag_over.set(true);
                    },
                    ondragleave: move |evt| {
                        evt.prevent_default();
                        drag_over.set(false);
                    },
                    ondrop: move |evt| {
                        evt.prevent_default();
                        drag_over.set(false);
                        take_first_file(evt.files());
                    },
                    input {
                        r#type: "file",
                        accept: ".docx,.md,.txt",
                        onchange: move |evt| take_first_file(evt.files()),
                    }
                    div { class: "upload-icon", "📄" }
                    p { class: "upload-hint",
                        strong { "Click to upload" }
                        " or drag and drop"
                    }
                    p { class: "upload-formats", "DOCX, MD, or TXT files" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_supported_extensions_regardless_of_mime() {
        for name in ["novel.docx", "notes.md", "draft.txt", "LOUD.TXT"] {
            assert!(
                is_supported_manuscript(name, "application/octet-stream"),
                "{name} should be accepted by extension"
            );
        }
    }

    #[test]
    fn accepts_known_mime_with_unknown_extension() {
        assert!(is_supported_manuscript("export.dat", "text/plain"));
        assert!(is_supported_manuscript(
            "export.bin",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
    }

    #[test]
    fn rejects_when_neither_signal_matches() {
        assert!(!is_supported_manuscript("photo.png", "image/png"));
        assert!(!is_supported_manuscript("archive.zip", "application/zip"));
        assert!(!is_supported_manuscript("mydocx", ""));
    }

    #[test]
    fn sizes_use_base_1024_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(12 * 1024), "12.0 KB");
        assert_eq!(format_file_size(1024 * 1024 + 512 * 1024), "1.5 MB");
    }
}
