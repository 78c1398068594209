//! Static catalog of review dimensions.
//!
//! The catalog is configuration, not runtime data: the server interprets the
//! ids, the client only displays labels and tracks selection.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub default_on: bool,
}

pub const MAIN_OPTIONS: &[ReviewOption] = &[
    ReviewOption {
        id: "typo",
        label: "Typo Check",
        description: "Spelling errors and typos",
        default_on: true,
    },
    ReviewOption {
        id: "grammar",
        label: "Grammar Check",
        description: "Grammar issues in narrative",
        default_on: true,
    },
    ReviewOption {
        id: "line_edit",
        label: "Line Edit Polish",
        description: "Adverbs, echoes, passive voice",
        default_on: true,
    },
    ReviewOption {
        id: "characters",
        label: "Character List & Arcs",
        description: "Character appearances and development",
        default_on: true,
    },
    ReviewOption {
        id: "plot_summary",
        label: "Plot Summary",
        description: "Scene-by-scene plot beats",
        default_on: false,
    },
    ReviewOption {
        id: "plot_holes",
        label: "Possible Plot Holes",
        description: "Continuity and logic issues",
        default_on: false,
    },
    ReviewOption {
        id: "developmental",
        label: "Developmental Review",
        description: "Tone, strengths, areas to improve",
        default_on: true,
    },
];

/// Hidden behind a disclosure toggle, collapsed by default.
pub const ADVANCED_OPTIONS: &[ReviewOption] = &[
    ReviewOption {
        id: "style_consistency",
        label: "Style Consistency",
        description: "Voice, POV, tense consistency",
        default_on: false,
    },
    ReviewOption {
        id: "dialogue_voice",
        label: "Character Dialogue Voice",
        description: "Speech pattern analysis per character",
        default_on: false,
    },
    ReviewOption {
        id: "pacing",
        label: "Pacing & Tension",
        description: "Tension curve analysis",
        default_on: false,
    },
    ReviewOption {
        id: "themes",
        label: "Theme Detection",
        description: "Identify themes and motifs",
        default_on: false,
    },
];

pub fn all_options() -> impl Iterator<Item = &'static ReviewOption> {
    MAIN_OPTIONS.iter().chain(ADVANCED_OPTIONS.iter())
}

/// The option ids a fresh session starts with.
pub fn default_option_ids() -> Vec<String> {
    all_options()
        .filter(|option| option.default_on)
        .map(|option| option.id.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn defaults_are_the_main_checks() {
        assert_eq!(
            default_option_ids(),
            vec!["typo", "grammar", "line_edit", "characters", "developmental"]
        );
    }

    #[test]
    fn no_advanced_option_is_on_by_default() {
        assert!(ADVANCED_OPTIONS.iter().all(|option| !option.default_on));
    }

    #[test]
    fn option_ids_are_unique() {
        let ids: HashSet<_> = all_options().map(|option| option.id).collect();
        assert_eq!(ids.len(), MAIN_OPTIONS.len() + ADVANCED_OPTIONS.len());
    }
}
