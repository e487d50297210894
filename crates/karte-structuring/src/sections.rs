//! Splitting the model output into its visit-note and care-plan sections.

use std::sync::LazyLock;

use regex::Regex;

// The two known care-plan section markers. Checking order is fixed: the
// `###` heading form is tried before the bracket form, even when the bracket
// form appears earlier in the text. This mirrors the behavior the
// application has always had; do not change it to positional precedence
// without a product decision.
static RE_PLAN_MARKER_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]*(?:\*\*)?訪問看護計画書(?:\*\*)?[^\n]*\n?")
        .expect("valid heading plan marker pattern")
});
static RE_PLAN_MARKER_BRACKET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:\*\*)?【看護計画書】(?:\*\*)?[^\n]*\n?")
        .expect("valid bracket plan marker pattern")
});

/// Split normalized text into `(note_text, plan_text)` at the first
/// occurrence of whichever care-plan marker the fixed check order finds.
/// Without a marker the whole text is the note and the plan text is empty.
pub fn split(text: &str) -> (String, String) {
    let marker = RE_PLAN_MARKER_HEADING
        .find(text)
        .or_else(|| RE_PLAN_MARKER_BRACKET.find(text));

    match marker {
        Some(m) => (
            text[..m.start()].trim().to_string(),
            text[m.end()..].trim().to_string(),
        ),
        None => (text.trim().to_string(), String::new()),
    }
}
