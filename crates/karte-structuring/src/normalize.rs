//! Input canonicalization: line endings, outer whitespace, and removal of
//! the administrative visit-metadata preamble the model embeds in its output.

use std::sync::LazyLock;

use regex::Regex;

static RE_META_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:\*\*)?【訪問情報】(?:\*\*)?[^\n]*\n?")
        .expect("valid visit metadata heading pattern")
});

// A metadata block runs until the next bracketed heading, a markdown
// heading, or a horizontal rule. The terminator itself is never consumed.
static RE_META_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:\*{0,2}【[^】\n]+】|#{1,6}[ \t]|-{3,}[ \t]*$)")
        .expect("valid visit metadata terminator pattern")
});

/// Canonicalize raw model output: CRLF to LF, strip visit-metadata blocks,
/// trim. Empty or whitespace-only input normalizes to the empty string.
pub fn normalize(raw_text: &str) -> String {
    let text = raw_text.replace("\r\n", "\n");
    strip_visit_metadata(&text).trim().to_string()
}

/// Remove every `【訪問情報】` block from `text`.
///
/// The block may appear anywhere in the document, more than once. Each block
/// is cut from its heading up to (not including) the next bracketed heading,
/// `#` heading, or `---` rule, so the content that follows is untouched.
/// Also reapplied to wide captures further down the pipeline, which can
/// swallow a metadata block that appears late in the text.
pub fn strip_visit_metadata(text: &str) -> String {
    let mut out = text.to_string();
    while let Some((start, tail)) = RE_META_HEADING.find(&out).map(|m| (m.start(), m.end())) {
        let cut_end = RE_META_TERMINATOR
            .find(&out[tail..])
            .map(|m| tail + m.start())
            .unwrap_or(out.len());
        out.replace_range(start..cut_end, "");
    }
    out
}
