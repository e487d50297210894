//! Label-pattern builders and the ordered-alternatives capture helper.
//!
//! The generative model is inconsistent about heading markup, so every field
//! is located by an ordered list of start patterns (strictest first) and
//! bounded by the earliest match of a stop pattern. The `regex` crate has no
//! lookaround; slicing the capture at the next stop's `find()` position gives
//! the same bound with a plain linear scan.
//!
//! Label text is interpolated verbatim: the recognized Japanese labels use
//! full-width brackets, colons, and parentheses, none of which are regex
//! metacharacters.

use regex::Regex;

/// `**label**`, optionally heading-prefixed, optional trailing colon.
pub(crate) fn bold_label(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?m)^[ \t]*(?:#{{1,6}}[ \t]*)?\*\*{label}[ \t]*[:：]?\*\*[ \t]*[:：]?[ \t]*\n?"
    ))
    .expect("valid bold label pattern")
}

/// Bare `label`, optionally heading-prefixed, optional trailing colon.
pub(crate) fn bare_label(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?m)^[ \t]*(?:#{{1,6}}[ \t]*)?{label}[ \t]*[:：]?[ \t]*\n?"
    ))
    .expect("valid bare label pattern")
}

/// `【label】`, optionally bold-wrapped, optional trailing colon. The
/// argument is a pattern fragment, so tolerant variants like
/// `リスク評価[^】\n]*` are allowed.
pub(crate) fn bracket_label(fragment: &str) -> Regex {
    Regex::new(&format!(
        r"(?m)^[ \t]*(?:\*\*)?【{fragment}】(?:\*\*)?[ \t]*[:：]?[ \t]*\n?"
    ))
    .expect("valid bracket label pattern")
}

/// Bare `label：` — the colon is required, so plain prose starting with the
/// label text does not count as a heading.
pub(crate) fn bare_colon_label(label: &str) -> Regex {
    Regex::new(&format!(r"(?m)^[ \t]*{label}[ \t]*[:：][ \t]*\n?"))
        .expect("valid bare colon label pattern")
}

/// `**label：**` / `**label**：`.
pub(crate) fn bold_colon_label(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?m)^[ \t]*\*\*{label}[ \t]*[:：]?\*\*[ \t]*[:：]?[ \t]*\n?"
    ))
    .expect("valid bold colon label pattern")
}

/// Stop pattern for a SOAP section label: matches any markup form at a line
/// start, without requiring a colon.
pub(crate) fn section_stop(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?m)^[ \t]*(?:#{{1,6}}[ \t]*)?(?:\*\*)?{label}"
    ))
    .expect("valid section stop pattern")
}

/// Stop pattern for a care-plan field label: bracket form, or bare/bold form
/// with a required colon (the colon may sit outside the closing `**`).
pub(crate) fn plan_stop(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?m)^[ \t]*(?:\*\*)?(?:【{label}】|{label}(?:\*\*)?[ \t]*[:：])"
    ))
    .expect("valid plan stop pattern")
}

/// Try each start pattern in order; on a match, capture from the end of the
/// start match up to the earliest stop match (or end of text). The first
/// non-empty capture wins.
pub(crate) fn capture_first(text: &str, starts: &[Regex], stops: &[Regex]) -> Option<String> {
    for start in starts {
        let Some(m) = start.find(text) else {
            continue;
        };
        let rest = &text[m.end()..];
        let end = stops
            .iter()
            .filter_map(|stop| stop.find(rest))
            .map(|s| s.start())
            .min()
            .unwrap_or(rest.len());
        let captured = rest[..end].trim();
        if !captured.is_empty() {
            return Some(captured.to_string());
        }
    }
    None
}
