//! Care-plan field extraction from the plan section.

use std::sync::LazyLock;

use regex::Regex;

use karte_core::models::CarePlanDraft;

use crate::capture::{bare_colon_label, bold_colon_label, bracket_label, capture_first, plan_stop};
use crate::normalize::strip_visit_metadata;

const LABEL_LONG_TERM: &str = "長期目標";
const LABEL_SHORT_TERM: &str = "短期目標";
const LABEL_POLICY: &str = "看護援助の方針";

// The splitter leaves the section marker behind, but the model sometimes
// repeats the heading on the first line of the plan body as well.
static RE_LEADING_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(?:#{1,6}[ \t]*)?(?:\*\*)?(?:【看護計画書】|訪問看護計画書)(?:\*\*)?[ \t]*[:：]?[ \t]*\n?")
        .expect("valid leading heading pattern")
});

static RE_HORIZONTAL_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*-{3,}[ \t]*$").expect("valid horizontal rule pattern")
});
static RE_META_STOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:\*\*)?【訪問情報】").expect("valid metadata stop pattern")
});

fn field_starts(label: &str) -> Vec<Regex> {
    vec![
        bracket_label(label),
        bare_colon_label(label),
        bold_colon_label(label),
    ]
}

static LONG_TERM_STARTS: LazyLock<Vec<Regex>> = LazyLock::new(|| field_starts(LABEL_LONG_TERM));
static SHORT_TERM_STARTS: LazyLock<Vec<Regex>> = LazyLock::new(|| field_starts(LABEL_SHORT_TERM));
static POLICY_STARTS: LazyLock<Vec<Regex>> = LazyLock::new(|| field_starts(LABEL_POLICY));

// Capture bounds follow the fixed field order: long-term, short-term,
// policy, then end of text / horizontal rule / metadata heading.
static LONG_TERM_STOPS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        plan_stop(LABEL_SHORT_TERM),
        plan_stop(LABEL_POLICY),
        RE_HORIZONTAL_RULE.clone(),
        RE_META_STOP.clone(),
    ]
});
static SHORT_TERM_STOPS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        plan_stop(LABEL_POLICY),
        RE_HORIZONTAL_RULE.clone(),
        RE_META_STOP.clone(),
    ]
});
static POLICY_STOPS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![RE_HORIZONTAL_RULE.clone(), RE_META_STOP.clone()]);

static RE_EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*|__").expect("valid emphasis pattern"));
static RE_INLINE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:【(?:長期目標|短期目標|看護援助の方針)】|(?:長期目標|短期目標|看護援助の方針)[ \t]*[:：])[ \t]*[:：]?[ \t]*",
    )
    .expect("valid inline label pattern")
});

/// Extract the three care-plan fields from the plan section.
/// Each field is independent; an unmatched field is simply empty.
pub fn extract_care_plan(plan_text: &str) -> CarePlanDraft {
    if plan_text.trim().is_empty() {
        return CarePlanDraft::default();
    }

    let text = strip_visit_metadata(plan_text);
    let text = RE_LEADING_HEADING.replace(&text, "");

    CarePlanDraft {
        long_term_goal: field(&text, &LONG_TERM_STARTS, &LONG_TERM_STOPS),
        short_term_goal: field(&text, &SHORT_TERM_STARTS, &SHORT_TERM_STOPS),
        nursing_policy: field(&text, &POLICY_STARTS, &POLICY_STOPS),
    }
}

fn field(text: &str, starts: &[Regex], stops: &[Regex]) -> String {
    capture_first(text, starts, stops)
        .map(|captured| clean_plan_field(&captured))
        .unwrap_or_default()
}

/// Strip formatting artifacts from a captured care-plan field: markdown
/// emphasis markers and the plan labels themselves, which the model
/// sometimes repeats inside the captured span.
///
/// Both strips only delete text, and they run to a fixed point, so cleaning
/// is idempotent.
pub fn clean_plan_field(text: &str) -> String {
    let mut out = text.to_string();
    loop {
        let pass = RE_INLINE_LABEL.replace_all(&out, "");
        let pass = RE_EMPHASIS.replace_all(&pass, "").into_owned();
        if pass == out {
            break;
        }
        out = pass;
    }
    out.trim().to_string()
}
