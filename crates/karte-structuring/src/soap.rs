//! SOAP field extraction from the visit-note section.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use karte_core::models::{Assessment, SoapNote, VisitPlan};

use crate::capture::{bare_label, bold_label, bracket_label, capture_first, section_stop};
use crate::normalize::strip_visit_metadata;

const LABEL_SUBJECTIVE: &str = "S（主観）";
const LABEL_OBJECTIVE: &str = "O（客観）";
const LABEL_ASSESSMENT: &str = "A（アセスメント）";
const LABEL_PLAN: &str = "P（計画）";

// Tolerant fragment: the model sometimes shortens the parenthetical in the
// risk label, so the exact form is tried first and this one second.
const RISK_LABEL_EXACT: &str = "リスク評価（自殺・他害・服薬）";
const RISK_LABEL_LOOSE: &str = "リスク評価[^】\n]*";

static SUBJECTIVE_STARTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![bold_label(LABEL_SUBJECTIVE), bare_label(LABEL_SUBJECTIVE)]);
static SUBJECTIVE_STOPS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        section_stop(LABEL_OBJECTIVE),
        section_stop(LABEL_ASSESSMENT),
        section_stop(LABEL_PLAN),
    ]
});

static OBJECTIVE_STARTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![bold_label(LABEL_OBJECTIVE), bare_label(LABEL_OBJECTIVE)]);
static OBJECTIVE_STOPS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![section_stop(LABEL_ASSESSMENT), section_stop(LABEL_PLAN)]);

static ASSESSMENT_STARTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![bold_label(LABEL_ASSESSMENT), bare_label(LABEL_ASSESSMENT)]);
static ASSESSMENT_STOPS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![section_stop(LABEL_PLAN)]);

static VISIT_PLAN_STARTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![bold_label(LABEL_PLAN), bare_label(LABEL_PLAN)]);

static SYMPTOM_TREND_STARTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![bracket_label("症状推移")]);
static RISK_ASSESSMENT_STARTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![bracket_label(RISK_LABEL_EXACT), bracket_label(RISK_LABEL_LOOSE)]);
static BACKGROUND_FACTORS_STARTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![bracket_label("背景要因")]);
static NEXT_OBSERVATION_STARTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![bracket_label("次回観察ポイント")]);

// Any assessment sub-label ends the capture of the one before it.
static ASSESSMENT_SUB_STOPS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        bracket_stop("症状推移"),
        bracket_stop(RISK_LABEL_LOOSE),
        bracket_stop("背景要因"),
        bracket_stop("次回観察ポイント"),
    ]
});

static ASSISTANCE_STARTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![bracket_label("本日実施した援助")]);
static FUTURE_POLICY_STARTS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![bracket_label("次回以降の方針")]);
static VISIT_PLAN_SUB_STOPS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![bracket_stop("本日実施した援助"), bracket_stop("次回以降の方針")]
});

fn bracket_stop(fragment: &str) -> Regex {
    Regex::new(&format!(r"(?m)^[ \t]*(?:\*\*)?【{fragment}】"))
        .expect("valid bracket stop pattern")
}

/// Extract the four SOAP fields from the note section.
pub fn extract_soap(note_text: &str) -> SoapNote {
    let subjective =
        capture_first(note_text, &SUBJECTIVE_STARTS, &SUBJECTIVE_STOPS).unwrap_or_default();
    let objective =
        capture_first(note_text, &OBJECTIVE_STARTS, &OBJECTIVE_STOPS).unwrap_or_default();

    let assessment_block =
        capture_first(note_text, &ASSESSMENT_STARTS, &ASSESSMENT_STOPS).unwrap_or_default();

    // The P capture runs to the end of the note section, which is wide
    // enough to swallow a visit-metadata block that appears late in the
    // text, so the stripping pass is reapplied here.
    let visit_plan_block = capture_first(note_text, &VISIT_PLAN_STARTS, &[]).unwrap_or_default();
    let visit_plan_block = strip_visit_metadata(&visit_plan_block);

    SoapNote {
        subjective,
        objective,
        assessment: extract_assessment(&assessment_block),
        plan_of_visit: extract_visit_plan(&visit_plan_block),
    }
}

/// Decompose the assessment block into its four sub-fields.
///
/// Each sub-field search re-scans the whole block, so a missing middle
/// sub-label does not break extraction of the ones after it. If no
/// sub-label matched at all, the entire block falls back into
/// `symptom_trend` so nothing the model wrote is lost.
fn extract_assessment(block: &str) -> Assessment {
    let assessment = Assessment {
        symptom_trend: sub_field(block, &SYMPTOM_TREND_STARTS),
        risk_assessment: sub_field(block, &RISK_ASSESSMENT_STARTS),
        background_factors: sub_field(block, &BACKGROUND_FACTORS_STARTS),
        next_observation_points: sub_field(block, &NEXT_OBSERVATION_STARTS),
    };

    let trimmed = block.trim();
    if assessment.is_empty() && !trimmed.is_empty() {
        warn!("assessment sub-headings missing, keeping full block in symptom_trend");
        return Assessment {
            symptom_trend: trimmed.to_string(),
            ..Assessment::default()
        };
    }
    assessment
}

/// Decompose the plan-of-visit block into its two sub-fields, with the same
/// whole-block fallback into `assistance_provided_today`.
fn extract_visit_plan(block: &str) -> VisitPlan {
    let plan = VisitPlan {
        assistance_provided_today: sub_field_with(block, &ASSISTANCE_STARTS, &VISIT_PLAN_SUB_STOPS),
        future_policy: sub_field_with(block, &FUTURE_POLICY_STARTS, &VISIT_PLAN_SUB_STOPS),
    };

    let trimmed = block.trim();
    if plan.is_empty() && !trimmed.is_empty() {
        warn!("plan-of-visit sub-headings missing, keeping full block in assistance_provided_today");
        return VisitPlan {
            assistance_provided_today: trimmed.to_string(),
            future_policy: String::new(),
        };
    }
    plan
}

fn sub_field(block: &str, starts: &[Regex]) -> String {
    sub_field_with(block, starts, &ASSESSMENT_SUB_STOPS)
}

fn sub_field_with(block: &str, starts: &[Regex], stops: &[Regex]) -> String {
    capture_first(block, starts, stops).unwrap_or_default()
}
