//! karte-structuring
//!
//! Deterministic structuring of AI-generated visit-note text. One block of
//! free-form Japanese clinical text (the output of the note-writing model)
//! goes in; a fully-populated [`StructuredNote`] comes out. The pipeline is
//! pure and never fails: unrecognized input degrades to best-effort text
//! capture, with unmatched fields left as empty strings.

mod capture;
pub mod normalize;
pub mod plan;
pub mod sections;
pub mod soap;

use tracing::debug;

pub use karte_core::models::StructuredNote;

/// Structure one block of model output into a SOAP note and a care-plan
/// draft.
///
/// Empty or whitespace-only input returns `StructuredNote::default()` — an
/// absent generation is not an error. Callers holding an `Option<String>`
/// pass `text.as_deref().unwrap_or_default()`.
pub fn structure_note(raw_text: &str) -> StructuredNote {
    let text = normalize::normalize(raw_text);
    if text.is_empty() {
        return StructuredNote::default();
    }

    let (note_text, plan_text) = sections::split(&text);
    debug!(
        note_len = note_text.len(),
        plan_len = plan_text.len(),
        "split model output into note and plan sections"
    );

    StructuredNote {
        soap: soap::extract_soap(&note_text),
        care_plan: plan::extract_care_plan(&plan_text),
    }
}
