use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::care_plan::CarePlanDraft;
use super::soap_note::SoapNote;

/// The structured result of one AI note-generation call: a SOAP note plus a
/// care-plan draft. The UI pre-fills its edit forms from this envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StructuredNote {
    pub soap: SoapNote,
    pub care_plan: CarePlanDraft,
}

impl StructuredNote {
    /// True when structuring produced no content at all, e.g. for empty
    /// input. The UI uses this to show the "generation failed" state.
    pub fn is_empty(&self) -> bool {
        self.soap.subjective.is_empty()
            && self.soap.objective.is_empty()
            && self.soap.assessment.is_empty()
            && self.soap.plan_of_visit.is_empty()
            && self.care_plan.is_empty()
    }
}
