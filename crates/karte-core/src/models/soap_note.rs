use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A SOAP-structured visit note extracted from AI-generated text.
///
/// Every field is always present; a field the extractor could not locate is
/// the empty string, never an option. Records are built once per structuring
/// call and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SoapNote {
    /// S — caregiver/patient statements.
    pub subjective: String,
    /// O — observed signs.
    pub objective: String,
    /// A — decomposed assessment.
    pub assessment: Assessment,
    /// P — the plan for this visit.
    pub plan_of_visit: VisitPlan,
}

/// The assessment group of a [`SoapNote`], in expected textual order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    /// Also the designated fallback field: when none of the sub-headings
    /// matched, the whole assessment block lands here verbatim.
    pub symptom_trend: String,
    pub risk_assessment: String,
    pub background_factors: String,
    pub next_observation_points: String,
}

impl Assessment {
    pub fn is_empty(&self) -> bool {
        self.symptom_trend.is_empty()
            && self.risk_assessment.is_empty()
            && self.background_factors.is_empty()
            && self.next_observation_points.is_empty()
    }
}

/// The plan-of-visit group of a [`SoapNote`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisitPlan {
    /// Designated fallback field for the group.
    pub assistance_provided_today: String,
    pub future_policy: String,
}

impl VisitPlan {
    pub fn is_empty(&self) -> bool {
        self.assistance_provided_today.is_empty() && self.future_policy.is_empty()
    }
}
