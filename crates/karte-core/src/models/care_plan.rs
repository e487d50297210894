use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A care-plan draft proposed alongside a visit note, later promoted into a
/// formal care-plan record by the application.
///
/// Each field is extracted independently; a field with no recognized label
/// stays empty (there is no parent block to fall back to).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CarePlanDraft {
    pub long_term_goal: String,
    pub short_term_goal: String,
    pub nursing_policy: String,
}

impl CarePlanDraft {
    pub fn is_empty(&self) -> bool {
        self.long_term_goal.is_empty()
            && self.short_term_goal.is_empty()
            && self.nursing_policy.is_empty()
    }
}
