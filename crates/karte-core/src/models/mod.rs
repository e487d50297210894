pub mod care_plan;
pub mod soap_note;
pub mod structured_note;

pub use care_plan::CarePlanDraft;
pub use soap_note::{Assessment, SoapNote, VisitPlan};
pub use structured_note::StructuredNote;
