pub mod edit_session;
pub mod validation;

pub use edit_session::{CloseOutcome, EditPhase, EditSession, EditWorkflow, SubmitOutcome};
pub use validation::{validate_draft, FieldErrors};
