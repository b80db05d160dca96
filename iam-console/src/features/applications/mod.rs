//! Application creation wizard: template resolution, protocol forms,
//! name validation, the submission merge and the controller tying them
//! together.

pub mod form_validation;
pub mod orchestrator;
pub mod protocol_forms;
pub mod submission;
pub mod template_resolver;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use form_validation::*;
pub use orchestrator::WizardController;
pub use protocol_forms::{select_form, FieldValue, ProtocolField, ProtocolFieldSet, ProtocolFormInput};
pub use submission::{merge_submission, resolve_navigation};
pub use template_resolver::TemplateResolver;
pub use types::*;
