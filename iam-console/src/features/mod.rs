//! Feature modules
//!
//! - **applications**: the application creation wizard
//! - **identity_providers**: identity provider extension config and the
//!   predicates the connection views use
//! - **script_templates**: adaptive authentication script template side panel

pub mod applications;
pub mod identity_providers;
pub mod script_templates;
