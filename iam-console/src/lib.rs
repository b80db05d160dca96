//! Identity and access management console logic, kept apart from rendering.
//!
//! The crate owns the application creation wizard, the adaptive script
//! template side panel and the identity provider extension config. A UI
//! layer reads state from here and forwards user events back in.

pub mod features;
pub mod services;
pub mod utils;

pub use features::applications::WizardController;
pub use services::config::ConsoleConfig;
pub use services::errors::{ConsoleError, ConsoleResult};
