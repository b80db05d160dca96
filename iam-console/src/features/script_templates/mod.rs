//! Adaptive authentication script templates and the side panel that
//! offers them while editing a sign-on script.

pub mod panel;
pub mod types;

pub use panel::{ScriptTemplatesPanel, VisibleCategory};
pub use types::*;
