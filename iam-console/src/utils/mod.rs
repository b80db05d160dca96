//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: logging macros that target the browser console on
//!   WASM and `tracing` everywhere else
//! - **document**: path helpers and merge rules for loosely typed JSON
//!   documents (templates and creation payloads)

pub mod console_macros;
pub mod document;

pub use document::*;
