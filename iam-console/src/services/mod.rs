//! Infrastructure Services
//!
//! - **client**: collaborator traits for the console backend, navigation
//!   and notifications, plus the [`client::ConsoleServices`] bundle
//! - **config**: deployment configuration passed in at construction
//! - **errors**: error taxonomy and remote error classification
//! - **i18n**: translation seam and key names
//!
//! The traits use `async_trait(?Send)`: everything runs on the UI thread,
//! so futures never cross threads.

pub mod client;
pub mod config;
pub mod errors;
pub mod i18n;
