use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::applications::NameValidation;

/// Failure reported by a backend collaborator (REST layer, template store).
///
/// `description` is the machine-readable description the server attached
/// to the error body, if any. It is what the user sees for structured
/// failures.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ServiceError {
    pub status: Option<u16>,
    pub description: Option<String>,
    pub message: String,
}

/// How a remote failure is presented to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorClassification {
    /// The server described the failure; show the description verbatim
    Structured(String),
    /// No usable description; show a generic message
    Generic,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            description: None,
            message: message.into(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn classify(&self) -> ErrorClassification {
        match self.description.as_deref().map(str::trim) {
            Some(description) if !description.is_empty() => {
                ErrorClassification::Structured(description.to_string())
            }
            _ => ErrorClassification::Generic,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Validation error: {field} - {validation:?}")]
    Validation {
        field: String,
        validation: NameValidation,
    },

    #[error("Invalid protocol field: {field} - {message}")]
    ProtocolField { field: String, message: String },

    #[error("Remote error during {operation}: {source}")]
    Remote {
        operation: String,
        #[source]
        source: ServiceError,
    },

    #[error("Template settings not loaded for {template_id}")]
    TemplateNotLoaded { template_id: String },

    #[error("Unknown template: {template_id}")]
    UnknownTemplate { template_id: String },

    #[error("Wizard input missing: {input}")]
    MissingInput { input: String },

    #[error("Wizard is closed")]
    WizardClosed,

    #[error("Configuration error: {field} = {value}")]
    Configuration { field: String, value: String },
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

impl ConsoleError {
    pub fn remote(operation: &str, source: ServiceError) -> Self {
        ConsoleError::Remote {
            operation: operation.to_string(),
            source,
        }
    }

    /// Remote classification, if this error came from a collaborator
    pub fn classification(&self) -> Option<ErrorClassification> {
        match self {
            ConsoleError::Remote { source, .. } => Some(source.classify()),
            _ => None,
        }
    }

    /// Local errors are shown inline next to the offending field
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            ConsoleError::Validation { .. } | ConsoleError::ProtocolField { .. }
        )
    }

    /// Get error severity for logging/alerting purposes
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConsoleError::Validation { .. } | ConsoleError::ProtocolField { .. } => {
                ErrorSeverity::Low
            }
            ConsoleError::WizardClosed | ConsoleError::MissingInput { .. } => ErrorSeverity::Low,
            ConsoleError::Remote { source, .. } => match source.status {
                Some(status) if status >= 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            ConsoleError::TemplateNotLoaded { .. } | ConsoleError::UnknownTemplate { .. } => {
                ErrorSeverity::Medium
            }
            ConsoleError::Configuration { .. } => ErrorSeverity::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}
