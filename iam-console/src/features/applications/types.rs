// Core types for the application creation wizard - no rendering concerns here
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::services::client::{Alert, NavigationTarget};
use crate::services::errors::ErrorClassification;
use crate::utils::{get_path, non_empty_strings};

/// OIDC redirect URIs inside an application document
pub const CALLBACK_URLS_PATH: &str = "inboundProtocolConfiguration.oidc.callbackURLs";
/// OIDC allowed origins inside an application document
pub const ALLOWED_ORIGINS_PATH: &str = "inboundProtocolConfiguration.oidc.allowedOrigins";

/// Inbound authentication protocols the wizard can collect settings for
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SupportedAuthProtocol {
    Oidc,
    Saml,
    /// Any other declared protocol; no wizard form exists for it
    #[serde(other)]
    Custom,
}

/// Application template as served by the template store
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationTemplate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub authentication_protocol: Option<SupportedAuthProtocol>,
    /// Default application document the creation payload starts from
    #[serde(default)]
    pub application: Value,
    #[serde(default)]
    pub sub_templates: Vec<ApplicationTemplate>,
    /// Shown as "coming soon", not selectable
    #[serde(default)]
    pub preview_only: bool,
}

impl ApplicationTemplate {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn has_sub_templates(&self) -> bool {
        !self.sub_templates.is_empty()
    }

    pub fn find_sub_template(&self, id: &str) -> Option<&ApplicationTemplate> {
        self.sub_templates.iter().find(|sub| sub.id == id)
    }
}

/// Values of the general details form
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneralFormValues {
    pub name: String,
}

/// Nested document produced by a protocol sub-form, shaped like the
/// application document (`inboundProtocolConfiguration.oidc...`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct ProtocolFormValues(pub Value);

impl ProtocolFormValues {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// User-entered callback URLs, blanks dropped
    pub fn callback_urls(&self) -> Vec<String> {
        non_empty_strings(get_path(&self.0, CALLBACK_URLS_PATH))
    }
}

/// The merged document sent to the creation endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct ApplicationCreationPayload(Value);

impl Default for ApplicationCreationPayload {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl ApplicationCreationPayload {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn template_id(&self) -> Option<&str> {
        self.0.get("templateId").and_then(Value::as_str)
    }

    pub fn callback_urls(&self) -> Vec<String> {
        non_empty_strings(get_path(&self.0, CALLBACK_URLS_PATH))
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        non_empty_strings(get_path(&self.0, ALLOWED_ORIGINS_PATH))
    }
}

// Validation status for the application name field
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NameValidation {
    #[default]
    None,
    Checking,
    Valid,
    Empty,
    Invalid,
    TooLong,
    Duplicate,
}

impl NameValidation {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            NameValidation::Empty
                | NameValidation::Invalid
                | NameValidation::TooLong
                | NameValidation::Duplicate
        )
    }
}

/// Creation request lifecycle
#[derive(Clone, PartialEq, Debug, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded { target: NavigationTarget },
    Failed { classification: ErrorClassification },
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum WizardAction {
    SelectTemplate(ApplicationTemplate),
    SetTemplateSettings(Option<ApplicationTemplate>),
    SetLoadingTemplate(bool),
    SetGeneralValues(Option<GeneralFormValues>),
    SetProtocolValues(Option<ProtocolFormValues>),
    SetNameValidation(NameValidation),
    SetAlert(Option<Alert>),
    SetAllowedOrigins(Vec<String>),
    SetSubmission(SubmissionState),
}

/// Everything the wizard UI renders from. Lives as long as the wizard is
/// open and is never persisted.
#[derive(Clone, Debug, Default)]
pub struct WizardState {
    pub selected_template: ApplicationTemplate,
    pub template_settings: Option<ApplicationTemplate>,
    pub is_loading_template: bool,
    pub general_values: Option<GeneralFormValues>,
    pub protocol_values: Option<ProtocolFormValues>,
    pub name_validation: NameValidation,
    /// Inline alert shown at the top of the wizard
    pub alert: Option<Alert>,
    /// Tenant CORS origins, shown next to the callback URL field
    pub allowed_origins: Vec<String>,
    pub submission: SubmissionState,
}

impl WizardState {
    pub fn new(selected_template: ApplicationTemplate) -> Self {
        Self {
            selected_template,
            ..Self::default()
        }
    }

    /// Reduces the state based on an action
    pub fn reduce(mut self, action: WizardAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// Reduces the state based on an action in-place
    pub fn reduce_in_place(&mut self, action: WizardAction) {
        match action {
            WizardAction::SelectTemplate(template) => {
                crate::console_debug!(
                    "[Wizard] Selected template changing: {} -> {}",
                    self.selected_template.id,
                    template.id
                );
                self.selected_template = template;
            }
            WizardAction::SetTemplateSettings(settings) => {
                self.template_settings = settings;
            }
            WizardAction::SetLoadingTemplate(loading) => {
                self.is_loading_template = loading;
            }
            WizardAction::SetGeneralValues(values) => {
                self.general_values = values;
            }
            WizardAction::SetProtocolValues(values) => {
                self.protocol_values = values;
            }
            WizardAction::SetNameValidation(validation) => {
                self.name_validation = validation;
            }
            WizardAction::SetAlert(alert) => {
                self.alert = alert;
            }
            WizardAction::SetAllowedOrigins(origins) => {
                self.allowed_origins = origins;
            }
            WizardAction::SetSubmission(submission) => {
                crate::console_debug!(
                    "[Wizard] Submission state changing: {:?} -> {:?}",
                    self.submission,
                    submission
                );
                self.submission = submission;
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }
}
