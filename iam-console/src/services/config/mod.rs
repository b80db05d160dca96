//! Console configuration
//!
//! Deployment-level settings that the wizard and the extension configs
//! read at construction time: tenant, feature flags, field constraints,
//! navigation paths and template handling.

use std::path::Path;

use anyhow::Context;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::features::identity_providers::IdentityProviderConfig;

/// Top-level console configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsoleConfig {
    /// Tenant domain the console is operating on
    pub tenant: String,

    /// Whether OAuth client secrets are stored hashed. Drives the
    /// post-creation hint on the edit view.
    pub client_secret_hash_enabled: bool,

    /// Application name field constraints
    pub application_name: NameConstraints,

    /// Template loading and expert mode
    pub templates: TemplateConfig,

    /// Navigation targets
    pub paths: PathConfig,

    /// Identity provider extension toggles
    pub identity_providers: IdentityProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NameConstraints {
    pub pattern: String,
    pub max_length: usize,
}

/// How templates are resolved before the wizard can submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemplateLoadingStrategy {
    /// The template object is already complete, no I/O
    Local,
    /// Fetch the template by id
    Remote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateConfig {
    /// Id of the custom (expert mode) template, which is never fetched
    pub custom_template_id: String,
    pub loading_strategy: TemplateLoadingStrategy,
    /// Remote templates kept per resolver; 0 disables caching
    pub cache_capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PathConfig {
    pub applications: String,
    /// Edit view, `:id` is replaced with the created application id
    pub application_edit: String,
    pub app_state_param_key: String,
    pub app_state_param_value: String,
    pub client_secret_hash_param_key: String,
}

impl Default for NameConstraints {
    fn default() -> Self {
        Self {
            // At least two characters, leading alphanumeric, no trailing space
            pattern: r"^[a-zA-Z0-9][a-zA-Z0-9._ -]*[a-zA-Z0-9._-]$".to_string(),
            max_length: 50,
        }
    }
}

impl NameConstraints {
    pub fn compiled_pattern(&self) -> Result<Regex, regex::Error> {
        Regex::new(&self.pattern)
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            custom_template_id: "custom-app".to_string(),
            loading_strategy: TemplateLoadingStrategy::Remote,
            cache_capacity: 32,
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            applications: "/develop/applications".to_string(),
            application_edit: "/develop/applications/:id".to_string(),
            app_state_param_key: "state".to_string(),
            app_state_param_value: "new".to_string(),
            client_secret_hash_param_key: "isClientSecretHashEnabled".to_string(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            tenant: "carbon.super".to_string(),
            client_secret_hash_enabled: false,
            application_name: NameConstraints::default(),
            templates: TemplateConfig::default(),
            paths: PathConfig::default(),
            identity_providers: IdentityProviderConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a configuration document. Missing sections fall back to defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load and validate a configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading console config {}", path.display()))?;
        let config = Self::from_json_str(&raw)
            .with_context(|| format!("parsing console config {}", path.display()))?;

        config
            .validate()
            .map_err(|errors| anyhow::anyhow!("invalid console config: {}", errors.join("; ")))?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.tenant.trim().is_empty() {
            errors.push("tenant must not be empty".to_string());
        }

        if let Err(e) = self.application_name.compiled_pattern() {
            errors.push(format!("applicationName.pattern is not a valid regex: {}", e));
        }

        if self.application_name.max_length == 0 {
            errors.push("applicationName.maxLength must be greater than 0".to_string());
        }

        if self.templates.custom_template_id.trim().is_empty() {
            errors.push("templates.customTemplateId must not be empty".to_string());
        }

        if !self.paths.application_edit.contains(":id") {
            errors.push("paths.applicationEdit must contain the :id placeholder".to_string());
        }

        if !self.paths.applications.starts_with('/') {
            errors.push("paths.applications must be an absolute path".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
