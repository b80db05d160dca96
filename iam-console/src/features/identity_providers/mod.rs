//! Identity provider extension config
//!
//! Deployment toggles for the identity provider (connection) views and
//! the small predicates those views ask before showing an authenticator,
//! a tab or a form field. Defaults match a stock console.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Local authenticators that may be listed alongside federated ones
pub const BASIC_AUTH_REQUEST_PATH_AUTHENTICATOR: &str = "BasicAuthRequestPathAuthenticator";
pub const OAUTH_REQUEST_PATH_AUTHENTICATOR: &str = "OAuthRequestPathAuthenticator";
pub const X509_AUTHENTICATOR: &str = "x509CertificateAuthenticator";
pub const SESSION_EXECUTOR_AUTHENTICATOR: &str = "SessionExecutor";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityProviderConfig {
    /// Per-authenticator overrides keyed by authenticator id
    pub authenticators: BTreeMap<String, AuthenticatorExtension>,
    pub edit_identity_provider: EditIdentityProviderConfig,
    pub general_details_form: GeneralDetailsFormConfig,
    pub identity_provider_list: IdentityProviderListConfig,
    /// Local and federated authenticators shown together as connections
    pub use_new_connections_view: bool,
    pub templates: IdentityProviderTemplates,
    pub utils: AuthenticatorRules,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthenticatorExtension {
    /// Only enabled authenticators are shown on the grid
    pub is_enabled: bool,
    pub is_coming_soon: bool,
    /// Replaces the default edit action label
    pub edit_action_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditIdentityProviderConfig {
    pub show_advanced_settings: bool,
    pub show_jit_provisioning: bool,
    pub show_outbound_provisioning: bool,
    /// The whole attributes tab; when off the other attribute rules are moot
    pub attributes_settings: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralDetailsFormConfig {
    pub show_certificate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityProviderListConfig {
    /// Plain identity provider list instead of the authenticator grid
    pub use_legacy_listing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityProviderTemplates {
    pub facebook: bool,
    pub google: bool,
    pub github: bool,
    pub enterprise: bool,
    pub saml: bool,
    pub oidc: bool,
}

/// Lists backing the authenticator predicates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthenticatorRules {
    pub allowed_authenticators: Vec<String>,
    pub provisioning_attributes_excluded: Vec<String>,
    pub identity_claim_attributes_hidden: Vec<String>,
    pub logo_input_hidden: Vec<String>,
}

impl Default for EditIdentityProviderConfig {
    fn default() -> Self {
        Self {
            show_advanced_settings: true,
            show_jit_provisioning: true,
            show_outbound_provisioning: true,
            attributes_settings: true,
        }
    }
}

impl Default for GeneralDetailsFormConfig {
    fn default() -> Self {
        Self {
            show_certificate: true,
        }
    }
}

impl Default for IdentityProviderListConfig {
    fn default() -> Self {
        Self {
            use_legacy_listing: true,
        }
    }
}

impl Default for IdentityProviderTemplates {
    fn default() -> Self {
        Self {
            facebook: true,
            google: true,
            github: true,
            enterprise: true,
            saml: true,
            oidc: true,
        }
    }
}

impl Default for AuthenticatorRules {
    fn default() -> Self {
        Self {
            allowed_authenticators: [
                BASIC_AUTH_REQUEST_PATH_AUTHENTICATOR,
                OAUTH_REQUEST_PATH_AUTHENTICATOR,
                X509_AUTHENTICATOR,
                SESSION_EXECUTOR_AUTHENTICATOR,
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
            provisioning_attributes_excluded: Vec::new(),
            identity_claim_attributes_hidden: Vec::new(),
            logo_input_hidden: Vec::new(),
        }
    }
}

impl IdentityProviderConfig {
    pub fn is_authenticator_allowed(&self, name: &str) -> bool {
        self.utils.allowed_authenticators.iter().any(|allowed| allowed == name)
    }

    pub fn is_provisioning_attributes_enabled(&self, authenticator_id: &str) -> bool {
        !self
            .utils
            .provisioning_attributes_excluded
            .iter()
            .any(|excluded| excluded == authenticator_id)
    }

    pub fn hide_identity_claim_attributes(&self, authenticator_id: &str) -> bool {
        self.utils
            .identity_claim_attributes_hidden
            .iter()
            .any(|hidden| hidden == authenticator_id)
    }

    pub fn hide_logo_input_field(&self, authenticator_id: &str) -> bool {
        self.utils.logo_input_hidden.iter().any(|hidden| hidden == authenticator_id)
    }

    /// Template toggle by template id. Ids without a toggle are always on.
    pub fn is_template_enabled(&self, template_id: &str) -> bool {
        let templates = &self.templates;
        match template_id {
            "facebook" => templates.facebook,
            "google" => templates.google,
            "github" => templates.github,
            "enterprise" => templates.enterprise,
            "saml" | "enterprise-saml" => templates.saml,
            "oidc" | "enterprise-oidc" => templates.oidc,
            _ => true,
        }
    }

    /// Authenticators to show on the connections grid, with their overrides.
    ///
    /// Empty under legacy listing, where the grid is not rendered at all.
    pub fn grid_authenticators(&self) -> Vec<(&str, &AuthenticatorExtension)> {
        if self.identity_provider_list.use_legacy_listing {
            return Vec::new();
        }

        self.authenticators
            .iter()
            .filter(|(_, extension)| extension.is_enabled)
            .map(|(id, extension)| (id.as_str(), extension))
            .collect()
    }

    /// Edit action label for an authenticator, if overridden
    pub fn edit_action_label(&self, authenticator_id: &str) -> Option<&str> {
        self.authenticators
            .get(authenticator_id)?
            .edit_action_label
            .as_deref()
    }
}
