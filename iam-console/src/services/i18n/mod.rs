//! Translation seam and the console namespace keys used by this crate.
//!
//! String lookup itself belongs to the host UI; the crate only names keys
//! and hands them to a [`Translator`].

use std::collections::BTreeMap;

pub type TranslationParams = BTreeMap<String, String>;

pub trait Translator {
    fn translate(&self, key: &str, params: &TranslationParams) -> String;

    fn t(&self, key: &str) -> String {
        self.translate(key, &TranslationParams::new())
    }
}

/// Returns the key itself. Useful for hosts without a string catalog and
/// for asserting on keys in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(&self, key: &str, _params: &TranslationParams) -> String {
        key.to_string()
    }
}

/// Keys under `console:develop.features.applications`
pub mod keys {
    const NOTIFICATIONS: &str = "console:develop.features.applications.notifications";

    pub fn add_application_success_message() -> String {
        format!("{}.addApplication.success.message", NOTIFICATIONS)
    }

    pub fn add_application_success_description() -> String {
        format!("{}.addApplication.success.description", NOTIFICATIONS)
    }

    pub fn add_application_error_message() -> String {
        format!("{}.addApplication.error.message", NOTIFICATIONS)
    }

    pub fn add_application_generic_error_message() -> String {
        format!("{}.addApplication.genericError.message", NOTIFICATIONS)
    }

    pub fn add_application_generic_error_description() -> String {
        format!("{}.addApplication.genericError.description", NOTIFICATIONS)
    }

    pub fn fetch_template_error_message() -> String {
        format!("{}.fetchTemplate.error.message", NOTIFICATIONS)
    }

    pub fn fetch_template_generic_error_message() -> String {
        format!("{}.fetchTemplate.genericError.message", NOTIFICATIONS)
    }

    pub fn fetch_template_generic_error_description() -> String {
        format!("{}.fetchTemplate.genericError.description", NOTIFICATIONS)
    }

    pub fn fetch_applications_error_message() -> String {
        format!("{}.fetchApplications.error.message", NOTIFICATIONS)
    }

    pub fn fetch_applications_generic_error_message() -> String {
        format!("{}.fetchApplications.genericError.message", NOTIFICATIONS)
    }

    pub fn fetch_applications_generic_error_description() -> String {
        format!("{}.fetchApplications.genericError.description", NOTIFICATIONS)
    }

    pub const NAME_EMPTY: &str =
        "console:develop.features.applications.forms.generalDetails.fields.name.validations.empty";
    pub const NAME_DUPLICATE: &str =
        "console:develop.features.applications.forms.generalDetails.fields.name.validations.duplicate";
    /// Takes `appName` and `characterLimit`
    pub const NAME_INVALID: &str =
        "console:develop.features.applications.forms.spaProtocolSettingsWizard.fields.name.validations.invalid";
}
