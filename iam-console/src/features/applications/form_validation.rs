use regex::Regex;

use crate::features::applications::types::*;
use crate::services::client::{Alert, ConsoleServices};
use crate::services::config::NameConstraints;
use crate::services::errors::ErrorClassification;
use crate::services::i18n::{keys, TranslationParams, Translator};

/// Local name checks, cheapest first. Never touches the network.
pub fn check_name_format(name: &str, constraints: &NameConstraints, pattern: &Regex) -> NameValidation {
    if name.trim().is_empty() {
        return NameValidation::Empty;
    }

    if name.chars().count() > constraints.max_length {
        return NameValidation::TooLong;
    }

    if !pattern.is_match(name) {
        return NameValidation::Invalid;
    }

    NameValidation::Valid
}

/// Full name validation: local checks, then a uniqueness lookup against
/// existing applications.
///
/// A failed lookup raises an alert on the notification sink and does not
/// block the user; the server still rejects real duplicates on create.
pub async fn validate_application_name(
    name: &str,
    constraints: &NameConstraints,
    pattern: &Regex,
    services: &ConsoleServices,
) -> NameValidation {
    let local = check_name_format(name, constraints, pattern);
    if local != NameValidation::Valid {
        return local;
    }

    let filter = format!("name eq {}", name);
    match services.applications.list_applications(&filter).await {
        Ok(response) => {
            if response.applications.iter().any(|app| app.name == name) {
                NameValidation::Duplicate
            } else {
                NameValidation::Valid
            }
        }
        Err(e) => {
            crate::console_warn!("[Wizard] Application name lookup failed: {}", e);
            let alert = match e.classify() {
                ErrorClassification::Structured(description) => Alert::error(
                    services.translator.t(&keys::fetch_applications_error_message()),
                    description,
                ),
                ErrorClassification::Generic => Alert::error(
                    services.translator.t(&keys::fetch_applications_generic_error_message()),
                    services.translator.t(&keys::fetch_applications_generic_error_description()),
                ),
            };
            services.notifications.add_alert(alert);
            NameValidation::Valid
        }
    }
}

/// Gets the user-facing message for the name field, if it has an error
pub fn name_validation_message(
    validation: NameValidation,
    name: &str,
    constraints: &NameConstraints,
    translator: &dyn Translator,
) -> Option<String> {
    match validation {
        NameValidation::Empty => Some(translator.t(keys::NAME_EMPTY)),
        NameValidation::Duplicate => Some(translator.t(keys::NAME_DUPLICATE)),
        NameValidation::Invalid | NameValidation::TooLong => {
            let mut params = TranslationParams::new();
            params.insert("appName".to_string(), name.to_string());
            params.insert(
                "characterLimit".to_string(),
                constraints.max_length.to_string(),
            );
            Some(translator.translate(keys::NAME_INVALID, &params))
        }
        NameValidation::None | NameValidation::Checking | NameValidation::Valid => None,
    }
}
