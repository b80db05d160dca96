//! Submission merge and post-create navigation.
//!
//! Both functions are pure: they build documents and targets, the
//! controller performs the I/O around them.

use serde_json::{json, Value};

use super::types::{
    ApplicationCreationPayload, GeneralFormValues, ProtocolFormValues, ALLOWED_ORIGINS_PATH,
    CALLBACK_URLS_PATH,
};
use crate::services::client::{CreateApplicationResponse, NavigationTarget};
use crate::services::config::PathConfig;
use crate::utils::{get_path, merge, set_path};

/// Builds the creation payload from template defaults and form values.
///
/// A non-empty user callback list replaces the template's callback URLs
/// and allowed origins outright; the two are never concatenated.
pub fn merge_submission(
    template_defaults: &Value,
    selected_template_id: &str,
    protocol_values: Option<&ProtocolFormValues>,
    general_values: &GeneralFormValues,
) -> ApplicationCreationPayload {
    let mut payload = if template_defaults.is_object() {
        template_defaults.clone()
    } else {
        json!({})
    };

    if let Some(values) = protocol_values {
        if !values.callback_urls().is_empty() {
            for path in [CALLBACK_URLS_PATH, ALLOWED_ORIGINS_PATH] {
                if get_path(&payload, path).is_some() {
                    set_path(&mut payload, path, json!([]));
                }
            }
        }
        merge(&mut payload, values.as_value());
    }

    set_path(&mut payload, "name", json!(general_values.name));
    set_path(&mut payload, "templateId", json!(selected_template_id));

    ApplicationCreationPayload::from_value(payload)
}

/// Where to go after a successful create.
///
/// With an id the edit view is opened with the "freshly created" marker,
/// otherwise the application list.
pub fn resolve_navigation(
    response: &CreateApplicationResponse,
    paths: &PathConfig,
    client_secret_hash_enabled: bool,
) -> NavigationTarget {
    let Some(id) = response.created_id() else {
        return NavigationTarget::path(paths.applications.clone());
    };

    let mut search = format!(
        "?{}={}",
        paths.app_state_param_key, paths.app_state_param_value
    );
    if client_secret_hash_enabled {
        search.push_str(&format!("&{}=true", paths.client_secret_hash_param_key));
    }

    NavigationTarget {
        pathname: paths.application_edit.replace(":id", id),
        search: Some(search),
    }
}
