//! Protocol-specific fields of the minimal creation wizard.
//!
//! Each supported protocol contributes a small, fixed set of fields. The
//! UI renders them; this module decides which ones exist, pre-fills them
//! from template defaults and turns the entered values into the nested
//! document the submission merger expects.

use std::collections::BTreeMap;

use serde_json::{json, Value};
use url::Url;

use super::types::{ProtocolFormValues, SupportedAuthProtocol, ALLOWED_ORIGINS_PATH, CALLBACK_URLS_PATH};
use crate::services::errors::{ConsoleError, ConsoleResult};
use crate::utils::{get_path, non_empty_strings, set_path};

const SAML_ISSUER_PATH: &str = "inboundProtocolConfiguration.saml.manualConfiguration.issuer";
const SAML_ACS_URLS_PATH: &str =
    "inboundProtocolConfiguration.saml.manualConfiguration.assertionConsumerUrls";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProtocolField {
    CallbackUrls,
    Issuer,
    AssertionConsumerUrls,
}

impl ProtocolField {
    /// Field name as the forms know it
    pub fn name(&self) -> &'static str {
        match self {
            ProtocolField::CallbackUrls => "callbackURLs",
            ProtocolField::Issuer => "issuer",
            ProtocolField::AssertionConsumerUrls => "assertionConsumerURLs",
        }
    }

    /// Location of the field inside the application document
    pub fn path(&self) -> &'static str {
        match self {
            ProtocolField::CallbackUrls => CALLBACK_URLS_PATH,
            ProtocolField::Issuer => SAML_ISSUER_PATH,
            ProtocolField::AssertionConsumerUrls => SAML_ACS_URLS_PATH,
        }
    }

    pub fn is_list(&self) -> bool {
        !matches!(self, ProtocolField::Issuer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

pub type ProtocolFormInput = BTreeMap<ProtocolField, FieldValue>;

/// Fields a protocol sub-form collects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolFieldSet {
    pub protocol: SupportedAuthProtocol,
    pub fields: &'static [ProtocolField],
}

const OIDC_FIELDS: &[ProtocolField] = &[ProtocolField::CallbackUrls];
const SAML_FIELDS: &[ProtocolField] = &[ProtocolField::Issuer, ProtocolField::AssertionConsumerUrls];

/// Maps a protocol to its sub-form. `None` means there is nothing to
/// render, which is a valid state for templates without an inbound protocol.
pub fn select_form(protocol: Option<SupportedAuthProtocol>) -> Option<ProtocolFieldSet> {
    match protocol? {
        SupportedAuthProtocol::Oidc => Some(ProtocolFieldSet {
            protocol: SupportedAuthProtocol::Oidc,
            fields: OIDC_FIELDS,
        }),
        SupportedAuthProtocol::Saml => Some(ProtocolFieldSet {
            protocol: SupportedAuthProtocol::Saml,
            fields: SAML_FIELDS,
        }),
        SupportedAuthProtocol::Custom => None,
    }
}

impl ProtocolFieldSet {
    /// Pre-fill values taken from the template's default application
    pub fn initial_input(&self, template_defaults: &Value) -> ProtocolFormInput {
        self.fields
            .iter()
            .map(|field| {
                let current = get_path(template_defaults, field.path());
                let value = if field.is_list() {
                    FieldValue::List(non_empty_strings(current))
                } else {
                    FieldValue::Text(
                        current
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                    )
                };
                (*field, value)
            })
            .collect()
    }

    /// Build the protocol document from entered values
    pub fn collect(&self, input: &ProtocolFormInput) -> ConsoleResult<ProtocolFormValues> {
        let mut document = json!({});

        match self.protocol {
            SupportedAuthProtocol::Oidc => {
                let callback_urls = list_value(input, ProtocolField::CallbackUrls);
                let origins = origins_of(&callback_urls)?;

                set_path(&mut document, CALLBACK_URLS_PATH, json!(callback_urls));
                if !origins.is_empty() {
                    set_path(&mut document, ALLOWED_ORIGINS_PATH, json!(origins));
                }
            }
            SupportedAuthProtocol::Saml => {
                let issuer = text_value(input, ProtocolField::Issuer);
                if issuer.is_empty() {
                    return Err(required(ProtocolField::Issuer));
                }

                let acs_urls = list_value(input, ProtocolField::AssertionConsumerUrls);
                if acs_urls.is_empty() {
                    return Err(required(ProtocolField::AssertionConsumerUrls));
                }
                // Parsed for validation only
                origins_of(&acs_urls)?;

                set_path(&mut document, SAML_ISSUER_PATH, json!(issuer));
                set_path(&mut document, SAML_ACS_URLS_PATH, json!(acs_urls));
            }
            SupportedAuthProtocol::Custom => {}
        }

        Ok(ProtocolFormValues(document))
    }
}

fn text_value(input: &ProtocolFormInput, field: ProtocolField) -> String {
    match input.get(&field) {
        Some(FieldValue::Text(text)) => text.trim().to_string(),
        Some(FieldValue::List(items)) => items
            .iter()
            .map(|item| item.trim())
            .find(|item| !item.is_empty())
            .unwrap_or_default()
            .to_string(),
        None => String::new(),
    }
}

fn list_value(input: &ProtocolFormInput, field: ProtocolField) -> Vec<String> {
    let raw: Vec<&str> = match input.get(&field) {
        Some(FieldValue::List(items)) => items.iter().map(String::as_str).collect(),
        // Comma separated entry in a single text box
        Some(FieldValue::Text(text)) => text.split(',').collect(),
        None => Vec::new(),
    };

    raw.into_iter()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Distinct origins of the given URLs in first-seen order
fn origins_of(urls: &[String]) -> ConsoleResult<Vec<String>> {
    let mut origins: Vec<String> = Vec::new();

    for raw in urls {
        let parsed = Url::parse(raw).map_err(|e| ConsoleError::ProtocolField {
            field: raw.clone(),
            message: format!("not a valid URL: {}", e),
        })?;

        let origin = parsed.origin();
        if !origin.is_tuple() {
            continue;
        }
        let origin = origin.ascii_serialization();
        if !origins.contains(&origin) {
            origins.push(origin);
        }
    }

    Ok(origins)
}

fn required(field: ProtocolField) -> ConsoleError {
    ConsoleError::ProtocolField {
        field: field.name().to_string(),
        message: "required".to_string(),
    }
}
