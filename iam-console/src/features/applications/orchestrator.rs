//! Wizard controller - coordinates template loading, the two forms and the
//! create call for one wizard invocation

use std::cell::{Cell, RefCell};

use regex::Regex;

use crate::features::applications::{
    form_validation::validate_application_name,
    protocol_forms::{select_form, ProtocolFieldSet, ProtocolFormInput},
    submission::{merge_submission, resolve_navigation},
    template_resolver::TemplateResolver,
    types::*,
};
use crate::services::client::{Alert, ConsoleServices};
use crate::services::config::ConsoleConfig;
use crate::services::errors::{ConsoleError, ConsoleResult, ErrorClassification};
use crate::services::i18n::keys;

/// Owns the state of one open wizard.
///
/// Everything runs on the UI thread. State is only borrowed between
/// awaits, never across one. Every `open` and `close` starts a new
/// generation; a request records the generation it started in and its
/// completion is dropped once that generation is gone, even if the
/// wizard has been reopened since.
pub struct WizardController {
    config: ConsoleConfig,
    services: ConsoleServices,
    resolver: TemplateResolver,
    name_pattern: Regex,
    /// Catalog entry the wizard was opened for
    template: ApplicationTemplate,
    state: RefCell<Option<WizardState>>,
    generation: Cell<u64>,
}

impl WizardController {
    pub fn new(
        config: ConsoleConfig,
        services: ConsoleServices,
        template: ApplicationTemplate,
    ) -> ConsoleResult<Self> {
        if let Err(errors) = config.validate() {
            return Err(ConsoleError::Configuration {
                field: "console".to_string(),
                value: errors.join("; "),
            });
        }

        let name_pattern = config
            .application_name
            .compiled_pattern()
            .map_err(|e| ConsoleError::Configuration {
                field: "applicationName.pattern".to_string(),
                value: e.to_string(),
            })?;

        let resolver = TemplateResolver::new(services.templates.clone(), &config.templates);

        Ok(Self {
            config,
            services,
            resolver,
            name_pattern,
            template,
            state: RefCell::new(None),
            generation: Cell::new(0),
        })
    }

    /// Opens the wizard and loads the initial template.
    ///
    /// The custom template is used as-is. Otherwise the first selectable
    /// sub-template (or the template itself) is resolved.
    pub async fn open(&self) -> ConsoleResult<()> {
        crate::console_info!("[Wizard] Opening wizard for template {}", self.template.id);
        self.next_generation();
        *self.state.borrow_mut() = Some(WizardState::new(self.template.clone()));

        let initial = self
            .template
            .sub_templates
            .iter()
            .find(|sub| !sub.preview_only)
            .cloned()
            .unwrap_or_else(|| self.template.clone());

        self.load_template(initial).await
    }

    /// Discards the wizard state. Requests still in flight resolve into
    /// nothing.
    pub fn close(&self) {
        self.next_generation();
        if self.state.borrow_mut().take().is_some() {
            crate::console_info!("[Wizard] Closed wizard for template {}", self.template.id);
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Snapshot of the current state for rendering
    pub fn state(&self) -> Option<WizardState> {
        self.state.borrow().clone()
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Protocol sub-form for the selected template, if it has one
    pub fn protocol_form(&self) -> Option<ProtocolFieldSet> {
        let protocol = self
            .with_state(|state| state.selected_template.authentication_protocol)
            .ok()?;
        select_form(protocol)
    }

    /// Pre-filled protocol form input taken from the loaded template settings
    pub fn protocol_form_input(&self) -> Option<ProtocolFormInput> {
        let form = self.protocol_form()?;
        let defaults = self
            .with_state(|state| state.template_settings.as_ref().map(|t| t.application.clone()))
            .ok()??;
        Some(form.initial_input(&defaults))
    }

    /// Switches to another sub-template. Preview-only entries are ignored.
    pub async fn select_sub_template(&self, id: &str) -> ConsoleResult<()> {
        let sub = self
            .template
            .find_sub_template(id)
            .cloned()
            .ok_or_else(|| ConsoleError::UnknownTemplate {
                template_id: id.to_string(),
            })?;

        if sub.preview_only {
            crate::console_debug!("[Wizard] Ignoring preview-only template {}", id);
            return Ok(());
        }

        self.ensure_open()?;
        self.load_template(sub).await
    }

    async fn load_template(&self, template: ApplicationTemplate) -> ConsoleResult<()> {
        let generation = self.generation.get();
        self.dispatch_all([
            WizardAction::SelectTemplate(template.clone()),
            WizardAction::SetTemplateSettings(None),
            WizardAction::SetProtocolValues(None),
            WizardAction::SetAlert(None),
        ])?;

        if self.resolver.is_custom(&template) {
            crate::console_info!("[Wizard] Custom template selected, using it as-is");
            return self.dispatch(WizardAction::SetTemplateSettings(Some(template)));
        }

        self.dispatch(WizardAction::SetLoadingTemplate(true))?;

        let (resolved, origins) = futures::join!(
            self.resolver.resolve(&template),
            self.services.cors.get_cors_origins()
        );

        if self.is_stale(generation) {
            crate::console_debug!("[Wizard] Template {} loaded for a closed wizard, ignoring", template.id);
            return Err(ConsoleError::WizardClosed);
        }

        let is_current = self.with_state(|state| state.selected_template.id == template.id)?;
        if !is_current {
            crate::console_debug!("[Wizard] Dropping stale template load for {}", template.id);
            return Ok(());
        }

        let origins = match origins {
            Ok(origins) => origins.into_iter().map(|origin| origin.url).collect(),
            Err(e) => {
                crate::console_warn!("[Wizard] Failed to fetch CORS origins: {}", e);
                Vec::new()
            }
        };
        self.dispatch(WizardAction::SetAllowedOrigins(origins))?;

        match resolved {
            Ok(settings) => {
                crate::console_info!("[Wizard] Template {} loaded", template.id);
                self.dispatch_all([
                    WizardAction::SetTemplateSettings(Some(settings)),
                    WizardAction::SetLoadingTemplate(false),
                ])
            }
            Err(e) => {
                crate::console_error!("[Wizard] Failed to load template {}: {}", template.id, e);
                self.dispatch(WizardAction::SetLoadingTemplate(false))?;
                self.services.notifications.add_alert(self.fetch_template_alert(&e));
                Err(e)
            }
        }
    }

    /// Runs name validation and records the outcome
    pub async fn validate_name(&self, name: &str) -> ConsoleResult<NameValidation> {
        let generation = self.generation.get();
        self.dispatch(WizardAction::SetNameValidation(NameValidation::Checking))?;

        let validation = validate_application_name(
            name,
            &self.config.application_name,
            &self.name_pattern,
            &self.services,
        )
        .await;

        if self.is_stale(generation) {
            return Err(ConsoleError::WizardClosed);
        }
        self.dispatch(WizardAction::SetNameValidation(validation))?;
        Ok(validation)
    }

    /// General details form submit. Returns the submission outcome when
    /// this completed the join.
    pub async fn submit_general_form(
        &self,
        values: GeneralFormValues,
    ) -> ConsoleResult<Option<SubmissionState>> {
        let validation = self.validate_name(&values.name).await?;
        if validation.is_error() {
            return Err(ConsoleError::Validation {
                field: "name".to_string(),
                validation,
            });
        }

        self.dispatch(WizardAction::SetGeneralValues(Some(values)))?;
        self.try_submit().await
    }

    /// Protocol form submit. Returns the submission outcome when this
    /// completed the join.
    pub async fn submit_protocol_form(
        &self,
        input: &ProtocolFormInput,
    ) -> ConsoleResult<Option<SubmissionState>> {
        let form = self.protocol_form().ok_or_else(|| ConsoleError::MissingInput {
            input: "protocol form".to_string(),
        })?;
        let values = form.collect(input)?;

        self.dispatch(WizardAction::SetProtocolValues(Some(values)))?;
        self.try_submit().await
    }

    /// Fires the create call once both forms are in.
    ///
    /// The protocol form is only awaited when the selected template has
    /// one. Both values are consumed here, so a later attempt needs fresh
    /// input from each form.
    pub async fn try_submit(&self) -> ConsoleResult<Option<SubmissionState>> {
        let payload = {
            let mut guard = self.state.borrow_mut();
            let state = guard.as_mut().ok_or(ConsoleError::WizardClosed)?;

            if state.is_submitting() {
                crate::console_debug!("[Wizard] Submission already in flight");
                return Ok(None);
            }

            let needs_protocol = select_form(state.selected_template.authentication_protocol).is_some();
            if state.general_values.is_none() || (needs_protocol && state.protocol_values.is_none()) {
                return Ok(None);
            }

            let settings = if self.resolver.is_custom(&state.selected_template) {
                state
                    .template_settings
                    .clone()
                    .unwrap_or_else(|| state.selected_template.clone())
            } else {
                state
                    .template_settings
                    .clone()
                    .ok_or_else(|| ConsoleError::TemplateNotLoaded {
                        template_id: state.selected_template.id.clone(),
                    })?
            };

            let general = state.general_values.take().ok_or_else(|| ConsoleError::MissingInput {
                input: "general details".to_string(),
            })?;
            let protocol = state.protocol_values.take();

            let payload = merge_submission(
                &settings.application,
                &state.selected_template.id,
                protocol.as_ref(),
                &general,
            );

            state.reduce_in_place(WizardAction::SetAlert(None));
            state.reduce_in_place(WizardAction::SetSubmission(SubmissionState::Submitting));
            payload
        };

        self.execute(payload).await.map(Some)
    }

    async fn execute(&self, payload: ApplicationCreationPayload) -> ConsoleResult<SubmissionState> {
        crate::console_info!(
            "[Wizard] Creating application {}",
            payload.name().unwrap_or_default()
        );

        let generation = self.generation.get();
        let result = self.services.applications.create_application(&payload).await;

        if self.is_stale(generation) {
            crate::console_warn!("[Wizard] Create finished after the wizard closed, ignoring");
            return Err(ConsoleError::WizardClosed);
        }

        let translator = &self.services.translator;
        let outcome = match result {
            Ok(response) => {
                let target = resolve_navigation(
                    &response,
                    &self.config.paths,
                    self.config.client_secret_hash_enabled,
                );
                crate::console_info!("[Wizard] Application created, navigating to {}", target.to_url());

                self.services.notifications.add_alert(Alert::success(
                    translator.t(&keys::add_application_success_message()),
                    translator.t(&keys::add_application_success_description()),
                ));
                self.services.navigator.push(target.clone());

                SubmissionState::Succeeded { target }
            }
            Err(e) => {
                crate::console_error!("[Wizard] Application creation failed: {}", e);
                let classification = e.classify();
                let alert = match &classification {
                    ErrorClassification::Structured(description) => Alert::error(
                        translator.t(&keys::add_application_error_message()),
                        description.clone(),
                    ),
                    ErrorClassification::Generic => Alert::error(
                        translator.t(&keys::add_application_generic_error_message()),
                        translator.t(&keys::add_application_generic_error_description()),
                    ),
                };
                self.dispatch(WizardAction::SetAlert(Some(alert)))?;

                SubmissionState::Failed { classification }
            }
        };

        self.dispatch(WizardAction::SetSubmission(outcome.clone()))?;
        Ok(outcome)
    }

    fn fetch_template_alert(&self, error: &ConsoleError) -> Alert {
        let translator = &self.services.translator;
        match error.classification() {
            Some(ErrorClassification::Structured(description)) => Alert::error(
                translator.t(&keys::fetch_template_error_message()),
                description,
            ),
            _ => Alert::error(
                translator.t(&keys::fetch_template_generic_error_message()),
                translator.t(&keys::fetch_template_generic_error_description()),
            ),
        }
    }

    fn next_generation(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    /// Whether the wizard was closed (and maybe reopened) since `generation`
    fn is_stale(&self, generation: u64) -> bool {
        self.generation.get() != generation || !self.is_open()
    }

    fn ensure_open(&self) -> ConsoleResult<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(ConsoleError::WizardClosed)
        }
    }

    fn with_state<R>(&self, read: impl FnOnce(&WizardState) -> R) -> ConsoleResult<R> {
        self.state
            .borrow()
            .as_ref()
            .map(read)
            .ok_or(ConsoleError::WizardClosed)
    }

    fn dispatch(&self, action: WizardAction) -> ConsoleResult<()> {
        match self.state.borrow_mut().as_mut() {
            Some(state) => {
                state.reduce_in_place(action);
                Ok(())
            }
            None => {
                crate::console_debug!("[Wizard] Dropping {:?} for closed wizard", action);
                Err(ConsoleError::WizardClosed)
            }
        }
    }

    fn dispatch_all<const N: usize>(&self, actions: [WizardAction; N]) -> ConsoleResult<()> {
        for action in actions {
            self.dispatch(action)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::applications::protocol_forms::{FieldValue, ProtocolField};
    use crate::features::applications::test_support::TestHarness;
    use crate::services::client::{AlertLevel, CreateApplicationResponse, NavigationTarget};
    use crate::services::config::{TemplateConfig, TemplateLoadingStrategy};
    use crate::services::errors::ServiceError;
    use crate::utils::get_path;
    use serde_json::json;

    fn spa_catalog_entry() -> ApplicationTemplate {
        ApplicationTemplate {
            name: "Single-Page Application".to_string(),
            authentication_protocol: Some(SupportedAuthProtocol::Oidc),
            sub_templates: vec![
                ApplicationTemplate {
                    preview_only: true,
                    ..ApplicationTemplate::new("angular")
                },
                ApplicationTemplate {
                    authentication_protocol: Some(SupportedAuthProtocol::Oidc),
                    ..ApplicationTemplate::new("react")
                },
                ApplicationTemplate {
                    authentication_protocol: Some(SupportedAuthProtocol::Oidc),
                    ..ApplicationTemplate::new("vue")
                },
            ],
            ..ApplicationTemplate::new("spa")
        }
    }

    fn resolved(id: &str) -> ApplicationTemplate {
        ApplicationTemplate {
            authentication_protocol: Some(SupportedAuthProtocol::Oidc),
            application: json!({
                "inboundProtocolConfiguration": {
                    "oidc": {
                        "callbackURLs": ["https://localhost:5000"],
                        "allowedOrigins": ["https://localhost:5000"],
                        "publicClient": true
                    }
                }
            }),
            ..ApplicationTemplate::new(id)
        }
    }

    fn saml_template() -> ApplicationTemplate {
        ApplicationTemplate {
            authentication_protocol: Some(SupportedAuthProtocol::Saml),
            application: json!({
                "inboundProtocolConfiguration": { "saml": { "manualConfiguration": {
                    "issuer": "",
                    "assertionConsumerUrls": []
                } } }
            }),
            ..ApplicationTemplate::new("saml-web")
        }
    }

    fn callback_input(urls: &[&str]) -> ProtocolFormInput {
        let mut input = ProtocolFormInput::new();
        input.insert(
            ProtocolField::CallbackUrls,
            FieldValue::List(urls.iter().map(|url| url.to_string()).collect()),
        );
        input
    }

    fn general(name: &str) -> GeneralFormValues {
        GeneralFormValues {
            name: name.to_string(),
        }
    }

    fn controller(harness: &TestHarness, template: ApplicationTemplate) -> WizardController {
        WizardController::new(ConsoleConfig::default(), harness.services(), template).unwrap()
    }

    #[tokio::test]
    async fn test_custom_template_skips_fetch_and_submits_defaults() {
        let harness = TestHarness::new();
        let custom = ApplicationTemplate {
            application: json!({ "advancedConfigurations": { "discoverableByEndUsers": false } }),
            ..ApplicationTemplate::new("custom-app")
        };
        let wizard = controller(&harness, custom);

        wizard.open().await.unwrap();

        assert!(harness.templates.requested().is_empty());
        assert_eq!(harness.cors.calls(), 0);
        assert!(wizard.protocol_form().is_none());

        let outcome = wizard.submit_general_form(general("Expert App")).await.unwrap();
        assert!(matches!(outcome, Some(SubmissionState::Succeeded { .. })));

        let created = harness.applications.created();
        assert_eq!(
            created[0].as_value(),
            &json!({
                "advancedConfigurations": { "discoverableByEndUsers": false },
                "name": "Expert App",
                "templateId": "custom-app"
            })
        );
    }

    #[tokio::test]
    async fn test_open_selects_first_sub_template_and_caches_origins() {
        let harness = TestHarness::new();
        harness.templates.insert(resolved("react"));
        harness.cors.set_origins(&["https://console.example.com"]);
        let wizard = controller(&harness, spa_catalog_entry());

        wizard.open().await.unwrap();

        let state = wizard.state().unwrap();
        assert_eq!(state.selected_template.id, "react");
        assert_eq!(state.template_settings, Some(resolved("react")));
        assert!(!state.is_loading_template);
        assert_eq!(state.allowed_origins, vec!["https://console.example.com".to_string()]);
        assert_eq!(harness.templates.requested(), vec!["react".to_string()]);

        let input = wizard.protocol_form_input().unwrap();
        assert_eq!(
            input.get(&ProtocolField::CallbackUrls),
            Some(&FieldValue::List(vec!["https://localhost:5000".to_string()]))
        );
    }

    #[tokio::test]
    async fn test_select_sub_template() {
        let harness = TestHarness::new();
        harness.templates.insert(resolved("react"));
        harness.templates.insert(resolved("vue"));
        let wizard = controller(&harness, spa_catalog_entry());
        wizard.open().await.unwrap();

        wizard.select_sub_template("angular").await.unwrap();
        assert_eq!(wizard.state().unwrap().selected_template.id, "react");

        wizard.select_sub_template("vue").await.unwrap();
        assert_eq!(wizard.state().unwrap().selected_template.id, "vue");

        let err = wizard.select_sub_template("svelte").await.unwrap_err();
        assert!(matches!(err, ConsoleError::UnknownTemplate { .. }));
    }

    #[tokio::test]
    async fn test_cors_failure_leaves_origins_empty() {
        let harness = TestHarness::new();
        harness.templates.insert(resolved("react"));
        harness.cors.fail_with(ServiceError::new("forbidden").with_status(403));
        let wizard = controller(&harness, spa_catalog_entry());

        wizard.open().await.unwrap();

        let state = wizard.state().unwrap();
        assert!(state.allowed_origins.is_empty());
        assert!(state.template_settings.is_some());
        assert!(harness.notifications.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_join_is_order_independent() {
        let first = TestHarness::new();
        first.templates.insert(resolved("react"));
        let wizard = controller(&first, spa_catalog_entry());
        wizard.open().await.unwrap();

        let outcome = wizard
            .submit_protocol_form(&callback_input(&["https://app.example.com/cb"]))
            .await
            .unwrap();
        assert_eq!(outcome, None);
        assert!(first.applications.created().is_empty());
        wizard.submit_general_form(general("Pickup")).await.unwrap();

        let second = TestHarness::new();
        second.templates.insert(resolved("react"));
        let wizard = controller(&second, spa_catalog_entry());
        wizard.open().await.unwrap();

        let outcome = wizard.submit_general_form(general("Pickup")).await.unwrap();
        assert_eq!(outcome, None);
        assert!(second.applications.created().is_empty());
        wizard
            .submit_protocol_form(&callback_input(&["https://app.example.com/cb"]))
            .await
            .unwrap();

        let payload = first.applications.created();
        assert_eq!(payload, second.applications.created());
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].callback_urls(), vec!["https://app.example.com/cb".to_string()]);
        assert_eq!(payload[0].allowed_origins(), vec!["https://app.example.com".to_string()]);
        assert_eq!(payload[0].template_id(), Some("react"));
    }

    #[tokio::test]
    async fn test_success_alerts_and_navigates() {
        let harness = TestHarness::new();
        harness.templates.insert(resolved("react"));
        harness.applications.respond_with(CreateApplicationResponse::with_location(
            "https://localhost:9443/api/server/v1/applications/42",
        ));
        let config = ConsoleConfig {
            client_secret_hash_enabled: true,
            ..ConsoleConfig::default()
        };
        let wizard =
            WizardController::new(config, harness.services(), spa_catalog_entry()).unwrap();
        wizard.open().await.unwrap();

        wizard.submit_general_form(general("Pickup")).await.unwrap();
        let outcome = wizard
            .submit_protocol_form(&callback_input(&[]))
            .await
            .unwrap()
            .unwrap();

        let expected = NavigationTarget {
            pathname: "/develop/applications/42".to_string(),
            search: Some("?state=new&isClientSecretHashEnabled=true".to_string()),
        };
        assert_eq!(outcome, SubmissionState::Succeeded { target: expected.clone() });
        assert_eq!(harness.navigator.pushed(), vec![expected]);

        let alerts = harness.notifications.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Success);
        assert_eq!(alerts[0].message, keys::add_application_success_message());

        // Template defaults kept when no callback URL was entered
        assert_eq!(
            harness.applications.created()[0].callback_urls(),
            vec!["https://localhost:5000".to_string()]
        );
    }

    #[tokio::test]
    async fn test_missing_location_navigates_to_list() {
        let harness = TestHarness::new();
        harness.templates.insert(resolved("react"));
        harness.applications.respond_with(CreateApplicationResponse::default());
        let wizard = controller(&harness, spa_catalog_entry());
        wizard.open().await.unwrap();

        wizard.submit_general_form(general("Pickup")).await.unwrap();
        wizard.submit_protocol_form(&callback_input(&[])).await.unwrap();

        assert_eq!(
            harness.navigator.pushed(),
            vec![NavigationTarget::path("/develop/applications")]
        );
    }

    #[tokio::test]
    async fn test_structured_failure_sets_inline_alert() {
        let harness = TestHarness::new();
        harness.templates.insert(resolved("react"));
        harness.applications.fail_create(
            ServiceError::new("conflict")
                .with_status(409)
                .with_description("Application with the same name already exists."),
        );
        let wizard = controller(&harness, spa_catalog_entry());
        wizard.open().await.unwrap();

        wizard.submit_general_form(general("Pickup")).await.unwrap();
        let outcome = wizard
            .submit_protocol_form(&callback_input(&[]))
            .await
            .unwrap()
            .unwrap();

        assert!(matches!(
            outcome,
            SubmissionState::Failed {
                classification: ErrorClassification::Structured(_)
            }
        ));
        let state = wizard.state().unwrap();
        let alert = state.alert.unwrap();
        assert_eq!(alert.message, keys::add_application_error_message());
        assert_eq!(alert.description, "Application with the same name already exists.");
        assert!(harness.navigator.pushed().is_empty());
        assert!(harness.notifications.alerts().is_empty());

        // Inputs were consumed; nothing fires until both forms are resubmitted
        assert_eq!(wizard.try_submit().await.unwrap(), None);
        assert_eq!(harness.applications.created().len(), 1);
    }

    #[tokio::test]
    async fn test_generic_failure_uses_generic_message() {
        let harness = TestHarness::new();
        harness.templates.insert(resolved("react"));
        harness.applications.fail_create(ServiceError::new("network error"));
        let wizard = controller(&harness, spa_catalog_entry());
        wizard.open().await.unwrap();

        wizard.submit_general_form(general("Pickup")).await.unwrap();
        wizard.submit_protocol_form(&callback_input(&[])).await.unwrap();

        let alert = wizard.state().unwrap().alert.unwrap();
        assert_eq!(alert.message, keys::add_application_generic_error_message());
        assert_eq!(alert.description, keys::add_application_generic_error_description());
    }

    #[tokio::test]
    async fn test_template_fetch_failure_blocks_submission() {
        let harness = TestHarness::new();
        harness
            .templates
            .fail_with(ServiceError::new("gone").with_description("Template not found"));
        let wizard = controller(&harness, spa_catalog_entry());

        let err = wizard.open().await.unwrap_err();
        assert!(matches!(err, ConsoleError::Remote { .. }));

        let alerts = harness.notifications.alerts();
        assert_eq!(alerts[0].message, keys::fetch_template_error_message());
        assert_eq!(alerts[0].description, "Template not found");

        assert_eq!(wizard.submit_general_form(general("Pickup")).await.unwrap(), None);
        let err = wizard
            .submit_protocol_form(&callback_input(&[]))
            .await
            .unwrap_err();
        assert!(matches!(err, ConsoleError::TemplateNotLoaded { .. }));
        assert!(harness.applications.created().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_name_blocks_before_network() {
        let harness = TestHarness::new();
        harness.templates.insert(resolved("react"));
        let wizard = controller(&harness, spa_catalog_entry());
        wizard.open().await.unwrap();

        let err = wizard.submit_general_form(general("a")).await.unwrap_err();

        assert!(matches!(
            err,
            ConsoleError::Validation {
                validation: NameValidation::Invalid,
                ..
            }
        ));
        assert_eq!(wizard.state().unwrap().name_validation, NameValidation::Invalid);
        assert!(harness.applications.list_filters().is_empty());
    }

    #[tokio::test]
    async fn test_saml_submission() {
        let harness = TestHarness::new();
        harness.templates.insert(saml_template());
        let wizard = controller(&harness, ApplicationTemplate {
            authentication_protocol: Some(SupportedAuthProtocol::Saml),
            ..ApplicationTemplate::new("saml-web")
        });
        wizard.open().await.unwrap();

        let mut input = ProtocolFormInput::new();
        input.insert(ProtocolField::Issuer, FieldValue::Text("travelocity.com".to_string()));
        input.insert(
            ProtocolField::AssertionConsumerUrls,
            FieldValue::List(vec!["https://sp.example.com/acs".to_string()]),
        );

        wizard.submit_protocol_form(&input).await.unwrap();
        wizard.submit_general_form(general("Travelocity")).await.unwrap();

        let payload = harness.applications.created().remove(0);
        assert_eq!(
            get_path(
                payload.as_value(),
                "inboundProtocolConfiguration.saml.manualConfiguration.issuer"
            ),
            Some(&json!("travelocity.com"))
        );
    }

    #[tokio::test]
    async fn test_not_reentrant_while_submitting() {
        let harness = TestHarness::new();
        harness.templates.insert(resolved("react"));
        let wizard = controller(&harness, spa_catalog_entry());
        wizard.open().await.unwrap();

        wizard
            .dispatch_all([
                WizardAction::SetGeneralValues(Some(general("Pickup"))),
                WizardAction::SetProtocolValues(Some(ProtocolFormValues::default())),
                WizardAction::SetSubmission(SubmissionState::Submitting),
            ])
            .unwrap();

        assert_eq!(wizard.try_submit().await.unwrap(), None);
        assert!(harness.applications.created().is_empty());
    }

    #[tokio::test]
    async fn test_close_while_create_in_flight() {
        let harness = TestHarness::new();
        harness.templates.insert(resolved("react"));
        harness.applications.delay_create(3);
        let wizard = controller(&harness, spa_catalog_entry());
        wizard.open().await.unwrap();
        wizard.submit_general_form(general("Pickup")).await.unwrap();
        let input = callback_input(&[]);

        let (outcome, _) = tokio::join!(
            wizard.submit_protocol_form(&input),
            async {
                tokio::task::yield_now().await;
                wizard.close();
            }
        );

        assert!(matches!(outcome, Err(ConsoleError::WizardClosed)));
        assert_eq!(harness.applications.created().len(), 1);
        assert!(harness.navigator.pushed().is_empty());
        assert!(harness.notifications.alerts().is_empty());
        assert!(wizard.state().is_none());
    }

    #[tokio::test]
    async fn test_reopen_while_create_in_flight_keeps_new_wizard_clean() {
        let harness = TestHarness::new();
        harness.templates.insert(resolved("react"));
        harness.applications.delay_create(3);
        let wizard = controller(&harness, spa_catalog_entry());
        wizard.open().await.unwrap();
        wizard.submit_general_form(general("Pickup")).await.unwrap();
        let input = callback_input(&[]);

        let (outcome, reopened) = tokio::join!(
            wizard.submit_protocol_form(&input),
            async {
                tokio::task::yield_now().await;
                wizard.close();
                wizard.open().await
            }
        );

        reopened.unwrap();
        assert!(matches!(outcome, Err(ConsoleError::WizardClosed)));
        assert_eq!(harness.applications.created().len(), 1);
        assert!(harness.navigator.pushed().is_empty());
        assert!(harness.notifications.alerts().is_empty());

        let state = wizard.state().unwrap();
        assert_eq!(state.submission, SubmissionState::Idle);
        assert_eq!(state.alert, None);
        assert_eq!(state.general_values, None);
    }

    #[tokio::test]
    async fn test_reopen_while_template_load_in_flight() {
        let harness = TestHarness::new();
        harness.templates.insert(resolved("react"));
        harness.templates.delay_fetch(2);
        let wizard = controller(&harness, spa_catalog_entry());

        let (first, second) = tokio::join!(wizard.open(), async {
            tokio::task::yield_now().await;
            wizard.close();
            wizard.open().await
        });

        assert!(matches!(first, Err(ConsoleError::WizardClosed)));
        second.unwrap();

        let state = wizard.state().unwrap();
        assert_eq!(state.template_settings, Some(resolved("react")));
        assert!(!state.is_loading_template);
        assert_eq!(harness.templates.requested().len(), 2);
    }

    #[tokio::test]
    async fn test_template_fetch_failure_without_description_uses_generic_alert() {
        let harness = TestHarness::new();
        harness.templates.fail_with(ServiceError::new("connection reset"));
        let wizard = controller(&harness, spa_catalog_entry());

        let err = wizard.open().await.unwrap_err();
        assert!(matches!(err, ConsoleError::Remote { .. }));

        let alerts = harness.notifications.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Error);
        assert_eq!(alerts[0].message, keys::fetch_template_generic_error_message());
        assert_eq!(alerts[0].description, keys::fetch_template_generic_error_description());
        assert_eq!(wizard.state().unwrap().template_settings, None);
    }

    #[tokio::test]
    async fn test_local_strategy_submits_catalog_defaults() {
        let harness = TestHarness::new();
        let config = ConsoleConfig {
            templates: TemplateConfig {
                loading_strategy: TemplateLoadingStrategy::Local,
                ..TemplateConfig::default()
            },
            ..ConsoleConfig::default()
        };
        let wizard = WizardController::new(config, harness.services(), resolved("web-app")).unwrap();

        wizard.open().await.unwrap();
        assert_eq!(wizard.state().unwrap().template_settings, Some(resolved("web-app")));

        wizard.submit_general_form(general("Pickup")).await.unwrap();
        let outcome = wizard.submit_protocol_form(&callback_input(&[])).await.unwrap();
        assert!(matches!(outcome, Some(SubmissionState::Succeeded { .. })));

        assert!(harness.templates.requested().is_empty());
        let payload = harness.applications.created().remove(0);
        assert_eq!(payload.template_id(), Some("web-app"));
        assert_eq!(payload.callback_urls(), vec!["https://localhost:5000".to_string()]);
        assert_eq!(
            get_path(
                payload.as_value(),
                "inboundProtocolConfiguration.oidc.publicClient"
            ),
            Some(&json!(true))
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let harness = TestHarness::new();
        let mut config = ConsoleConfig::default();
        config.application_name.pattern = "([".to_string();

        let result = WizardController::new(config, harness.services(), spa_catalog_entry());
        assert!(matches!(result, Err(ConsoleError::Configuration { .. })));
    }
}
