// Recording fakes for the wizard collaborators
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use super::types::{ApplicationCreationPayload, ApplicationTemplate};
use crate::services::client::*;
use crate::services::errors::ServiceError;
use crate::services::i18n::PassthroughTranslator;

pub struct FakeApplicationService {
    existing: RefCell<Vec<ApplicationListItem>>,
    list_error: RefCell<Option<ServiceError>>,
    list_filters: RefCell<Vec<String>>,
    create_result: RefCell<Result<CreateApplicationResponse, ServiceError>>,
    created: RefCell<Vec<ApplicationCreationPayload>>,
    create_yields: Cell<usize>,
}

impl Default for FakeApplicationService {
    fn default() -> Self {
        Self {
            existing: RefCell::new(Vec::new()),
            list_error: RefCell::new(None),
            list_filters: RefCell::new(Vec::new()),
            create_result: RefCell::new(Ok(CreateApplicationResponse::with_location(
                "https://localhost:9443/api/server/v1/applications/42",
            ))),
            created: RefCell::new(Vec::new()),
            create_yields: Cell::new(0),
        }
    }
}

impl FakeApplicationService {
    pub fn set_existing(&self, applications: Vec<ApplicationListItem>) {
        *self.existing.borrow_mut() = applications;
    }

    pub fn fail_list(&self, error: ServiceError) {
        *self.list_error.borrow_mut() = Some(error);
    }

    pub fn respond_with(&self, response: CreateApplicationResponse) {
        *self.create_result.borrow_mut() = Ok(response);
    }

    pub fn fail_create(&self, error: ServiceError) {
        *self.create_result.borrow_mut() = Err(error);
    }

    /// Make create suspend this many times before answering
    pub fn delay_create(&self, yields: usize) {
        self.create_yields.set(yields);
    }

    pub fn list_filters(&self) -> Vec<String> {
        self.list_filters.borrow().clone()
    }

    pub fn created(&self) -> Vec<ApplicationCreationPayload> {
        self.created.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ApplicationService for FakeApplicationService {
    async fn list_applications(
        &self,
        filter: &str,
    ) -> Result<ApplicationListResponse, ServiceError> {
        self.list_filters.borrow_mut().push(filter.to_string());

        if let Some(error) = self.list_error.borrow().clone() {
            return Err(error);
        }

        let name = filter.trim_start_matches("name eq ");
        let applications: Vec<ApplicationListItem> = self
            .existing
            .borrow()
            .iter()
            .filter(|app| app.name == name)
            .cloned()
            .collect();

        Ok(ApplicationListResponse {
            total_results: Some(applications.len() as u32),
            applications,
        })
    }

    async fn create_application(
        &self,
        payload: &ApplicationCreationPayload,
    ) -> Result<CreateApplicationResponse, ServiceError> {
        self.created.borrow_mut().push(payload.clone());

        for _ in 0..self.create_yields.get() {
            tokio::task::yield_now().await;
        }

        self.create_result.borrow().clone()
    }
}

#[derive(Default)]
pub struct FakeTemplateService {
    templates: RefCell<HashMap<String, ApplicationTemplate>>,
    error: RefCell<Option<ServiceError>>,
    requested: RefCell<Vec<String>>,
    fetch_yields: Cell<usize>,
}

impl FakeTemplateService {
    pub fn insert(&self, template: ApplicationTemplate) {
        self.templates
            .borrow_mut()
            .insert(template.id.clone(), template);
    }

    pub fn fail_with(&self, error: ServiceError) {
        *self.error.borrow_mut() = Some(error);
    }

    /// Make each fetch suspend this many times before answering
    pub fn delay_fetch(&self, yields: usize) {
        self.fetch_yields.set(yields);
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TemplateService for FakeTemplateService {
    async fn get_template_by_id(&self, id: &str) -> Result<ApplicationTemplate, ServiceError> {
        self.requested.borrow_mut().push(id.to_string());

        for _ in 0..self.fetch_yields.get() {
            tokio::task::yield_now().await;
        }

        if let Some(error) = self.error.borrow().clone() {
            return Err(error);
        }

        self.templates
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::new(format!("template {} not found", id)).with_status(404))
    }
}

#[derive(Default)]
pub struct FakeCorsService {
    origins: RefCell<Vec<CorsOrigin>>,
    error: RefCell<Option<ServiceError>>,
    calls: Cell<usize>,
}

impl FakeCorsService {
    pub fn set_origins(&self, urls: &[&str]) {
        *self.origins.borrow_mut() = urls
            .iter()
            .map(|url| CorsOrigin {
                id: None,
                url: url.to_string(),
            })
            .collect();
    }

    pub fn fail_with(&self, error: ServiceError) {
        *self.error.borrow_mut() = Some(error);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl CorsService for FakeCorsService {
    async fn get_cors_origins(&self) -> Result<Vec<CorsOrigin>, ServiceError> {
        self.calls.set(self.calls.get() + 1);

        if let Some(error) = self.error.borrow().clone() {
            return Err(error);
        }
        Ok(self.origins.borrow().clone())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pushed: RefCell<Vec<NavigationTarget>>,
}

impl RecordingNavigator {
    pub fn pushed(&self) -> Vec<NavigationTarget> {
        self.pushed.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, target: NavigationTarget) {
        self.pushed.borrow_mut().push(target);
    }
}

#[derive(Default)]
pub struct RecordingSink {
    alerts: RefCell<Vec<Alert>>,
}

impl RecordingSink {
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.borrow().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn add_alert(&self, alert: Alert) {
        self.alerts.borrow_mut().push(alert);
    }
}

/// Every fake, kept concrete so tests can script and inspect them
#[derive(Default)]
pub struct TestHarness {
    pub applications: Rc<FakeApplicationService>,
    pub templates: Rc<FakeTemplateService>,
    pub cors: Rc<FakeCorsService>,
    pub navigator: Rc<RecordingNavigator>,
    pub notifications: Rc<RecordingSink>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn services(&self) -> ConsoleServices {
        ConsoleServices {
            applications: self.applications.clone(),
            templates: self.templates.clone(),
            cors: self.cors.clone(),
            navigator: self.navigator.clone(),
            notifications: self.notifications.clone(),
            translator: Rc::new(PassthroughTranslator),
        }
    }
}
