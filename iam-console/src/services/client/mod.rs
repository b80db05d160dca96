// Collaborators the console logic talks to.
//
// Transport, session handling and the catalog data live behind these
// traits; the host wires in real implementations, tests wire in fakes.

pub mod types;

use std::rc::Rc;

use async_trait::async_trait;

use crate::features::applications::{ApplicationCreationPayload, ApplicationTemplate};
use crate::services::errors::ServiceError;
use crate::services::i18n::Translator;

pub use types::{
    Alert, AlertLevel, ApplicationListItem, ApplicationListResponse, CorsOrigin,
    CreateApplicationResponse, NavigationTarget,
};

/// Application CRUD used by the creation wizard
#[async_trait(?Send)]
pub trait ApplicationService {
    /// List applications matching a filter expression such as `name eq demo`
    async fn list_applications(&self, filter: &str)
        -> Result<ApplicationListResponse, ServiceError>;

    async fn create_application(
        &self,
        payload: &ApplicationCreationPayload,
    ) -> Result<CreateApplicationResponse, ServiceError>;
}

/// Source of fully populated application templates
#[async_trait(?Send)]
pub trait TemplateService {
    async fn get_template_by_id(&self, id: &str) -> Result<ApplicationTemplate, ServiceError>;
}

/// Tenant CORS configuration
#[async_trait(?Send)]
pub trait CorsService {
    async fn get_cors_origins(&self) -> Result<Vec<CorsOrigin>, ServiceError>;
}

/// Router seam; pushes a new location onto the history stack
pub trait Navigator {
    fn push(&self, target: NavigationTarget);
}

/// Application-wide notification area (outside the wizard)
pub trait NotificationSink {
    fn add_alert(&self, alert: Alert);
}

/// Convenience bundle of every collaborator the wizard needs
#[derive(Clone)]
pub struct ConsoleServices {
    pub applications: Rc<dyn ApplicationService>,
    pub templates: Rc<dyn TemplateService>,
    pub cors: Rc<dyn CorsService>,
    pub navigator: Rc<dyn Navigator>,
    pub notifications: Rc<dyn NotificationSink>,
    pub translator: Rc<dyn Translator>,
}
