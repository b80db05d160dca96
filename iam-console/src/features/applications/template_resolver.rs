use lru::LruCache;
use std::num::NonZeroUsize;
use std::rc::Rc;
use std::sync::Mutex;
use tracing::instrument;

use super::types::ApplicationTemplate;
use crate::services::client::TemplateService;
use crate::services::config::{TemplateConfig, TemplateLoadingStrategy};
use crate::services::errors::{ConsoleError, ConsoleResult};

/// Turns a catalog template into one carrying full default settings
pub struct TemplateResolver {
    service: Rc<dyn TemplateService>,
    strategy: TemplateLoadingStrategy,
    custom_template_id: String,
    cache: Option<Mutex<LruCache<String, ApplicationTemplate>>>,
}

impl TemplateResolver {
    pub fn new(service: Rc<dyn TemplateService>, config: &TemplateConfig) -> Self {
        Self {
            service,
            strategy: config.loading_strategy,
            custom_template_id: config.custom_template_id.clone(),
            cache: NonZeroUsize::new(config.cache_capacity)
                .map(|capacity| Mutex::new(LruCache::new(capacity))),
        }
    }

    /// The expert-mode template has no server-side defaults
    pub fn is_custom(&self, template: &ApplicationTemplate) -> bool {
        template.id == self.custom_template_id
    }

    #[instrument(skip(self, template), fields(template_id = %template.id), err)]
    pub async fn resolve(&self, template: &ApplicationTemplate) -> ConsoleResult<ApplicationTemplate> {
        if self.is_custom(template) {
            crate::console_info!("[TemplateResolver] Custom template, skipping resolution");
            return Ok(template.clone());
        }

        match self.strategy {
            TemplateLoadingStrategy::Local => Ok(template.clone()),
            TemplateLoadingStrategy::Remote => {
                if let Some(cached) = self.check_cache(&template.id) {
                    crate::console_info!("[TemplateResolver] Cache hit for {}", template.id);
                    return Ok(cached);
                }

                let resolved = self
                    .service
                    .get_template_by_id(&template.id)
                    .await
                    .map_err(|e| {
                        crate::console_warn!(
                            "[TemplateResolver] Fetch failed for {}: {}",
                            template.id,
                            e
                        );
                        ConsoleError::remote("fetch template", e)
                    })?;

                self.store(&template.id, &resolved);
                Ok(resolved)
            }
        }
    }

    fn check_cache(&self, id: &str) -> Option<ApplicationTemplate> {
        let cache = self.cache.as_ref()?;
        if let Ok(mut cache) = cache.lock() {
            return cache.get(id).cloned();
        }
        None
    }

    fn store(&self, id: &str, template: &ApplicationTemplate) {
        if let Some(cache) = &self.cache {
            if let Ok(mut cache) = cache.lock() {
                cache.put(id.to_string(), template.clone());
            }
        }
    }
}
