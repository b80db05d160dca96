use super::types::{AdaptiveAuthTemplate, TemplateCategory};

pub type TemplateSelectHandler = Box<dyn Fn(&AdaptiveAuthTemplate)>;

/// A category as the panel renders it, with its index in sorted order
#[derive(Debug, Clone, Copy)]
pub struct VisibleCategory<'a> {
    pub index: usize,
    pub category: &'a TemplateCategory,
    pub templates: &'a [AdaptiveAuthTemplate],
    pub is_active: bool,
}

/// Accordion side panel listing script templates by category
pub struct ScriptTemplatesPanel {
    title: Option<String>,
    categories: Vec<TemplateCategory>,
    active_indexes: Vec<usize>,
    visible: bool,
    read_only: bool,
    on_template_select: TemplateSelectHandler,
}

impl ScriptTemplatesPanel {
    /// Categories are sorted once, ascending by `order`. The sort is
    /// stable and categories without an order go last.
    pub fn new(mut categories: Vec<TemplateCategory>, on_template_select: TemplateSelectHandler) -> Self {
        categories.sort_by_key(|category| (category.order.is_none(), category.order));

        Self {
            title: None,
            categories,
            active_indexes: Vec::new(),
            visible: false,
            read_only: false,
            on_template_select,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_active_indexes(mut self, indexes: Vec<usize>) -> Self {
        self.active_indexes = indexes;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn categories(&self) -> &[TemplateCategory] {
        &self.categories
    }

    pub fn visible_categories(&self) -> Vec<VisibleCategory<'_>> {
        self.categories
            .iter()
            .enumerate()
            .filter_map(|(index, category)| {
                let templates = category.templates.as_deref()?;
                Some(VisibleCategory {
                    index,
                    category,
                    templates,
                    is_active: self.is_active(index),
                })
            })
            .collect()
    }

    pub fn active_indexes(&self) -> &[usize] {
        &self.active_indexes
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_indexes.contains(&index)
    }

    /// Expands a collapsed category or collapses an expanded one
    pub fn toggle(&mut self, index: usize) {
        match self.active_indexes.iter().position(|active| *active == index) {
            Some(position) => {
                self.active_indexes.remove(position);
            }
            None => self.active_indexes.push(index),
        }
    }

    /// Hands the template at the given position to the selection handler.
    /// Returns whether the handler ran.
    pub fn select(&self, category_index: usize, template_index: usize) -> bool {
        if self.read_only {
            crate::console_debug!("[ScriptTemplates] Panel is read-only, ignoring selection");
            return false;
        }

        let template = self
            .categories
            .get(category_index)
            .and_then(|category| category.templates.as_ref())
            .and_then(|templates| templates.get(template_index));

        match template {
            Some(template) => {
                crate::console_info!("[ScriptTemplates] Template selected: {}", template.name);
                (self.on_template_select)(template);
                true
            }
            None => {
                crate::console_warn!(
                    "[ScriptTemplates] No template at {}/{}",
                    category_index,
                    template_index
                );
                false
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}
