use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A ready-made conditional authentication script
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveAuthTemplate {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Script source, one entry per line
    #[serde(default)]
    pub code: Vec<String>,
    #[serde(default)]
    pub help_link: Option<String>,
    /// Step, authenticator and parameter descriptions the editor shows
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AdaptiveAuthTemplate {
    pub fn script(&self) -> String {
        self.code.join("\n")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCategory {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub order: Option<i64>,
    /// Categories without a list are kept for indexing but never shown
    #[serde(default)]
    pub templates: Option<Vec<AdaptiveAuthTemplate>>,
}
