use serde::{Deserialize, Serialize};

/// Application summary returned by the list endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub access_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListResponse {
    #[serde(default)]
    pub total_results: Option<u32>,
    #[serde(default)]
    pub applications: Vec<ApplicationListItem>,
}

/// What the create call hands back. The new resource is only referenced
/// through the `Location` header.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CreateApplicationResponse {
    pub location: Option<String>,
}

impl CreateApplicationResponse {
    pub fn with_location(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
        }
    }

    /// Id of the created application: the last path segment of the
    /// location reference, if there is a non-empty one.
    pub fn created_id(&self) -> Option<&str> {
        let location = self.location.as_deref()?.trim();
        let id = match location.rfind('/') {
            Some(index) => &location[index + 1..],
            None => location,
        };
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }
}

/// Tenant-wide allowed CORS origin
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CorsOrigin {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
}

/// Where the UI should go next
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub pathname: String,
    /// Query string including the leading `?`
    pub search: Option<String>,
}

impl NavigationTarget {
    pub fn path(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: None,
        }
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.search
            .as_deref()?
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn to_url(&self) -> String {
        match &self.search {
            Some(search) => format!("{}{}", self.pathname, search),
            None => self.pathname.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A user-facing notification
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub description: String,
}

impl Alert {
    pub fn success(message: String, description: String) -> Self {
        Self {
            level: AlertLevel::Success,
            message,
            description,
        }
    }

    pub fn error(message: String, description: String) -> Self {
        Self {
            level: AlertLevel::Error,
            message,
            description,
        }
    }
}
