// Records exchanged with the creator registry. Identifiers are kept as
// `serde_json::Value` since the service decides their type; we only ever
// echo them back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A creator as returned by `/ws/v1/rest/creator/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Creator {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
}

/// A video nested under a creator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Video {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Value,
}

/// Body of create/replace/update requests.
#[derive(Serialize, Debug)]
pub struct CreatorName<'a> {
    pub name: &'a str,
}

/// Render an opaque field the way it reads in a terminal: strings without
/// quotes, `None` for missing values.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "None".into(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn display_text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

impl Creator {
    pub fn display_id(&self) -> String {
        display_value(&self.id)
    }

    pub fn display_name(&self) -> &str {
        display_text(&self.name)
    }
}

impl Video {
    pub fn summary(&self) -> String {
        format!(
            "Video - ID: {}, Name: {}, Description: {}, Duration: {}",
            display_value(&self.id),
            display_text(&self.name),
            display_text(&self.description),
            display_value(&self.duration),
        )
    }
}
