use serde::{Deserialize, Serialize};

/// A selectable model: display label plus backend identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub label: String,
    pub id: String,
}

impl ModelInfo {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }
}
