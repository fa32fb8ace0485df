use serde::Deserialize;

use confab::model::ModelInfo;

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub label: String,
    pub id: String,
}

impl From<&ModelConfig> for ModelInfo {
    fn from(cfg: &ModelConfig) -> Self {
        ModelInfo::new(cfg.label.clone(), cfg.id.clone())
    }
}
