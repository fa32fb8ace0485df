use super::entry::ModelInfo;

const BUILTIN_MODELS: &[(&str, &str)] = &[
    ("DeepSeek V3", "deepseek/deepseek-chat-v3-0324"),
    ("Mistral 7B", "mistralai/mistral-7b-instruct:free"),
    ("Grok 3 Mini", "x-ai/grok-3-mini"),
    ("Llama 3 70B", "meta-llama/llama-3.3-70b-instruct"),
];

/// Ordered catalog of selectable models. The first entry is the default.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    models: Vec<ModelInfo>,
}

impl ModelCatalog {
    pub fn builtin() -> Self {
        let models = BUILTIN_MODELS
            .iter()
            .map(|(label, id)| ModelInfo::new(*label, *id))
            .collect();
        Self { models }
    }

    /// Uses `models` when non-empty, otherwise the built-in catalog.
    pub fn from_entries(models: Vec<ModelInfo>) -> Self {
        if models.is_empty() {
            Self::builtin()
        } else {
            Self { models }
        }
    }

    pub fn list(&self) -> &[ModelInfo] {
        &self.models
    }

    pub fn default_model(&self) -> Option<&ModelInfo> {
        self.models.first()
    }

    /// Finds a model by label (case-insensitive) or by backend id.
    pub fn resolve(&self, query: &str) -> Option<&ModelInfo> {
        let query = query.trim();
        self.models
            .iter()
            .find(|m| m.id == query)
            .or_else(|| {
                self.models
                    .iter()
                    .find(|m| m.label.eq_ignore_ascii_case(query))
            })
    }

    pub fn label_for(&self, id: &str) -> Option<&str> {
        self.models
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.label.as_str())
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
