use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}
