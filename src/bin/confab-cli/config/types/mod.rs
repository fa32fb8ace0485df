mod app;
mod chat;
mod endpoint;
mod logging;
mod model;

const DEFAULT_REVEAL_DELAY_MS: u64 = 8;
const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

pub use app::AppConfig;
pub use chat::ChatConfig;
pub use endpoint::EndpointConfig;
pub use logging::LoggingConfig;
pub use model::ModelConfig;
