use std::time::Duration;

use anyhow::anyhow;
use secrecy::SecretString;

use confab::backends::OpenRouter;
use confab::chat::{GenerationParams, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use confab::model::{ModelCatalog, ModelInfo};
use confab::session::{SessionContext, SessionController, DEFAULT_SYSTEM_PROMPT};

use crate::args::CliArgs;
use crate::config::AppConfig;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Session context plus the controller that drives it.
pub struct SessionSetup {
    pub ctx: SessionContext,
    pub controller: SessionController<OpenRouter>,
    pub reveal_delay: Duration,
}

impl SessionSetup {
    pub fn from_args(args: &CliArgs, config: &AppConfig) -> anyhow::Result<Self> {
        let catalog = build_catalog(config);
        let params = GenerationParams::new(
            args.max_tokens
                .or(config.chat.max_tokens)
                .unwrap_or(DEFAULT_MAX_TOKENS),
            args.temperature
                .or(config.chat.temperature)
                .unwrap_or(DEFAULT_TEMPERATURE),
        )?;
        let system_prompt = args
            .system
            .clone()
            .or_else(|| config.chat.system_prompt.clone())
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());
        let api_key = resolve_api_key(
            args.api_key.as_deref(),
            std::env::var(API_KEY_ENV).ok().as_deref(),
            config.openrouter.api_key.as_deref(),
        );
        if api_key.is_empty() {
            log::warn!("no API key configured, completions will fail until one is set");
        }

        let model = initial_model(
            &catalog,
            args.model.as_deref().or(config.default_model.as_deref()),
        )?;
        let client = OpenRouter::new(
            args.base_url
                .clone()
                .or_else(|| config.openrouter.base_url.clone()),
            args.timeout.or(config.chat.timeout_seconds),
        )?;

        let mut ctx = SessionContext::new(system_prompt, catalog, SecretString::new(api_key))
            .with_params(params);
        let controller = SessionController::new(client);
        controller.select_model(&mut ctx, &model.id);

        Ok(Self {
            ctx,
            controller,
            reveal_delay: Duration::from_millis(config.chat.reveal_delay_ms),
        })
    }
}

pub fn build_catalog(config: &AppConfig) -> ModelCatalog {
    ModelCatalog::from_entries(config.models.iter().map(ModelInfo::from).collect())
}

/// First non-blank key among flag, environment and config file.
fn resolve_api_key(flag: Option<&str>, env: Option<&str>, config: Option<&str>) -> String {
    [flag, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn initial_model(catalog: &ModelCatalog, requested: Option<&str>) -> anyhow::Result<ModelInfo> {
    let found = match requested {
        Some(query) => catalog
            .resolve(query)
            .ok_or_else(|| anyhow!("unknown model '{query}', see `confab models`"))?,
        None => catalog
            .default_model()
            .ok_or_else(|| anyhow!("model catalog is empty"))?,
    };
    Ok(found.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_env_beats_config() {
        assert_eq!(resolve_api_key(Some("a"), Some("b"), Some("c")), "a");
        assert_eq!(resolve_api_key(None, Some("b"), Some("c")), "b");
        assert_eq!(resolve_api_key(Some("  "), None, Some("c")), "c");
        assert_eq!(resolve_api_key(None, None, None), "");
    }

    #[test]
    fn initial_model_defaults_to_first_entry() {
        let catalog = ModelCatalog::builtin();
        let model = initial_model(&catalog, None).unwrap();
        assert_eq!(model.label, "DeepSeek V3");
        let model = initial_model(&catalog, Some("Mistral 7B")).unwrap();
        assert_eq!(model.id, "mistralai/mistral-7b-instruct:free");
        assert!(initial_model(&catalog, Some("nope")).is_err());
    }

    #[test]
    fn invalid_params_abort_setup() {
        let args = CliArgs {
            max_tokens: Some(10),
            ..CliArgs::default()
        };
        assert!(SessionSetup::from_args(&args, &AppConfig::default()).is_err());
    }

    #[test]
    fn setup_selects_requested_model_without_regeneration() {
        let args = CliArgs {
            model: Some("Grok 3 Mini".to_string()),
            api_key: Some("sk-or-test".to_string()),
            ..CliArgs::default()
        };
        let setup = SessionSetup::from_args(&args, &AppConfig::default()).unwrap();
        assert_eq!(setup.ctx.active_model(), Some("x-ai/grok-3-mini"));
        assert_eq!(setup.ctx.pending_control(), None);
        assert_eq!(setup.reveal_delay, Duration::from_millis(8));
    }
}
