//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ApplicationError, CompletionOptions, DistributionService, EmailDeliveryPort, InferencePort,
    SummarizationService,
};
use infrastructure::{
    AppConfig, ChatCompletionsInferenceAdapter, CredentialsConfig, ResendEmailAdapter,
    TemplateEngine,
};
use tracing::{info, warn};

/// What the diagnostics endpoint may reveal about the completion key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CredentialReport {
    /// Whether a non-blank key is configured
    pub has_completion_key: bool,
    /// Character count of the key, 0 when absent
    pub completion_key_length: usize,
}

impl From<&CredentialsConfig> for CredentialReport {
    fn from(credentials: &CredentialsConfig) -> Self {
        Self {
            has_completion_key: credentials.completion_api_key().is_some(),
            completion_key_length: credentials.completion_key_length(),
        }
    }
}

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Transcript summarization
    pub summarization_service: Arc<SummarizationService>,
    /// Summary email distribution
    pub distribution_service: Arc<DistributionService>,
    /// Credential presence, for diagnostics
    pub credentials: CredentialReport,
}

impl AppState {
    /// Build the state from loaded configuration
    ///
    /// Provider adapters are only constructed when their credential is
    /// present; otherwise the matching service answers `Unconfigured`.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let inference: Option<Arc<dyn InferencePort>> =
            match config.credentials.completion_api_key() {
                Some(key) => Some(Arc::new(ChatCompletionsInferenceAdapter::new(
                    config.inference.clone(),
                    key.clone(),
                )?)),
                None => {
                    warn!("GROQ_API_KEY is not set; summarization is disabled");
                    None
                },
            };

        let delivery: Option<Arc<dyn EmailDeliveryPort>> =
            match config.credentials.email_api_key() {
                Some(key) => Some(Arc::new(ResendEmailAdapter::new(
                    config.email.to_resend_config(),
                    key.clone(),
                )?)),
                None => {
                    warn!("RESEND_API_KEY is not set; email distribution is disabled");
                    None
                },
            };

        let timezone = config
            .timezone()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        let distribution = DistributionService::new(
            delivery,
            config.credentials.email_from().map(str::to_string),
            Arc::new(TemplateEngine::new()?),
        )
        .with_timezone(timezone);

        info!(
            summarization = inference.is_some(),
            timezone = %timezone,
            "Services initialized"
        );

        let summarization = SummarizationService::new(inference).with_options(CompletionOptions {
            temperature: config.inference.temperature,
            max_tokens: config.inference.max_tokens,
        });

        Ok(Self {
            summarization_service: Arc::new(summarization),
            distribution_service: Arc::new(distribution),
            credentials: CredentialReport::from(&config.credentials),
        })
    }
}
