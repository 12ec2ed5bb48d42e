//! Dependency wiring from settings to adapters

use colored::Colorize;
use herald_application::{
    CompletionGateway, Publisher, SummarizeReleaseInput, SummarizeReleaseUseCase,
};
use herald_domain::Language;
use herald_infrastructure::{
    ConfigError, DiscordConfig, DiscordWebhook, HeraldSettings, OpenAiConfig, OpenAiGateway,
    XClient, XCredentials,
};
use herald_presentation::{ConsoleFormatter, ProgressReporter};
use std::sync::Arc;
use tracing::{debug, warn};

/// Settings plus constructors for every adapter
pub struct App {
    settings: HeraldSettings,
}

impl App {
    pub fn new(settings: HeraldSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &HeraldSettings {
        &self.settings
    }

    /// Language forced by configuration, if any
    pub fn language(&self) -> Option<Language> {
        self.settings.ai.language
    }

    pub fn gateway(&self) -> Result<OpenAiGateway, ConfigError> {
        let config = OpenAiConfig::from_settings(&self.settings.ai)?;
        Ok(OpenAiGateway::new(self.settings.http.build_client()?, config))
    }

    pub fn x_client(&self) -> Result<XClient, ConfigError> {
        let credentials = XCredentials::from_settings(&self.settings.x)?;
        Ok(XClient::new(self.settings.http.build_client()?, credentials))
    }

    pub fn discord(&self) -> Result<DiscordWebhook, ConfigError> {
        let config = DiscordConfig::from_settings(&self.settings.discord)?;
        Ok(DiscordWebhook::new(self.settings.http.build_client()?, config))
    }

    /// Publishers for every channel with usable credentials
    pub fn configured_publishers(&self) -> Vec<Arc<dyn Publisher>> {
        let mut publishers: Vec<Arc<dyn Publisher>> = Vec::new();
        match self.x_client() {
            Ok(x) => publishers.push(Arc::new(x)),
            Err(e) => note_unavailable("X", &e),
        }
        match self.discord() {
            Ok(discord) => publishers.push(Arc::new(discord)),
            Err(e) => note_unavailable("Discord", &e),
        }
        publishers
    }

    /// Gateway for optional summaries; `None` when AI is not configured
    pub fn optional_gateway(&self) -> Option<Arc<dyn CompletionGateway>> {
        match self.gateway() {
            Ok(gateway) => Some(Arc::new(gateway)),
            Err(e) => {
                println!("{} AI summary unavailable: {}", "⚠️ ".yellow(), e);
                None
            }
        }
    }

    /// Summary input carrying the configured model parameters
    pub fn summary_input(&self, notes: &str, language: Option<Language>) -> SummarizeReleaseInput {
        let mut input = SummarizeReleaseInput::new(notes)
            .with_language(language.or(self.language()))
            .with_max_tokens(self.settings.ai.max_tokens);
        if let Some(temperature) = self.settings.ai.temperature {
            input = input.with_temperature(temperature);
        }
        input
    }

    /// Best-effort model summary of `notes`.
    ///
    /// Prints why when no summary could be produced; callers pick their own
    /// replacement text.
    pub async fn try_summary(&self, notes: &str) -> Option<String> {
        let gateway = match self.gateway() {
            Ok(gateway) => gateway,
            Err(e) => {
                println!("{} AI summary failed: {}", "⚠️ ".yellow(), e);
                return None;
            }
        };

        let use_case = SummarizeReleaseUseCase::new(Arc::new(gateway));
        let progress = ProgressReporter::new();
        progress.start_spinner(format!("🤖 Generating AI summary... (model: {})", use_case.model()));
        let result = use_case.execute(&self.summary_input(notes, None)).await;
        progress.finish_spinner();

        match result {
            Ok(output) => {
                println!("{}\n", ConsoleFormatter::summary(&output));
                Some(output.summary)
            }
            Err(e) => {
                println!("{} AI summary failed: {}", "⚠️ ".yellow(), e);
                None
            }
        }
    }
}

fn note_unavailable(channel: &str, error: &ConfigError) {
    if error.is_missing() {
        debug!("{} not configured: {}", channel, error);
    } else {
        warn!("{} disabled: {}", channel, error);
    }
}

/// Setup steps for a configuration error, when the user can act on one
pub fn config_help(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::MissingApiKey | ConfigError::InvalidApiKey => Some(
            "Set OPENAI_API_KEY (or OPENROUTER_API_KEY) in .env:\n   1. Open https://platform.openai.com/api-keys\n   2. Click \"Create new secret key\"\n   3. Paste the key into .env",
        ),
        ConfigError::MissingWebhookUrl | ConfigError::InvalidWebhookUrl(_) => Some(
            "Set DISCORD_WEBHOOK_URL in .env:\n   1. Server settings -> Integrations -> Webhooks\n   2. Create a new webhook\n   3. Copy the webhook URL into .env",
        ),
        ConfigError::MissingXCredentials(_) => Some(
            "Set X_API_KEY, X_API_SECRET, X_ACCESS_TOKEN and X_ACCESS_SECRET in .env\n   (X developer portal -> your app -> Keys and tokens)",
        ),
        _ => None,
    }
}
