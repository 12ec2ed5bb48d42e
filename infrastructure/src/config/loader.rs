//! Settings loader with multi-source merging

use super::{ConfigError, HeraldSettings};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variables and the settings keys they fill
pub const ENV_KEYS: &[(&str, &str)] = &[
    ("AI_PROVIDER", "ai.provider"),
    ("OPENAI_API_KEY", "ai.openai_api_key"),
    ("OPENROUTER_API_KEY", "ai.openrouter_api_key"),
    ("OPENROUTER_BASE_URL", "ai.openrouter_base_url"),
    ("OPENAI_MODEL", "ai.openai_model"),
    ("OPENROUTER_MODEL", "ai.openrouter_model"),
    ("HERALD_MAX_TOKENS", "ai.max_tokens"),
    ("HERALD_LANGUAGE", "ai.language"),
    ("DISCORD_WEBHOOK_URL", "discord.webhook_url"),
    ("X_API_KEY", "x.api_key"),
    ("X_API_SECRET", "x.api_secret"),
    ("X_ACCESS_TOKEN", "x.access_token"),
    ("X_ACCESS_SECRET", "x.access_secret"),
    ("HERALD_TIMEOUT_SECONDS", "http.timeout_seconds"),
];

const PROJECT_FILES: [&str; 2] = ["herald.toml", ".herald.toml"];

/// Settings loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `.env` from the working directory into the process environment.
    ///
    /// Variables that are already set win. Returns the file that was loaded.
    pub fn load_dotenv() -> Option<PathBuf> {
        match dotenvy::dotenv() {
            Ok(path) => {
                debug!("Loaded environment from {}", path.display());
                Some(path)
            }
            Err(e) if e.not_found() => None,
            Err(e) => {
                debug!("Ignoring unreadable .env: {}", e);
                None
            }
        }
    }

    /// Load settings from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables listed in [`ENV_KEYS`]
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./herald.toml` or `./.herald.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/release-herald/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<HeraldSettings, ConfigError> {
        Self::figment(config_path)
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(HeraldSettings::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Using global config {}", global_path.display());
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(path) = Self::project_config_path() {
            debug!("Using project config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::raw().filter_map(|key| settings_key(key.as_str()).map(Into::into)))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("release-herald").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}

/// Settings key for an environment variable name
fn settings_key(env_name: &str) -> Option<&'static str> {
    ENV_KEYS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(env_name))
        .map(|(_, key)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use herald_domain::Language;

    #[test]
    fn test_settings_key() {
        assert_eq!(settings_key("OPENAI_API_KEY"), Some("ai.openai_api_key"));
        assert_eq!(settings_key("X_ACCESS_SECRET"), Some("x.access_secret"));
        assert_eq!(settings_key("HOME"), None);
    }

    #[test]
    fn test_global_config_path_names_app() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some_and(|p| p.to_string_lossy().contains("release-herald")));
    }

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let settings = ConfigLoader::load(None).unwrap();
            assert_eq!(settings.http.timeout_seconds, 60);
            assert!(settings.ai.openai_api_key.is_none());
            assert!(settings.x.api_key.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "herald.toml",
                r#"
                [ai]
                openai_model = "gpt-4o-mini"
                max_tokens = 300

                [discord]
                webhook_url = "https://discord.com/api/webhooks/file"
                footer = "Nightly"
                "#,
            )?;
            jail.set_env("DISCORD_WEBHOOK_URL", "https://discord.com/api/webhooks/env");
            jail.set_env("X_API_KEY", "consumer");
            jail.set_env("HERALD_LANGUAGE", "ja");

            let settings = ConfigLoader::load(None).unwrap();
            assert_eq!(settings.ai.openai_model.as_deref(), Some("gpt-4o-mini"));
            assert_eq!(settings.ai.max_tokens, Some(300));
            assert_eq!(settings.ai.language, Some(Language::Japanese));
            assert_eq!(
                settings.discord.webhook_url.as_deref(),
                Some("https://discord.com/api/webhooks/env")
            );
            assert_eq!(settings.discord.footer.as_deref(), Some("Nightly"));
            assert_eq!(settings.x.api_key.as_deref(), Some("consumer"));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".herald.toml", "[http]\ntimeout_seconds = 10\n")?;
            jail.create_file("custom.toml", "[http]\ntimeout_seconds = 5\n")?;

            let settings = ConfigLoader::load(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(settings.http.timeout_seconds, 5);
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_a_load_error() {
        Jail::expect_with(|jail| {
            jail.create_file("herald.toml", "[http]\ntimeout_seconds = \"soon\"\n")?;

            let err = ConfigLoader::load(None).unwrap_err();
            assert!(matches!(err, ConfigError::Load(_)));
            Ok(())
        });
    }
}
