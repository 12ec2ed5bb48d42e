//! OAuth 1.0a user-context credentials

use crate::config::{ConfigError, XSettings, non_blank};
use std::fmt;

/// The four secrets needed to post on behalf of a user
#[derive(Clone, PartialEq, Eq)]
pub struct XCredentials {
    pub api_key: String,
    pub api_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

impl fmt::Debug for XCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("access_secret", &"<redacted>")
            .finish()
    }
}

impl XCredentials {
    /// Build credentials, naming every missing variable in the error
    pub fn from_settings(settings: &XSettings) -> Result<Self, ConfigError> {
        let fields = [
            ("X_API_KEY", non_blank(&settings.api_key)),
            ("X_API_SECRET", non_blank(&settings.api_secret)),
            ("X_ACCESS_TOKEN", non_blank(&settings.access_token)),
            ("X_ACCESS_SECRET", non_blank(&settings.access_secret)),
        ];

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingXCredentials(missing));
        }

        let [api_key, api_secret, access_token, access_secret] =
            fields.map(|(_, value)| value.unwrap_or_default().to_string());
        Ok(Self {
            api_key,
            api_secret,
            access_token,
            access_secret,
        })
    }
}
