//! Configuration loading for release-herald
//!
//! Settings are merged from several sources. The priority order (highest to
//! lowest):
//!
//! 1. Environment variables (a `.env` file in the working directory is loaded
//!    first and never overrides variables that are already set)
//! 2. `--config <path>` specified file
//! 3. Project root: `./herald.toml` or `./.herald.toml`
//! 4. Global: `$XDG_CONFIG_HOME/release-herald/config.toml`
//! 5. Default values
//!
//! Loading never fails because a credential is missing. Validation happens
//! when a client configuration is built from the settings, so a command only
//! fails for the integrations it actually uses.

mod error;
mod loader;
mod settings;

pub use error::ConfigError;
pub use loader::{ConfigLoader, ENV_KEYS};
pub use settings::{AiSettings, DiscordSettings, HeraldSettings, HttpSettings, XSettings};
pub(crate) use settings::non_blank;
