//! Configuration management
//!
//! Global feature flags consumed by the shell. The web target runs with
//! defaults; the server target layers a config file and `PORTAL_*`
//! environment variables on top.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "booking-portal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Disables the authentication gate entirely
    #[serde(default)]
    pub demo_mode: bool,

    /// Mounts the color switcher widget
    #[serde(default = "default_multi_color_active")]
    pub multi_color_active: bool,

    /// Locale key used when nothing is persisted or the key is unknown
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Automatic attempts per view load before manual retry is required
    #[serde(default = "default_view_load_attempts")]
    pub view_load_attempts: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            demo_mode: false,
            multi_color_active: default_multi_color_active(),
            default_locale: default_locale(),
            view_load_attempts: default_view_load_attempts(),
        }
    }
}

fn default_multi_color_active() -> bool {
    true
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_view_load_attempts() -> u32 {
    2
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(feature = "server")]
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("view_load_attempts must be at least 1")]
    NoLoadAttempts,
}

impl ShellConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.view_load_attempts == 0 {
            return Err(ConfigError::NoLoadAttempts);
        }
        Ok(self)
    }
}

/// Directory holding `config.toml` / `config.json`.
///
/// `PORTAL_CONFIG_DIR` wins; then `$XDG_CONFIG_HOME/booking-portal`, then
/// `~/.config/booking-portal`, then the working directory.
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = env::var_os("PORTAL_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|base| base.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(feature = "server")]
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    let config_dir = get_config_dir();
    let defaults = ShellConfig::default();

    let config = ::config::Config::builder()
        .set_default("demo_mode", defaults.demo_mode)?
        .set_default("multi_color_active", defaults.multi_color_active)?
        .set_default("default_locale", defaults.default_locale)?
        .set_default("view_load_attempts", defaults.view_load_attempts as i64)?
        // config.toml / config.json in the config dir, if present
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // PORTAL_DEMO_MODE, PORTAL_DEFAULT_LOCALE, ...
        .add_source(
            ::config::Environment::with_prefix("PORTAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let shell: ShellConfig = config.try_deserialize()?;
    shell.validate()
}
