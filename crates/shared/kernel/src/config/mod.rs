use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `FREIGHT__DATABASE__URL`.
pub const ENV_PREFIX: &str = "FREIGHT";

#[freight_derive::freight_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays environment overrides on top of it.
///
/// 1. **Base file**: `path` (any format the `config` crate detects from the extension;
///    extensionless paths are probed). Defaults to `freight` in the working directory.
/// 2. **Environment**: variables prefixed with `FREIGHT__`, nested keys separated by
///    `__` (`FREIGHT__BUSINESS__CURRENCY` maps to `business.currency`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or the merged values do not
/// deserialize into `T`.
///
/// # Example
/// ```rust
/// use freight_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     port: u16,
/// }
///
/// let cfg: Settings = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with(path, env_overrides())
}

/// The `FREIGHT__`-prefixed environment source used by [`load_config`].
///
/// Exposed so callers can feed it an explicit variable map via
/// [`Environment::source`] instead of the process environment.
#[must_use]
pub fn env_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

/// [`load_config`] with a caller-supplied environment layer.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_with<T>(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("freight"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(environment);

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
