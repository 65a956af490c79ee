use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `CODR__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "CODR";
/// Config file stem used when no path is given (`site.toml`, `site.yaml`, ...).
pub const DEFAULT_CONFIG: &str = "site";

#[codr_derive::codr_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a layered configuration: a required file, then `CODR__` environment overrides.
///
/// Nested keys use a double underscore: `CODR__FEATURES__SHOW_HEADER_LINKS=true` sets
/// `features.show_header_links`. When `path` has no extension every format the
/// `config` crate knows is tried.
///
/// # Errors
/// Fails when the file is missing or the merged values don't fit `T`.
///
/// # Example
/// ```rust,no_run
/// use codr_kernel::config::load_config;
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
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());
    info!("Loading config from {}", path.display());

    Config::builder()
        .add_source(File::from(path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        )
        .build()
        .context(format!("reading {}", path.display()))?
        .try_deserialize::<T>()
        .context("deserializing site config")
}
