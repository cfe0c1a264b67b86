//! Config file resolution and layering for the CLI.
//!
//! Precedence, lowest first: built-in defaults, the config file,
//! `SOAREP_*` environment variables, command-line flags.

use std::path::{Path, PathBuf};

use soarep_client::ClientConfig;

use crate::error::{Error, Result};

/// Directory name under the platform config dir.
pub const PROJECT_NAME: &str = "soarep";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Flag values that override the file and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--base-url`
    pub base_url: Option<String>,
    /// `--timeout`
    pub timeout_secs: Option<u64>,
}

/// Default config path, e.g. `~/.config/soarep/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE))
}

/// The explicit path if one was given, otherwise the default path.
pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(PathBuf::from(path)),
        None => default_config_path(),
    }
}

/// Read a config file. A missing file is only an error when it was named
/// explicitly; the default location may legitimately not exist.
pub fn load_file(explicit: Option<&str>) -> Result<ClientConfig> {
    let Some(path) = resolve_config_path(explicit) else {
        return Ok(ClientConfig::default());
    };

    if !path.exists() {
        if explicit.is_some() {
            return Err(Error::config(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(ClientConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<ClientConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let config = ClientConfig::from_toml_str(&content)
        .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Apply command-line overrides and re-validate.
pub fn apply_overrides(mut config: ClientConfig, overrides: &Overrides) -> Result<ClientConfig> {
    if let Some(url) = &overrides.base_url {
        config.base_url = url.clone();
    }
    if let Some(secs) = overrides.timeout_secs {
        config.timeout_secs = secs;
    }
    config.validate()?;
    Ok(config)
}

/// Build the effective configuration from every layer.
pub fn load(explicit: Option<&str>, overrides: &Overrides) -> Result<ClientConfig> {
    let config = load_file(explicit)?.with_env()?;
    apply_overrides(config, overrides)
}

/// Write a default config file, refusing to clobber one unless `force`.
pub fn init_file(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = ClientConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}
