//! Reading `config.toml`, and writing the commented default on first run.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::schema::NorthlightConfig;
use crate::validation;
use northlight_common::ConfigError;
use tracing::{info, warn};

use super::template::default_config_toml;

const APP_DIR: &str = "northlight";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/northlight/config.toml`.
///
/// On macOS: `~/Library/Application Support/northlight/config.toml`
/// On Linux: `~/.config/northlight/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))?;
    Ok(base.join(APP_DIR).join(FILE_NAME))
}

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. If the parsed config fails
/// validation, a warning is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<NorthlightConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: NorthlightConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(NorthlightConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `path`, first writing the commented template there if it is missing.
pub fn load_or_create(path: &Path) -> Result<NorthlightConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            write_template(path)?;
            load_from_path(path)
        }
        loaded => loaded,
    }
}

/// Load config from [`default_config_path`], creating it on first run.
pub fn load_default() -> Result<NorthlightConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}

/// Write the template without clobbering a file that appeared meanwhile.
fn write_template(path: &Path) -> Result<(), ConfigError> {
    let failed = |e: std::io::Error| {
        ConfigError::ParseError(format!("cannot write default config {}: {e}", path.display()))
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(failed)?;
    }
    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(failed(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(failed)?;

    info!("created default config at {}", path.display());
    Ok(())
}
