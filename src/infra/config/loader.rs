use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const APP_DIR_NAME: &str = "focus-groups";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let Some(config_path) = resolve_config_path(path) else {
        return Ok(AppConfig::default());
    };

    load_from(&config_path)
}

/// An explicit path wins; otherwise `./config.toml`, then the platform
/// config directory. `None` when nothing exists.
fn resolve_config_path(path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = path {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(DEFAULT_CONFIG_PATH);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(DEFAULT_CONFIG_PATH))
        .filter(|candidate| candidate.exists())
}

fn load_from(config_path: &Path) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.to_path_buf(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path.to_path_buf(),
        source,
    })?;

    file_config.merge_into(&mut config);

    if let Some(base_dir) = config_path.parent() {
        resolve_relative_paths(&mut config, base_dir);
    }

    Ok(config)
}

/// Paths inside a config file are relative to the file, not the cwd.
fn resolve_relative_paths(config: &mut AppConfig, base_dir: &Path) {
    for path in [&mut config.catalog.path, &mut config.logging.file]
        .into_iter()
        .flatten()
    {
        if path.is_relative() {
            *path = base_dir.join(&*path);
        }
    }
}
