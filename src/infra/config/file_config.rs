use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, CatalogConfig, LogConfig, UiConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub catalog: Option<FileCatalogConfig>,
    pub ui: Option<FileUiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(catalog) = self.catalog {
            catalog.merge_into(&mut config.catalog);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileCatalogConfig {
    pub path: Option<PathBuf>,
}

impl FileCatalogConfig {
    fn merge_into(self, config: &mut CatalogConfig) {
        if let Some(path) = self.path {
            config.path = Some(path);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub tick_rate_ms: Option<u64>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(tick_rate_ms) = self.tick_rate_ms {
            // A zero poll timeout would spin the event loop.
            config.tick_rate_ms = tick_rate_ms.max(1);
        }
    }
}
