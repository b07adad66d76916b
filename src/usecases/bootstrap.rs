use std::path::Path;

use crate::{
    infra::{
        self,
        catalog_file::load_catalog,
        clock::SystemClock,
        config::{AppConfig, CatalogConfig, FileConfigAdapter},
        contracts::ConfigAdapter,
        error::AppError,
        logging::LogOutput,
        seed::seed_entries,
        store::InMemoryGroupStore,
    },
    usecases::{context::AppContext, contracts::Clock},
};

pub fn bootstrap(
    config_path: Option<&Path>,
    log_output: LogOutput,
) -> Result<AppContext, AppError> {
    let config = load_config(config_path)?;
    infra::logging::init(&config.logging, log_output)?;

    let context = build_context(config, SystemClock)?;
    tracing::debug!(
        groups = context.store.len(),
        catalog = ?context.config.catalog.path,
        "application context ready"
    );

    Ok(context)
}

fn load_config(config_path: Option<&Path>) -> Result<AppConfig, AppError> {
    FileConfigAdapter::new(config_path).load().map_err(AppError::Other)
}

fn build_context<C: Clock>(config: AppConfig, clock: C) -> Result<AppContext<C>, AppError> {
    let store = build_store(&config.catalog, clock.now_unix_ms())?;

    Ok(AppContext::new(config, store, clock))
}

/// The configured catalog file, or the built-in catalog.
fn build_store(
    catalog: &CatalogConfig,
    seeded_at_ms: i64,
) -> Result<InMemoryGroupStore, AppError> {
    match &catalog.path {
        Some(path) => load_catalog(path, seeded_at_ms),
        None => Ok(InMemoryGroupStore::from_entries(seed_entries(seeded_at_ms))?),
    }
}
