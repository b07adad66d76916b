//! Infrastructure layer: config, logging, clock and the group store.

pub mod catalog_file;
pub mod clock;
pub mod config;
pub mod contracts;
pub mod error;
pub mod logging;
pub mod seed;
pub mod store;
#[cfg(test)]
pub mod stubs;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
