use crate::{
    infra::{clock::SystemClock, config::AppConfig, store::InMemoryGroupStore},
    usecases::contracts::Clock,
};

/// Everything a screen needs: configuration, the catalog and a clock.
#[derive(Debug)]
pub struct AppContext<C: Clock = SystemClock> {
    pub config: AppConfig,
    pub store: InMemoryGroupStore,
    pub clock: C,
}

impl<C: Clock> AppContext<C> {
    pub fn new(config: AppConfig, store: InMemoryGroupStore, clock: C) -> Self {
        Self {
            config,
            store,
            clock,
        }
    }
}
