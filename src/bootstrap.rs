use crate::config::Config;
use crate::domain::errors::DomainResult;
use crate::infrastructure::workers::countdown_worker::{CountdownHandle, CountdownWorker};
use crate::services::metadata::MetadataService;
use crate::services::registry::HolidayRegistry;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<HolidayRegistry>,
    pub metadata: Arc<MetadataService>,
    /// One refresh worker per holiday; the handles cancel their timers
    /// when this map is dropped.
    pub countdowns: Arc<HashMap<String, CountdownHandle>>,
}

pub fn build_app_state(config: Config) -> DomainResult<AppState> {
    let registry = HolidayRegistry::built_in()?;
    let metadata = MetadataService::new(&config);

    let mut countdowns = HashMap::new();
    for holiday in registry.iter() {
        let handle = CountdownWorker::new(holiday.clone(), config.timezone).start();
        countdowns.insert(holiday.slug.clone(), handle);
    }
    tracing::info!("Countdown workers initialized");

    Ok(AppState {
        config: Arc::new(config),
        registry: Arc::new(registry),
        metadata: Arc::new(metadata),
        countdowns: Arc::new(countdowns),
    })
}
