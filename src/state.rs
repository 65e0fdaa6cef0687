//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El core es stateless entre llamadas
//! salvo por el cache de lecturas que viaja dentro de los repositorios.

use std::sync::Arc;

use crate::cache::{CacheConfig, TableCache};
use crate::config::environment::EnvironmentConfig;
use crate::repositories::{ProviderRepository, ServiceRepository, VehicleRepository};
use crate::services::ReportService;
use crate::store::TableStore;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicles: Arc<VehicleRepository>,
    pub providers: Arc<ProviderRepository>,
    pub services: Arc<ServiceRepository>,
    pub reports: Arc<ReportService>,
}

impl AppState {
    pub fn new(store: Arc<dyn TableStore>, config: EnvironmentConfig) -> Self {
        let cache = Arc::new(TableCache::new(
            store,
            CacheConfig {
                ttl_seconds: config.cache_ttl_seconds,
            },
        ));

        let vehicles = Arc::new(VehicleRepository::new(cache.clone()));
        let providers = Arc::new(ProviderRepository::new(cache.clone()));
        let services = Arc::new(ServiceRepository::new(cache));
        let reports = Arc::new(ReportService::new(
            services.clone(),
            vehicles.clone(),
            providers.clone(),
        ));

        Self {
            config,
            vehicles,
            providers,
            services,
            reports,
        }
    }
}
