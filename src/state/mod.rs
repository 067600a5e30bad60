//! Application state
//!
//! Everything a request handler needs, shared by cheap clones.

use std::sync::Arc;

use crate::config::Settings;
use crate::database::{DatabasePool, DatabaseService};
use crate::services::ServiceFactory;
use crate::templates::Templates;
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub database: DatabaseService,
    pub services: ServiceFactory,
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Wire services and templates on top of a migrated pool
    pub fn new(settings: Settings, pool: DatabasePool) -> Result<Self> {
        let database = DatabaseService::new(pool);
        let services = ServiceFactory::new(&settings, database.clone());
        let templates = Templates::new()?;

        Ok(Self {
            settings: Arc::new(settings),
            database,
            services,
            templates: Arc::new(templates),
        })
    }

    pub fn academy_name(&self) -> &str {
        &self.settings.academy.name
    }

    pub fn currency(&self) -> &str {
        &self.settings.academy.currency
    }
}
