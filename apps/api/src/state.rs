use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::gateway::CatalogGateway;
use crate::roadmap::RoadmapGenerator;
use crate::saves::SaveStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Raw upstream access for the pass-through proxy endpoint.
    pub gateway: Arc<dyn CatalogGateway>,
    /// Typed catalog operations over the same gateway.
    pub catalog: CatalogClient,
    pub roadmaps: RoadmapGenerator,
    /// PostgreSQL when DATABASE_URL is set, in-memory otherwise.
    pub saves: Arc<dyn SaveStore>,
}

impl AppState {
    pub fn new(
        gateway: Arc<dyn CatalogGateway>,
        roadmaps: RoadmapGenerator,
        saves: Arc<dyn SaveStore>,
    ) -> Self {
        Self {
            catalog: CatalogClient::new(gateway.clone()),
            gateway,
            roadmaps,
            saves,
        }
    }
}
