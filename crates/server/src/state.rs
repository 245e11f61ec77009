//! Shared server state.

use std::sync::Arc;
use std::time::Instant;

use service::MarketDataService;

/// State cloned into each handler via Axum's State extractor.
///
/// The service owns the catalog and feed client; everything here is cheap
/// to clone and safe for concurrent reads.
#[derive(Clone)]
pub struct ServerState {
    /// The derivation service backing every data endpoint.
    pub service: Arc<MarketDataService>,

    /// Server start time, for health reporting.
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(service: Arc<MarketDataService>) -> Self {
        Self {
            service,
            start_time: Instant::now(),
        }
    }

    /// Uptime in whole seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;
    use feed::FeedConfig;

    #[test]
    fn test_state_reports_uptime() {
        let catalog = Arc::new(Catalog::load().unwrap());
        let service = Arc::new(MarketDataService::new(catalog, FeedConfig::default()));
        let state = ServerState::new(service);

        // Just created, so well under a minute.
        assert!(state.uptime_secs() < 60);
    }
}
