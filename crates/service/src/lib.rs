//! Market data service: the public retrieval surface of the pipeline.
//!
//! Four argument-free async operations, one per dashboard collection:
//!
//! - [`MarketDataService::commodities`]: per-material market view models
//! - [`MarketDataService::supply_chain_indices`]: aggregate dashboard indices
//! - [`MarketDataService::geo_risks`]: country concentration rollup
//! - [`MarketDataService::risk_alerts`]: threshold alerts
//!
//! Every call derives fresh values from the immutable catalog; nothing is
//! cached or persisted. Results are idempotent in shape but not in value:
//! simulated series and jitter differ per call. Per-material work is
//! independent, so a feed failure for one material never affects another.

use std::sync::Arc;

use catalog::Catalog;
use chrono::Utc;
use feed::{FeedClient, FeedConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use sim::{
    VolatilityThresholds, classify_volatility, day_over_day, forecast_availability, round2,
    simulate_history, simulation_volatility,
};
use tracing::debug;
use types::{Commodity, GeoRisk, RiskAlert, SupplyChainIndex};

/// Reported confidence in availability forecasts, percent.
const FORECAST_CONFIDENCE: u32 = 85;

/// Baseline price above which a material is quoted per tonne.
const PER_TONNE_PRICE_CUTOFF: f64 = 1000.0;

// =============================================================================
// MarketDataService
// =============================================================================

/// Request-scoped derivation over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct MarketDataService {
    catalog: Arc<Catalog>,
    feed: FeedClient,
    thresholds: VolatilityThresholds,
}

impl MarketDataService {
    pub fn new(catalog: Arc<Catalog>, feed_config: FeedConfig) -> Self {
        Self {
            catalog,
            feed: FeedClient::new(feed_config),
            thresholds: VolatilityThresholds::default(),
        }
    }

    /// The catalog this service derives from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Build the full commodity collection.
    ///
    /// Materials with a live feed mapping are fetched from the external
    /// series; on any feed failure (or for unmapped materials) the history
    /// is simulated from the baseline price. Derivations are per-material
    /// and independent.
    pub async fn commodities(&self) -> Vec<Commodity> {
        let today = Utc::now().date_naive();
        let mut rng = StdRng::from_os_rng();
        let mut commodities = Vec::with_capacity(self.catalog.len());

        for def in self.catalog.materials() {
            let live = match &def.feed_function {
                Some(function) => self.feed.fetch_history(function).await,
                None => None,
            };
            let history = live.unwrap_or_else(|| {
                simulate_history(
                    def.baseline_price,
                    simulation_volatility(def.risk_tier),
                    today,
                    &mut rng,
                )
            });

            let change = day_over_day(&history);
            let change_pct = change.map(|c| c.change_pct).unwrap_or(0.0);
            let volatility = classify_volatility(change_pct, &self.thresholds);

            let current_price = history.last().map(|p| p.value).unwrap_or(def.baseline_price);
            let currency = if def.baseline_price > PER_TONNE_PRICE_CUTOFF {
                "USD/t"
            } else {
                "USD/kg"
            };

            commodities.push(Commodity {
                id: def.id.clone(),
                symbol: def.symbol.clone(),
                name: def.name.clone(),
                category: def.category,
                price: current_price,
                currency: currency.to_string(),
                change24h: round2(change.map(|c| c.change).unwrap_or(0.0)),
                change_percentage: round2(change_pct),
                volatility,
                risk_level: def.risk_tier,
                description: def.description.clone(),
                top_producer: def.top_producer.clone(),
                forecast: forecast_availability(def.risk_tier, volatility, &mut rng),
                forecast_confidence: FORECAST_CONFIDENCE,
                history,
                usage: def.usage.clone(),
                supply_chain_risk: def.supply_chain_risk,
                sector_dependencies: def.sector_dependencies,
                material_properties: def.material_properties.clone(),
            });
        }

        debug!(count = commodities.len(), "commodity collection derived");
        commodities
    }

    /// Build the six dashboard supply-chain indices.
    pub async fn supply_chain_indices(&self) -> Vec<SupplyChainIndex> {
        let mut rng = StdRng::from_os_rng();
        risk::supply_chain_indices(&self.catalog, &mut rng)
    }

    /// Build the top-10 country risk rollup.
    pub async fn geo_risks(&self) -> Vec<GeoRisk> {
        risk::geo_risks(&self.catalog)
    }

    /// Evaluate the threshold alert rules.
    pub async fn risk_alerts(&self) -> Vec<RiskAlert> {
        risk::generate_alerts(&self.catalog)
    }

    /// Derive all four collections at once.
    pub async fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            commodities: self.commodities().await,
            indices: self.supply_chain_indices().await,
            geo_risks: self.geo_risks().await,
            alerts: self.risk_alerts().await,
        }
    }
}

/// One-shot dump of every dashboard collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub commodities: Vec<Commodity>,
    pub indices: Vec<SupplyChainIndex>,
    pub geo_risks: Vec<GeoRisk>,
    pub alerts: Vec<RiskAlert>,
}
