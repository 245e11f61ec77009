//! Serializable view models produced by the derivation pipeline.
//!
//! These are the request-scoped artifacts handed to the presentation layer:
//! regenerated fresh on every retrieval call, never persisted, never mutated.
//! Field names follow the consumer-facing JSON contract (camelCase).

use serde::{Deserialize, Serialize};

use crate::{
    AvailabilityStatus, MaterialCategory, MaterialId, MaterialProperties, MaterialUsage, RiskTier,
    SectorDependencies, SupplyChainRisk, VolatilityClass,
};

// =============================================================================
// Price History
// =============================================================================

/// One point of a daily price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Day label, e.g. "Aug 7". Chronologically ordered within a series.
    pub date: String,
    /// Price in the material's currency unit. Positive by construction.
    pub value: f64,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }

    /// Series label for a calendar day, e.g. "Aug 7".
    pub fn day_label(date: chrono::NaiveDate) -> String {
        date.format("%b %-d").to_string()
    }
}

// =============================================================================
// Availability Forecast
// =============================================================================

/// Forecast availability for one forward period, with confidence bounds.
///
/// Invariant: `lower_bound <= score <= upper_bound`, all within 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Period label, "M+1" through "M+6".
    pub month: String,
    /// Availability bucket derived from `score`.
    pub status: AvailabilityStatus,
    /// Point estimate (0-100, 100 = maximum availability).
    pub score: u32,
    /// Confidence interval lower bound.
    pub lower_bound: u32,
    /// Confidence interval upper bound.
    pub upper_bound: u32,
}

// =============================================================================
// Commodity
// =============================================================================

/// Full per-material view model: catalog fields plus derived market data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commodity {
    pub id: MaterialId,
    pub symbol: String,
    pub name: String,
    pub category: MaterialCategory,
    /// Latest price in the series.
    pub price: f64,
    /// Currency unit, "USD/kg" or "USD/t".
    pub currency: String,
    /// Absolute change over the last day of the series.
    pub change24h: f64,
    /// Percentage change over the last day of the series.
    pub change_percentage: f64,
    /// Realized volatility bucket.
    pub volatility: VolatilityClass,
    pub risk_level: RiskTier,
    pub description: String,
    pub top_producer: String,
    /// Trailing 30-day price series, oldest first.
    pub history: Vec<PricePoint>,
    /// Six-period availability forecast.
    pub forecast: Vec<ForecastPoint>,
    /// Confidence in the forecast, percent.
    pub forecast_confidence: u32,
    pub usage: MaterialUsage,
    pub supply_chain_risk: SupplyChainRisk,
    pub sector_dependencies: SectorDependencies,
    pub material_properties: MaterialProperties,
}

// =============================================================================
// Supply-Chain Index
// =============================================================================

/// Aggregate sector or category index displayed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyChainIndex {
    pub id: String,
    pub name: String,
    /// Index level in points (0-100 band plus presentation jitter).
    pub value: i32,
    /// Reported delta, points.
    pub change: f64,
    pub unit: String,
    pub description: String,
    pub data_source: String,
}

// =============================================================================
// Geographic Risk
// =============================================================================

/// Country-level concentration risk rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRisk {
    pub country: String,
    /// Aggregate risk score, 0-100.
    pub risk_score: u32,
    /// Up to six tracked materials sourced from this country.
    pub controlled_materials: Vec<String>,
    /// Narrative supply-risk description.
    pub description: String,
}

// =============================================================================
// Risk Alerts
// =============================================================================

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

/// Alert domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    Geopolitical,
    Supply,
    Price,
    Logistics,
}

/// A threshold-triggered risk alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAlert {
    pub id: String,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    /// Display names of the materials that triggered the alert.
    pub affected_materials: Vec<String>,
    /// RFC 3339 timestamp of alert generation.
    pub timestamp: String,
    pub category: AlertCategory,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_point_serde_field_names() {
        let point = ForecastPoint {
            month: "M+3".into(),
            status: AvailabilityStatus::Tight,
            score: 45,
            lower_bound: 30,
            upper_bound: 60,
        };

        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"month\":\"M+3\""));
        assert!(json.contains("\"status\":\"Tight\""));
        assert!(json.contains("\"lowerBound\":30"));
        assert!(json.contains("\"upperBound\":60"));
    }

    #[test]
    fn test_alert_enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&AlertSeverity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::to_string(&AlertCategory::Geopolitical).unwrap(),
            "\"geopolitical\""
        );
    }

    #[test]
    fn test_geo_risk_serde_field_names() {
        let geo = GeoRisk {
            country: "China".into(),
            risk_score: 88,
            controlled_materials: vec!["Gallium".into()],
            description: "test".into(),
        };

        let json = serde_json::to_string(&geo).unwrap();
        assert!(json.contains("\"riskScore\":88"));
        assert!(json.contains("\"controlledMaterials\":[\"Gallium\"]"));
    }
}
