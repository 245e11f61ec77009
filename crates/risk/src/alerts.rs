//! Threshold-triggered risk alerts over the catalog.
//!
//! Each rule is evaluated independently; several alerts may coexist in one
//! pass, and a rule whose triggering set is empty (or below its count
//! threshold) simply stays silent.

use catalog::{Catalog, MaterialDefinition};
use chrono::{SecondsFormat, Utc};
use types::{AlertCategory, AlertSeverity, RiskAlert, RiskTier};

/// More Critical-tier materials than this fires the supply alert.
const CRITICAL_COUNT_THRESHOLD: usize = 5;

/// Primary-producer share above this percentage flags concentration risk.
const CONCENTRATION_SHARE_THRESHOLD: u8 = 70;

/// More export-controlled materials than this fires the exposure alert.
const EXPORT_CONTROL_COUNT_THRESHOLD: usize = 10;

/// Stockpile coverage below this many days flags low buffer stock.
const LOW_STOCKPILE_DAYS: u32 = 30;

fn names(materials: &[&MaterialDefinition], limit: usize) -> Vec<String> {
    materials.iter().take(limit).map(|m| m.name.clone()).collect()
}

/// Evaluate all alert rules against the catalog.
pub fn generate_alerts(catalog: &Catalog) -> Vec<RiskAlert> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let mut alerts = Vec::new();

    let critical: Vec<&MaterialDefinition> = catalog
        .materials()
        .iter()
        .filter(|m| m.risk_tier == RiskTier::Critical)
        .collect();
    if critical.len() > CRITICAL_COUNT_THRESHOLD {
        alerts.push(RiskAlert {
            id: "alert-critical-mass".to_string(),
            severity: AlertSeverity::Critical,
            title: "Multiple Critical Materials".to_string(),
            message: format!(
                "{} materials are at critical supply levels. Immediate procurement review recommended.",
                critical.len()
            ),
            affected_materials: names(&critical, 5),
            timestamp: timestamp.clone(),
            category: AlertCategory::Supply,
        });
    }

    let concentrated: Vec<&MaterialDefinition> = catalog
        .materials()
        .iter()
        .filter(|m| m.supply_chain_risk.primary_producer_share > CONCENTRATION_SHARE_THRESHOLD)
        .collect();
    if !concentrated.is_empty() {
        alerts.push(RiskAlert {
            id: "alert-concentration".to_string(),
            severity: AlertSeverity::Warning,
            title: "Supply Concentration Risk".to_string(),
            message: format!(
                "{} materials have >70% single-country production concentration.",
                concentrated.len()
            ),
            affected_materials: names(&concentrated, concentrated.len()),
            timestamp: timestamp.clone(),
            category: AlertCategory::Geopolitical,
        });
    }

    let export_controlled: Vec<&MaterialDefinition> = catalog
        .materials()
        .iter()
        .filter(|m| m.supply_chain_risk.export_controlled)
        .collect();
    if export_controlled.len() > EXPORT_CONTROL_COUNT_THRESHOLD {
        alerts.push(RiskAlert {
            id: "alert-export-controls".to_string(),
            severity: AlertSeverity::Warning,
            title: "Export Control Exposure".to_string(),
            message: format!(
                "{} tracked materials are subject to export controls.",
                export_controlled.len()
            ),
            affected_materials: names(&export_controlled, 8),
            timestamp: timestamp.clone(),
            category: AlertCategory::Geopolitical,
        });
    }

    let low_stockpile: Vec<&MaterialDefinition> = catalog
        .materials()
        .iter()
        .filter(|m| m.supply_chain_risk.stockpile_days < LOW_STOCKPILE_DAYS)
        .collect();
    if !low_stockpile.is_empty() {
        alerts.push(RiskAlert {
            id: "alert-stockpile".to_string(),
            severity: AlertSeverity::Info,
            title: "Low Buffer Stock".to_string(),
            message: format!(
                "{} materials have less than 30 days of strategic reserve.",
                low_stockpile.len()
            ),
            affected_materials: names(&low_stockpile, 6),
            timestamp,
            category: AlertCategory::Logistics,
        });
    }

    alerts
}

// =============================================================================
// Tests
// =============================================================================
