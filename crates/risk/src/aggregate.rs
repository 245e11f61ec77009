//! Weighted risk scoring per material category and per sector.
//!
//! Both entry points are pure functions of the catalog: same input, same
//! output. Presentation jitter is applied downstream in the index assembly,
//! never here.

use catalog::Catalog;
use types::{MaterialCategory, RiskTier, Sector, Substitutability, SupplyChainRisk};

/// Score returned for a category with no matching materials.
pub const EMPTY_CATEGORY_BASELINE: u32 = 50;

/// Score returned for a sector with no dependent materials.
pub const EMPTY_SECTOR_BASELINE: u32 = 30;

/// Structural risk contribution of a single material.
///
/// Four weighted terms: producer concentration, export-control exposure,
/// substitution difficulty, and buffer-stock shortfall below 30 days.
fn structural_risk(risk: &SupplyChainRisk) -> f64 {
    let concentration =
        risk.primary_producer_share as f64 * 0.4 + risk.top3_producer_share as f64 * 0.2;
    let control = if risk.export_controlled { 20.0 } else { 0.0 };
    let substitution = match risk.substitutability {
        Substitutability::None => 25.0,
        Substitutability::Limited => 15.0,
        Substitutability::Moderate | Substitutability::High => 5.0,
    };
    let buffer = (30.0 - risk.stockpile_days as f64).max(0.0) * 0.5;

    concentration + control + substitution + buffer
}

/// Aggregate risk score (0-100) for all materials in a category.
///
/// Averages the structural risk of every entry in the category, rounded and
/// clamped to 100. Returns [`EMPTY_CATEGORY_BASELINE`] when the category has
/// no materials.
pub fn category_risk(catalog: &Catalog, category: MaterialCategory) -> u32 {
    let mut total = 0.0;
    let mut count = 0usize;
    for material in catalog.in_category(category) {
        total += structural_risk(&material.supply_chain_risk);
        count += 1;
    }

    if count == 0 {
        return EMPTY_CATEGORY_BASELINE;
    }
    ((total / count as f64).round() as u32).min(100)
}

/// Aggregate risk score (0-100) for all materials a sector depends on.
///
/// Each dependent material contributes a tier base (Critical 85, Elevated
/// 60, Stable 35) plus 15 points when a single producer holds more than 60%
/// of supply. Returns [`EMPTY_SECTOR_BASELINE`] when no material carries the
/// sector flag.
pub fn sector_risk(catalog: &Catalog, sector: Sector) -> u32 {
    let mut total = 0.0;
    let mut count = 0usize;
    for material in catalog.in_sector(sector) {
        let base = match material.risk_tier {
            RiskTier::Critical => 85.0,
            RiskTier::Elevated => 60.0,
            RiskTier::Stable => 35.0,
        };
        let concentration_penalty = if material.supply_chain_risk.primary_producer_share > 60 {
            15.0
        } else {
            0.0
        };
        total += base + concentration_penalty;
        count += 1;
    }

    if count == 0 {
        return EMPTY_SECTOR_BASELINE;
    }
    ((total / count as f64).round() as u32).min(100)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::MaterialDefinition;

    fn material(
        id: &str,
        category: MaterialCategory,
        tier: RiskTier,
        risk: SupplyChainRisk,
    ) -> MaterialDefinition {
        MaterialDefinition::new(
            id,
            id,
            category,
            "test",
            "Testland",
            "TST",
            10.0,
            tier,
        )
        .with_risk(risk)
        .with_sectors(&[Sector::Semiconductors])
    }

    fn single_material_catalog(risk: SupplyChainRisk) -> Catalog {
        Catalog::from_definitions(vec![material(
            "m1",
            MaterialCategory::SemiconductorElements,
            RiskTier::Critical,
            risk,
        )])
        .unwrap()
    }

    #[test]
    fn test_extreme_concentration_clamps_to_100() {
        // 0.4*98 + 0.2*99 + 20 + 25 + 0 = 104, clamped.
        let catalog = single_material_catalog(SupplyChainRisk::new(
            98,
            99,
            true,
            Substitutability::None,
            0,
            60,
        ));
        assert_eq!(
            category_risk(&catalog, MaterialCategory::SemiconductorElements),
            100
        );
    }

    #[test]
    fn test_category_risk_hand_computed() {
        // 0.4*50 + 0.2*80 + 0 + 15 + (30-10)*0.5 = 20 + 16 + 15 + 10 = 61.
        let catalog = single_material_catalog(SupplyChainRisk::new(
            50,
            80,
            false,
            Substitutability::Limited,
            0,
            10,
        ));
        assert_eq!(
            category_risk(&catalog, MaterialCategory::SemiconductorElements),
            61
        );
    }

    #[test]
    fn test_stockpile_above_30_days_adds_no_buffer_risk() {
        let short = single_material_catalog(SupplyChainRisk::new(
            50,
            80,
            false,
            Substitutability::Limited,
            0,
            90,
        ));
        let exact = single_material_catalog(SupplyChainRisk::new(
            50,
            80,
            false,
            Substitutability::Limited,
            0,
            30,
        ));
        assert_eq!(
            category_risk(&short, MaterialCategory::SemiconductorElements),
            category_risk(&exact, MaterialCategory::SemiconductorElements),
        );
    }

    #[test]
    fn test_empty_category_returns_neutral_baseline() {
        let catalog = Catalog::from_definitions(vec![]).unwrap();
        assert_eq!(
            category_risk(&catalog, MaterialCategory::RareEarths),
            EMPTY_CATEGORY_BASELINE
        );
    }

    #[test]
    fn test_empty_sector_returns_baseline() {
        let catalog = Catalog::from_definitions(vec![]).unwrap();
        assert_eq!(
            sector_risk(&catalog, Sector::QuantumComputing),
            EMPTY_SECTOR_BASELINE
        );
    }

    #[test]
    fn test_sector_risk_tier_base_and_penalty() {
        // Critical with 98% primary share: 85 + 15 = 100.
        let catalog = single_material_catalog(SupplyChainRisk::new(
            98,
            99,
            false,
            Substitutability::None,
            0,
            30,
        ));
        assert_eq!(sector_risk(&catalog, Sector::Semiconductors), 100);

        // Stable with low concentration: just the 35 base.
        let catalog = Catalog::from_definitions(vec![material(
            "m1",
            MaterialCategory::CriticalMetals,
            RiskTier::Stable,
            SupplyChainRisk::new(28, 45, false, Substitutability::Moderate, 35, 15),
        )])
        .unwrap();
        assert_eq!(sector_risk(&catalog, Sector::Semiconductors), 35);
    }

    #[test]
    fn test_concentration_penalty_boundary_at_60() {
        let at_60 = Catalog::from_definitions(vec![material(
            "m1",
            MaterialCategory::CriticalMetals,
            RiskTier::Elevated,
            SupplyChainRisk::new(60, 90, false, Substitutability::Moderate, 0, 30),
        )])
        .unwrap();
        let above_60 = Catalog::from_definitions(vec![material(
            "m1",
            MaterialCategory::CriticalMetals,
            RiskTier::Elevated,
            SupplyChainRisk::new(61, 90, false, Substitutability::Moderate, 0, 30),
        )])
        .unwrap();

        assert_eq!(sector_risk(&at_60, Sector::Semiconductors), 60);
        assert_eq!(sector_risk(&above_60, Sector::Semiconductors), 75);
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let catalog = Catalog::load().unwrap();
        for category in MaterialCategory::all() {
            assert_eq!(
                category_risk(&catalog, *category),
                category_risk(&catalog, *category)
            );
        }
        for sector in Sector::all() {
            assert_eq!(sector_risk(&catalog, *sector), sector_risk(&catalog, *sector));
        }
    }

    #[test]
    fn test_builtin_catalog_scores_within_range() {
        let catalog = Catalog::load().unwrap();
        for category in MaterialCategory::all() {
            assert!(category_risk(&catalog, *category) <= 100);
        }
        for sector in Sector::all() {
            assert!(sector_risk(&catalog, *sector) <= 100);
        }
    }
}
