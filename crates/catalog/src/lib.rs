//! Material catalog: the static list of tracked materials.
//!
//! The catalog is process-wide configuration, loaded once at startup and
//! never mutated. Every derivation in the pipeline reads from it. Loading
//! validates structural invariants (share ranges, top-3 >= primary, positive
//! baseline prices) and fails fast on violations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::{
    MaterialCategory, MaterialId, MaterialProperties, MaterialUsage, RiskTier, Sector,
    SectorDependencies, SupplyChainRisk,
};

mod data;

// =============================================================================
// Errors
// =============================================================================

/// Catalog validation failure. Fatal at startup: the catalog is
/// configuration, and broken configuration must not reach the pipeline.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("material '{id}': baseline price must be positive, got {price}")]
    NonPositivePrice { id: MaterialId, price: f64 },

    #[error("material '{id}': {field} must be within 0-100, got {value}")]
    ShareOutOfRange {
        id: MaterialId,
        field: &'static str,
        value: u8,
    },

    #[error(
        "material '{id}': top-3 producer share ({top3}%) below primary producer share ({primary}%)"
    )]
    ProducerShareInverted {
        id: MaterialId,
        primary: u8,
        top3: u8,
    },

    #[error("duplicate material id '{id}'")]
    DuplicateId { id: MaterialId },
}

// =============================================================================
// MaterialDefinition
// =============================================================================

/// One tracked material: identity, economics, risk attributes, and usage
/// metadata. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDefinition {
    pub id: MaterialId,
    pub name: String,
    pub symbol: String,
    pub category: MaterialCategory,
    pub description: String,
    /// Reference price used to seed simulation, in the material's unit.
    pub baseline_price: f64,
    /// Top producer country label. Grouped by exact string in the geo
    /// rollup; combined labels like "Global" form their own group.
    pub top_producer: String,
    pub risk_tier: RiskTier,
    /// External feed function code, for materials with a live price series.
    pub feed_function: Option<String>,
    pub supply_chain_risk: SupplyChainRisk,
    pub sector_dependencies: SectorDependencies,
    pub material_properties: MaterialProperties,
    pub usage: MaterialUsage,
}

impl MaterialDefinition {
    /// Create a definition with empty risk/sector/usage attributes, to be
    /// filled with the builder methods below.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        name: &str,
        category: MaterialCategory,
        description: &str,
        top_producer: &str,
        symbol: &str,
        baseline_price: f64,
        risk_tier: RiskTier,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            category,
            description: description.to_string(),
            baseline_price,
            top_producer: top_producer.to_string(),
            risk_tier,
            feed_function: None,
            supply_chain_risk: SupplyChainRisk::new(
                0,
                0,
                false,
                types::Substitutability::High,
                0,
                0,
            ),
            sector_dependencies: SectorDependencies::default(),
            material_properties: MaterialProperties {
                purity_grade: String::new(),
                form: String::new(),
                critical_processes: Vec::new(),
                alternative_materials: Vec::new(),
            },
            usage: MaterialUsage::default(),
        }
    }

    /// Map this material to an external live price feed.
    pub fn with_feed(mut self, function: &str) -> Self {
        self.feed_function = Some(function.to_string());
        self
    }

    pub fn with_risk(mut self, risk: SupplyChainRisk) -> Self {
        self.supply_chain_risk = risk;
        self
    }

    pub fn with_sectors(mut self, sectors: &[Sector]) -> Self {
        self.sector_dependencies = SectorDependencies::from_sectors(sectors);
        self
    }

    pub fn with_usage(mut self, processes: &[&str], layers: &[&str]) -> Self {
        self.usage = MaterialUsage {
            processes: processes.iter().map(|s| s.to_string()).collect(),
            layers: layers.iter().map(|s| s.to_string()).collect(),
        };
        self
    }

    pub fn with_properties(
        mut self,
        purity_grade: &str,
        form: &str,
        critical_processes: &[&str],
        alternative_materials: &[&str],
    ) -> Self {
        self.material_properties = MaterialProperties {
            purity_grade: purity_grade.to_string(),
            form: form.to_string(),
            critical_processes: critical_processes.iter().map(|s| s.to_string()).collect(),
            alternative_materials: alternative_materials
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };
        self
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if !self.baseline_price.is_finite() || self.baseline_price <= 0.0 {
            return Err(CatalogError::NonPositivePrice {
                id: self.id.clone(),
                price: self.baseline_price,
            });
        }

        let risk = &self.supply_chain_risk;
        for (field, value) in [
            ("primary producer share", risk.primary_producer_share),
            ("top-3 producer share", risk.top3_producer_share),
            ("recycling rate", risk.recycling_rate),
        ] {
            if value > 100 {
                return Err(CatalogError::ShareOutOfRange {
                    id: self.id.clone(),
                    field,
                    value,
                });
            }
        }

        if risk.top3_producer_share < risk.primary_producer_share {
            return Err(CatalogError::ProducerShareInverted {
                id: self.id.clone(),
                primary: risk.primary_producer_share,
                top3: risk.top3_producer_share,
            });
        }

        Ok(())
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Validated, ordered collection of material definitions.
///
/// Safe for unsynchronized concurrent reads; there is no write path after
/// construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    materials: Vec<MaterialDefinition>,
}

impl Catalog {
    /// Load the built-in catalog, validating every entry.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_definitions(data::all_materials())
    }

    /// Build a catalog from explicit definitions, validating every entry.
    pub fn from_definitions(materials: Vec<MaterialDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for def in &materials {
            def.validate()?;
            if !seen.insert(def.id.clone()) {
                return Err(CatalogError::DuplicateId { id: def.id.clone() });
            }
        }
        Ok(Self { materials })
    }

    /// All materials in catalog order.
    pub fn materials(&self) -> &[MaterialDefinition] {
        &self.materials
    }

    /// Look up a material by id.
    pub fn get(&self, id: &str) -> Option<&MaterialDefinition> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Materials in the given category, in catalog order.
    pub fn in_category(
        &self,
        category: MaterialCategory,
    ) -> impl Iterator<Item = &MaterialDefinition> {
        self.materials.iter().filter(move |m| m.category == category)
    }

    /// Materials flagged as a dependency of the given sector, in catalog
    /// order.
    pub fn in_sector(&self, sector: Sector) -> impl Iterator<Item = &MaterialDefinition> {
        self.materials
            .iter()
            .filter(move |m| m.sector_dependencies.depends_on(sector))
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use types::Substitutability;

    fn minimal_def(id: &str) -> MaterialDefinition {
        MaterialDefinition::new(
            id,
            "Test Material",
            MaterialCategory::CriticalMetals,
            "A test material.",
            "Testland",
            "TST",
            10.0,
            RiskTier::Stable,
        )
        .with_risk(SupplyChainRisk::new(
            40,
            70,
            false,
            Substitutability::Moderate,
            10,
            30,
        ))
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::load().expect("built-in catalog must validate");
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), 63);
    }

    #[test]
    fn test_builtin_catalog_top3_never_below_primary() {
        let catalog = Catalog::load().unwrap();
        for m in catalog.materials() {
            assert!(
                m.supply_chain_risk.top3_producer_share >= m.supply_chain_risk.primary_producer_share,
                "{} has top3 < primary",
                m.id
            );
        }
    }

    #[test]
    fn test_builtin_catalog_ids_unique() {
        let catalog = Catalog::load().unwrap();
        let ids: HashSet<_> = catalog.materials().iter().map(|m| &m.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_every_category_is_populated() {
        let catalog = Catalog::load().unwrap();
        for category in MaterialCategory::all() {
            assert!(
                catalog.in_category(*category).count() > 0,
                "category {category} has no materials"
            );
        }
    }

    #[test]
    fn test_inverted_producer_share_rejected() {
        let mut def = minimal_def("bad");
        def.supply_chain_risk.primary_producer_share = 80;
        def.supply_chain_risk.top3_producer_share = 60;

        let err = Catalog::from_definitions(vec![def]).unwrap_err();
        assert!(matches!(err, CatalogError::ProducerShareInverted { .. }));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let mut def = minimal_def("bad");
        def.baseline_price = 0.0;

        let err = Catalog::from_definitions(vec![def]).unwrap_err();
        assert!(matches!(err, CatalogError::NonPositivePrice { .. }));
    }

    #[test]
    fn test_share_over_100_rejected() {
        let mut def = minimal_def("bad");
        def.supply_chain_risk.primary_producer_share = 101;
        def.supply_chain_risk.top3_producer_share = 101;

        let err = Catalog::from_definitions(vec![def]).unwrap_err();
        assert!(matches!(err, CatalogError::ShareOutOfRange { .. }));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err =
            Catalog::from_definitions(vec![minimal_def("dup"), minimal_def("dup")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
    }

    #[test]
    fn test_sector_lookup() {
        let catalog = Catalog::load().unwrap();

        let semis: Vec<_> = catalog.in_sector(Sector::Semiconductors).collect();
        assert!(!semis.is_empty());
        assert!(semis.iter().all(|m| m.sector_dependencies.semiconductors));

        // Gallium is a semiconductor and AI dependency but not a battery one.
        let gallium = catalog.get("gallium").unwrap();
        assert!(gallium.sector_dependencies.depends_on(Sector::Semiconductors));
        assert!(!gallium.sector_dependencies.depends_on(Sector::Batteries));
    }

    #[test]
    fn test_feed_mapped_materials() {
        let catalog = Catalog::load().unwrap();
        let mapped: Vec<_> = catalog
            .materials()
            .iter()
            .filter_map(|m| m.feed_function.as_deref())
            .collect();

        // The exchange-traded subset carries live feed codes.
        assert!(mapped.contains(&"COPPER"));
        assert!(mapped.contains(&"GOLD"));
    }
}
