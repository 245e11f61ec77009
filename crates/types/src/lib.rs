//! Core types for the SemiTrace materials data service.
//!
//! This crate provides the domain types shared across the catalog and the
//! derivation pipeline: material classification enums, supply-chain risk
//! attributes, and the serializable view models handed to consumers.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod views;

pub use views::{
    AlertCategory, AlertSeverity, Commodity, ForecastPoint, GeoRisk, PricePoint, RiskAlert,
    SupplyChainIndex,
};

// =============================================================================
// Identifiers
// =============================================================================

/// Catalog key for a tracked material (e.g., "gallium", "wafer_300mm").
pub type MaterialId = String;

// =============================================================================
// Material Classification
// =============================================================================

/// Material class a tracked commodity belongs to.
///
/// Serialized as the human-readable class name used by downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialCategory {
    #[serde(rename = "Raw Silicon & Wafers")]
    RawSilicon,
    #[serde(rename = "Critical Metals")]
    CriticalMetals,
    #[serde(rename = "Precious Metals")]
    PreciousMetals,
    #[serde(rename = "Platinum Group Metals")]
    PlatinumGroup,
    #[serde(rename = "Rare Earth Elements")]
    RareEarths,
    #[serde(rename = "Semiconductor Elements")]
    SemiconductorElements,
    #[serde(rename = "Dopants & Trace Elements")]
    Dopants,
    #[serde(rename = "Battery & Energy Storage")]
    BatteryMaterials,
    #[serde(rename = "Hydrogen Economy")]
    HydrogenEconomy,
    #[serde(rename = "Solar PV Materials")]
    SolarMaterials,
    #[serde(rename = "Industrial & Process Gases")]
    IndustrialGases,
    #[serde(rename = "Specialty Chemicals")]
    SpecialtyChemicals,
    #[serde(rename = "ALD/CVD Precursors")]
    AldPrecursors,
    #[serde(rename = "Superconductor Materials")]
    SuperconductorMaterials,
    #[serde(rename = "Quantum Computing Materials")]
    QuantumMaterials,
    #[serde(rename = "Advanced & Emerging Materials")]
    AdvancedMaterials,
    #[serde(rename = "Packaging & Substrates")]
    PackagingMaterials,
}

impl MaterialCategory {
    /// Human-readable class name.
    pub fn label(self) -> &'static str {
        match self {
            Self::RawSilicon => "Raw Silicon & Wafers",
            Self::CriticalMetals => "Critical Metals",
            Self::PreciousMetals => "Precious Metals",
            Self::PlatinumGroup => "Platinum Group Metals",
            Self::RareEarths => "Rare Earth Elements",
            Self::SemiconductorElements => "Semiconductor Elements",
            Self::Dopants => "Dopants & Trace Elements",
            Self::BatteryMaterials => "Battery & Energy Storage",
            Self::HydrogenEconomy => "Hydrogen Economy",
            Self::SolarMaterials => "Solar PV Materials",
            Self::IndustrialGases => "Industrial & Process Gases",
            Self::SpecialtyChemicals => "Specialty Chemicals",
            Self::AldPrecursors => "ALD/CVD Precursors",
            Self::SuperconductorMaterials => "Superconductor Materials",
            Self::QuantumMaterials => "Quantum Computing Materials",
            Self::AdvancedMaterials => "Advanced & Emerging Materials",
            Self::PackagingMaterials => "Packaging & Substrates",
        }
    }

    /// All material categories.
    pub fn all() -> &'static [MaterialCategory] {
        &[
            Self::RawSilicon,
            Self::CriticalMetals,
            Self::PreciousMetals,
            Self::PlatinumGroup,
            Self::RareEarths,
            Self::SemiconductorElements,
            Self::Dopants,
            Self::BatteryMaterials,
            Self::HydrogenEconomy,
            Self::SolarMaterials,
            Self::IndustrialGases,
            Self::SpecialtyChemicals,
            Self::AldPrecursors,
            Self::SuperconductorMaterials,
            Self::QuantumMaterials,
            Self::AdvancedMaterials,
            Self::PackagingMaterials,
        ]
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Risk Tier
// =============================================================================

/// Coarse qualitative supply-risk label assigned per material.
///
/// Distinct from [`VolatilityClass`], which is derived from realized price
/// movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Stable,
    Elevated,
    Critical,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "Stable"),
            Self::Elevated => write!(f, "Elevated"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

// =============================================================================
// Substitutability
// =============================================================================

/// How readily a material can be replaced in its critical applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Substitutability {
    None,
    Limited,
    Moderate,
    High,
}

// =============================================================================
// Volatility Class
// =============================================================================

/// Realized price-volatility bucket, derived from day-over-day change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolatilityClass {
    Low,
    Medium,
    High,
}

// =============================================================================
// Availability Status
// =============================================================================

/// Forecast availability bucket for a forward period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Shortage,
    Tight,
    Stable,
    Surplus,
}

impl AvailabilityStatus {
    /// Map an availability score (0-100, 100 = maximum availability) to its
    /// status bucket.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..30 => Self::Shortage,
            30..60 => Self::Tight,
            60..80 => Self::Stable,
            _ => Self::Surplus,
        }
    }
}

// =============================================================================
// Sectors
// =============================================================================

/// Downstream sector that may depend on a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    Semiconductors,
    CleanEnergy,
    Batteries,
    Superconductors,
    QuantumComputing,
    AiInfrastructure,
}

impl Sector {
    /// All tracked sectors.
    pub fn all() -> &'static [Sector] {
        &[
            Self::Semiconductors,
            Self::CleanEnergy,
            Self::Batteries,
            Self::Superconductors,
            Self::QuantumComputing,
            Self::AiInfrastructure,
        ]
    }
}

/// Per-material sector dependency flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorDependencies {
    pub semiconductors: bool,
    pub clean_energy: bool,
    pub batteries: bool,
    pub superconductors: bool,
    pub quantum_computing: bool,
    pub ai_infrastructure: bool,
}

impl SectorDependencies {
    /// Build dependency flags from a list of sectors.
    pub fn from_sectors(sectors: &[Sector]) -> Self {
        let mut deps = Self::default();
        for sector in sectors {
            match sector {
                Sector::Semiconductors => deps.semiconductors = true,
                Sector::CleanEnergy => deps.clean_energy = true,
                Sector::Batteries => deps.batteries = true,
                Sector::Superconductors => deps.superconductors = true,
                Sector::QuantumComputing => deps.quantum_computing = true,
                Sector::AiInfrastructure => deps.ai_infrastructure = true,
            }
        }
        deps
    }

    /// Whether the material is flagged for the given sector.
    pub fn depends_on(&self, sector: Sector) -> bool {
        match sector {
            Sector::Semiconductors => self.semiconductors,
            Sector::CleanEnergy => self.clean_energy,
            Sector::Batteries => self.batteries,
            Sector::Superconductors => self.superconductors,
            Sector::QuantumComputing => self.quantum_computing,
            Sector::AiInfrastructure => self.ai_infrastructure,
        }
    }
}

// =============================================================================
// Supply-Chain Risk Factors
// =============================================================================

/// Structural supply-chain risk attributes of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyChainRisk {
    /// Share of global production from the top producer (percent, 0-100).
    pub primary_producer_share: u8,
    /// Share of global production from the top three producers (percent,
    /// 0-100, never below `primary_producer_share`).
    pub top3_producer_share: u8,
    /// Whether the material is subject to export restrictions.
    pub export_controlled: bool,
    /// How readily the material can be substituted.
    pub substitutability: Substitutability,
    /// Share of supply currently met by recycling (percent, 0-100).
    pub recycling_rate: u8,
    /// Days of strategic reserve coverage.
    pub stockpile_days: u32,
}

impl SupplyChainRisk {
    pub fn new(
        primary_producer_share: u8,
        top3_producer_share: u8,
        export_controlled: bool,
        substitutability: Substitutability,
        recycling_rate: u8,
        stockpile_days: u32,
    ) -> Self {
        Self {
            primary_producer_share,
            top3_producer_share,
            export_controlled,
            substitutability,
            recycling_rate,
            stockpile_days,
        }
    }
}

// =============================================================================
// Material Properties & Usage
// =============================================================================

/// Physical and process properties of a material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProperties {
    /// Purity grade, e.g. "9N", "5N", "Ultra".
    pub purity_grade: String,
    /// Physical form, e.g. "Ingot", "Powder", "Gas".
    pub form: String,
    /// Process steps where the material is critical.
    pub critical_processes: Vec<String>,
    /// Known alternative materials, if any.
    pub alternative_materials: Vec<String>,
}

/// Where a material is used: fab processes and material-stack layers.
/// Display metadata only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaterialUsage {
    pub processes: Vec<String>,
    pub layers: Vec<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_status_thresholds() {
        assert_eq!(AvailabilityStatus::from_score(0), AvailabilityStatus::Shortage);
        assert_eq!(AvailabilityStatus::from_score(29), AvailabilityStatus::Shortage);
        assert_eq!(AvailabilityStatus::from_score(30), AvailabilityStatus::Tight);
        assert_eq!(AvailabilityStatus::from_score(59), AvailabilityStatus::Tight);
        assert_eq!(AvailabilityStatus::from_score(60), AvailabilityStatus::Stable);
        assert_eq!(AvailabilityStatus::from_score(79), AvailabilityStatus::Stable);
        assert_eq!(AvailabilityStatus::from_score(80), AvailabilityStatus::Surplus);
        assert_eq!(AvailabilityStatus::from_score(100), AvailabilityStatus::Surplus);
    }

    #[test]
    fn test_sector_dependencies_roundtrip() {
        let deps = SectorDependencies::from_sectors(&[
            Sector::Semiconductors,
            Sector::QuantumComputing,
        ]);

        assert!(deps.depends_on(Sector::Semiconductors));
        assert!(deps.depends_on(Sector::QuantumComputing));
        assert!(!deps.depends_on(Sector::Batteries));
        assert!(!deps.depends_on(Sector::CleanEnergy));
    }

    #[test]
    fn test_every_sector_maps_to_a_flag() {
        let deps = SectorDependencies::from_sectors(Sector::all());
        for sector in Sector::all() {
            assert!(deps.depends_on(*sector));
        }
    }

    #[test]
    fn test_category_serializes_to_label() {
        let json = serde_json::to_string(&MaterialCategory::RareEarths).unwrap();
        assert_eq!(json, "\"Rare Earth Elements\"");

        let back: MaterialCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MaterialCategory::RareEarths);
    }

    #[test]
    fn test_category_labels_are_unique() {
        let labels: std::collections::HashSet<_> =
            MaterialCategory::all().iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), MaterialCategory::all().len());
    }

    #[test]
    fn test_supply_chain_risk_serde_field_names() {
        let risk = SupplyChainRisk::new(98, 99, true, Substitutability::None, 1, 60);
        let json = serde_json::to_string(&risk).unwrap();

        assert!(json.contains("\"primaryProducerShare\":98"));
        assert!(json.contains("\"top3ProducerShare\":99"));
        assert!(json.contains("\"exportControlled\":true"));
        assert!(json.contains("\"substitutability\":\"None\""));
    }
}
