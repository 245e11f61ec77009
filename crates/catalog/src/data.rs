//! Built-in material definitions, grouped by category.
//!
//! This is the single canonical catalog data source. Groups follow the
//! dashboard's category taxonomy; entries within a group keep their curated
//! order, which downstream rollups rely on for stable tie-breaking.

use types::Sector::*;
use types::Substitutability as Subst;
use types::{MaterialCategory, RiskTier, SupplyChainRisk};

use crate::MaterialDefinition;

fn risk(
    primary: u8,
    top3: u8,
    export_controlled: bool,
    substitutability: Subst,
    recycling: u8,
    stockpile_days: u32,
) -> SupplyChainRisk {
    SupplyChainRisk::new(
        primary,
        top3,
        export_controlled,
        substitutability,
        recycling,
        stockpile_days,
    )
}

fn raw_silicon() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::RawSilicon;
    vec![
        MaterialDefinition::new(
            "polysilicon",
            "Polysilicon (9N)",
            RawSilicon,
            "Ultra-pure silicon (9N+) used as the base substrate for wafers.",
            "China",
            "POLY",
            24.50,
            RiskTier::Elevated,
        )
        .with_risk(risk(70, 90, false, Subst::None, 0, 30))
        .with_sectors(&[Semiconductors, CleanEnergy])
        .with_usage(&["Czochralski Growth"], &["Substrate"])
        .with_properties("9N", "Ingot", &["Crystal Growth"], &[]),
        MaterialDefinition::new(
            "silicon_ingot",
            "Silicon Ingot",
            RawSilicon,
            "Monocrystalline silicon ingots.",
            "China",
            "SI-ING",
            45.00,
            RiskTier::Stable,
        )
        .with_risk(risk(60, 85, false, Subst::None, 10, 45))
        .with_sectors(&[Semiconductors, CleanEnergy])
        .with_usage(&["Wafer Slicing"], &["Substrate"])
        .with_properties("9N", "Ingot", &["Slicing"], &[]),
        MaterialDefinition::new(
            "wafer_300mm",
            "300mm Wafer",
            RawSilicon,
            "Polished 300mm silicon wafers.",
            "Japan",
            "WFR300",
            120.00,
            RiskTier::Critical,
        )
        .with_risk(risk(55, 90, true, Subst::None, 0, 60))
        .with_sectors(&[Semiconductors, QuantumComputing, AiInfrastructure])
        .with_usage(&["Lithography"], &["Substrate"])
        .with_properties("11N", "Wafer", &["Polishing"], &[]),
        MaterialDefinition::new(
            "sic_wafer",
            "SiC Wafer",
            RawSilicon,
            "Silicon Carbide wafers for power electronics.",
            "USA",
            "SIC",
            850.00,
            RiskTier::Elevated,
        )
        .with_risk(risk(40, 80, true, Subst::Limited, 0, 30))
        .with_sectors(&[Semiconductors, CleanEnergy, Batteries])
        .with_usage(&["Epitaxy"], &["Substrate"])
        .with_properties("6N", "Wafer", &["Epitaxy"], &["GaN"]),
        MaterialDefinition::new(
            "gan_wafer",
            "GaN-on-Si",
            RawSilicon,
            "Gallium Nitride on Silicon wafers.",
            "Japan",
            "GAN",
            1200.00,
            RiskTier::Elevated,
        )
        .with_risk(risk(60, 90, true, Subst::Limited, 0, 30))
        .with_sectors(&[Semiconductors, CleanEnergy])
        .with_usage(&["MOCVD"], &["Active Layer"])
        .with_properties("6N", "Wafer", &["MOCVD"], &["SiC"]),
    ]
}

fn critical_metals() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::CriticalMetals;
    vec![
        MaterialDefinition::new(
            "copper",
            "Copper (HG)",
            CriticalMetals,
            "Primary interconnect material.",
            "Chile",
            "HG=F",
            4.12,
            RiskTier::Stable,
        )
        .with_feed("COPPER")
        .with_risk(risk(28, 45, false, Subst::Moderate, 35, 15))
        .with_sectors(&[
            Semiconductors,
            CleanEnergy,
            Batteries,
            Superconductors,
            AiInfrastructure,
        ])
        .with_usage(&["Plating"], &["Interconnects"])
        .with_properties("5N", "Cathode", &["Refining"], &["Aluminum", "Carbon Nanotubes"]),
        MaterialDefinition::new(
            "aluminum",
            "Aluminum",
            CriticalMetals,
            "Legacy interconnects and packaging.",
            "China",
            "ALI=F",
            2300.0,
            RiskTier::Stable,
        )
        .with_feed("ALUMINUM")
        .with_risk(risk(57, 65, false, Subst::High, 70, 20))
        .with_sectors(&[Semiconductors, CleanEnergy, Batteries])
        .with_usage(&["Sputtering"], &["Pads"])
        .with_properties("5N", "Ingot", &["Smelting"], &["Copper"]),
        MaterialDefinition::new(
            "cobalt",
            "Cobalt",
            CriticalMetals,
            "Advanced node barrier layers.",
            "DRC",
            "CO",
            28500.0,
            RiskTier::Critical,
        )
        .with_risk(risk(70, 80, false, Subst::Limited, 30, 90))
        .with_sectors(&[Semiconductors, Batteries])
        .with_usage(&["CVD"], &["Contacts"])
        .with_properties("4N", "Cathode", &["Refining"], &["Ruthenium"]),
        MaterialDefinition::new(
            "tungsten",
            "Tungsten",
            CriticalMetals,
            "Contacts and vias.",
            "China",
            "W",
            320.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(85, 92, true, Subst::Limited, 20, 60))
        .with_sectors(&[Semiconductors])
        .with_usage(&["CVD"], &["Vias"])
        .with_properties("5N", "Powder", &["Reduction"], &["Molybdenum"]),
        MaterialDefinition::new(
            "titanium",
            "Titanium",
            CriticalMetals,
            "Barrier/liner materials.",
            "China",
            "TI",
            6.50,
            RiskTier::Stable,
        )
        .with_risk(risk(35, 60, false, Subst::Moderate, 50, 30))
        .with_sectors(&[Semiconductors, Superconductors])
        .with_usage(&["PVD"], &["Barrier"])
        .with_properties("4N", "Sponge", &["Kroll Process"], &["Tantalum"]),
        MaterialDefinition::new(
            "tantalum",
            "Tantalum",
            CriticalMetals,
            "Capacitors and barriers.",
            "DRC",
            "TA",
            150.0,
            RiskTier::Critical,
        )
        .with_risk(risk(40, 70, false, Subst::Limited, 20, 60))
        .with_sectors(&[Semiconductors])
        .with_usage(&["PVD"], &["Barrier"])
        .with_properties("4N", "Powder", &["Refining"], &["Titanium"]),
    ]
}

fn semiconductor_elements() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::SemiconductorElements;
    vec![
        MaterialDefinition::new(
            "gallium",
            "Gallium",
            SemiconductorElements,
            "Critical for GaN and GaAs chips.",
            "China",
            "GA",
            450.0,
            RiskTier::Critical,
        )
        .with_risk(risk(98, 99, true, Subst::None, 1, 60))
        .with_sectors(&[Semiconductors, CleanEnergy, AiInfrastructure])
        .with_usage(&["MOCVD"], &["Active Layer"])
        .with_properties("6N", "Liquid Metal", &["Refining"], &[]),
        MaterialDefinition::new(
            "germanium",
            "Germanium",
            SemiconductorElements,
            "SiGe chips and fiber optics.",
            "China",
            "GE",
            1350.0,
            RiskTier::Critical,
        )
        .with_risk(risk(65, 80, true, Subst::Limited, 30, 45))
        .with_sectors(&[Semiconductors, CleanEnergy, AiInfrastructure])
        .with_usage(&["Epitaxy"], &["Channel"])
        .with_properties("5N", "Ingot", &["Zone Refining"], &[]),
        MaterialDefinition::new(
            "indium",
            "Indium",
            SemiconductorElements,
            "ITO and InP photonics.",
            "China",
            "IN",
            240.0,
            RiskTier::Critical,
        )
        .with_risk(risk(55, 75, false, Subst::None, 15, 20))
        .with_sectors(&[Semiconductors, CleanEnergy, QuantumComputing])
        .with_usage(&["Sputtering"], &["Transparent Conductors"])
        .with_properties("4N", "Ingot", &["Refining"], &[]),
    ]
}

fn precious_metals() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::PreciousMetals;
    vec![
        MaterialDefinition::new(
            "gold",
            "Gold",
            PreciousMetals,
            "Bonding wires and contacts.",
            "China",
            "GC=F",
            2000.0,
            RiskTier::Stable,
        )
        .with_feed("GOLD")
        .with_risk(risk(10, 30, false, Subst::Moderate, 90, 10))
        .with_sectors(&[Semiconductors, QuantumComputing])
        .with_usage(&["Wire Bonding"], &["Packaging"])
        .with_properties("4N", "Wire", &["Refining"], &["Copper"]),
        MaterialDefinition::new(
            "silver",
            "Silver",
            PreciousMetals,
            "Pastes and plating.",
            "Mexico",
            "SI=F",
            23.0,
            RiskTier::Stable,
        )
        .with_feed("SILVER")
        .with_risk(risk(25, 50, false, Subst::Moderate, 60, 20))
        .with_sectors(&[Semiconductors, CleanEnergy, Superconductors])
        .with_usage(&["Sintering"], &["Backside"])
        .with_properties("4N", "Paste", &["Refining"], &["Copper"]),
        MaterialDefinition::new(
            "platinum",
            "Platinum",
            PreciousMetals,
            "Thin films and catalysts.",
            "South Africa",
            "PL=F",
            900.0,
            RiskTier::Elevated,
        )
        .with_feed("PLATINUM")
        .with_risk(risk(70, 90, false, Subst::Limited, 25, 60))
        .with_sectors(&[Semiconductors, CleanEnergy])
        .with_usage(&["Deposition"], &["Electrodes"])
        .with_properties("3N", "Sponge", &["Refining"], &["Palladium"]),
        MaterialDefinition::new(
            "palladium",
            "Palladium",
            PreciousMetals,
            "Plating and sensors.",
            "Russia",
            "PA",
            980.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(40, 80, false, Subst::Limited, 30, 60))
        .with_sectors(&[Semiconductors, CleanEnergy])
        .with_usage(&["Plating"], &["Finishing"])
        .with_properties("3N", "Sponge", &["Refining"], &["Platinum"]),
    ]
}

fn platinum_group() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::PlatinumGroup;
    vec![
        MaterialDefinition::new(
            "rhodium",
            "Rhodium",
            PlatinumGroup,
            "Catalysts.",
            "South Africa",
            "RH",
            4500.0,
            RiskTier::Critical,
        )
        .with_risk(risk(80, 95, false, Subst::None, 30, 30))
        .with_sectors(&[CleanEnergy])
        .with_usage(&["Catalysis"], &["None"])
        .with_properties("3N", "Sponge", &["Refining"], &[]),
        MaterialDefinition::new(
            "ruthenium",
            "Ruthenium",
            PlatinumGroup,
            "Advanced interconnects.",
            "South Africa",
            "RU",
            450.0,
            RiskTier::Critical,
        )
        .with_risk(risk(90, 98, false, Subst::None, 10, 30))
        .with_sectors(&[Semiconductors, CleanEnergy, AiInfrastructure])
        .with_usage(&["ALD"], &["Interconnects"])
        .with_properties("4N", "Precursor", &["Refining"], &["Cobalt"]),
        MaterialDefinition::new(
            "iridium",
            "Iridium",
            PlatinumGroup,
            "Electrolyzer anodes.",
            "South Africa",
            "IR",
            5000.0,
            RiskTier::Critical,
        )
        .with_risk(risk(85, 95, false, Subst::None, 5, 30))
        .with_sectors(&[Semiconductors, CleanEnergy])
        .with_usage(&["Electrolysis"], &["Anode"])
        .with_properties("3N", "Powder", &["Refining"], &[]),
    ]
}

fn rare_earths() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::RareEarths;
    vec![
        MaterialDefinition::new(
            "neodymium",
            "Neodymium",
            RareEarths,
            "Permanent magnets.",
            "China",
            "ND",
            65.0,
            RiskTier::Critical,
        )
        .with_risk(risk(85, 95, true, Subst::None, 1, 30))
        .with_sectors(&[CleanEnergy, AiInfrastructure])
        .with_usage(&["Sintering"], &["Magnets"])
        .with_properties("3N", "Metal", &["Separation"], &[]),
        MaterialDefinition::new(
            "praseodymium",
            "Praseodymium",
            RareEarths,
            "Magnet alloys.",
            "China",
            "PR",
            70.0,
            RiskTier::Critical,
        )
        .with_risk(risk(85, 95, true, Subst::None, 1, 30))
        .with_sectors(&[CleanEnergy, AiInfrastructure])
        .with_usage(&["Alloying"], &["Magnets"])
        .with_properties("3N", "Metal", &["Separation"], &[]),
        MaterialDefinition::new(
            "dysprosium",
            "Dysprosium",
            RareEarths,
            "High-temp magnets.",
            "China",
            "DY",
            280.0,
            RiskTier::Critical,
        )
        .with_risk(risk(90, 98, true, Subst::None, 0, 30))
        .with_sectors(&[CleanEnergy, AiInfrastructure])
        .with_usage(&["Alloying"], &["Magnets"])
        .with_properties("3N", "Metal", &["Separation"], &[]),
        MaterialDefinition::new(
            "terbium",
            "Terbium",
            RareEarths,
            "Magnet enhancement.",
            "China",
            "TB",
            1200.0,
            RiskTier::Critical,
        )
        .with_risk(risk(90, 98, true, Subst::None, 0, 30))
        .with_sectors(&[CleanEnergy, AiInfrastructure])
        .with_usage(&["Alloying"], &["Magnets"])
        .with_properties("3N", "Metal", &["Separation"], &[]),
    ]
}

fn battery_materials() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::BatteryMaterials;
    vec![
        MaterialDefinition::new(
            "lithium_carbonate",
            "Lithium Carbonate",
            BatteryMaterials,
            "Cathode precursor.",
            "Chile",
            "LCO",
            15.0,
            RiskTier::Critical,
        )
        .with_risk(risk(40, 80, false, Subst::None, 5, 30))
        .with_sectors(&[CleanEnergy, Batteries])
        .with_usage(&["Precipitation"], &["Cathode"])
        .with_properties("99.5%", "Powder", &["Extraction"], &["Sodium"]),
        MaterialDefinition::new(
            "lithium_hydroxide",
            "Lithium Hydroxide",
            BatteryMaterials,
            "High-nickel cathodes.",
            "Australia",
            "LIOH",
            18.0,
            RiskTier::Critical,
        )
        .with_risk(risk(50, 85, false, Subst::None, 5, 30))
        .with_sectors(&[CleanEnergy, Batteries])
        .with_usage(&["Conversion"], &["Cathode"])
        .with_properties("56.5%", "Powder", &["Refining"], &[]),
        MaterialDefinition::new(
            "graphite_natural",
            "Natural Graphite",
            BatteryMaterials,
            "Anode material.",
            "China",
            "GR-NAT",
            0.8,
            RiskTier::Critical,
        )
        .with_risk(risk(65, 80, true, Subst::Limited, 0, 45))
        .with_sectors(&[CleanEnergy, Batteries])
        .with_usage(&["Spheronization"], &["Anode"])
        .with_properties("99.95%", "Flake", &["Purification"], &["Synthetic Graphite", "Silicon"]),
        MaterialDefinition::new(
            "lipf6",
            "LiPF6",
            BatteryMaterials,
            "Electrolyte salt.",
            "China",
            "LIPF6",
            12.0,
            RiskTier::Critical,
        )
        .with_risk(risk(70, 90, false, Subst::None, 0, 30))
        .with_sectors(&[CleanEnergy, Batteries])
        .with_usage(&["Synthesis"], &["Electrolyte"])
        .with_properties("99.9%", "Crystal", &["Fluorination"], &[]),
    ]
}

fn superconductor_materials() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::SuperconductorMaterials;
    vec![
        MaterialDefinition::new(
            "niobium",
            "Niobium",
            SuperconductorMaterials,
            "LTS wires (NbTi, Nb3Sn).",
            "Brazil",
            "NB",
            45.0,
            RiskTier::Critical,
        )
        .with_risk(risk(90, 98, false, Subst::None, 0, 60))
        .with_sectors(&[Superconductors, QuantumComputing])
        .with_usage(&["Melting"], &["Wire"])
        .with_properties("3N", "Ingot", &["Refining"], &[]),
        MaterialDefinition::new(
            "yttrium",
            "Yttrium",
            SuperconductorMaterials,
            "REBCO HTS tapes.",
            "China",
            "Y",
            35.0,
            RiskTier::Critical,
        )
        .with_risk(risk(95, 99, true, Subst::None, 0, 30))
        .with_sectors(&[CleanEnergy, Superconductors])
        .with_usage(&["Deposition"], &["Superconductor"])
        .with_properties("4N", "Oxide", &["Separation"], &[]),
        MaterialDefinition::new(
            "helium_liquid",
            "Liquid Helium",
            SuperconductorMaterials,
            "Cryogenic cooling (4.2K).",
            "USA",
            "LHE",
            120.0,
            RiskTier::Critical,
        )
        .with_risk(risk(50, 85, false, Subst::None, 0, 10))
        .with_sectors(&[Semiconductors, Superconductors, QuantumComputing])
        .with_usage(&["Liquefaction"], &["Cooling"])
        .with_properties("5N", "Liquid", &["Extraction"], &[]),
    ]
}

fn industrial_gases() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::IndustrialGases;
    vec![
        MaterialDefinition::new(
            "neon",
            "Neon Gas",
            IndustrialGases,
            "DUV lithography buffer gas.",
            "Ukraine",
            "NE",
            150.0,
            RiskTier::Critical,
        )
        .with_risk(risk(50, 70, false, Subst::None, 0, 90))
        .with_sectors(&[Semiconductors])
        .with_usage(&["Lithography"], &["Patterning"])
        .with_properties("5N", "Gas", &["Distillation"], &[]),
        MaterialDefinition::new(
            "helium_gas",
            "Helium Gas",
            IndustrialGases,
            "Cooling and purging.",
            "USA",
            "HE",
            400.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(40, 75, false, Subst::None, 10, 30))
        .with_sectors(&[Semiconductors, Superconductors, QuantumComputing])
        .with_usage(&["Cooling"], &["Chamber"])
        .with_properties("6N", "Gas", &["Extraction"], &[]),
        MaterialDefinition::new(
            "nf3",
            "Nitrogen Trifluoride",
            IndustrialGases,
            "Chamber cleaning gas.",
            "China",
            "NF3",
            80.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(45, 80, false, Subst::Limited, 0, 30))
        .with_sectors(&[Semiconductors, CleanEnergy])
        .with_usage(&["Cleaning"], &["Chamber"])
        .with_properties("4N", "Gas", &["Synthesis"], &[]),
        MaterialDefinition::new(
            "silane",
            "Silane",
            IndustrialGases,
            "Silicon deposition precursor.",
            "Japan",
            "SIH4",
            110.0,
            RiskTier::Critical,
        )
        .with_risk(risk(40, 80, false, Subst::None, 0, 20))
        .with_sectors(&[Semiconductors, CleanEnergy, Batteries])
        .with_usage(&["CVD"], &["Silicon"])
        .with_properties("6N", "Gas", &["Synthesis"], &[]),
    ]
}

fn specialty_chemicals() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::SpecialtyChemicals;
    vec![
        MaterialDefinition::new(
            "hf",
            "Hydrofluoric Acid",
            SpecialtyChemicals,
            "Oxide etching.",
            "China",
            "HF",
            2.5,
            RiskTier::Critical,
        )
        .with_risk(risk(60, 85, true, Subst::None, 0, 15))
        .with_sectors(&[Semiconductors, CleanEnergy, Batteries])
        .with_usage(&["Etching"], &["Oxide"])
        .with_properties("UP-S", "Liquid", &["Purification"], &[]),
        MaterialDefinition::new(
            "photoresist_euv",
            "EUV Photoresist",
            SpecialtyChemicals,
            "Patterning material.",
            "Japan",
            "PR-EUV",
            5000.0,
            RiskTier::Critical,
        )
        .with_risk(risk(90, 98, true, Subst::None, 0, 10))
        .with_sectors(&[Semiconductors, AiInfrastructure])
        .with_usage(&["Lithography"], &["Patterning"])
        .with_properties("Ultra", "Liquid", &["Synthesis"], &[]),
        MaterialDefinition::new(
            "cmp_slurry",
            "CMP Slurry",
            SpecialtyChemicals,
            "Planarization.",
            "USA",
            "CMP",
            45.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(40, 80, false, Subst::Limited, 0, 20))
        .with_sectors(&[Semiconductors])
        .with_usage(&["CMP"], &["Interconnects"])
        .with_properties("Ultra", "Slurry", &["Mixing"], &[]),
    ]
}

fn packaging_materials() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::PackagingMaterials;
    vec![
        MaterialDefinition::new(
            "abf_substrate",
            "ABF Substrate",
            PackagingMaterials,
            "High-performance CPU/GPU packaging.",
            "Japan",
            "ABF",
            200.0,
            RiskTier::Critical,
        )
        .with_risk(risk(95, 99, false, Subst::None, 0, 15))
        .with_sectors(&[Semiconductors, AiInfrastructure])
        .with_usage(&["Packaging"], &["Substrate"])
        .with_properties("N/A", "Film", &["Lamination"], &[]),
        MaterialDefinition::new(
            "bonding_wire_au",
            "Gold Bonding Wire",
            PackagingMaterials,
            "Interconnects.",
            "Japan",
            "BW-AU",
            2500.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(40, 80, false, Subst::Moderate, 10, 20))
        .with_sectors(&[Semiconductors])
        .with_usage(&["Wire Bonding"], &["Packaging"])
        .with_properties("4N", "Wire", &["Drawing"], &["Copper"]),
    ]
}

fn advanced_materials() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::AdvancedMaterials;
    vec![
        MaterialDefinition::new(
            "graphene",
            "Graphene",
            AdvancedMaterials,
            "2D material.",
            "Global",
            "GRPH",
            100.0,
            RiskTier::Stable,
        )
        .with_risk(risk(20, 50, false, Subst::None, 0, 0))
        .with_sectors(&[
            Semiconductors,
            CleanEnergy,
            Batteries,
            Superconductors,
            QuantumComputing,
        ])
        .with_usage(&["R&D"], &["Active"])
        .with_properties("Electronic", "Sheet", &["CVD"], &[]),
        MaterialDefinition::new(
            "quantum_dots",
            "Quantum Dots",
            AdvancedMaterials,
            "Photonics.",
            "USA",
            "QD",
            500.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(50, 80, false, Subst::None, 0, 0))
        .with_sectors(&[CleanEnergy, QuantumComputing])
        .with_usage(&["Synthesis"], &["Photonics"])
        .with_properties("Electronic", "Solution", &["Synthesis"], &[]),
    ]
}

fn dopants() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::Dopants;
    vec![
        MaterialDefinition::new(
            "boron",
            "Boron",
            Dopants,
            "P-type dopant for silicon.",
            "Turkey",
            "B",
            3.5,
            RiskTier::Elevated,
        )
        .with_risk(risk(70, 90, false, Subst::None, 0, 60))
        .with_sectors(&[Semiconductors, CleanEnergy, AiInfrastructure])
        .with_usage(&["Ion Implantation", "Diffusion"], &["Active"])
        .with_properties("6N", "Gas (B2H6)", &["Implantation"], &["Aluminum"]),
        MaterialDefinition::new(
            "phosphorus",
            "Phosphorus",
            Dopants,
            "N-type dopant for silicon.",
            "China",
            "P",
            2.8,
            RiskTier::Elevated,
        )
        .with_risk(risk(60, 85, false, Subst::None, 0, 45))
        .with_sectors(&[Semiconductors, CleanEnergy, Batteries, AiInfrastructure])
        .with_usage(&["Ion Implantation", "Diffusion"], &["Active"])
        .with_properties("6N", "Gas (PH3)", &["Implantation"], &["Arsenic"]),
        MaterialDefinition::new(
            "arsenic",
            "Arsenic",
            Dopants,
            "N-type dopant, III-V compounds.",
            "China",
            "AS",
            1.5,
            RiskTier::Critical,
        )
        .with_risk(risk(70, 90, true, Subst::Limited, 5, 30))
        .with_sectors(&[Semiconductors, QuantumComputing])
        .with_usage(&["Ion Implantation", "MBE"], &["Active"])
        .with_properties("7N", "Gas (AsH3)", &["Epitaxy"], &["Phosphorus"]),
        MaterialDefinition::new(
            "antimony",
            "Antimony",
            Dopants,
            "N-type dopant, thermoelectrics.",
            "China",
            "SB",
            12.0,
            RiskTier::Critical,
        )
        .with_risk(risk(80, 95, true, Subst::Limited, 20, 45))
        .with_sectors(&[Semiconductors, Batteries])
        .with_usage(&["Alloying", "Implantation"], &["Active"])
        .with_properties("5N", "Metal", &["Refining"], &[]),
    ]
}

fn hydrogen_economy() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::HydrogenEconomy;
    vec![
        MaterialDefinition::new(
            "green_hydrogen",
            "Green Hydrogen",
            HydrogenEconomy,
            "Electrolysis-produced H2.",
            "Global",
            "H2-G",
            5.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(20, 50, false, Subst::None, 0, 3))
        .with_sectors(&[CleanEnergy])
        .with_usage(&["Electrolysis"], &["Fuel"])
        .with_properties("5N", "Gas", &["Electrolysis"], &[]),
        MaterialDefinition::new(
            "pem_membrane",
            "PEM Membrane",
            HydrogenEconomy,
            "Proton exchange membrane.",
            "USA",
            "PEM",
            800.0,
            RiskTier::Critical,
        )
        .with_risk(risk(60, 90, false, Subst::None, 10, 20))
        .with_sectors(&[CleanEnergy])
        .with_usage(&["Extrusion"], &["Membrane"])
        .with_properties("N/A", "Film", &["Fluorination"], &[]),
        MaterialDefinition::new(
            "catalyst_platinum_h2",
            "Platinum Catalyst",
            HydrogenEconomy,
            "Fuel cell catalyst.",
            "South Africa",
            "PT-CAT",
            35000.0,
            RiskTier::Critical,
        )
        .with_risk(risk(70, 90, false, Subst::Limited, 50, 30))
        .with_sectors(&[CleanEnergy])
        .with_usage(&["Coating"], &["Catalyst"])
        .with_properties("4N", "Nanoparticle", &["Coating"], &["Iridium"]),
        MaterialDefinition::new(
            "carbon_fiber_h2",
            "Carbon Fiber (H2 Tanks)",
            HydrogenEconomy,
            "Type IV hydrogen storage tanks.",
            "Japan",
            "CF-H2",
            25.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(50, 85, false, Subst::None, 5, 30))
        .with_sectors(&[CleanEnergy])
        .with_usage(&["Winding"], &["Tank"])
        .with_properties("Aerospace", "Fiber", &["Weaving"], &[]),
    ]
}

fn solar_materials() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::SolarMaterials;
    vec![
        MaterialDefinition::new(
            "solar_grade_silicon",
            "Solar-Grade Silicon",
            SolarMaterials,
            "6N-7N polysilicon for PV.",
            "China",
            "SI-SOL",
            8.0,
            RiskTier::Stable,
        )
        .with_risk(risk(80, 95, false, Subst::None, 10, 45))
        .with_sectors(&[CleanEnergy])
        .with_usage(&["Siemens Process"], &["Wafer"])
        .with_properties("7N", "Chunk", &["Purification"], &[]),
        MaterialDefinition::new(
            "silver_paste",
            "Silver Paste",
            SolarMaterials,
            "Front contact metallization.",
            "Japan",
            "AG-PST",
            900.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(40, 75, false, Subst::Limited, 30, 20))
        .with_sectors(&[CleanEnergy])
        .with_usage(&["Screen Printing"], &["Contact"])
        .with_properties("4N", "Paste", &["Sintering"], &["Copper"]),
        MaterialDefinition::new(
            "eva_encapsulant",
            "EVA Encapsulant",
            SolarMaterials,
            "Solar cell protection film.",
            "China",
            "EVA",
            2.5,
            RiskTier::Stable,
        )
        .with_risk(risk(60, 80, false, Subst::Moderate, 5, 30))
        .with_sectors(&[CleanEnergy])
        .with_usage(&["Lamination"], &["Encapsulant"])
        .with_properties("Solar", "Film", &["Extrusion"], &["POE"]),
        MaterialDefinition::new(
            "perovskite_precursor",
            "Perovskite Precursor",
            SolarMaterials,
            "Lead halide perovskite materials.",
            "Global",
            "PROV",
            500.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(30, 60, false, Subst::None, 0, 10))
        .with_sectors(&[CleanEnergy])
        .with_usage(&["Deposition"], &["Absorber"])
        .with_properties("4N", "Powder", &["Synthesis"], &[]),
    ]
}

fn ald_precursors() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::AldPrecursors;
    vec![
        MaterialDefinition::new(
            "tma",
            "Trimethylaluminum (TMA)",
            AldPrecursors,
            "Al2O3 ALD precursor.",
            "USA",
            "TMA",
            250.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(40, 80, false, Subst::None, 0, 15))
        .with_sectors(&[Semiconductors, CleanEnergy, AiInfrastructure])
        .with_usage(&["ALD"], &["Gate Oxide", "Passivation"])
        .with_properties("6N", "Liquid", &["Synthesis"], &[]),
        MaterialDefinition::new(
            "tdmat",
            "TDMAT",
            AldPrecursors,
            "TiN ALD precursor.",
            "Japan",
            "TDMAT",
            400.0,
            RiskTier::Critical,
        )
        .with_risk(risk(50, 85, true, Subst::None, 0, 10))
        .with_sectors(&[Semiconductors, AiInfrastructure])
        .with_usage(&["ALD"], &["Barrier", "Electrode"])
        .with_properties("5N", "Liquid", &["Purification"], &["TEMAT"]),
        MaterialDefinition::new(
            "temaz",
            "TEMAZ",
            AldPrecursors,
            "ZrO2 high-k ALD precursor.",
            "USA",
            "TEMAZ",
            600.0,
            RiskTier::Critical,
        )
        .with_risk(risk(45, 80, true, Subst::Limited, 0, 10))
        .with_sectors(&[Semiconductors, QuantumComputing, AiInfrastructure])
        .with_usage(&["ALD"], &["Gate Oxide"])
        .with_properties("5N", "Liquid", &["Synthesis"], &["TDMAZ"]),
        MaterialDefinition::new(
            "ru_precursor",
            "Ruthenium Precursor",
            AldPrecursors,
            "Ru interconnect ALD.",
            "Belgium",
            "RU-ALD",
            2000.0,
            RiskTier::Critical,
        )
        .with_risk(risk(60, 90, true, Subst::None, 0, 10))
        .with_sectors(&[Semiconductors, AiInfrastructure])
        .with_usage(&["ALD"], &["Interconnects"])
        .with_properties("5N", "Liquid", &["Synthesis"], &[]),
    ]
}

fn quantum_materials() -> Vec<MaterialDefinition> {
    use types::MaterialCategory::QuantumMaterials;
    vec![
        MaterialDefinition::new(
            "dilution_fridge_he3",
            "Helium-3",
            QuantumMaterials,
            "Dilution refrigerator coolant.",
            "USA",
            "HE3",
            2000.0,
            RiskTier::Critical,
        )
        .with_risk(risk(80, 95, true, Subst::None, 90, 60))
        .with_sectors(&[Superconductors, QuantumComputing])
        .with_usage(&["Dilution"], &["Cooling"])
        .with_properties("5N", "Gas", &["Tritium Decay"], &[]),
        MaterialDefinition::new(
            "josephson_junction",
            "Josephson Junction Material",
            QuantumMaterials,
            "Al/AlOx/Al superconducting junctions.",
            "USA",
            "JJ",
            5000.0,
            RiskTier::Critical,
        )
        .with_risk(risk(50, 85, true, Subst::None, 0, 10))
        .with_sectors(&[Superconductors, QuantumComputing])
        .with_usage(&["Shadow Evaporation"], &["Qubit"])
        .with_properties("6N", "Thin Film", &["Oxidation"], &[]),
        MaterialDefinition::new(
            "trapped_ion_ytterbium",
            "Ytterbium Ions",
            QuantumMaterials,
            "Trapped ion qubit atoms.",
            "China",
            "YB",
            1500.0,
            RiskTier::Critical,
        )
        .with_risk(risk(90, 98, true, Subst::Limited, 0, 30))
        .with_sectors(&[QuantumComputing])
        .with_usage(&["Purification"], &["Qubit"])
        .with_properties("5N", "Metal", &["Separation"], &["Barium", "Calcium"]),
        MaterialDefinition::new(
            "diamond_nv_center",
            "NV Diamond",
            QuantumMaterials,
            "Nitrogen-vacancy diamond qubits.",
            "USA",
            "NV-D",
            10000.0,
            RiskTier::Elevated,
        )
        .with_risk(risk(40, 70, false, Subst::None, 0, 20))
        .with_sectors(&[QuantumComputing])
        .with_usage(&["CVD Growth", "Implantation"], &["Qubit"])
        .with_properties("Electronic", "Crystal", &["Ion Implantation"], &["SiC"]),
    ]
}

/// The full built-in catalog, concatenated in display order.
pub fn all_materials() -> Vec<MaterialDefinition> {
    let mut materials = Vec::new();
    materials.extend(raw_silicon());
    materials.extend(critical_metals());
    materials.extend(semiconductor_elements());
    materials.extend(precious_metals());
    materials.extend(platinum_group());
    materials.extend(rare_earths());
    materials.extend(battery_materials());
    materials.extend(superconductor_materials());
    materials.extend(industrial_gases());
    materials.extend(specialty_chemicals());
    materials.extend(packaging_materials());
    materials.extend(advanced_materials());
    materials.extend(dopants());
    materials.extend(hydrogen_economy());
    materials.extend(solar_materials());
    materials.extend(ald_precursors());
    materials.extend(quantum_materials());
    materials
}
