//! Country-level concentration risk rollup.

use std::collections::HashMap;

use catalog::Catalog;
use types::GeoRisk;

/// Maximum number of countries returned.
const MAX_COUNTRIES: usize = 10;

/// Maximum material names attached per country.
const MAX_CONTROLLED_MATERIALS: usize = 6;

struct CountryGroup {
    country: String,
    materials: Vec<String>,
    risk_sum: f64,
}

/// Roll up the catalog into the top-10 producer countries by concentration
/// risk, descending.
///
/// Materials are grouped by their exact `top_producer` string; no alias or
/// country-code normalization is applied, so combined labels such as
/// "Global" form their own groups. Each country's score is the average of
/// `primary_producer_share + 20 (if export controlled)` over its materials,
/// rounded and clamped to 100. The sort is stable, so equal scores keep
/// catalog order.
pub fn geo_risks(catalog: &Catalog) -> Vec<GeoRisk> {
    let mut groups: Vec<CountryGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for material in catalog.materials() {
        let idx = *index.entry(material.top_producer.as_str()).or_insert_with(|| {
            groups.push(CountryGroup {
                country: material.top_producer.clone(),
                materials: Vec::new(),
                risk_sum: 0.0,
            });
            groups.len() - 1
        });

        let group = &mut groups[idx];
        group.materials.push(material.name.clone());
        group.risk_sum += material.supply_chain_risk.primary_producer_share as f64
            + if material.supply_chain_risk.export_controlled {
                20.0
            } else {
                0.0
            };
    }

    let mut risks: Vec<GeoRisk> = groups
        .into_iter()
        .map(|group| {
            let count = group.materials.len();
            let description = country_description(&group.country, count);
            GeoRisk {
                country: group.country,
                risk_score: ((group.risk_sum / count as f64).round() as u32).min(100),
                controlled_materials: group
                    .materials
                    .into_iter()
                    .take(MAX_CONTROLLED_MATERIALS)
                    .collect(),
                description,
            }
        })
        .collect();

    risks.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    risks.truncate(MAX_COUNTRIES);
    risks
}

/// Curated narrative for well-known producer countries, with a generic
/// fallback for the rest.
fn country_description(country: &str, material_count: usize) -> String {
    match country {
        "China" => "Dominant supplier of rare earths, gallium, and germanium. Export controls on critical semiconductor inputs remain in effect.".to_string(),
        "DRC" => "Primary source of artisanal cobalt. Political instability and ESG concerns create chronic supply volatility.".to_string(),
        "Russia" => "Key supplier of palladium and neon gas. Ongoing sanctions create supply uncertainty for western fabs.".to_string(),
        "South Africa" => "Controls majority of platinum group metals. Power grid instability affects mining operations.".to_string(),
        "Chile" => "Major copper producer. Water rights and environmental regulations impact expansion capacity.".to_string(),
        "Australia" => "Significant lithium and rare earth reserves. Long shipping distances to Asian markets.".to_string(),
        "Japan" => "Critical wafer and specialty chemical supplier. Earthquake and tsunami risk to coastal facilities.".to_string(),
        "USA" => "Reshoring efforts face permitting and labor challenges. Water scarcity in Arizona fab corridor.".to_string(),
        "Taiwan" => "Produces >90% of advanced logic chips. Geopolitical tensions create strategic vulnerability.".to_string(),
        "Germany" => "Key specialty chemical and gas supplier. Energy cost volatility affects production economics.".to_string(),
        _ => format!(
            "Supplies {material_count} tracked materials. Regional factors may affect supply continuity."
        ),
    }
}

// =============================================================================
// Tests
// =============================================================================
