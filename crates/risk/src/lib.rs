//! Risk derivation over the material catalog.
//!
//! # Modules
//!
//! - [`aggregate`]: deterministic category and sector risk scoring
//! - [`geo`]: per-country concentration risk rollup
//! - [`alerts`]: threshold-triggered risk alerts
//! - [`indices`]: dashboard index assembly (the only place jitter is applied)
//!
//! The aggregation primitives are pure functions of the catalog; the small
//! presentation jitter lives exclusively in [`indices`], keeping the
//! primitives independently testable.

pub mod aggregate;
pub mod alerts;
pub mod geo;
pub mod indices;

pub use aggregate::{category_risk, sector_risk};
pub use alerts::generate_alerts;
pub use geo::geo_risks;
pub use indices::supply_chain_indices;
