//! Data service REST endpoints.
//!
//! # Endpoints
//!
//! - `GET /api/commodities` - full commodity collection with price history
//! - `GET /api/indices` - aggregate supply-chain indices
//! - `GET /api/geo-risks` - top-10 country risk rollup
//! - `GET /api/alerts` - active threshold alerts
//! - `GET /api/materials/{id}` - a single catalog definition
//!
//! Handlers extract from state and return JSON; all derivation lives in the
//! service crate.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use catalog::MaterialDefinition;
use types::{Commodity, GeoRisk, RiskAlert, SupplyChainIndex};

use crate::error::{AppError, AppResult};
use crate::state::ServerState;

/// Response for `/api/commodities`.
#[derive(Debug, Serialize)]
pub struct CommoditiesResponse {
    pub commodities: Vec<Commodity>,
    pub count: usize,
}

/// Response for `/api/indices`.
#[derive(Debug, Serialize)]
pub struct IndicesResponse {
    pub indices: Vec<SupplyChainIndex>,
    pub count: usize,
}

/// Response for `/api/geo-risks`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRisksResponse {
    pub geo_risks: Vec<GeoRisk>,
    pub count: usize,
}

/// Response for `/api/alerts`.
#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<RiskAlert>,
    pub count: usize,
}

/// Full commodity collection: `GET /api/commodities`
pub async fn get_commodities(State(state): State<ServerState>) -> Json<CommoditiesResponse> {
    let commodities = state.service.commodities().await;
    let count = commodities.len();
    Json(CommoditiesResponse { commodities, count })
}

/// Aggregate indices: `GET /api/indices`
pub async fn get_indices(State(state): State<ServerState>) -> Json<IndicesResponse> {
    let indices = state.service.supply_chain_indices().await;
    let count = indices.len();
    Json(IndicesResponse { indices, count })
}

/// Country risk rollup: `GET /api/geo-risks`
pub async fn get_geo_risks(State(state): State<ServerState>) -> Json<GeoRisksResponse> {
    let geo_risks = state.service.geo_risks().await;
    let count = geo_risks.len();
    Json(GeoRisksResponse { geo_risks, count })
}

/// Active alerts: `GET /api/alerts`
pub async fn get_alerts(State(state): State<ServerState>) -> Json<AlertsResponse> {
    let alerts = state.service.risk_alerts().await;
    let count = alerts.len();
    Json(AlertsResponse { alerts, count })
}

/// Single catalog definition: `GET /api/materials/{id}`
pub async fn get_material(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MaterialDefinition>> {
    state
        .service
        .catalog()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("material {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_risks_response_field_names() {
        let response = GeoRisksResponse {
            geo_risks: vec![],
            count: 0,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"geoRisks\":[]"));
        assert!(json.contains("\"count\":0"));
    }
}
