use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::{
    sort_by_risk, CatalogSnapshot, ConjunctionEvent, FleetOverview, RiskSummary, TrackedObject,
};
use crate::format::AlertRow;

#[derive(Debug, Deserialize, ToSchema)]
pub struct OverviewRequest {
    #[serde(default)]
    pub satellites: Vec<TrackedObject>,
    #[serde(default)]
    pub conjunctions: Vec<ConjunctionEvent>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OverviewResponse {
    pub overview: FleetOverview,
    pub status: String,
    pub summary: RiskSummary,
    /// Conjunction alerts, highest risk first.
    pub alerts: Vec<AlertRow>,
}

#[utoipa::path(
    post,
    path = "/api/overview",
    tag = "overview",
    request_body = OverviewRequest,
    responses(
        (status = 200, description = "Fleet statistics and ordered alerts", body = OverviewResponse)
    )
)]
pub async fn overview(Json(request): Json<OverviewRequest>) -> Json<OverviewResponse> {
    let mut snapshot = CatalogSnapshot::new(request.satellites, request.conjunctions);
    sort_by_risk(&mut snapshot.conjunctions);

    let overview = FleetOverview::from_snapshot(&snapshot);
    Json(OverviewResponse {
        status: overview.status_label().to_string(),
        overview,
        summary: RiskSummary::from_events(&snapshot.conjunctions),
        alerts: snapshot.conjunctions.iter().map(AlertRow::from_event).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{event, object};
    use crate::catalog::{ObjectStatus, RiskLevel};

    #[tokio::test]
    async fn orders_alerts_and_counts_risk() {
        let request = OverviewRequest {
            satellites: vec![
                object("sat_iss", 420.0, ObjectStatus::Active),
                object("sat_debris", 790.0, ObjectStatus::Inactive),
            ],
            conjunctions: vec![
                event("low", "sat_iss", RiskLevel::Low),
                event("high", "sat_iss", RiskLevel::High),
                event("medium", "sat_iss", RiskLevel::Medium),
            ],
        };
        let Json(body) = overview(Json(request)).await;

        let ids: Vec<_> = body.alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "medium", "low"]);
        assert_eq!(body.summary.high_risk, 1);
        assert_eq!(body.overview.active_objects, 1);
        assert_eq!(body.status, "Action required");
    }

    #[tokio::test]
    async fn nothing_supplied_is_nominal() {
        let Json(body) = overview(Json(OverviewRequest {
            satellites: vec![],
            conjunctions: vec![],
        }))
        .await;
        assert_eq!(body.status, "Nominal");
        assert!(body.alerts.is_empty());
    }
}
