use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::snapshot::CatalogSnapshot;
use crate::catalog::types::{ConjunctionEvent, RiskLevel};

/// Stable sort into display order: HIGH, then MEDIUM, then LOW.
pub fn sort_by_risk(events: &mut [ConjunctionEvent]) {
    events.sort_by_key(|e| e.risk_level);
}

/// Conjunctions listed on an object's detail panel, i.e. where it is the primary.
pub fn conjunctions_for<'a>(
    events: &'a [ConjunctionEvent],
    object_id: &str,
) -> Vec<&'a ConjunctionEvent> {
    events
        .iter()
        .filter(|e| e.primary_satellite_id == object_id)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RiskSummary {
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
}

impl RiskSummary {
    pub fn from_events(events: &[ConjunctionEvent]) -> Self {
        events
            .iter()
            .fold(RiskSummary::default(), |mut acc, e| {
                match e.risk_level {
                    RiskLevel::High => acc.high_risk += 1,
                    RiskLevel::Medium => acc.medium_risk += 1,
                    RiskLevel::Low => acc.low_risk += 1,
                }
                acc
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FleetOverview {
    pub total_objects: usize,
    pub active_objects: usize,
    pub inactive_objects: usize,
    pub total_conjunctions: usize,
    pub high_risk_conjunctions: usize,
    pub action_required: bool,
}

impl FleetOverview {
    pub fn from_snapshot(snapshot: &CatalogSnapshot) -> Self {
        let active = snapshot.satellites.iter().filter(|s| s.is_active()).count();
        let high_risk = snapshot
            .conjunctions
            .iter()
            .filter(|c| c.risk_level == RiskLevel::High)
            .count();

        FleetOverview {
            total_objects: snapshot.satellites.len(),
            active_objects: active,
            inactive_objects: snapshot.satellites.len() - active,
            total_conjunctions: snapshot.conjunctions.len(),
            high_risk_conjunctions: high_risk,
            action_required: high_risk > 0,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.action_required {
            "Action required"
        } else {
            "Nominal"
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{event, object};
    use super::*;
    use crate::catalog::types::ObjectStatus;

    #[test]
    fn sorts_high_medium_low_keeping_feed_order() {
        let mut events = vec![
            event("a", "sat_1", RiskLevel::Low),
            event("b", "sat_1", RiskLevel::High),
            event("c", "sat_2", RiskLevel::Medium),
            event("d", "sat_2", RiskLevel::High),
        ];
        sort_by_risk(&mut events);
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn filters_by_primary_object() {
        let events = vec![
            event("a", "sat_1", RiskLevel::Low),
            event("b", "sat_2", RiskLevel::High),
            event("c", "sat_1", RiskLevel::Medium),
        ];
        let ids: Vec<_> = conjunctions_for(&events, "sat_1")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(conjunctions_for(&events, "sat_3").is_empty());
    }

    #[test]
    fn counts_per_risk_level() {
        let events = vec![
            event("a", "s", RiskLevel::High),
            event("b", "s", RiskLevel::High),
            event("c", "s", RiskLevel::Low),
        ];
        assert_eq!(
            RiskSummary::from_events(&events),
            RiskSummary {
                high_risk: 2,
                medium_risk: 0,
                low_risk: 1
            }
        );
    }

    #[test]
    fn overview_flags_high_risk() {
        let snapshot = CatalogSnapshot::new(
            vec![
                object("sat_iss", 420.0, ObjectStatus::Active),
                object("sat_demo1", 550.0, ObjectStatus::Active),
                object("sat_debris", 790.0, ObjectStatus::Inactive),
            ],
            vec![
                event("a", "sat_iss", RiskLevel::High),
                event("b", "sat_demo1", RiskLevel::Low),
            ],
        );
        let overview = FleetOverview::from_snapshot(&snapshot);
        assert_eq!(overview.total_objects, 3);
        assert_eq!(overview.active_objects, 2);
        assert_eq!(overview.inactive_objects, 1);
        assert_eq!(overview.total_conjunctions, 2);
        assert_eq!(overview.high_risk_conjunctions, 1);
        assert_eq!(overview.status_label(), "Action required");
    }

    #[test]
    fn empty_snapshot_is_nominal() {
        let overview = FleetOverview::from_snapshot(&CatalogSnapshot::default());
        assert_eq!(overview.total_objects, 0);
        assert!(!overview.action_required);
        assert_eq!(overview.status_label(), "Nominal");
    }
}
