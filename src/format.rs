//! Text rendering of catalog values for alert lists and detail panels.

use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::{ConjunctionEvent, ObjectStatus, RiskLevel};
use crate::palette::{risk_color, Color};

/// Two fractional digits in exponent form, e.g. `1.23e-4` or `1.00e+0`.
///
/// Non-negative exponents carry an explicit `+`, which Rust's `{:e}` omits.
pub fn format_probability(pc: f64) -> String {
    let formatted = format!("{:.2e}", pc);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{:.0} m", meters)
    } else {
        format!("{:.2} km", meters / 1000.0)
    }
}

pub fn format_time_to_tca(hours: f64) -> String {
    format!("{}h", hours)
}

pub fn status_badge(status: ObjectStatus) -> &'static str {
    match status {
        ObjectStatus::Active => "[ON]",
        ObjectStatus::Inactive => "[OFF]",
    }
}

pub fn risk_badge(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "[!]",
        RiskLevel::Medium => "[~]",
        RiskLevel::Low => "[-]",
    }
}

/// One line of the conjunction alert list, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AlertRow {
    pub id: String,
    pub risk_level: RiskLevel,
    pub badge: String,
    pub color: Color,
    pub primary_satellite_id: String,
    pub primary_name: String,
    pub secondary_name: String,
    pub probability: String,
    pub miss_distance: String,
    pub time_to_tca: String,
}

impl AlertRow {
    pub fn from_event(event: &ConjunctionEvent) -> Self {
        AlertRow {
            id: event.id.clone(),
            risk_level: event.risk_level,
            badge: risk_badge(event.risk_level).to_string(),
            color: risk_color(event.risk_level),
            primary_satellite_id: event.primary_satellite_id.clone(),
            primary_name: event.primary_name.clone(),
            secondary_name: event.secondary_name.clone(),
            probability: format_probability(event.probability_collision),
            miss_distance: format_distance(event.miss_distance_m),
            time_to_tca: format_time_to_tca(event.time_to_tca_hours),
        }
    }
}
