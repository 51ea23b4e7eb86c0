use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::{ObjectStatus, RiskLevel};

/// A `#rrggbb` colour as used by the globe and list views.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn hex(value: &str) -> Self {
        Color(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const DEFAULT_OBJECT_COLOR: &str = "#60a5fa";
pub const INACTIVE_COLOR: &str = "#6b7280";

const KNOWN_OBJECTS: [(&str, &str); 5] = [
    ("sat_iss", "#3b82f6"),
    ("sat_demo1", "#22c55e"),
    ("sat_starlink", "#a855f7"),
    ("sat_debris", "#ef4444"),
    ("sat_cubesat", "#06b6d4"),
];

/// Object colour lookup. Inactive objects are always drawn in the inactive
/// colour; active objects use their mapped colour or `default`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Palette {
    #[serde(default = "default_object_color")]
    pub default: Color,
    #[serde(default = "default_inactive_color")]
    pub inactive: Color,
    #[serde(default = "default_objects")]
    pub objects: HashMap<String, Color>,
}

fn default_object_color() -> Color {
    Color::hex(DEFAULT_OBJECT_COLOR)
}

fn default_inactive_color() -> Color {
    Color::hex(INACTIVE_COLOR)
}

fn default_objects() -> HashMap<String, Color> {
    KNOWN_OBJECTS
        .iter()
        .map(|(id, hex)| (id.to_string(), Color::hex(hex)))
        .collect()
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            default: default_object_color(),
            inactive: default_inactive_color(),
            objects: default_objects(),
        }
    }
}

impl Palette {
    pub fn color_for(&self, object_id: &str, status: ObjectStatus) -> Color {
        match status {
            ObjectStatus::Inactive => self.inactive.clone(),
            ObjectStatus::Active => self
                .objects
                .get(object_id)
                .cloned()
                .unwrap_or_else(|| self.default.clone()),
        }
    }
}

/// [`Palette::color_for`] on the built-in palette.
pub fn color_for(object_id: &str, status: ObjectStatus) -> Color {
    Palette::default().color_for(object_id, status)
}

pub fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::High => Color::hex("#ef4444"),
        RiskLevel::Medium => Color::hex("#eab308"),
        RiskLevel::Low => Color::hex("#22c55e"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_active_objects_use_their_color() {
        assert_eq!(color_for("sat_iss", ObjectStatus::Active).as_str(), "#3b82f6");
        assert_eq!(color_for("sat_debris", ObjectStatus::Active).as_str(), "#ef4444");
    }

    #[test]
    fn unknown_active_objects_fall_back_to_default() {
        assert_eq!(color_for("sat_unknown", ObjectStatus::Active).as_str(), DEFAULT_OBJECT_COLOR);
        assert_eq!(color_for("", ObjectStatus::Active).as_str(), DEFAULT_OBJECT_COLOR);
    }

    #[test]
    fn inactive_overrides_any_mapping() {
        assert_eq!(color_for("sat_iss", ObjectStatus::Inactive).as_str(), INACTIVE_COLOR);
        assert_eq!(color_for("whatever", ObjectStatus::Inactive).as_str(), INACTIVE_COLOR);
    }

    #[test]
    fn configured_palette_merges_defaults() {
        let palette: Palette = serde_yaml::from_str("default: \"#ffffff\"").unwrap();
        assert_eq!(palette.color_for("nope", ObjectStatus::Active).as_str(), "#ffffff");
        assert_eq!(palette.color_for("sat_iss", ObjectStatus::Active).as_str(), "#3b82f6");
        assert_eq!(palette.color_for("nope", ObjectStatus::Inactive).as_str(), INACTIVE_COLOR);
    }

    #[test]
    fn risk_colors_are_distinct() {
        let high = risk_color(RiskLevel::High);
        assert_ne!(high, risk_color(RiskLevel::Medium));
        assert_ne!(high, risk_color(RiskLevel::Low));
    }
}
