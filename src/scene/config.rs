use serde::Deserialize;

use crate::geometry::{
    validate_segments, AnimationTiming, GeometryError, SceneScale, EARTH_RADIUS_KM,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_body_radius")]
    pub body_radius: f64,
    /// Kilometres represented by one scene unit of altitude.
    #[serde(default = "default_km_per_unit")]
    pub km_per_unit: f64,
    #[serde(default = "default_ring_segments")]
    pub ring_segments: usize,
    #[serde(default = "default_base_period_s")]
    pub base_period_s: f64,
    #[serde(default = "default_period_altitude_coefficient")]
    pub period_altitude_coefficient: f64,
}

fn default_body_radius() -> f64 {
    1.0
}

fn default_km_per_unit() -> f64 {
    EARTH_RADIUS_KM
}

fn default_ring_segments() -> usize {
    128
}

fn default_base_period_s() -> f64 {
    AnimationTiming::default().base_period_s
}

fn default_period_altitude_coefficient() -> f64 {
    AnimationTiming::default().period_altitude_coefficient
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            body_radius: default_body_radius(),
            km_per_unit: default_km_per_unit(),
            ring_segments: default_ring_segments(),
            base_period_s: default_base_period_s(),
            period_altitude_coefficient: default_period_altitude_coefficient(),
        }
    }
}

impl SceneConfig {
    pub fn scale(&self) -> Result<SceneScale, GeometryError> {
        if !self.body_radius.is_finite() {
            return Err(GeometryError::InvalidParameter {
                name: "body_radius",
                reason: format!("must be finite, got {}", self.body_radius),
            });
        }
        if !self.km_per_unit.is_finite() || self.km_per_unit <= 0.0 {
            return Err(GeometryError::InvalidParameter {
                name: "km_per_unit",
                reason: format!("must be positive, got {}", self.km_per_unit),
            });
        }
        Ok(SceneScale {
            body_radius: self.body_radius,
            scale: self.body_radius / self.km_per_unit,
        })
    }

    pub fn timing(&self) -> Result<AnimationTiming, GeometryError> {
        AnimationTiming::new(self.base_period_s, self.period_altitude_coefficient)
    }

    /// Checks every setting a request would otherwise trip over.
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.scale()?;
        self.timing()?;
        validate_segments(self.ring_segments)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_unit_earth() {
        let config: SceneConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
        let scale = config.scale().unwrap();
        assert_eq!(scale, SceneScale::default());
        assert_eq!(config.timing().unwrap(), AnimationTiming::default());
    }

    #[test]
    fn rejects_zero_km_per_unit() {
        let config = SceneConfig {
            km_per_unit: 0.0,
            ..SceneConfig::default()
        };
        assert!(config.scale().is_err());
    }

    #[test]
    fn validate_covers_radius_and_segments() {
        assert!(SceneConfig::default().validate().is_ok());

        let config: SceneConfig = serde_yaml::from_str("ring_segments: 2").unwrap();
        assert!(matches!(
            config.validate(),
            Err(GeometryError::InvalidParameter { name: "segments", .. })
        ));

        let config = SceneConfig {
            body_radius: f64::NAN,
            ..SceneConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GeometryError::InvalidParameter { name: "body_radius", .. })
        ));
    }
}
