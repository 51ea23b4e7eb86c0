use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{require_finite, require_non_negative, GeometryError};
use super::types::{Point3, SceneScale};

pub const MIN_SEGMENTS: usize = 3;
pub const MAX_SEGMENTS: usize = 4096;
pub const DEFAULT_BASE_PERIOD_S: f64 = 20.0;
pub const DEFAULT_PERIOD_ALTITUDE_COEFFICIENT: f64 = 0.02;

// Radians of initial phase offset per km of altitude.
const PHASE_PER_KM: f64 = 0.1;

/// Animation period model: `base_period_s + altitude_km * period_altitude_coefficient`.
///
/// This is a visual proxy that grows with altitude, not a Keplerian period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnimationTiming {
    pub base_period_s: f64,
    pub period_altitude_coefficient: f64,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            base_period_s: DEFAULT_BASE_PERIOD_S,
            period_altitude_coefficient: DEFAULT_PERIOD_ALTITUDE_COEFFICIENT,
        }
    }
}

impl AnimationTiming {
    pub fn new(base_period_s: f64, period_altitude_coefficient: f64) -> Result<Self, GeometryError> {
        let base_period_s = require_finite("base_period_s", base_period_s)?;
        if base_period_s <= 0.0 {
            return Err(GeometryError::invalid(
                "base_period_s",
                format!("must be positive, got {}", base_period_s),
            ));
        }
        let period_altitude_coefficient =
            require_non_negative("period_altitude_coefficient", period_altitude_coefficient)?;
        Ok(Self {
            base_period_s,
            period_altitude_coefficient,
        })
    }

    pub fn period(&self, altitude_km: f64) -> f64 {
        self.base_period_s + altitude_km * self.period_altitude_coefficient
    }
}

/// Radius and tilt of one circular orbit in scene space.
///
/// Rings and markers are both evaluated through [`OrbitPlane::point_at`], so a
/// marker always sits on the ring drawn for the same object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPlane {
    altitude_km: f64,
    radius: f64,
    sin_inc: f64,
    cos_inc: f64,
}

impl OrbitPlane {
    pub fn new(
        altitude_km: f64,
        inclination_deg: f64,
        scene: SceneScale,
    ) -> Result<Self, GeometryError> {
        let altitude_km = require_non_negative("altitude_km", altitude_km)?;
        let inclination_deg = require_finite("inclination_deg", inclination_deg)?;
        let body_radius = require_finite("body_radius", scene.body_radius)?;
        let scale = require_finite("scale", scene.scale)?;

        let inc = inclination_deg.to_radians();
        Ok(Self {
            altitude_km,
            radius: body_radius + altitude_km * scale,
            sin_inc: inc.sin(),
            cos_inc: inc.cos(),
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn altitude_km(&self) -> f64 {
        self.altitude_km
    }

    /// Position at `angle` radians along the orbit, measured from the +x axis.
    pub fn point_at(&self, angle: f64) -> Point3 {
        let x = self.radius * angle.cos();
        let y_orb = self.radius * angle.sin();
        Point3::new(x, y_orb * self.sin_inc, y_orb * self.cos_inc)
    }

    /// Closed ring of `segments + 1` points; the last point repeats the first.
    pub fn ring(&self, segments: usize) -> Result<Vec<Point3>, GeometryError> {
        let segments = validate_segments(segments)?;
        Ok((0..=segments)
            .map(|i| self.point_at(ring_angle(i % segments, segments)))
            .collect())
    }

    pub fn marker_angle(
        &self,
        phase: f64,
        elapsed_seconds: f64,
        timing: &AnimationTiming,
    ) -> Result<f64, GeometryError> {
        let phase = require_finite("phase", phase)?;
        let elapsed_seconds = require_finite("elapsed_seconds", elapsed_seconds)?;
        Ok(phase + (elapsed_seconds / timing.period(self.altitude_km)) * TAU)
    }

    pub fn marker(
        &self,
        phase: f64,
        elapsed_seconds: f64,
        timing: &AnimationTiming,
    ) -> Result<Point3, GeometryError> {
        let angle = self.marker_angle(phase, elapsed_seconds, timing)?;
        Ok(self.point_at(angle))
    }
}

/// Ring segment counts outside `MIN_SEGMENTS..=MAX_SEGMENTS` are rejected.
pub fn validate_segments(segments: usize) -> Result<usize, GeometryError> {
    if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments) {
        return Err(GeometryError::invalid(
            "segments",
            format!(
                "must be in [{}, {}], got {}",
                MIN_SEGMENTS, MAX_SEGMENTS, segments
            ),
        ));
    }
    Ok(segments)
}

/// Angle of ring vertex `index` for a ring of `segments` segments.
pub fn ring_angle(index: usize, segments: usize) -> f64 {
    (index as f64 / segments as f64) * TAU
}

pub fn generate_orbit_ring(
    altitude_km: f64,
    inclination_deg: f64,
    segments: usize,
    body_radius: f64,
    scale: f64,
) -> Result<Vec<Point3>, GeometryError> {
    OrbitPlane::new(altitude_km, inclination_deg, SceneScale { body_radius, scale })?.ring(segments)
}

/// Marker position using the default [`AnimationTiming`].
pub fn marker_position(
    altitude_km: f64,
    inclination_deg: f64,
    phase: f64,
    elapsed_seconds: f64,
    body_radius: f64,
    scale: f64,
) -> Result<Point3, GeometryError> {
    OrbitPlane::new(altitude_km, inclination_deg, SceneScale { body_radius, scale })?.marker(
        phase,
        elapsed_seconds,
        &AnimationTiming::default(),
    )
}

pub fn orbital_period(altitude_km: f64) -> f64 {
    AnimationTiming::default().period(altitude_km)
}

/// Starting phase so that objects at different altitudes are spread around
/// their rings instead of all starting at angle zero.
pub fn default_phase(altitude_km: f64) -> f64 {
    (altitude_km * PHASE_PER_KM).rem_euclid(TAU)
}
