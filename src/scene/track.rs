use serde::Serialize;
use utoipa::ToSchema;

use super::config::SceneConfig;
use super::error::SceneError;
use crate::catalog::TrackedObject;
use crate::geometry::{
    default_phase, validate_segments, AnimationTiming, OrbitPlane, Point3, SceneScale,
};
use crate::palette::{Color, Palette};

/// Everything the globe needs to draw one object's orbit.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrbitTrack {
    pub id: String,
    pub name: String,
    pub color: Color,
    pub radius: f64,
    pub period_s: f64,
    pub phase: f64,
    pub ring: Vec<Point3>,
    #[serde(skip)]
    plane: OrbitPlane,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Marker {
    pub id: String,
    pub position: Point3,
    pub angle: f64,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub tracks: Vec<OrbitTrack>,
    timing: AnimationTiming,
}

impl Scene {
    /// Marker positions for a frame `elapsed_seconds` after animation start.
    pub fn markers(&self, elapsed_seconds: f64) -> Result<Vec<Marker>, SceneError> {
        self.tracks
            .iter()
            .map(|track| -> Result<Marker, SceneError> {
                let angle = track
                    .plane
                    .marker_angle(track.phase, elapsed_seconds, &self.timing)?;
                Ok(Marker {
                    id: track.id.clone(),
                    position: track.plane.point_at(angle),
                    angle,
                })
            })
            .collect()
    }

    pub fn track(&self, object_id: &str) -> Option<&OrbitTrack> {
        self.tracks.iter().find(|t| t.id == object_id)
    }
}

pub struct SceneBuilder {
    scale: SceneScale,
    timing: AnimationTiming,
    segments: usize,
    palette: Palette,
}

impl SceneBuilder {
    pub fn new(config: &SceneConfig, palette: Palette) -> Result<Self, SceneError> {
        Ok(SceneBuilder {
            scale: config.scale()?,
            timing: config.timing()?,
            segments: config.ring_segments,
            palette,
        })
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub fn build(&self, objects: &[TrackedObject]) -> Result<Scene, SceneError> {
        validate_segments(self.segments)?;
        let tracks = objects
            .iter()
            .map(|obj| self.track(obj))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Built scene with {} orbit tracks", tracks.len());

        Ok(Scene {
            tracks,
            timing: self.timing,
        })
    }

    fn track(&self, obj: &TrackedObject) -> Result<OrbitTrack, SceneError> {
        let object_err = |source| SceneError::Object {
            id: obj.id.clone(),
            source,
        };
        let plane =
            OrbitPlane::new(obj.altitude_km, obj.inclination_deg, self.scale).map_err(object_err)?;
        let ring = plane.ring(self.segments).map_err(object_err)?;

        Ok(OrbitTrack {
            id: obj.id.clone(),
            name: obj.name.clone(),
            color: self.palette.color_for(&obj.id, obj.status),
            radius: plane.radius(),
            period_s: self.timing.period(obj.altitude_km),
            phase: default_phase(obj.altitude_km),
            ring,
            plane,
        })
    }
}
