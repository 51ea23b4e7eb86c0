use std::f64::consts::{PI, TAU};

use serde::Serialize;
use utoipa::ToSchema;

use super::types::Point3;

const LINE_SEGMENTS: usize = 64;
const SURFACE_OFFSET: f64 = 0.002;
const STEP_DEG: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GraticuleKind {
    Latitude,
    Longitude,
    Equator,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GraticuleLine {
    pub kind: GraticuleKind,
    pub degrees: f64,
    /// Closed lines are drawn as loops, open ones as polylines.
    pub closed: bool,
    pub points: Vec<Point3>,
}

/// Latitude circles and meridians drawn just above the body surface.
pub fn graticule(body_radius: f64) -> Vec<GraticuleLine> {
    let r = body_radius + SURFACE_OFFSET;
    let mut lines = Vec::new();

    for lat in (-60..=60).step_by(STEP_DEG as usize) {
        let phi = f64::from(90 - lat).to_radians();
        let points = (0..=LINE_SEGMENTS)
            .map(|i| {
                let th = (i as f64 / LINE_SEGMENTS as f64) * TAU;
                Point3::new(r * phi.sin() * th.cos(), r * phi.cos(), r * phi.sin() * th.sin())
            })
            .collect();
        lines.push(GraticuleLine {
            kind: GraticuleKind::Latitude,
            degrees: f64::from(lat),
            closed: true,
            points,
        });
    }

    for lon in (0..180).step_by(STEP_DEG as usize) {
        let th = f64::from(lon).to_radians();
        let points = (0..=LINE_SEGMENTS)
            .map(|i| {
                let phi = (i as f64 / LINE_SEGMENTS as f64) * PI;
                Point3::new(r * phi.sin() * th.cos(), r * phi.cos(), r * phi.sin() * th.sin())
            })
            .collect();
        lines.push(GraticuleLine {
            kind: GraticuleKind::Longitude,
            degrees: f64::from(lon),
            closed: false,
            points,
        });
    }

    let equator = (0..=LINE_SEGMENTS)
        .map(|i| {
            let th = (i as f64 / LINE_SEGMENTS as f64) * TAU;
            Point3::new(r * th.cos(), 0.0, r * th.sin())
        })
        .collect();
    lines.push(GraticuleLine {
        kind: GraticuleKind::Equator,
        degrees: 0.0,
        closed: true,
        points: equator,
    });

    lines
}
