mod error;
mod graticule;
mod orbit;
mod types;

pub use error::GeometryError;
pub use graticule::{graticule, GraticuleKind, GraticuleLine};
pub use orbit::{
    default_phase, generate_orbit_ring, marker_position, orbital_period, ring_angle,
    validate_segments, AnimationTiming, OrbitPlane, MAX_SEGMENTS, MIN_SEGMENTS,
};
pub use types::{Point3, SceneScale, EARTH_RADIUS_KM};
