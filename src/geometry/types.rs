use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A point in scene space. `y` is the axis the orbit tilts into, so a ring
/// with zero inclination has `y == 0` everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance_to(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Mapping from kilometres to scene units around a reference body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SceneScale {
    pub body_radius: f64,
    /// Scene units per kilometre of altitude.
    pub scale: f64,
}

pub const EARTH_RADIUS_KM: f64 = 6371.0;

impl Default for SceneScale {
    /// Unit-radius Earth, so one scene unit is one Earth radius.
    fn default() -> Self {
        Self {
            body_radius: 1.0,
            scale: 1.0 / EARTH_RADIUS_KM,
        }
    }
}
