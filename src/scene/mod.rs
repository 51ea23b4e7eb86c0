mod config;
mod error;
mod track;

pub use config::SceneConfig;
pub use error::SceneError;
pub use track::{Marker, OrbitTrack, Scene, SceneBuilder};
