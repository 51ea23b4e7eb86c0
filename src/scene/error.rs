use thiserror::Error;

use crate::geometry::GeometryError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("{0}")]
    Geometry(#[from] GeometryError),
    #[error("object {id}: {source}")]
    Object {
        id: String,
        #[source]
        source: GeometryError,
    },
}
