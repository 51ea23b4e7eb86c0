use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl GeometryError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GeometryError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::invalid(name, format!("must be finite, got {}", value)))
    }
}

pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    let value = require_finite(name, value)?;
    if value < 0.0 {
        return Err(GeometryError::invalid(
            name,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(value)
}
