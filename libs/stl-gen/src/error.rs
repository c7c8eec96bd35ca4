//! # Generator Errors

use stl_mesh::MeshError;
use thiserror::Error;

/// Errors raised while building a model.
#[derive(Debug, Error)]
pub enum GenError {
    /// A parameter is outside the range the model can be built from.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The mesh layer rejected the generated geometry.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl GenError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Result type alias for generators.
pub type GenResult<T> = Result<T, GenError>;

/// Rejects values that are not strictly positive and finite.
pub(crate) fn require_positive(name: &'static str, value: f64) -> GenResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GenError::invalid(name, value, "must be positive"))
    }
}
